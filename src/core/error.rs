use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Client-facing message for conflicts on an existing tax code
pub const CONFLICT_MESSAGE: &str = "Tax entry already exists. Please edit instead!";

/// Client-facing message for every failed save that is not a conflict
pub const SERVER_ERROR_MESSAGE: &str = "Server Error!";

/// Client-facing message for a failed listing
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching data";

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Duplicate tax code submitted without edit intent
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Presence checks on a save request
    #[error("Validation error: {0}")]
    Validation(String),

    /// Request body could not be decoded
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// Backing store I/O errors
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Listing could not be produced
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    /// Message returned to the client. Internal detail stays in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::Conflict(_) => CONFLICT_MESSAGE,
            AppError::Fetch(_) => FETCH_ERROR_MESSAGE,
            _ => SERVER_ERROR_MESSAGE,
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        if status_code.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        HttpResponse::build(status_code).json(serde_json::json!({
            "success": false,
            "message": self.public_message(),
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            // Bad bodies share the generic server-error response
            AppError::Validation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MalformedBody(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Fetch(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn conflict(tax_code: impl Into<String>) -> Self {
        AppError::Conflict(tax_code.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn malformed_body(msg: impl Into<String>) -> Self {
        AppError::MalformedBody(msg.into())
    }

    pub fn fetch(msg: impl Into<String>) -> Self {
        AppError::Fetch(msg.into())
    }
}
