//! Tax entry controller for HTTP endpoints
//!
//! Backs the tax-entry form: a list route the page re-fetches after every
//! save, and a save route that creates or explicitly updates one entry.

use std::sync::Arc;

use actix_web::{http::header::ContentType, web, HttpResponse};

use crate::core::error::AppError;
use crate::middleware::json_error_handler;
use crate::modules::taxes::models::{SaveOutcome, SaveResponse, SaveTaxEntryRequest};
use crate::modules::taxes::services::TaxEntryService;

/// List all tax entries
///
/// GET /tax-entry
pub async fn list_tax_entries(
    service: web::Data<Arc<TaxEntryService>>,
) -> Result<HttpResponse, AppError> {
    let entries = service.list_all().await;
    let body = serde_json::to_vec(&entries).map_err(|e| AppError::fetch(e.to_string()))?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(body))
}

/// Create a tax entry, or update one when `isEditing` is set
///
/// POST /tax-entry
pub async fn save_tax_entry(
    service: web::Data<Arc<TaxEntryService>>,
    request: web::Json<SaveTaxEntryRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let tax_code = request.entry.tax_code.clone();
    tracing::debug!(tax_code = %tax_code, is_editing = request.is_editing, "Received tax entry");

    match service.save(request).await? {
        SaveOutcome::Created | SaveOutcome::Updated => Ok(HttpResponse::Ok().json(SaveResponse::saved())),
        SaveOutcome::Conflict => Err(AppError::conflict(tax_code)),
    }
}

/// Configure tax entry routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tax-entry")
            .app_data(
                web::JsonConfig::default()
                    .content_type_required(false)
                    .error_handler(json_error_handler),
            )
            .route("", web::get().to(list_tax_entries))
            .route("", web::post().to(save_tax_entry)),
    );
}
