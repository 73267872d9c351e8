// Contract tests for the tax entry API
//
// Validates status codes and JSON body shapes for:
// - GET  /api/tax-entry   -> 200 array of entries
// - POST /api/tax-entry   -> 200 saved / 400 conflict / 500 server error
// - GET  /health, /ready

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use actix_web::{http::StatusCode, test};
use async_trait::async_trait;
use helpers::*;
use serde_json::{json, Value};
use taxdesk::core::{AppError, Result};
use taxdesk::taxes::{TaxEntry, TaxEntryRepository};

/// Repository whose writes always fail
struct ReadOnlyRepository;

#[async_trait]
impl TaxEntryRepository for ReadOnlyRepository {
    async fn read_all(&self) -> Vec<TaxEntry> {
        Vec::new()
    }

    async fn write_all(&self, _entries: &[TaxEntry]) -> Result<()> {
        Err(AppError::Storage(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only filesystem",
        )))
    }

    async fn probe(&self) -> Result<()> {
        Err(AppError::Storage(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only filesystem",
        )))
    }
}

#[actix_web::test]
async fn test_list_empty_is_array() {
    let app = test::init_service(build_app(memory_service())).await;

    let req = test::TestRequest::get().uri("/api/tax-entry").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn test_save_response_schema() {
    let app = test::init_service(build_app(memory_service())).await;

    let req = test::TestRequest::post()
        .uri("/api/tax-entry")
        .set_json(TestDataFactory::gst_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["success"].is_boolean());
    assert!(body["message"].is_string());
    assert_saved(&body);
}

#[actix_web::test]
async fn test_listed_entry_schema() {
    let app = test::init_service(build_app(memory_service())).await;

    let req = test::TestRequest::post()
        .uri("/api/tax-entry")
        .set_json(TestDataFactory::with_edit_intent(
            TestDataFactory::gst_payload(),
            false,
        ))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/api/tax-entry").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let entries = body.as_array().expect("list must be an array");
    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    for field in ["taxCode", "taxName", "taxValue", "typeCode", "category", "valueType", "ledgerName"] {
        assert!(entry[field].is_string(), "{} must be a string", field);
    }
    assert!(entry.get("isEditing").is_none(), "edit intent is never stored");
    assert_eq!(entry, &TestDataFactory::gst_payload());
}

#[actix_web::test]
async fn test_conflict_schema() {
    let app = test::init_service(build_app(memory_service())).await;

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/tax-entry")
            .set_json(TestDataFactory::gst_payload())
            .to_request();
        let resp = test::call_service(&app, req).await;
        if resp.status() == StatusCode::BAD_REQUEST {
            let body: Value = test::read_body_json(resp).await;
            assert_failure(&body, "Tax entry already exists. Please edit instead!");
            return;
        }
    }
    panic!("second save of the same taxCode must conflict");
}

#[actix_web::test]
async fn test_invalid_json_is_server_error() {
    let app = test::init_service(build_app(memory_service())).await;

    let req = test::TestRequest::post()
        .uri("/api/tax-entry")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"taxCode\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_failure(&body, "Server Error!");
}

#[actix_web::test]
async fn test_body_without_json_content_type_is_accepted() {
    let app = test::init_service(build_app(memory_service())).await;

    let req = test::TestRequest::post()
        .uri("/api/tax-entry")
        .insert_header(("content-type", "text/plain;charset=UTF-8"))
        .set_payload(TestDataFactory::gst_payload().to_string())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_saved(&body);
}

#[actix_web::test]
async fn test_numeric_tax_value_is_saved_as_text() {
    let app = test::init_service(build_app(memory_service())).await;

    let mut payload = TestDataFactory::gst_payload();
    payload["taxValue"] = json!(18);
    let req = test::TestRequest::post()
        .uri("/api/tax-entry")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/tax-entry").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_json_field_eq(&body[0], "taxValue", "18");
}

#[actix_web::test]
async fn test_unknown_enum_value_is_server_error() {
    let app = test::init_service(build_app(memory_service())).await;

    let mut payload = TestDataFactory::gst_payload();
    payload["typeCode"] = json!("multiply");
    let req = test::TestRequest::post()
        .uri("/api/tax-entry")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn test_blank_tax_code_is_server_error() {
    let app = test::init_service(build_app(memory_service())).await;

    let mut payload = TestDataFactory::gst_payload();
    payload["taxCode"] = json!("");
    let req = test::TestRequest::post()
        .uri("/api/tax-entry")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_failure(&body, "Server Error!");
}

#[actix_web::test]
async fn test_write_failure_is_server_error() {
    let app = test::init_service(build_app(service_over(Arc::new(ReadOnlyRepository)))).await;

    let req = test::TestRequest::post()
        .uri("/api/tax-entry")
        .set_json(TestDataFactory::gst_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_failure(&body, "Server Error!");
}

#[actix_web::test]
async fn test_readiness_reports_unusable_storage() {
    let app = test::init_service(build_app(service_over(Arc::new(ReadOnlyRepository)))).await;

    let req = test::TestRequest::get().uri("/ready").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["ready"], false);
    assert_eq!(body["checks"]["storage"], false);
}

#[actix_web::test]
async fn test_health_schema() {
    let app = test::init_service(build_app(memory_service())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_json_field_eq(&body, "status", "healthy");
    assert!(body["timestamp"].is_string());
}
