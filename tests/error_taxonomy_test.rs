// ABOUTME: Integration tests for the error taxonomy and HTTP response mapping
// ABOUTME: Validates status codes, the JSON error envelope, and upstream classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use axum::http::StatusCode;
use axum::response::IntoResponse;
use mitten_index::errors::{AppError, ErrorCode, ErrorResponse};

#[test]
fn test_validation_errors_map_to_400() {
    assert_eq!(
        AppError::invalid_input("bad").into_response().status(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        AppError::missing_field("lat").into_response().status(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        AppError::out_of_range("too far").into_response().status(),
        StatusCode::BAD_REQUEST
    );
}

#[test]
fn test_missing_geocode_match_is_not_found_not_generic() {
    let error = AppError::not_found("location 'Atlantis'");
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert_eq!(error.into_response().status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_upstream_failures_distinguish_retryable_from_permanent() {
    // A provider error response is a bad gateway
    let error = AppError::external_service("Open-Meteo", "status 500");
    assert_eq!(error.into_response().status(), StatusCode::BAD_GATEWAY);

    // A timeout or connection failure is retryable-unavailable
    let error = AppError::external_unavailable("Open-Meteo");
    assert_eq!(
        error.into_response().status(),
        StatusCode::SERVICE_UNAVAILABLE
    );
}

#[test]
fn test_internal_errors_stay_opaque() {
    let error: AppError = anyhow::anyhow!("connection pool exhausted at worker 3").into();
    assert_eq!(error.code, ErrorCode::InternalError);
    assert_eq!(
        error.into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn test_error_envelope_shape() {
    let response = ErrorResponse::from(
        AppError::missing_field("q").with_details(serde_json::json!({ "field": "q" })),
    );
    let json = serde_json::to_value(&response).unwrap();

    let error = json.get("error").unwrap();
    assert_eq!(
        error.get("code").unwrap().as_str().unwrap(),
        "MISSING_REQUIRED_FIELD"
    );
    assert!(error
        .get("message")
        .unwrap()
        .as_str()
        .unwrap()
        .contains("'q'"));
    assert_eq!(
        error.get("details").unwrap().get("field").unwrap(),
        &serde_json::json!("q")
    );
}

#[test]
fn test_display_includes_description_and_message() {
    let error = AppError::external_service("Open-Meteo", "status 502");
    let rendered = error.to_string();
    assert!(rendered.contains("external service"));
    assert!(rendered.contains("Open-Meteo"));
}
