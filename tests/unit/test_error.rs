use reqwest::StatusCode;
use std::error::Error;
use superclouds::error::AppError;

#[test]
fn test_app_error_display_configuration() {
    let error = AppError::Configuration("missing SUPER_TOKEN environment variable".to_string());
    assert_eq!(
        error.to_string(),
        "configuration error: missing SUPER_TOKEN environment variable"
    );
}

#[test]
fn test_app_error_display_tls_setup() {
    let error = AppError::TlsSetup("failed to load key pair".to_string());
    assert_eq!(error.to_string(), "tls setup error: failed to load key pair");
}

#[test]
fn test_app_error_display_api_carries_status_text() {
    let error = AppError::Api {
        context: "delete user",
        status: StatusCode::NOT_FOUND,
    };
    assert_eq!(error.to_string(), "failed to delete user: 404 Not Found");
    assert_eq!(error.status(), Some(StatusCode::NOT_FOUND));
}

#[test]
fn test_app_error_deserialization_keeps_source() {
    let serde_error = serde_json::from_str::<serde_json::Value>(r#"{"invalid": json}"#).unwrap_err();
    let app_error = AppError::Deserialization(serde_error);

    assert!(app_error.to_string().starts_with("deserialization error:"));
    assert!(app_error.source().is_some());
    assert_eq!(app_error.status(), None);
}

#[test]
fn test_app_error_configuration_has_no_source() {
    let error = AppError::Configuration("x".to_string());
    assert!(error.source().is_none());
}
