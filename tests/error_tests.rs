// Error handling tests
// Author: kelexine (https://github.com/kelexine)

use lingo_relay::error::TranslateError;

#[test]
fn test_error_display_messages() {
    let errors = vec![
        TranslateError::Cancelled,
        TranslateError::HttpStatus(502),
        TranslateError::Service("bad source".to_string()),
        TranslateError::Config("endpoint pool is empty".to_string()),
        TranslateError::Internal("boom".to_string()),
    ];

    for error in errors {
        let display = format!("{}", error);
        assert!(!display.is_empty(), "Error should have display message");
    }
}

#[test]
fn test_http_status_error_cites_code() {
    let error = TranslateError::HttpStatus(404);
    assert_eq!(error.to_string(), "response status: 404");
    assert_eq!(error.status_code(), Some(404));
}

#[test]
fn test_service_error_is_verbatim() {
    let error = TranslateError::Service("unsupported language".to_string());
    assert_eq!(error.to_string(), "unsupported language");
    assert_eq!(error.status_code(), None);
}

#[test]
fn test_decode_error_wraps_cause() {
    let cause = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
    let error = TranslateError::Decode(cause);
    assert!(error.to_string().starts_with("Response parsing error"));
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_cancelled_counts_as_transport() {
    assert!(TranslateError::Cancelled.is_transport());
    assert!(!TranslateError::Cancelled.is_timeout());
    assert!(!TranslateError::HttpStatus(500).is_transport());
}

#[test]
fn test_error_kinds() {
    assert_eq!(TranslateError::Cancelled.kind(), "cancelled");
    assert_eq!(TranslateError::HttpStatus(429).kind(), "http_status");
    assert_eq!(TranslateError::Service(String::new()).kind(), "service");
}
