use crate::ClientError;

use mf_core::{CoreError, GENERIC_ERROR_MESSAGE, UserUpdate};

#[test]
fn test_api_error_surfaces_message_verbatim() {
    let err = ClientError::api_error(422, "Username is required");
    assert_eq!(err.user_message(), "Username is required");
}

#[test]
fn test_status_error_surfaces_fallback() {
    let err = ClientError::status_error(500, "<html>oops</html>");
    assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
}

#[test]
fn test_json_error_surfaces_fallback() {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = ClientError::from_json(source);
    assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
}

#[test]
fn test_invalid_url_surfaces_fallback() {
    let err = ClientError::invalid_url("::");
    assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
}

#[test]
fn test_validation_error_explains_itself() {
    let source = UserUpdate::default().validate().unwrap_err();
    assert!(matches!(source, CoreError::Validation { .. }));

    let err = ClientError::from(source);
    assert!(err.user_message().contains("at least one of"));
}

#[test]
fn test_display_carries_location_for_logs() {
    let err = ClientError::api_error(400, "bad");
    let display = err.to_string();
    assert!(display.contains("bad"));
    assert!(display.contains("400"));
}
