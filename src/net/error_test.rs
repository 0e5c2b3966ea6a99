use super::*;

#[test]
fn server_message_prefers_status_body() {
    let err = ApiError::Status { status: 401, message: Some("Invalid credentials".to_owned()) };
    assert_eq!(err.server_message(), Some("Invalid credentials"));
    assert_eq!(err.user_message("Failed to login."), "Invalid credentials");
}

#[test]
fn blank_server_message_uses_rejection_fallback() {
    let err = ApiError::Status { status: 500, message: Some("  ".to_owned()) };
    assert_eq!(err.server_message(), None);
    assert_eq!(err.user_message("Failed to login."), "Failed to login.");
}

#[test]
fn bare_status_uses_rejection_fallback() {
    let err = ApiError::Status { status: 403, message: None };
    assert_eq!(err.user_message("Registration failed."), "Registration failed.");
}

#[test]
fn transport_failures_use_generic_message() {
    for err in [
        ApiError::Network("offline".to_owned()),
        ApiError::Decode("eof".to_owned()),
        ApiError::MissingToken,
        ApiError::Unavailable,
    ] {
        assert_eq!(err.user_message("Failed to login."), GENERIC_FAILURE);
    }
}

#[test]
fn display_includes_status_code() {
    let err = ApiError::Status { status: 404, message: None };
    assert_eq!(err.to_string(), "server responded with status 404");
}
