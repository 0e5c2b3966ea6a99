use futures::executor::block_on;

use super::*;
use crate::net::api::StubApi;
use crate::net::error::GENERIC_FAILURE;
use crate::state::session::Session;
use crate::util::storage::MemoryStorage;
use crate::util::validation::{LOGIN_EMAIL_INVALID, LOGIN_PASSWORD_TOO_SHORT};

fn valid_form() -> LoginForm {
    LoginForm { email: "test@example.com".to_owned(), password: "password123".to_owned() }
}

// =============================================================
// Success
// =============================================================

#[test]
fn login_success_persists_token_updates_session_and_navigates() {
    let api = StubApi::responding(200, serde_json::json!({"data": {"token": "abc"}}));
    let storage = MemoryStorage::default();
    let store = SessionStore::new();

    let outcome = block_on(submit_login(&api, &storage, &store, &valid_form()));

    assert_eq!(outcome, LoginOutcome::Navigate(AppRoute::Dashboard));
    assert_eq!(storage.load_token().as_deref(), Some("abc"));
    assert_eq!(store.read(), Session { token: Some("abc".to_owned()), error: None });
    assert_eq!(api.calls.get(), 1);
}

#[test]
fn login_success_clears_previous_error() {
    let api = StubApi::responding(200, serde_json::json!({"data": {"token": "abc"}}));
    let store = SessionStore::new();
    store.dispatch(SessionEvent::Failure("old".to_owned()));

    block_on(submit_login(&api, &MemoryStorage::default(), &store, &valid_form()));

    assert_eq!(store.read().error, None);
}

#[test]
fn storage_write_failure_still_records_session() {
    let api = StubApi::responding(200, serde_json::json!({"data": {"token": "abc"}}));
    let storage = MemoryStorage::read_only();
    let store = SessionStore::new();

    let outcome = block_on(submit_login(&api, &storage, &store, &valid_form()));

    // The two writes are independent: memory says signed in, storage does not.
    assert_eq!(outcome, LoginOutcome::Navigate(AppRoute::Dashboard));
    assert_eq!(store.read().token.as_deref(), Some("abc"));
    assert_eq!(storage.load_token(), None);
}

// =============================================================
// Rejection
// =============================================================

#[test]
fn login_rejection_records_server_error_without_navigation() {
    let api = StubApi::responding(401, serde_json::json!({"error": "Invalid credentials"}));
    let storage = MemoryStorage::default();
    let store = SessionStore::new();

    let outcome = block_on(submit_login(&api, &storage, &store, &valid_form()));

    assert_eq!(outcome, LoginOutcome::Rejected("Invalid credentials".to_owned()));
    assert_eq!(store.read(), Session { token: None, error: Some("Invalid credentials".to_owned()) });
    assert_eq!(storage.load_token(), None);
}

#[test]
fn login_rejection_without_body_uses_fallback() {
    let api = StubApi::responding(500, serde_json::json!({}));
    let store = SessionStore::new();

    let outcome = block_on(submit_login(&api, &MemoryStorage::default(), &store, &valid_form()));

    assert_eq!(outcome, LoginOutcome::Rejected("Failed to login.".to_owned()));
    assert_eq!(store.read().error.as_deref(), Some(LOGIN_REJECTED));
}

#[test]
fn malformed_success_body_uses_generic_message() {
    let api = StubApi::responding(200, serde_json::json!({"data": {}}));
    let store = SessionStore::new();

    let outcome = block_on(submit_login(&api, &MemoryStorage::default(), &store, &valid_form()));

    assert_eq!(outcome, LoginOutcome::Rejected(GENERIC_FAILURE.to_owned()));
    assert_eq!(store.read().token, None);
}

#[test]
fn login_failure_clears_existing_session_token() {
    let api = StubApi::responding(401, serde_json::json!({"error": "Invalid credentials"}));
    let storage = MemoryStorage::with_token("kept");
    let store = SessionStore::new();
    store.dispatch(SessionEvent::Success("kept".to_owned()));

    block_on(submit_login(&api, &storage, &store, &valid_form()));

    // Memory is cleared, the persisted token is left alone.
    assert_eq!(store.read().token, None);
    assert_eq!(storage.load_token().as_deref(), Some("kept"));
}

// =============================================================
// Validation
// =============================================================

#[test]
fn invalid_form_sends_nothing_and_leaves_session_alone() {
    let api = StubApi::responding(200, serde_json::json!({"data": {"token": "abc"}}));
    let store = SessionStore::new();
    let form = LoginForm { email: "nope".to_owned(), password: "short".to_owned() };

    let outcome = block_on(submit_login(&api, &MemoryStorage::default(), &store, &form));

    assert_eq!(
        outcome,
        LoginOutcome::Invalid(LoginErrors { email: Some(LOGIN_EMAIL_INVALID), password: Some(LOGIN_PASSWORD_TOO_SHORT) })
    );
    assert_eq!(api.calls.get(), 0);
    assert_eq!(store.read(), Session::default());
}
