use futures::executor::block_on;

use super::*;
use crate::net::api::StubApi;
use crate::state::categories::{ADD_SUCCESS, DELETE_FAILURE};
use crate::util::storage::MemoryStorage;

fn draft() -> CategoryDraft {
    CategoryDraft { name: "Books".to_owned(), is_active: true }
}

// =============================================================
// load_categories
// =============================================================

#[test]
fn load_skips_request_without_token() {
    let api = StubApi::responding(200, serde_json::json!({"data": []}));
    let result = block_on(load_categories(&api, &MemoryStorage::default()));
    assert!(result.is_none());
    assert_eq!(api.calls.get(), 0);
}

#[test]
fn load_sends_stored_token() {
    let api = StubApi::responding(
        200,
        serde_json::json!({"data": [{"id": "1", "name": "Books", "is_active": true}]}),
    );
    let result = block_on(load_categories(&api, &MemoryStorage::with_token("abc")));

    assert_eq!(result.unwrap().unwrap().len(), 1);
    assert_eq!(api.last_token.borrow().as_deref(), Some("abc"));
}

// =============================================================
// add / remove
// =============================================================

#[test]
fn add_category_appends_to_state() {
    let api = StubApi::responding(200, serde_json::json!({"data": {"id": 7, "name": "Books", "is_active": true}}));
    let mut state = CategoriesState::default();

    state.apply_created(block_on(add_category(&api, &MemoryStorage::with_token("abc"), &draft())));

    assert_eq!(state.items, vec![Category { id: "7".to_owned(), name: "Books".to_owned(), is_active: true }]);
    assert_eq!(state.success.as_deref(), Some(ADD_SUCCESS));
}

#[test]
fn add_category_without_token_fails_before_request() {
    let api = StubApi::responding(200, serde_json::json!({}));
    let result = block_on(add_category(&api, &MemoryStorage::default(), &draft()));
    assert_eq!(result, Err(ApiError::MissingToken));
    assert_eq!(api.calls.get(), 0);
}

#[test]
fn remove_category_failure_keeps_row() {
    let api = StubApi::responding(500, serde_json::json!({"error": "boom"}));
    let mut state = CategoriesState {
        items: vec![Category { id: "1".to_owned(), name: "Books".to_owned(), is_active: true }],
        ..CategoriesState::default()
    };

    let result = block_on(remove_category(&api, &MemoryStorage::with_token("abc"), "1"));
    state.apply_deleted("1", result);

    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error.as_deref(), Some(DELETE_FAILURE));
}

// =============================================================
// session_label
// =============================================================

#[test]
fn session_label_distinguishes_fresh_and_restored_sessions() {
    let fresh = Session { token: Some("abc".to_owned()), error: None };
    assert_eq!(session_label(&fresh), "Signed in");
    assert_eq!(session_label(&Session::default()), "Signed in (saved session)");
    let registered = Session { token: Some(String::new()), error: None };
    assert_eq!(session_label(&registered), "Signed in (saved session)");
}
