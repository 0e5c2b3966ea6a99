use futures::executor::block_on;

use super::*;
use crate::net::api::StubApi;
use crate::util::storage::MemoryStorage;

#[test]
fn fetch_category_reads_data_envelope() {
    let api = StubApi::responding(200, serde_json::json!({"data": {"id": "c-1", "name": "Books", "is_active": false}}));

    let category = block_on(fetch_category(&api, &MemoryStorage::with_token("abc"), "c-1")).unwrap();

    assert_eq!(category.name, "Books");
    assert_eq!(category.status_label(), "Inactive");
    assert_eq!(api.last_token.borrow().as_deref(), Some("abc"));
}

#[test]
fn fetch_category_requires_token() {
    let api = StubApi::responding(200, serde_json::json!({}));
    let result = block_on(fetch_category(&api, &MemoryStorage::default(), "c-1"));
    assert_eq!(result, Err(ApiError::MissingToken));
}

#[test]
fn fetch_category_surfaces_not_found() {
    let api = StubApi::responding(404, serde_json::json!({"error": "Category not found"}));
    let result = block_on(fetch_category(&api, &MemoryStorage::with_token("abc"), "missing"));
    assert_eq!(result, Err(ApiError::Status { status: 404, message: Some("Category not found".to_owned()) }));
}
