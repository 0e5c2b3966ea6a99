use super::*;

#[test]
fn token_key_is_token() {
    assert_eq!(TOKEN_KEY, "token");
}

#[test]
fn browser_storage_reads_nothing_natively() {
    assert_eq!(BrowserStorage.load_token(), None);
}

#[test]
fn browser_storage_write_is_unavailable_natively() {
    assert_eq!(BrowserStorage.store_token("abc"), Err(StorageError::Unavailable));
}

#[test]
fn memory_storage_round_trips_and_overwrites() {
    let storage = MemoryStorage::default();
    assert_eq!(storage.load_token(), None);
    storage.store_token("first").unwrap();
    storage.store_token("second").unwrap();
    assert_eq!(storage.load_token().as_deref(), Some("second"));
}

#[test]
fn read_only_memory_storage_rejects_writes() {
    let storage = MemoryStorage::read_only();
    assert!(matches!(storage.store_token("abc"), Err(StorageError::Write(_))));
    assert_eq!(storage.load_token(), None);
}

#[test]
fn require_token_reports_missing_token() {
    assert_eq!(require_token(&MemoryStorage::default()), Err(ApiError::MissingToken));
    assert_eq!(require_token(&MemoryStorage::with_token("abc")), Ok("abc".to_owned()));
}
