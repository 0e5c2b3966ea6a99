//! Durable token storage backed by browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The persisted token is the credential the route guard trusts and the one
//! attached to every category request. Only the login flow writes it.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is best-effort: when `localStorage` is missing or throws,
//! reads report no token, which makes the guard deny.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::net::error::ApiError;

/// `localStorage` key holding the session token.
pub const TOKEN_KEY: &str = "token";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Key-value home of the persisted token.
pub trait TokenStorage {
    /// The stored token, or `None` when absent or unreadable.
    fn load_token(&self) -> Option<String>;

    /// Persist `token`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if storage is missing or rejects the write.
    fn store_token(&self, token: &str) -> Result<(), StorageError>;
}

/// Stored token for an authenticated API call.
///
/// # Errors
///
/// Returns [`ApiError::MissingToken`] when nothing is stored.
pub fn require_token<S: TokenStorage + ?Sized>(storage: &S) -> Result<String, ApiError> {
    storage.load_token().ok_or(ApiError::MissingToken)
}

/// `window.localStorage`; inert outside the browser build.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStorage for BrowserStorage {
    fn load_token(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn store_token(&self, token: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage.set_item(TOKEN_KEY, token).map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(StorageError::Unavailable)
        }
    }
}

/// In-memory storage for driving flows in tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryStorage {
    token: std::cell::RefCell<Option<String>>,
    reject_writes: bool,
}

#[cfg(test)]
impl MemoryStorage {
    pub(crate) fn with_token(token: &str) -> Self {
        Self { token: std::cell::RefCell::new(Some(token.to_owned())), reject_writes: false }
    }

    pub(crate) fn read_only() -> Self {
        Self { token: std::cell::RefCell::new(None), reject_writes: true }
    }
}

#[cfg(test)]
impl TokenStorage for MemoryStorage {
    fn load_token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn store_token(&self, token: &str) -> Result<(), StorageError> {
        if self.reject_writes {
            return Err(StorageError::Write("quota exceeded".to_owned()));
        }
        *self.token.borrow_mut() = Some(token.to_owned());
        Ok(())
    }
}
