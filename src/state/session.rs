//! In-memory auth session: the last issued token and the last auth error.
//!
//! DESIGN
//! ======
//! `Session` is an immutable snapshot and `Session::apply` is the only
//! transition, a pure reducer over the closed `SessionEvent` set. The
//! `SessionStore` owns the current snapshot for the lifetime of the app and
//! exposes `read`/`subscribe`; callers never touch the fields directly.
//!
//! The store is NOT what protects routes. The route guard reads the persisted
//! token from browser storage (see `util::guard`), and the two are written
//! separately by the login flow. They can disagree, e.g. after a reload (the
//! store starts empty while storage still holds a token) or after a
//! registration (the store holds the empty placeholder token while storage
//! holds nothing).

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Snapshot of the current auth session.
///
/// `token` and `error` are never both set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub error: Option<String>,
}

/// The two inputs that move a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// Login or registration succeeded. Registration carries an empty token
    /// because the register endpoint does not issue one.
    Success(String),
    /// Login or registration was rejected or could not complete.
    Failure(String),
}

impl Session {
    /// Compute the session that follows `event`.
    #[must_use]
    pub fn apply(&self, event: &SessionEvent) -> Session {
        match event {
            SessionEvent::Success(token) => Session { token: Some(token.clone()), error: None },
            SessionEvent::Failure(message) => Session { token: None, error: Some(message.clone()) },
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&Session) + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

/// Process-wide session container.
///
/// Cloning shares the same underlying session; the app creates one at
/// startup and hands clones out through Leptos context.
#[derive(Clone, Default)]
pub struct SessionStore {
    current: Arc<RwLock<Session>>,
    listeners: Arc<Mutex<Listeners>>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").field("current", &self.read()).finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Create a store with no token and no error.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current session snapshot.
    pub fn read(&self) -> Session {
        self.current.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Apply `event` and notify subscribers with the resulting snapshot.
    ///
    /// Listeners run after both locks are released, so a listener may call
    /// back into the store.
    pub fn dispatch(&self, event: SessionEvent) {
        let next = {
            let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
            *current = current.apply(&event);
            current.clone()
        };
        match &event {
            SessionEvent::Success(_) => log::debug!("session: success"),
            SessionEvent::Failure(message) => log::debug!("session: failure ({message})"),
        }

        let listeners: Vec<Listener> = {
            let guard = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
            guard.entries.iter().map(|(_, listener)| Arc::clone(listener)).collect()
        };
        for listener in listeners {
            listener(&next);
        }
    }

    /// Register `listener` to be called after every transition.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&Session) + Send + Sync + 'static,
    {
        let mut guard = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        let id = SubscriptionId(guard.next_id);
        guard.next_id += 1;
        guard.entries.push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        let mut guard = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        guard.entries.retain(|(entry_id, _)| *entry_id != id);
    }
}
