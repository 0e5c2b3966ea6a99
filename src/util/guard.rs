//! Access policy for protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route is wrapped in `PrivateRoute`, which asks this module
//! once per mount whether to render or bounce to `/login`.
//!
//! DESIGN
//! ======
//! `evaluate` is the pure decision. `enforce` performs the one side effect a
//! denial has (queuing the notice) and hands back the redirect target.
//!
//! The only input is the persisted token from storage. Presence of the key is
//! sufficient: an empty string is accepted, and nothing checks expiry or
//! signature. The in-memory `SessionStore` is deliberately not consulted, so a
//! session token without a stored one still denies.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::app::AppRoute;
use crate::state::notices::Notices;

/// Shown when a protected route is opened without a stored token.
pub const LOGIN_REQUIRED_NOTICE: &str = "You need to login in order to access the dashboard!";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Deny { redirect_to: AppRoute, notice: &'static str },
}

/// Decide access from the persisted token, if any.
pub fn evaluate(persisted_token: Option<&str>) -> AccessDecision {
    match persisted_token {
        Some(_) => AccessDecision::Allow,
        None => AccessDecision::Deny { redirect_to: AppRoute::Login, notice: LOGIN_REQUIRED_NOTICE },
    }
}

/// Apply a decision: on denial queue its notice once and return where to go.
pub fn enforce(decision: &AccessDecision, notices: &mut Notices) -> Option<AppRoute> {
    match decision {
        AccessDecision::Allow => None,
        AccessDecision::Deny { redirect_to, notice } => {
            log::info!("guard: denied, redirecting to {}", redirect_to.path());
            notices.error(*notice);
            Some(redirect_to.clone())
        }
    }
}
