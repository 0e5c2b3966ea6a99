//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render cross-page chrome (toasts, route gating, inline field
//! errors) while reading/writing shared state from Leptos context providers.

pub mod field_error;
pub mod private_route;
pub mod toast_host;
