//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs REST calls, `error` classifies their failures, and `types`
//! defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
