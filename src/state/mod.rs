//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `categories`, `notices`) so
//! individual components can depend on small focused models.

pub mod categories;
pub mod notices;
pub mod session;
