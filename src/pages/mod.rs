//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page pairs an async submit/load function (tested against stub APIs
//! and in-memory storage) with the component that wires it to the DOM.

pub mod category_details;
pub mod category_edit;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod register;
