//! Category list state for the dashboard.
//!
//! DESIGN
//! ======
//! Holds a transient copy of what the API returned plus the last
//! success/error banner. Request results are folded in through the
//! `apply_*` methods so the page only sequences calls.

#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

use crate::net::error::ApiError;
use crate::net::types::Category;

pub const ADD_SUCCESS: &str = "Category added successfully.";
pub const ADD_FAILURE: &str = "Failed to add category.";
pub const DELETE_SUCCESS: &str = "Category deleted successfully.";
pub const DELETE_FAILURE: &str = "Failed to delete category.";

#[derive(Clone, Debug, Default)]
pub struct CategoriesState {
    pub items: Vec<Category>,
    pub loading: bool,
    pub success: Option<String>,
    pub error: Option<String>,
}

impl CategoriesState {
    pub fn apply_loaded(&mut self, result: Result<Vec<Category>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(e) => log::warn!("categories: list failed: {e}"),
        }
    }

    pub fn apply_created(&mut self, result: Result<Category, ApiError>) {
        match result {
            Ok(category) => {
                self.items.push(category);
                self.success = Some(ADD_SUCCESS.to_owned());
                self.error = None;
            }
            Err(e) => {
                log::warn!("categories: create failed: {e}");
                self.success = None;
                self.error = Some(ADD_FAILURE.to_owned());
            }
        }
    }

    pub fn apply_deleted(&mut self, id: &str, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                self.items.retain(|category| category.id != id);
                self.success = Some(DELETE_SUCCESS.to_owned());
                self.error = None;
            }
            Err(e) => {
                log::warn!("categories: delete {id} failed: {e}");
                self.error = Some(DELETE_FAILURE.to_owned());
            }
        }
    }

    /// Active categories first, then inactive, each in arrival order.
    pub fn ordered(&self) -> Vec<Category> {
        let (active, inactive): (Vec<_>, Vec<_>) = self.items.iter().cloned().partition(|c| c.is_active);
        active.into_iter().chain(inactive).collect()
    }
}
