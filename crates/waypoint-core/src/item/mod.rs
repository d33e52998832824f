//! Line item domain module.
//!
//! Every planner derives a list of rows from its configuration and then lets
//! the user edit that list. This module holds the shared row type and the
//! list operations.
//!
//! # Module Structure
//!
//! - `model`: `LineItem`, the `LineDetail` payload trait, `CategoryGroup`
//! - `list`: `ItemList`, the editable collection

mod list;
mod model;

pub use list::{DEFAULT_CUSTOM_CATEGORY, ItemList};
pub use model::{CategoryGroup, LineDetail, LineItem};
