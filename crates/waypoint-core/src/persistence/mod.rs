//! Persistence domain module.
//!
//! Planners keep their working state in a small key-value store, one key per
//! planner, and restore it on mount if it is recent enough.
//!
//! # Module Structure
//!
//! - `model`: `Snapshot`, `StorageKey`, `FreshnessWindow`, clocks
//! - `repository`: `SessionStore` trait for the backing store
//! - `vault`: `SessionVault`, the shared load/save policy

mod model;
pub mod repository;
mod vault;

pub use model::{Clock, FixedClock, FreshnessWindow, Snapshot, StorageKey, SystemClock};
pub use repository::SessionStore;
pub use vault::SessionVault;
