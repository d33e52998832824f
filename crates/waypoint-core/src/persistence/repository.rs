//! Session store trait.
//!
//! Defines the interface for the small key-value store planners persist into.

use async_trait::async_trait;

use super::model::StorageKey;
use crate::error::Result;

/// A key-value store holding one serialized snapshot per planner.
///
/// Implementations only move text around. Parsing, freshness and failure
/// policy live in [`SessionVault`](super::SessionVault).
///
/// There is no cross-process coordination: two writers on the same key
/// overwrite each other and the last write wins.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Reads the raw value stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(String))`: A value is stored
    /// - `Ok(None)`: Nothing stored under this key
    /// - `Err(_)`: The store itself failed
    async fn load_raw(&self, key: StorageKey) -> Result<Option<String>>;

    /// Overwrites the value stored under `key`.
    async fn save_raw(&self, key: StorageKey, value: &str) -> Result<()>;

    /// Deletes the value stored under `key`. Missing keys are not an error.
    async fn remove(&self, key: StorageKey) -> Result<()>;
}
