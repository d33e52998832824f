//! In-memory SessionStore, used by tests and `--ephemeral` runs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use waypoint_core::error::{Result, WaypointError};
use waypoint_core::persistence::{SessionStore, StorageKey};

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw value, bypassing serialization.
    pub fn with_entry(self, key: StorageKey, value: impl Into<String>) -> Self {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.as_str().to_string(), value.into());
        }
        self
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> WaypointError {
    WaypointError::internal("memory store lock poisoned")
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load_raw(&self, key: StorageKey) -> Result<Option<String>> {
        let entries = self.entries.read().map_err(|_| poisoned())?;
        Ok(entries.get(key.as_str()).cloned())
    }

    async fn save_raw(&self, key: StorageKey, value: &str) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        entries.insert(key.as_str().to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: StorageKey) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        entries.remove(key.as_str());
        Ok(())
    }
}
