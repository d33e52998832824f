//! File-backed SessionStore implementation.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use waypoint_core::config::AppConfig;
use waypoint_core::error::{Result, WaypointError};
use waypoint_core::persistence::{SessionStore, StorageKey};

use crate::paths::WaypointPaths;
use crate::storage::AtomicJsonFile;

/// Stores each planner snapshot as its own JSON file.
///
/// Directory structure:
/// ```text
/// base_dir/
/// ├── cruiseBudget.json
/// ├── packingChecklist.json
/// ├── cruiseItinerary.json
/// └── destinationComparison.json
/// ```
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    base_dir: PathBuf,
}

impl FileSessionStore {
    /// Creates a store rooted at `base_dir`, creating the directory if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&base_dir).map_err(|e| {
            WaypointError::io(format!(
                "failed to create snapshot directory {}: {}",
                base_dir.display(),
                e
            ))
        })?;
        Ok(Self { base_dir })
    }

    /// Creates a store in the configured or default snapshot directory.
    pub fn default_location(config: &AppConfig) -> Result<Self> {
        Self::new(WaypointPaths::snapshot_dir(config)?)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn file_for(&self, key: StorageKey) -> AtomicJsonFile {
        AtomicJsonFile::new(self.base_dir.join(format!("{}.json", key)))
    }
}

/// Runs blocking file work off the async executor.
async fn blocking<T, F>(work: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| WaypointError::internal(format!("storage task failed: {}", e)))?
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load_raw(&self, key: StorageKey) -> Result<Option<String>> {
        let file = self.file_for(key);
        blocking(move || file.read()).await
    }

    async fn save_raw(&self, key: StorageKey, value: &str) -> Result<()> {
        let file = self.file_for(key);
        let value = value.to_string();
        blocking(move || file.write(&value)).await?;
        tracing::debug!("Wrote {} to {}", key, self.base_dir.display());
        Ok(())
    }

    async fn remove(&self, key: StorageKey) -> Result<()> {
        let file = self.file_for(key);
        blocking(move || file.remove()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_round_trip_per_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path().join("snapshots")).unwrap();

        store
            .save_raw(StorageKey::BUDGET, r#"{"state":{},"timestamp":"x"}"#)
            .await
            .unwrap();
        assert!(store.load_raw(StorageKey::PACKING).await.unwrap().is_none());
        assert_eq!(
            store.load_raw(StorageKey::BUDGET).await.unwrap().as_deref(),
            Some(r#"{"state":{},"timestamp":"x"}"#)
        );
        assert!(temp_dir.path().join("snapshots/cruiseBudget.json").exists());
    }

    #[tokio::test]
    async fn test_remove() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path()).unwrap();
        store.save_raw(StorageKey::PACKING, "{}").await.unwrap();
        store.remove(StorageKey::PACKING).await.unwrap();
        assert!(store.load_raw(StorageKey::PACKING).await.unwrap().is_none());
        store.remove(StorageKey::PACKING).await.unwrap();
    }
}
