//! Snapshot persistence policy.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use super::model::{FreshnessWindow, Snapshot, StorageKey};
use super::repository::SessionStore;
use crate::error::Result;

/// Reads and writes planner snapshots through a [`SessionStore`].
///
/// All planners share this type, so the JSON format, the freshness check and
/// the handling of unreadable data are the same everywhere. Only the window
/// differs per planner.
#[derive(Clone)]
pub struct SessionVault {
    store: Arc<dyn SessionStore>,
}

impl SessionVault {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Restores the state stored under `key` if it is still fresh.
    ///
    /// Unreadable, malformed and stale values all yield `None`; nothing is
    /// deleted.
    pub async fn load<S>(
        &self,
        key: StorageKey,
        window: FreshnessWindow,
        now: DateTime<Utc>,
    ) -> Option<S>
    where
        S: DeserializeOwned,
    {
        let raw = match self.store.load_raw(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Failed to read snapshot '{}': {}", key, e);
                return None;
            }
        };

        let snapshot: Snapshot<S> = match serde_json::from_str(&raw) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!("Ignoring malformed snapshot '{}': {}", key, e);
                return None;
            }
        };

        if !window.admits(snapshot.timestamp, now) {
            tracing::debug!(
                "Snapshot '{}' from {} is outside its freshness window",
                key,
                snapshot.timestamp
            );
            return None;
        }

        Some(snapshot.state)
    }

    /// Serializes `state` with `now` as its timestamp, replacing any prior
    /// value.
    pub async fn save<S>(&self, key: StorageKey, state: &S, now: DateTime<Utc>) -> Result<()>
    where
        S: Serialize + Sync,
    {
        let snapshot = Snapshot::new(state, now);
        let raw = serde_json::to_string(&snapshot)?;
        self.store.save_raw(key, &raw).await?;
        tracing::debug!("Saved snapshot '{}' ({} bytes)", key, raw.len());
        Ok(())
    }

    pub async fn clear(&self, key: StorageKey) -> Result<()> {
        self.store.remove(key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WaypointError;
    use async_trait::async_trait;
    use chrono::{Duration, TimeZone};
    use serde::Deserialize;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MapStore {
        values: Mutex<HashMap<&'static str, String>>,
        broken: bool,
    }

    #[async_trait]
    impl SessionStore for MapStore {
        async fn load_raw(&self, key: StorageKey) -> Result<Option<String>> {
            if self.broken {
                return Err(WaypointError::data_access("disk on fire"));
            }
            Ok(self.values.lock().unwrap().get(key.as_str()).cloned())
        }

        async fn save_raw(&self, key: StorageKey, value: &str) -> Result<()> {
            self.values
                .lock()
                .unwrap()
                .insert(key.as_str(), value.to_string());
            Ok(())
        }

        async fn remove(&self, key: StorageKey) -> Result<()> {
            self.values.lock().unwrap().remove(key.as_str());
            Ok(())
        }
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Plan {
        name: String,
        items: Vec<String>,
    }

    fn plan() -> Plan {
        Plan {
            name: "alaska".into(),
            items: vec!["boots".into(), "parka".into(), "gloves".into()],
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 10, 12, 0, 0).unwrap()
    }

    const KEY: StorageKey = StorageKey::new("testPlan");

    #[tokio::test]
    async fn test_round_trip_preserves_order() {
        let vault = SessionVault::new(Arc::new(MapStore::default()));
        vault.save(KEY, &plan(), now()).await.unwrap();

        let restored: Option<Plan> = vault
            .load(KEY, FreshnessWindow::days(30), now() + Duration::hours(1))
            .await;
        assert_eq!(restored, Some(plan()));
    }

    #[tokio::test]
    async fn test_stale_snapshot_is_ignored_but_kept() {
        let store = Arc::new(MapStore::default());
        let vault = SessionVault::new(store.clone());
        vault.save(KEY, &plan(), now()).await.unwrap();

        let later = now() + Duration::days(8);
        let restored: Option<Plan> = vault.load(KEY, FreshnessWindow::hours(168), later).await;
        assert_eq!(restored, None);
        assert!(store.values.lock().unwrap().contains_key("testPlan"));
    }

    #[tokio::test]
    async fn test_malformed_snapshot_is_absent() {
        let store = Arc::new(MapStore::default());
        store.save_raw(KEY, "{not json").await.unwrap();
        let vault = SessionVault::new(store);

        let restored: Option<Plan> = vault.load(KEY, FreshnessWindow::Unbounded, now()).await;
        assert_eq!(restored, None);
    }

    #[tokio::test]
    async fn test_wrong_shape_is_absent() {
        let store = Arc::new(MapStore::default());
        store
            .save_raw(KEY, r#"{"state":{"name":3},"timestamp":"2026-05-10T12:00:00Z"}"#)
            .await
            .unwrap();
        let vault = SessionVault::new(store);

        let restored: Option<Plan> = vault.load(KEY, FreshnessWindow::Unbounded, now()).await;
        assert_eq!(restored, None);
    }

    #[tokio::test]
    async fn test_store_failure_is_absent() {
        let store = Arc::new(MapStore {
            broken: true,
            ..Default::default()
        });
        let vault = SessionVault::new(store);
        let restored: Option<Plan> = vault.load(KEY, FreshnessWindow::Unbounded, now()).await;
        assert_eq!(restored, None);
    }

    #[tokio::test]
    async fn test_clear_removes_key() {
        let store = Arc::new(MapStore::default());
        let vault = SessionVault::new(store.clone());
        vault.save(KEY, &plan(), now()).await.unwrap();
        vault.clear(KEY).await.unwrap();
        assert!(store.values.lock().unwrap().is_empty());
    }
}
