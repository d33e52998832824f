//! Shared collaborators handed to every session.

use std::sync::Arc;
use waypoint_core::config::{AppConfig, ContactInfo, FreshnessConfig};
use waypoint_core::persistence::{Clock, SessionStore, SessionVault, SystemClock};
use waypoint_infrastructure::MemorySessionStore;

/// Storage, time source and settings used by planner and comparison sessions.
#[derive(Clone)]
pub struct PlannerContext {
    pub vault: SessionVault,
    pub clock: Arc<dyn Clock>,
    pub freshness: FreshnessConfig,
    pub contact: ContactInfo,
}

impl PlannerContext {
    pub fn new(store: Arc<dyn SessionStore>, config: &AppConfig) -> Self {
        Self {
            vault: SessionVault::new(store),
            clock: Arc::new(SystemClock),
            freshness: config.freshness.clone(),
            contact: config.contact.clone(),
        }
    }

    /// A context that keeps nothing between runs.
    pub fn ephemeral(config: &AppConfig) -> Self {
        Self::new(Arc::new(MemorySessionStore::new()), config)
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}
