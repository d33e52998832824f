pub mod budget;
pub mod compare;
pub mod config;
pub mod countdown;
pub mod itinerary;
pub mod items;
pub mod packing;
pub mod price;

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use waypoint_application::PlannerContext;
use waypoint_core::config::AppConfig;
use waypoint_infrastructure::{ConfigService, FileSessionStore, WebhookClient};

/// Configuration and session context shared by every command.
pub struct AppState {
    pub config: AppConfig,
    pub config_path: PathBuf,
    /// Snapshot directory, or `None` for an in-memory run.
    pub snapshot_dir: Option<PathBuf>,
    pub ctx: PlannerContext,
}

impl AppState {
    pub fn load(config_path: Option<PathBuf>, ephemeral: bool) -> Result<Self> {
        let service = match config_path {
            Some(path) => ConfigService::new(path),
            None => ConfigService::default_location()?,
        };
        let config = service
            .get_config()
            .with_context(|| format!("Failed to load {}", service.path().display()))?;

        let (ctx, snapshot_dir) = if ephemeral {
            (PlannerContext::ephemeral(&config), None)
        } else {
            let store = FileSessionStore::default_location(&config)
                .context("Failed to open the snapshot directory")?;
            let dir = store.base_dir().to_path_buf();
            (PlannerContext::new(Arc::new(store), &config), Some(dir))
        };

        Ok(Self {
            config_path: service.path().to_path_buf(),
            config,
            snapshot_dir,
            ctx,
        })
    }

    pub fn mailer(&self) -> WebhookClient {
        WebhookClient::from_config(&self.config.webhook)
    }
}
