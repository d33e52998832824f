pub mod config_service;
pub mod dataset_metrics_provider;
pub mod file_session_store;
pub mod memory_session_store;
pub mod paths;
pub mod storage;
pub mod webhook_client;

pub use crate::config_service::ConfigService;
pub use crate::dataset_metrics_provider::DatasetMetricsProvider;
pub use crate::file_session_store::FileSessionStore;
pub use crate::memory_session_store::MemorySessionStore;
pub use crate::paths::WaypointPaths;
pub use crate::webhook_client::WebhookClient;
