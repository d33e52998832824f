//! Configuration service implementation.
//!
//! Loads [`AppConfig`] from `config.toml` (or the file named by
//! `WAYPOINT_CONFIG`) and caches it.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use waypoint_core::config::AppConfig;
use waypoint_core::error::{Result, WaypointError};

use crate::paths::WaypointPaths;

/// Loads and caches the application configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Service for the default config file location.
    pub fn default_location() -> Result<Self> {
        Ok(Self::new(WaypointPaths::config_file()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the configuration, reading the file on first access.
    ///
    /// A missing file yields defaults. A file that does not parse is a
    /// `Config` error; it is not replaced with defaults.
    pub fn get_config(&self) -> Result<AppConfig> {
        if let Ok(cached) = self.config.read() {
            if let Some(config) = cached.as_ref() {
                return Ok(config.clone());
            }
        }

        let loaded = load_config(&self.path)?;
        if let Ok(mut cache) = self.config.write() {
            *cache = Some(loaded.clone());
        }
        Ok(loaded)
    }

    /// Forces a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut cache) = self.config.write() {
            *cache = None;
        }
    }
}

/// Reads one config file.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content).map_err(|e| {
        WaypointError::config(format!("invalid config file {}: {}", path.display(), e))
    })?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::new(temp_dir.path().join("config.toml"));
        assert_eq!(service.get_config().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_reads_and_caches() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[webhook]\nmax_attempts = 3\n").unwrap();

        let service = ConfigService::new(&path);
        assert_eq!(service.get_config().unwrap().webhook.max_attempts, 3);

        std::fs::write(&path, "[webhook]\nmax_attempts = 5\n").unwrap();
        assert_eq!(service.get_config().unwrap().webhook.max_attempts, 3);

        service.invalidate_cache();
        assert_eq!(service.get_config().unwrap().webhook.max_attempts, 5);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[webhook\nurl = ").unwrap();

        let err = ConfigService::new(&path).get_config().unwrap_err();
        assert!(matches!(err, WaypointError::Config(_)));
    }

    #[test]
    fn test_out_of_range_freshness_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        std::fs::write(&path, "[freshness]\nbudget_days = 200000000000000\n").unwrap();
        let err = ConfigService::new(&path).get_config().unwrap_err();
        assert!(matches!(err, WaypointError::Config(_)));

        std::fs::write(&path, "[freshness]\npacking_hours = -5\n").unwrap();
        let err = ConfigService::new(&path).get_config().unwrap_err();
        assert!(matches!(err, WaypointError::Config(_)));

        std::fs::write(&path, "[freshness]\nbudget_days = 0\n").unwrap();
        assert_eq!(ConfigService::new(&path).get_config().unwrap().freshness.budget_days, 0);
    }
}
