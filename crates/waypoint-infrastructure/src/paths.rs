//! Path management for waypoint files.
//!
//! ```text
//! ~/.config/waypoint/           # Config directory
//! ├── config.toml               # Application configuration
//! └── destinations.toml         # Optional destination dataset override
//!
//! ~/.local/share/waypoint/      # Data directory
//! ├── snapshots/                # One JSON snapshot per planner
//! └── reports/                  # Exported text reports
//! ```

use std::path::PathBuf;
use waypoint_core::config::AppConfig;
use waypoint_core::error::{Result, WaypointError};

const APP_DIR: &str = "waypoint";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "WAYPOINT_CONFIG";

pub struct WaypointPaths;

impl WaypointPaths {
    /// `~/.config/waypoint` on Linux, the platform equivalent elsewhere.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| WaypointError::config("cannot determine the config directory"))
    }

    pub fn data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| WaypointError::config("cannot determine the data directory"))
    }

    /// The config file: `WAYPOINT_CONFIG` if set, else `config.toml` in the
    /// config directory.
    pub fn config_file() -> Result<PathBuf> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
            _ => Ok(Self::config_dir()?.join("config.toml")),
        }
    }

    /// Snapshot directory, honouring `[storage] dir`.
    pub fn snapshot_dir(config: &AppConfig) -> Result<PathBuf> {
        match &config.storage.dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(Self::data_dir()?.join("snapshots")),
        }
    }

    pub fn report_dir() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("reports"))
    }

    /// User override of the bundled destination dataset.
    pub fn destinations_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("destinations.toml"))
    }
}
