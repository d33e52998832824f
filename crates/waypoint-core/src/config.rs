//! Application configuration model.
//!
//! Every section and field has a default, so an empty or partial
//! `config.toml` is valid.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Result, WaypointError};
use crate::persistence::FreshnessWindow;

pub const DEFAULT_WEBHOOK_URL: &str = "https://nextripanywhere.app.n8n.cloud/webhook/contact-form";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub webhook: WebhookConfig,
    pub storage: StorageConfig,
    pub freshness: FreshnessConfig,
    pub contact: ContactInfo,
}

impl AppConfig {
    /// Checks values serde accepts but the planners cannot use.
    pub fn validate(&self) -> Result<()> {
        self.freshness.validate()
    }
}

/// Where "email my plan" requests are posted.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WebhookConfig {
    pub url: String,
    pub timeout_secs: u64,
    /// Total attempts per send, including the first.
    pub max_attempts: u32,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_WEBHOOK_URL.to_string(),
            timeout_secs: 10,
            max_attempts: 2,
        }
    }
}

impl WebhookConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Overrides the snapshot directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// How old a saved plan may be and still be restored, per tool.
///
/// Each tool keeps its own window. An absent `*_days` value means any age.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FreshnessConfig {
    pub budget_days: i64,
    pub packing_hours: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub itinerary_days: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison_days: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_days: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countdown_days: Option<i64>,
}

impl Default for FreshnessConfig {
    fn default() -> Self {
        Self {
            budget_days: 30,
            packing_hours: 168,
            itinerary_days: None,
            comparison_days: None,
            pricing_days: None,
            countdown_days: None,
        }
    }
}

impl FreshnessConfig {
    /// Longest window accepted from config, about a century.
    pub const MAX_DAYS: i64 = 36_500;

    /// Rejects negative windows and windows longer than [`Self::MAX_DAYS`].
    pub fn validate(&self) -> Result<()> {
        let days = [
            ("budget_days", Some(self.budget_days)),
            ("itinerary_days", self.itinerary_days),
            ("comparison_days", self.comparison_days),
            ("pricing_days", self.pricing_days),
            ("countdown_days", self.countdown_days),
        ];
        for (field, value) in days {
            if let Some(value) = value {
                check_window(field, value, Self::MAX_DAYS)?;
            }
        }
        check_window("packing_hours", self.packing_hours, Self::MAX_DAYS * 24)
    }

    pub fn budget(&self) -> FreshnessWindow {
        FreshnessWindow::days(self.budget_days)
    }

    pub fn packing(&self) -> FreshnessWindow {
        FreshnessWindow::hours(self.packing_hours)
    }

    pub fn itinerary(&self) -> FreshnessWindow {
        FreshnessWindow::from_days(self.itinerary_days)
    }

    pub fn comparison(&self) -> FreshnessWindow {
        FreshnessWindow::from_days(self.comparison_days)
    }

    pub fn pricing(&self) -> FreshnessWindow {
        FreshnessWindow::from_days(self.pricing_days)
    }

    pub fn countdown(&self) -> FreshnessWindow {
        FreshnessWindow::from_days(self.countdown_days)
    }
}

fn check_window(field: &str, value: i64, max: i64) -> Result<()> {
    if (0..=max).contains(&value) {
        Ok(())
    } else {
        Err(WaypointError::config(format!(
            "freshness.{} must be between 0 and {}, got {}",
            field, max, value
        )))
    }
}

/// Agency details printed on reports and in failure notices.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ContactInfo {
    pub company: String,
    pub phone: String,
    pub website: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            company: "Next Trip Anywhere".to_string(),
            phone: "833-874-1019".to_string(),
            website: "nexttripanywhere.com".to_string(),
        }
    }
}
