//! "Email my plan" payloads and delivery seam.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WaypointError};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// How a tool names itself in exported files and webhook payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportProfile {
    /// Report file prefix, e.g. `cruise-budget`.
    pub file_prefix: &'static str,
    /// Webhook `type` field, e.g. `budget-plan`.
    pub email_type: &'static str,
    /// Webhook `source` field, e.g. `budget-planner-tool`.
    pub email_source: &'static str,
    /// Noun used in notices, capitalized: "Budget plan".
    pub label: &'static str,
}

/// JSON body posted to the webhook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanEmail {
    pub email: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub source: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl PlanEmail {
    pub fn new(
        profile: &ExportProfile,
        email: impl Into<String>,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            email: email.into(),
            kind: profile.email_type.to_string(),
            source: profile.email_source.to_string(),
            message: message.into(),
            timestamp,
        }
    }
}

/// Delivers plan summaries to the recipient.
#[async_trait]
pub trait PlanMailer: Send + Sync {
    /// Sends one plan. Errors carry a [`DeliveryError`](crate::error::DeliveryError)
    /// describing why delivery failed.
    async fn send(&self, email: &PlanEmail) -> Result<()>;
}

/// Checks an address before anything is sent and returns it trimmed.
pub fn validate_email(address: &str) -> Result<String> {
    let address = address.trim();
    if address.is_empty() {
        return Err(WaypointError::validation("email address is required"));
    }
    if !EMAIL_PATTERN.is_match(address) {
        return Err(WaypointError::validation(format!(
            "'{}' is not a valid email address",
            address
        )));
    }
    Ok(address.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const PROFILE: ExportProfile = ExportProfile {
        file_prefix: "cruise-budget",
        email_type: "budget-plan",
        email_source: "budget-planner-tool",
        label: "Budget plan",
    };

    #[test]
    fn test_payload_field_names() {
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let email = PlanEmail::new(&PROFILE, "pat@example.com", "Total: $5,000", at);
        let json = serde_json::to_value(&email).unwrap();
        assert_eq!(json["email"], "pat@example.com");
        assert_eq!(json["type"], "budget-plan");
        assert_eq!(json["source"], "budget-planner-tool");
        assert_eq!(json["message"], "Total: $5,000");
        assert_eq!(json["timestamp"], "2026-01-02T03:04:05Z");
    }

    #[test]
    fn test_validate_email() {
        assert_eq!(validate_email("  pat@example.com ").unwrap(), "pat@example.com");
        assert!(validate_email("").unwrap_err().is_validation());
        assert!(validate_email("   ").is_err());
        assert!(validate_email("pat@example").is_err());
        assert!(validate_email("pat example@x.com").is_err());
    }
}
