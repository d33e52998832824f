//! HTTP delivery of "email my plan" requests.

use async_trait::async_trait;
use std::time::Duration;
use waypoint_core::config::WebhookConfig;
use waypoint_core::error::{DeliveryError, Result, WaypointError};
use waypoint_core::export::{PlanEmail, PlanMailer};

const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Posts [`PlanEmail`] payloads as JSON to a webhook URL.
///
/// Each send is bounded by a per-request timeout. Timeouts and connection
/// failures are retried up to `max_attempts` in total; a response with a
/// non-success status is returned at once as [`DeliveryError::Rejected`].
pub struct WebhookClient {
    url: String,
    client: reqwest::Client,
    timeout: Duration,
    max_attempts: u32,
    retry_delay: Duration,
}

impl WebhookClient {
    pub fn new(url: impl Into<String>) -> Self {
        let defaults = WebhookConfig::default();
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
            timeout: defaults.timeout(),
            max_attempts: defaults.max_attempts,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }

    pub fn from_config(config: &WebhookConfig) -> Self {
        Self::new(config.url.clone())
            .with_timeout(config.timeout())
            .with_max_attempts(config.max_attempts)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Total attempts per send; values below 1 are treated as 1.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn attempt(&self, email: &PlanEmail) -> std::result::Result<(), DeliveryError> {
        let response = self
            .client
            .post(&self.url)
            .timeout(self.timeout)
            .json(email)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

fn classify(err: reqwest::Error) -> DeliveryError {
    if err.is_timeout() {
        DeliveryError::Timeout
    } else {
        DeliveryError::Unreachable(err.to_string())
    }
}

#[async_trait]
impl PlanMailer for WebhookClient {
    async fn send(&self, email: &PlanEmail) -> Result<()> {
        let mut attempt = 1;
        loop {
            match self.attempt(email).await {
                Ok(()) => {
                    tracing::info!(
                        "Delivered {} for {} (attempt {})",
                        email.kind,
                        email.email,
                        attempt
                    );
                    return Ok(());
                }
                Err(err) if err.is_transient() && attempt < self.max_attempts => {
                    tracing::warn!(
                        "Webhook attempt {}/{} failed: {}; retrying",
                        attempt,
                        self.max_attempts,
                        err
                    );
                    attempt += 1;
                    if !self.retry_delay.is_zero() {
                        tokio::time::sleep(self.retry_delay).await;
                    }
                }
                Err(err) => {
                    tracing::warn!("Webhook delivery of {} failed: {}", email.kind, err);
                    return Err(WaypointError::Delivery(err));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use mockito::Matcher;
    use waypoint_core::export::ExportProfile;

    const PROFILE: ExportProfile = ExportProfile {
        file_prefix: "packing-checklist",
        email_type: "packing-checklist",
        email_source: "packing-checklist-tool",
        label: "Checklist",
    };

    fn email() -> PlanEmail {
        PlanEmail::new(
            &PROFILE,
            "sam@example.com",
            "Packing Checklist for Alaska:",
            Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_posts_json_payload() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/webhook/contact-form")
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJsonString(
                r#"{"email":"sam@example.com","type":"packing-checklist","source":"packing-checklist-tool","timestamp":"2026-09-01T12:00:00Z"}"#
                    .to_string(),
            ))
            .with_status(200)
            .expect(1)
            .create_async()
            .await;

        let client = WebhookClient::new(format!("{}/webhook/contact-form", server.url()));
        client.send(&email()).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_rejection_is_not_retried() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/hook")
            .with_status(500)
            .expect(1)
            .create_async()
            .await;

        let client = WebhookClient::new(format!("{}/hook", server.url()))
            .with_max_attempts(3)
            .with_retry_delay(Duration::ZERO);
        let err = client.send(&email()).await.unwrap_err();
        assert_eq!(
            err.as_delivery(),
            Some(&DeliveryError::Rejected { status: 500 })
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_unreachable_after_all_attempts() {
        // Port 9 (discard) is closed on CI machines.
        let client = WebhookClient::new("http://127.0.0.1:9/hook")
            .with_timeout(Duration::from_secs(2))
            .with_max_attempts(2)
            .with_retry_delay(Duration::ZERO);
        let err = client.send(&email()).await.unwrap_err();
        assert!(err.as_delivery().is_some_and(DeliveryError::is_transient));
    }

    #[test]
    fn test_from_config() {
        let config = WebhookConfig {
            url: "http://localhost/hook".to_string(),
            timeout_secs: 3,
            max_attempts: 0,
        };
        let client = WebhookClient::from_config(&config);
        assert_eq!(client.url(), "http://localhost/hook");
        assert_eq!(client.timeout, Duration::from_secs(3));
        assert_eq!(client.max_attempts, 1);
    }
}
