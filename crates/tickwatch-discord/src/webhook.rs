//! Webhook delivery over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use tickwatch_core::error::{AppError, ErrorKind};
use tickwatch_core::result::AppResult;
use tickwatch_core::traits::{Notifier, WebhookMessage};

/// Posts [`WebhookMessage`]s to Discord webhook URLs.
#[derive(Debug, Clone)]
pub struct DiscordWebhook {
    /// Shared HTTP connection pool.
    http: reqwest::Client,
}

impl DiscordWebhook {
    /// Build a notifier with the given per-request timeout.
    pub fn new(timeout_seconds: u64) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .user_agent(concat!("tickwatch/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    "Failed to build Discord HTTP client",
                    e,
                )
            })?;

        Ok(Self { http })
    }
}

#[async_trait]
impl Notifier for DiscordWebhook {
    async fn send_message(&self, webhook_url: &str, message: &WebhookMessage) -> AppResult<()> {
        if webhook_url.is_empty() {
            return Err(AppError::delivery("No webhook URL configured"));
        }

        let body = serde_json::to_string(message)?;
        info!("HTTP POST webhook ({} embeds)", message.embeds.len());
        debug!(payload = %body, "Webhook payload");

        let response = self
            .http
            .post(webhook_url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Delivery, "Failed to send webhook request", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::delivery(format!(
                "Unexpected response from Discord: {status} {detail}"
            )));
        }

        Ok(())
    }
}
