//! HTTP client for the Billetto organiser API.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use tickwatch_core::config::BillettoConfig;
use tickwatch_core::error::{AppError, ErrorKind};
use tickwatch_core::result::AppResult;
use tickwatch_core::traits::AttendanceSource;
use tickwatch_core::types::EventInfo;

use crate::models::ListEnvelope;

/// Authenticated Billetto API client.
#[derive(Debug, Clone)]
pub struct BillettoClient {
    /// Shared HTTP connection pool.
    http: reqwest::Client,
    /// API root without trailing slash.
    base_url: String,
    /// `Api-Keypair` header value.
    keypair: String,
}

impl BillettoClient {
    /// Build a client from configuration.
    pub fn new(config: &BillettoConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("tickwatch/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    "Failed to build Billetto HTTP client",
                    e,
                )
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            keypair: format!("{}:{}", config.access_key_id, config.access_key_secret),
        })
    }

    /// GET `path` below the API root and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let url = format!("{}{}", self.base_url, path);
        info!("HTTP GET {}", url);

        let response = self
            .http
            .get(&url)
            .header("Content-Type", "application/json")
            .header("Api-Keypair", &self.keypair)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::SourceUnavailable,
                    format!("Request to {url} failed"),
                    e,
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::source_unavailable(format!(
                "Non-OK HTTP status from {url}: {status}"
            )));
        }

        response.json::<T>().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::SourceUnavailable,
                format!("Failed to decode response from {url}"),
                e,
            )
        })
    }
}

#[async_trait]
impl AttendanceSource for BillettoClient {
    async fn fetch_current_count(&self, event_id: u64) -> AppResult<u64> {
        let list: ListEnvelope = self
            .get_json(&format!("/organiser/events/{event_id}/attendees?limit=0"))
            .await?;

        debug!(event_id, total = list.total, "Fetched attendee total");
        Ok(list.total)
    }

    async fn fetch_event_info(&self, event_id: u64) -> AppResult<EventInfo> {
        self.get_json(&format!("/organiser/events/{event_id}")).await
    }
}
