//! Shared test helpers for integration tests.

use std::path::PathBuf;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tickwatch_billetto::BillettoClient;
use tickwatch_core::config::{
    AppConfig, BillettoConfig, DiscordConfig, EventConfig, LoggingConfig, ScheduleConfig,
    StateConfig,
};
use tickwatch_core::types::PriceTier;
use tickwatch_discord::DiscordWebhook;
use tickwatch_state::JsonFileStateStore;
use tickwatch_worker::AttendanceJob;

/// Event id used by every test.
pub const EVENT_ID: u64 = 42;

/// Test application context
pub struct TestApp {
    /// Fake Billetto organiser API
    pub billetto: MockServer,
    /// Fake Discord webhook endpoint
    pub discord: MockServer,
    /// Holds the state file
    pub state_dir: TempDir,
    /// Application config pointing at the fakes
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application with the given price list
    pub async fn new(price_list: Vec<PriceTier>) -> Self {
        let billetto = MockServer::start().await;
        let discord = MockServer::start().await;
        let state_dir = tempfile::tempdir().expect("Failed to create temp dir");

        let config = AppConfig {
            schedule: ScheduleConfig::default(),
            billetto: BillettoConfig {
                base_url: format!("{}/api/v3", billetto.uri()),
                event_id: EVENT_ID,
                access_key_id: "kid".to_string(),
                access_key_secret: "ksecret".to_string(),
                timeout_seconds: 5,
            },
            discord: DiscordConfig {
                webhook_url: format!("{}/api/webhooks/1/token", discord.uri()),
                username: "TickWatch".to_string(),
                timeout_seconds: 5,
                ..Default::default()
            },
            event: EventConfig {
                currency: "SEK".to_string(),
                price_list,
                ..Default::default()
            },
            state: StateConfig {
                path: state_dir.path().join("event.json").display().to_string(),
            },
            logging: LoggingConfig::default(),
        };

        Self {
            billetto,
            discord,
            state_dir,
            config,
        }
    }

    /// Build the attendance job wired to the real clients
    pub fn job(&self) -> AttendanceJob {
        let source = Arc::new(BillettoClient::new(&self.config.billetto).expect("billetto client"));
        let store = Arc::new(JsonFileStateStore::new(&self.config.state.path));
        let notifier =
            Arc::new(DiscordWebhook::new(self.config.discord.timeout_seconds).expect("webhook"));
        AttendanceJob::new(&self.config, source, store, notifier)
    }

    /// Location of the state file
    pub fn state_path(&self) -> PathBuf {
        PathBuf::from(&self.config.state.path)
    }

    /// Serve `count` as the attendee total
    pub async fn mount_attendees(&self, count: u64) {
        Mock::given(method("GET"))
            .and(path(format!("/api/v3/organiser/events/{EVENT_ID}/attendees")))
            .and(header("Api-Keypair", "kid:ksecret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "list",
                "data": [],
                "has_more": count > 0,
                "total": count,
            })))
            .mount(&self.billetto)
            .await;
    }

    /// Serve the event resource
    pub async fn mount_event(&self) {
        Mock::given(method("GET"))
            .and(path(format!("/api/v3/organiser/events/{EVENT_ID}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": EVENT_ID.to_string(),
                "object": "event",
                "name": "Midsommarfest",
                "currency": "SEK",
                "state": "published",
                "total_capacity": 70,
                "public_url": "https://billetto.se/e/midsommarfest-42",
                "availability": { "available": 40, "status": "available" }
            })))
            .mount(&self.billetto)
            .await;
    }

    /// Accept webhook posts with `status`, expecting exactly `times` of them
    pub async fn mount_webhook(&self, status: u16, times: u64) {
        Mock::given(method("POST"))
            .and(path("/api/webhooks/1/token"))
            .respond_with(ResponseTemplate::new(status))
            .expect(times)
            .mount(&self.discord)
            .await;
    }

    /// Write a state file as an earlier run would have
    pub fn write_state(&self, datetime: &str, count: i64) {
        let body = json!({ "datetime": datetime, "count": count });
        std::fs::write(
            self.state_path(),
            serde_json::to_string_pretty(&body).expect("serialize state"),
        )
        .expect("Failed to write state file");
    }

    /// Read the state file back
    pub fn read_state(&self) -> Value {
        let text = std::fs::read_to_string(self.state_path()).expect("Failed to read state file");
        serde_json::from_str(&text).expect("state file is not JSON")
    }

    /// JSON bodies of every webhook post received so far
    pub async fn webhook_posts(&self) -> Vec<Value> {
        self.discord
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| serde_json::from_slice(&r.body).expect("webhook body is not JSON"))
            .collect()
    }
}

/// The two-tier price list used across tests
pub fn price_list() -> Vec<PriceTier> {
    vec![
        PriceTier::new(Decimal::from(100), 50),
        PriceTier::new(Decimal::from(80), 20),
    ]
}
