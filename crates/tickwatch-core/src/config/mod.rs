//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! layered files (TOML or YAML) plus `TICKWATCH__*` environment variables.
//! Each sub-module represents a logical configuration section.

pub mod billetto;
pub mod discord;
pub mod event;
pub mod logging;
pub mod schedule;
pub mod state;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use self::billetto::BillettoConfig;
pub use self::discord::DiscordConfig;
pub use self::event::EventConfig;
pub use self::logging::LoggingConfig;
pub use self::schedule::ScheduleConfig;
pub use self::state::StateConfig;

use crate::error::AppError;

/// Placeholder shown instead of secrets.
const MASK: &str = "********";

/// Root application configuration.
///
/// Built once at startup and passed down explicitly; nothing in the
/// workspace reads configuration from global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Cron schedule settings.
    #[serde(default)]
    pub schedule: ScheduleConfig,
    /// Ticketing platform access.
    pub billetto: BillettoConfig,
    /// Notification delivery.
    #[serde(default)]
    pub discord: DiscordConfig,
    /// Event presentation and price list.
    #[serde(default)]
    pub event: EventConfig,
    /// State file location.
    #[serde(default)]
    pub state: StateConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// Sources, later ones overriding earlier ones:
    /// 1. `config/default.{toml,yaml,...}` (optional)
    /// 2. `config/{env}.{toml,yaml,...}` (optional)
    /// 3. `path`, when given (required)
    /// 4. environment variables such as `TICKWATCH__BILLETTO__EVENT_ID`
    pub fn load(path: Option<&Path>, env: &str) -> Result<Self, AppError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false));

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("TICKWATCH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// A copy with credentials and the webhook URL replaced by a mask,
    /// suitable for printing.
    pub fn masked(&self) -> Self {
        let mut masked = self.clone();
        mask(&mut masked.billetto.access_key_id);
        mask(&mut masked.billetto.access_key_secret);
        mask(&mut masked.discord.webhook_url);
        masked
    }
}

fn mask(value: &mut String) {
    if !value.is_empty() {
        *value = MASK.to_string();
    }
}
