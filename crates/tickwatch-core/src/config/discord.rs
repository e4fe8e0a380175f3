//! Discord webhook configuration.

use serde::{Deserialize, Serialize};

/// Where and how notifications are posted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscordConfig {
    /// Webhook endpoint.
    #[serde(default, alias = "webhook")]
    pub webhook_url: String,
    /// Username override for posted messages.
    #[serde(default)]
    pub username: String,
    /// Avatar override for posted messages.
    #[serde(default)]
    pub avatar_url: String,
    /// Log messages instead of posting them.
    #[serde(default)]
    pub silent: bool,
    /// Embed sidebar colour as `0xRRGGBB`.
    #[serde(default)]
    pub color: Option<u32>,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_timeout() -> u64 {
    15
}
