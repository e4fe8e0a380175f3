//! Billetto API configuration.

use serde::{Deserialize, Serialize};

/// Billetto organiser API access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillettoConfig {
    /// API root, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Numeric event identifier.
    pub event_id: u64,
    /// API key pair identifier.
    #[serde(default)]
    pub access_key_id: String,
    /// API key pair secret.
    #[serde(default)]
    pub access_key_secret: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_base_url() -> String {
    "https://billetto.dk/api/v3".to_string()
}

fn default_timeout() -> u64 {
    30
}
