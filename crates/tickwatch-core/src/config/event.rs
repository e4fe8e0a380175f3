//! Event presentation and pricing configuration.

use serde::{Deserialize, Serialize};

use crate::types::PriceTier;

/// How the watched event is presented, and what its tickets cost.
///
/// Empty strings fall back to what the ticketing platform reports.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventConfig {
    /// Embed title.
    #[serde(default)]
    pub title: String,
    /// Embed link.
    #[serde(default)]
    pub url: String,
    /// Embed image.
    #[serde(default)]
    pub image_url: String,
    /// Currency code used when rendering revenue.
    #[serde(default)]
    pub currency: String,
    /// Ticket tiers used for the revenue estimate. Order does not matter.
    #[serde(default)]
    pub price_list: Vec<PriceTier>,
}
