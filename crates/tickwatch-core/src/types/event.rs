//! Event metadata returned by the ticketing platform.

use serde::{Deserialize, Serialize};

/// The subset of a ticketing platform's event resource TickWatch uses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventInfo {
    /// Platform identifier of the event.
    #[serde(default)]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// ISO 4217 currency code prices are quoted in.
    #[serde(default)]
    pub currency: String,
    /// Publication state, e.g. `"published"`.
    #[serde(default)]
    pub state: String,
    /// Total number of tickets the event can hold, if the platform reports it.
    #[serde(default)]
    pub total_capacity: Option<u64>,
    /// Public landing page.
    #[serde(default)]
    pub public_url: String,
    /// Current availability.
    #[serde(default)]
    pub availability: EventAvailability,
}

/// Ticket availability of an event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventAvailability {
    /// Tickets still available.
    #[serde(default)]
    pub available: Option<u64>,
    /// Availability status, e.g. `"available"` or `"sold_out"`.
    #[serde(default)]
    pub status: String,
}
