//! Ticket price tiers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One ticket class: a unit price and the number of tickets on offer at it.
///
/// Older config files call the capacity `amount`; both keys are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTier {
    /// Unit price in the event currency.
    pub price: Decimal,
    /// Maximum number of tickets sellable at this price.
    #[serde(alias = "amount")]
    pub capacity: u64,
}

impl PriceTier {
    /// Create a new price tier.
    pub fn new(price: Decimal, capacity: u64) -> Self {
        Self { price, capacity }
    }
}
