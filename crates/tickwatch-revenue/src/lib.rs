//! # tickwatch-revenue
//!
//! Estimates ticket revenue from an attendee count and a price list by
//! assuming every buyer took the cheapest ticket still available.
//!
//! ```
//! use rust_decimal::Decimal;
//! use tickwatch_core::types::PriceTier;
//! use tickwatch_revenue::allocate;
//!
//! let tiers = [
//!     PriceTier::new(Decimal::from(100), 50),
//!     PriceTier::new(Decimal::from(80), 20),
//! ];
//! let result = allocate(&tiers, 30).unwrap();
//! assert_eq!(result.total_amount, Decimal::from(2600));
//! ```

pub mod allocator;
pub mod error;
pub mod render;

pub use allocator::{AllocationResult, TierAllocation, allocate};
pub use error::AllocationError;
pub use render::{format_amount, render_breakdown};
