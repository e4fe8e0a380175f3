//! Human-readable rendering of an allocation.
//!
//! The text is posted verbatim into a notification field, so its shape is
//! part of the user-facing output: total first, then the assumption, then
//! one line per tier that sold anything.

use std::fmt::Write;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::allocator::AllocationResult;

const ASSUMPTION: &str =
    "*Priset baseras på antagandet att alla köper den billigaste biljetten tillgänglig.*";

/// Round a monetary amount to two decimals for display.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

/// Render the revenue estimate in `currency`.
pub fn render_breakdown(result: &AllocationResult, currency: &str) -> String {
    let mut out = format!(
        "{} {currency}\n{ASSUMPTION}\nPrislista;",
        format_amount(result.total_amount)
    );

    for tier in result.breakdown.iter().filter(|t| t.units_sold > 0) {
        let _ = write!(
            out,
            "\n* {} st à {} {currency}/st",
            tier.units_sold,
            format_amount(tier.price)
        );
    }

    if result.has_overflow() {
        let _ = write!(out, "\n* {} st utöver prislistan", result.overflow_units);
    }

    out
}
