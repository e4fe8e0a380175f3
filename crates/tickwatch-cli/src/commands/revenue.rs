//! Revenue estimate command.

use std::str::FromStr;

use clap::Args;
use rust_decimal::Decimal;
use tabled::Tabled;

use super::Cli;
use crate::output::{self, OutputFormat};
use tickwatch_core::error::AppError;
use tickwatch_core::types::PriceTier;
use tickwatch_revenue::{AllocationResult, allocate, format_amount, render_breakdown};

/// Arguments for the revenue command
#[derive(Debug, Args)]
pub struct RevenueArgs {
    /// Number of tickets sold
    #[arg(short, long, allow_negative_numbers = true)]
    pub sales: i64,

    /// Price tier as PRICE:CAPACITY; repeatable. Without any, the
    /// configured price list is used.
    #[arg(short, long = "tier", value_parser = parse_tier)]
    pub tiers: Vec<PriceTier>,

    /// Currency code for display
    #[arg(long)]
    pub currency: Option<String>,
}

/// Tier row for table output
#[derive(Debug, Tabled)]
struct TierRow {
    /// Position after sorting by price
    #[tabled(rename = "#")]
    index: usize,
    /// Unit price
    price: String,
    /// Tier capacity
    capacity: u64,
    /// Units attributed
    sold: u64,
    /// Units left
    remaining: u64,
    /// Sold out flag
    #[tabled(rename = "sold out")]
    sold_out: bool,
    /// Revenue from this tier
    amount: String,
}

/// Execute the revenue command
pub async fn execute(args: &RevenueArgs, cli: &Cli) -> Result<(), AppError> {
    let (tiers, configured_currency) = if args.tiers.is_empty() {
        let config = cli.load_config()?;
        (config.event.price_list, config.event.currency)
    } else {
        (args.tiers.clone(), String::new())
    };

    let currency = args
        .currency
        .clone()
        .filter(|c| !c.is_empty())
        .or_else(|| Some(configured_currency).filter(|c| !c.is_empty()))
        .unwrap_or_else(|| "SEK".to_string());

    let result = allocate(&tiers, args.sales)?;

    match cli.format {
        OutputFormat::Json => output::print_json(&result),
        OutputFormat::Table => print_allocation(&result, &currency),
    }

    Ok(())
}

fn print_allocation(result: &AllocationResult, currency: &str) {
    let rows: Vec<TierRow> = result
        .breakdown
        .iter()
        .map(|t| TierRow {
            index: t.index,
            price: format_amount(t.price),
            capacity: t.capacity,
            sold: t.units_sold,
            remaining: t.units_remaining,
            sold_out: t.sold_out,
            amount: format_amount(t.amount()),
        })
        .collect();

    output::print_table(&rows, "No price tiers configured.");
    println!();
    output::print_kv("Total", &format!("{} {}", format_amount(result.total_amount), currency));
    if result.has_overflow() {
        output::print_warning(&format!(
            "{} tickets exceed the price list capacity",
            result.overflow_units
        ));
    }
    println!();
    println!("{}", render_breakdown(result, currency));
}

/// Parse `PRICE:CAPACITY`, e.g. `80:20` or `99.50:10`.
fn parse_tier(s: &str) -> Result<PriceTier, String> {
    let (price, capacity) = s
        .split_once(':')
        .ok_or_else(|| format!("expected PRICE:CAPACITY, got '{s}'"))?;

    let price = Decimal::from_str(price.trim()).map_err(|e| format!("invalid price '{price}': {e}"))?;
    let capacity = capacity
        .trim()
        .parse::<u64>()
        .map_err(|e| format!("invalid capacity '{capacity}': {e}"))?;

    Ok(PriceTier::new(price, capacity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tier() {
        assert_eq!(
            parse_tier("99.50:10").unwrap(),
            PriceTier::new(Decimal::new(9950, 2), 10)
        );
        assert_eq!(parse_tier(" 80 : 20 ").unwrap(), PriceTier::new(Decimal::from(80), 20));
    }

    #[test]
    fn test_parse_tier_rejects_bad_input() {
        assert!(parse_tier("80").is_err());
        assert!(parse_tier("eighty:20").is_err());
        assert!(parse_tier("80:-1").is_err());
    }
}
