//! Cheapest-first allocation of sold tickets across price tiers.

use rust_decimal::Decimal;
use serde::Serialize;

use tickwatch_core::types::PriceTier;

use crate::error::AllocationError;

/// How many tickets one tier is assumed to have sold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierAllocation {
    /// Position of the tier after sorting by ascending price.
    pub index: usize,
    /// Unit price of the tier.
    pub price: Decimal,
    /// Tickets the tier offers.
    pub capacity: u64,
    /// Tickets attributed to this tier.
    pub units_sold: u64,
    /// Tickets left in this tier.
    pub units_remaining: u64,
    /// Whether the whole capacity has been attributed. Always true for
    /// zero-capacity tiers.
    pub sold_out: bool,
}

impl TierAllocation {
    /// Revenue attributed to this tier. Never overflows for allocations
    /// returned by [`allocate`].
    pub fn amount(&self) -> Decimal {
        Decimal::from(self.units_sold) * self.price
    }
}

/// The outcome of [`allocate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationResult {
    /// Estimated revenue, unrounded.
    pub total_amount: Decimal,
    /// Every input tier, cheapest first.
    pub breakdown: Vec<TierAllocation>,
    /// Sales that did not fit in any tier. Non-zero means the reported
    /// sales exceed the price list's total capacity.
    pub overflow_units: u64,
}

impl AllocationResult {
    /// Tickets attributed to some tier.
    pub fn units_allocated(&self) -> u64 {
        self.breakdown.iter().map(|t| t.units_sold).sum()
    }

    /// Whether sales exceeded the price list.
    pub fn has_overflow(&self) -> bool {
        self.overflow_units > 0
    }
}

/// Estimate revenue by assuming every buyer took the cheapest ticket still
/// available.
///
/// `tiers` is left untouched; equally priced tiers keep their input order.
/// Tiers beyond the point where all sales are placed are still reported,
/// with nothing sold.
///
/// # Errors
///
/// [`AllocationError::InvalidArgument`] when `sales` is negative.
/// [`AllocationError::AmountOverflow`] when a tier's revenue or the running
/// total no longer fits in a [`Decimal`].
pub fn allocate(tiers: &[PriceTier], sales: i64) -> Result<AllocationResult, AllocationError> {
    let mut remaining =
        u64::try_from(sales).map_err(|_| AllocationError::InvalidArgument { sales })?;

    let mut sorted = tiers.to_vec();
    sorted.sort_by(|a, b| a.price.cmp(&b.price));

    let mut total_amount = Decimal::ZERO;
    let mut breakdown = Vec::with_capacity(sorted.len());

    for (index, tier) in sorted.iter().enumerate() {
        let units_sold = remaining.min(tier.capacity);
        remaining -= units_sold;
        total_amount = Decimal::from(units_sold)
            .checked_mul(tier.price)
            .and_then(|amount| total_amount.checked_add(amount))
            .ok_or(AllocationError::AmountOverflow { tier: index })?;

        breakdown.push(TierAllocation {
            index,
            price: tier.price,
            capacity: tier.capacity,
            units_sold,
            units_remaining: tier.capacity - units_sold,
            sold_out: units_sold == tier.capacity,
        });
    }

    Ok(AllocationResult {
        total_amount,
        breakdown,
        overflow_units: remaining,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(price: i64, capacity: u64) -> PriceTier {
        PriceTier::new(Decimal::from(price), capacity)
    }

    fn sample() -> Vec<PriceTier> {
        vec![tier(100, 50), tier(80, 20)]
    }

    #[test]
    fn test_partial_fill() {
        let result = allocate(&sample(), 30).unwrap();

        assert_eq!(result.total_amount, Decimal::from(2600));
        assert_eq!(result.overflow_units, 0);
        assert_eq!(
            result.breakdown,
            vec![
                TierAllocation {
                    index: 0,
                    price: Decimal::from(80),
                    capacity: 20,
                    units_sold: 20,
                    units_remaining: 0,
                    sold_out: true,
                },
                TierAllocation {
                    index: 1,
                    price: Decimal::from(100),
                    capacity: 50,
                    units_sold: 10,
                    units_remaining: 40,
                    sold_out: false,
                },
            ]
        );
    }

    #[test]
    fn test_overflow() {
        let result = allocate(&sample(), 100).unwrap();

        assert_eq!(result.total_amount, Decimal::from(6600));
        assert_eq!(result.overflow_units, 30);
        assert!(result.has_overflow());
        assert!(result.breakdown.iter().all(|t| t.sold_out));
    }

    #[test]
    fn test_no_tiers() {
        let result = allocate(&[], 5).unwrap();

        assert_eq!(result.total_amount, Decimal::ZERO);
        assert!(result.breakdown.is_empty());
        assert_eq!(result.overflow_units, 5);
    }

    #[test]
    fn test_negative_sales_rejected() {
        let err = allocate(&sample(), -1).unwrap_err();
        assert_eq!(err, AllocationError::InvalidArgument { sales: -1 });
    }

    #[test]
    fn test_zero_sales_reports_every_tier() {
        let result = allocate(&sample(), 0).unwrap();

        assert_eq!(result.total_amount, Decimal::ZERO);
        assert_eq!(result.breakdown.len(), 2);
        for t in &result.breakdown {
            assert_eq!(t.units_sold, 0);
            assert_eq!(t.units_remaining, t.capacity);
            assert!(!t.sold_out);
        }
    }

    #[test]
    fn test_zero_capacity_tier_is_sold_out() {
        let tiers = vec![tier(50, 0), tier(120, 10)];
        let result = allocate(&tiers, 3).unwrap();

        let empty = &result.breakdown[0];
        assert_eq!(empty.units_sold, 0);
        assert_eq!(empty.units_remaining, 0);
        assert!(empty.sold_out);
        assert_eq!(result.breakdown[1].units_sold, 3);
    }

    #[test]
    fn test_unreached_tiers_keep_capacity() {
        let tiers = vec![tier(10, 5), tier(20, 5), tier(30, 5)];
        let result = allocate(&tiers, 5).unwrap();

        assert!(result.breakdown[0].sold_out);
        assert_eq!(result.breakdown[1].units_remaining, 5);
        assert_eq!(result.breakdown[2].units_remaining, 5);
        assert!(!result.breakdown[2].sold_out);
    }

    #[test]
    fn test_equal_prices_keep_input_order() {
        let tiers = vec![tier(60, 1), tier(60, 2), tier(40, 3)];
        let result = allocate(&tiers, 6).unwrap();

        let capacities: Vec<u64> = result.breakdown.iter().map(|t| t.capacity).collect();
        assert_eq!(capacities, vec![3, 1, 2]);
    }

    #[test]
    fn test_input_not_mutated() {
        let tiers = sample();
        let before = tiers.clone();

        let first = allocate(&tiers, 30).unwrap();
        let second = allocate(&tiers, 30).unwrap();

        assert_eq!(tiers, before);
        assert_eq!(first, second);
    }

    #[test]
    fn test_tier_amount_overflow_is_error() {
        let tiers = vec![PriceTier::new(Decimal::MAX, 2)];
        let err = allocate(&tiers, 2).unwrap_err();
        assert_eq!(err, AllocationError::AmountOverflow { tier: 0 });
    }

    #[test]
    fn test_total_overflow_is_error() {
        let tiers = vec![
            PriceTier::new(Decimal::MAX, 1),
            PriceTier::new(Decimal::MAX, 1),
        ];
        let err = allocate(&tiers, 2).unwrap_err();
        assert_eq!(err, AllocationError::AmountOverflow { tier: 1 });
    }

    #[test]
    fn test_huge_capacity_overflow_is_error() {
        let tiers = vec![PriceTier::new(Decimal::from(10_000_000_000u64), u64::MAX)];
        assert!(matches!(
            allocate(&tiers, i64::MAX),
            Err(AllocationError::AmountOverflow { .. })
        ));
    }

    #[test]
    fn test_max_price_within_range_still_allocates() {
        let tiers = vec![PriceTier::new(Decimal::MAX, 1)];
        let result = allocate(&tiers, 1).unwrap();
        assert_eq!(result.total_amount, Decimal::MAX);
    }

    #[test]
    fn test_fractional_prices_sum_exactly() {
        let tiers = vec![PriceTier::new(Decimal::new(1, 1), 1_000)];
        let result = allocate(&tiers, 1_000).unwrap();
        assert_eq!(result.total_amount, Decimal::from(100));
    }
}
