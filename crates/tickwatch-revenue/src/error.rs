//! Allocation errors.

use tickwatch_core::error::{AppError, ErrorKind};

/// Error from [`allocate`](crate::allocate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllocationError {
    /// Sales count was negative.
    #[error("Invalid argument: sales must be non-negative, got {sales}")]
    InvalidArgument {
        /// The rejected value.
        sales: i64,
    },
    /// Revenue exceeded the representable decimal range.
    #[error("Revenue overflow at tier {tier}: amount exceeds the decimal range")]
    AmountOverflow {
        /// Position of the tier, after sorting by price, where it happened.
        tier: usize,
    },
}

impl From<AllocationError> for AppError {
    fn from(err: AllocationError) -> Self {
        AppError::with_source(ErrorKind::Validation, err.to_string(), err)
    }
}
