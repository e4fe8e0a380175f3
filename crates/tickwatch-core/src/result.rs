//! Convenience result type alias for TickWatch.

use crate::error::AppError;

/// A specialized `Result` type for TickWatch operations.
pub type AppResult<T> = Result<T, AppError>;
