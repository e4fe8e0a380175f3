//! Last-count state store trait.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::AttendeeSnapshot;

/// Persistence for the most recent attendee measurement.
///
/// The store holds a single snapshot and every write replaces it wholesale.
#[async_trait]
pub trait StateStore: Send + Sync + std::fmt::Debug + 'static {
    /// Load the last stored snapshot.
    ///
    /// Returns an [`ErrorKind::NotFound`](crate::error::ErrorKind::NotFound)
    /// error when nothing has been stored yet.
    async fn load_last_count(&self) -> AppResult<AttendeeSnapshot>;

    /// Replace the stored snapshot.
    async fn store_last_count(&self, snapshot: &AttendeeSnapshot) -> AppResult<()>;
}
