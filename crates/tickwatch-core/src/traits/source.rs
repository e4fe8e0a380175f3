//! Attendance source trait.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::EventInfo;

/// Something that can report how many attendees an event currently has.
///
/// Implementations hold their own credentials. Every failure (network,
/// HTTP status, unparsable body) is reported as
/// [`ErrorKind::SourceUnavailable`](crate::error::ErrorKind::SourceUnavailable).
#[async_trait]
pub trait AttendanceSource: Send + Sync + std::fmt::Debug + 'static {
    /// Return the current number of registered attendees for `event_id`.
    async fn fetch_current_count(&self, event_id: u64) -> AppResult<u64>;

    /// Return descriptive metadata for `event_id`.
    async fn fetch_event_info(&self, event_id: u64) -> AppResult<EventInfo>;
}
