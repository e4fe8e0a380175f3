//! The persisted attendee measurement.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// A single attendee count taken at a point in time.
///
/// This is the exact shape of the state file:
/// `{ "datetime": "<RFC 3339>", "count": <int> }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendeeSnapshot {
    /// When the count was taken.
    pub datetime: DateTime<Utc>,
    /// Number of registered attendees, or [`AttendeeSnapshot::UNKNOWN_COUNT`].
    pub count: i64,
}

impl AttendeeSnapshot {
    /// Count stored when no earlier measurement exists.
    pub const UNKNOWN_COUNT: i64 = -1;

    /// Create a snapshot of `count` taken at `datetime`.
    pub fn new(datetime: DateTime<Utc>, count: i64) -> Self {
        Self { datetime, count }
    }

    /// Snapshot of `count` taken now, truncated to whole seconds.
    pub fn now(count: i64) -> Self {
        Self::new(Utc::now().trunc_subsecs(0), count)
    }

    /// Placeholder used when the previous measurement is missing or unreadable.
    pub fn unknown() -> Self {
        Self::now(Self::UNKNOWN_COUNT)
    }

    /// Whether this snapshot carries a real measurement. Any negative
    /// count, not only [`AttendeeSnapshot::UNKNOWN_COUNT`], is unknown.
    pub fn is_known(&self) -> bool {
        self.count >= 0
    }

    /// Timestamp formatted the way it is shown to humans and stored on disk.
    pub fn timestamp(&self) -> String {
        self.datetime.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_state_file_shape() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let json = serde_json::to_value(AttendeeSnapshot::new(at, 42)).unwrap();
        assert_eq!(json["count"], 42);
        assert_eq!(json["datetime"], "2024-05-01T12:30:00Z");
    }

    #[test]
    fn test_reads_offset_timestamps() {
        let snap: AttendeeSnapshot =
            serde_json::from_str(r#"{"datetime": "2024-05-01T14:30:00+02:00", "count": 7}"#)
                .unwrap();
        assert_eq!(snap.timestamp(), "2024-05-01T12:30:00Z");
        assert!(snap.is_known());
    }

    #[test]
    fn test_unknown_sentinel() {
        assert!(!AttendeeSnapshot::unknown().is_known());
    }

    #[test]
    fn test_any_negative_count_is_unknown() {
        assert!(!AttendeeSnapshot::now(-7).is_known());
        assert!(!AttendeeSnapshot::now(i64::MIN).is_known());
        assert!(AttendeeSnapshot::now(0).is_known());
    }
}
