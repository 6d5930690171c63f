//! Modification-time filtering.
//!
//! A [`TimeRange`] is an independent predicate on a document's modification
//! time, expressed in epoch milliseconds. Both bounds are inclusive and either
//! may be left open. A disabled range admits every document.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// TIME RANGE
// =============================================================================

/// Optional window on document modification time.
///
/// # Example
///
/// ```
/// use notesieve_core::TimeRange;
///
/// let range = TimeRange::new(Some(1_000), Some(2_000));
/// assert!(range.contains(1_500));
/// assert!(!range.contains(2_001));
///
/// // Disabled ranges never exclude anything.
/// assert!(TimeRange::default().contains(0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Inclusive lower bound (epoch ms), `None` = open.
    pub start_time: Option<i64>,
    /// Inclusive upper bound (epoch ms), `None` = open.
    pub end_time: Option<i64>,
    /// Whether the filter applies at all.
    #[serde(default)]
    pub enabled: bool,
}

impl TimeRange {
    /// Create an enabled range from raw epoch-millisecond bounds.
    pub fn new(start_time: Option<i64>, end_time: Option<i64>) -> Self {
        Self {
            start_time,
            end_time,
            enabled: true,
        }
    }

    /// Create a disabled range (admits everything).
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Documents modified between two instants, inclusive.
    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self::new(Some(start.timestamp_millis()), Some(end.timestamp_millis()))
    }

    /// Documents modified at or after an instant.
    pub fn since(start: DateTime<Utc>) -> Self {
        Self::new(Some(start.timestamp_millis()), None)
    }

    /// Documents modified at or before an instant.
    pub fn until(end: DateTime<Utc>) -> Self {
        Self::new(None, Some(end.timestamp_millis()))
    }

    /// Whether the range constrains anything.
    pub fn is_active(&self) -> bool {
        self.enabled && (self.start_time.is_some() || self.end_time.is_some())
    }

    /// Check a modification time (epoch ms) against the range.
    pub fn contains(&self, modified_ms: i64) -> bool {
        if !self.enabled {
            return true;
        }
        if let Some(start) = self.start_time {
            if modified_ms < start {
                return false;
            }
        }
        if let Some(end) = self.end_time {
            if modified_ms > end {
                return false;
            }
        }
        true
    }

    /// Check a modification instant against the range.
    pub fn contains_datetime(&self, modified: DateTime<Utc>) -> bool {
        self.contains(modified.timestamp_millis())
    }
}

// =============================================================================
// NAMED TIME RANGES
// =============================================================================

/// Named windows for common "modified recently" queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NamedTimeRange {
    /// Last 60 minutes
    LastHour,
    /// Last 24 hours
    Today,
    /// Last 7 days
    ThisWeek,
    /// Last 30 days
    ThisMonth,
    /// Last 365 days
    ThisYear,
    /// All time (no temporal restriction)
    #[default]
    AllTime,
}

impl NamedTimeRange {
    /// Length of the window, `None` for `AllTime`.
    pub fn duration(&self) -> Option<Duration> {
        match self {
            Self::LastHour => Some(Duration::hours(1)),
            Self::Today => Some(Duration::hours(24)),
            Self::ThisWeek => Some(Duration::days(7)),
            Self::ThisMonth => Some(Duration::days(30)),
            Self::ThisYear => Some(Duration::days(365)),
            Self::AllTime => None,
        }
    }

    /// Convert to a concrete range ending at `now`.
    ///
    /// `AllTime` yields a disabled range.
    pub fn to_time_range(&self, now: DateTime<Utc>) -> TimeRange {
        match self.duration() {
            Some(window) => TimeRange::between(now - window, now),
            None => TimeRange::disabled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    #[test]
    fn test_disabled_range_admits_everything() {
        let range = TimeRange {
            start_time: Some(100),
            end_time: Some(200),
            enabled: false,
        };
        assert!(range.contains(0));
        assert!(range.contains(1_000));
        assert!(!range.is_active());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let range = TimeRange::new(Some(100), Some(200));
        assert!(!range.contains(99));
        assert!(range.contains(100));
        assert!(range.contains(200));
        assert!(!range.contains(201));
    }

    #[test]
    fn test_open_bounds() {
        let since = TimeRange::since(at(100));
        assert!(since.contains(i64::MAX));
        assert!(!since.contains(99));

        let until = TimeRange::until(at(100));
        assert!(until.contains(i64::MIN));
        assert!(!until.contains(101));

        let open = TimeRange::new(None, None);
        assert!(open.contains(42));
        assert!(!open.is_active());
    }

    #[test]
    fn test_contains_datetime() {
        let range = TimeRange::between(at(1_000), at(2_000));
        assert!(range.contains_datetime(at(1_500)));
        assert!(!range.contains_datetime(at(2_500)));
    }

    #[test]
    fn test_named_range_to_time_range() {
        let now = at(10 * 24 * 3_600_000);
        let week = NamedTimeRange::ThisWeek.to_time_range(now);
        assert!(week.enabled);
        assert_eq!(week.end_time, Some(now.timestamp_millis()));
        assert_eq!(
            week.start_time,
            Some((now - Duration::days(7)).timestamp_millis())
        );
        assert!(!week.contains((now - Duration::days(8)).timestamp_millis()));

        let all = NamedTimeRange::AllTime.to_time_range(now);
        assert!(!all.enabled);
    }

    #[test]
    fn test_time_range_json_nulls() {
        let range: TimeRange =
            serde_json::from_str(r#"{"start_time": null, "end_time": 5, "enabled": true}"#)
                .unwrap();
        assert_eq!(range, TimeRange::new(None, Some(5)));
    }
}
