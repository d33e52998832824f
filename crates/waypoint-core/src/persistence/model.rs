//! Persisted session domain models.

use chrono::{DateTime, Duration, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed key a planner's snapshot is stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StorageKey(&'static str);

impl StorageKey {
    pub const BUDGET: StorageKey = StorageKey("cruiseBudget");
    pub const ITINERARY: StorageKey = StorageKey("cruiseItinerary");
    pub const PACKING: StorageKey = StorageKey("packingChecklist");
    pub const COMPARISON: StorageKey = StorageKey("destinationComparison");
    pub const PRICE_CALCULATOR: StorageKey = StorageKey("cruiseCalculatorPrefs");
    pub const COUNTDOWN: StorageKey = StorageKey("cruiseCountdown");

    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Maximum age a snapshot may have and still be restored on mount.
///
/// The comparison is strict: a snapshot exactly as old as the window is
/// already stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreshnessWindow {
    /// Restore regardless of age.
    Unbounded,
    /// Restore only while `now - timestamp < window`.
    Within(Duration),
}

impl FreshnessWindow {
    /// A window of `days`. Lengths past what chrono can represent admit
    /// every snapshot, same as [`FreshnessWindow::Unbounded`].
    pub fn days(days: i64) -> Self {
        TimeDelta::try_days(days).map_or(Self::Unbounded, Self::Within)
    }

    pub fn hours(hours: i64) -> Self {
        TimeDelta::try_hours(hours).map_or(Self::Unbounded, Self::Within)
    }

    /// Builds a window from an optional day count; `None` means any age.
    pub fn from_days(days: Option<i64>) -> Self {
        days.map_or(Self::Unbounded, Self::days)
    }

    pub fn admits(&self, saved_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self {
            Self::Unbounded => true,
            Self::Within(window) => now.signed_duration_since(saved_at) < *window,
        }
    }
}

/// The serialized form written for a planner: its state plus the time of the
/// write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot<S> {
    pub state: S,
    pub timestamp: DateTime<Utc>,
}

impl<S> Snapshot<S> {
    pub fn new(state: S, timestamp: DateTime<Utc>) -> Self {
        Self { state, timestamp }
    }
}

/// Source of the current time, injectable so freshness can be tested.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_window_boundary_is_exclusive() {
        let window = FreshnessWindow::days(30);
        let saved = at(1, 0);
        assert!(window.admits(saved, saved + Duration::days(30) - Duration::seconds(1)));
        assert!(!window.admits(saved, saved + Duration::days(30)));
    }

    #[test]
    fn test_hour_window() {
        let window = FreshnessWindow::hours(168);
        assert!(window.admits(at(1, 0), at(7, 23)));
        assert!(!window.admits(at(1, 0), at(8, 0)));
        assert!(!window.admits(at(1, 0), at(9, 0)));
    }

    #[test]
    fn test_unbounded_admits_anything() {
        let saved = at(1, 0);
        assert!(FreshnessWindow::Unbounded.admits(saved, saved + Duration::days(3650)));
        assert_eq!(FreshnessWindow::from_days(None), FreshnessWindow::Unbounded);
        assert_eq!(FreshnessWindow::from_days(Some(2)), FreshnessWindow::days(2));
    }

    #[test]
    fn test_oversized_window_does_not_panic() {
        assert_eq!(FreshnessWindow::days(200_000_000_000_000), FreshnessWindow::Unbounded);
        assert_eq!(FreshnessWindow::hours(i64::MAX), FreshnessWindow::Unbounded);
    }
}
