//! Countdown state and the figures derived from it.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use super::milestones::{MILESTONES, Milestone};
use crate::error::{Result, WaypointError};
use crate::export::ExportProfile;

/// Milestones listed as "upcoming" at once.
pub const UPCOMING_SHOWN: usize = 3;

pub const COUNTDOWN_EXPORT: ExportProfile = ExportProfile {
    file_prefix: "cruise-countdown",
    email_type: "countdown-reminder",
    email_source: "cruise-countdown-tool",
    label: "Reminder",
};

const SECONDS_PER_DAY: i64 = 86_400;

/// The saved countdown. Departure is midnight UTC on `cruise_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CruiseCountdown {
    pub cruise_date: NaiveDate,
    #[serde(default)]
    pub cruise_name: String,
    #[serde(default)]
    pub cruise_line: String,
    #[serde(default)]
    pub destination: String,
    /// Last address a reminder went to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_email: Option<String>,
}

/// Whole units left until departure; all zero once it has passed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    pub fn between(now: DateTime<Utc>, target: DateTime<Utc>) -> Self {
        let total = (target - now).num_seconds();
        if total <= 0 {
            return Self::default();
        }
        Self {
            days: total / SECONDS_PER_DAY,
            hours: total % SECONDS_PER_DAY / 3600,
            minutes: total % 3600 / 60,
            seconds: total % 60,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Encouragement matched to how close departure is.
    pub fn message(&self) -> &'static str {
        match self.days {
            d if d > 100 => "Your dream cruise awaits! Plenty of time to plan.",
            d if d > 60 => "Getting closer! Time to start planning excursions.",
            d if d > 30 => "One month to go! Have you completed online check-in?",
            d if d > 14 => "Two weeks away! Time to start packing!",
            d if d > 7 => "One week! The excitement is building!",
            d if d > 1 => "Almost there! Final preparations time!",
            1 => "TOMORROW! Get some rest for your big day!",
            0 if self.hours > 0 => "TODAY IS THE DAY! Bon Voyage!",
            _ => "Have an amazing cruise!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MilestoneStatus {
    pub milestone: &'static Milestone,
    pub completed: bool,
}

impl CruiseCountdown {
    pub fn new(cruise_date: NaiveDate) -> Self {
        Self {
            cruise_date,
            cruise_name: String::new(),
            cruise_line: String::new(),
            destination: String::new(),
            reminder_email: None,
        }
    }

    /// Rejects departures before `today`.
    pub fn validate(&self, today: NaiveDate) -> Result<()> {
        if self.cruise_date < today {
            return Err(WaypointError::validation(format!(
                "cruise date {} is in the past",
                self.cruise_date
            )));
        }
        Ok(())
    }

    pub fn departure(&self) -> DateTime<Utc> {
        self.cruise_date.and_time(NaiveTime::MIN).and_utc()
    }

    pub fn time_left(&self, now: DateTime<Utc>) -> TimeLeft {
        TimeLeft::between(now, self.departure())
    }

    /// Whole days to departure, rounded down; negative once it has passed.
    pub fn days_left(&self, now: DateTime<Utc>) -> i64 {
        (self.departure() - now).num_seconds().div_euclid(SECONDS_PER_DAY)
    }

    /// Every milestone; one is completed once fewer days than its
    /// `days_out` remain.
    pub fn milestones(&self, now: DateTime<Utc>) -> Vec<MilestoneStatus> {
        let days_left = self.days_left(now);
        MILESTONES
            .iter()
            .map(|milestone| MilestoneStatus {
                milestone,
                completed: days_left < milestone.days_out,
            })
            .collect()
    }

    pub fn upcoming(&self, now: DateTime<Utc>) -> Vec<&'static Milestone> {
        self.milestones(now)
            .into_iter()
            .filter(|status| !status.completed)
            .map(|status| status.milestone)
            .take(UPCOMING_SHOWN)
            .collect()
    }

    pub fn completed(&self, now: DateTime<Utc>) -> Vec<&'static Milestone> {
        self.milestones(now)
            .into_iter()
            .filter(|status| status.completed)
            .map(|status| status.milestone)
            .collect()
    }

    /// "Line • Destination", whichever parts are set.
    pub fn subtitle(&self) -> Option<String> {
        let parts: Vec<&str> = [self.cruise_line.trim(), self.destination.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect();
        (!parts.is_empty()).then(|| parts.join(" • "))
    }

    /// Body of the milestone reminder email.
    pub fn reminder_message(&self, now: DateTime<Utc>) -> String {
        let mut text = String::new();
        let name = match self.cruise_name.trim() {
            "" => "Your cruise",
            name => name,
        };
        let _ = writeln!(text, "Cruise Countdown: {}", name);
        let _ = writeln!(text, "Departure: {}", self.cruise_date.format("%B %-d, %Y"));
        if let Some(subtitle) = self.subtitle() {
            let _ = writeln!(text, "{}", subtitle);
        }
        let _ = writeln!(text, "{} days to go", self.time_left(now).days);

        let upcoming = self.upcoming(now);
        if !upcoming.is_empty() {
            let _ = writeln!(text, "\nUpcoming milestones:");
            for milestone in upcoming {
                let _ = writeln!(
                    text,
                    "- {} ({} days before): {}",
                    milestone.title, milestone.days_out, milestone.description
                );
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn countdown() -> CruiseCountdown {
        CruiseCountdown {
            cruise_name: "7-Day Caribbean".to_string(),
            cruise_line: "Royal Caribbean".to_string(),
            destination: "Eastern Caribbean".to_string(),
            ..CruiseCountdown::new(NaiveDate::from_ymd_opt(2026, 6, 1).unwrap())
        }
    }

    fn at(month: u32, day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, month, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_time_left_breakdown() {
        let left = countdown().time_left(Utc.with_ymd_and_hms(2026, 5, 1, 11, 15, 20).unwrap());
        assert_eq!(
            left,
            TimeLeft {
                days: 30,
                hours: 12,
                minutes: 44,
                seconds: 40
            }
        );
        assert!(countdown().time_left(at(6, 2, 0)).is_zero());
        assert!(countdown().time_left(at(6, 1, 0)).is_zero());
    }

    #[test]
    fn test_milestones_complete_as_days_pass() {
        let countdown = countdown();
        let now = at(5, 1, 12);
        assert_eq!(countdown.days_left(now), 30);

        let completed: Vec<i64> = countdown.completed(now).iter().map(|m| m.days_out).collect();
        assert_eq!(completed, vec![120, 90, 75, 60, 45]);
        let upcoming: Vec<&str> = countdown.upcoming(now).iter().map(|m| m.title).collect();
        assert_eq!(
            upcoming,
            vec!["Pre-Cruise Purchases", "Travel Insurance Deadline", "Start Packing"]
        );

        let after = at(6, 2, 0);
        assert_eq!(countdown.days_left(after), -1);
        assert!(countdown.upcoming(after).is_empty());
        assert_eq!(countdown.completed(after).len(), MILESTONES.len());
    }

    #[test]
    fn test_messages_by_distance() {
        let countdown = countdown();
        let message = |now| countdown.time_left(now).message();
        assert_eq!(message(at(1, 1, 0)), "Your dream cruise awaits! Plenty of time to plan.");
        assert_eq!(message(at(5, 1, 12)), "Two weeks away! Time to start packing!");
        assert_eq!(message(at(5, 30, 12)), "TOMORROW! Get some rest for your big day!");
        assert_eq!(message(at(5, 31, 20)), "TODAY IS THE DAY! Bon Voyage!");
        assert_eq!(message(at(6, 3, 0)), "Have an amazing cruise!");
    }

    #[test]
    fn test_past_dates_are_rejected() {
        let countdown = countdown();
        assert!(countdown.validate(NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()).is_ok());
        let err = countdown
            .validate(NaiveDate::from_ymd_opt(2026, 6, 2).unwrap())
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_reminder_message() {
        let text = countdown().reminder_message(at(5, 1, 12));
        assert!(text.starts_with("Cruise Countdown: 7-Day Caribbean\nDeparture: June 1, 2026\n"));
        assert!(text.contains("Royal Caribbean • Eastern Caribbean\n30 days to go\n"));
        assert!(text.contains("- Pre-Cruise Purchases (30 days before): "));

        let bare = CruiseCountdown::new(NaiveDate::from_ymd_opt(2026, 6, 1).unwrap());
        assert!(bare.subtitle().is_none());
        assert!(bare.reminder_message(at(5, 1, 12)).starts_with("Cruise Countdown: Your cruise\n"));
    }

    #[test]
    fn test_stored_field_names() {
        let json = serde_json::to_value(countdown()).unwrap();
        assert_eq!(json["cruiseDate"], "2026-06-01");
        assert_eq!(json["cruiseName"], "7-Day Caribbean");
        assert!(json.get("reminderEmail").is_none());
    }
}
