//! Destination comparison domain models.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::budget::BudgetStyle;
use crate::error::{Result, WaypointError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelMetrics {
    pub distance_from_newark: u32,
    pub flight_time: f64,
    pub average_flight_cost: f64,
    pub direct_flights: bool,
    #[serde(default)]
    pub airlines: Vec<String>,
    pub visa_required: bool,
    pub best_airport: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRange {
    pub high: f64,
    pub low: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherMetrics {
    pub average_temp: TemperatureRange,
    pub rainy_days: u32,
    /// Relative humidity in percent.
    pub humidity: u32,
    pub hurricane_risk: bool,
    /// Month numbers, 1 = January.
    #[serde(default)]
    pub best_months: Vec<u8>,
    #[serde(default)]
    pub worst_months: Vec<u8>,
}

/// The same cost at three spending levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTiers {
    pub budget: f64,
    pub mid_range: f64,
    pub luxury: f64,
}

impl PriceTiers {
    pub fn for_style(&self, style: BudgetStyle) -> f64 {
        match style {
            BudgetStyle::Budget => self.budget,
            BudgetStyle::Moderate => self.mid_range,
            BudgetStyle::Luxury => self.luxury,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetMetrics {
    pub daily_budget: PriceTiers,
    pub meal_cost: f64,
    pub transport_cost: f64,
    pub attraction_cost: f64,
    pub hotel_cost: PriceTiers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// A range of `nights` days starting at `start`.
    ///
    /// Fails when the end date falls outside the representable calendar.
    pub fn starting(start: DateTime<Utc>, nights: u32) -> Result<Self> {
        let end = TimeDelta::try_days(i64::from(nights))
            .and_then(|length| start.checked_add_signed(length))
            .ok_or_else(|| {
                WaypointError::validation(format!("A {} night trip is out of range", nights))
            })?;
        Ok(Self { start, end })
    }
}

/// What the traveler cares about when comparing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonPreferences {
    pub budget: BudgetStyle,
    pub duration: u32,
    /// 1 = January.
    pub travel_month: u32,
    pub group_size: u32,
    #[serde(default)]
    pub priorities: Vec<String>,
}

impl Default for ComparisonPreferences {
    fn default() -> Self {
        Self {
            budget: BudgetStyle::Moderate,
            duration: 7,
            travel_month: 1,
            group_size: 2,
            priorities: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub item_id: String,
    pub reason: String,
    /// 0 to 100.
    pub score: u8,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    #[serde(default)]
    pub best_for: Vec<String>,
}

/// Verdict returned by the metrics provider for a set of destinations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationComparison {
    pub id: String,
    pub destinations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_dates: Option<DateRange>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularDestination {
    pub id: String,
    pub name: String,
}

/// All metrics fetched for one destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationMetrics {
    pub travel: TravelMetrics,
    pub weather: WeatherMetrics,
    pub budget: BudgetMetrics,
}

/// A completed comparison, keyed by destination id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub comparison: DestinationComparison,
    pub metrics: BTreeMap<String, DestinationMetrics>,
}

impl ComparisonResult {
    /// Highest scoring recommendation, if the provider gave any.
    pub fn top_recommendation(&self) -> Option<&Recommendation> {
        self.comparison
            .recommendations
            .iter()
            .max_by_key(|recommendation| recommendation.score)
    }
}
