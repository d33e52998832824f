//! Destination comparison domain module.
//!
//! Lines up two or three destinations and collects travel, weather and cost
//! figures for each from a [`DestinationMetricsProvider`].

pub mod catalog;
pub mod model;
pub mod provider;
mod selection;

pub use catalog::{DESTINATIONS, DestinationOption, find_destination};
pub use model::{
    BudgetMetrics, ComparisonPreferences, ComparisonResult, DateRange, DestinationComparison,
    DestinationMetrics, PopularDestination, PriceTiers, Recommendation, TemperatureRange,
    TravelMetrics, WeatherMetrics,
};
pub use provider::{DestinationMetricsProvider, run_comparison};
pub use selection::{DestinationSelection, MAX_SELECTED, MIN_TO_COMPARE, SelectionChange};
