//! Destination metrics provider trait and the comparison run.

use async_trait::async_trait;
use std::collections::BTreeMap;

use super::model::{
    BudgetMetrics, ComparisonPreferences, ComparisonResult, DateRange, DestinationComparison,
    DestinationMetrics, PopularDestination, TravelMetrics, WeatherMetrics,
};
use super::selection::{DestinationSelection, MIN_TO_COMPARE};
use crate::error::{Result, WaypointError};

/// External source of destination data.
///
/// Implementations may call a remote service or read a local dataset. The
/// comparison flow only relies on this interface.
#[async_trait]
pub trait DestinationMetricsProvider: Send + Sync {
    /// Scores the given destinations against the traveler's preferences.
    async fn compare_destinations(
        &self,
        destination_ids: &[String],
        travel_dates: &DateRange,
        preferences: &ComparisonPreferences,
    ) -> Result<DestinationComparison>;

    async fn travel_metrics(&self, destination_id: &str) -> Result<TravelMetrics>;

    async fn weather_metrics(&self, destination_id: &str) -> Result<WeatherMetrics>;

    async fn budget_metrics(&self, destination_id: &str) -> Result<BudgetMetrics>;

    async fn popular_destinations(&self) -> Result<Vec<PopularDestination>>;
}

/// Runs a comparison: the verdict first, then every metric for each selected
/// destination, one destination at a time.
pub async fn run_comparison(
    provider: &dyn DestinationMetricsProvider,
    selection: &DestinationSelection,
    travel_dates: &DateRange,
    preferences: &ComparisonPreferences,
) -> Result<ComparisonResult> {
    if !selection.can_compare() {
        return Err(WaypointError::validation(format!(
            "select at least {} destinations to compare",
            MIN_TO_COMPARE
        )));
    }

    let comparison = provider
        .compare_destinations(selection.ids(), travel_dates, preferences)
        .await?;

    let mut metrics = BTreeMap::new();
    for id in selection.ids() {
        let entry = DestinationMetrics {
            travel: provider.travel_metrics(id).await?,
            weather: provider.weather_metrics(id).await?,
            budget: provider.budget_metrics(id).await?,
        };
        metrics.insert(id.clone(), entry);
    }

    tracing::info!(
        "Compared {} destinations ({} recommendations)",
        selection.len(),
        comparison.recommendations.len()
    );
    Ok(ComparisonResult {
        comparison,
        metrics,
    })
}
