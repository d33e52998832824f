//! DestinationMetricsProvider backed by a TOML dataset.
//!
//! The bundled dataset ships with the binary. A `destinations.toml` in the
//! config directory replaces it wholesale.

use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use std::path::Path;
use uuid::Uuid;
use waypoint_core::budget::BudgetStyle;
use waypoint_core::comparison::{
    BudgetMetrics, ComparisonPreferences, DateRange, DestinationComparison,
    DestinationMetricsProvider, PopularDestination, Recommendation, TravelMetrics,
    WeatherMetrics,
};
use waypoint_core::error::{Result, WaypointError};

use crate::paths::WaypointPaths;

const BUNDLED_DATASET: &str = include_str!("../data/destinations.toml");

/// How many recommendations a comparison returns at most.
const MAX_RECOMMENDATIONS: usize = 3;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DestinationProfile {
    score: u8,
    #[serde(default)]
    pros: Vec<String>,
    #[serde(default)]
    cons: Vec<String>,
    #[serde(default)]
    best_for: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct DestinationRecord {
    id: String,
    name: String,
    #[serde(default)]
    popular: bool,
    travel: TravelMetrics,
    weather: WeatherMetrics,
    budget: BudgetMetrics,
    profile: DestinationProfile,
}

#[derive(Debug, Clone, Deserialize)]
struct Dataset {
    #[serde(rename = "destination", default)]
    destinations: Vec<DestinationRecord>,
}

/// Answers comparison queries from a fixed set of destination records.
#[derive(Debug, Clone)]
pub struct DatasetMetricsProvider {
    records: Vec<DestinationRecord>,
}

impl DatasetMetricsProvider {
    /// Provider over the dataset compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_toml(BUNDLED_DATASET)
    }

    pub fn from_toml(source: &str) -> Result<Self> {
        let dataset: Dataset = toml::from_str(source)?;
        Ok(Self {
            records: dataset.destinations,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml(&source)
    }

    /// The user's dataset if one exists, else the bundled one.
    pub fn default_location() -> Result<Self> {
        let path = WaypointPaths::destinations_file()?;
        if path.exists() {
            tracing::debug!("Loading destination dataset from {}", path.display());
            Self::from_file(&path)
        } else {
            Self::bundled()
        }
    }

    fn record(&self, destination_id: &str) -> Result<&DestinationRecord> {
        self.records
            .iter()
            .find(|record| record.id == destination_id)
            .ok_or_else(|| WaypointError::not_found("destination", destination_id))
    }

    fn score(record: &DestinationRecord, preferences: &ComparisonPreferences) -> u8 {
        let month = preferences.travel_month;
        let mut score = i32::from(record.profile.score);
        if record.weather.best_months.iter().any(|&m| u32::from(m) == month) {
            score += 10;
        }
        if record.weather.worst_months.iter().any(|&m| u32::from(m) == month) {
            score -= 15;
        }
        let daily = record.budget.daily_budget;
        match preferences.budget {
            BudgetStyle::Budget if daily.budget < 100.0 => score += 5,
            BudgetStyle::Luxury if daily.luxury >= 600.0 => score += 5,
            _ => {}
        }
        score.clamp(0, 100) as u8
    }
}

fn reason(name: &str, score: u8) -> String {
    if score >= 80 {
        format!(
            "{} is an excellent choice with great weather for your dates and easy access from Newark.",
            name
        )
    } else if score >= 60 {
        format!(
            "{} offers a good balance of attractions, weather, and accessibility.",
            name
        )
    } else {
        format!(
            "{} may require more travel time but offers unique experiences.",
            name
        )
    }
}

#[async_trait]
impl DestinationMetricsProvider for DatasetMetricsProvider {
    async fn compare_destinations(
        &self,
        destination_ids: &[String],
        travel_dates: &DateRange,
        preferences: &ComparisonPreferences,
    ) -> Result<DestinationComparison> {
        let mut recommendations = destination_ids
            .iter()
            .map(|id| {
                let record = self.record(id)?;
                let score = Self::score(record, preferences);
                Ok(Recommendation {
                    item_id: record.id.clone(),
                    reason: reason(&record.name, score),
                    score,
                    pros: record.profile.pros.clone(),
                    cons: record.profile.cons.clone(),
                    best_for: record.profile.best_for.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        recommendations.sort_by(|a, b| b.score.cmp(&a.score));
        recommendations.truncate(MAX_RECOMMENDATIONS);

        Ok(DestinationComparison {
            id: format!("dest-comparison-{}", Uuid::new_v4()),
            destinations: destination_ids.to_vec(),
            travel_dates: Some(*travel_dates),
            recommendations,
            created_at: Utc::now(),
        })
    }

    async fn travel_metrics(&self, destination_id: &str) -> Result<TravelMetrics> {
        Ok(self.record(destination_id)?.travel.clone())
    }

    async fn weather_metrics(&self, destination_id: &str) -> Result<WeatherMetrics> {
        Ok(self.record(destination_id)?.weather.clone())
    }

    async fn budget_metrics(&self, destination_id: &str) -> Result<BudgetMetrics> {
        Ok(self.record(destination_id)?.budget.clone())
    }

    async fn popular_destinations(&self) -> Result<Vec<PopularDestination>> {
        Ok(self
            .records
            .iter()
            .filter(|record| record.popular)
            .map(|record| PopularDestination {
                id: record.id.clone(),
                name: record.name.clone(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use waypoint_core::comparison::DESTINATIONS;

    fn dates() -> DateRange {
        DateRange::starting(Utc.with_ymd_and_hms(2026, 9, 5, 0, 0, 0).unwrap(), 7).unwrap()
    }

    #[test]
    fn test_bundled_dataset_covers_catalog() {
        let provider = DatasetMetricsProvider::bundled().unwrap();
        assert_eq!(provider.records.len(), DESTINATIONS.len());
        for option in DESTINATIONS {
            let record = provider.record(option.id).unwrap();
            assert_eq!(record.travel.distance_from_newark, option.distance_from_newark);
        }
    }

    #[tokio::test]
    async fn test_metrics_lookup() {
        let provider = DatasetMetricsProvider::bundled().unwrap();
        let travel = provider.travel_metrics("europe").await.unwrap();
        assert!(travel.visa_required);
        let budget = provider.budget_metrics("mexico").await.unwrap();
        assert_eq!(budget.daily_budget.mid_range, 150.0);
        assert!(
            provider
                .weather_metrics("atlantis")
                .await
                .unwrap_err()
                .is_not_found()
        );
    }

    #[tokio::test]
    async fn test_month_shifts_ranking() {
        let provider = DatasetMetricsProvider::bundled().unwrap();
        let ids = vec!["caribbean".to_string(), "bermuda".to_string()];

        let september = ComparisonPreferences {
            travel_month: 9,
            ..ComparisonPreferences::default()
        };
        let result = provider
            .compare_destinations(&ids, &dates(), &september)
            .await
            .unwrap();
        // Caribbean drops to 63 in hurricane season; Bermuda stays at 76.
        assert_eq!(result.recommendations[0].item_id, "bermuda");
        assert_eq!(result.recommendations[1].score, 63);

        let february = ComparisonPreferences {
            travel_month: 2,
            ..ComparisonPreferences::default()
        };
        let result = provider
            .compare_destinations(&ids, &dates(), &february)
            .await
            .unwrap();
        assert_eq!(result.recommendations[0].item_id, "caribbean");
        assert_eq!(result.recommendations[0].score, 88);
        assert!(result.recommendations[0].reason.contains("excellent"));
    }

    #[tokio::test]
    async fn test_popular_destinations() {
        let provider = DatasetMetricsProvider::bundled().unwrap();
        let popular = provider.popular_destinations().await.unwrap();
        let ids: Vec<_> = popular.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["caribbean", "mexico", "bahamas", "bermuda"]);
    }

    #[test]
    fn test_override_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("destinations.toml");
        std::fs::write(&path, "").unwrap();
        let provider = DatasetMetricsProvider::from_file(&path).unwrap();
        assert!(provider.records.is_empty());
    }
}
