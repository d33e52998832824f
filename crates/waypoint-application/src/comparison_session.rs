//! Destination comparison use case.

use serde::{Deserialize, Serialize};
use waypoint_core::comparison::{
    ComparisonPreferences, ComparisonResult, DateRange, DestinationMetricsProvider,
    DestinationSelection, PopularDestination, SelectionChange, run_comparison,
};
use waypoint_core::error::{Result, WaypointError};
use waypoint_core::export::ReportFile;
use waypoint_core::persistence::{FreshnessWindow, StorageKey};

use crate::context::PlannerContext;

const EXPORT_PREFIX: &str = "destination-comparison";

/// Everything the comparison screen keeps between runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonState {
    pub selection: DestinationSelection,
    pub preferences: ComparisonPreferences,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_dates: Option<DateRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<ComparisonResult>,
}

/// Selection, preferences and the last result for destination comparison.
///
/// Changing the selection or the preferences drops the previous result, since
/// it no longer describes what is on screen.
pub struct ComparisonSession {
    ctx: PlannerContext,
    window: FreshnessWindow,
    state: ComparisonState,
}

impl ComparisonSession {
    pub async fn mount(ctx: PlannerContext) -> Self {
        let window = ctx.freshness.comparison();
        let state = ctx
            .vault
            .load::<ComparisonState>(StorageKey::COMPARISON, window, ctx.clock.now())
            .await
            .unwrap_or_default();
        tracing::debug!(
            "Mounted comparison with {} selected destinations",
            state.selection.len()
        );
        Self { ctx, window, state }
    }

    pub fn window(&self) -> FreshnessWindow {
        self.window
    }

    pub fn state(&self) -> &ComparisonState {
        &self.state
    }

    pub fn selection(&self) -> &DestinationSelection {
        &self.state.selection
    }

    pub fn result(&self) -> Option<&ComparisonResult> {
        self.state.result.as_ref()
    }

    pub async fn toggle(&mut self, id: &str) -> Result<SelectionChange> {
        let change = self.state.selection.toggle(id);
        if change.changed() {
            self.state.result = None;
            self.persist().await?;
        }
        Ok(change)
    }

    pub async fn clear(&mut self) -> Result<()> {
        self.state.selection.clear();
        self.state.result = None;
        self.persist().await
    }

    pub async fn set_preferences(&mut self, preferences: ComparisonPreferences) -> Result<()> {
        if self.state.preferences == preferences {
            return Ok(());
        }
        self.state.preferences = preferences;
        self.state.result = None;
        self.persist().await
    }

    pub async fn set_travel_dates(&mut self, travel_dates: Option<DateRange>) -> Result<()> {
        if self.state.travel_dates == travel_dates {
            return Ok(());
        }
        self.state.travel_dates = travel_dates;
        self.state.result = None;
        self.persist().await
    }

    /// Compares the selected destinations and keeps the result.
    ///
    /// Without explicit dates the trip starts now and lasts the preferred
    /// number of nights. A provider failure leaves the previous state intact.
    pub async fn run(
        &mut self,
        provider: &dyn DestinationMetricsProvider,
    ) -> Result<&ComparisonResult> {
        let travel_dates = match self.state.travel_dates {
            Some(dates) => dates,
            None => {
                DateRange::starting(self.ctx.clock.now(), self.state.preferences.duration)?
            }
        };
        let result = run_comparison(
            provider,
            &self.state.selection,
            &travel_dates,
            &self.state.preferences,
        )
        .await?;

        self.state.result = Some(result);
        self.persist().await?;
        self.state
            .result
            .as_ref()
            .ok_or_else(|| WaypointError::internal("comparison result missing after run"))
    }

    pub async fn popular(
        &self,
        provider: &dyn DestinationMetricsProvider,
    ) -> Result<Vec<PopularDestination>> {
        provider.popular_destinations().await
    }

    /// The last result as a pretty-printed JSON file.
    pub fn export(&self) -> Result<ReportFile> {
        let result = self
            .state
            .result
            .as_ref()
            .ok_or_else(|| WaypointError::validation("run a comparison before exporting"))?;
        let contents = serde_json::to_string_pretty(result)?;
        Ok(ReportFile::with_extension(
            EXPORT_PREFIX,
            "json",
            self.ctx.clock.now(),
            contents,
        ))
    }

    pub async fn reset(&mut self) -> Result<()> {
        self.ctx.vault.clear(StorageKey::COMPARISON).await?;
        self.state = ComparisonState::default();
        tracing::info!("Reset destination comparison");
        Ok(())
    }

    async fn persist(&self) -> Result<()> {
        self.ctx
            .vault
            .save(StorageKey::COMPARISON, &self.state, self.ctx.clock.now())
            .await
    }
}
