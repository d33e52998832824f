//! The planner tool abstraction.
//!
//! Budget planner, packing checklist and itinerary builder all follow the same
//! life cycle: configure, derive rows, edit rows, persist, export. A
//! [`PlannerTool`] supplies the parts that differ; the session driving the
//! life cycle is shared.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Debug;

use crate::config::FreshnessConfig;
use crate::error::Result;
use crate::export::{ExportProfile, ReportContext};
use crate::item::{DEFAULT_CUSTOM_CATEGORY, ItemList, LineDetail};
use crate::persistence::{FreshnessWindow, StorageKey};

pub trait PlannerTool: Send + Sync + 'static {
    /// Parameters the user fills in before derivation.
    type Config: Clone + Debug + Serialize + DeserializeOwned + Send + Sync;
    /// Numbers carried on each row.
    type Detail: LineDetail + Debug + Serialize + DeserializeOwned + Send + Sync;
    /// Everything persisted for this tool.
    type Plan: Clone + Debug + Serialize + DeserializeOwned + Send + Sync;

    /// Short name used in logs and on the command line.
    const NAME: &'static str;
    const STORAGE_KEY: StorageKey;
    const EXPORT: ExportProfile;

    /// How long a saved plan stays restorable.
    fn freshness(config: &FreshnessConfig) -> FreshnessWindow;

    /// Builds a fresh plan from static tables.
    fn derive(config: &Self::Config) -> Result<Self::Plan>;

    fn items(plan: &Self::Plan) -> &ItemList<Self::Detail>;

    fn items_mut(plan: &mut Self::Plan) -> &mut ItemList<Self::Detail>;

    /// Adds a hand-entered row. Returns its id, or `None` when rejected.
    fn add_custom(plan: &mut Self::Plan, name: &str, category: Option<&str>) -> Option<String> {
        Self::items_mut(plan).add_custom_item(name, category.unwrap_or(DEFAULT_CUSTOM_CATEGORY))
    }

    /// Human-readable name for a stored category label.
    fn category_label(category: &str) -> String {
        category.to_string()
    }

    /// Full downloadable text report.
    fn render_report(plan: &Self::Plan, ctx: &ReportContext) -> Result<String>;

    /// Printer-friendly sheet with plain checkboxes.
    fn render_print(plan: &Self::Plan) -> Result<String>;

    /// Condensed text posted to the email webhook.
    fn email_summary(plan: &Self::Plan) -> Result<String>;
}
