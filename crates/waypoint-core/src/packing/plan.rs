//! Packing checklist derivation.

use serde::{Deserialize, Serialize};

use super::model::{PackingCategory, PackingConfig, PackingDetail, Season};
use super::table::{BASE_CATEGORIES, WINTER_ITEMS};
use crate::error::Result;
use crate::item::ItemList;

/// A generated packing checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackingPlan {
    pub config: PackingConfig,
    pub items: ItemList<PackingDetail>,
}

impl PackingPlan {
    /// `(packed, total)`.
    pub fn progress(&self) -> (usize, usize) {
        (self.items.checked_count(), self.items.len())
    }
}

/// Expands a configuration into a checklist.
///
/// Sources are applied in priority order: base categories, then destination
/// items, then each selected activity, then winter gear. A name that is already
/// on the list is skipped, so an earlier source always wins.
pub fn derive_packing(config: &PackingConfig) -> Result<PackingPlan> {
    config.validate()?;
    let nights = config.nights;
    let mut items = ItemList::new();

    for category in BASE_CATEGORIES {
        for &name in category.base_items() {
            let detail = if name.contains("Underwear") || name.contains("Socks") {
                PackingDetail::with_quantity(scaled(nights, 1.5))
            } else {
                PackingDetail::default()
            };
            items.push_template_unique(name, category.to_string(), detail);
        }
    }

    let sources = std::iter::once((PackingCategory::Destination, config.destination.items()))
        .chain(
            config
                .activities
                .iter()
                .map(|activity| (PackingCategory::Activities, activity.items())),
        );
    for (category, names) in sources {
        for &name in names {
            items.push_template_unique(name, category.to_string(), PackingDetail::default());
        }
    }

    if config.season == Season::Winter {
        for &name in WINTER_ITEMS {
            items.push_template_unique(
                name,
                PackingCategory::Seasonal.to_string(),
                PackingDetail::default(),
            );
        }
    }

    apply_duration_quantities(&mut items, nights);

    tracing::info!(
        "Derived packing checklist of {} items for {} ({} nights)",
        items.len(),
        config.destination,
        nights
    );
    Ok(PackingPlan {
        config: config.clone(),
        items,
    })
}

fn apply_duration_quantities(items: &mut ItemList<PackingDetail>, nights: u32) {
    for item in items.iter_mut() {
        if item.name.contains("Casual Daywear") {
            item.detail.quantity = Some(scaled(nights, 0.75));
        }
        if item.name.contains("Evening/Formal Wear") {
            item.detail.quantity = Some(if nights >= 7 { 2 } else { 1 });
        }
    }
}

fn scaled(nights: u32, factor: f64) -> u32 {
    (nights as f64 * factor).ceil() as u32
}
