//! Packing checklist as a [`PlannerTool`].

use minijinja::context;

use super::model::{PackingCategory, PackingConfig, PackingDetail};
use super::plan::{PackingPlan, derive_packing};
use super::table::AIRPORT_TIPS;
use crate::config::FreshnessConfig;
use crate::error::Result;
use crate::export::{ExportProfile, ReportContext, line_groups, print_glyph, render, report_glyph};
use crate::item::{ItemList, LineItem};
use crate::persistence::{FreshnessWindow, StorageKey};
use crate::tool::PlannerTool;

pub struct PackingPlanner;

fn item_line(glyph: &str, item: &LineItem<PackingDetail>) -> String {
    match item.detail.quantity {
        Some(quantity) => format!("{} {} ({})", glyph, item.name, quantity),
        None => format!("{} {}", glyph, item.name),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl PlannerTool for PackingPlanner {
    type Config = PackingConfig;
    type Detail = PackingDetail;
    type Plan = PackingPlan;

    const NAME: &'static str = "packing";
    const STORAGE_KEY: StorageKey = StorageKey::PACKING;
    const EXPORT: ExportProfile = ExportProfile {
        file_prefix: "packing-checklist",
        email_type: "packing-checklist",
        email_source: "packing-checklist-tool",
        label: "Checklist",
    };

    fn freshness(config: &FreshnessConfig) -> FreshnessWindow {
        config.packing()
    }

    fn derive(config: &PackingConfig) -> Result<PackingPlan> {
        derive_packing(config)
    }

    fn items(plan: &PackingPlan) -> &ItemList<PackingDetail> {
        &plan.items
    }

    fn items_mut(plan: &mut PackingPlan) -> &mut ItemList<PackingDetail> {
        &mut plan.items
    }

    fn add_custom(plan: &mut PackingPlan, name: &str, category: Option<&str>) -> Option<String> {
        let personal = PackingCategory::Personal.to_string();
        plan.items.add_custom_item(name, category.unwrap_or(&personal))
    }

    fn category_label(category: &str) -> String {
        PackingCategory::label_for(category).to_string()
    }

    fn render_report(plan: &PackingPlan, ctx: &ReportContext) -> Result<String> {
        let groups = line_groups(
            &plan.items,
            |key| PackingCategory::label_for(key).to_uppercase(),
            |item| item_line(report_glyph(item.checked), item),
        );
        render(
            "packing_report.txt",
            context! {
                generated => ctx.generated_label(),
                destination => plan.config.destination.title(),
                nights => plan.config.nights,
                season => capitalize(&plan.config.season.to_string()),
                groups => groups,
                tips => AIRPORT_TIPS,
                contact => &ctx.contact,
            },
        )
    }

    fn render_print(plan: &PackingPlan) -> Result<String> {
        let (packed, total) = plan.progress();
        let config = &plan.config;
        let mut details = vec![
            format!("Destination: {}", config.destination.title()),
            format!("Duration: {} nights", config.nights),
            format!("Season: {}", capitalize(&config.season.to_string())),
        ];
        if !config.activities.is_empty() {
            let activities: Vec<String> = config
                .activities
                .iter()
                .map(|activity| activity.to_string())
                .collect();
            details.push(format!("Activities: {}", activities.join(", ")));
        }
        details.push(format!("Packed: {}/{}", packed, total));

        let groups = line_groups(
            &plan.items,
            |key| PackingCategory::label_for(key).to_string(),
            |item| item_line(print_glyph(item.checked), item),
        );
        render(
            "print.txt",
            context! { title => "CRUISE PACKING CHECKLIST", details => details, groups => groups },
        )
    }

    fn email_summary(plan: &PackingPlan) -> Result<String> {
        let (packed, total) = plan.progress();
        let lines: Vec<String> = plan
            .items
            .iter()
            .map(|item| item_line(if item.checked { "✓" } else { "○" }, item))
            .collect();
        render(
            "packing_email.txt",
            context! {
                destination => plan.config.destination.title(),
                nights => plan.config.nights,
                packed => packed,
                total => total,
                lines => lines,
            },
        )
    }
}
