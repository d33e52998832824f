//! Budget planner as a [`PlannerTool`].

use minijinja::context;
use serde::Serialize;

use super::model::{BudgetConfig, BudgetSection, ExpenseDetail};
use super::plan::{BudgetPlan, derive_budget};
use super::table::{BUDGET_TIPS, LOCAL_SAVINGS};
use crate::config::FreshnessConfig;
use crate::error::Result;
use crate::export::{ExportProfile, ReportContext, format_usd, line_groups, print_glyph, render};
use crate::item::ItemList;
use crate::persistence::{FreshnessWindow, StorageKey};
use crate::tool::PlannerTool;

pub struct BudgetPlanner;

#[derive(Serialize)]
struct EmailRow<'a> {
    name: &'a str,
    planned: f64,
    share: String,
}

impl PlannerTool for BudgetPlanner {
    type Config = BudgetConfig;
    type Detail = ExpenseDetail;
    type Plan = BudgetPlan;

    const NAME: &'static str = "budget";
    const STORAGE_KEY: StorageKey = StorageKey::BUDGET;
    const EXPORT: ExportProfile = ExportProfile {
        file_prefix: "cruise-budget",
        email_type: "budget-plan",
        email_source: "budget-planner-tool",
        label: "Budget plan",
    };

    fn freshness(config: &FreshnessConfig) -> FreshnessWindow {
        config.budget()
    }

    fn derive(config: &BudgetConfig) -> Result<BudgetPlan> {
        derive_budget(config)
    }

    fn items(plan: &BudgetPlan) -> &ItemList<ExpenseDetail> {
        &plan.items
    }

    fn items_mut(plan: &mut BudgetPlan) -> &mut ItemList<ExpenseDetail> {
        &mut plan.items
    }

    fn add_custom(plan: &mut BudgetPlan, name: &str, category: Option<&str>) -> Option<String> {
        let section = BudgetSection::Miscellaneous.to_string();
        plan.add_custom_expense(name, category.unwrap_or(&section), 0.0)
    }

    fn render_report(plan: &BudgetPlan, ctx: &ReportContext) -> Result<String> {
        render(
            "budget_report.txt",
            context! {
                generated => ctx.generated_label(),
                config => &plan.config,
                style => plan.config.style.title(),
                summary => plan.summary(),
                tips => BUDGET_TIPS,
                savings => LOCAL_SAVINGS,
                contact => &ctx.contact,
            },
        )
    }

    fn render_print(plan: &BudgetPlan) -> Result<String> {
        let config = &plan.config;
        let summary = plan.summary();
        let details = vec![
            format!("Total Budget: {}", format_usd(config.total_budget)),
            format!("Travelers: {}", config.travelers),
            format!("Duration: {} nights", config.nights),
            format!("Budget Type: {}", config.style.title()),
            format!(
                "Spent: {} of {} planned",
                format_usd(summary.total_actual),
                format_usd(summary.total_planned)
            ),
        ];
        let groups = line_groups(
            &plan.items,
            |section| section.to_string(),
            |item| {
                format!(
                    "{} {}: planned {}, actual {}",
                    print_glyph(item.checked),
                    item.name,
                    format_usd(item.detail.planned),
                    format_usd(item.detail.actual)
                )
            },
        );
        render(
            "print.txt",
            context! { title => "CRUISE BUDGET PLAN", details => details, groups => groups },
        )
    }

    fn email_summary(plan: &BudgetPlan) -> Result<String> {
        let total = plan.config.total_budget;
        let rows: Vec<EmailRow<'_>> = plan
            .items
            .iter()
            .map(|item| EmailRow {
                name: &item.name,
                planned: item.detail.planned,
                share: format!(
                    "{:.1}",
                    if total > 0.0 {
                        item.detail.planned / total * 100.0
                    } else {
                        0.0
                    }
                ),
            })
            .collect();
        render(
            "budget_email.txt",
            context! { summary => plan.summary(), rows => rows, tips => BUDGET_TIPS },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::{BudgetStyle, ExpenseField};
    use crate::config::ContactInfo;
    use chrono::{TimeZone, Utc};

    fn plan() -> BudgetPlan {
        let mut plan =
            derive_budget(&BudgetConfig::new(5000.0, 2, 7, BudgetStyle::Moderate)).unwrap();
        plan.items.update_field("item-0", ExpenseField::Actual, 2100.0);
        plan.items.toggle_checked("item-0");
        plan
    }

    fn ctx() -> ReportContext {
        ReportContext::new(
            Utc.with_ymd_and_hms(2026, 2, 14, 10, 0, 0).unwrap(),
            ContactInfo::default(),
        )
    }

    #[test]
    fn test_report_sections() {
        let text = BudgetPlanner::render_report(&plan(), &ctx()).unwrap();
        assert!(text.starts_with("CRUISE BUDGET PLANNER\nGenerated: 2/14/2026"));
        assert!(text.contains("- Total Budget: $5,000"));
        assert!(text.contains("- Budget Type: Moderate"));
        assert!(text.contains("Cruise Fare:\n- Planned: $2,000\n- Actual: $2,100\n- OVER Budget: $100"));
        assert!(text.contains("Airfare:\n- Planned: $750\n- Actual: $0\n- Under Budget: $750"));
        assert!(text.contains("- Status: Paid"));
        assert!(text.contains("- Emergency Fund: $500"));
        assert!(text.contains("- Daily Budget: $714"));
        assert!(text.contains("- Per Person Per Day: $357"));
        assert!(text.contains("Phone: 833-874-1019"));
        assert!(text.contains("Website: nexttripanywhere.com"));
    }

    #[test]
    fn test_email_summary() {
        let text = BudgetPlanner::email_summary(&plan()).unwrap();
        assert!(text.starts_with("Travel Budget Plan:"));
        assert!(text.contains("Total Allocated: $5,000"));
        assert!(text.contains("- Cruise Fare: $2,000 (40.0%)"));
        assert!(text.contains("Remaining: $2,900"));
    }

    #[test]
    fn test_print_sheet_has_plain_checkboxes() {
        let text = BudgetPlanner::render_print(&plan()).unwrap();
        assert!(text.contains("[x] Cruise Fare: planned $2,000, actual $2,100"));
        assert!(text.contains("[ ] Airfare"));
        assert!(text.contains("Pre-Trip Costs"));
        assert!(!text.contains("Phone:"));
    }

    #[test]
    fn test_custom_row_defaults_to_miscellaneous() {
        let mut plan = plan();
        let id = BudgetPlanner::add_custom(&mut plan, "Souvenirs", None).unwrap();
        assert_eq!(plan.items.get(&id).unwrap().category, "Miscellaneous");
    }
}
