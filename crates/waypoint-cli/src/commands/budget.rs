use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use colored::Colorize;
use waypoint_core::budget::{
    BudgetConfig, BudgetPlan, BudgetPlanner, BudgetStyle, ExpenseDetail, ExpenseField,
};
use waypoint_core::export::format_usd;

use super::AppState;
use super::items::{self, ItemAction, ToolView};
use crate::output;

#[derive(Subcommand)]
pub enum BudgetAction {
    /// Create a budget from a total amount
    Plan {
        /// Total trip budget in dollars
        #[arg(long, default_value_t = 5000.0)]
        total: f64,
        #[arg(long, default_value_t = 2)]
        travelers: u32,
        #[arg(long, default_value_t = 7)]
        nights: u32,
        /// budget, moderate or luxury
        #[arg(long, default_value_t = BudgetStyle::Moderate)]
        style: BudgetStyle,
    },
    /// Set the planned or actual amount of a category
    Set {
        id: String,
        field: AmountField,
        amount: f64,
    },
    /// Totals, remaining money and per-category variance
    Summary,
    #[command(flatten)]
    Item(ItemAction),
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AmountField {
    Planned,
    Actual,
}

impl From<AmountField> for ExpenseField {
    fn from(field: AmountField) -> Self {
        match field {
            AmountField::Planned => ExpenseField::Planned,
            AmountField::Actual => ExpenseField::Actual,
        }
    }
}

impl ToolView for BudgetPlanner {
    fn headline(plan: &BudgetPlan) -> Vec<String> {
        let config = &plan.config;
        let summary = plan.summary();
        vec![
            format!(
                "{} budget for {} traveler(s), {} nights ({})",
                format_usd(config.total_budget),
                config.travelers,
                config.nights,
                config.style.title()
            ),
            format!(
                "Spent {} of {} planned, {} remaining",
                format_usd(summary.total_actual),
                format_usd(summary.total_planned),
                format_usd(summary.remaining)
            ),
        ]
    }

    fn describe(detail: &ExpenseDetail) -> String {
        let actual = format_usd(detail.actual);
        let actual = if detail.is_over() {
            actual.red().to_string()
        } else {
            actual
        };
        format!("planned {}, actual {}", format_usd(detail.planned), actual)
    }
}

pub async fn run(state: &AppState, action: BudgetAction) -> Result<()> {
    let mut session = items::mount::<BudgetPlanner>(state).await;

    match action {
        BudgetAction::Plan {
            total,
            travelers,
            nights,
            style,
        } => {
            let plan = session
                .generate(BudgetConfig::new(total, travelers, nights, style))
                .await?;
            output::success(format!(
                "Created a {} plan with {} categories",
                style.title().to_lowercase(),
                plan.items.len()
            ));
        }
        BudgetAction::Set { id, field, amount } => {
            let changed = session.update_field(&id, field.into(), amount).await?;
            output::outcome(changed, format!("Updated {}", id), &id);
        }
        BudgetAction::Summary => {
            let plan = items::require_plan(&session)?;
            print_summary(plan);
        }
        BudgetAction::Item(action) => items::handle(state, &mut session, action).await?,
    }
    Ok(())
}

fn print_summary(plan: &BudgetPlan) {
    let summary = plan.summary();
    output::heading("Budget summary");
    println!("  Total budget:    {}", format_usd(summary.total_budget));
    println!("  Planned:         {}", format_usd(summary.total_planned));
    println!("  Spent:           {}", format_usd(summary.total_actual));
    println!("  Remaining:       {}", format_usd(summary.remaining));
    println!("  Used:            {:.1}%", summary.percent_used);
    println!("  Daily budget:    {}", format_usd(summary.daily_budget));
    println!("  Emergency fund:  {}", format_usd(summary.emergency_fund));
    println!("  Per person:      {}", format_usd(summary.per_person));
    println!("  Per person/day:  {}", format_usd(summary.per_person_daily));

    output::section("Variance");
    for category in summary.categories.iter().filter(|c| c.actual > 0.0) {
        let line = format!(
            "  {}: {} {}",
            category.name,
            format_usd(category.difference),
            if category.over { "over" } else { "under" }
        );
        if category.over {
            println!("{}", line.red());
        } else {
            println!("{}", line.green());
        }
    }
}
