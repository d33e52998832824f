use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use clap::Subcommand;
use colored::Colorize;
use std::path::PathBuf;
use waypoint_application::ComparisonSession;
use waypoint_core::budget::BudgetStyle;
use waypoint_core::comparison::{
    ComparisonPreferences, ComparisonResult, DESTINATIONS, DateRange, MAX_SELECTED,
    SelectionChange, find_destination,
};
use waypoint_core::export::format_usd;
use waypoint_infrastructure::{DatasetMetricsProvider, WaypointPaths};

use super::AppState;
use crate::output;

#[derive(Subcommand)]
pub enum CompareAction {
    /// List destinations that can be compared
    List,
    /// Select a destination, or deselect it if already selected
    Select { id: String },
    /// Deselect everything
    Clear,
    /// Set what matters for the comparison
    Prefs {
        /// budget, moderate or luxury
        #[arg(long)]
        budget: Option<BudgetStyle>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=365))]
        nights: Option<u32>,
        /// Travel month, 1-12
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
        #[arg(long)]
        group_size: Option<u32>,
        /// Trip start date, YYYY-MM-DD; the trip lasts the preferred nights
        #[arg(long)]
        start: Option<NaiveDate>,
    },
    /// Compare the selected destinations
    Run,
    /// Show the selection and the last result
    Show,
    /// Destinations most travelers pick
    Popular,
    /// Save the last result as JSON
    Export {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Forget the selection and result
    Reset,
}

fn provider() -> Result<DatasetMetricsProvider> {
    DatasetMetricsProvider::default_location().context("Failed to load destination data")
}

pub async fn run(state: &AppState, action: CompareAction) -> Result<()> {
    let mut session = ComparisonSession::mount(state.ctx.clone()).await;

    match action {
        CompareAction::List => {
            for destination in DESTINATIONS {
                let marker = if session.selection().contains(destination.id) {
                    "*".green().to_string()
                } else {
                    " ".to_string()
                };
                println!(
                    " {} {:<10} {} ({}, {:.1}h from Newark)",
                    marker,
                    destination.id,
                    destination.name,
                    destination.region,
                    destination.flight_time
                );
            }
        }
        CompareAction::Select { id } => match session.toggle(&id).await? {
            SelectionChange::Added => output::success(format!("Selected {}", id)),
            SelectionChange::Removed => output::success(format!("Deselected {}", id)),
            SelectionChange::Full => bail!(
                "Already comparing {} destinations; deselect one first",
                MAX_SELECTED
            ),
            SelectionChange::Unknown => {
                bail!("Unknown destination '{}'. See `waypoint compare list`.", id)
            }
        },
        CompareAction::Clear => {
            session.clear().await?;
            output::success("Cleared the selection");
        }
        CompareAction::Prefs {
            budget,
            nights,
            month,
            group_size,
            start,
        } => {
            let current = session.state().preferences.clone();
            let preferences = ComparisonPreferences {
                budget: budget.unwrap_or(current.budget),
                duration: nights.unwrap_or(current.duration),
                travel_month: month.unwrap_or(current.travel_month),
                group_size: group_size.unwrap_or(current.group_size),
                priorities: current.priorities,
            };
            let duration = preferences.duration;
            session.set_preferences(preferences).await?;
            if let Some(date) = start {
                let start = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
                session
                    .set_travel_dates(Some(DateRange::starting(start, duration)?))
                    .await?;
            }
            output::success("Saved preferences");
        }
        CompareAction::Run => {
            let provider = provider()?;
            let result = session.run(&provider).await?;
            print_result(result);
        }
        CompareAction::Show => {
            let names: Vec<_> = session
                .selection()
                .ids()
                .iter()
                .map(|id| display_name(id))
                .collect();
            output::heading(format!(
                "Selected ({}/{}): {}",
                names.len(),
                MAX_SELECTED,
                if names.is_empty() {
                    "none".to_string()
                } else {
                    names.join(", ")
                }
            ));
            match session.result() {
                Some(result) => print_result(result),
                None => output::skipped("No comparison yet; run `waypoint compare run`"),
            }
        }
        CompareAction::Popular => {
            let provider = provider()?;
            for destination in session.popular(&provider).await? {
                println!("  {:<10} {}", destination.id, destination.name);
            }
        }
        CompareAction::Export { out } => {
            let file = session.export()?;
            let dir = match out {
                Some(dir) => dir,
                None => WaypointPaths::report_dir()?,
            };
            let path = file
                .write_to(&dir)
                .with_context(|| format!("Failed to write into {}", dir.display()))?;
            output::success(format!("Saved {}", path.display()));
        }
        CompareAction::Reset => {
            session.reset().await?;
            output::success("Reset the destination comparison");
        }
    }
    Ok(())
}

fn display_name(id: &str) -> String {
    find_destination(id)
        .map(|destination| destination.name.to_string())
        .unwrap_or_else(|| id.to_string())
}

fn print_result(result: &ComparisonResult) {
    if let Some(top) = result.top_recommendation() {
        output::section(format!("Top pick: {}", display_name(&top.item_id)));
        println!("  {}", top.reason);
    }

    output::section("Scores");
    for recommendation in &result.comparison.recommendations {
        println!(
            "  {:<24} {:>3}/100",
            display_name(&recommendation.item_id),
            recommendation.score
        );
        if !recommendation.pros.is_empty() {
            println!("    {} {}", "+".green(), recommendation.pros.join(", "));
        }
        if !recommendation.cons.is_empty() {
            println!("    {} {}", "-".red(), recommendation.cons.join(", "));
        }
    }

    output::section("Metrics");
    for (id, metrics) in &result.metrics {
        println!(
            "  {:<24} {:.1}h flight, {} avg fare, {:.0}-{:.0}°F, {} mid-range/day",
            display_name(id),
            metrics.travel.flight_time,
            format_usd(metrics.travel.average_flight_cost),
            metrics.weather.average_temp.low,
            metrics.weather.average_temp.high,
            format_usd(metrics.budget.daily_budget.mid_range)
        );
    }
}
