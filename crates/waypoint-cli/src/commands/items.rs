//! Actions every planner tool supports.

use anyhow::{Context, Result, bail};
use clap::Subcommand;
use colored::Colorize;
use std::path::PathBuf;
use waypoint_application::PlannerSession;
use waypoint_core::PlannerTool;
use waypoint_core::item::LineItem;
use waypoint_infrastructure::WaypointPaths;

use super::AppState;
use crate::output;

#[derive(Subcommand)]
pub enum ItemAction {
    /// List the plan grouped by category
    Show {
        /// Only items whose name contains this text
        #[arg(long)]
        search: Option<String>,
        /// Print the raw plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check or uncheck one item
    Toggle { id: String },
    /// Check every item in a category
    Check {
        category: String,
        /// Uncheck instead
        #[arg(long)]
        off: bool,
    },
    /// Add a custom item
    Add {
        name: String,
        #[arg(long)]
        category: Option<String>,
    },
    /// Remove an item
    Remove { id: String },
    /// Rename an item
    Rename { id: String, name: String },
    /// Save the text report
    Export {
        /// Directory to write into; defaults to the reports directory
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a plain checklist
    Print,
    /// Email the plan summary
    Email { address: String },
    /// Discard the plan and its saved snapshot
    Reset,
}

/// How a tool presents itself in `show`.
pub trait ToolView: PlannerTool {
    /// Summary lines printed above the list.
    fn headline(plan: &Self::Plan) -> Vec<String>;

    /// Numbers printed after an item's name.
    fn describe(detail: &Self::Detail) -> String;
}

pub async fn mount<T: ToolView>(state: &AppState) -> PlannerSession<T> {
    PlannerSession::mount(state.ctx.clone()).await
}

pub fn require_plan<T: ToolView>(session: &PlannerSession<T>) -> Result<&T::Plan> {
    session
        .plan()
        .with_context(|| format!("No {0} plan yet. Run `waypoint {0} plan` first.", T::NAME))
}

pub async fn handle<T: ToolView>(
    state: &AppState,
    session: &mut PlannerSession<T>,
    action: ItemAction,
) -> Result<()> {
    match action {
        ItemAction::Show { search, json } => show(session, search.as_deref(), json)?,
        ItemAction::Toggle { id } => {
            let changed = session.toggle(&id).await?;
            output::outcome(changed, format!("Toggled {}", id), &id);
        }
        ItemAction::Check { category, off } => {
            let count = session.bulk_check(&category, !off).await?;
            let verb = if off { "Unchecked" } else { "Checked" };
            output::success(format!(
                "{} {} item(s) in {}",
                verb,
                count,
                T::category_label(&category)
            ));
        }
        ItemAction::Add { name, category } => {
            match session.add_custom(&name, category.as_deref()).await? {
                Some(id) => output::success(format!("Added {} ({})", name.trim(), id)),
                None => bail!("Could not add '{}'", name.trim()),
            }
        }
        ItemAction::Remove { id } => {
            let changed = session.remove(&id).await?;
            output::outcome(changed, format!("Removed {}", id), &id);
        }
        ItemAction::Rename { id, name } => {
            let changed = session.rename(&id, &name).await?;
            output::outcome(changed, format!("Renamed {} to {}", id, name.trim()), &id);
        }
        ItemAction::Export { out } => {
            let report = session.report()?;
            let dir = match out {
                Some(dir) => dir,
                None => WaypointPaths::report_dir()?,
            };
            let path = report
                .write_to(&dir)
                .with_context(|| format!("Failed to write report into {}", dir.display()))?;
            output::success(format!("Saved {}", path.display()));
        }
        ItemAction::Print => println!("{}", session.print_view()?),
        ItemAction::Email { address } => {
            let mailer = state.mailer();
            let notice = session.email(&mailer, &address).await?;
            output::notice(&notice);
        }
        ItemAction::Reset => {
            session.reset().await?;
            output::success(format!("Reset the {} planner", T::NAME));
        }
    }
    Ok(())
}

fn show<T: ToolView>(session: &PlannerSession<T>, search: Option<&str>, json: bool) -> Result<()> {
    let plan = require_plan(session)?;
    if json {
        println!("{}", serde_json::to_string_pretty(plan)?);
        return Ok(());
    }

    for line in T::headline(plan) {
        output::heading(line);
    }

    let items = T::items(plan);
    match search {
        Some(term) => {
            let matches = items.filter(term);
            output::section(format!("{} match(es) for '{}'", matches.len(), term));
            for item in matches {
                print_item::<T>(item);
            }
        }
        None => {
            for group in items.group_by_category() {
                let done = if group.all_checked() {
                    format!(" {}", "✓".green())
                } else {
                    String::new()
                };
                output::section(format!(
                    "{} ({}/{}){}",
                    T::category_label(group.name),
                    group.checked_count(),
                    group.items.len(),
                    done
                ));
                for item in group.items {
                    print_item::<T>(item);
                }
            }
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "{} of {} checked ({}%)",
            items.checked_count(),
            items.len(),
            items.progress_percent()
        )
        .bright_black()
    );
    Ok(())
}

fn print_item<T: ToolView>(item: &LineItem<T::Detail>) {
    let detail = T::describe(&item.detail);
    let detail = if detail.is_empty() {
        String::new()
    } else {
        format!("  {}", detail)
    };
    println!(
        "  {} {}{}  {}",
        output::checkbox(item.checked),
        item.name,
        detail,
        item.id.bright_black()
    );
}
