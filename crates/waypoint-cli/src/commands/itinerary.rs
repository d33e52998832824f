use anyhow::{Result, bail};
use chrono::NaiveDate;
use clap::Subcommand;
use colored::Colorize;
use waypoint_core::export::format_usd;
use waypoint_core::itinerary::catalog::template_keys;
use waypoint_core::itinerary::{
    ExcursionDetail, ExcursionField, ItineraryConfig, ItineraryPlan, ItineraryPlanner, PortUpdate,
};

use super::AppState;
use super::items::{self, ItemAction, ToolView};
use crate::output;

#[derive(Subcommand)]
pub enum ItineraryAction {
    /// Start from a sample itinerary
    Plan {
        /// caribbean-7, alaska-7 or mediterranean-7
        #[arg(long, default_value = "caribbean-7")]
        template: String,
        /// Departure date, YYYY-MM-DD
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        cruise_line: Option<String>,
        #[arg(long)]
        ship: Option<String>,
        #[arg(long)]
        departure_port: Option<String>,
    },
    /// List the available sample itineraries
    Templates,
    /// List ports of call
    Ports,
    /// Add a port of call after the last one
    AddPort { name: String, country: String },
    /// Remove a port and its excursions
    RemovePort { port_id: String },
    /// Edit a port of call
    UpdatePort {
        port_id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        arrival: Option<String>,
        #[arg(long)]
        departure: Option<String>,
        #[arg(long)]
        day: Option<u32>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Set the price of an excursion
    Price { id: String, amount: f64 },
    /// Print a share token for this itinerary
    Share,
    /// Replace the itinerary with one from a share token
    Import { token: String },
    #[command(flatten)]
    Item(ItemAction),
}

impl ToolView for ItineraryPlanner {
    fn headline(plan: &ItineraryPlan) -> Vec<String> {
        let departure = plan
            .config
            .departure_date
            .map(|date| date.format("%-m/%-d/%Y").to_string())
            .unwrap_or_else(|| "TBD".to_string());
        vec![
            format!("{} - {}", plan.cruise_line, plan.ship_name),
            format!(
                "{} nights from {}, departing {}",
                plan.duration, plan.departure_port, departure
            ),
            format!(
                "Selected excursions: {}",
                format_usd(plan.total_excursion_cost())
            ),
        ]
    }

    fn describe(detail: &ExcursionDetail) -> String {
        if detail.duration.is_empty() {
            format_usd(detail.price)
        } else {
            format!("{}, {}", detail.duration, format_usd(detail.price))
        }
    }
}

pub async fn run(state: &AppState, action: ItineraryAction) -> Result<()> {
    let mut session = items::mount::<ItineraryPlanner>(state).await;

    match action {
        ItineraryAction::Plan {
            template,
            date,
            cruise_line,
            ship,
            departure_port,
        } => {
            let config = ItineraryConfig {
                template,
                departure_date: date,
                cruise_line,
                ship_name: ship,
                departure_port,
            };
            let plan = session.generate(config).await?;
            output::success(format!(
                "Created a {}-night itinerary with {} ports",
                plan.duration,
                plan.ports.len()
            ));
        }
        ItineraryAction::Templates => {
            for key in template_keys() {
                println!("  {}", key);
            }
        }
        ItineraryAction::Ports => {
            let plan = items::require_plan(&session)?;
            let mut ports: Vec<_> = plan.ports.iter().collect();
            ports.sort_by_key(|port| port.day_number);
            for port in ports {
                println!(
                    "  Day {}: {}, {} ({} - {})  {}",
                    port.day_number,
                    port.name,
                    port.country,
                    port.arrival_time,
                    port.departure_time,
                    port.id.bright_black()
                );
            }
        }
        ItineraryAction::AddPort { name, country } => {
            let mut added = None;
            session
                .edit(|plan| {
                    added = Some(plan.add_port(&name, &country));
                    true
                })
                .await?;
            if let Some(id) = added {
                output::success(format!("Added {} ({})", name, id));
            }
        }
        ItineraryAction::RemovePort { port_id } => {
            let changed = session.edit(|plan| plan.remove_port(&port_id)).await?;
            output::outcome(changed, format!("Removed port {}", port_id), &port_id);
        }
        ItineraryAction::UpdatePort {
            port_id,
            name,
            country,
            arrival,
            departure,
            day,
            description,
        } => {
            let update = PortUpdate {
                name,
                country,
                arrival_time: arrival,
                departure_time: departure,
                day_number: day,
                description,
            };
            if update.is_empty() {
                bail!("Nothing to update; pass at least one field");
            }
            let changed = session
                .edit(|plan| plan.update_port(&port_id, update))
                .await?;
            output::outcome(changed, format!("Updated port {}", port_id), &port_id);
        }
        ItineraryAction::Price { id, amount } => {
            let changed = session
                .update_field(&id, ExcursionField::Price, amount)
                .await?;
            output::outcome(changed, format!("Updated {}", id), &id);
        }
        ItineraryAction::Share => {
            let plan = items::require_plan(&session)?;
            println!("{}", plan.share_token()?);
        }
        ItineraryAction::Import { token } => {
            let plan = ItineraryPlan::from_share_token(token.trim())?;
            let plan = session.replace(plan).await?;
            output::success(format!(
                "Imported {} itinerary on {}",
                plan.cruise_line, plan.ship_name
            ));
        }
        ItineraryAction::Item(action) => items::handle(state, &mut session, action).await?,
    }
    Ok(())
}
