use anyhow::Result;
use clap::Subcommand;
use waypoint_core::packing::{
    Activity, Destination, PackingConfig, PackingDetail, PackingField, PackingPlan,
    PackingPlanner, Season,
};

use super::AppState;
use super::items::{self, ItemAction, ToolView};
use crate::output;

#[derive(Subcommand)]
pub enum PackingAction {
    /// Build a checklist for a trip
    Plan {
        /// caribbean, alaska, mediterranean, bahamas or norway
        #[arg(long, default_value_t = Destination::Caribbean)]
        destination: Destination,
        #[arg(long, default_value_t = 7)]
        nights: u32,
        /// spring, summer, fall or winter
        #[arg(long, default_value_t = Season::Summer)]
        season: Season,
        /// Repeat for each planned activity, e.g. formal-nights
        #[arg(long = "activity")]
        activities: Vec<Activity>,
    },
    /// Set how many of an item to pack; 0 clears the quantity
    Quantity { id: String, quantity: u32 },
    #[command(flatten)]
    Item(ItemAction),
}

impl ToolView for PackingPlanner {
    fn headline(plan: &PackingPlan) -> Vec<String> {
        let config = &plan.config;
        let (packed, total) = plan.progress();
        vec![
            format!(
                "{} nights, {}, {}",
                config.nights, config.destination, config.season
            ),
            format!("Packed {} of {}", packed, total),
        ]
    }

    fn describe(detail: &PackingDetail) -> String {
        detail
            .quantity
            .map(|quantity| format!("x{}", quantity))
            .unwrap_or_default()
    }
}

pub async fn run(state: &AppState, action: PackingAction) -> Result<()> {
    let mut session = items::mount::<PackingPlanner>(state).await;

    match action {
        PackingAction::Plan {
            destination,
            nights,
            season,
            activities,
        } => {
            let mut config = PackingConfig::new(destination, nights, season);
            for activity in activities {
                if !config.activities.contains(&activity) {
                    config.activities.push(activity);
                }
            }
            let plan = session.generate(config).await?;
            output::success(format!("Created a checklist with {} items", plan.items.len()));
        }
        PackingAction::Quantity { id, quantity } => {
            let changed = session
                .update_field(&id, PackingField::Quantity, f64::from(quantity))
                .await?;
            output::outcome(changed, format!("Updated {}", id), &id);
        }
        PackingAction::Item(action) => items::handle(state, &mut session, action).await?,
    }
    Ok(())
}
