//! Itinerary builder as a [`PlannerTool`].

use minijinja::context;
use serde::Serialize;

use super::catalog::TERMINAL_TIPS;
use super::model::{ExcursionDetail, ItineraryConfig, Port};
use super::plan::{ItineraryPlan, derive_itinerary};
use crate::config::FreshnessConfig;
use crate::error::Result;
use crate::export::{ExportProfile, LineGroup, ReportContext, format_usd, print_glyph, render};
use crate::item::ItemList;
use crate::persistence::{FreshnessWindow, StorageKey};
use crate::tool::PlannerTool;

pub struct ItineraryPlanner;

#[derive(Serialize)]
struct SelectedExcursion<'a> {
    name: &'a str,
    duration: &'a str,
    price: f64,
}

#[derive(Serialize)]
struct PortView<'a> {
    day: u32,
    name: &'a str,
    country: &'a str,
    arrival: &'a str,
    departure: &'a str,
    description: &'a str,
    attractions: &'a [String],
    selected: Vec<SelectedExcursion<'a>>,
}

/// Ports ordered by day, each with its selected excursions.
fn port_views(plan: &ItineraryPlan) -> Vec<PortView<'_>> {
    let mut ports: Vec<&Port> = plan.ports.iter().collect();
    ports.sort_by_key(|port| port.day_number);
    ports
        .into_iter()
        .map(|port| PortView {
            day: port.day_number,
            name: &port.name,
            country: &port.country,
            arrival: &port.arrival_time,
            departure: &port.departure_time,
            description: &port.description,
            attractions: &port.top_attractions,
            selected: plan
                .excursions_at(&port.id)
                .filter(|item| item.checked)
                .map(|item| SelectedExcursion {
                    name: &item.name,
                    duration: &item.detail.duration,
                    price: item.detail.price,
                })
                .collect(),
        })
        .collect()
}

fn departure_date(plan: &ItineraryPlan) -> String {
    plan.config
        .departure_date
        .map(|date| date.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|| "TBD".to_string())
}

impl PlannerTool for ItineraryPlanner {
    type Config = ItineraryConfig;
    type Detail = ExcursionDetail;
    type Plan = ItineraryPlan;

    const NAME: &'static str = "itinerary";
    const STORAGE_KEY: StorageKey = StorageKey::ITINERARY;
    const EXPORT: ExportProfile = ExportProfile {
        file_prefix: "cruise-itinerary",
        email_type: "cruise-itinerary",
        email_source: "itinerary-builder-tool",
        label: "Itinerary",
    };

    fn freshness(config: &FreshnessConfig) -> FreshnessWindow {
        config.itinerary()
    }

    fn derive(config: &ItineraryConfig) -> Result<ItineraryPlan> {
        derive_itinerary(config)
    }

    fn items(plan: &ItineraryPlan) -> &ItemList<ExcursionDetail> {
        &plan.items
    }

    fn items_mut(plan: &mut ItineraryPlan) -> &mut ItemList<ExcursionDetail> {
        &mut plan.items
    }

    /// Custom excursions need the name of an existing port.
    fn add_custom(plan: &mut ItineraryPlan, name: &str, category: Option<&str>) -> Option<String> {
        plan.add_custom_excursion(name, category?)
    }

    fn render_report(plan: &ItineraryPlan, ctx: &ReportContext) -> Result<String> {
        render(
            "itinerary_report.txt",
            context! {
                generated => ctx.generated_label(),
                plan => plan,
                departure_date => departure_date(plan),
                ports => port_views(plan),
                total => plan.total_excursion_cost(),
                tips => TERMINAL_TIPS,
                contact => &ctx.contact,
            },
        )
    }

    fn render_print(plan: &ItineraryPlan) -> Result<String> {
        let details = vec![
            format!("{} - {}", plan.cruise_line, plan.ship_name),
            format!(
                "Departing {} on {}",
                plan.departure_port,
                departure_date(plan)
            ),
            format!("Duration: {} nights", plan.duration),
            format!(
                "Selected excursions: {}",
                format_usd(plan.total_excursion_cost())
            ),
        ];

        let mut ports: Vec<&Port> = plan.ports.iter().collect();
        ports.sort_by_key(|port| port.day_number);
        let groups: Vec<LineGroup> = ports
            .into_iter()
            .map(|port| LineGroup {
                title: format!(
                    "Day {}: {} ({} - {})",
                    port.day_number, port.name, port.arrival_time, port.departure_time
                ),
                lines: plan
                    .excursions_at(&port.id)
                    .map(|item| {
                        format!(
                            "{} {} - {} - {}",
                            print_glyph(item.checked),
                            item.name,
                            item.detail.duration,
                            format_usd(item.detail.price)
                        )
                    })
                    .collect(),
            })
            .collect();

        render(
            "print.txt",
            context! { title => "CRUISE ITINERARY", details => details, groups => groups },
        )
    }

    fn email_summary(plan: &ItineraryPlan) -> Result<String> {
        render(
            "itinerary_email.txt",
            context! {
                plan => plan,
                ports => port_views(plan),
                total => plan.total_excursion_cost(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ContactInfo;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn plan() -> ItineraryPlan {
        let config = ItineraryConfig::default()
            .with_departure_date(NaiveDate::from_ymd_opt(2026, 6, 14).unwrap());
        let mut plan = derive_itinerary(&config).unwrap();
        let waterpark = plan
            .items
            .iter()
            .find(|item| item.name == "Thrill Waterpark")
            .map(|item| item.id.clone())
            .unwrap();
        plan.items.toggle_checked(&waterpark);
        plan
    }

    #[test]
    fn test_report_lists_selected_excursions() {
        let ctx = ReportContext::new(
            Utc.with_ymd_and_hms(2026, 5, 1, 12, 0, 0).unwrap(),
            ContactInfo::default(),
        );
        let text = ItineraryPlanner::render_report(&plan(), &ctx).unwrap();
        assert!(text.starts_with("CRUISE ITINERARY\nGenerated: 5/1/2026"));
        assert!(text.contains("- Cruise Line: Royal Caribbean"));
        assert!(text.contains("- Departure Date: 6/14/2026"));
        assert!(text.contains("Day 3: Perfect Day at CocoCay, Bahamas"));
        assert!(text.contains("  • Thrill Waterpark - All Day - $89"));
        assert!(!text.contains("• Beach Day Pass"));
        assert!(text.contains("Total Excursion Cost: $89"));
        assert!(text.contains("Travel Tips from Newark:"));
    }

    #[test]
    fn test_print_shows_every_excursion() {
        let text = ItineraryPlanner::render_print(&plan()).unwrap();
        assert!(text.contains("Royal Caribbean - Symphony of the Seas"));
        assert!(text.contains("[x] Thrill Waterpark - All Day - $89"));
        assert!(text.contains("[ ] Beach Day Pass - All Day - $0"));
        assert!(text.contains("Day 1: Cape Liberty (Embarkation - 4:00 PM)"));
    }

    #[test]
    fn test_email_summary() {
        let text = ItineraryPlanner::email_summary(&plan()).unwrap();
        assert!(text.starts_with("Cruise Itinerary:"));
        assert!(text.contains("Ship: Symphony of the Seas"));
        assert!(text.contains("Day 4: Nassau (8:00 AM - 6:00 PM)"));
        assert!(text.contains("Total Cost: $89"));
    }

    #[test]
    fn test_undated_report_says_tbd() {
        let plan = derive_itinerary(&ItineraryConfig::default()).unwrap();
        let ctx = ReportContext::new(Utc::now(), ContactInfo::default());
        let text = ItineraryPlanner::render_report(&plan, &ctx).unwrap();
        assert!(text.contains("- Departure Date: TBD"));
        assert!(text.contains("Total Excursion Cost: $0"));
    }

    #[test]
    fn test_custom_excursion_needs_port() {
        let mut plan = plan();
        assert!(ItineraryPlanner::add_custom(&mut plan, "Snorkel", None).is_none());
        assert!(ItineraryPlanner::add_custom(&mut plan, "Snorkel", Some("Atlantis")).is_none());
        let id = ItineraryPlanner::add_custom(&mut plan, "Snorkel", Some("Nassau")).unwrap();
        assert_eq!(plan.items.get(&id).unwrap().category, "Nassau");
    }
}
