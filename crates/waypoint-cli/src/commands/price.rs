use anyhow::Result;
use clap::Subcommand;
use strum::IntoEnumIterator;
use waypoint_application::PriceSession;
use waypoint_core::export::format_usd;
use waypoint_core::pricing::{
    AddOn, AddOnCharge, CabinType, CruiseLine, PricePreferences, PriceQuote, RESIDENT_DISCOUNT,
};

use super::AppState;
use crate::output;

#[derive(Subcommand)]
pub enum PriceAction {
    /// Show the current estimate
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Change what is being priced
    Set {
        /// Cruise length in days, 3-14
        #[arg(long, value_parser = clap::value_parser!(u32).range(3..=14))]
        days: Option<u32>,
        /// interior, oceanview, balcony or suite
        #[arg(long)]
        cabin: Option<CabinType>,
        /// 1-4
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=4))]
        travelers: Option<u32>,
        /// royal, carnival, norwegian, celebrity, princess or msc
        #[arg(long)]
        line: Option<CruiseLine>,
        /// Apply the Essex County resident discount
        #[arg(long, conflicts_with = "no_discount")]
        discount: bool,
        #[arg(long)]
        no_discount: bool,
    },
    /// Select a package, or deselect it if already selected
    Addon { add_on: AddOn },
    /// List cabins, cruise lines and packages
    Options,
    /// Forget the saved inputs
    Reset,
}

pub async fn run(state: &AppState, action: PriceAction) -> Result<()> {
    let mut session = PriceSession::mount(state.ctx.clone()).await;

    match action {
        PriceAction::Show { json } => {
            let quote = session.quote()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&quote)?);
            } else {
                print_quote(session.preferences(), &quote);
            }
        }
        PriceAction::Set {
            days,
            cabin,
            travelers,
            line,
            discount,
            no_discount,
        } => {
            let current = session.preferences().clone();
            let resident_discount = match (discount, no_discount) {
                (true, _) => true,
                (_, true) => false,
                _ => current.resident_discount,
            };
            let preferences = PricePreferences {
                cruise_length: days.unwrap_or(current.cruise_length),
                cabin_type: cabin.unwrap_or(current.cabin_type),
                travelers: travelers.unwrap_or(current.travelers),
                cruise_line: line.unwrap_or(current.cruise_line),
                resident_discount,
                add_ons: current.add_ons,
            };
            let changed = session.update(preferences).await?;
            output::outcome(changed, "Saved calculator inputs", "price");
            print_quote(session.preferences(), &session.quote()?);
        }
        PriceAction::Addon { add_on } => {
            if session.toggle_add_on(add_on).await? {
                output::success(format!("Added {}", add_on.title()));
            } else {
                output::success(format!("Removed {}", add_on.title()));
            }
        }
        PriceAction::Options => print_options(),
        PriceAction::Reset => {
            session.reset().await?;
            output::success("Reset the price calculator");
        }
    }
    Ok(())
}

fn print_quote(prefs: &PricePreferences, quote: &PriceQuote) {
    output::heading(format!(
        "{} day {} on {}, {} traveler(s)",
        prefs.cruise_length,
        prefs.cabin_type.title(),
        prefs.cruise_line.title(),
        prefs.travelers
    ));
    if !prefs.add_ons.is_empty() {
        let names: Vec<_> = prefs.add_ons.iter().map(|a| a.title()).collect();
        println!("  Packages: {}", names.join(", "));
    }

    output::section("Price Breakdown");
    println!("  Base Fare:       {}", format_usd(quote.base_fare));
    println!("  Taxes & Fees:    {}", format_usd(quote.taxes));
    if quote.add_ons > 0.0 {
        println!("  Add-on Packages: {}", format_usd(quote.add_ons));
    }
    println!("  Total:           {}", format_usd(quote.total));
    if quote.discounted {
        println!(
            "  With Discount:   {} ({:.0}% off)",
            format_usd(quote.with_discount),
            RESIDENT_DISCOUNT * 100.0
        );
    }
    println!("  Per Person:      {}", format_usd(quote.payable_per_person()));
}

fn print_options() {
    output::section("Cabins");
    for cabin in CabinType::iter() {
        let rate = cabin.rate();
        println!(
            "  {:<10} {} + {}/day",
            cabin.to_string(),
            format_usd(rate.base),
            format_usd(rate.per_day)
        );
    }

    output::section("Cruise lines");
    for line in CruiseLine::iter() {
        println!("  {:<10} {} (x{})", line.to_string(), line.title(), line.multiplier());
    }

    output::section("Packages");
    for add_on in AddOn::iter() {
        let charge = match add_on.charge() {
            AddOnCharge::PerDay(rate) => format!("{}/day", format_usd(rate)),
            AddOnCharge::Flat(amount) => format!("{} total", format_usd(amount)),
        };
        println!("  {:<10} {} ({})", add_on.to_string(), add_on.title(), charge);
    }
}
