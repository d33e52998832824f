use anyhow::{Result, bail};
use chrono::NaiveDate;
use clap::Subcommand;
use colored::Colorize;
use waypoint_application::CountdownSession;
use waypoint_core::countdown::CruiseCountdown;

use super::AppState;
use crate::output;

#[derive(Subcommand)]
pub enum CountdownAction {
    /// Show time left and milestones
    Show,
    /// Start counting down to a departure date
    Set {
        /// Departure date, YYYY-MM-DD
        date: NaiveDate,
        /// e.g. "7-Day Caribbean"
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        line: Option<String>,
        #[arg(long)]
        destination: Option<String>,
    },
    /// Email the upcoming milestones
    Remind { address: String },
    /// Stop the countdown
    Reset,
}

pub async fn run(state: &AppState, action: CountdownAction) -> Result<()> {
    let mut session = CountdownSession::mount(state.ctx.clone()).await;

    match action {
        CountdownAction::Show => print_countdown(&session)?,
        CountdownAction::Set {
            date,
            name,
            line,
            destination,
        } => {
            let countdown = CruiseCountdown {
                cruise_name: name.unwrap_or_default(),
                cruise_line: line.unwrap_or_default(),
                destination: destination.unwrap_or_default(),
                ..CruiseCountdown::new(date)
            };
            session.set(countdown).await?;
            output::success(format!("Counting down to {}", date.format("%B %-d, %Y")));
            print_countdown(&session)?;
        }
        CountdownAction::Remind { address } => {
            let mailer = state.mailer();
            let notice = session.remind(&mailer, &address).await?;
            output::notice(&notice);
        }
        CountdownAction::Reset => {
            session.reset().await?;
            output::success("Reset the cruise countdown");
        }
    }
    Ok(())
}

fn print_countdown(session: &CountdownSession) -> Result<()> {
    let (Some(countdown), Some(left)) = (session.countdown(), session.time_left()) else {
        bail!("No countdown yet. Run `waypoint countdown set <date>` first.");
    };
    let now = session.now();

    if !countdown.cruise_name.is_empty() {
        output::heading(&countdown.cruise_name);
    }
    if let Some(subtitle) = countdown.subtitle() {
        println!("{}", subtitle.bright_black());
    }
    println!(
        "{} days  {} hours  {} minutes  {} seconds",
        left.days.to_string().bold(),
        left.hours.to_string().bold(),
        left.minutes.to_string().bold(),
        left.seconds.to_string().bold()
    );
    println!("{}", left.message().cyan());

    output::section("Upcoming Milestones");
    let upcoming = countdown.upcoming(now);
    if upcoming.is_empty() {
        println!("  All milestones completed!");
    }
    for milestone in upcoming {
        println!(
            "  {} ({} days before)\n    {}",
            milestone.title, milestone.days_out, milestone.description
        );
    }

    let completed = countdown.completed(now);
    if !completed.is_empty() {
        output::section("Completed Milestones");
        for milestone in completed.iter().take(5) {
            println!("  {} {}", output::checkbox(true), milestone.title);
        }
    }
    if let Some(email) = &countdown.reminder_email {
        println!();
        output::skipped(format!("Reminders go to {}", email));
    }
    Ok(())
}
