use anyhow::{Context, Result};
use clap::Subcommand;

use super::AppState;
use crate::output;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Print where configuration and snapshots live
    Paths,
}

pub fn run(state: &AppState, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let rendered =
                toml::to_string_pretty(&state.config).context("Failed to render configuration")?;
            print!("{}", rendered);
        }
        ConfigAction::Paths => {
            output::heading("Paths");
            println!("  config:    {}", state.config_path.display());
            match &state.snapshot_dir {
                Some(dir) => println!("  snapshots: {}", dir.display()),
                None => println!("  snapshots: (in memory)"),
            }
        }
    }
    Ok(())
}
