//! Config command - inspect and initialize configuration.

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;

use bonscan_core::ScanConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Destination path
        #[arg(default_value = "bonscan.json")]
        path: PathBuf,
    },
}

pub fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    match args.action {
        ConfigAction::Show => {
            let config = if let Some(path) = config_path {
                ScanConfig::from_file(Path::new(path))?
            } else {
                ScanConfig::default()
            };
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Init { path } => {
            ScanConfig::default().save(&path)?;
            println!("{} {}", style("wrote").green(), path.display());
        }
    }

    Ok(())
}
