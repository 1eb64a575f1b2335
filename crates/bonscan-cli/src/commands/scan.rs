//! Scan command - extract expense fields from one receipt text.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::{debug, info};

use bonscan_core::{Expense, ReceiptScanner, ScanConfig, ScanResult};

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Input text file ("-" or omitted reads stdin)
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub fn run(args: ScanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = if let Some(path) = config_path {
        ScanConfig::from_file(Path::new(path))?
    } else {
        ScanConfig::default()
    };

    let text = read_input(args.input.as_deref())?;
    debug!("read {} characters of OCR text", text.len());

    let result = ReceiptScanner::from_config(&config).scan(&text);
    info!(?result, "scan finished");

    let rendered = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&result)?,
        OutputFormat::Text => render_text(&result),
    };

    match args.output {
        Some(path) => fs::write(&path, rendered)?,
        None => println!("{rendered}"),
    }

    if Expense::from_scan(&result).is_none() {
        eprintln!(
            "{}",
            style("no amount recognized; nothing to save").yellow()
        );
    }

    Ok(())
}

fn read_input(input: Option<&Path>) -> anyhow::Result<String> {
    match input {
        Some(path) if path != Path::new("-") => {
            if !path.exists() {
                anyhow::bail!("input file not found: {}", path.display());
            }
            Ok(fs::read_to_string(path)?)
        }
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn render_text(result: &ScanResult) -> String {
    let amount = match result.amount {
        Some(amount) => format!("{amount} EUR"),
        None => "-".to_string(),
    };
    let date = match result.date {
        Some(date) => date.to_string(),
        None => "-".to_string(),
    };

    format!(
        "{}   {amount}\n{}     {date}\n{} {}",
        style("Amount:").bold(),
        style("Date:").bold(),
        style("Category:").bold(),
        result.category,
    )
}
