// crates/ronorm/src/main.rs

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Normalized RO performance summaries from sensor CSV logs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize a CSV measurement log (reads stdin when FILE is omitted)
    Process { file: Option<PathBuf> },
    /// Print the osmotic pressure for one feed condition
    QuickCheck { temp_c: f64, tds_mg_l: f64 },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Process { file } => {
            let csv_text = match file {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?,
                None => {
                    let mut buffer = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buffer)
                        .context("failed to read stdin")?;
                    buffer
                }
            };
            info!(bytes = csv_text.len(), "summarizing measurement log");
            let summary = ronorm_core::process_csv(&csv_text)?;
            println!("{summary}");
        }
        Command::QuickCheck { temp_c, tds_mg_l } => {
            let check = ronorm_core::quick_check(temp_c, tds_mg_l);
            println!("{}", serde_json::to_string(&check)?);
        }
    }

    Ok(())
}
