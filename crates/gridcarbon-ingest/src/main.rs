//! Gridcarbon Ingest - fuel-mix scraping tool

use anyhow::Result;
use clap::Parser;
use gridcarbon_common::logging::{init_logging, LogConfig, LogLevel};
use gridcarbon_ingest::{CarbonPipeline, HistoryStore, IngestConfig, UpdateService};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "gridcarbon-ingest")]
#[command(author, version, about = "Grid fuel-mix and carbon-intensity ingestion tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Parser, Debug)]
enum Command {
    /// Run one update over a date range and merge it into the history file
    Run {
        /// Start day (dd-mm-yyyy); defaults to the configured start day
        #[arg(short, long)]
        start: Option<String>,

        /// End day (dd-mm-yyyy); defaults to today
        #[arg(short, long)]
        end: Option<String>,

        /// History file to merge results into
        #[arg(short, long, default_value = "./data/carbon_history.json")]
        output: String,
    },

    /// Run the periodic update service until interrupted
    Watch {
        /// History file to merge results into
        #[arg(short, long, default_value = "./data/carbon_history.json")]
        output: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbose flag
    let log_level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };

    let log_config = LogConfig::builder()
        .level(log_level)
        .log_file_prefix("gridcarbon-ingest".to_string())
        .build();

    // Merge with environment variables (they take precedence)
    let log_config = LogConfig::from_env().unwrap_or(log_config);

    init_logging(&log_config)?;

    let config = IngestConfig::from_env()?;

    match cli.command {
        Command::Run { start, end, output } => {
            info!("Running one-shot fuel-mix update");
            let pipeline = CarbonPipeline::new(config)?;
            let records = pipeline.run(start.as_deref(), end.as_deref()).await?;

            let total = HistoryStore::new(&output).update(records)?;
            info!(total, output = %output, "Update complete");
        },
        Command::Watch { output } => {
            let mut service = UpdateService::new(config, &output);
            service.start();

            tokio::signal::ctrl_c().await?;
            service.stop();
        },
    }

    Ok(())
}
