//! Command line entry point for hoops-elo
//!
//! Loads the seed snapshot and schedule export, rates the season, and
//! prints or writes the report.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use hoops_elo::config::{validate_config, AppConfig};
use hoops_elo::rating::{JsonSeedStorage, SeedStorage};
use hoops_elo::report::ReportFormat;
use hoops_elo::schedule::CsvScheduleSource;
use hoops_elo::service::SeasonRunner;
use std::fs;
use std::path::PathBuf;
use tracing::{error, info};

/// Hoops Elo - NBA team Elo ratings across a season
#[derive(Parser)]
#[command(
    name = "hoops-elo",
    version,
    about = "Computes season-long Elo ratings for NBA teams",
    long_about = "Hoops Elo picks up each team's rating where the previous season ended, \
                 folds every completed game of the current season into a fixed-K Elo update, \
                 and reports current ratings, rating trajectories and season rating changes."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Seed snapshot override
    #[arg(long, value_name = "FILE", help = "JSON file of team → starting rating")]
    seed: Option<PathBuf>,

    /// Schedule export override
    #[arg(long, value_name = "FILE", help = "CSV schedule export with completed games")]
    schedule: Option<PathBuf>,

    /// K-factor override
    #[arg(short, long, value_name = "K", help = "Maximum rating swing per game")]
    k_factor: Option<f64>,

    /// Cut-off date
    #[arg(long, value_name = "YYYY-MM-DD", help = "Only rate games played on or before this date")]
    as_of: Option<NaiveDate>,

    /// Output format override
    #[arg(short, long, value_enum, help = "Report format")]
    format: Option<ReportFormat>,

    /// Output file override
    #[arg(short, long, value_name = "FILE", help = "Write the report here instead of stdout")]
    output: Option<PathBuf>,

    /// Final ratings snapshot
    #[arg(
        long,
        value_name = "FILE",
        help = "Save final ratings as a seed snapshot for the next season"
    )]
    save_final: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without rating")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Display run information
fn display_startup_banner(config: &AppConfig) {
    info!("Hoops Elo {}", hoops_elo::VERSION);
    info!("   Season: {}", config.season.label);
    info!("   K-factor: {}", config.rating.k_factor);
    info!("   Seed: {}", config.season.seed_path.display());
    info!("   Schedule: {}", config.season.schedule_path.display());
    if let Some(as_of) = config.season.as_of {
        info!("   As of: {}", as_of);
    }
}

/// Load and merge configuration from file or environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(config_path) => AppConfig::from_file(config_path)?,
        None => AppConfig::from_env()?,
    };

    // Apply CLI overrides
    if let Some(seed) = &args.seed {
        config.season.seed_path = seed.clone();
    }
    if let Some(schedule) = &args.schedule {
        config.season.schedule_path = schedule.clone();
    }
    if let Some(k) = args.k_factor {
        config.rating.k_factor = k;
    }
    if let Some(as_of) = args.as_of {
        config.season.as_of = Some(as_of);
    }
    if let Some(format) = args.format {
        config.report.format = format;
    }
    if let Some(output) = &args.output {
        config.report.output_path = Some(output.clone());
    }
    if let Some(save_final) = &args.save_final {
        config.season.final_ratings_path = Some(save_final.clone());
    }
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }
    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    validate_config(&config)?;
    Ok(config)
}

fn run(config: &AppConfig) -> Result<()> {
    let runner = SeasonRunner::from_config(config)?;
    let storage = JsonSeedStorage::new(&config.season.seed_path);
    let source = CsvScheduleSource::new(&config.season.schedule_path);

    let run = runner.run(&storage, &source, config.season.as_of)?;

    let rendered = run.report.render(config.report.format)?;
    match &config.report.output_path {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!("Report written to {}", path.display());
        }
        None => print!("{}", rendered),
    }

    if let Some(path) = &config.season.final_ratings_path {
        JsonSeedStorage::new(path).save_ratings(&run.season.final_ratings)?;
        info!("Final ratings saved to {}", path.display());
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    display_startup_banner(&config);

    if args.dry_run {
        info!("Configuration validation successful - exiting without rating");
        return;
    }

    if let Err(e) = run(&config) {
        error!("Run failed: {:#}", e);
        std::process::exit(1);
    }
}
