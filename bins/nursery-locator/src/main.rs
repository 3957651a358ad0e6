//! nursery-locator: find the nearest public plant nursery.
//!
//! Loads the nursery table and the division boundary, measures the geodesic
//! distance from a reference point to every nursery and reports the closest
//! one, optionally as an interactive map page.

mod commands;
mod render;
mod session;
mod summary;

use clap::{Args, Parser, Subcommand};
use nursery_cli::output::{print_json, Status};
use nursery_cli::OutputFormat;
use nursery_core::config::Config;
use nursery_core::error::exit_codes;
use nursery_geo::Coordinate;
use nursery_telemetry::TelemetryConfig;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "nursery-locator")]
#[command(about = "Find the nearest public plant nursery")]
#[command(version)]
struct Cli {
    /// Path to a nursery-locator.toml file
    #[arg(short, long, global = true, env = "NURSERY_LOCATOR_CONFIG")]
    config: Option<PathBuf>,

    /// Override the dataset path from the config
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Override the boundary path from the config
    #[arg(long, global = true)]
    boundary: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Manual reference point; both values must be given together
#[derive(Args, Debug, Clone, Copy)]
pub struct LocationArgs {
    /// Your latitude in degrees
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Your longitude in degrees
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lon: Option<f64>,
}

impl LocationArgs {
    pub fn coordinate(&self) -> Option<Coordinate> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
            _ => None,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show the nursery nearest to the reference point
    Nearest {
        #[command(flatten)]
        location: LocationArgs,
    },

    /// List every nursery with its distance from the reference point
    List {
        #[command(flatten)]
        location: LocationArgs,

        /// Sort closest first
        #[arg(short, long)]
        sorted: bool,

        /// Show at most this many nurseries (implies --sorted)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Write an interactive map page with the nearest nursery highlighted
    Map {
        #[command(flatten)]
        location: LocationArgs,

        /// Output HTML file (defaults to map.output from the config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that the config, dataset and boundary load cleanly
    Validate,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => return report_failure(&e, cli.format),
    };

    let telemetry = TelemetryConfig {
        log_level: config.schema.logging.level.clone(),
        json: config.schema.logging.json,
        ..TelemetryConfig::default()
    }
    .verbose(cli.verbose);
    if let Err(e) = nursery_telemetry::init_with_config(telemetry) {
        Status::warning(&format!("Logging disabled: {}", e));
    }

    let result = match cli.command {
        Commands::Nearest { location } => {
            commands::nearest::run(&config, location.coordinate(), cli.format)
        }
        Commands::List { location, sorted, limit } => {
            commands::list::run(&config, location.coordinate(), sorted, limit, cli.format)
        }
        Commands::Map { location, output } => {
            commands::map::run(&config, location.coordinate(), output, cli.format)
        }
        Commands::Validate => commands::validate::run(&config, cli.format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_failure(&e, cli.format),
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;
    // Command-line paths are relative to the working directory, not the config file.
    if let Some(dataset) = &cli.dataset {
        config.schema.data.dataset = std::path::absolute(dataset)?;
    }
    if let Some(boundary) = &cli.boundary {
        config.schema.data.boundary = std::path::absolute(boundary)?;
    }
    Ok(config)
}

fn report_failure(error: &anyhow::Error, format: OutputFormat) -> ExitCode {
    let core_error = error.downcast_ref::<nursery_core::Error>();
    tracing::debug!(error = %error, "Command failed");

    match (format, core_error) {
        (OutputFormat::Json, Some(e)) => {
            if print_json(&serde_json::json!({ "error": e.to_report() })).is_err() {
                Status::error(&e.to_string());
            }
        }
        (OutputFormat::Json, None) => {
            let report = serde_json::json!({ "error": { "message": error.to_string() } });
            if print_json(&report).is_err() {
                Status::error(&error.to_string());
            }
        }
        (OutputFormat::Text, _) => Status::error(&error.to_string()),
    }

    let code = core_error.map_or(exit_codes::FAILURE, |e| e.code.exit_code());
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
