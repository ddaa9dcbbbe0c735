//! Climate CLI
//!
//! Command-line tooling for the climate database:
//! - Build a database from CSV files
//! - Inspect stations, latest date and temperature summaries
//! - Generate a default config file

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use climate_api::config::{generate_default_config, Config, LoggingConfig};
use climate_api::query::{aggregate, ObservationQuery};
use climate_api::store::{import_csv, Database, ObservationDate};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "climate-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect and build climate observation databases")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// SQLite database file (default: from config)
    #[arg(short, long, global = true)]
    pub database: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a new database from station and measurement CSV files
    Import {
        /// Stations CSV (station,name,latitude,longitude,elevation)
        #[arg(long)]
        stations: PathBuf,
        /// Measurements CSV (station,date,prcp,tobs)
        #[arg(long)]
        measurements: PathBuf,
        /// Output database path (must not exist)
        #[arg(short, long)]
        output: PathBuf,
    },

    /// List station identifiers
    Stations,

    /// Show the latest measurement date and the trailing-year cutoff
    Latest,

    /// Temperature min/avg/max from START (to END, inclusive)
    Summary {
        /// Start date, YYYY-MM-DD
        start: String,
        /// End date, YYYY-MM-DD
        end: Option<String>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    climate_api::logging::init(&LoggingConfig {
        level: "warn".to_string(),
        ..Default::default()
    });

    match cli.command {
        Commands::Import {
            stations,
            measurements,
            output,
        } => {
            let summary = import_csv(&stations, &measurements, &output)
                .with_context(|| format!("Failed to build {:?}", output))?;
            println!(
                "Imported {} stations and {} measurements into {:?}",
                summary.stations, summary.measurements, output
            );
        }

        Commands::Stations => {
            let db = open_database(cli.database)?;
            let session = db.connect()?;
            let ids = ObservationQuery::new(&session).all_station_ids()?;

            if ids.is_empty() {
                println!("No stations recorded.");
            }
            for id in ids {
                println!("{}", id);
            }
        }

        Commands::Latest => {
            let db = open_database(cli.database)?;
            let session = db.connect()?;
            let query = ObservationQuery::new(&session);

            let latest = query.latest_date()?;
            println!("Latest measurement:  {}", latest);
            println!("Trailing year from:  {}", latest.year_before());
        }

        Commands::Summary { start, end } => {
            let start = ObservationDate::parse(&start)?;
            let end = end.as_deref().map(ObservationDate::parse).transpose()?;

            let db = open_database(cli.database)?;
            let session = db.connect()?;
            let values = ObservationQuery::new(&session).temperatures_in_range(start, end)?;
            let summary = aggregate(&values)?;

            println!("{:<8} {:>8}", "Readings", summary.count);
            println!("{:<8} {:>8.2}", "Min", summary.min);
            println!("{:<8} {:>8.2}", "Avg", summary.avg);
            println!("{:<8} {:>8.2}", "Max", summary.max);
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn open_database(path: Option<PathBuf>) -> Result<Database> {
    let mut config = Config::load_default().database;
    if let Some(path) = path {
        config.path = path;
    }

    Database::from_config(&config).with_context(|| format!("Failed to open {:?}", config.path))
}
