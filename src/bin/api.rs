//! Climate API Server
//!
//! Run with: cargo run --bin climate-api -- --database Resources/hawaii.sqlite
//!
//! # Configuration
//!
//! Settings are read from `--config`, else the default config locations,
//! then environment overrides, then command-line flags:
//! - `CLIMATE_DATABASE_PATH`: SQLite file (default: Resources/hawaii.sqlite)
//! - `CLIMATE_API_HOST`: Host to bind to (default: 127.0.0.1)
//! - `CLIMATE_API_PORT`: Port to listen on (default: 5000)
//! - `CLIMATE_LOG_LEVEL` / `CLIMATE_LOG_FORMAT`: logging (`RUST_LOG` wins)

use clap::Parser;
use climate_api::api::{serve, AppState};
use climate_api::config::Config;
use climate_api::store::Database;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "climate-api")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Read-only JSON API over a climate observation database")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// SQLite database file
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(database) = args.database {
        config.database.path = database;
    }
    if let Some(host) = args.host {
        config.api.host = host;
    }
    if let Some(port) = args.port {
        config.api.port = port;
    }

    climate_api::logging::init(&config.logging);

    tracing::info!("Starting Climate API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Database: {:?}", config.database.path);

    let db = Database::from_config(&config.database)?;
    let stations = db.connect()?.station_count()?;
    tracing::info!("Database ready ({} stations)", stations);

    let state = AppState::new(db, config.api.clone());

    tracing::info!("Starting server on {}", config.api.addr());
    serve(state, &config.api).await?;

    tracing::info!("Climate API server stopped");
    Ok(())
}
