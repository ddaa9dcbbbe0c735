//! Logging setup
//!
//! Installs the global tracing subscriber. `RUST_LOG` takes precedence
//! over the configured level.

use crate::config::LoggingConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for a configured level
pub fn default_directive(level: &str) -> String {
    format!("climate_api={level},tower_http={level}")
}

/// Initialize the global subscriber ("json" or pretty output)
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(&config.level)));

    let registry = tracing_subscriber::registry().with(filter);

    if config.format.eq_ignore_ascii_case("json") {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
