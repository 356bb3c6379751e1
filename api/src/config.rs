//! Startup configuration: `.env` loading and tracing initialization

use tracing_subscriber::EnvFilter;

use qp_shared::config::{AppConfig, Environment, LogFormat, LoggingConfig};

/// Load `.env.<environment>` then `.env`, and read the configuration
///
/// Variables already present in the process environment win over both files.
pub fn load_config() -> AppConfig {
    let environment = Environment::from_env();
    dotenvy::from_filename(environment.env_file()).ok();
    dotenvy::dotenv().ok();
    AppConfig::from_env()
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    if let Err(e) = result {
        eprintln!("Tracing subscriber already installed: {}", e);
    }
}
