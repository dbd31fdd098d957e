//! Structured logging setup
//!
//! JSON output is the default so logs can be shipped as-is; `pretty` is meant
//! for local development. `RUST_LOG`, when set, wins over the configured
//! filter.

use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, LoggingConfig};

#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub service_name: String,
    pub service_version: String,
    pub format: LogFormat,
    pub filter: String,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::from_logging(&LoggingConfig::default())
    }
}

impl TracingConfig {
    pub fn from_logging(logging: &LoggingConfig) -> Self {
        Self {
            service_name: "receipt-api".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            format: logging.format,
            filter: logging.filter.clone(),
        }
    }

    fn env_filter(&self) -> anyhow::Result<EnvFilter> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => Ok(EnvFilter::try_new(&self.filter)?),
        }
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_tracing(config: &TracingConfig) -> anyhow::Result<()> {
    let registry = tracing_subscriber::registry().with(config.env_filter()?);

    match config.format {
        LogFormat::Json => registry.with(fmt::layer().json().with_target(false)).try_init()?,
        LogFormat::Pretty => registry.with(fmt::layer().with_target(false)).try_init()?,
    }

    info!(
        service_name = %config.service_name,
        service_version = %config.service_version,
        format = ?config.format,
        "Logging initialized"
    );
    Ok(())
}
