use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const DEFAULT_CONFIG_PATH: &str = "receipts.toml";
const CONFIG_PATH_ENV: &str = "RECEIPTS_CONFIG_PATH";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LimitsConfig {
    #[serde(default = "default_max_body_size_kb")]
    pub max_body_size_kb: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self { max_body_size_kb: default_max_body_size_kb() }
    }
}

/// Cross-origin settings. An origin of `"*"` allows any origin.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self { allowed_origins: default_allowed_origins() }
    }
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DocsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl std::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            other => anyhow::bail!("unknown log format '{other}', expected 'json' or 'pretty'"),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { format: LogFormat::default(), filter: default_log_filter() }
    }
}

/// Where [`ServiceConfig::load`] found its settings. Loading happens before
/// logging is set up, so the caller reports this once a subscriber exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults { missing: PathBuf },
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => info!(path = %path.display(), "Loaded configuration file"),
            ConfigSource::Defaults { missing } => warn!(
                "Configuration file '{}' not found. Using default configuration.",
                missing.display()
            ),
        }
    }
}

/// Service configuration, read from TOML and then overridden from the
/// environment. Every section and key is optional.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub docs: DocsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ServiceConfig {
    /// Load configuration from `path`, falling back to `RECEIPTS_CONFIG_PATH`
    /// and then `receipts.toml`. A missing file yields the defaults; a file
    /// that exists but does not parse is an error.
    pub fn load(path: Option<&Path>) -> anyhow::Result<(Self, ConfigSource)> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => std::env::var(CONFIG_PATH_ENV)
                .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
                .into(),
        };

        match fs::read_to_string(&config_path) {
            Ok(contents) => {
                let config = Self::from_toml_str(&contents)
                    .with_context(|| format!("Failed to parse {}", config_path.display()))?;
                Ok((config, ConfigSource::File(config_path)))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Ok((Self::default(), ConfigSource::Defaults { missing: config_path }))
            }
            Err(err) => {
                Err(err).with_context(|| format!("Failed to read {}", config_path.display()))
            }
        }
    }

    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Apply `RECEIPTS_*` environment variable overrides
    pub fn apply_env_overrides(self) -> anyhow::Result<Self> {
        self.apply_overrides_with(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup. Split out from
    /// [`ServiceConfig::apply_env_overrides`] so tests never touch the
    /// process environment.
    pub fn apply_overrides_with(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        if let Some(host) = lookup("RECEIPTS_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("RECEIPTS_PORT") {
            self.server.port =
                port.parse().with_context(|| format!("RECEIPTS_PORT is not a port: {port}"))?;
        }
        if let Some(origins) = lookup("RECEIPTS_CORS_ALLOWED_ORIGINS") {
            self.cors.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(enabled) = lookup("RECEIPTS_DOCS_ENABLED") {
            self.docs.enabled = enabled
                .parse()
                .with_context(|| format!("RECEIPTS_DOCS_ENABLED is not a boolean: {enabled}"))?;
        }
        if let Some(size) = lookup("RECEIPTS_MAX_BODY_SIZE_KB") {
            self.limits.max_body_size_kb = size
                .parse()
                .with_context(|| format!("RECEIPTS_MAX_BODY_SIZE_KB is not a number: {size}"))?;
        }
        if let Some(format) = lookup("RECEIPTS_LOG_FORMAT") {
            self.logging.format = format.parse()?;
        }
        Ok(self)
    }

    pub fn log_summary(&self) {
        info!(
            bind = %self.server.bind_address(),
            origins = ?self.cors.allowed_origins,
            docs = self.docs.enabled,
            max_body_size_kb = self.limits.max_body_size_kb,
            "Resolved service configuration"
        );
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_max_body_size_kb() -> usize {
    256
}
fn default_allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}
fn default_true() -> bool {
    true
}
fn default_log_filter() -> String {
    "receipt_api=debug,receipt_core=debug,tower_http=debug,info".to_string()
}
