use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variables with this prefix override file settings,
/// e.g. `URL_DECOMPOSER_PORT=9000`
pub const ENV_PREFIX: &str = "URL_DECOMPOSER";

/// Configuration for the API
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    /// Address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Directory the server writes its log files into
    pub log_dir: String,

    /// Default filter when RUST_LOG is not set
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_dir: DEFAULT_LOG_DIR.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from defaults, an optional file and the environment
    ///
    /// Later sources win. A missing file is an error only when a path was
    /// given explicitly.
    ///
    /// # Arguments
    /// * `path` - Optional config file (TOML, JSON or YAML, picked by extension)
    ///
    /// # Returns
    /// * `Result<ApiConfig>` - The merged configuration
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_from(path, Some(Environment::with_prefix(ENV_PREFIX).try_parsing(true)))
    }

    /// Same as [`ApiConfig::load`] with an explicit environment source, or none
    fn load_from(path: Option<&Path>, env: Option<Environment>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", DEFAULT_PORT as i64)?
            .set_default("log_dir", DEFAULT_LOG_DIR)?
            .set_default("log_level", DEFAULT_LOG_LEVEL)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        if let Some(env) = env {
            builder = builder.add_source(env);
        }

        let settings = builder
            .build()
            .context("Failed to load configuration")?;

        settings
            .try_deserialize::<ApiConfig>()
            .context("Invalid configuration")
    }
}
