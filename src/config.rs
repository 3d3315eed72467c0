//! Runtime configuration.
//!
//! Layered, later sources winning:
//!
//! 1. built-in defaults,
//! 2. `customer-records.toml` in the working directory, if present,
//! 3. `CUSTOMER_*` environment variables, sections split by `__`
//!    (`CUSTOMER_SERVER__PORT=8080`).
//!
//! ```toml
//! [api]
//! base_url = "http://127.0.0.1:3000"
//!
//! [server]
//! host = "127.0.0.1"
//! port = 3000
//!
//! [display]
//! date_format = "%-m/%-d/%Y"
//!
//! [logger]
//! level = "info"
//! ```

use config::{Config, ConfigBuilder, ConfigError, Environment, File, Source};
use serde::Deserialize;

pub const CONFIG_FILE: &str = "customer-records";

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub api: Api,
    pub server: Server,
    pub display: Display,
    pub logger: Logger,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(File::with_name(CONFIG_FILE).required(false))
    }

    /// Defaults, then `file`, then the environment.
    pub fn build<S>(file: S) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        defaults(Config::builder())?
            .add_source(file)
            .add_source(
                Environment::with_prefix("CUSTOMER")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize::<AppConfig>()
    }
}

fn defaults(
    builder: ConfigBuilder<config::builder::DefaultState>,
) -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    builder
        .set_default("api.base_url", "http://127.0.0.1:3000")?
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 3000_i64)?
        .set_default("display.date_format", "%-m/%-d/%Y")?
        .set_default("logger.level", "info")
}

/// Where the client screens find the API.
#[derive(Clone, Debug, Deserialize)]
pub struct Api {
    pub base_url: String,
}

/// Where `serve` listens.
#[derive(Clone, Debug, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

impl Server {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Display {
    /// strftime pattern for dates of birth.
    pub date_format: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Logger {
    /// Filter used when `RUST_LOG` is unset, e.g. `info` or `customer_records=debug`.
    pub level: String,
}
