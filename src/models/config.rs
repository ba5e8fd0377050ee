//! Configuration model loaded from external sources.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Basic configuration shared across handlers.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl ServerConfig {
    /// Load configuration from an optional yaml file plus `URS_MATCHER_*`
    /// environment overrides.
    pub fn load(file: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder().set_default("bind_addr", "127.0.0.1:6900")?;
        if let Some(file) = file {
            builder = builder.add_source(File::with_name(file));
        }
        builder
            .add_source(Environment::with_prefix("URS_MATCHER"))
            .build()?
            .try_deserialize()
    }
}
