//! Process-wide settings, constructed once at startup and passed down by
//! reference. Nothing in the core reaches for ambient configuration.

use std::path::Path;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{Result, SqlJsonError};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log: LogSettings,
    pub output: OutputSettings,
    pub database: DatabaseSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Default tracing filter directive; RUST_LOG overrides it.
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self { filter: "sqljson=warn".to_string() }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Pretty-print the emitted JSON.
    pub pretty: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { pretty: true }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Create the database file when it does not exist yet.
    pub create_missing: bool,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self { create_missing: true }
    }
}

impl Settings {
    /// Layered lookup, lowest priority first: built-in defaults, then the
    /// given config file (or an optional `sqljson.toml` in the working
    /// directory), then `SQLJSON_`-prefixed environment variables with `__`
    /// separating nested keys.
    pub fn load(file: Option<&Path>) -> Result<Settings> {
        let builder = match file {
            Some(path) => Config::builder().add_source(File::from(path)),
            None => Config::builder().add_source(File::with_name("sqljson").required(false)),
        };
        builder
            .add_source(Environment::with_prefix("SQLJSON").separator("__"))
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| SqlJsonError::Config(e.to_string()))
    }
}
