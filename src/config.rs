//! Runtime settings
//!
//! Settings are resolved in priority order:
//! 1. CLI flags
//! 2. Config file (`--config <path>`, or `vleas.toml` next to the manifest)
//! 3. Built-in defaults

use crate::cli::CliArgs;
use crate::error::ConfigError;
use crate::registry::MAVEN_CENTRAL_URL;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file looked up next to the manifest
pub const CONFIG_FILE_NAME: &str = "vleas.toml";

/// Default concurrency limit for registry requests
pub const DEFAULT_JOBS: usize = 10;

/// Values read from a config file; every key is optional
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub registry_url: Option<String>,
    pub jobs: Option<usize>,
    pub timeout_secs: Option<u64>,
    pub retries: Option<u32>,
    pub keep_going: Option<bool>,
}

impl FileConfig {
    /// Parse config file contents
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Read a config file.
    ///
    /// An explicitly requested file must exist; the implicit one is optional.
    pub fn load(path: &Path, required: bool) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content, path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
                Ok(Self::default())
            }
            Err(e) => Err(ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Base URL of the search service
    pub registry_url: String,
    /// Maximum concurrent lookups
    pub jobs: usize,
    /// Per-request timeout; `None` keeps the transport default
    pub timeout: Option<Duration>,
    /// Retries per request
    pub retries: u32,
    /// Turn lookup failures into unresolved entries instead of aborting
    pub keep_going: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            registry_url: MAVEN_CENTRAL_URL.to_string(),
            jobs: DEFAULT_JOBS,
            timeout: None,
            retries: 0,
            keep_going: false,
        }
    }
}

impl Settings {
    /// Resolve settings from CLI arguments and the config file
    pub fn resolve(args: &CliArgs) -> Result<Self, ConfigError> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path, true)?,
            None => FileConfig::load(&default_config_path(&args.file), false)?,
        };
        Self::merge(args, file)
    }

    /// Merge CLI arguments over file values over defaults
    pub fn merge(args: &CliArgs, file: FileConfig) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let settings = Self {
            registry_url: args
                .registry_url
                .clone()
                .or(file.registry_url)
                .unwrap_or(defaults.registry_url),
            jobs: args.jobs.or(file.jobs).unwrap_or(defaults.jobs),
            timeout: args
                .timeout
                .or(file.timeout_secs.map(Duration::from_secs)),
            retries: args.retries.or(file.retries).unwrap_or(defaults.retries),
            keep_going: args.keep_going || file.keep_going.unwrap_or(defaults.keep_going),
        };

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.jobs == 0 {
            return Err(ConfigError::invalid_value("jobs", "must be at least 1"));
        }
        if self.timeout == Some(Duration::ZERO) {
            return Err(ConfigError::invalid_value(
                "timeout_secs",
                "must be greater than zero",
            ));
        }
        if self.registry_url.trim().is_empty() {
            return Err(ConfigError::invalid_value("registry_url", "must not be empty"));
        }
        Ok(())
    }
}

/// `vleas.toml` in the manifest's directory
fn default_config_path(manifest: &Path) -> PathBuf {
    manifest
        .parent()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}
