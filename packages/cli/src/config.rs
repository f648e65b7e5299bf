//! Tracker configuration.
//!
//! Settings come from an optional TOML file, then environment overrides,
//! then command-line flags (applied by the caller). A missing default
//! config file is not an error; a missing file that was asked for
//! explicitly is.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "ewaste_tracker.toml";

/// Request store used when nothing else is configured.
pub const DEFAULT_REQUESTS_FILE: &str = "requests.json";

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "EWASTE_TRACKER_CONFIG";

/// Environment variable overriding [`TrackerConfig::requests_path`].
pub const REQUESTS_ENV: &str = "EWASTE_TRACKER_REQUESTS";

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Config file is not valid TOML or has unknown keys.
    #[error("Invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// How reports are written to standard output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary with time-series tables.
    #[default]
    Text,
    /// The report object as pretty-printed JSON.
    Json,
}

/// Report rendering settings (`[report]` table).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportSettings {
    /// Output format for the `report` command.
    pub format: OutputFormat,
}

/// Top-level tracker configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrackerConfig {
    /// JSON file holding the disposal requests.
    pub requests_path: PathBuf,
    /// Report rendering settings.
    pub report: ReportSettings,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            requests_path: PathBuf::from(DEFAULT_REQUESTS_FILE),
            report: ReportSettings::default(),
        }
    }
}

impl TrackerConfig {
    /// Parses a TOML config document. Omitted keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] if the document is malformed or
    /// contains unknown keys.
    pub fn parse(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::de::from_str(toml_str)?)
    }

    /// Loads configuration from `explicit`, else from the file named by
    /// [`CONFIG_ENV`], else from [`DEFAULT_CONFIG_FILE`] if it exists,
    /// else defaults. Environment overrides are applied afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if an explicitly requested file is missing
    /// or any config file fails to parse.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let requested = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        let config = match requested {
            Some(path) => Self::read(&path)?,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::read(default)?
                } else {
                    log::debug!("No {DEFAULT_CONFIG_FILE} found, using defaults");
                    Self::default()
                }
            }
        };

        Ok(config.with_env_overrides(|key| std::env::var(key).ok()))
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        log::debug!("Reading config from {}", path.display());
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Applies environment overrides looked up through `lookup`.
    #[must_use]
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = lookup(REQUESTS_ENV).filter(|p| !p.trim().is_empty()) {
            self.requests_path = PathBuf::from(path);
        }
        self
    }
}
