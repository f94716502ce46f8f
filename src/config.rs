//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then an optional JSON config
//! file, then command-line overrides applied by the CLI.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_DRAFTS_DIR, DEFAULT_REPORT_PATTERN,
    DEFAULT_USER_AGENT,
};
use crate::error::{CardsError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Output formats for the card deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Coloured cards in the terminal
    #[default]
    Text,
    /// Standalone HTML page with one card per instrument
    Html,
    /// Pretty-printed JSON document
    Json,
}

/// Where and how cards are written
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,

    /// Output file; stdout when not set
    pub path: Option<PathBuf>,
}

/// Settings for fetching remote reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub user_agent: String,

    /// Request timeout in seconds; no timeout when not set
    pub timeout_secs: Option<u64>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: None,
        }
    }
}

/// Global configuration for loading and rendering report cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardsConfig {
    /// Directory searched for reports when no input is given
    pub drafts_dir: PathBuf,

    /// Glob pattern of report file names inside `drafts_dir`
    pub report_pattern: String,

    pub output: OutputConfig,

    pub http: HttpConfig,

    /// Hide cards whose absolute signal strength is below this value
    pub min_strength: Option<f64>,
}

impl Default for CardsConfig {
    fn default() -> Self {
        Self {
            drafts_dir: PathBuf::from(DEFAULT_DRAFTS_DIR),
            report_pattern: DEFAULT_REPORT_PATTERN.to_string(),
            output: OutputConfig::default(),
            http: HttpConfig::default(),
            min_strength: None,
        }
    }
}

impl CardsConfig {
    /// Default config file location under the user config directory
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a JSON file; missing keys take their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CardsError::configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = serde_json::from_str(&content).map_err(|e| {
            CardsError::configuration(format!(
                "Invalid config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from `explicit` if given, else from the default location if it exists
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_config_path().filter(|path| path.exists()) {
                Some(path) => Self::from_file(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Check settings that cannot be expressed in the types
    pub fn validate(&self) -> Result<()> {
        if self.report_pattern.trim().is_empty() {
            return Err(CardsError::configuration("report pattern must not be empty"));
        }

        if self.http.timeout_secs == Some(0) {
            return Err(CardsError::configuration(
                "request timeout must be at least one second",
            ));
        }

        if let Some(min_strength) = self.min_strength {
            if !min_strength.is_finite() || min_strength < 0.0 {
                return Err(CardsError::configuration(format!(
                    "minimum strength must be a non-negative number, got {}",
                    min_strength
                )));
            }
        }

        Ok(())
    }

    /// Full glob for report discovery
    pub fn report_glob(&self) -> String {
        self.drafts_dir
            .join(&self.report_pattern)
            .to_string_lossy()
            .into_owned()
    }

    /// Set the drafts directory
    pub fn with_drafts_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.drafts_dir = dir.into();
        self
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.output.format = format;
        self
    }

    /// Write output to a file instead of stdout
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output.path = Some(path.into());
        self
    }

    /// Hide cards below an absolute signal strength
    pub fn with_min_strength(mut self, min_strength: f64) -> Self {
        self.min_strength = Some(min_strength);
        self
    }

    /// Bound remote report requests
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.http.timeout_secs = Some(secs);
        self
    }
}
