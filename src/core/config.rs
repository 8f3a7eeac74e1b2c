//! Configuration loading
//!
//! The config is a flat JSON object:
//!
//! ```json
//! {"top": 10, "minimum_word_length": 3, "regex": "[^a-zA-Z]"}
//! ```
//!
//! Optional report fields (`separator`, `relative_frequency`, `precision`)
//! select between the full report and the simpler count-only variant.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::ConfigError;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Default column separator
pub const DEFAULT_SEPARATOR: &str = ";";

/// Default number of decimals for the relative frequency column
pub const DEFAULT_PRECISION: usize = 6;

/// Largest precision that still carries meaningful f64 digits
pub const MAX_PRECISION: usize = 17;

/// Raw config as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Maximum number of report lines
    pub top: i64,

    /// Minimum token length; zero or negative disables the filter
    pub minimum_word_length: i64,

    /// Pattern matching characters to strip from each word
    pub regex: String,

    /// Column separator
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Render the relative frequency column
    #[serde(default = "default_relative_frequency")]
    pub relative_frequency: bool,

    /// Decimals for the relative frequency column
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

fn default_relative_frequency() -> bool {
    true
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

/// Values from the command line that take precedence over the file
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigOverrides {
    pub top: Option<i64>,
    pub minimum_word_length: Option<i64>,
}

/// How report lines are laid out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub separator: String,
    pub relative_frequency: bool,
    pub precision: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            relative_frequency: true,
            precision: DEFAULT_PRECISION,
        }
    }
}

/// Validated, immutable configuration with the pattern compiled once
#[derive(Debug, Clone)]
pub struct Config {
    pub top: i64,
    pub minimum_word_length: i64,
    pub pattern: Regex,
    pub report: ReportOptions,
}

impl Config {
    /// Read, parse and validate a config file
    pub fn load(path: &Path, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let file: ConfigFile =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        Self::from_file(file, overrides)
    }

    /// Validate an already parsed config
    pub fn from_file(file: ConfigFile, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let pattern = Regex::new(&file.regex).map_err(|source| ConfigError::Pattern {
            pattern: file.regex.clone(),
            source,
        })?;

        if file.separator.is_empty() {
            return Err(ConfigError::Invalid("separator must not be empty".into()));
        }
        if file.separator.contains(['\n', '\r']) {
            return Err(ConfigError::Invalid(
                "separator must not contain line breaks".into(),
            ));
        }
        if file.precision > MAX_PRECISION {
            return Err(ConfigError::Invalid(format!(
                "precision must be at most {}, got {}",
                MAX_PRECISION, file.precision
            )));
        }

        Ok(Self {
            top: overrides.top.unwrap_or(file.top),
            minimum_word_length: overrides
                .minimum_word_length
                .unwrap_or(file.minimum_word_length),
            pattern,
            report: ReportOptions {
                separator: file.separator,
                relative_frequency: file.relative_frequency,
                precision: file.precision,
            },
        })
    }

    /// Number of report lines to emit, zero when `top` is not positive
    pub fn limit(&self) -> usize {
        usize::try_from(self.top).unwrap_or(0)
    }
}
