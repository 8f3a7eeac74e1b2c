//! Error taxonomy
//!
//! Every error is fatal. Each category maps to its own process exit code so
//! scripts can tell a bad config apart from a bad document or a failed write.

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Problems loading or validating the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid regex {pattern:?}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Problems acquiring or reading the input document
#[derive(Debug, Error)]
pub enum InputError {
    #[error("no input file selected")]
    Cancelled,

    #[error("input prompt failed")]
    Prompt(#[source] std::io::Error),

    #[error("unsupported input file {path:?} (expected {expected})")]
    Unsupported { path: PathBuf, expected: String },

    #[error("failed to extract text from {path:?}")]
    Extract {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

/// Problems acquiring the destination or writing the report
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("no output file selected")]
    Cancelled,

    #[error("output prompt failed")]
    Prompt(#[source] std::io::Error),

    #[error("unsupported output file {path:?} (expected {expected})")]
    Unsupported { path: PathBuf, expected: String },

    #[error("failed to serialize report")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write report to {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level error returned by a run
#[derive(Debug, Error)]
pub enum WordRankError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

impl WordRankError {
    /// Process exit code for this error category
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WordRankError::Config(_) => ExitCode::from(2),
            WordRankError::Input(_) => ExitCode::from(3),
            WordRankError::Output(_) => ExitCode::from(4),
        }
    }
}
