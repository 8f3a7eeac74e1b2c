//! Renderer module
//!
//! Renders a Report to one of the output formats: delimited, json, jsonl

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::config::ReportOptions;
use crate::core::error::OutputError;
use crate::pipeline::report::{Report, ReportEntry};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Delimited,
    Json,
    Jsonl,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "delimited" | "txt" => Ok(ReportFormat::Delimited),
            "json" => Ok(ReportFormat::Json),
            "jsonl" => Ok(ReportFormat::Jsonl),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl ReportFormat {
    /// File extension the save prompt filters on
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Delimited => "txt",
            ReportFormat::Json => "json",
            ReportFormat::Jsonl => "jsonl",
        }
    }

    /// Human readable name for the save prompt
    pub fn description(&self) -> &'static str {
        match self {
            ReportFormat::Delimited => "txt file",
            ReportFormat::Json => "JSON file",
            ReportFormat::Jsonl => "JSON Lines file",
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: ReportFormat,
    pub pretty: bool,
}

impl RenderConfig {
    pub fn with_pretty(format: ReportFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Full JSON document
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    source: &'a str,
    generated_at: DateTime<Utc>,
    top: usize,
    total: u64,
    distinct: usize,
    entries: &'a [ReportEntry],
}

/// Renderer for reports
pub struct Renderer<'a> {
    config: RenderConfig,
    options: &'a ReportOptions,
}

impl<'a> Renderer<'a> {
    pub fn new(config: RenderConfig, options: &'a ReportOptions) -> Self {
        Self { config, options }
    }

    /// Render a report; `source` names the analysed document
    pub fn render(&self, report: &Report, source: &str) -> Result<String, OutputError> {
        match self.config.format {
            ReportFormat::Delimited => Ok(report.to_delimited(self.options)),
            ReportFormat::Json => self.render_json(report, source),
            ReportFormat::Jsonl => self.render_jsonl(report),
        }
    }

    /// Render as a single JSON document with run metadata
    fn render_json(&self, report: &Report, source: &str) -> Result<String, OutputError> {
        let document = JsonReport {
            source,
            generated_at: Utc::now(),
            top: report.entries.len(),
            total: report.total,
            distinct: report.distinct,
            entries: &report.entries,
        };

        let json = if self.config.pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };
        Ok(json)
    }

    /// Render as JSON Lines (one entry per line)
    fn render_jsonl(&self, report: &Report) -> Result<String, OutputError> {
        let lines = report
            .entries
            .iter()
            .map(|entry| {
                if self.config.pretty {
                    serde_json::to_string_pretty(entry)
                } else {
                    serde_json::to_string(entry)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(lines.join(if self.config.pretty { "\n\n" } else { "\n" }))
    }
}
