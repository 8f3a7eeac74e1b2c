//! Report building and the delimited line format
//!
//! A report line is `token<SEP>count` optionally followed by
//! `<SEP>relative_frequency`. Lines are joined with `\n` and the last line
//! has no trailing newline.

use serde::Serialize;

use crate::core::config::ReportOptions;
use crate::core::model::RankedPair;

/// One ranked token with its share of all accepted tokens
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    pub token: String,
    pub count: u64,
    pub relative_frequency: f64,
}

/// The top slice of a ranking, ready to render
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    /// Accepted tokens across the whole document
    pub total: u64,
    /// Distinct tokens in the frequency table
    pub distinct: usize,
    pub entries: Vec<ReportEntry>,
}

impl Report {
    /// Keep at most `limit` pairs. An empty table yields an empty report,
    /// so `total` is never zero when an entry is divided by it.
    pub fn build(ranked: &[RankedPair], total: u64, limit: usize) -> Self {
        if total == 0 {
            return Self {
                total,
                distinct: ranked.len(),
                entries: Vec::new(),
            };
        }

        let entries = ranked
            .iter()
            .take(limit)
            .map(|pair| ReportEntry {
                token: pair.token.clone(),
                count: pair.count,
                relative_frequency: pair.count as f64 / total as f64,
            })
            .collect();

        Self {
            total,
            distinct: ranked.len(),
            entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as delimited lines
    pub fn to_delimited(&self, options: &ReportOptions) -> String {
        self.entries
            .iter()
            .map(|entry| format_line(entry, options))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn format_line(entry: &ReportEntry, options: &ReportOptions) -> String {
    let sep = &options.separator;
    if options.relative_frequency {
        format!(
            "{}{}{}{}{:.*}",
            entry.token, sep, entry.count, sep, options.precision, entry.relative_frequency
        )
    } else {
        format!("{}{}{}", entry.token, sep, entry.count)
    }
}
