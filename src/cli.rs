//! CLI module - Command-line interface definition and handler

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use crate::backends::extract::DocumentExtractor;
use crate::backends::picker::{ArgsPicker, PromptPicker};
use crate::core::config::{Config, ConfigOverrides, DEFAULT_CONFIG_FILE};
use crate::core::error::WordRankError;
use crate::core::render::{RenderConfig, ReportFormat};
use crate::pipeline::{self, RunSummary};

/// wordrank - rank the most frequent words of a PDF document.
#[derive(Parser, Debug)]
#[command(name = "wordrank")]
#[command(
    author,
    version,
    about,
    long_about = r#"wordrank extracts the text of a PDF, normalizes every space-separated word
with a configurable regex, counts the surviving tokens and writes the top-N
most frequent ones to a report file.

Report lines look like:
    token;count;relative_frequency

The config file (default: config.json) is a JSON object:
    {"top": 10, "minimum_word_length": 3, "regex": "[^a-zA-Z]"}

Optional config fields: "separator" (default ";"), "relative_frequency"
(default true) and "precision" (default 6).

When --input or --output is omitted you are prompted for the path; an empty
answer cancels the run.

Examples:
    wordrank --input paper.pdf --output words.txt
    wordrank --config ranks.json --top 25 --input paper.pdf --output -
    wordrank --format json --input paper.pdf --output words.json
"#
)]
pub struct Cli {
    /// Path to the JSON config file.
    #[arg(
        long,
        env = "WORDRANK_CONFIG",
        default_value = DEFAULT_CONFIG_FILE,
        value_name = "FILE",
        long_help = "Path to the JSON config file.\n\n\
Required fields: top, minimum_word_length, regex.\n\
Can also be set with the WORDRANK_CONFIG environment variable."
    )]
    pub config: PathBuf,

    /// Document to analyse (*.pdf or *.txt).
    #[arg(
        short,
        long,
        value_name = "FILE",
        long_help = "Document to analyse. PDF files go through text extraction; .txt files\n\
are read as-is.\n\n\
If omitted, you are prompted for a path."
    )]
    pub input: Option<PathBuf>,

    /// Destination of the report ('-' for stdout).
    #[arg(
        short,
        long,
        value_name = "FILE",
        long_help = "Destination of the report. Its extension must match the report format\n\
(.txt for delimited, .json, .jsonl). Use '-' to print to stdout.\n\n\
If omitted, you are prompted for a path."
    )]
    pub output: Option<PathBuf>,

    /// Override the config's top value.
    #[arg(
        long,
        value_name = "N",
        allow_negative_numbers = true,
        long_help = "Maximum number of report lines. Overrides \"top\" from the config.\n\n\
Zero or negative values produce an empty report."
    )]
    pub top: Option<i64>,

    /// Override the config's minimum word length.
    #[arg(
        long,
        value_name = "N",
        allow_negative_numbers = true,
        long_help = "Minimum token length in characters. Overrides \"minimum_word_length\"\n\
from the config.\n\n\
Zero or negative values disable the length filter."
    )]
    pub minimum_word_length: Option<i64>,

    /// Report format (delimited/json/jsonl).
    #[arg(
        long,
        default_value = "delimited",
        value_name = "FORMAT",
        long_help = "Select the report format.\n\n\
Supported values:\n\
- delimited (default): token;count;relative_frequency lines\n\
- json: a single document with totals and entries\n\
- jsonl: one JSON object per entry"
    )]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(
        long,
        long_help = "Pretty-print JSON and JSONL reports. Has no effect on the delimited format."
    )]
    pub pretty: bool,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored output. This is useful when piping stderr to files or when\n\
your terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Quiet mode (errors only).
    #[arg(
        short,
        long,
        long_help = "Only log errors and skip the run summary."
    )]
    pub quiet: bool,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        long_help = "Log progress and debug details to stderr. RUST_LOG takes precedence."
    )]
    pub verbose: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<RunSummary, WordRankError> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let format: ReportFormat = cli.format.parse().unwrap_or_else(|err| {
        log::warn!("{}, falling back to delimited", err);
        ReportFormat::default()
    });
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    log::info!("Loading config {}...", cli.config.display());
    let overrides = ConfigOverrides {
        top: cli.top,
        minimum_word_length: cli.minimum_word_length,
    };
    let config = Config::load(&cli.config, overrides)?;
    log::debug!(
        "top={} minimum_word_length={} regex={}",
        config.top,
        config.minimum_word_length,
        config.pattern.as_str()
    );

    let mut picker = ArgsPicker::new(cli.input, cli.output, PromptPicker::terminal());
    let summary = pipeline::run(
        &config,
        &DocumentExtractor::default(),
        &mut picker,
        render_config,
    )?;

    if !cli.quiet {
        print_summary(&summary);
    }
    Ok(summary)
}

fn print_summary(summary: &RunSummary) {
    let report = &summary.report;
    eprintln!(
        "{} {} of {} distinct words ({} tokens) from {} to {}",
        "✓".green().bold(),
        report.entries.len().to_string().bold(),
        report.distinct,
        report.total,
        summary.input.display().to_string().cyan(),
        summary.output.display().to_string().cyan()
    );
}
