//! Pipeline module - From document to ranked report
//!
//! The run is strictly sequential: pick input, extract text, count, rank,
//! render, pick output, write. Any failure ends the run before the output
//! is written.

pub mod normalize;
pub mod rank;
pub mod report;

use std::path::PathBuf;

use crate::backends::extract::{TextExtractor, SUPPORTED_EXTENSIONS};
use crate::backends::picker::{FileFilter, PathPicker, STDOUT_PATH};
use crate::backends::sink::write_report;
use crate::core::config::Config;
use crate::core::error::{InputError, OutputError, WordRankError};
use crate::core::render::{RenderConfig, Renderer};
use normalize::Normalizer;
use report::Report;

/// What a successful run produced
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub report: Report,
}

/// Count and rank the words of `text` according to `config`
pub fn analyze(config: &Config, text: &str) -> Report {
    let normalizer = Normalizer::new(&config.pattern, config.minimum_word_length);
    let table = normalizer.count(text);
    if table.is_empty() {
        log::warn!("No words passed the filter; the report will be empty");
    }
    log::debug!(
        "accepted {} tokens, {} distinct",
        table.total(),
        table.len()
    );

    let ranked = rank::rank(&table);
    Report::build(&ranked, table.total(), config.limit())
}

/// Filter for the open prompt
pub fn input_filter() -> FileFilter {
    FileFilter::new("PDF file", SUPPORTED_EXTENSIONS)
}

/// Execute one full run
pub fn run(
    config: &Config,
    extractor: &dyn TextExtractor,
    picker: &mut dyn PathPicker,
    render_config: RenderConfig,
) -> Result<RunSummary, WordRankError> {
    log::info!("Loading file...");
    let filter = input_filter();
    let input = picker
        .pick_open(&filter)
        .map_err(InputError::Prompt)?
        .ok_or(InputError::Cancelled)?;
    if !filter.accepts(&input) {
        return Err(InputError::Unsupported {
            path: input,
            expected: filter.patterns(),
        }
        .into());
    }

    log::info!("Reading file {}...", input.display());
    let text = extractor
        .extract(&input)
        .map_err(|source| InputError::Extract {
            path: input.clone(),
            source,
        })?;

    log::info!("Processing file content...");
    let report = analyze(config, &text);
    if report.is_empty() {
        log::info!("Nothing to rank");
    }

    log::info!("Preparing output...");
    let renderer = Renderer::new(render_config, &config.report);
    let contents = renderer.render(&report, &input.to_string_lossy())?;

    let format = render_config.format;
    let output_filter = FileFilter::new(format.description(), &[format.extension()]);
    let output = picker
        .pick_save(&output_filter)
        .map_err(OutputError::Prompt)?
        .ok_or(OutputError::Cancelled)?;
    if output.as_os_str() != STDOUT_PATH && !output_filter.accepts(&output) {
        return Err(OutputError::Unsupported {
            path: output,
            expected: output_filter.patterns(),
        }
        .into());
    }

    log::info!("Saving output to {}...", output.display());
    write_report(&output, &contents)?;

    Ok(RunSummary {
        input,
        output,
        report,
    })
}
