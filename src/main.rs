//! wordrank - Word frequency ranking for PDF documents
//!
//! wordrank provides:
//! - PDF (and plain text) extraction
//! - Regex-driven token normalization with a minimum length filter
//! - Deterministic top-N ranking (count descending, token ascending)
//! - Delimited, JSON and JSONL reports

use clap::Parser;
use std::process::ExitCode;

mod backends;
mod cli;
mod core;
mod pipeline;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    core::logging::init(cli.quiet, cli.verbose);

    match cli::run(cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.exit_code();
            log::error!("{:#}", anyhow::Error::new(err));
            code
        }
    }
}
