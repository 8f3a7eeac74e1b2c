//! Logger setup

use log::LevelFilter;

/// Level implied by the quiet/verbose flags
pub fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Install the global logger. `RUST_LOG` overrides the flag-derived level.
pub fn init(quiet: bool, verbose: bool) {
    env_logger::Builder::new()
        .filter_level(level_for(quiet, verbose))
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
