//! Dictee CLI library
//!
//! This library provides the command-line interface for the Dictee
//! transcription comparison engine.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};

/// Install the global logger at a level chosen by `-v` occurrences
///
/// `RUST_LOG` still takes precedence. Nothing is installed when `quiet`.
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();
}
