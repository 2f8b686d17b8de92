// ============================================================================
// mpf-component-cli/src/logging.rs
// ============================================================================
//
// LOGGING: Console logger setup for the component runner
//
// The core library and the example components log through the `log` facade.
// The runner installs `env_logger` as the backend, writing to stderr so that
// stdout carries only the JSON results.
//
// USAGE:
// - RUST_LOG=info (default): job summaries and result counts
// - RUST_LOG=debug or --verbose: job parameters and per-track conversions

use env_logger::Env;
use log::{LevelFilter, debug};
use std::io::Write;

/// Initializes the global logger. `RUST_LOG` takes precedence when set.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(level.as_str()))
        .format(|buf, record| {
            let level_str = match record.level() {
                log::Level::Error => "ERROR",
                log::Level::Warn => "WARN ",
                log::Level::Info => "INFO ",
                log::Level::Debug => "DEBUG",
                log::Level::Trace => "TRACE",
            };
            writeln!(buf, "{} {} {}", buf.timestamp(), level_str, record.args())
        })
        .init();

    debug!("Logger initialized with level: {}", level);
}
