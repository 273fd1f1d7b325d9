//! Beam-width sweep binary.
//!
//! Runs the configured sweep and prints a Markdown report to stdout.
//! Pass a TOML config path as the first argument, or run with the
//! defaults (8 queens, widths 1/10/50, 50 runs of 100 problems).
//!
//! Log verbosity follows `RUST_LOG`; per-iteration engine output is at
//! `debug` level under `queenbeam_search`.

use std::env;
use std::process::ExitCode;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use queenbeam_bench::{run_sweep, MarkdownReport, SweepConfig};

fn main() -> ExitCode {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match env::args().nth(1) {
        Some(path) => match SweepConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("failed to load {}: {}", path, err);
                return ExitCode::FAILURE;
            }
        },
        None => SweepConfig::default(),
    };

    match run_sweep(config) {
        Ok(result) => {
            print!("{}", MarkdownReport::to_string(&result));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("sweep failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
