//! wordtool - find dictionary words meeting letter-based constraints
//!
//! Thin driver around [`wordtool::WordTool`]: parses options, runs the search
//! and writes the matching words.

use clap::Parser;
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use wordtool::cli::{commands, Cli};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` wins; otherwise only warnings, or debug output
/// from this crate with `--verbose`.
fn init_logging(verbose: bool) {
    let default_directive = if verbose { "wordtool=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}
