//! # Hirecraft CLI
//!
//! The binary is intentionally thin: argument parsing, dispatch, and output
//! live in `src/cli/`, while this file only initializes logging, invokes
//! `cli::run()`, and handles process termination. Everything stateful goes
//! through the `hirecraft` library — the CLI loads the snapshot, dispatches
//! actions through the transition engine, persists the result, and prints.

mod cli;

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
