// src/main.rs

use anyhow::Result;
use clap::Parser;
use lang_search::cli::Cli;
use lang_search::{run, RunOptions};

fn main() -> Result<()> {
    // Initialize logging on stderr; stdout carries the JSON result.
    let default_directive = if cfg!(debug_assertions) {
        "lang_search=debug"
    } else {
        "lang_search=info"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive)),
        )
        .init();

    log::info!("Starting lang-search v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    // --- Configuration & Execution ---
    let options = RunOptions::from(Cli::parse());
    log::debug!("Run options: {:?}", options);

    // --- Error Handling ---
    if let Err(e) = run(&options) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
