// Declare modules
pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod models;
pub mod scanner;
pub mod selector;
pub mod writer;

use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::path::PathBuf;

use self::cli::Cli;
use self::config::resolve_config;
use self::writer::run_scan;

/// Initializes components and orchestrates data flow. Returns the path of the written bundle.
pub fn run() -> Result<PathBuf> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Resolve Configuration
    let current_dir = env::current_dir().context("Failed to get current directory")?;
    let config = resolve_config(args, &current_dir)?;

    log::info!(
        "Scanning {} for {}",
        config.root.display(),
        config.criteria.join(", ")
    );

    // 3. Scan and write the bundle
    let summary = run_scan(&config)?;

    if summary.matched_count == 0 {
        log::info!("⚠️ No files matched the specified criteria.");
    } else {
        log::info!("Saved {} files", summary.matched_count);
    }

    Ok(config.output_path)
}
