// Declare modules
pub mod cli;
pub mod config;
pub mod formatter;
pub mod models;
pub mod scanner;


use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::path::PathBuf;

use self::cli::Cli;
use self::config::{load_presets_file, resolve_config};
use self::formatter::OutputGenerator;
use self::models::CollectorConfig;
use self::scanner::Scanner;

/// Scans `config.root`, writes the concatenated files to `config.output`
/// and returns that path. Unreadable files are reported and skipped; only
/// the final write can fail the call.
pub fn collect(config: &CollectorConfig) -> Result<PathBuf> {
    let outcome = Scanner::new(config).scan();

    for failure in &outcome.failures {
        log::error!("{}", failure);
    }

    if outcome.entries.is_empty() {
        log::warn!("No matching files found under {:?}", config.root);
    }

    let content = OutputGenerator::generate_content(&outcome.entries);
    OutputGenerator::write_artifact(&config.output, &content)?;

    log::debug!(
        "Wrote {} files ({} bytes) to {:?}",
        outcome.entries.len(),
        content.len(),
        config.output
    );
    Ok(config.output.clone())
}

fn setup_logging(quiet: bool, verbose: u8) {
    let log_level = if quiet {
        log::LevelFilter::Off
    } else {
        match verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();
    setup_logging(args.quiet, args.verbose);

    // 2. Identify Project Name
    let current_dir = env::current_dir().context("Failed to get current directory")?;
    let project_name = current_dir.file_name().and_then(|n| n.to_str());

    // 3. Resolve Configuration
    let presets = load_presets_file()?;
    let config = resolve_config(&args, &presets, project_name)?;

    // 4. Scan and Write
    let output = collect(&config)?;

    log::info!("Done! Code saved to '{}'", output.display());
    Ok(())
}
