//! Binary entrypoint for the image-slideshow helper.
//!
//! Delegates all logic to the library crate; no local modules here.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use image_slideshow::config::Configuration;
use image_slideshow::discover;

/// Simple CLI
#[derive(Debug, Parser)]
#[command(name = "image-slideshow", about = "Discovers and orders slideshow images")]
struct Cli {
    /// Path to YAML config file
    #[arg(short, long, value_name = "FILE", default_value = "config.yaml")]
    config: PathBuf,

    /// Shuffle the list regardless of the configured order
    #[arg(long, action = ArgAction::SetTrue)]
    randomize: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) -> Result<()> {
    // map -v to log level
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("image_slideshow={}", level).parse()?);
    fmt().with_env_filter(filter).with_target(true).init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let mut cfg = Configuration::from_yaml_file(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?
        .validated()
        .context("validating configuration")?;
    if cli.randomize {
        cfg.randomize_image_order = true;
    }

    let ready = discover::discover(&cfg)?;
    info!(
        identifier = %ready.identifier,
        count = ready.image_list.len(),
        "discovered images"
    );
    for path in &ready.image_list {
        println!("{path}");
    }
    Ok(())
}
