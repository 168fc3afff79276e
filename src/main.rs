// src/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use gdal::DriverManager;
use tracing::{error, info};

use snow_mask::cli::Cli;
use snow_mask::config::{ProcessorOptions, SnowConfig};
use snow_mask::io::{GdalSink, GdalSource};
use snow_mask::logger;
use snow_mask::processing::{RasterProcessor, SnowDetector};

fn main() {
    let cli = Cli::parse();
    logger::init();

    if let Err(e) = run(&cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }

    info!("Program completed successfully.");
}

fn run(cli: &Cli) -> Result<()> {
    // Every driver must be registered before the first open/create.
    DriverManager::register_all();

    let detector = SnowDetector::new(
        SnowConfig::default(),
        ProcessorOptions::with_threads(cli.threads),
    )?;

    let source = GdalSource::open(&cli.input).context("loading input scene")?;
    let summary = detector
        .process(&source, &GdalSink::new(), &cli.output)
        .with_context(|| format!("{} run on {} failed", detector.name(), cli.input.display()))?;
    drop(source);

    if let Some(path) = &cli.summary {
        summary
            .write_json(path)
            .with_context(|| format!("writing summary to {}", path.display()))?;
        info!("Summary written: {}", path.display());
    }

    Ok(())
}
