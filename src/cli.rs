use clap::Parser;
use std::path::PathBuf;

use crate::config::{DEFAULT_INPUT, DEFAULT_OUTPUT};

#[derive(Parser)]
#[command(name = "snow-mask")]
#[command(about = "Snow / non-snow classification with the Normalized Difference Snow Index")]
#[command(version)]
pub struct Cli {
    /// Multispectral input raster (green = band 3, SWIR = band 11)
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Output file path (3-band byte image: red = non-snow, blue = snow)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Write a JSON summary of the classification to this path
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Worker threads for classification (default: all CPUs)
    #[arg(long)]
    pub threads: Option<usize>,
}
