// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnowMaskError {
    #[error("Cannot open input file {path}: {source}")]
    SourceOpen {
        path: PathBuf,
        #[source]
        source: gdal::errors::GdalError,
    },

    #[error("Insufficient bands: need at least {required}, source has {available}")]
    InsufficientBands { required: usize, available: usize },

    #[error(
        "Band size mismatch: green band is {}x{}, SWIR band is {}x{}",
        .green.0, .green.1, .swir.0, .swir.1
    )]
    BandSizeMismatch {
        green: (usize, usize),
        swir: (usize, usize),
    },

    #[error("Failed to read band {band}: {source}")]
    BandRead {
        band: usize,
        #[source]
        source: gdal::errors::GdalError,
    },

    #[error("Band {band} returned {actual} samples, expected {expected}")]
    BandLength {
        band: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Cannot create output dataset {path}: {reason}")]
    OutputCreate { path: PathBuf, reason: String },

    #[error("Failed to write output dataset {path}: {reason}")]
    OutputWrite { path: PathBuf, reason: String },

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Failed to serialize scene summary: {0}")]
    Summary(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SnowMaskError>;
