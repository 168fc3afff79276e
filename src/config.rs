// src/config.rs
use crate::error::{Result, SnowMaskError};

/// Sentinel-2 B03 (green).
pub const GREEN_BAND: usize = 3;
/// Sentinel-2 B11 (SWIR 1).
pub const SWIR_BAND: usize = 11;
pub const NDSI_THRESHOLD: f32 = 0.4;

pub const DEFAULT_INPUT: &str = "input_sentinel2.tif";
pub const DEFAULT_OUTPUT: &str = "snow_only_colored.tif";

/// Scenes with fewer pixels than this are classified on the calling thread.
pub const PARALLEL_CUTOFF: usize = 512 * 512;

/// Band selection and threshold for snow classification.
///
/// Band indices are 1-based, as GDAL numbers them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnowConfig {
    pub green_band: usize,
    pub swir_band: usize,
    pub threshold: f32,
}

impl Default for SnowConfig {
    fn default() -> Self {
        Self {
            green_band: GREEN_BAND,
            swir_band: SWIR_BAND,
            threshold: NDSI_THRESHOLD,
        }
    }
}

impl SnowConfig {
    pub fn new(green_band: usize, swir_band: usize, threshold: f32) -> Self {
        Self {
            green_band,
            swir_band,
            threshold,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.green_band == 0 || self.swir_band == 0 {
            return Err(SnowMaskError::InvalidConfig(format!(
                "band indices are 1-based, got green={} swir={}",
                self.green_band, self.swir_band
            )));
        }
        if !self.threshold.is_finite() {
            return Err(SnowMaskError::InvalidConfig(format!(
                "threshold must be finite, got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

/// Execution settings for a processor run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessorOptions {
    pub threads: usize,
    pub parallel_cutoff: usize,
}

impl Default for ProcessorOptions {
    fn default() -> Self {
        Self {
            threads: num_cpus::get(),
            parallel_cutoff: PARALLEL_CUTOFF,
        }
    }
}

impl ProcessorOptions {
    pub fn with_threads(threads: Option<usize>) -> Self {
        let mut options = Self::default();
        if let Some(threads) = threads {
            options.threads = threads.max(1);
        }
        options
    }
}
