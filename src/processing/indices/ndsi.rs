// src/processing/indices/ndsi.rs
use super::IndexCalculator;
use crate::config::{GREEN_BAND, SWIR_BAND};

/// Normalized Difference Snow Index (NDSI) calculator
pub struct NDSI {
    green_index: usize,
    swir_index: usize,
    name: String,
}

impl NDSI {
    pub fn new(green_index: usize, swir_index: usize, name: Option<String>) -> Self {
        Self {
            green_index,
            swir_index,
            name: name.unwrap_or_else(|| "NDSI".to_string()),
        }
    }
}

impl Default for NDSI {
    fn default() -> Self {
        Self::new(GREEN_BAND, SWIR_BAND, None)
    }
}

impl IndexCalculator for NDSI {
    /// (GREEN - SWIR) / (GREEN + SWIR), or 0 when both reflectances sum to zero.
    #[inline]
    fn compute(&self, green: f32, swir: f32) -> f32 {
        let sum = green + swir;
        if sum != 0.0 {
            (green - swir) / sum
        } else {
            0.0
        }
    }

    fn bands(&self) -> (usize, usize) {
        (self.green_index, self.swir_index)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
