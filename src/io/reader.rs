// src/io/reader.rs
use tracing::{debug, info};

use super::raster::{GeoReference, RasterSource};
use crate::error::{Result, SnowMaskError};

/// The two bands a classifier needs, plus everything passed through to the output.
#[derive(Debug, Clone)]
pub struct LoadedScene {
    pub green: Vec<f32>,
    pub swir: Vec<f32>,
    pub width: usize,
    pub height: usize,
    pub geo: GeoReference,
}

impl LoadedScene {
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}

/// Read the green and SWIR bands (1-based indices) as f32 and capture georeferencing.
///
/// Scene dimensions come from the green band; the SWIR band must match them.
pub fn load_bands(
    source: &dyn RasterSource,
    green_index: usize,
    swir_index: usize,
) -> Result<LoadedScene> {
    let available = source.band_count();
    let required = green_index.max(swir_index);
    if available < required {
        return Err(SnowMaskError::InsufficientBands {
            required,
            available,
        });
    }

    let geo = GeoReference {
        geo_transform: source.geo_transform(),
        projection: source.projection(),
    };

    let (width, height) = source.band_size(green_index)?;
    let swir_size = source.band_size(swir_index)?;
    if swir_size != (width, height) {
        return Err(SnowMaskError::BandSizeMismatch {
            green: (width, height),
            swir: swir_size,
        });
    }
    debug!(width, height, bands = available, "Scene dimensions");

    let green = source.read_band(green_index, (width, height))?;
    let swir = source.read_band(swir_index, (width, height))?;

    for (band, data) in [(green_index, &green), (swir_index, &swir)] {
        if data.len() != width * height {
            return Err(SnowMaskError::BandLength {
                band,
                expected: width * height,
                actual: data.len(),
            });
        }
    }

    info!(
        "Loaded bands {} (green) and {} (SWIR): {}x{}",
        green_index, swir_index, width, height
    );

    Ok(LoadedScene {
        green,
        swir,
        width,
        height,
        geo,
    })
}
