// src/io/gdal_io.rs
use gdal::raster::{Buffer, ColorInterpretation};
use gdal::{Dataset, DriverManager, DriverType, Metadata};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::raster::{OutputDataset, RasterSink, RasterSource};
use crate::error::{Result, SnowMaskError};

const FALLBACK_DRIVER: &str = "GTiff";

/// GDAL dataset opened read-only; closed when dropped.
pub struct GdalSource {
    dataset: Dataset,
}

impl GdalSource {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let dataset = Dataset::open(path).map_err(|source| SnowMaskError::SourceOpen {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Opened {} ({} bands)", path.display(), dataset.raster_count());
        Ok(Self { dataset })
    }
}

impl RasterSource for GdalSource {
    fn band_count(&self) -> usize {
        self.dataset.raster_count()
    }

    fn band_size(&self, index: usize) -> Result<(usize, usize)> {
        let band = self
            .dataset
            .rasterband(index)
            .map_err(|source| SnowMaskError::BandRead {
                band: index,
                source,
            })?;
        Ok(band.size())
    }

    fn read_band(&self, index: usize, size: (usize, usize)) -> Result<Vec<f32>> {
        let read = || -> gdal::errors::Result<Vec<f32>> {
            let band = self.dataset.rasterband(index)?;
            let buffer = band.read_as::<f32>((0, 0), size, size, None)?;
            Ok(buffer.into_shape_and_vec().1)
        };
        read().map_err(|source| SnowMaskError::BandRead {
            band: index,
            source,
        })
    }

    fn geo_transform(&self) -> Option<[f64; 6]> {
        self.dataset.geo_transform().ok()
    }

    fn projection(&self) -> String {
        self.dataset.projection()
    }
}

/// Creates byte rasters with the driver matching the output extension, GeoTIFF otherwise.
#[derive(Debug, Default, Clone)]
pub struct GdalSink {
    driver: Option<String>,
}

impl GdalSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_driver(name: &str) -> Self {
        Self {
            driver: Some(name.to_string()),
        }
    }

    fn driver_for(&self, path: &Path) -> gdal::errors::Result<gdal::Driver> {
        match &self.driver {
            Some(name) => DriverManager::get_driver_by_name(name),
            None => match DriverManager::get_output_driver_for_dataset_name(path, DriverType::Raster)
            {
                Some(driver) => Ok(driver),
                None => DriverManager::get_driver_by_name(FALLBACK_DRIVER),
            },
        }
    }
}

impl RasterSink for GdalSink {
    fn create(
        &self,
        path: &Path,
        size: (usize, usize),
        band_count: usize,
    ) -> Result<Box<dyn OutputDataset>> {
        let create_err = |e: gdal::errors::GdalError| SnowMaskError::OutputCreate {
            path: path.to_path_buf(),
            reason: e.to_string(),
        };

        let driver = self.driver_for(path).map_err(create_err)?;
        debug!("Creating {} with driver {}", path.display(), driver.short_name());
        let dataset = driver
            .create_with_band_type::<u8, _>(path, size.0, size.1, band_count)
            .map_err(create_err)?;

        Ok(Box::new(GdalOutput {
            dataset,
            path: path.to_path_buf(),
        }))
    }

    fn discard(&self, path: &Path) -> Result<()> {
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}

pub struct GdalOutput {
    dataset: Dataset,
    path: PathBuf,
}

impl GdalOutput {
    fn write_err(&self, e: gdal::errors::GdalError) -> SnowMaskError {
        SnowMaskError::OutputWrite {
            path: self.path.clone(),
            reason: e.to_string(),
        }
    }
}

impl OutputDataset for GdalOutput {
    fn set_geo_transform(&mut self, transform: &[f64; 6]) -> Result<()> {
        self.dataset
            .set_geo_transform(transform)
            .map_err(|e| self.write_err(e))
    }

    fn set_projection(&mut self, projection: &str) -> Result<()> {
        self.dataset
            .set_projection(projection)
            .map_err(|e| self.write_err(e))
    }

    fn write_band(
        &mut self,
        index: usize,
        description: &str,
        size: (usize, usize),
        data: Vec<u8>,
    ) -> Result<()> {
        let color = match index {
            1 => ColorInterpretation::RedBand,
            2 => ColorInterpretation::GreenBand,
            3 => ColorInterpretation::BlueBand,
            _ => ColorInterpretation::Undefined,
        };

        let result = (|| -> gdal::errors::Result<()> {
            let mut band = self.dataset.rasterband(index)?;
            band.set_description(description)?;
            band.set_color_interpretation(color)?;
            let mut buffer = Buffer::new(size, data);
            band.write((0, 0), size, &mut buffer)
        })();
        result.map_err(|e| self.write_err(e))
    }

    fn close(mut self: Box<Self>) -> Result<()> {
        self.dataset.flush_cache().map_err(|e| self.write_err(e))
    }
}
