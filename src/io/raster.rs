// src/io/raster.rs
use serde::Serialize;
use std::path::Path;

use crate::error::Result;

/// Affine transform and projection carried from input to output untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GeoReference {
    pub geo_transform: Option<[f64; 6]>,
    pub projection: String,
}

/// Read side of a raster dataset. Band indices are 1-based.
pub trait RasterSource {
    fn band_count(&self) -> usize;

    /// (width, height) of the given band
    fn band_size(&self, index: usize) -> Result<(usize, usize)>;

    /// Read a full `size` window starting at the origin, row-major.
    fn read_band(&self, index: usize, size: (usize, usize)) -> Result<Vec<f32>>;

    fn geo_transform(&self) -> Option<[f64; 6]>;

    fn projection(&self) -> String;
}

/// Factory for byte-typed output datasets.
pub trait RasterSink {
    fn create(
        &self,
        path: &Path,
        size: (usize, usize),
        band_count: usize,
    ) -> Result<Box<dyn OutputDataset>>;

    /// Remove whatever a failed write left behind at `path`.
    fn discard(&self, _path: &Path) -> Result<()> {
        Ok(())
    }
}

pub trait OutputDataset {
    fn set_geo_transform(&mut self, transform: &[f64; 6]) -> Result<()>;

    fn set_projection(&mut self, projection: &str) -> Result<()>;

    fn write_band(
        &mut self,
        index: usize,
        description: &str,
        size: (usize, usize),
        data: Vec<u8>,
    ) -> Result<()>;

    /// Flush and release the dataset. Nothing is guaranteed on disk before this returns.
    fn close(self: Box<Self>) -> Result<()>;
}
