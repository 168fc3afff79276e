// src/io/mod.rs
pub mod gdal_io;
pub mod raster;
pub mod reader;
pub mod writer;

pub use gdal_io::{GdalSink, GdalSource};
pub use raster::{GeoReference, OutputDataset, RasterSink, RasterSource};
pub use reader::{load_bands, LoadedScene};
pub use writer::write_classification;
