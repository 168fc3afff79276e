// src/summary.rs
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::io::GeoReference;
use crate::processing::ClassifiedScene;

/// Per-run statistics reported after a scene has been classified.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneSummary {
    pub index: String,
    pub width: usize,
    pub height: usize,
    pub snow_pixels: usize,
    pub non_snow_pixels: usize,
    pub snow_fraction: f64,
    pub threshold: f32,
    #[serde(flatten)]
    pub geo: GeoReference,
}

impl SceneSummary {
    pub fn new(index: &str, threshold: f32, scene: &ClassifiedScene, geo: &GeoReference) -> Self {
        Self {
            index: index.to_string(),
            width: scene.width,
            height: scene.height,
            snow_pixels: scene.snow_pixels,
            non_snow_pixels: scene.non_snow_pixels(),
            snow_fraction: scene.snow_fraction(),
            threshold,
            geo: geo.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}
