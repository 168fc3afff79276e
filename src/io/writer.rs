// src/io/writer.rs
use std::path::Path;
use tracing::{debug, info, warn};

use super::raster::{GeoReference, OutputDataset, RasterSink};
use crate::error::Result;
use crate::processing::classifier::ClassifiedScene;

pub const OUTPUT_BANDS: usize = 3;

/// Persist a classified scene as a 3-band byte raster: band 1 non-snow, band 2 zero, band 3 snow.
///
/// If anything fails after the dataset was created, the partial file is discarded.
pub fn write_classification(
    sink: &dyn RasterSink,
    geo: &GeoReference,
    scene: ClassifiedScene,
    output_path: &Path,
) -> Result<()> {
    let size = (scene.width, scene.height);
    let dataset = sink.create(output_path, size, OUTPUT_BANDS)?;

    if let Err(err) = fill_dataset(dataset, geo, scene) {
        if let Err(cleanup) = sink.discard(output_path) {
            warn!(
                "Could not remove partial output {}: {}",
                output_path.display(),
                cleanup
            );
        }
        return Err(err);
    }

    info!(
        "Output written: {} (Blue=Snow, Red=Non-snow)",
        output_path.display()
    );
    Ok(())
}

fn fill_dataset(
    mut dataset: Box<dyn OutputDataset>,
    geo: &GeoReference,
    scene: ClassifiedScene,
) -> Result<()> {
    if let Some(transform) = &geo.geo_transform {
        dataset.set_geo_transform(transform)?;
    }
    if !geo.projection.is_empty() {
        dataset.set_projection(&geo.projection)?;
    }

    let size = (scene.width, scene.height);
    let ClassifiedScene {
        red, green, blue, ..
    } = scene;

    for (index, description, data) in [
        (1, "non-snow", red),
        (2, "unused", green),
        (3, "snow", blue),
    ] {
        debug!(band = index, description, "Writing band");
        dataset.write_band(index, description, size, data)?;
    }

    dataset.close()
}
