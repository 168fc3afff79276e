// src/processing/processor.rs
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

use super::classifier::{ClassifiedScene, ThresholdClassifier};
use super::indices::{IndexCalculator, NDSI};
use crate::config::{ProcessorOptions, SnowConfig};
use crate::error::Result;
use crate::io::{load_bands, write_classification, LoadedScene, RasterSink, RasterSource};
use crate::summary::SceneSummary;

/// A whole-scene raster job: read from a source, write a product through a sink.
pub trait RasterProcessor {
    fn name(&self) -> &str;

    fn process(
        &self,
        source: &dyn RasterSource,
        sink: &dyn RasterSink,
        output_path: &Path,
    ) -> Result<SceneSummary>;
}

/// NDSI snow/non-snow classification of a multispectral scene.
pub struct SnowDetector {
    classifier: ThresholdClassifier<NDSI>,
    options: ProcessorOptions,
    pool: Option<ThreadPool>,
}

impl SnowDetector {
    pub fn new(config: SnowConfig, options: ProcessorOptions) -> Result<Self> {
        config.validate()?;

        let pool = if options.threads > 1 {
            Some(
                ThreadPoolBuilder::new()
                    .num_threads(options.threads)
                    .thread_name(|i| format!("snow-mask-{i}"))
                    .build()?,
            )
        } else {
            None
        };

        Ok(Self {
            classifier: ThresholdClassifier::new(
                NDSI::new(config.green_band, config.swir_band, None),
                config.threshold,
            ),
            options,
            pool,
        })
    }

    pub fn threshold(&self) -> f32 {
        self.classifier.threshold()
    }

    pub fn load(&self, source: &dyn RasterSource) -> Result<LoadedScene> {
        let (green_band, swir_band) = self.classifier.calculator().bands();
        load_bands(source, green_band, swir_band)
    }

    pub fn classify(&self, scene: &LoadedScene) -> ClassifiedScene {
        let (w, h) = (scene.width, scene.height);
        match &self.pool {
            Some(pool) if scene.pixel_count() >= self.options.parallel_cutoff => {
                debug!(threads = pool.current_num_threads(), "Classifying in parallel");
                pool.install(|| {
                    self.classifier
                        .classify_parallel(&scene.green, &scene.swir, w, h)
                })
            }
            _ => self.classifier.classify(&scene.green, &scene.swir, w, h),
        }
    }
}

impl RasterProcessor for SnowDetector {
    fn name(&self) -> &str {
        self.classifier.calculator().name()
    }

    fn process(
        &self,
        source: &dyn RasterSource,
        sink: &dyn RasterSink,
        output_path: &Path,
    ) -> Result<SceneSummary> {
        let start = Instant::now();

        let scene = self.load(source)?;
        debug!("Loaded scene in {:.3}s", start.elapsed().as_secs_f64());

        let classified = self.classify(&scene);
        let summary = SceneSummary::new(self.name(), self.threshold(), &classified, &scene.geo);
        info!(
            "{}: {} snow / {} non-snow pixels ({:.2}% snow)",
            self.name(),
            summary.snow_pixels,
            summary.non_snow_pixels,
            summary.snow_fraction * 100.0
        );

        let LoadedScene { geo, .. } = scene;
        write_classification(sink, &geo, classified, output_path)?;

        debug!("Processed scene in {:.3}s", start.elapsed().as_secs_f64());
        Ok(summary)
    }
}
