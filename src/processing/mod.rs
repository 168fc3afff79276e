// src/processing/mod.rs
pub mod classifier;
pub mod indices;
pub mod processor;

// Re-export main components
pub use classifier::{classify, ClassifiedScene, PixelClass, ThresholdClassifier};
pub use processor::{RasterProcessor, SnowDetector};
