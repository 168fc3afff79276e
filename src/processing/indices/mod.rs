// src/processing/indices/mod.rs
pub mod ndsi;

pub use ndsi::NDSI;

/// Per-pixel spectral index over two bands.
pub trait IndexCalculator: Send + Sync {
    /// Index value for one pixel given its two band samples.
    fn compute(&self, a: f32, b: f32) -> f32;

    /// 1-based source band indices feeding `a` and `b`.
    fn bands(&self) -> (usize, usize);

    fn name(&self) -> &str;
}
