// src/processing/classifier.rs
use itertools::izip;
use rayon::prelude::*;

use super::indices::{IndexCalculator, NDSI};

/// Channel value marking the class a pixel belongs to.
pub const MASK_ON: u8 = 255;
pub const MASK_OFF: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelClass {
    Snow,
    NonSnow,
}

impl PixelClass {
    /// (red, green, blue) encoding: red marks non-snow, blue marks snow, green is always off.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            PixelClass::Snow => (MASK_OFF, MASK_OFF, MASK_ON),
            PixelClass::NonSnow => (MASK_ON, MASK_OFF, MASK_OFF),
        }
    }
}

/// Three row-major byte channels of a classified scene.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedScene {
    pub width: usize,
    pub height: usize,
    pub red: Vec<u8>,
    pub green: Vec<u8>,
    pub blue: Vec<u8>,
    pub snow_pixels: usize,
}

impl ClassifiedScene {
    /// Every pixel starts as non-snow, so pixels without a sample pair keep a valid encoding.
    fn non_snow(width: usize, height: usize) -> Self {
        let len = width * height;
        Self {
            width,
            height,
            red: vec![MASK_ON; len],
            green: vec![MASK_OFF; len],
            blue: vec![MASK_OFF; len],
            snow_pixels: 0,
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    pub fn non_snow_pixels(&self) -> usize {
        self.pixel_count() - self.snow_pixels
    }

    pub fn snow_fraction(&self) -> f64 {
        match self.pixel_count() {
            0 => 0.0,
            n => self.snow_pixels as f64 / n as f64,
        }
    }

    pub fn class_at(&self, i: usize) -> PixelClass {
        if self.blue[i] == MASK_ON {
            PixelClass::Snow
        } else {
            PixelClass::NonSnow
        }
    }
}

/// Binary classifier: a pixel is snow when its index is strictly above `threshold`.
pub struct ThresholdClassifier<I: IndexCalculator> {
    calculator: I,
    threshold: f32,
}

impl<I: IndexCalculator> ThresholdClassifier<I> {
    pub fn new(calculator: I, threshold: f32) -> Self {
        Self {
            calculator,
            threshold,
        }
    }

    pub fn calculator(&self) -> &I {
        &self.calculator
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    #[inline]
    pub fn classify_pixel(&self, a: f32, b: f32) -> PixelClass {
        if self.calculator.compute(a, b) > self.threshold {
            PixelClass::Snow
        } else {
            PixelClass::NonSnow
        }
    }

    /// Classify on the calling thread.
    ///
    /// `a` and `b` are expected to hold `width * height` samples. Pixels past the
    /// shorter input are reported as non-snow; samples past `width * height` are ignored.
    pub fn classify(&self, a: &[f32], b: &[f32], width: usize, height: usize) -> ClassifiedScene {
        let mut scene = ClassifiedScene::non_snow(width, height);
        let mut snow = 0;
        for (red, blue, &a_val, &b_val) in izip!(&mut scene.red, &mut scene.blue, a, b) {
            let class = self.classify_pixel(a_val, b_val);
            let (r, _, bl) = class.rgb();
            *red = r;
            *blue = bl;
            if class == PixelClass::Snow {
                snow += 1;
            }
        }
        scene.snow_pixels = snow;
        scene
    }

    /// Classify on the current rayon pool. Output is identical to [`Self::classify`].
    pub fn classify_parallel(
        &self,
        a: &[f32],
        b: &[f32],
        width: usize,
        height: usize,
    ) -> ClassifiedScene {
        let mut scene = ClassifiedScene::non_snow(width, height);
        scene.snow_pixels = scene
            .red
            .par_iter_mut()
            .zip(scene.blue.par_iter_mut())
            .zip(a.par_iter().zip(b.par_iter()))
            .map(|((red, blue), (&a_val, &b_val))| {
                let class = self.classify_pixel(a_val, b_val);
                let (r, _, bl) = class.rgb();
                *red = r;
                *blue = bl;
                usize::from(class == PixelClass::Snow)
            })
            .sum();
        scene
    }
}

/// Classify a green/SWIR band pair with NDSI at the given threshold.
///
/// See [`ThresholdClassifier::classify`] for how mismatched lengths are handled.
pub fn classify(
    green: &[f32],
    swir: &[f32],
    width: usize,
    height: usize,
    threshold: f32,
) -> ClassifiedScene {
    ThresholdClassifier::new(NDSI::default(), threshold).classify(green, swir, width, height)
}
