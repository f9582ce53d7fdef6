//! Per-pixel tone operations used by the filter recipes.

use image::{Rgb, RgbImage};

use crate::color::{luma, scale_channel};

/// Achromatic copy: luma replicated to all three channels.
pub fn grayscale(image: &RgbImage) -> RgbImage {
    let mut out = RgbImage::new(image.width(), image.height());
    for (dst, src) in out.pixels_mut().zip(image.pixels()) {
        let y = luma(src.0);
        *dst = Rgb([y, y, y]);
    }
    out
}

/// Multiply every channel by `gain`, saturating at 0 and 255.
pub fn apply_gain(image: &RgbImage, gain: f32) -> RgbImage {
    let mut out = image.clone();
    for sub in out.iter_mut() {
        *sub = scale_channel(*sub, gain);
    }
    out
}
