//! Brightness scaling.

use image::RgbImage;

use crate::color::saturate;

/// Multiply every channel by `factor`, truncating and clamping to 0..=255.
///
/// A factor of exactly 1.0 returns an identical copy.
pub fn brighten(image: &RgbImage, factor: f32) -> RgbImage {
    if factor == 1.0 {
        return image.clone();
    }
    let mut out = image.clone();
    for sub in out.iter_mut() {
        *sub = saturate(*sub as f32 * factor);
    }
    out
}
