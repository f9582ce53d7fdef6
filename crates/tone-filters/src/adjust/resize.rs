//! Uniform scaling.
//!
//! Resampling uses the `image` crate's Catmull-Rom (bicubic) filter. When
//! the target size equals the source size the buffer is copied verbatim, so
//! a scale of 1.0 is bit-exact.

use image::imageops::{self, FilterType};
use image::RgbImage;

/// Target dimensions for a uniform scale, each rounded half up and at least 1.
///
/// The factor is snapped to whole hundredths first and the product is
/// computed in integers, so slider values like 1.05 round as their decimal
/// value rather than as the nearest `f32`.
pub fn scaled_dimensions(width: u32, height: u32, scale: f32) -> (u32, u32) {
    let percent = (scale as f64 * 100.0).round().max(0.0) as u64;
    let scale_axis = |v: u32| ((v as u64 * percent + 50) / 100).clamp(1, u32::MAX as u64) as u32;
    (scale_axis(width), scale_axis(height))
}

/// Resize by `scale` in both axes.
pub fn resize(image: &RgbImage, scale: f32) -> RgbImage {
    let (width, height) = image.dimensions();
    let (new_width, new_height) = scaled_dimensions(width, height, scale);

    if (new_width, new_height) == (width, height) {
        return image.clone();
    }

    tracing::trace!(width, height, new_width, new_height, "Resizing");
    imageops::resize(image, new_width, new_height, FilterType::CatmullRom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn solid_image(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
        RgbImage::from_pixel(width, height, Rgb(color))
    }

    #[test]
    fn test_resize_noop_same_dimensions() {
        let input = RgbImage::from_fn(100, 100, |x, y| Rgb([x as u8, y as u8, 128]));
        let output = resize(&input, 1.0);

        assert_eq!(output.dimensions(), (100, 100));
        assert_eq!(output, input, "Pixels should be unchanged for no-op resize");
    }

    #[test]
    fn test_half_scale_rounds_dimensions() {
        assert_eq!(scaled_dimensions(9, 5, 0.5), (5, 3));
        assert_eq!(scaled_dimensions(640, 480, 0.5), (320, 240));
        assert_eq!(scaled_dimensions(10, 10, 1.5), (15, 15));
    }

    #[test]
    fn test_slider_steps_round_as_decimals() {
        // Every 0.05 step from 0.50 to 1.50, as exact hundredths
        for step in 0..=20u64 {
            let percent = 50 + step * 5;
            let scale = percent as f32 / 100.0;
            for width in [10u32, 30, 640, 1000, 1921] {
                let expected = ((width as u64 * percent + 50) / 100) as u32;
                assert_eq!(
                    scaled_dimensions(width, width, scale),
                    (expected, expected),
                    "width {width} at scale {scale}"
                );
            }
        }
    }

    #[test]
    fn test_half_values_round_up() {
        assert_eq!(scaled_dimensions(10, 10, 1.05), (11, 11));
        assert_eq!(scaled_dimensions(10, 10, 0.65), (7, 7));
        assert_eq!(scaled_dimensions(10, 10, 0.95), (10, 10));
        assert_eq!(scaled_dimensions(10, 10, 1.15), (12, 12));
    }

    #[test]
    fn test_dimensions_never_zero() {
        assert_eq!(scaled_dimensions(1, 1, 0.5), (1, 1));
    }

    #[test]
    fn test_resize_changes_size_only() {
        let input = solid_image(40, 20, [12, 200, 99]);
        let output = resize(&input, 1.5);
        assert_eq!(output.dimensions(), (60, 30));
        assert!(output.pixels().all(|p| p.0 == [12, 200, 99]));
    }
}
