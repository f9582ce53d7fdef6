//! Post-filter adjustments: brightness, then uniform scaling.

mod brightness;
mod resize;

use std::ops::RangeInclusive;

use image::RgbImage;
use serde::{Deserialize, Serialize};

use crate::error::FilterError;

pub use brightness::brighten;
pub use resize::{resize, scaled_dimensions};

/// Allowed brightness factors.
pub const BRIGHTNESS_RANGE: RangeInclusive<f32> = 0.5..=2.0;
/// Allowed scale factors.
pub const SCALE_RANGE: RangeInclusive<f32> = 0.5..=1.5;
/// Slider increment for both controls.
pub const SLIDER_STEP: f32 = 0.05;

/// Brightness and scale applied after the filter.
///
/// The default (1.0, 1.0) leaves the filtered buffer untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Adjustments {
    pub brightness: f32,
    pub scale: f32,
}

impl Default for Adjustments {
    fn default() -> Self {
        Self {
            brightness: 1.0,
            scale: 1.0,
        }
    }
}

impl Adjustments {
    /// Build validated adjustments.
    pub fn new(brightness: f32, scale: f32) -> Result<Self, FilterError> {
        let adjustments = Self { brightness, scale };
        adjustments.validate()?;
        Ok(adjustments)
    }

    /// Check both factors against their ranges.
    pub fn validate(&self) -> Result<(), FilterError> {
        check_range("brightness", self.brightness, &BRIGHTNESS_RANGE)?;
        check_range("scale", self.scale, &SCALE_RANGE)
    }

    /// Brightness first, then resize.
    pub fn apply(&self, image: &RgbImage) -> RgbImage {
        let brightened = brighten(image, self.brightness);
        resize(&brightened, self.scale)
    }

    pub fn is_identity(&self) -> bool {
        self.brightness == 1.0 && self.scale == 1.0
    }
}

fn check_range(
    name: &'static str,
    value: f32,
    range: &RangeInclusive<f32>,
) -> Result<(), FilterError> {
    if value.is_finite() && range.contains(&value) {
        Ok(())
    } else {
        Err(FilterError::OutOfRange {
            name,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_default_is_identity() {
        let adj = Adjustments::default();
        assert!(adj.is_identity());
        assert!(adj.validate().is_ok());
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        assert!(Adjustments::new(0.5, 0.5).is_ok());
        assert!(Adjustments::new(2.0, 1.5).is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_brightness() {
        match Adjustments::new(2.5, 1.0) {
            Err(FilterError::OutOfRange { name, max, .. }) => {
                assert_eq!(name, "brightness");
                assert_eq!(max, 2.0);
            }
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_out_of_range_scale() {
        assert!(matches!(
            Adjustments::new(1.0, 0.25),
            Err(FilterError::OutOfRange { name: "scale", .. })
        ));
    }

    #[test]
    fn test_rejects_nan() {
        assert!(Adjustments::new(f32::NAN, 1.0).is_err());
    }

    #[test]
    fn test_apply_identity_is_exact_copy() {
        let image = RgbImage::from_fn(6, 4, |x, y| Rgb([x as u8 * 40, y as u8 * 60, 17]));
        assert_eq!(Adjustments::default().apply(&image), image);
    }

    #[test]
    fn test_apply_brightens_then_scales() {
        let image = RgbImage::from_pixel(10, 10, Rgb([100, 100, 100]));
        let out = Adjustments::new(2.0, 0.5).unwrap().apply(&image);
        assert_eq!(out.dimensions(), (5, 5));
        // Uniform input stays uniform through resampling
        assert!(out.pixels().all(|p| p.0 == [200, 200, 200]));
    }
}
