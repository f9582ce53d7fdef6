//! FilterPipeline builder -- the primary entry point for the crate.
//!
//! [`FilterPipeline`] composes filter, brightness and scale behind a fluent
//! builder. Runs take `&self`, so one pipeline can process many images.

use image::RgbImage;

use crate::adjust::Adjustments;
use crate::codec::{decode, encode_png};
use crate::error::FilterError;
use crate::filter::Filter;

/// Filter plus post-adjustments, ready to run.
///
/// # Example
///
/// ```
/// use image::{Rgb, RgbImage};
/// use tone_filters::{Filter, FilterPipeline};
///
/// let pipeline = FilterPipeline::new(Filter::Tokyo).brightness(1.2).scale(0.5);
///
/// let image = RgbImage::from_pixel(8, 6, Rgb([90, 40, 200]));
/// let out = pipeline.run(&image).unwrap();
///
/// assert_eq!(out.dimensions(), (4, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FilterPipeline {
    filter: Filter,
    adjustments: Adjustments,
}

/// Output of one full pipeline run.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub filter: Filter,
    /// Decoded input, full resolution
    pub original: RgbImage,
    /// Filtered, brightened and scaled buffer
    pub processed: RgbImage,
    /// `processed` encoded as PNG
    pub png: Vec<u8>,
}

impl FilterPipeline {
    /// Pipeline with neutral brightness and scale.
    pub fn new(filter: Filter) -> Self {
        Self {
            filter,
            adjustments: Adjustments::default(),
        }
    }

    #[inline]
    pub fn brightness(mut self, factor: f32) -> Self {
        self.adjustments.brightness = factor;
        self
    }

    #[inline]
    pub fn scale(mut self, factor: f32) -> Self {
        self.adjustments.scale = factor;
        self
    }

    #[inline]
    pub fn adjustments(mut self, adjustments: Adjustments) -> Self {
        self.adjustments = adjustments;
        self
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn adjustments_value(&self) -> Adjustments {
        self.adjustments
    }

    /// Filter, then brightness, then resize.
    ///
    /// Fails only if brightness or scale is out of range.
    pub fn run(&self, image: &RgbImage) -> Result<RgbImage, FilterError> {
        self.adjustments.validate()?;
        Ok(self.run_validated(image))
    }

    /// Decode, run, and encode in one go.
    ///
    /// Adjustments are checked before the input is decoded.
    pub fn process(&self, bytes: &[u8]) -> Result<Rendered, FilterError> {
        self.adjustments.validate()?;
        let original = decode(bytes)?;
        let processed = self.run_validated(&original);
        let png = encode_png(&processed)?;
        Ok(Rendered {
            filter: self.filter,
            original,
            processed,
            png,
        })
    }

    fn run_validated(&self, image: &RgbImage) -> RgbImage {
        let filtered = self.filter.apply(image);
        let adjusted = self.adjustments.apply(&filtered);
        tracing::debug!(
            filter = %self.filter,
            brightness = self.adjustments.brightness,
            scale = self.adjustments.scale,
            width = adjusted.width(),
            height = adjusted.height(),
            "Filter pipeline complete"
        );
        adjusted
    }
}

impl Rendered {
    /// Download file name for the processed image.
    pub fn file_name(&self) -> String {
        self.filter.file_name()
    }

    /// The unfiltered input re-encoded as PNG, for previews.
    pub fn original_png(&self) -> Result<Vec<u8>, FilterError> {
        encode_png(&self.original)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn gradient(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 255 / width) as u8, (y * 255 / height) as u8, 64])
        })
    }

    #[test]
    fn test_builder_defaults() {
        let pipeline = FilterPipeline::new(Filter::Paris);
        assert_eq!(pipeline.filter(), Filter::Paris);
        assert!(pipeline.adjustments_value().is_identity());
    }

    #[test]
    fn test_builder_is_reusable() {
        let pipeline = FilterPipeline::new(Filter::Oslo).scale(0.5);
        let a = pipeline.run(&gradient(10, 10)).unwrap();
        let b = pipeline.run(&gradient(20, 8)).unwrap();
        assert_eq!(a.dimensions(), (5, 5));
        assert_eq!(b.dimensions(), (10, 4));
    }

    #[test]
    fn test_run_rejects_bad_adjustments() {
        let pipeline = FilterPipeline::new(Filter::London).brightness(5.0);
        assert!(matches!(
            pipeline.run(&gradient(2, 2)),
            Err(FilterError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_process_produces_png_of_processed() {
        let input = encode_png(&gradient(12, 9)).unwrap();
        let rendered = FilterPipeline::new(Filter::Tokyo)
            .scale(1.5)
            .process(&input)
            .unwrap();

        assert_eq!(rendered.original.dimensions(), (12, 9));
        assert_eq!(rendered.processed.dimensions(), (18, 14));
        assert_eq!(decode(&rendered.png).unwrap(), rendered.processed);
        assert_eq!(rendered.file_name(), "tokyo.png");
    }

    #[test]
    fn test_process_checks_adjustments_before_decoding() {
        let result = FilterPipeline::new(Filter::Oslo)
            .scale(0.1)
            .process(b"not an image");
        assert!(matches!(
            result,
            Err(FilterError::OutOfRange { name: "scale", .. })
        ));
    }

    #[test]
    fn test_process_rejects_garbage() {
        let result = FilterPipeline::default().process(b"GIF89a....");
        assert!(matches!(result, Err(FilterError::Decode(_))));
    }

    #[test]
    fn test_original_png_is_unfiltered() {
        let image = gradient(6, 6);
        let rendered = FilterPipeline::new(Filter::Paris)
            .process(&encode_png(&image).unwrap())
            .unwrap();
        assert_eq!(decode(&rendered.original_png().unwrap()).unwrap(), image);
    }
}
