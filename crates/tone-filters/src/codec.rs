//! Decode input containers and encode PNG output.

use std::io::Cursor;

use image::{ImageFormat, RgbImage};

use crate::error::FilterError;

/// Accepted input containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Jpeg,
    Png,
}

impl InputFormat {
    /// Identify the container from its magic bytes.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        match image::guess_format(bytes).ok()? {
            ImageFormat::Jpeg => Some(InputFormat::Jpeg),
            ImageFormat::Png => Some(InputFormat::Png),
            _ => None,
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            InputFormat::Jpeg => "image/jpeg",
            InputFormat::Png => "image/png",
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            InputFormat::Jpeg => ImageFormat::Jpeg,
            InputFormat::Png => ImageFormat::Png,
        }
    }
}

/// Decode JPEG or PNG bytes into an RGB buffer.
///
/// Alpha is dropped and grayscale is expanded to three channels.
pub fn decode(bytes: &[u8]) -> Result<RgbImage, FilterError> {
    let format = InputFormat::sniff(bytes)
        .ok_or_else(|| FilterError::Decode("not a JPEG or PNG image".to_string()))?;
    let image = image::load_from_memory_with_format(bytes, format.image_format())?;
    tracing::debug!(
        format = format.mime_type(),
        width = image.width(),
        height = image.height(),
        "Decoded input image"
    );
    Ok(image.to_rgb8())
}

/// Encode an RGB buffer as an 8-bit PNG.
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>, FilterError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Default);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(image.as_raw())?;
    }
    Ok(buf.into_inner())
}
