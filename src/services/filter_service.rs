//! Runs the filter pipeline for HTTP and CLI callers.
//!
//! Each request carries the caller's whole session (input mode plus image
//! bytes). The service rebuilds a [`Session`] from it, renders once, and
//! keeps nothing between requests.

use std::time::Instant;

use tone_filters::{Adjustments, Filter, FilterError, FilterPipeline, InputMode, Rendered, Session};

use crate::error::ApiError;

/// One complete pipeline invocation.
#[derive(Debug, Clone)]
pub struct FilterRequest {
    pub mode: InputMode,
    pub image: Vec<u8>,
    pub filter: Filter,
    pub adjustments: Adjustments,
}

impl FilterRequest {
    pub fn pipeline(&self) -> FilterPipeline {
        FilterPipeline::new(self.filter).adjustments(self.adjustments)
    }

    /// Thread the request through the session state machine.
    pub fn session(&self) -> Result<Session, FilterError> {
        Session::new()
            .select_mode(self.mode)
            .receive(self.image.as_slice())
    }
}

/// Stateless pipeline runner.
#[derive(Debug, Clone, Default)]
pub struct FilterService;

impl FilterService {
    pub fn new() -> Self {
        Self
    }

    /// Render synchronously on the current thread.
    pub fn render_blocking(&self, request: &FilterRequest) -> Result<Rendered, FilterError> {
        let started = Instant::now();
        let rendered = request.session()?.render(&request.pipeline())?;

        tracing::info!(
            mode = %request.mode,
            filter = %request.filter,
            brightness = request.adjustments.brightness,
            scale = request.adjustments.scale,
            input_bytes = request.image.len(),
            width = rendered.processed.width(),
            height = rendered.processed.height(),
            png_bytes = rendered.png.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Image processed"
        );
        Ok(rendered)
    }

    /// Render on the blocking pool so decode/resize/encode never stall the runtime.
    pub async fn render(&self, request: FilterRequest) -> Result<Rendered, ApiError> {
        let service = self.clone();
        tokio::task::spawn_blocking(move || service.render_blocking(&request))
            .await
            .map_err(|e| ApiError::Internal(format!("Task error: {e}")))?
            .map_err(ApiError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tone_filters::encode_png;

    fn sample_png() -> Vec<u8> {
        let image = image::RgbImage::from_pixel(6, 4, image::Rgb([200, 50, 10]));
        encode_png(&image).unwrap()
    }

    fn request(filter: Filter) -> FilterRequest {
        FilterRequest {
            mode: InputMode::Upload,
            image: sample_png(),
            filter,
            adjustments: Adjustments::default(),
        }
    }

    #[test]
    fn test_render_blocking() {
        let rendered = FilterService::new()
            .render_blocking(&request(Filter::Paris))
            .unwrap();
        assert_eq!(rendered.processed.dimensions(), (6, 4));
        assert_eq!(rendered.file_name(), "paris.png");
    }

    #[test]
    fn test_session_is_loaded() {
        let session = request(Filter::Oslo).session().unwrap();
        assert_eq!(session.phase(), tone_filters::SessionPhase::ImageLoaded);
    }

    #[tokio::test]
    async fn test_render_async_maps_decode_errors() {
        let mut req = request(Filter::Tokyo);
        req.image = b"nope".to_vec();
        match FilterService::new().render(req).await {
            Err(ApiError::Filter(FilterError::Decode(_))) => {}
            other => panic!("expected decode error, got {other:?}"),
        }
    }
}
