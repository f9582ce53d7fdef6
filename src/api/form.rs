//! Multipart form parsing shared by the process and download endpoints.

use axum::extract::Multipart;
use serde::Serialize;
use tone_filters::{Adjustments, Filter, InputMode};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::services::FilterRequest;

/// Form fields accepted by `/api/process` and `/api/download`
#[derive(Debug, Serialize, ToSchema)]
pub struct FilterForm {
    /// Input mode: "upload" or "camera"
    pub mode: String,
    /// JPEG or PNG bytes
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
    /// Filter name (default: configured default filter)
    pub filter: Option<String>,
    /// Brightness factor, 0.5 to 2.0 (default 1.0)
    pub brightness: Option<f32>,
    /// Scale factor, 0.5 to 1.5 (default 1.0)
    pub scale: Option<f32>,
}

/// Read a filter request from multipart form data.
///
/// Unknown fields are ignored. `mode` and `image` are required.
pub async fn read_filter_form(
    mut multipart: Multipart,
    default_filter: Filter,
) -> Result<FilterRequest, ApiError> {
    let mut mode = None;
    let mut image = None;
    let mut filter = default_filter;
    let mut adjustments = Adjustments::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        match name.as_str() {
            "image" => image = Some(field.bytes().await?.to_vec()),
            "mode" => mode = Some(field.text().await?.parse::<InputMode>()?),
            "filter" => filter = field.text().await?.parse()?,
            "brightness" => adjustments.brightness = parse_factor("brightness", &field.text().await?)?,
            "scale" => adjustments.scale = parse_factor("scale", &field.text().await?)?,
            other => tracing::debug!(field = other, "Ignoring unknown form field"),
        }
    }

    let mode = mode.ok_or(ApiError::MissingField("mode"))?;
    let image = image
        .filter(|bytes| !bytes.is_empty())
        .ok_or(ApiError::MissingField("image"))?;
    adjustments.validate()?;

    Ok(FilterRequest {
        mode,
        image,
        filter,
        adjustments,
    })
}

fn parse_factor(field: &'static str, text: &str) -> Result<f32, ApiError> {
    text.trim()
        .parse::<f32>()
        .map_err(|e| ApiError::InvalidField {
            field,
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_factor() {
        assert_eq!(parse_factor("scale", " 1.25 ").unwrap(), 1.25);
        assert!(matches!(
            parse_factor("scale", "big"),
            Err(ApiError::InvalidField { field: "scale", .. })
        ));
    }
}
