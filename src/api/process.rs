use axum::{
    body::Bytes,
    extract::{Multipart, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;
use tone_filters::{FilterError, Rendered};
use utoipa::ToSchema;

use crate::api::form::read_filter_form;
use crate::error::ApiError;
use crate::server::AppState;

/// A PNG image with its dimensions
#[derive(Debug, Serialize, ToSchema)]
pub struct ImagePayload {
    pub width: u32,
    pub height: u32,
    /// Base64-encoded PNG bytes
    pub png: String,
}

/// Response from the /api/process endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ProcessResponse {
    /// Filter that was applied
    pub filter: String,
    /// Suggested download file name
    pub file_name: String,
    /// Decoded input, unfiltered and unscaled
    pub original: ImagePayload,
    /// Filtered, brightened and scaled result
    pub processed: ImagePayload,
}

/// Error body returned by all API endpoints
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// HTTP status code
    pub status: u16,
    /// Error message
    pub error: String,
}

/// Run the filter pipeline and return both previews
///
/// The caller sends its whole session (mode and image) with every request;
/// nothing is stored server-side.
#[utoipa::path(
    post,
    path = "/api/process",
    request_body(content = crate::api::form::FilterForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Original and processed previews", body = ProcessResponse),
        (status = 400, description = "Missing field, bad value, or undecodable image", body = ErrorResponse),
        (status = 500, description = "Encoding failure", body = ErrorResponse),
    ),
    tag = "Filters"
)]
pub async fn handle_process(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ProcessResponse>, ApiError> {
    let request = read_filter_form(multipart, state.config.default_filter).await?;
    let rendered = state.filters.render(request).await?;

    let (rendered, original_png) = tokio::task::spawn_blocking(move || {
        let original_png = rendered.original_png()?;
        Ok::<_, FilterError>((rendered, original_png))
    })
    .await
    .map_err(|e| ApiError::Internal(format!("Task error: {e}")))??;

    Ok(Json(ProcessResponse {
        filter: rendered.filter.name().to_string(),
        file_name: rendered.file_name(),
        original: ImagePayload {
            width: rendered.original.width(),
            height: rendered.original.height(),
            png: STANDARD.encode(&original_png),
        },
        processed: payload(&rendered),
    }))
}

/// Run the filter pipeline and return the PNG as a download
#[utoipa::path(
    post,
    path = "/api/download",
    request_body(content = crate::api::form::FilterForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Processed PNG", content_type = "image/png"),
        (status = 400, description = "Missing field, bad value, or undecodable image", body = ErrorResponse),
        (status = 500, description = "Encoding failure", body = ErrorResponse),
    ),
    tag = "Filters"
)]
pub async fn handle_download(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    let request = read_filter_form(multipart, state.config.default_filter).await?;
    let rendered = state.filters.render(request).await?;

    let disposition = format!("attachment; filename=\"{}\"", rendered.file_name());
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (header::CONTENT_LENGTH, rendered.png.len().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        Bytes::from(rendered.png),
    )
        .into_response())
}

fn payload(rendered: &Rendered) -> ImagePayload {
    ImagePayload {
        width: rendered.processed.width(),
        height: rendered.processed.height(),
        png: STANDARD.encode(&rendered.png),
    }
}
