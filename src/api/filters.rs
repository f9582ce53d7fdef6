use axum::{extract::State, response::Json};
use serde::Serialize;
use tone_filters::{Filter, BRIGHTNESS_RANGE, SCALE_RANGE, SLIDER_STEP};
use utoipa::ToSchema;

use crate::server::AppState;

/// Slider bounds
#[derive(Debug, Serialize, ToSchema)]
pub struct SliderInfo {
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub default: f32,
}

/// Available filters and adjustment ranges
#[derive(Debug, Serialize, ToSchema)]
pub struct FiltersResponse {
    /// Filter names in menu order
    pub filters: Vec<String>,
    /// Filter preselected in the menu
    pub default_filter: String,
    pub brightness: SliderInfo,
    pub scale: SliderInfo,
}

/// List filters and slider ranges
///
/// The page builds its controls from this response.
#[utoipa::path(
    get,
    path = "/api/filters",
    responses(
        (status = 200, description = "Filter menu and slider ranges", body = FiltersResponse),
    ),
    tag = "Filters"
)]
pub async fn handle_filters(State(state): State<AppState>) -> Json<FiltersResponse> {
    Json(FiltersResponse {
        filters: Filter::ALL.iter().map(|f| f.name().to_string()).collect(),
        default_filter: state.config.default_filter.name().to_string(),
        brightness: SliderInfo {
            min: *BRIGHTNESS_RANGE.start(),
            max: *BRIGHTNESS_RANGE.end(),
            step: SLIDER_STEP,
            default: 1.0,
        },
        scale: SliderInfo {
            min: *SCALE_RANGE.start(),
            max: *SCALE_RANGE.end(),
            step: SLIDER_STEP,
            default: 1.0,
        },
    })
}
