//! The interactive page and its static assets.

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Response},
};

use crate::error::ApiError;
use crate::server::AppState;

/// Serve the page with the configured title filled in
pub async fn handle_page(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let template = state.assets.read_web_string("index.html").map_err(|e| {
        tracing::error!(%e, "Failed to load index.html");
        ApiError::NotFound
    })?;
    Ok(Html(render_page(&template, &state.config.title)))
}

/// Serve the page JavaScript
pub async fn handle_app_js(State(state): State<AppState>) -> Result<Response, ApiError> {
    serve_asset(&state, "app.js", "application/javascript")
}

/// Serve the page CSS
pub async fn handle_app_css(State(state): State<AppState>) -> Result<Response, ApiError> {
    serve_asset(&state, "app.css", "text/css")
}

fn serve_asset(
    state: &AppState,
    name: &str,
    content_type: &'static str,
) -> Result<Response, ApiError> {
    let body = state
        .assets
        .read_web(name)
        .map_err(|_| ApiError::NotFound)?
        .into_owned();
    Ok(([(header::CONTENT_TYPE, content_type)], body).into_response())
}

/// Substitute `{{title}}` with the HTML-escaped title.
pub fn render_page(template: &str, title: &str) -> String {
    template.replace("{{title}}", &escape_html(title))
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
