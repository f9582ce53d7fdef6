//! Integration tests for the /api/download endpoint.

mod common;

use axum::http::StatusCode;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use common::{
    assert_json_error, assert_png,
    fixtures::{self, MultipartForm},
    TestApp,
};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_download_returns_png_attachment() {
    let app = TestApp::new();
    let image = fixtures::png_bytes(&fixtures::gradient(12, 8));
    let form = MultipartForm::filter_request("upload", image, "London", 1.0, 1.0);

    let response = app.post_form("/api/download", &form).await;

    assert_png(&response);
    assert_eq!(
        response.header("content-disposition"),
        Some("attachment; filename=\"london.png\"")
    );
    assert_eq!(
        response.header("content-length"),
        Some(response.body.len().to_string().as_str())
    );
    assert_eq!(fixtures::decode_png(&response.body).dimensions(), (12, 8));
}

#[tokio::test]
async fn test_download_file_name_follows_filter() {
    let app = TestApp::new();
    let image = fixtures::png_bytes(&fixtures::solid(4, 4, [30, 60, 90]));

    for (filter, file_name) in [
        ("Grayscale", "grayscale.png"),
        ("Paris", "paris.png"),
        ("Tokyo", "tokyo.png"),
        ("Oslo", "oslo.png"),
    ] {
        let form = MultipartForm::filter_request("camera", image.clone(), filter, 1.0, 1.0);
        let response = app.post_form("/api/download", &form).await;

        assert_png(&response);
        let expected = format!("attachment; filename=\"{file_name}\"");
        assert_eq!(response.header("content-disposition"), Some(expected.as_str()));
    }
}

#[tokio::test]
async fn test_download_applies_scale() {
    let app = TestApp::new();
    let image = fixtures::jpeg_bytes(&fixtures::gradient(20, 10));
    let form = MultipartForm::filter_request("upload", image, "Grayscale", 0.5, 0.5);

    let response = app.post_form("/api/download", &form).await;

    assert_png(&response);
    let output = fixtures::decode_png(&response.body);
    assert_eq!(output.dimensions(), (10, 5));
    for pixel in output.pixels() {
        assert_eq!(pixel.0[0], pixel.0[1]);
        assert_eq!(pixel.0[1], pixel.0[2]);
    }
}

#[tokio::test]
async fn test_download_matches_process_output() {
    let app = TestApp::new();
    let image = fixtures::png_bytes(&fixtures::gradient(9, 7));
    let form = MultipartForm::filter_request("upload", image, "Paris", 1.25, 1.2);

    let download = app.post_form("/api/download", &form).await;
    let process: serde_json::Value = app.post_form("/api/process", &form).await.json();

    assert_png(&download);
    let preview = STANDARD
        .decode(process["processed"]["png"].as_str().unwrap())
        .unwrap();
    assert_eq!(preview, download.body);
}

#[tokio::test]
async fn test_download_without_image_is_rejected() {
    let app = TestApp::new();
    let form = MultipartForm::new().text("mode", "upload");

    let response = app.post_form("/api/download", &form).await;

    assert_json_error(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_download_truncated_png_is_rejected() {
    let app = TestApp::new();
    let mut image = fixtures::png_bytes(&fixtures::gradient(32, 32));
    image.truncate(40);
    let form = MultipartForm::filter_request("upload", image, "Oslo", 1.0, 1.0);

    let response = app.post_form("/api/download", &form).await;

    assert_json_error(&response, StatusCode::BAD_REQUEST);
}
