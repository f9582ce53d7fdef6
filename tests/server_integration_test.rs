//! Server integration tests that test the actual server behavior.
//!
//! These tests start a real TCP server and speak raw HTTP/1.1 to it, so
//! response framing is exercised exactly as a browser would see it.

mod common;

use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use common::fixtures::{self, MultipartForm};
use filterbooth::assets::AssetLoader;
use filterbooth::models::AppConfig;
use filterbooth::server::{build_router, create_app_state_with_config};

/// Start a test server on an available port and return the port number.
async fn start_test_server(config: AppConfig) -> u16 {
    let asset_loader = Arc::new(AssetLoader::new(None, None));
    let state = create_app_state_with_config(asset_loader, Arc::new(config));
    let app = build_router(state);

    // Bind to port 0 to get an available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    // Give the server a moment to start
    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

    port
}

/// Send one request with `Connection: close` and read the whole response.
async fn roundtrip(port: u16, head: &str, body: &[u8]) -> (String, Vec<u8>) {
    let mut stream = TcpStream::connect(format!("127.0.0.1:{}", port))
        .await
        .expect("Failed to connect");

    stream
        .write_all(head.as_bytes())
        .await
        .expect("Failed to write request head");
    stream
        .write_all(body)
        .await
        .expect("Failed to write request body");

    let mut response = Vec::new();
    tokio::time::timeout(
        tokio::time::Duration::from_secs(5),
        stream.read_to_end(&mut response),
    )
    .await
    .expect("Timed out waiting for response")
    .expect("Failed to read response");

    let split = response
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("Response should have a header terminator");
    let headers = String::from_utf8_lossy(&response[..split]).to_lowercase();
    (headers, response[split + 4..].to_vec())
}

fn post_head(path: &str, form: &MultipartForm, body_len: usize) -> String {
    format!(
        "POST {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\
         Content-Type: {}\r\nContent-Length: {body_len}\r\n\r\n",
        form.content_type()
    )
}

#[tokio::test]
async fn test_health_over_tcp() {
    let port = start_test_server(AppConfig::default()).await;

    let (headers, body) = roundtrip(
        port,
        "GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        b"",
    )
    .await;

    assert!(headers.starts_with("http/1.1 200"), "Got: {headers}");
    assert!(headers.contains("cache-control: no-store"));
    assert_eq!(body, b"OK");
}

#[tokio::test]
async fn test_download_over_tcp() {
    let port = start_test_server(AppConfig::default()).await;
    let image = fixtures::png_bytes(&fixtures::gradient(24, 16));
    let form = MultipartForm::filter_request("upload", image, "Tokyo", 1.2, 0.5);
    let body = form.body();

    let (headers, png) = roundtrip(port, &post_head("/api/download", &form, body.len()), &body).await;

    assert!(headers.starts_with("http/1.1 200"), "Got: {headers}");
    assert!(headers.contains("content-type: image/png"));
    assert!(headers.contains("content-disposition: attachment; filename=\"tokyo.png\""));
    assert!(headers.contains(&format!("content-length: {}", png.len())));
    assert_eq!(fixtures::decode_png(&png).dimensions(), (12, 8));
}
