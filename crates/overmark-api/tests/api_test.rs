//! HTTP-level tests for the overlay service.
//!
//! Covers health, request validation, URL sanity checks, and the success
//! path against image fixtures served from an ephemeral local listener.

use std::sync::Arc;

use axum::routing::get;
use axum_test::TestServer;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use overmark_api::setup::routes::setup_routes;
use overmark_api::state::AppState;
use overmark_core::Config;
use overmark_processing::codec;
use serde_json::json;

fn test_config() -> Config {
    Config {
        server_port: 0,
        cors_origins: vec!["*".to_string()],
        environment: "test".to_string(),
        fetch_timeout_seconds: 5,
        max_body_bytes: 64 * 1024,
        default_position: "bottom-right".to_string(),
        default_size: "medium".to_string(),
        default_opacity: 0.9,
    }
}

fn test_server() -> TestServer {
    let config = test_config();
    let state = Arc::new(AppState::new(config.clone()).expect("state"));
    let router = setup_routes(&config, state).expect("router");
    TestServer::new(router).expect("test server")
}

fn png_fixture(width: u32, height: u32, pixel: Rgba<u8>) -> Vec<u8> {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, pixel));
    codec::encode(&img, ImageFormat::Png).expect("encode fixture")
}

/// Serve the two fixtures over a real listener so the handler's fetch path
/// runs against live HTTP. Returns the base URL of the listener.
async fn serve_fixtures(base: Vec<u8>, logo: Vec<u8>) -> String {
    let router = axum::Router::new()
        .route("/base.png", get(move || std::future::ready(base.clone())))
        .route("/logo.png", get(move || std::future::ready(logo.clone())));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fixture listener");
    let addr = listener.local_addr().expect("fixture listener addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve fixtures");
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn health_returns_service_identity() {
    let server = test_server();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "overmark");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn overlay_missing_logo_url_is_rejected_naming_both_fields() {
    let server = test_server();

    let response = server
        .post("/overlay-logo")
        .json(&json!({ "imageUrl": "https://example.com/base.png" }))
        .await;
    response.assert_status_bad_request();

    let body: serde_json::Value = response.json();
    let error = body["error"].as_str().expect("error message");
    assert!(error.contains("logoUrl"), "error was: {error}");
    assert!(error.contains("imageUrl"), "error was: {error}");
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn overlay_missing_both_urls_is_rejected() {
    let server = test_server();

    let response = server.post("/overlay-logo").json(&json!({})).await;
    response.assert_status_bad_request();

    let body: serde_json::Value = response.json();
    let error = body["error"].as_str().expect("error message");
    assert!(error.contains("imageUrl"));
    assert!(error.contains("logoUrl"));
}

#[tokio::test]
async fn overlay_blank_urls_count_as_missing() {
    let server = test_server();

    let response = server
        .post("/overlay-logo")
        .json(&json!({ "imageUrl": "  ", "logoUrl": "" }))
        .await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn overlay_malformed_body_is_a_bad_request() {
    let server = test_server();

    let response = server.post("/overlay-logo").text("not json at all").await;
    response.assert_status_bad_request();

    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn overlay_success_returns_base64_image_with_base_dimensions() {
    let fixtures_url = serve_fixtures(
        png_fixture(64, 48, Rgba([255, 255, 255, 255])),
        png_fixture(16, 16, Rgba([0, 0, 0, 255])),
    )
    .await;
    let server = test_server();

    let response = server
        .post("/overlay-logo")
        .json(&json!({
            "imageUrl": format!("{fixtures_url}/base.png"),
            "logoUrl": format!("{fixtures_url}/logo.png"),
        }))
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["mimeType"], "image/png");
    // The overlay never changes the base image's dimensions
    assert_eq!(body["size"]["width"], 64);
    assert_eq!(body["size"]["height"], 48);

    let bytes = BASE64
        .decode(body["image"].as_str().expect("image field"))
        .expect("image field is valid base64");
    let decoded = codec::decode(&bytes).expect("composite decodes");
    assert_eq!(decoded.format, ImageFormat::Png);
    assert_eq!((decoded.width, decoded.height), (64, 48));
}

#[tokio::test]
async fn overlay_unparseable_url_is_rejected_without_fetching() {
    let server = test_server();

    let response = server
        .post("/overlay-logo")
        .json(&json!({ "imageUrl": "not a url", "logoUrl": "also not a url" }))
        .await;
    response.assert_status_bad_request();

    let body: serde_json::Value = response.json();
    let error = body["error"].as_str().expect("error message");
    assert!(error.contains("Invalid URL format"), "error was: {error}");
}
