//! Tests for embedded stylesheet serving.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    routing::get,
};
use tower::ServiceExt;

use super::static_assets::serve_static;

fn test_app() -> Router {
    Router::new().route("/static/{*path}", get(serve_static))
}

async fn status_of(uri: &str) -> (StatusCode, Option<String>) {
    let response = test_app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    (response.status(), content_type)
}

#[tokio::test]
async fn serves_stylesheet_as_css() {
    let (status, content_type) = status_of("/static/style.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/css"));
}

#[tokio::test]
async fn unknown_stylesheet_is_not_found() {
    let (status, _) = status_of("/static/missing.css").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_css_path_is_not_found() {
    let (status, _) = status_of("/static/script.js").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn path_traversal_is_not_found() {
    let (status, _) = status_of("/static/../Cargo.toml.css").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
