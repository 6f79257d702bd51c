//! Embedded stylesheets served under `/static/`.
//!
//! In release mode: Assets are embedded into the binary at compile time.
//! In debug mode: rust-embed reads from filesystem (assets/static/) at runtime.

use axum::{
    body::Body,
    extract::Path,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;
use tracing::debug;

#[derive(RustEmbed)]
#[folder = "assets/static/"]
#[include = "*.css"]
struct StaticAssets;

/// Serve a stylesheet by path. Anything that is not a known `.css` file is a 404.
pub async fn serve_static(Path(path): Path<String>) -> Response {
    if !path.ends_with(".css") {
        return StatusCode::NOT_FOUND.into_response();
    }

    match StaticAssets::get(&path) {
        Some(content) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            (
                [(header::CONTENT_TYPE, mime.as_ref().to_string())],
                Body::from(content.data),
            )
                .into_response()
        }
        None => {
            debug!(path = %path, "static asset not found");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
