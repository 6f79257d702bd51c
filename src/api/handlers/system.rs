//! System health handlers.

use axum::http::StatusCode;
use tracing::instrument;

/// Health check endpoint
///
/// Always answers 200 with an empty body while the server is up.
#[utoipa::path(
    get,
    path = "/healthz",
    tag = "system",
    responses(
        (status = 200, description = "Server is up")
    )
)]
#[instrument]
pub async fn health() -> StatusCode {
    StatusCode::OK
}
