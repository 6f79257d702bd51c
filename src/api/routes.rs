//! HTTP route configuration.

use std::net::SocketAddr;

use axum::Router;
use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::Request;
use axum::http::header::USER_AGENT;
use axum::routing::get;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::info_span;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers;
use super::state::AppState;
use super::static_assets::serve_static;
use crate::db::Database;

/// Header carrying the per-request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Notebook",
        version = "0.1.0",
        description = "Server-rendered note pages",
        license(name = "GPL-2.0")
    ),
    paths(handlers::health, handlers::notes),
    tags(
        (name = "system", description = "System health endpoints"),
        (name = "notes", description = "Note pages")
    )
)]
pub struct ApiDoc;

/// Create the router with request-id, tracing and OpenAPI documentation.
pub fn create_router<D: Database>(state: AppState<D>) -> Router {
    let api = ApiDoc::openapi();

    // System routes (non-generic)
    let system_routes = Router::new()
        .route("/healthz", get(handlers::health))
        .route("/static/{*path}", get(serve_static));

    // Note routes (generic over Database)
    let note_routes = routes!(D => {
        get "/notes" => handlers::notes,
    });

    // Layers run outermost-last: the id is set before the trace span opens
    system_routes
        .merge(note_routes)
        .merge(Scalar::with_url("/docs", api))
        .with_state(state)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                info_span!(
                    "http",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %header_value(request, REQUEST_ID_HEADER),
                    remote_addr = %remote_addr(request),
                    user_agent = %header_value(request, USER_AGENT.as_str()),
                )
            }),
        )
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

pub(crate) fn header_value<'r>(request: &'r Request<Body>, name: &str) -> &'r str {
    request
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown")
}

/// Peer address, present when served with connect info.
pub(crate) fn remote_addr(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
