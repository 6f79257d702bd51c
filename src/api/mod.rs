mod handlers;
mod routes;
mod state;
mod static_assets;
mod view;

#[cfg(test)]
mod static_assets_test;

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use miette::Diagnostic;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::{Database, DbError};

pub use routes::{REQUEST_ID_HEADER, create_router};
pub use state::AppState;
pub use view::View;

/// HTTP server errors.
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Failed to bind {addr}: {source}")]
    #[diagnostic(
        code(notebook::api::bind),
        help("Is another process already listening on this port?")
    )]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(notebook::api::serve))]
    Serve(#[source] std::io::Error),

    #[error("Template '{name}' is missing or not valid UTF-8")]
    #[diagnostic(code(notebook::api::template))]
    Template { name: String },

    #[error("Database error: {0}")]
    #[diagnostic(code(notebook::api::database))]
    Database(#[from] DbError),
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 8080,
        }
    }
}

impl Config {
    /// Socket address string, e.g. `0.0.0.0:8080`.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Initialize tracing subscriber with env filter
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "notebook=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Resolve on Ctrl-C so the server can drain and the database can close.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Run the HTTP server until Ctrl-C, then close the database.
pub async fn run<D: Database>(config: Config, db: D) -> Result<(), ApiError> {
    init_tracing();

    let db = Arc::new(db);
    let state = AppState::new(Arc::clone(&db), View::load()?);
    let app = create_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ApiError::Bind {
            addr: addr.clone(),
            source,
        })?;
    info!("Server listening on http://{}", addr);

    let served = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await;

    finish(db.as_ref(), served).await
}

/// Close the database, then report the serve outcome. A serve error wins over a close error.
pub(crate) async fn finish<D: Database>(
    db: &D,
    served: std::io::Result<()>,
) -> Result<(), ApiError> {
    let closed = db.close().await;
    served.map_err(ApiError::Serve)?;
    closed?;
    info!("Database closed");
    Ok(())
}
