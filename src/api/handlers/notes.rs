//! Note page handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};
use serde::Deserialize;
use tracing::{error, instrument};
use utoipa::IntoParams;

use crate::api::AppState;
use crate::db::{Database, DbError, NoteRepository};

#[derive(Debug, Deserialize, IntoParams)]
pub struct NotesQuery {
    /// Show a single note instead of the listing
    #[param(example = "0b6f3c1e-8a47-4d6f-9a0e-3c2d1b5e7f90")]
    pub note_id: Option<String>,
}

/// Map a storage error to a status code and a plain-text body.
fn error_response(e: DbError) -> (StatusCode, String) {
    let status = match e {
        DbError::NotFound { .. } => StatusCode::NOT_FOUND,
        DbError::Constraint { .. } => StatusCode::CONFLICT,
        DbError::Connection { .. } | DbError::Storage { .. } => {
            error!(error = %e, "storage failure");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, format!("error: {}", e))
}

/// Notes page
///
/// Lists every note, or shows one note when `note_id` is given.
#[utoipa::path(
    get,
    path = "/notes",
    tag = "notes",
    params(NotesQuery),
    responses(
        (status = 200, description = "Rendered note or listing", body = String, content_type = "text/html"),
        (status = 404, description = "Note not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Storage failure", body = String, content_type = "text/plain")
    )
)]
#[instrument(skip(state))]
pub async fn notes<D: Database>(
    State(state): State<AppState<D>>,
    Query(query): Query<NotesQuery>,
) -> Result<Html<String>, (StatusCode, String)> {
    // An empty note_id is the same as none
    match query.note_id.as_deref().filter(|id| !id.is_empty()) {
        Some(id) => {
            let note = state.db().notes().get(id).await.map_err(error_response)?;
            Ok(Html(state.view().note(&note)))
        }
        None => {
            let notes = state.db().notes().list().await.map_err(error_response)?;
            Ok(Html(state.view().notes(&notes)))
        }
    }
}
