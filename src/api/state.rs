//! Application state for the HTTP server.

use std::sync::Arc;

use super::view::View;
use crate::db::Database;

/// Shared application state.
///
/// Generic over `D: Database` so handlers work with any storage backend.
/// Dependencies are injected via constructor, not created internally.
pub struct AppState<D: Database> {
    db: Arc<D>,
    view: Arc<View>,
}

// Manual Clone impl - only the Arcs are cloned, D need not be Clone
impl<D: Database> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
            view: Arc::clone(&self.view),
        }
    }
}

impl<D: Database> AppState<D> {
    /// Create a new AppState with the given database and view renderer.
    pub fn new(db: Arc<D>, view: View) -> Self {
        Self {
            db,
            view: Arc::new(view),
        }
    }

    /// Get a reference to the database.
    pub fn db(&self) -> &D {
        &self.db
    }

    /// Get a reference to the view renderer.
    pub fn view(&self) -> &View {
        &self.view
    }
}
