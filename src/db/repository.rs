//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing business logic.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{Author, Note},
};

/// Repository for Author operations.
pub trait AuthorRepository: Send + Sync {
    /// Insert a new author in its own transaction.
    fn create(&self, author: &Author) -> impl Future<Output = DbResult<()>> + Send;

    /// Get an author by ID.
    fn get(&self, id: &str) -> impl Future<Output = DbResult<Author>> + Send;

    /// Get all authors.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Author>>> + Send;
}

/// Repository for Note operations.
pub trait NoteRepository: Send + Sync {
    /// Insert a new note in its own transaction. The author must already exist.
    fn create(&self, note: &Note) -> impl Future<Output = DbResult<()>> + Send;

    /// Get a note, with its author, by ID.
    fn get(&self, id: &str) -> impl Future<Output = DbResult<Note>> + Send;

    /// Get all notes in storage order.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Note>>> + Send;
}

/// Combined database interface.
pub trait Database: Send + Sync + 'static {
    type Authors<'a>: AuthorRepository
    where
        Self: 'a;
    type Notes<'a>: NoteRepository
    where
        Self: 'a;

    /// Get the author repository.
    fn authors(&self) -> Self::Authors<'_>;

    /// Get the note repository.
    fn notes(&self) -> Self::Notes<'_>;

    /// Release the underlying handle. Closing twice is an error.
    fn close(&self) -> impl Future<Output = DbResult<()>> + Send;
}
