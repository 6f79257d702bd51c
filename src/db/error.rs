//! Database error types.
//!
//! This module provides abstracted error types for database operations.
//! It uses miette for fancy diagnostic output and thiserror for derive macros.
//! The error types are storage-backend agnostic.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Entity not found: {entity_type} with id '{id}'")]
    #[diagnostic(code(notebook::db::not_found))]
    NotFound { entity_type: String, id: String },

    #[error("Constraint violation: {message}")]
    #[diagnostic(code(notebook::db::constraint))]
    Constraint { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(
        code(notebook::db::connection_error),
        help("Check that the database path exists and is writable")
    )]
    Connection { message: String },

    #[error("Storage error: {message}")]
    #[diagnostic(code(notebook::db::storage_error))]
    Storage { message: String },
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
