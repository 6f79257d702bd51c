//! Database abstraction layer.
//!
//! This module provides trait-based abstractions for data access,
//! allowing the storage backend to be swapped without changing the
//! HTTP or CLI layers.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entities (Author, Note)
//! - `repository`: Trait definitions for data access
//! - `sqlite`: SQLx-backed implementation

mod error;
mod models;
mod repository;
mod sqlite;

#[cfg(test)]
mod models_test;

pub use error::{DbError, DbResult};
pub use models::*;
pub use repository::*;
pub use sqlite::{SqliteAuthorRepository, SqliteDatabase, SqliteNoteRepository};
