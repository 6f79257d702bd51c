//! SQLite implementation of the database traits.
//!
//! This module provides a SQLite-backed implementation of the repository
//! traits defined in the parent module.

mod author;
mod connection;
mod helpers;
mod note;

#[cfg(test)]
mod author_test;

pub use author::SqliteAuthorRepository;
pub use connection::SqliteDatabase;
pub use note::SqliteNoteRepository;
