//! SQLite database connection and schema setup.

use std::path::Path;
use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use super::author::SqliteAuthorRepository;
use super::note::SqliteNoteRepository;
use crate::db::{Database, DbError, DbResult};

/// Tables are created if missing. There is no migration history.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS authors (
        author_id TEXT PRIMARY KEY NOT NULL,
        author_name TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS notes (
        note_id TEXT PRIMARY KEY NOT NULL,
        title TEXT NOT NULL,
        content TEXT NOT NULL,
        author_id TEXT NOT NULL REFERENCES authors(author_id)
    )",
];

/// SQLite database implementation.
///
/// Owns the connection pool for its whole lifetime and hands out
/// repositories that borrow it.
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Open (creating if missing) the database file at the given path.
    pub async fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(connection_error)?;

        Self::with_schema(pool).await
    }

    /// Create an in-memory database (useful for testing).
    ///
    /// Every connection to `:memory:` is a separate database, so the pool is
    /// pinned to a single connection that is never recycled.
    pub async fn in_memory() -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(connection_error)?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(connection_error)?;

        Self::with_schema(pool).await
    }

    async fn with_schema(pool: SqlitePool) -> DbResult<Self> {
        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&pool)
                .await
                .map_err(connection_error)?;
        }
        Ok(Self { pool })
    }

    /// Get a reference to the underlying pool.
    ///
    /// This is useful for testing and advanced operations that need
    /// direct database access.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Whether `close` has already been called.
    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}

impl Database for SqliteDatabase {
    type Authors<'a> = SqliteAuthorRepository<'a>;
    type Notes<'a> = SqliteNoteRepository<'a>;

    fn authors(&self) -> Self::Authors<'_> {
        SqliteAuthorRepository { pool: &self.pool }
    }

    fn notes(&self) -> Self::Notes<'_> {
        SqliteNoteRepository { pool: &self.pool }
    }

    async fn close(&self) -> DbResult<()> {
        if self.pool.is_closed() {
            return Err(DbError::Connection {
                message: "database is already closed".to_string(),
            });
        }
        self.pool.close().await;
        Ok(())
    }
}

fn connection_error(e: sqlx::Error) -> DbError {
    DbError::Connection {
        message: e.to_string(),
    }
}
