//! Shared helper functions for SQLite repositories.

use sqlx::error::ErrorKind;
use sqlx::{Sqlite, Transaction};

use crate::db::DbError;

/// SQLITE_CONSTRAINT_PRIMARYKEY extended result code.
const SQLITE_CONSTRAINT_PRIMARYKEY: &str = "1555";

/// Map any driver error to a storage error.
pub fn storage_error(e: sqlx::Error) -> DbError {
    DbError::Storage {
        message: e.to_string(),
    }
}

/// Map an INSERT failure, separating constraint violations from other faults.
pub fn insert_error(e: sqlx::Error, entity_type: &str, id: &str) -> DbError {
    if let sqlx::Error::Database(db_err) = &e {
        let primary_key = db_err.code().as_deref() == Some(SQLITE_CONSTRAINT_PRIMARYKEY);
        if primary_key || db_err.is_unique_violation() {
            return DbError::Constraint {
                message: format!("{} with id '{}' already exists", entity_type, id),
            };
        }
        if matches!(
            db_err.kind(),
            ErrorKind::ForeignKeyViolation | ErrorKind::NotNullViolation | ErrorKind::CheckViolation
        ) {
            return DbError::Constraint {
                message: format!("{} '{}': {}", entity_type, id, db_err.message()),
            };
        }
    }
    storage_error(e)
}

/// Roll back `tx` and return `err`.
///
/// A failed rollback leaves the store in an unknown state, so it takes
/// precedence and is reported as a storage error.
pub async fn rollback(tx: Transaction<'_, Sqlite>, err: DbError) -> DbError {
    match tx.rollback().await {
        Ok(()) => err,
        Err(e) => DbError::Storage {
            message: format!("{}; rollback failed: {}", err, e),
        },
    }
}
