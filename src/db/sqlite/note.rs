//! SQLite NoteRepository implementation.

use futures_util::TryStreamExt;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use super::helpers::{insert_error, rollback, storage_error};
use crate::db::{Author, DbError, DbResult, Note, NoteRepository};

/// Notes joined with their author.
const SELECT_NOTES: &str = "SELECT n.note_id, n.title, n.content, a.author_id, a.author_name
     FROM notes n JOIN authors a ON a.author_id = n.author_id";

const SELECT_NOTE_BY_ID: &str = "SELECT n.note_id, n.title, n.content, a.author_id, a.author_name
     FROM notes n JOIN authors a ON a.author_id = n.author_id
     WHERE n.note_id = ?";

/// SQLx-backed note repository.
pub struct SqliteNoteRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

fn note_from_row(row: &SqliteRow) -> DbResult<Note> {
    let author = Author {
        id: row.try_get("author_id").map_err(storage_error)?,
        name: row.try_get("author_name").map_err(storage_error)?,
    };

    Ok(Note {
        id: row.try_get("note_id").map_err(storage_error)?,
        title: row.try_get("title").map_err(storage_error)?,
        content: row.try_get("content").map_err(storage_error)?,
        author,
    })
}

impl<'a> NoteRepository for SqliteNoteRepository<'a> {
    async fn create(&self, note: &Note) -> DbResult<()> {
        // Take the write lock up front; a deferred read-then-write cannot wait on busy
        let mut tx = self
            .pool
            .begin_with("BEGIN IMMEDIATE")
            .await
            .map_err(storage_error)?;

        // Author must exist before the note can reference it
        let author_exists: Result<bool, sqlx::Error> =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM authors WHERE author_id = ?)")
                .bind(&note.author.id)
                .fetch_one(&mut *tx)
                .await;

        match author_exists {
            Ok(true) => {}
            Ok(false) => {
                let err = DbError::Constraint {
                    message: format!("Author with id '{}' not found", note.author.id),
                };
                return Err(rollback(tx, err).await);
            }
            Err(e) => return Err(rollback(tx, storage_error(e)).await),
        }

        let inserted = sqlx::query(
            "INSERT INTO notes (note_id, title, content, author_id) VALUES (?, ?, ?, ?)",
        )
        .bind(&note.id)
        .bind(&note.title)
        .bind(&note.content)
        .bind(&note.author.id)
        .execute(&mut *tx)
        .await;

        if let Err(e) = inserted {
            return Err(rollback(tx, insert_error(e, "Note", &note.id)).await);
        }

        tx.commit().await.map_err(storage_error)
    }

    async fn get(&self, id: &str) -> DbResult<Note> {
        let row = sqlx::query(SELECT_NOTE_BY_ID)
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(storage_error)?;

        match row {
            Some(row) => note_from_row(&row),
            None => Err(DbError::NotFound {
                entity_type: "Note".to_string(),
                id: id.to_string(),
            }),
        }
    }

    async fn list(&self) -> DbResult<Vec<Note>> {
        let mut rows = sqlx::query(SELECT_NOTES).fetch(self.pool);

        // Only a clean end of stream counts as success
        let mut notes = Vec::new();
        while let Some(row) = rows.try_next().await.map_err(storage_error)? {
            notes.push(note_from_row(&row)?);
        }
        Ok(notes)
    }
}
