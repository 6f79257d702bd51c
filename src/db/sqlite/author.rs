//! SQLite AuthorRepository implementation.

use futures_util::TryStreamExt;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use super::helpers::{insert_error, rollback, storage_error};
use crate::db::{Author, AuthorRepository, DbError, DbResult};

/// SQLx-backed author repository.
pub struct SqliteAuthorRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

fn author_from_row(row: &SqliteRow) -> DbResult<Author> {
    Ok(Author {
        id: row.try_get("author_id").map_err(storage_error)?,
        name: row.try_get("author_name").map_err(storage_error)?,
    })
}

impl<'a> AuthorRepository for SqliteAuthorRepository<'a> {
    async fn create(&self, author: &Author) -> DbResult<()> {
        let mut tx = self.pool.begin().await.map_err(storage_error)?;

        let inserted = sqlx::query("INSERT INTO authors (author_id, author_name) VALUES (?, ?)")
            .bind(&author.id)
            .bind(&author.name)
            .execute(&mut *tx)
            .await;

        if let Err(e) = inserted {
            return Err(rollback(tx, insert_error(e, "Author", &author.id)).await);
        }

        tx.commit().await.map_err(storage_error)
    }

    async fn get(&self, id: &str) -> DbResult<Author> {
        let row = sqlx::query("SELECT author_id, author_name FROM authors WHERE author_id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(storage_error)?;

        match row {
            Some(row) => author_from_row(&row),
            None => Err(DbError::NotFound {
                entity_type: "Author".to_string(),
                id: id.to_string(),
            }),
        }
    }

    async fn list(&self) -> DbResult<Vec<Author>> {
        let mut rows = sqlx::query("SELECT author_id, author_name FROM authors").fetch(self.pool);

        let mut authors = Vec::new();
        while let Some(row) = rows.try_next().await.map_err(storage_error)? {
            authors.push(author_from_row(&row)?);
        }
        Ok(authors)
    }
}
