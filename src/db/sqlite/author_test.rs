//! Tests for SqliteAuthorRepository.

use crate::db::{Author, AuthorRepository, Database, DbError, SqliteDatabase};

async fn setup_db() -> SqliteDatabase {
    SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database")
}

#[tokio::test(flavor = "multi_thread")]
async fn author_create_and_get() {
    let db = setup_db().await;
    let authors = db.authors();

    let author = Author::with_id("a1", "Ada");
    authors.create(&author).await.expect("Create should succeed");

    let retrieved = authors.get("a1").await.expect("Get should succeed");
    assert!(author.equals(Some(&retrieved)));
}

#[tokio::test(flavor = "multi_thread")]
async fn author_get_nonexistent_returns_not_found() {
    let db = setup_db().await;

    let result = db.authors().get("nonexist").await;
    assert!(matches!(
        result,
        Err(DbError::NotFound { ref entity_type, ref id }) if entity_type == "Author" && id == "nonexist"
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn author_duplicate_id_fails_with_constraint_and_keeps_one_row() {
    let db = setup_db().await;
    let authors = db.authors();

    authors
        .create(&Author::with_id("a1", "Ada"))
        .await
        .expect("First create should succeed");

    let result = authors.create(&Author::with_id("a1", "Grace")).await;
    assert!(
        matches!(result, Err(DbError::Constraint { .. })),
        "Expected constraint error, got: {:?}",
        result
    );

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM authors WHERE author_id = 'a1'")
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(count, 1);

    // The original row is untouched
    let retrieved = authors.get("a1").await.unwrap();
    assert_eq!(retrieved.name, "Ada");
}

#[tokio::test(flavor = "multi_thread")]
async fn author_failed_create_releases_transaction() {
    let db = setup_db().await;
    let authors = db.authors();

    authors.create(&Author::with_id("a1", "Ada")).await.unwrap();
    assert!(authors.create(&Author::with_id("a1", "Ada")).await.is_err());

    // The single pooled connection must be usable again after the rollback
    authors
        .create(&Author::with_id("a2", "Grace"))
        .await
        .expect("Create after a failed create should succeed");
    assert_eq!(authors.list().await.unwrap().len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn author_list() {
    let db = setup_db().await;
    let authors = db.authors();

    assert!(authors.list().await.unwrap().is_empty());

    let ada = Author::new("Ada");
    let grace = Author::new("Grace");
    authors.create(&ada).await.unwrap();
    authors.create(&grace).await.unwrap();

    let listed = authors.list().await.expect("List should succeed");
    assert_eq!(listed.len(), 2);
    assert!(listed.contains(&ada));
    assert!(listed.contains(&grace));
}
