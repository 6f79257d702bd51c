use crate::cli::commands::author::*;
use crate::db::{AuthorRepository, Database, SqliteDatabase};

async fn setup_db() -> SqliteDatabase {
    SqliteDatabase::in_memory()
        .await
        .expect("Failed to create test database")
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_author_persists_and_reports_id() {
    let db = setup_db().await;

    let output = add_author(&db, "Ada").await.expect("Add should succeed");
    assert!(output.contains("Created author: Ada"));

    let authors = db.authors().list().await.unwrap();
    assert_eq!(authors.len(), 1);
    assert!(output.contains(&authors[0].id));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_authors_empty_table() {
    let db = setup_db().await;

    let output = list_authors(&db, "table").await.unwrap();
    assert_eq!(output, "No authors found.");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_authors_table_and_json() {
    let db = setup_db().await;
    add_author(&db, "Ada").await.unwrap();
    add_author(&db, "Grace").await.unwrap();

    let table = list_authors(&db, "table").await.unwrap();
    assert!(table.contains("Name"));
    assert!(table.contains("Ada"));
    assert!(table.contains("Grace"));

    let json = list_authors(&db, "json").await.unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 2);
}
