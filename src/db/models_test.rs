//! Tests for domain models.

use std::collections::HashSet;

use crate::db::models::*;

#[test]
fn author_equals_itself() {
    let author = Author::new("Ada");
    assert!(author.equals(Some(&author)));
    assert!(!author.id.is_empty());
}

#[test]
fn author_ids_are_unique() {
    let ids: HashSet<Id> = (0..100).map(|_| Author::new("Ada").id).collect();
    assert_eq!(ids.len(), 100);
}

#[test]
fn author_id_is_a_uuid() {
    let author = Author::new("Ada");
    assert!(uuid::Uuid::parse_str(&author.id).is_ok());
}

#[test]
fn author_accepts_empty_name() {
    let author = Author::new("");
    assert_eq!(author.name, "");
}

#[test]
fn author_equals_absent_is_false() {
    let author = Author::new("Ada");
    assert!(!author.equals(None));
}

#[test]
fn authors_with_same_name_are_not_equal() {
    // Ids differ even though the names match
    assert!(!Author::new("Ada").equals(Some(&Author::new("Ada"))));
}

#[test]
fn note_equals_compares_nested_author() {
    let note = Note::with_id("n1", "T", "C", Author::with_id("a1", "Ada"));
    let same = Note::with_id("n1", "T", "C", Author::with_id("a1", "Ada"));
    let renamed = Note::with_id("n1", "T", "C", Author::with_id("a1", "Grace"));

    assert!(note.equals(Some(&same)));
    assert!(!note.equals(Some(&renamed)));
    assert!(!note.equals(None));
}

#[test]
fn note_new_generates_distinct_ids() {
    let author = Author::new("Ada");
    let first = Note::new("T", "C", author.clone());
    let second = Note::new("T", "C", author);
    assert_ne!(first.id, second.id);
    assert!(!first.equals(Some(&second)));
}

#[test]
fn note_serializes_with_nested_author() {
    let note = Note::with_id("n1", "T", "C", Author::with_id("a1", "Ada"));
    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(json["author"]["id"], "a1");
    assert_eq!(json["author"]["name"], "Ada");
}
