//! Domain models for the notebook database.
//!
//! These models are storage-agnostic. Equality is structural: two notes are
//! equal when every field matches, including the nested author.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// UUID v4 rendered as text, used for all entities.
pub type Id = String;

/// Generate a fresh random identifier.
pub fn generate_entity_id() -> Id {
    Uuid::new_v4().to_string()
}

/// The author of one or more notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: Id,
    pub name: String,
}

impl Author {
    /// Create an author with a freshly generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(generate_entity_id(), name)
    }

    /// Create an author with a known id, e.g. when rebuilding a stored row.
    pub fn with_id(id: impl Into<Id>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Structural comparison that treats an absent author as unequal.
    pub fn equals(&self, other: Option<&Author>) -> bool {
        other.is_some_and(|other| self == other)
    }
}

/// A note written by exactly one author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: Id,
    pub title: String,
    pub content: String,
    pub author: Author,
}

impl Note {
    /// Create a note with a freshly generated id.
    pub fn new(title: impl Into<String>, content: impl Into<String>, author: Author) -> Self {
        Self::with_id(generate_entity_id(), title, content, author)
    }

    /// Create a note with a known id, e.g. when rebuilding a stored row.
    pub fn with_id(
        id: impl Into<Id>,
        title: impl Into<String>,
        content: impl Into<String>,
        author: Author,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            author,
        }
    }

    /// Structural comparison, nested author included. An absent note is unequal.
    pub fn equals(&self, other: Option<&Note>) -> bool {
        other.is_some_and(|other| self == other)
    }
}
