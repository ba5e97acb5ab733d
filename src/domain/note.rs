// src/domain/note.rs
use serde::{Deserialize, Serialize};

/// A note as exchanged with the server.
///
/// `id` is assigned by the server; a note without one has not been created
/// yet, and serializing such a note omits the field entirely so it can be
/// used directly as a create body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Note {
    /// A fresh, unsaved note. Empty title and content are legal.
    pub fn draft(title: String, content: String) -> Self {
        Self {
            id: None,
            title,
            content,
            category: None,
            tags: vec![],
        }
    }
}
