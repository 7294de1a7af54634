//! The rich-document envelope notes are stored in.
//!
//! Notes are persisted as a `doc > paragraph > text` tree, but the editor
//! only ever writes a single text node holding the whole markdown body. The
//! renderer consumes that flattened body.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to parse note document: {source}")]
    Parse { source: serde_json::Error },

    #[error("Failed to serialize note document: {source}")]
    Serialize { source: serde_json::Error },
}

/// A node in the stored document tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocNode {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<DocNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// The root of a stored note body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDocument {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub content: Vec<DocNode>,
}

impl NoteDocument {
    /// Wraps a markdown body the way the editor saves it.
    pub fn from_body(body: &str) -> Self {
        Self {
            kind: "doc".into(),
            content: vec![DocNode {
                kind: "paragraph".into(),
                content: vec![DocNode {
                    kind: "text".into(),
                    content: vec![],
                    text: Some(body.to_string()),
                }],
                text: None,
            }],
        }
    }

    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        serde_json::from_str(json).map_err(|source| DocumentError::Parse { source })
    }

    pub fn to_json(&self) -> Result<String, DocumentError> {
        serde_json::to_string(self).map_err(|source| DocumentError::Serialize { source })
    }

    /// Returns the text of the first paragraph's first node.
    ///
    /// Missing levels yield an empty body.
    pub fn body(&self) -> &str {
        self.content
            .first()
            .and_then(|p| p.content.first())
            .and_then(|t| t.text.as_deref())
            .unwrap_or_default()
    }

    /// Returns the body for list previews, or "No content" when it is empty.
    pub fn excerpt(&self) -> &str {
        match self.body() {
            "" => "No content",
            body => body,
        }
    }
}
