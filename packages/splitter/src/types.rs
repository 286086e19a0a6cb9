//! Core data types for the splitter.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A piece of text with string metadata, the unit of `split_documents`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Document {
    /// The text content.
    pub content: String,

    /// Arbitrary metadata, copied to every chunk.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl Document {
    /// Create a document without metadata.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            metadata: BTreeMap::new(),
        }
    }

    /// Add a metadata entry.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// A chunk as written by the binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkRecord {
    /// Position in the output sequence.
    pub index: usize,

    /// Length according to the splitter's length function.
    pub length: usize,

    /// The chunk text.
    pub text: String,
}
