//! Embedding vectors and retrieved matches

use serde::{Deserialize, Serialize};

/// Metadata key holding the stored passage
pub const TEXT_METADATA_KEY: &str = "text";

/// Dense embedding of a question
pub type EmbeddingVector = Vec<f32>;

/// One nearest-neighbour hit from the vector index
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RetrievedMatch {
    pub id: String,
    #[serde(default)]
    pub score: f32,
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl RetrievedMatch {
    /// Stored passage text, or `""` when the match carries none
    pub fn text(&self) -> &str {
        self.metadata
            .get(TEXT_METADATA_KEY)
            .and_then(|v| v.as_str())
            .unwrap_or("")
    }
}
