//! External service seams
//!
//! Each hosted collaborator is reached through a one-method trait so the
//! pipeline can be driven by in-process fakes in tests.

pub mod openai;
pub mod pinecone;

use async_trait::async_trait;

use crate::errors::Result;
use crate::types::{Answer, EmbeddingVector, Question, RetrievedMatch};

pub use openai::{OpenAiClient, CHAT_MODEL};
pub use pinecone::PineconeClient;

/// Turns question text into an embedding vector
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, question: &Question, model: &str) -> Result<EmbeddingVector>;
}

/// Nearest-neighbour lookup in a namespaced vector index
#[async_trait]
pub trait VectorSearch: Send + Sync {
    /// Matches in the provider's ranking order, at most `top_k` of them
    async fn search(
        &self,
        vector: &EmbeddingVector,
        top_k: usize,
        namespace: &str,
    ) -> Result<Vec<RetrievedMatch>>;
}

/// Single-message chat completion
#[async_trait]
pub trait AnswerGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<Answer>;
}
