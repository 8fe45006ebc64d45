//! Type definitions module
//!
//! Request-scoped values that flow through one question/answer round.
//! Nothing here outlives a single call to the pipeline.

pub mod question;
pub mod retrieval;

// Re-export commonly used types
pub use question::{Answer, Question};
pub use retrieval::{EmbeddingVector, RetrievedMatch};
