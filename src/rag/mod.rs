// Retrieval-augmented answering
//
// Components:
// - Context: join retrieved passages in ranking order
// - Prompt: fixed instruction template around context and question
// - Pipeline: embed, search, assemble, generate

pub mod context;
pub mod pipeline;
pub mod prompt;

// Re-export key types
pub use context::{build_context, CONTEXT_SEPARATOR};
pub use pipeline::{AskPipeline, RetrievalParams};
pub use prompt::build_prompt;
