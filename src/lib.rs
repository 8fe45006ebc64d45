//! Pipe-Spec Assistant
//!
//! Answers questions about pipe specifications from a hosted vector index.
//! A question is embedded, the nearest stored passages are retrieved, and a
//! chat model is asked to answer using only those passages.
//!
//! # Architecture
//!
//! - `config`: layered settings (secrets file, environment, defaults)
//! - `providers`: embedding, vector search and chat completion clients
//! - `rag`: context assembly, prompt template and the `ask` pipeline
//! - `repl`, `cli`: terminal front end

pub mod errors;
pub mod types;

// Re-export commonly used types
pub use errors::{AssistantError, Result};

pub mod config;
pub mod providers;
pub mod rag;

pub mod bootstrap;
pub mod cli;
pub mod repl;
pub mod telemetry;
