//! In-process fakes for the provider traits

#![allow(dead_code)]

use async_trait::async_trait;
use pipespec::{
    providers::{AnswerGenerator, Embedder, VectorSearch},
    rag::{AskPipeline, RetrievalParams},
    types::{Answer, EmbeddingVector, Question, RetrievedMatch},
    AssistantError, Result,
};
use serde_json::json;
use std::sync::{Arc, Mutex};

/// One recorded provider call
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Embed { question: String, model: String },
    Search { vector: Vec<f32>, top_k: usize, namespace: String },
    Generate { prompt: String },
}

pub type CallLog = Arc<Mutex<Vec<Call>>>;

pub const FAKE_VECTOR: [f32; 3] = [0.1, 0.2, 0.3];

pub struct FakeEmbedder {
    log: CallLog,
    fail: bool,
}

#[async_trait]
impl Embedder for FakeEmbedder {
    async fn embed(&self, question: &Question, model: &str) -> Result<EmbeddingVector> {
        self.log.lock().unwrap().push(Call::Embed {
            question: question.as_str().to_string(),
            model: model.to_string(),
        });
        if self.fail {
            return Err(AssistantError::Embedding("HTTP 429: quota exceeded".to_string()));
        }
        Ok(FAKE_VECTOR.to_vec())
    }
}

pub struct FakeSearch {
    log: CallLog,
    matches: Vec<RetrievedMatch>,
    fail: bool,
}

#[async_trait]
impl VectorSearch for FakeSearch {
    async fn search(
        &self,
        vector: &EmbeddingVector,
        top_k: usize,
        namespace: &str,
    ) -> Result<Vec<RetrievedMatch>> {
        self.log.lock().unwrap().push(Call::Search {
            vector: vector.clone(),
            top_k,
            namespace: namespace.to_string(),
        });
        if self.fail {
            return Err(AssistantError::Search("HTTP 503: unavailable".to_string()));
        }
        Ok(self.matches.clone())
    }
}

pub struct FakeGenerator {
    log: CallLog,
    failures_left: Mutex<usize>,
}

#[async_trait]
impl AnswerGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> Result<Answer> {
        self.log.lock().unwrap().push(Call::Generate {
            prompt: prompt.to_string(),
        });
        let mut failures_left = self.failures_left.lock().unwrap();
        if *failures_left > 0 {
            *failures_left -= 1;
            return Err(AssistantError::Generation("HTTP 500: server error".to_string()));
        }
        Ok(Answer::new("  Valve X is rated to 150 psi.\n"))
    }
}

/// Builder for a pipeline wired to fakes
pub struct Harness {
    pub log: CallLog,
    matches: Vec<RetrievedMatch>,
    top_k: usize,
    embed_fails: bool,
    search_fails: bool,
    generate_failures: usize,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            log: Arc::new(Mutex::new(Vec::new())),
            matches: Vec::new(),
            top_k: 20,
            embed_fails: false,
            search_fails: false,
            generate_failures: 0,
        }
    }

    pub fn matches(mut self, matches: Vec<RetrievedMatch>) -> Self {
        self.matches = matches;
        self
    }

    pub fn top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn failing_embed(mut self) -> Self {
        self.embed_fails = true;
        self
    }

    pub fn failing_search(mut self) -> Self {
        self.search_fails = true;
        self
    }

    pub fn failing_generate(mut self, times: usize) -> Self {
        self.generate_failures = times;
        self
    }

    pub fn pipeline(&self) -> AskPipeline {
        AskPipeline::new(
            Arc::new(FakeEmbedder {
                log: self.log.clone(),
                fail: self.embed_fails,
            }),
            Arc::new(FakeSearch {
                log: self.log.clone(),
                matches: self.matches.clone(),
                fail: self.search_fails,
            }),
            Arc::new(FakeGenerator {
                log: self.log.clone(),
                failures_left: Mutex::new(self.generate_failures),
            }),
            RetrievalParams {
                embed_model: "text-embedding-3-large".to_string(),
                namespace: "v1".to_string(),
                top_k: self.top_k,
            },
        )
    }

    pub fn calls(&self) -> Vec<Call> {
        self.log.lock().unwrap().clone()
    }

    /// Prompt passed to the generator by the most recent generation call
    pub fn last_prompt(&self) -> Option<String> {
        self.calls().into_iter().rev().find_map(|call| match call {
            Call::Generate { prompt } => Some(prompt),
            _ => None,
        })
    }
}

/// Match carrying the given text, or no `text` key when `None`
pub fn passage(id: &str, text: Option<&str>) -> RetrievedMatch {
    let mut metadata = serde_json::Map::new();
    metadata.insert("source".to_string(), json!("catalogue.pdf"));
    if let Some(text) = text {
        metadata.insert("text".to_string(), json!(text));
    }
    RetrievedMatch {
        id: id.to_string(),
        score: 0.9,
        metadata,
    }
}
