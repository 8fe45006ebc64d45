// End-to-end question answering: embed -> search -> context -> prompt -> generate
use std::sync::Arc;
use std::time::Instant;

use crate::config::Settings;
use crate::errors::Result;
use crate::providers::{AnswerGenerator, Embedder, VectorSearch};
use crate::rag::context::build_context;
use crate::rag::prompt::build_prompt;
use crate::types::{Answer, Question};

/// Retrieval parameters fixed at start-up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievalParams {
    pub embed_model: String,
    pub namespace: String,
    pub top_k: usize,
}

impl From<&Settings> for RetrievalParams {
    fn from(settings: &Settings) -> Self {
        Self {
            embed_model: settings.embed_model.clone(),
            namespace: settings.namespace.clone(),
            top_k: settings.top_k,
        }
    }
}

/// The question-answering pipeline.
///
/// Holds shared, read-only provider handles; every call to [`ask`](Self::ask)
/// is independent of the ones before it.
#[derive(Clone)]
pub struct AskPipeline {
    embedder: Arc<dyn Embedder>,
    search: Arc<dyn VectorSearch>,
    generator: Arc<dyn AnswerGenerator>,
    params: RetrievalParams,
}

impl AskPipeline {
    pub fn new(
        embedder: Arc<dyn Embedder>,
        search: Arc<dyn VectorSearch>,
        generator: Arc<dyn AnswerGenerator>,
        params: RetrievalParams,
    ) -> Self {
        Self {
            embedder,
            search,
            generator,
            params,
        }
    }

    /// Answer a question from retrieved context.
    ///
    /// Exactly one embedding, one search and one generation call are made,
    /// in that order. An empty search result still reaches the model.
    pub async fn ask(&self, question: &Question) -> Result<Answer> {
        let started = Instant::now();

        let vector = self
            .embedder
            .embed(question, &self.params.embed_model)
            .await?;
        tracing::debug!(dims = vector.len(), elapsed_ms = started.elapsed().as_millis() as u64, "question embedded");

        let step = Instant::now();
        let mut matches = self
            .search
            .search(&vector, self.params.top_k, &self.params.namespace)
            .await?;
        if matches.len() > self.params.top_k {
            tracing::warn!(returned = matches.len(), top_k = self.params.top_k, "search returned extra matches");
            matches.truncate(self.params.top_k);
        }
        tracing::debug!(matches = matches.len(), elapsed_ms = step.elapsed().as_millis() as u64, "index searched");

        let context = build_context(&matches);
        let prompt = build_prompt(&context, question);

        let step = Instant::now();
        let answer = self.generator.generate(&prompt).await?;
        tracing::debug!(
            prompt_chars = prompt.len(),
            elapsed_ms = step.elapsed().as_millis() as u64,
            total_ms = started.elapsed().as_millis() as u64,
            "answer generated"
        );

        Ok(answer)
    }

    /// Retrieval parameters in use
    pub fn params(&self) -> &RetrievalParams {
        &self.params
    }
}
