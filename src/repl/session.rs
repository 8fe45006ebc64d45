//! Question session: the boundary between the UI and the pipeline
//!
//! Provider failures are caught here and turned into a message, so the
//! caller keeps accepting questions.

use crate::config::Settings;
use crate::rag::AskPipeline;
use crate::types::{Answer, Question};

/// Result of submitting one line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input; nothing was dispatched
    Ignored,
    /// The pipeline produced an answer
    Answered(Answer),
    /// A provider call failed; the message is safe to show the user
    Failed(String),
}

/// Stateless front for the pipeline plus the read-only settings panel
#[derive(Clone)]
pub struct QuestionSession {
    pipeline: AskPipeline,
    debug_fields: Vec<(&'static str, String)>,
}

impl QuestionSession {
    pub fn new(pipeline: AskPipeline, settings: &Settings) -> Self {
        Self {
            pipeline,
            debug_fields: settings.debug_fields(),
        }
    }

    /// Answer one question.
    ///
    /// Blank input is ignored without contacting any provider.
    pub async fn submit(&self, input: &str) -> SubmitOutcome {
        let Some(question) = Question::new(input) else {
            return SubmitOutcome::Ignored;
        };

        match self.pipeline.ask(&question).await {
            Ok(answer) => SubmitOutcome::Answered(answer),
            Err(err) => {
                tracing::warn!(error = %err, "question failed");
                SubmitOutcome::Failed(err.to_string())
            }
        }
    }

    /// Non-secret settings shown in the debug panel
    pub fn debug_fields(&self) -> &[(&'static str, String)] {
        &self.debug_fields
    }
}
