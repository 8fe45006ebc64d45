// Fixed instruction template for grounded answers
use crate::types::Question;

const INSTRUCTIONS: &str = "You are Pipe-Spec Assistant.
Answer the user's question **only** with information in the context.
Try to give the best answer possible. If you really don't know say you don't know, but still try to provide some value.";

/// Interpolate the context block and question into the answer template.
///
/// The context may be empty; the `### Context` heading is always present.
pub fn build_prompt(context: &str, question: &Question) -> String {
    format!(
        "\n{INSTRUCTIONS}\n\n### Context\n{context}\n\n### Question\n{question}\n\n### Answer\n",
        question = question.as_str(),
    )
}
