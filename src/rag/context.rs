// Context block assembly for the answer prompt
use crate::types::RetrievedMatch;

/// Separator placed between consecutive passages
pub const CONTEXT_SEPARATOR: &str = "\n\n---\n\n";

/// Join the text of each match in ranking order.
///
/// Matches without text still occupy a slot, so three matches always give
/// two separators.
pub fn build_context(matches: &[RetrievedMatch]) -> String {
    matches
        .iter()
        .map(RetrievedMatch::text)
        .collect::<Vec<_>>()
        .join(CONTEXT_SEPARATOR)
}
