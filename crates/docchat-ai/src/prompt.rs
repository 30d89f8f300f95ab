//! Prompt assembly.
//!
//! A pure function of (question, context, history, style): identical inputs
//! always produce a byte-identical prompt. The entire accumulated document
//! text is embedded verbatim on every call — there is no truncation,
//! chunking, or token counting, so unbounded documents inflate every
//! subsequent request. That is a documented limitation of this tool.

use crate::session::Exchange;
use crate::style::AnswerStyle;

/// Serialize history as alternating `User:` / `Assistant:` lines in
/// chronological order. Empty history serializes to the empty string.
pub fn serialize_history(history: &[Exchange]) -> String {
    history
        .iter()
        .map(|ex| format!("User: {}\nAssistant: {}", ex.user_text, ex.assistant_text))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Assemble the full model prompt.
///
/// Layout, in fixed order: context block, previous conversation, the new
/// question, the style's instruction sentence, and a closing instruction
/// to answer only from the given material.
pub fn assemble(
    question: &str,
    context: &str,
    history: &[Exchange],
    style: AnswerStyle,
) -> String {
    format!(
        "Context information:\n{context}\n\n\
         Previous conversation:\n{history}\n\n\
         User question: {question}\n\n\
         {instruction}\n\n\
         Please answer the question based on the provided context and previous conversation.",
        history = serialize_history(history),
        instruction = style.instruction(),
    )
}
