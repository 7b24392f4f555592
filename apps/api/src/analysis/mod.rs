// ATS analysis engine: category checkers, scoring, aggregation, and the
// batch analyzer. All LLM calls go through llm_client — no direct Anthropic
// API calls here.

pub mod aggregate;
pub mod analyzer;
pub mod content;
pub mod essentials;
pub mod handlers;
pub mod issue;
pub mod lexicon;
pub mod prompts;
pub mod scoring;
pub mod sections;
pub mod tailoring;

use thiserror::Error;

use crate::llm_client::ModelError;

/// Failure of one optional subcheck. Never propagates past its call site:
/// the caller degrades the subcategory explicitly (neutral default for
/// spelling/grammar, `None` for tailoring).
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("model call failed: {0}")]
    Model(#[from] ModelError),

    #[error("check unavailable: {0}")]
    Unavailable(String),
}
