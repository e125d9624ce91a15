//! Application layer - Use cases and orchestration.
//!
//! Services here depend on domain ports (traits) rather than concrete
//! backends, so scoring and generation can be swapped for stubs.

pub mod prompts;
pub mod services;

pub use prompts::PromptTemplates;
pub use services::{ResumeAgent, ResumeMatcher, ResumeRewriter, SimilarityScorer, SuggestionGenerator};
