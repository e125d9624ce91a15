mod agent;
mod generator;
mod matcher;
mod scorer;

#[cfg(test)]
pub(crate) mod testing;

pub use agent::{ResumeAgent, DEFAULT_MAX_ITERATIONS, DEFAULT_TARGET_SCORE};
pub use generator::{ResumeRewriter, SuggestionGenerator};
pub use matcher::ResumeMatcher;
pub use scorer::SimilarityScorer;
