pub mod backends;
pub mod config;
pub mod embedding;
pub mod llm;

pub use backends::{build_agent, build_embedding, build_llm, build_matcher};
pub use config::{AppConfig, Config, EmbeddingProvider, LlmProvider};
pub use embedding::{HashingEmbedding, OpenAiEmbedding};
pub use llm::{AnthropicLlm, HuggingFaceLlm, OpenAiLlm};

use crate::domain::DomainError;

/// Missing provider credentials fail backend construction.
pub(crate) fn require_env(key: &str) -> Result<String, DomainError> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| DomainError::unavailable(format!("environment variable '{key}' is not set")))
}
