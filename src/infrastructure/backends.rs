use std::sync::Arc;
use tracing::info;

use crate::application::{ResumeAgent, ResumeMatcher};
use crate::domain::{
    ports::{EmbeddingService, LlmService},
    DomainError,
};
use crate::infrastructure::config::{
    AppConfig, EmbeddingConfig, EmbeddingProvider, LlmConfig, LlmProvider,
};
use crate::infrastructure::embedding::{HashingEmbedding, OpenAiEmbedding};
use crate::infrastructure::llm::{AnthropicLlm, HuggingFaceLlm, OpenAiLlm};

pub fn build_embedding(config: &EmbeddingConfig) -> Result<Arc<dyn EmbeddingService>, DomainError> {
    let service: Arc<dyn EmbeddingService> = match config.provider {
        EmbeddingProvider::OpenAi => Arc::new(OpenAiEmbedding::from_config(config)?),
        EmbeddingProvider::Hashing => Arc::new(HashingEmbedding::from_config(config)?),
    };
    info!(provider = ?config.provider, dimension = service.dimension(), "embedding backend ready");
    Ok(service)
}

pub fn build_llm(config: &LlmConfig) -> Result<Arc<dyn LlmService>, DomainError> {
    let service: Arc<dyn LlmService> = match config.provider {
        LlmProvider::Anthropic => Arc::new(AnthropicLlm::from_config(config)?),
        LlmProvider::OpenAi => Arc::new(OpenAiLlm::from_config(config)?),
        LlmProvider::HuggingFace => Arc::new(HuggingFaceLlm::from_config(config)?),
    };
    info!(provider = ?config.provider, model = config.model(), "generation backend ready");
    Ok(service)
}

/// Wires both backends, prompt templates and generation bounds into a matcher.
pub fn build_matcher(app: &AppConfig) -> Result<ResumeMatcher, DomainError> {
    let embedding = build_embedding(&app.config.embedding)?;
    let llm = build_llm(&app.config.llm)?;

    Ok(assemble_matcher(app, embedding, llm))
}

pub(crate) fn assemble_matcher(
    app: &AppConfig,
    embedding: Arc<dyn EmbeddingService>,
    llm: Arc<dyn LlmService>,
) -> ResumeMatcher {
    ResumeMatcher::new(embedding, llm, app.prompts.clone())
        .with_suggestion_params(app.config.generation.suggestion)
        .with_rewrite_params(app.config.generation.rewrite)
}

pub fn build_agent(matcher: Arc<ResumeMatcher>, app: &AppConfig) -> ResumeAgent {
    ResumeAgent::new(matcher)
        .with_target_score(app.config.improvement.target_score)
        .with_max_iterations(app.config.improvement.max_iterations)
}
