use crate::domain::{errors::DomainError, GenerationParams};
use async_trait::async_trait;

#[async_trait]
pub trait LlmService: Send + Sync {
    /// Generates a completion for `prompt`, bounded by `params`.
    async fn generate(&self, prompt: &str, params: GenerationParams)
        -> Result<String, DomainError>;
}
