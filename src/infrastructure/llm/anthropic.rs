use async_trait::async_trait;
use rig::client::{CompletionClient, ProviderClient};
use rig::completion::Prompt;
use rig::providers::anthropic;
use std::time::Duration;
use tracing::debug;

use crate::domain::{ports::LlmService, DomainError, GenerationParams};
use crate::infrastructure::config::LlmConfig;
use crate::infrastructure::require_env;

const API_KEY_VAR: &str = "ANTHROPIC_API_KEY";

pub struct AnthropicLlm {
    client: anthropic::Client,
    model: String,
    timeout: Duration,
}

impl AnthropicLlm {
    pub fn from_config(config: &LlmConfig) -> Result<Self, DomainError> {
        require_env(API_KEY_VAR)?;
        Ok(Self {
            client: anthropic::Client::from_env(),
            model: config.model().to_string(),
            timeout: Duration::from_secs(config.timeout_seconds),
        })
    }
}

#[async_trait]
impl LlmService for AnthropicLlm {
    async fn generate(
        &self,
        prompt: &str,
        params: GenerationParams,
    ) -> Result<String, DomainError> {
        debug!(
            model = %self.model,
            max_tokens = params.max_length,
            beam_width = params.beam_width,
            "beam search not offered by provider; sampling instead"
        );

        let agent = self
            .client
            .agent(&self.model)
            .max_tokens(u64::from(params.max_length))
            .build();

        tokio::time::timeout(self.timeout, agent.prompt(prompt))
            .await
            .map_err(|_| DomainError::timeout("Anthropic completion timed out"))?
            .map_err(|e| DomainError::external(format!("Anthropic completion failed: {e}")))
    }
}
