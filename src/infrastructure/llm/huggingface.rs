use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use crate::domain::{ports::LlmService, DomainError, GenerationParams};
use crate::infrastructure::config::LlmConfig;

const TOKEN_VAR: &str = "HF_API_TOKEN";

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
    options: InferenceOptions,
}

#[derive(Debug, Serialize)]
struct InferenceParameters {
    max_length: u32,
    num_beams: u32,
}

#[derive(Debug, Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
}

#[derive(Debug, Deserialize)]
struct Generated {
    generated_text: String,
}

#[derive(Debug, Deserialize)]
struct InferenceError {
    error: String,
}

/// Text2text model served over a Hugging Face style inference API.
///
/// Unlike the chat providers this one honours the beam width.
pub struct HuggingFaceLlm {
    client: Client,
    url: String,
    token: Option<String>,
}

impl HuggingFaceLlm {
    pub fn from_config(config: &LlmConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| DomainError::unavailable(format!("cannot build HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: model_url(&config.endpoint, config.model()),
            token: std::env::var(TOKEN_VAR).ok().filter(|t| !t.is_empty()),
        })
    }
}

#[async_trait]
impl LlmService for HuggingFaceLlm {
    async fn generate(
        &self,
        prompt: &str,
        params: GenerationParams,
    ) -> Result<String, DomainError> {
        let body = InferenceRequest {
            inputs: prompt,
            parameters: InferenceParameters {
                max_length: params.max_length,
                num_beams: params.beam_width,
            },
            options: InferenceOptions {
                wait_for_model: true,
            },
        };

        let mut request = self.client.post(&self.url).json(&body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                DomainError::timeout(format!("inference request timed out: {e}"))
            } else {
                DomainError::unavailable(format!("inference endpoint unreachable: {e}"))
            }
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| DomainError::external(e.to_string()))?;

        if !status.is_success() {
            let message = error_message(&text);
            warn!(%status, message = %message, "inference request failed");
            return Err(match status {
                StatusCode::SERVICE_UNAVAILABLE => DomainError::unavailable(message),
                _ => DomainError::external(format!("inference API returned {status}: {message}")),
            });
        }

        let generated = parse_generated(&text)?;
        debug!(len = generated.len(), "inference succeeded");
        Ok(generated)
    }
}

fn model_url(endpoint: &str, model: &str) -> String {
    format!("{}/models/{}", endpoint.trim_end_matches('/'), model)
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<InferenceError>(body)
        .map(|e| e.error)
        .unwrap_or_else(|_| body.to_string())
}

fn parse_generated(body: &str) -> Result<String, DomainError> {
    let outputs: Vec<Generated> = serde_json::from_str(body)
        .map_err(|e| DomainError::external(format!("unexpected inference response: {e}")))?;

    outputs
        .into_iter()
        .next()
        .map(|g| g.generated_text)
        .ok_or_else(|| DomainError::external("inference response had no generations"))
}
