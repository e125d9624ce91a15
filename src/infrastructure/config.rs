use serde::Deserialize;
use std::path::Path;

use crate::application::services::{DEFAULT_MAX_ITERATIONS, DEFAULT_TARGET_SCORE};
use crate::application::PromptTemplates;
use crate::domain::{DomainError, GenerationParams};

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub config: Config,
    pub prompts: PromptTemplates,
}

impl AppConfig {
    /// Loads settings and prompt templates from optional YAML files, then
    /// applies environment overrides. Missing files fall back to defaults.
    pub fn load(config_path: Option<&Path>, prompts_path: Option<&Path>) -> Result<Self, DomainError> {
        let mut config = match config_path {
            Some(path) => Config::from_yaml(&read_file(path)?)?,
            None => Config::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;

        let prompts = match prompts_path {
            Some(path) => serde_yaml::from_str(&read_file(path)?)
                .map_err(|e| DomainError::configuration(format!("{}: {e}", path.display())))?,
            None => PromptTemplates::default(),
        };

        Ok(Self { config, prompts })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub llm: LlmConfig,
    pub embedding: EmbeddingConfig,
    pub generation: GenerationConfig,
    pub improvement: ImprovementConfig,
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self, DomainError> {
        serde_yaml::from_str(yaml).map_err(|e| DomainError::configuration(e.to_string()))
    }

    /// Overrides provider and model choices from `RESUME_TUNER_*` variables.
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<(), DomainError> {
        if let Some(provider) = var("RESUME_TUNER_LLM_PROVIDER") {
            self.llm.provider = LlmProvider::parse(&provider)?;
        }
        if let Some(model) = var("RESUME_TUNER_LLM_MODEL") {
            self.llm.model = Some(model);
        }
        if let Some(provider) = var("RESUME_TUNER_EMBEDDING_PROVIDER") {
            self.embedding.provider = EmbeddingProvider::parse(&provider)?;
        }
        if let Some(model) = var("RESUME_TUNER_EMBEDDING_MODEL") {
            self.embedding.model = model;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    #[default]
    Anthropic,
    OpenAi,
    HuggingFace,
}

impl LlmProvider {
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value.trim().to_lowercase().as_str() {
            "anthropic" => Ok(Self::Anthropic),
            "openai" => Ok(Self::OpenAi),
            "huggingface" => Ok(Self::HuggingFace),
            other => Err(DomainError::configuration(format!(
                "unknown llm provider '{other}'"
            ))),
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            Self::Anthropic => "claude-3-5-haiku-latest",
            Self::OpenAi => "gpt-4o-mini",
            Self::HuggingFace => "google/flan-t5-base",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub provider: LlmProvider,
    /// Falls back to the provider's default model when unset.
    pub model: Option<String>,
    pub timeout_seconds: u64,
    /// Base URL of the text2text inference API.
    pub endpoint: String,
}

impl LlmConfig {
    pub fn model(&self) -> &str {
        self.model
            .as_deref()
            .unwrap_or_else(|| self.provider.default_model())
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: LlmProvider::default(),
            model: None,
            timeout_seconds: 120,
            endpoint: "https://api-inference.huggingface.co".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingProvider {
    OpenAi,
    #[default]
    Hashing,
}

impl EmbeddingProvider {
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value.trim().to_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "hashing" => Ok(Self::Hashing),
            other => Err(DomainError::configuration(format!(
                "unknown embedding provider '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    pub provider: EmbeddingProvider,
    pub model: String,
    /// Overrides the vector size implied by the provider and model.
    pub dimension: Option<usize>,
    /// Longer inputs are cut to this many words before embedding.
    pub max_input_words: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: EmbeddingProvider::default(),
            model: "text-embedding-3-small".to_string(),
            dimension: None,
            max_input_words: 6000,
        }
    }
}

impl EmbeddingConfig {
    pub fn dimension(&self) -> usize {
        if let Some(dimension) = self.dimension {
            return dimension;
        }
        match self.provider {
            EmbeddingProvider::Hashing => 384,
            EmbeddingProvider::OpenAi => match self.model.as_str() {
                "text-embedding-3-large" => 3072,
                _ => 1536,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub suggestion: GenerationParams,
    pub rewrite: GenerationParams,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            suggestion: GenerationParams::SUGGESTION,
            rewrite: GenerationParams::REWRITE,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ImprovementConfig {
    pub target_score: f64,
    pub max_iterations: usize,
}

impl Default for ImprovementConfig {
    fn default() -> Self {
        Self {
            target_score: DEFAULT_TARGET_SCORE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

fn read_file(path: &Path) -> Result<String, DomainError> {
    std::fs::read_to_string(path)
        .map_err(|e| DomainError::configuration(format!("cannot read {}: {e}", path.display())))
}
