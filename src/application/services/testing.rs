//! Deterministic backends for exercising the services without any model.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::domain::{
    ports::{EmbeddingService, LlmService},
    DomainError, Embedding, GenerationParams,
};

/// One dimension per keyword, set when the text mentions it.
pub struct KeywordEmbedding {
    keywords: Vec<String>,
    batch_calls: AtomicUsize,
    single_calls: AtomicUsize,
}

impl KeywordEmbedding {
    pub fn new(keywords: &[&str]) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            batch_calls: AtomicUsize::new(0),
            single_calls: AtomicUsize::new(0),
        }
    }

    pub fn batch_calls(&self) -> usize {
        self.batch_calls.load(Ordering::SeqCst)
    }

    pub fn single_calls(&self) -> usize {
        self.single_calls.load(Ordering::SeqCst)
    }

    fn vectorize(&self, text: &str) -> Embedding {
        let text = text.to_lowercase();
        self.keywords
            .iter()
            .map(|k| if text.contains(k.as_str()) { 1.0 } else { 0.0 })
            .collect::<Vec<f32>>()
            .into()
    }
}

#[async_trait]
impl EmbeddingService for KeywordEmbedding {
    async fn embed(&self, text: &str) -> Result<Embedding, DomainError> {
        self.single_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.vectorize(text))
    }

    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, DomainError> {
        self.batch_calls.fetch_add(1, Ordering::SeqCst);
        Ok(texts.iter().map(|t| self.vectorize(t)).collect())
    }

    fn dimension(&self) -> usize {
        self.keywords.len()
    }
}

pub struct UnavailableEmbedding;

#[async_trait]
impl EmbeddingService for UnavailableEmbedding {
    async fn embed(&self, _text: &str) -> Result<Embedding, DomainError> {
        Err(DomainError::unavailable("embedding model not loaded"))
    }

    async fn embed_batch(&self, _texts: &[&str]) -> Result<Vec<Embedding>, DomainError> {
        Err(DomainError::unavailable("embedding model not loaded"))
    }

    fn dimension(&self) -> usize {
        0
    }
}

/// Answers suggestion calls with a fixed text and rewrite calls with the
/// scripted resumes in order, repeating the last one when exhausted.
/// Rewrite calls are recognised by the closing line of the rewrite prompt.
pub struct ScriptedLlm {
    suggestion: String,
    rewrites: Vec<String>,
    calls: Mutex<Vec<(String, GenerationParams)>>,
}

impl ScriptedLlm {
    pub fn new(suggestion: &str, rewrites: &[&str]) -> Self {
        Self {
            suggestion: suggestion.to_string(),
            rewrites: rewrites.iter().map(|r| r.to_string()).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn suggest_calls(&self) -> usize {
        self.suggest_params().len()
    }

    pub fn rewrite_calls(&self) -> usize {
        self.rewrite_params().len()
    }

    /// Bounds received by each suggestion call, in call order.
    pub fn suggest_params(&self) -> Vec<GenerationParams> {
        self.params_where(|prompt| !is_rewrite(prompt))
    }

    /// Bounds received by each rewrite call, in call order.
    pub fn rewrite_params(&self) -> Vec<GenerationParams> {
        self.params_where(is_rewrite)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(prompt, _)| prompt.clone())
            .collect()
    }

    fn params_where(&self, pred: impl Fn(&str) -> bool) -> Vec<GenerationParams> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(prompt, _)| pred(prompt))
            .map(|(_, params)| *params)
            .collect()
    }
}

fn is_rewrite(prompt: &str) -> bool {
    prompt.ends_with("UPDATED RESUME:")
}

#[async_trait]
impl LlmService for ScriptedLlm {
    async fn generate(
        &self,
        prompt: &str,
        params: GenerationParams,
    ) -> Result<String, DomainError> {
        let mut calls = self.calls.lock().unwrap();
        calls.push((prompt.to_string(), params));

        if !is_rewrite(prompt) {
            return Ok(format!("  {}\n", self.suggestion));
        }

        let done = calls.iter().filter(|(p, _)| is_rewrite(p)).count();
        let text = self
            .rewrites
            .get(done - 1)
            .or_else(|| self.rewrites.last())
            .cloned()
            .unwrap_or_default();
        Ok(format!("\n{text}  "))
    }
}

pub struct FailingLlm;

#[async_trait]
impl LlmService for FailingLlm {
    async fn generate(
        &self,
        _prompt: &str,
        _params: GenerationParams,
    ) -> Result<String, DomainError> {
        Err(DomainError::external("generation backend returned 500"))
    }
}
