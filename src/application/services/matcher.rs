use std::sync::Arc;
use tracing::{info, instrument};

use crate::application::prompts::PromptTemplates;
use crate::application::services::{ResumeRewriter, SimilarityScorer, SuggestionGenerator};
use crate::domain::{
    ports::{EmbeddingService, LlmService},
    DomainError, GenerationParams, MatchReport, Score,
};

/// Scores resumes and generates suggestions and rewrites.
///
/// Owns its backend handles for its whole lifetime; the suggestion and
/// rewrite calls share one generation backend.
pub struct ResumeMatcher {
    scorer: SimilarityScorer,
    suggester: SuggestionGenerator,
    rewriter: ResumeRewriter,
}

impl ResumeMatcher {
    pub fn new(
        embedding: Arc<dyn EmbeddingService>,
        llm: Arc<dyn LlmService>,
        prompts: PromptTemplates,
    ) -> Self {
        let prompts = Arc::new(prompts);
        Self {
            scorer: SimilarityScorer::new(embedding),
            suggester: SuggestionGenerator::new(llm.clone(), prompts.clone()),
            rewriter: ResumeRewriter::new(llm, prompts),
        }
    }

    pub fn with_defaults(embedding: Arc<dyn EmbeddingService>, llm: Arc<dyn LlmService>) -> Self {
        Self::new(embedding, llm, PromptTemplates::default())
    }

    pub fn with_suggestion_params(mut self, params: GenerationParams) -> Self {
        self.suggester = self.suggester.with_params(params);
        self
    }

    pub fn with_rewrite_params(mut self, params: GenerationParams) -> Self {
        self.rewriter = self.rewriter.with_params(params);
        self
    }

    pub async fn score(&self, resume: &str, job_description: &str) -> Result<Score, DomainError> {
        self.scorer.score(resume, job_description).await
    }

    pub async fn suggest(&self, resume: &str, job_description: &str) -> Result<String, DomainError> {
        self.suggester.suggest(resume, job_description).await
    }

    pub async fn rewrite(
        &self,
        resume: &str,
        job_description: &str,
        suggestions: &str,
    ) -> Result<String, DomainError> {
        self.rewriter
            .rewrite(resume, job_description, suggestions)
            .await
    }

    /// Scores the resume once and asks for suggestions once.
    #[instrument(skip_all)]
    pub async fn match_resume(
        &self,
        resume: &str,
        job_description: &str,
    ) -> Result<MatchReport, DomainError> {
        let score = self.score(resume, job_description).await?;
        let suggestions = self.suggest(resume, job_description).await?;
        info!(score = score.value(), "matched resume");
        Ok(MatchReport { score, suggestions })
    }
}
