use std::sync::Arc;
use tracing::{debug, instrument};

use crate::application::prompts::PromptTemplates;
use crate::domain::{ports::LlmService, DomainError, GenerationParams};

/// Asks the generation backend how a resume could better match a job.
pub struct SuggestionGenerator {
    llm: Arc<dyn LlmService>,
    prompts: Arc<PromptTemplates>,
    params: GenerationParams,
}

impl SuggestionGenerator {
    pub fn new(llm: Arc<dyn LlmService>, prompts: Arc<PromptTemplates>) -> Self {
        Self {
            llm,
            prompts,
            params: GenerationParams::SUGGESTION,
        }
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    #[instrument(skip_all, fields(max_length = self.params.max_length))]
    pub async fn suggest(&self, resume: &str, job_description: &str) -> Result<String, DomainError> {
        let prompt = self.prompts.render_suggestion(resume, job_description);
        let output = self.llm.generate(&prompt, self.params).await?;
        let suggestions = output.trim().to_string();
        debug!(len = suggestions.len(), "generated suggestions");
        Ok(suggestions)
    }
}

/// Rewrites a whole resume, conditioned on earlier suggestions.
pub struct ResumeRewriter {
    llm: Arc<dyn LlmService>,
    prompts: Arc<PromptTemplates>,
    params: GenerationParams,
}

impl ResumeRewriter {
    pub fn new(llm: Arc<dyn LlmService>, prompts: Arc<PromptTemplates>) -> Self {
        Self {
            llm,
            prompts,
            params: GenerationParams::REWRITE,
        }
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    #[instrument(skip_all, fields(max_length = self.params.max_length))]
    pub async fn rewrite(
        &self,
        resume: &str,
        job_description: &str,
        suggestions: &str,
    ) -> Result<String, DomainError> {
        let prompt = self
            .prompts
            .render_rewrite(resume, job_description, suggestions);
        let output = self.llm.generate(&prompt, self.params).await?;
        let rewritten = output.trim().to_string();
        debug!(before = resume.len(), after = rewritten.len(), "rewrote resume");
        Ok(rewritten)
    }
}
