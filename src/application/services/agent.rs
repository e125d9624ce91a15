use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::application::services::ResumeMatcher;
use crate::domain::{DomainError, ImprovementOutcome};

pub const DEFAULT_TARGET_SCORE: f64 = 90.0;
pub const DEFAULT_MAX_ITERATIONS: usize = 3;

/// Iteratively rewrites a resume until it scores at least `target_score`
/// against the job description or `max_iterations` passes have run.
pub struct ResumeAgent {
    matcher: Arc<ResumeMatcher>,
    target_score: f64,
    max_iterations: usize,
}

impl ResumeAgent {
    pub fn new(matcher: Arc<ResumeMatcher>) -> Self {
        Self {
            matcher,
            target_score: DEFAULT_TARGET_SCORE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    pub fn with_target_score(mut self, target_score: f64) -> Self {
        self.target_score = target_score;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn target_score(&self) -> f64 {
        self.target_score
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Runs the loop, then always rescores the final resume and regenerates
    /// suggestions for it, even when the target was met on the first pass.
    #[instrument(skip_all, fields(target = self.target_score, max_iterations = self.max_iterations))]
    pub async fn run(
        &self,
        resume: &str,
        job_description: &str,
    ) -> Result<ImprovementOutcome, DomainError> {
        let mut current = resume.to_string();
        let mut score_history = Vec::new();
        let mut reached_target = false;

        for iteration in 1..=self.max_iterations {
            let score = self.matcher.score(&current, job_description).await?;
            score_history.push(score);
            info!(iteration, score = score.value(), "scored resume");

            if score.meets(self.target_score) {
                reached_target = true;
                break;
            }

            let suggestions = self.matcher.suggest(&current, job_description).await?;
            current = self
                .matcher
                .rewrite(&current, job_description, &suggestions)
                .await?;
            debug!(iteration, len = current.len(), "resume rewritten");
        }

        let score = self.matcher.score(&current, job_description).await?;
        let suggestions = self.matcher.suggest(&current, job_description).await?;
        info!(
            score = score.value(),
            iterations = score_history.len(),
            reached_target,
            "improvement finished"
        );

        Ok(ImprovementOutcome {
            score,
            resume: current,
            suggestions,
            iterations: score_history.len(),
            reached_target,
            score_history,
        })
    }
}
