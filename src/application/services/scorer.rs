use std::sync::Arc;
use tracing::{debug, instrument};

use crate::domain::{ports::EmbeddingService, DomainError, Embedding, Score};

/// Scores a resume against a job description by embedding similarity.
pub struct SimilarityScorer {
    embedding: Arc<dyn EmbeddingService>,
}

impl SimilarityScorer {
    pub fn new(embedding: Arc<dyn EmbeddingService>) -> Self {
        Self { embedding }
    }

    /// Cosine similarity of both texts, rescaled to [0, 100].
    ///
    /// Both texts always go to the backend, blank or not, so an unavailable
    /// backend is reported as an error. Identical vectors score 100.00 even
    /// when they carry no direction; a zero vector against anything else
    /// scores as orthogonal (50.00).
    #[instrument(skip_all, fields(resume_len = resume.len(), jd_len = job_description.len()))]
    pub async fn score(&self, resume: &str, job_description: &str) -> Result<Score, DomainError> {
        let (resume_emb, jd_emb) = self.embed_pair(resume, job_description).await?;
        if resume_emb.dimension() != jd_emb.dimension() {
            return Err(DomainError::external(format!(
                "embedding dimensions differ: {} vs {}",
                resume_emb.dimension(),
                jd_emb.dimension()
            )));
        }

        let cosine = if resume_emb == jd_emb {
            1.0
        } else {
            resume_emb.cosine_similarity(&jd_emb)
        };
        let score = Score::from_cosine(cosine);
        debug!(cosine, score = score.value(), "scored resume");
        Ok(score)
    }

    async fn embed_pair(
        &self,
        resume: &str,
        job_description: &str,
    ) -> Result<(Embedding, Embedding), DomainError> {
        let mut embeddings = self
            .embedding
            .embed_batch(&[resume, job_description])
            .await?
            .into_iter();

        match (embeddings.next(), embeddings.next(), embeddings.next()) {
            (Some(resume), Some(jd), None) => Ok((resume, jd)),
            _ => Err(DomainError::internal(
                "embedding backend returned an unexpected number of vectors",
            )),
        }
    }
}
