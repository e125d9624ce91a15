use serde::{Deserialize, Serialize};
use std::fmt;

/// Relevance of a resume to a job description, in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    pub const MAX: f64 = 100.0;

    /// Rescales a cosine similarity from [-1, 1] to [0, 100], rounded to 2 decimals.
    pub fn from_cosine(cosine: f32) -> Self {
        let cosine = f64::from(cosine).clamp(-1.0, 1.0);
        let normalized = (cosine + 1.0) / 2.0 * Self::MAX;
        Self((normalized * 100.0).round() / 100.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn meets(&self, target: f64) -> bool {
        self.0 >= target
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
