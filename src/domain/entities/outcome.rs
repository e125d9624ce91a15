use serde::{Deserialize, Serialize};

use super::Score;

/// Result of scoring a resume once and asking for suggestions once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub score: Score,
    pub suggestions: String,
}

/// Result of the improvement loop. Only meaningful once the loop has exited.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImprovementOutcome {
    /// Score of `resume`, recomputed after the loop.
    pub score: Score,
    pub resume: String,
    /// Suggestions for `resume`, regenerated after the loop.
    pub suggestions: String,
    /// Loop passes entered, including one that exited early.
    pub iterations: usize,
    pub reached_target: bool,
    /// Scores observed at the top of each loop pass.
    pub score_history: Vec<Score>,
}

impl ImprovementOutcome {
    pub fn rewrites(&self) -> usize {
        if self.reached_target {
            self.iterations.saturating_sub(1)
        } else {
            self.iterations
        }
    }
}
