use serde::{Deserialize, Serialize};

/// Bounds passed to a text-generation backend for one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Maximum output length in tokens.
    pub max_length: u32,
    /// Number of candidate sequences kept by beam search.
    pub beam_width: u32,
}

impl GenerationParams {
    pub const SUGGESTION: Self = Self::new(256, 4);
    pub const REWRITE: Self = Self::new(512, 4);

    pub const fn new(max_length: u32, beam_width: u32) -> Self {
        Self {
            max_length,
            beam_width,
        }
    }
}
