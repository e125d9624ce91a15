mod document;
mod embedding;
mod generation;
mod outcome;
mod score;

pub use document::{Document, DocumentKind};
pub use embedding::Embedding;
pub use generation::GenerationParams;
pub use outcome::{ImprovementOutcome, MatchReport};
pub use score::Score;
