mod embedding;
mod llm;

pub use embedding::EmbeddingService;
pub use llm::LlmService;
