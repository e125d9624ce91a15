mod anthropic;
mod huggingface;
mod openai;

pub use anthropic::AnthropicLlm;
pub use huggingface::HuggingFaceLlm;
pub use openai::OpenAiLlm;
