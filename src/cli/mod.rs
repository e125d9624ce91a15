//! Command-line surface: arguments, input reading and report rendering.

pub mod args;
pub mod input;
pub mod report;

pub use args::Args;
pub use input::read_document;
pub use report::{render_json, render_match, render_outcome};
