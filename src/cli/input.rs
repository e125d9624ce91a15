use anyhow::{Context, Result};
use std::io::{self, Read};
use std::path::Path;

use crate::domain::{Document, DocumentKind};

/// Reads a document from `path`, or from stdin after printing `prompt` to
/// stderr when no path is given.
pub fn read_document(path: Option<&Path>, kind: DocumentKind, prompt: &str) -> Result<Document> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {} file {}", kind.as_str(), path.display()))?,
        None => {
            eprintln!("{prompt}");
            read_text(io::stdin().lock())
                .with_context(|| format!("cannot read {} from stdin", kind.as_str()))?
        }
    };

    Ok(Document::new(kind, text)?)
}

pub fn read_text(mut reader: impl Read) -> io::Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}
