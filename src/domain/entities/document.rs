use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Resume,
    JobDescription,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resume => "resume",
            Self::JobDescription => "job description",
        }
    }
}

/// Raw text of a resume or a job description. No structure is imposed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    kind: DocumentKind,
    text: String,
}

impl Document {
    pub fn new(kind: DocumentKind, text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "{} text is empty",
                kind.as_str()
            )));
        }
        Ok(Self { kind, text })
    }

    pub fn resume(text: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(DocumentKind::Resume, text)
    }

    pub fn job_description(text: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(DocumentKind::JobDescription, text)
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
