use serde::{Deserialize, Serialize};

const RESUME: &str = "{resume}";
const JOB_DESCRIPTION: &str = "{job_description}";
const SUGGESTIONS: &str = "{suggestions}";

const DEFAULT_SUGGESTION: &str = "You are an expert career coach. \
Given the following resume and job description, provide concise bullet \
point suggestions to improve the resume so it matches the job.\n\n\
RESUME:\n{resume}\n\nJOB DESCRIPTION:\n{job_description}\n\nSuggestions:";

const DEFAULT_REWRITE: &str = "Rewrite the resume to better match the job \
description based on the suggestions below.\n\n\
RESUME:\n{resume}\n\nJOB DESCRIPTION:\n{job_description}\n\n\
SUGGESTIONS:\n{suggestions}\n\nUPDATED RESUME:";

/// Instruction templates sent to the generation backend.
///
/// Placeholders `{resume}`, `{job_description}` and `{suggestions}` are
/// replaced with the input texts verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptTemplates {
    pub suggestion: String,
    pub rewrite: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            suggestion: DEFAULT_SUGGESTION.to_string(),
            rewrite: DEFAULT_REWRITE.to_string(),
        }
    }
}

impl PromptTemplates {
    pub fn render_suggestion(&self, resume: &str, job_description: &str) -> String {
        render(&self.suggestion, resume, job_description, "")
    }

    pub fn render_rewrite(&self, resume: &str, job_description: &str, suggestions: &str) -> String {
        render(&self.rewrite, resume, job_description, suggestions)
    }
}

// Single pass so placeholder-like text inside the inputs is left alone.
fn render(template: &str, resume: &str, job_description: &str, suggestions: &str) -> String {
    let mut out = String::with_capacity(
        template.len() + resume.len() + job_description.len() + suggestions.len(),
    );
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        let (value, len) = if tail.starts_with(RESUME) {
            (resume, RESUME.len())
        } else if tail.starts_with(JOB_DESCRIPTION) {
            (job_description, JOB_DESCRIPTION.len())
        } else if tail.starts_with(SUGGESTIONS) {
            (suggestions, SUGGESTIONS.len())
        } else {
            ("{", 1)
        };

        out.push_str(value);
        rest = &tail[len..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestion_prompt_embeds_texts() {
        let prompts = PromptTemplates::default();
        let prompt = prompts.render_suggestion("Rust dev", "Need Go");

        assert!(prompt.starts_with("You are an expert career coach. Given the following"));
        assert!(prompt.contains("RESUME:\nRust dev\n\nJOB DESCRIPTION:\nNeed Go\n\nSuggestions:"));
    }

    #[test]
    fn test_rewrite_prompt_embeds_suggestions() {
        let prompts = PromptTemplates::default();
        let prompt = prompts.render_rewrite("Rust dev", "Need Go", "- learn Go");

        assert!(prompt.starts_with("Rewrite the resume to better match"));
        assert!(prompt.ends_with("SUGGESTIONS:\n- learn Go\n\nUPDATED RESUME:"));
    }

    #[test]
    fn test_render_leaves_braces_in_inputs_untouched() {
        let prompts = PromptTemplates::default();
        let prompt = prompts.render_suggestion("uses {job_description} literally", "fn main() {}");

        assert!(prompt.contains("RESUME:\nuses {job_description} literally\n"));
        assert!(prompt.contains("JOB DESCRIPTION:\nfn main() {}\n"));
    }

    #[test]
    fn test_unknown_placeholder_kept() {
        let prompts = PromptTemplates {
            suggestion: "{name}: {resume}".to_string(),
            ..PromptTemplates::default()
        };
        assert_eq!(prompts.render_suggestion("cv", "jd"), "{name}: cv");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let prompts: PromptTemplates = serde_yaml::from_str("rewrite: \"Redo {resume}\"").unwrap();
        assert_eq!(prompts.rewrite, "Redo {resume}");
        assert_eq!(prompts.suggestion, PromptTemplates::default().suggestion);
    }

    #[test]
    fn test_shipped_prompts_file_matches_defaults() {
        let shipped: PromptTemplates =
            serde_yaml::from_str(include_str!("../../config/prompts.yaml")).unwrap();
        assert_eq!(shipped, PromptTemplates::default());
    }
}
