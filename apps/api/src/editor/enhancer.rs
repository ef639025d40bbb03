//! Text enhancement collaborator — the opaque boundary the coordinator awaits.
//!
//! Contract: implementations never fail. On any error they return a fixed,
//! human-readable message, which the coordinator writes into the document as if
//! it were the enhanced text.
//!
//! `AppState` holds an `Arc<dyn TextEnhancer>`; tests swap in stubs.

use async_trait::async_trait;
use tracing::{error, info};

use crate::document::{ResumeDocument, SectionLabel};
use crate::editor::prompts::{
    COVER_LETTER_FAILURE_TEXT, COVER_LETTER_PROMPT_TEMPLATE, ENHANCE_FAILURE_TEXT,
    ENHANCE_PROMPT_TEMPLATE,
};
use crate::llm_client::prompts::{NO_PLACEHOLDERS_INSTRUCTION, PLAIN_TEXT_SYSTEM};
use crate::llm_client::LlmClient;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait TextEnhancer: Send + Sync {
    /// Rewrites `text` for the given resume section.
    async fn enhance(&self, text: &str, section: SectionLabel) -> String;

    /// Writes a cover letter tailored to `job_title` at `company` from the resume.
    async fn generate_cover_letter(
        &self,
        document: &ResumeDocument,
        job_title: &str,
        company: &str,
    ) -> String;
}

// ────────────────────────────────────────────────────────────────────────────
// LlmEnhancer — production implementation
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmEnhancer {
    llm: LlmClient,
}

impl LlmEnhancer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl TextEnhancer for LlmEnhancer {
    async fn enhance(&self, text: &str, section: SectionLabel) -> String {
        let prompt = build_enhance_prompt(text, section);
        match self.llm.complete(&prompt, PLAIN_TEXT_SYSTEM).await {
            Ok(enhanced) => {
                info!("Enhanced {} text ({} chars)", section, enhanced.len());
                enhanced
            }
            Err(e) => {
                error!("Error enhancing with AI: {e}");
                ENHANCE_FAILURE_TEXT.to_string()
            }
        }
    }

    async fn generate_cover_letter(
        &self,
        document: &ResumeDocument,
        job_title: &str,
        company: &str,
    ) -> String {
        let prompt = build_cover_letter_prompt(document, job_title, company);
        match self.llm.complete(&prompt, PLAIN_TEXT_SYSTEM).await {
            Ok(letter) => {
                info!("Generated cover letter for {job_title} at {company}");
                letter
            }
            Err(e) => {
                error!("Error generating cover letter: {e}");
                COVER_LETTER_FAILURE_TEXT.to_string()
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Prompt builders
// ────────────────────────────────────────────────────────────────────────────

pub(crate) fn build_enhance_prompt(text: &str, section: SectionLabel) -> String {
    ENHANCE_PROMPT_TEMPLATE
        .replace("{section}", section.as_str())
        .replace("{text}", text)
}

pub(crate) fn build_cover_letter_prompt(
    document: &ResumeDocument,
    job_title: &str,
    company: &str,
) -> String {
    let experience = document
        .experience
        .iter()
        .map(|e| format!("{} at {}: {}", e.job_title, e.company, e.description))
        .collect::<Vec<_>>()
        .join("\n");

    COVER_LETTER_PROMPT_TEMPLATE
        .replace("{job_title}", job_title)
        .replace("{company}", company)
        .replace("{no_placeholders}", NO_PLACEHOLDERS_INSTRUCTION)
        .replace("{full_name}", &document.full_name)
        .replace("{email}", &document.email)
        .replace("{phone}", &document.phone)
        .replace("{summary}", &document.summary)
        .replace("{skills}", &document.skills)
        .replace("{experience}", &experience)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enhance_prompt_carries_section_and_text() {
        let prompt = build_enhance_prompt("Did things", SectionLabel::ExperienceDescription);
        assert!(prompt.contains("resume's \"Experience Description\" section"));
        assert!(prompt.contains("\"Did things\""));
        assert!(!prompt.contains("{section}"));
    }

    #[test]
    fn test_cover_letter_prompt_includes_resume_data() {
        let doc = ResumeDocument::sample();
        let prompt = build_cover_letter_prompt(&doc, "Program Lead", "Globex");
        assert!(prompt.contains("\"Program Lead\" position at \"Globex\""));
        assert!(prompt.contains("- Name: Jane Doe"));
        assert!(prompt.contains("Project Manager at Tech Solutions Inc.: - Led"));
        assert!(prompt.contains("\nProject Coordinator at Innovate Corp.: "));
        assert!(prompt.contains("[Your Name]"));
        assert!(!prompt.contains("{experience}"));
        assert!(!prompt.contains("{no_placeholders}"));
    }

    #[tokio::test]
    async fn test_llm_failure_becomes_fixed_text() {
        let enhancer = LlmEnhancer::new(LlmClient::new(None));
        let enhanced = enhancer.enhance("text", SectionLabel::Summary).await;
        assert_eq!(enhanced, ENHANCE_FAILURE_TEXT);

        let letter = enhancer
            .generate_cover_letter(&ResumeDocument::sample(), "PM", "Acme")
            .await;
        assert_eq!(letter, COVER_LETTER_FAILURE_TEXT);
    }
}
