//! Editor coordinator — owns the whole editing session and is the only code that
//! dispatches actions into the reducer.
//!
//! The session is one `tokio::sync::Mutex<EditorState>`. Every mutation is a short
//! critical section; the lock is never held while the enhancement collaborator is
//! being awaited, so requests for different fields overlap freely.
//!
//! Enhancement sequence (one `async fn`, awaitable by callers):
//!   mark loading → await collaborator → dispatch overwrite → clear loading
//!
//! A request for an address that is already loading is rejected up front instead
//! of racing the first one to the finish.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::document::{reduce, Action, ActiveTab, FieldAddress, ResumeDocument, Template};
use crate::editor::enhancer::TextEnhancer;
use crate::editor::prompts::COVER_LETTER_PLACEHOLDER;

/// Loading-registry key used for the single cover-letter generation target.
const COVER_LETTER_KEY: &str = "coverLetter";

// ────────────────────────────────────────────────────────────────────────────
// State
// ────────────────────────────────────────────────────────────────────────────

/// Per-field in-flight flags, keyed by the canonical field-address string.
/// Keys are added on first use and never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LoadingRegistry(BTreeMap<String, bool>);

impl LoadingRegistry {
    pub fn is_loading(&self, address: &FieldAddress) -> bool {
        self.get(&address.to_string())
    }

    /// Flag for a raw address string; absent keys read as `false`.
    pub fn get(&self, key: &str) -> bool {
        self.0.get(key).copied().unwrap_or(false)
    }

    #[cfg(test)]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    fn set(&mut self, address: &FieldAddress, loading: bool) {
        self.0.insert(address.to_string(), loading);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterState {
    pub job_title: String,
    pub company: String,
    pub generated_content: String,
    pub is_loading: bool,
    pub generated_at: Option<DateTime<Utc>>,
}

impl Default for CoverLetterState {
    fn default() -> Self {
        Self {
            job_title: String::new(),
            company: String::new(),
            generated_content: COVER_LETTER_PLACEHOLDER.to_string(),
            is_loading: false,
            generated_at: None,
        }
    }
}

/// Everything one editing session holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorState {
    pub document: ResumeDocument,
    pub template: Template,
    pub active_tab: ActiveTab,
    pub loading: LoadingRegistry,
    pub cover_letter: CoverLetterState,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoordinatorError {
    #[error("Please provide both a Job Title and Company Name.")]
    MissingCoverLetterDetails,

    #[error("A request for '{0}' is already in progress")]
    AlreadyInFlight(String),

    #[error("No field at address '{0}'")]
    UnknownField(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Coordinator
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct Coordinator {
    state: Arc<Mutex<EditorState>>,
    enhancer: Arc<dyn TextEnhancer>,
}

impl Coordinator {
    /// A session starting from the sample document.
    pub fn new(enhancer: Arc<dyn TextEnhancer>) -> Self {
        Self::with_document(ResumeDocument::sample(), enhancer)
    }

    pub fn with_document(document: ResumeDocument, enhancer: Arc<dyn TextEnhancer>) -> Self {
        Self {
            state: Arc::new(Mutex::new(EditorState {
                document,
                ..EditorState::default()
            })),
            enhancer,
        }
    }

    pub async fn snapshot(&self) -> EditorState {
        self.state.lock().await.clone()
    }

    pub async fn document(&self) -> ResumeDocument {
        self.state.lock().await.document.clone()
    }

    /// Applies one action and returns the resulting document. Actions are applied
    /// strictly in the order their calls acquire the session lock.
    pub async fn dispatch(&self, action: Action) -> ResumeDocument {
        let mut state = self.state.lock().await;
        debug!("Dispatching {:?}", action);
        state.document = reduce(&state.document, &action);
        state.document.clone()
    }

    pub async fn set_template(&self, template: Template) {
        self.state.lock().await.template = template;
        debug!("Template set to {:?}", template);
    }

    pub async fn set_active_tab(&self, tab: ActiveTab) {
        self.state.lock().await.active_tab = tab;
        debug!("Active tab set to {:?}", tab);
    }

    pub async fn set_cover_letter_details(
        &self,
        job_title: String,
        company: String,
    ) -> CoverLetterState {
        let mut state = self.state.lock().await;
        state.cover_letter.job_title = job_title;
        state.cover_letter.company = company;
        state.cover_letter.clone()
    }

    /// Runs the enhancement sequence for one field and returns the document as it
    /// stands after the result was applied.
    ///
    /// `current_text` defaults to the field's value in the document at call time.
    /// If the entry is removed while the call is in flight, the overwrite is a no-op
    /// and the flag is still cleared.
    pub async fn request_enhancement(
        &self,
        address: FieldAddress,
        current_text: Option<String>,
    ) -> Result<ResumeDocument, CoordinatorError> {
        let text = {
            let mut state = self.state.lock().await;
            if state.loading.is_loading(&address) {
                warn!("Enhancement for {address} already in flight; rejecting");
                return Err(CoordinatorError::AlreadyInFlight(address.to_string()));
            }
            let text = match (current_text, address.read(&state.document)) {
                (Some(text), _) => text,
                (None, Some(text)) => text.to_string(),
                (None, None) => return Err(CoordinatorError::UnknownField(address.to_string())),
            };
            state.loading.set(&address, true);
            text
        };

        let section = address.section_label();
        info!("Enhancing {address} as {section}");
        let enhanced = self.enhancer.enhance(&text, section).await;

        let mut state = self.state.lock().await;
        state.document = reduce(&state.document, &address.overwrite_action(enhanced));
        state.loading.set(&address, false);
        info!("Enhancement for {address} applied");
        Ok(state.document.clone())
    }

    /// Generates the cover letter from the current document and stored job details.
    ///
    /// Blank job title or company is rejected before any call is made.
    pub async fn generate_cover_letter(&self) -> Result<CoverLetterState, CoordinatorError> {
        let (document, job_title, company) = {
            let mut state = self.state.lock().await;
            let letter = &state.cover_letter;
            if letter.job_title.trim().is_empty() || letter.company.trim().is_empty() {
                return Err(CoordinatorError::MissingCoverLetterDetails);
            }
            if letter.is_loading {
                return Err(CoordinatorError::AlreadyInFlight(
                    COVER_LETTER_KEY.to_string(),
                ));
            }
            let request = (
                state.document.clone(),
                letter.job_title.clone(),
                letter.company.clone(),
            );
            state.cover_letter.is_loading = true;
            request
        };

        info!("Generating cover letter for {job_title} at {company}");
        let content = self
            .enhancer
            .generate_cover_letter(&document, &job_title, &company)
            .await;

        let mut state = self.state.lock().await;
        state.cover_letter.generated_content = content;
        state.cover_letter.generated_at = Some(Utc::now());
        state.cover_letter.is_loading = false;
        Ok(state.cover_letter.clone())
    }
}
