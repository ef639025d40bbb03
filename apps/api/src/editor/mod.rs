// Editing session: the coordinator that owns document + peer state,
// the AI collaborator boundary, and the HTTP handlers that drive both.
// All LLM calls go through llm_client — no direct API calls here.

pub mod coordinator;
pub mod enhancer;
pub mod handlers;
pub mod prompts;

pub use coordinator::{Coordinator, CoordinatorError, EditorState};
pub use enhancer::LlmEnhancer;
