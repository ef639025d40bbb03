// Shared prompt fragments.
// Each editor feature that calls the LLM defines its own prompt templates alongside it
// (see editor/prompts.rs). This file holds the cross-cutting pieces.

/// System prompt for every plain-text writing call.
pub const PLAIN_TEXT_SYSTEM: &str = "You are an expert resume and career-document writer. \
    Respond with the requested text only. \
    Do NOT use markdown formatting or code fences. \
    Do NOT include introductions, explanations, or apologies.";

/// Appended to prompts whose output is pasted straight into the user's document.
pub const NO_PLACEHOLDERS_INSTRUCTION: &str =
    "Do not include placeholders like '[Your Name]' or '[Date]'.";
