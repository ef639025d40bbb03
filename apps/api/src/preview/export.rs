//! Export payload — what the external PDF exporter needs from the core.
//!
//! Rasterizing and saving happen outside this service; the core only picks the
//! region for the active tab and names the file. No retry, no fallback.

use serde::Serialize;

use crate::document::ActiveTab;
use crate::editor::coordinator::EditorState;
use crate::preview::html::{render, render_cover_letter};
use crate::preview::projection::project;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportPayload {
    pub filename: String,
    pub tab: ActiveTab,
    /// Rendered region for the active tab.
    pub html: String,
}

/// `{fullName}_Resume.pdf` or `{fullName}_Cover_Letter.pdf`.
pub fn export_filename(full_name: &str, tab: ActiveTab) -> String {
    let suffix = match tab {
        ActiveTab::Resume => "Resume",
        ActiveTab::CoverLetter => "Cover_Letter",
    };
    format!("{full_name}_{suffix}.pdf")
}

pub fn build_export(state: &EditorState) -> ExportPayload {
    let html = match state.active_tab {
        ActiveTab::Resume => render(&project(&state.document, state.template)),
        ActiveTab::CoverLetter => render_cover_letter(&state.cover_letter.generated_content),
    };

    ExportPayload {
        filename: export_filename(&state.document.full_name, state.active_tab),
        tab: state.active_tab,
        html,
    }
}
