//! Axum route handlers for the editing session.
//!
//! Enhancement and cover-letter generation run on their own task so a client
//! disconnect cannot cancel them halfway and leave a loading flag set.

use std::future::Future;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::Deserialize;

use crate::document::{Action, ActiveTab, FieldAddress, ResumeDocument, Template};
use crate::editor::{coordinator::CoverLetterState, EditorState};
use crate::errors::AppError;
use crate::preview::{build_export, html, project, ExportPayload, ResumeView};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TemplateRequest {
    pub template: Template,
}

#[derive(Debug, Deserialize)]
pub struct TabRequest {
    pub tab: ActiveTab,
}

#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    pub address: FieldAddress,
    /// Text to enhance; defaults to the field's current value.
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterDetails {
    pub job_title: String,
    pub company: String,
}

#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    /// Overrides the session's selected template for this request only.
    pub template: Option<Template>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/session
pub async fn handle_get_session(State(state): State<AppState>) -> Json<EditorState> {
    Json(state.editor.snapshot().await)
}

/// GET /api/v1/document
pub async fn handle_get_document(State(state): State<AppState>) -> Json<ResumeDocument> {
    Json(state.editor.document().await)
}

/// POST /api/v1/document/actions
///
/// Unknown action types are accepted and leave the document unchanged.
pub async fn handle_dispatch(
    State(state): State<AppState>,
    Json(action): Json<Action>,
) -> Json<ResumeDocument> {
    Json(state.editor.dispatch(action).await)
}

/// PUT /api/v1/session/template
pub async fn handle_set_template(
    State(state): State<AppState>,
    Json(req): Json<TemplateRequest>,
) -> StatusCode {
    state.editor.set_template(req.template).await;
    StatusCode::NO_CONTENT
}

/// PUT /api/v1/session/tab
pub async fn handle_set_tab(
    State(state): State<AppState>,
    Json(req): Json<TabRequest>,
) -> StatusCode {
    state.editor.set_active_tab(req.tab).await;
    StatusCode::NO_CONTENT
}

/// POST /api/v1/enhance
///
/// Returns once the enhanced text has been written into the document.
pub async fn handle_enhance(
    State(state): State<AppState>,
    Json(req): Json<EnhanceRequest>,
) -> Result<Json<ResumeDocument>, AppError> {
    let editor = state.editor.clone();
    let document = run_to_completion(async move {
        editor.request_enhancement(req.address, req.text).await
    })
    .await??;
    Ok(Json(document))
}

/// PUT /api/v1/cover-letter
pub async fn handle_set_cover_letter(
    State(state): State<AppState>,
    Json(req): Json<CoverLetterDetails>,
) -> Json<CoverLetterState> {
    Json(
        state
            .editor
            .set_cover_letter_details(req.job_title, req.company)
            .await,
    )
}

/// POST /api/v1/cover-letter/generate
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
) -> Result<Json<CoverLetterState>, AppError> {
    let editor = state.editor.clone();
    let letter = run_to_completion(async move { editor.generate_cover_letter().await }).await??;
    Ok(Json(letter))
}

/// GET /api/v1/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Query(params): Query<PreviewQuery>,
) -> Json<ResumeView> {
    let session = state.editor.snapshot().await;
    let template = params.template.unwrap_or(session.template);
    Json(project(&session.document, template))
}

/// GET /api/v1/preview/html
pub async fn handle_preview_html(
    State(state): State<AppState>,
    Query(params): Query<PreviewQuery>,
) -> Html<String> {
    let session = state.editor.snapshot().await;
    let template = params.template.unwrap_or(session.template);
    Html(html::render(&project(&session.document, template)))
}

/// GET /api/v1/export
///
/// Filename and rendered region for the active tab; the client rasterizes it.
pub async fn handle_export(State(state): State<AppState>) -> Json<ExportPayload> {
    Json(build_export(&state.editor.snapshot().await))
}

async fn run_to_completion<T, F>(task: F) -> Result<T, AppError>
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    tokio::spawn(task)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Editor task failed: {e}")))
}
