use std::time::Duration;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::design::PaperDimensions;
use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::preview::PreviewSession;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    pub resume: Resume,
    /// Measured preview container width in px; absent before first layout.
    #[serde(default)]
    pub container_width: Option<f64>,
    #[serde(default)]
    pub viewport_width: Option<f64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResponse {
    pub template: String,
    pub html: String,
    pub page: PaperDimensions,
    pub scale: f64,
}

/// POST /api/v1/preview
/// Renders a resume through its selected template and computes the
/// fit-to-viewport scale for the caller's measured container. Runs the
/// same session pipeline the editor uses; the debounce window is zero
/// here because a request already carries one coalesced edit.
pub async fn handle_preview(
    State(state): State<AppState>,
    Json(req): Json<PreviewRequest>,
) -> Result<Json<PreviewResponse>, AppError> {
    let mut session =
        PreviewSession::new(state.registry.clone(), state.preview_layout, Duration::ZERO);
    session.resize(
        req.container_width.unwrap_or(0.0),
        req.viewport_width.unwrap_or(0.0),
    );
    session.update_resume(req.resume);
    session.settle().await;
    let frame = session
        .current()
        .ok_or_else(|| anyhow::anyhow!("preview pipeline produced no frame"))?;
    Ok(Json(PreviewResponse {
        template: frame.view.template.clone(),
        html: frame.html.clone(),
        page: frame.page,
        scale: frame.scale,
    }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewConfigResponse {
    pub debounce_ms: u64,
    pub layout: crate::preview::PreviewLayout,
}

/// GET /api/v1/preview/config
/// Client-side tunables: how long to coalesce edits before asking for a
/// fresh preview, and the breakpoints the fit scaler assumes.
pub async fn handle_preview_config(State(state): State<AppState>) -> Json<PreviewConfigResponse> {
    Json(PreviewConfigResponse {
        debounce_ms: state.config.preview_debounce_ms,
        layout: state.preview_layout,
    })
}

#[derive(Serialize)]
pub struct TemplateListResponse {
    pub templates: Vec<&'static str>,
}

/// GET /api/v1/templates
pub async fn handle_list_templates(State(state): State<AppState>) -> Json<TemplateListResponse> {
    Json(TemplateListResponse {
        templates: state.registry.keys(),
    })
}
