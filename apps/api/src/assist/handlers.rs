use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::assist::{parser, writer};
use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseTextRequest {
    pub text: String,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeResponse {
    pub resume: Resume,
}

const DEFAULT_IMPORT_TITLE: &str = "Imported Resume";

/// POST /api/v1/assist/parse/text
pub async fn handle_parse_text(
    State(state): State<AppState>,
    Json(req): Json<ParseTextRequest>,
) -> Result<Json<ResumeResponse>, AppError> {
    let title = req.title.as_deref().unwrap_or(DEFAULT_IMPORT_TITLE);
    let resume = parser::parse_from_text(&state.llm, &req.text, title).await?;
    Ok(Json(ResumeResponse { resume }))
}

/// POST /api/v1/assist/parse/file
///
/// Multipart form with a `file` part (PDF bytes) and an optional `title`
/// text part.
pub async fn handle_parse_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeResponse>, AppError> {
    let mut bytes: Option<bytes::Bytes> = None;
    let mut title = DEFAULT_IMPORT_TITLE.to_string();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart request: {e}")))?
    {
        match field.name() {
            Some("file") => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("could not read upload: {e}")))?;
                bytes = Some(data);
            }
            Some("title") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("could not read title: {e}")))?;
                if !text.trim().is_empty() {
                    title = text;
                }
            }
            _ => {}
        }
    }

    let bytes = bytes.ok_or_else(|| AppError::Validation("missing file part".to_string()))?;
    let resume = parser::parse_from_file(&state.llm, &bytes, &title).await?;
    Ok(Json(ResumeResponse { resume }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImproveRequest {
    pub text: String,
    /// What the text is, e.g. "professional summary".
    pub context: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImproveResponse {
    pub text: String,
}

/// POST /api/v1/assist/improve
pub async fn handle_improve(
    State(state): State<AppState>,
    Json(req): Json<ImproveRequest>,
) -> Result<Json<ImproveResponse>, AppError> {
    if req.text.trim().is_empty() {
        return Err(AppError::Validation("text is empty".to_string()));
    }
    let text = writer::improve_text(&state.llm, &req.text, &req.context).await?;
    Ok(Json(ImproveResponse { text }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestTitlesRequest {
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestTitlesResponse {
    pub suggestions: Vec<String>,
}

/// POST /api/v1/assist/suggest-titles
pub async fn handle_suggest_titles(
    State(state): State<AppState>,
    Json(req): Json<SuggestTitlesRequest>,
) -> Result<Json<SuggestTitlesResponse>, AppError> {
    let suggestions =
        writer::suggest_job_titles(&state.llm, &req.title, &req.company, &req.description).await?;
    Ok(Json(SuggestTitlesResponse { suggestions }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsRequest {
    pub resume: Resume,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsResponse {
    pub suggestions: String,
}

/// POST /api/v1/assist/ats
pub async fn handle_ats(
    State(state): State<AppState>,
    Json(req): Json<AtsRequest>,
) -> Result<Json<AtsResponse>, AppError> {
    let suggestions = writer::ats_suggestions(&state.llm, &req.resume).await?;
    Ok(Json(AtsResponse { suggestions }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyRequest {
    pub resume: Resume,
    pub suggestions: String,
}

/// POST /api/v1/assist/ats/apply
pub async fn handle_ats_apply(
    State(state): State<AppState>,
    Json(req): Json<ApplyRequest>,
) -> Result<Json<ResumeResponse>, AppError> {
    let resume = writer::apply_suggestions(&state.llm, &req.resume, &req.suggestions).await?;
    Ok(Json(ResumeResponse { resume }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterRequest {
    pub resume: Resume,
    pub job_description: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterResponse {
    pub letter: String,
}

/// POST /api/v1/assist/cover-letter
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Json(req): Json<CoverLetterRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    if req.job_description.trim().is_empty() {
        return Err(AppError::Validation("job description is empty".to_string()));
    }
    let letter = writer::cover_letter(&state.llm, &req.resume, &req.job_description).await?;
    Ok(Json(CoverLetterResponse { letter }))
}
