//! Structured resume parsing: free text or an uploaded PDF in, a
//! normalized [`Resume`] out.

use tracing::info;

use crate::assist::normalize::normalize_imported;
use crate::assist::prompts;
use crate::assist::AssistError;
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::resume::Resume;

/// Upload ceiling enforced at the editing-surface boundary.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Parses pasted resume text into a fresh Resume aggregate.
pub async fn parse_from_text(llm: &LlmClient, text: &str, title: &str) -> Result<Resume, AppError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::Validation("resume text is empty".to_string()));
    }

    let parsed: Resume = llm
        .call_json(&prompts::parse_prompt(text), prompts::PARSE_SYSTEM)
        .await
        .map_err(AssistError::classify)?;

    let resume = normalize_imported(parsed, title);
    info!(
        "parsed resume import: {} experience, {} education, {} skills",
        resume.experience.len(),
        resume.education.len(),
        resume.skills.len()
    );
    Ok(resume)
}

/// Parses an uploaded PDF: text extraction happens locally, then the
/// extracted text goes through the same parse path as pasted text.
pub async fn parse_from_file(
    llm: &LlmClient,
    bytes: &[u8],
    title: &str,
) -> Result<Resume, AppError> {
    if bytes.is_empty() {
        return Err(AppError::Validation("uploaded file is empty".to_string()));
    }
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::Validation(format!(
            "uploaded file exceeds the {}MB limit",
            MAX_UPLOAD_BYTES / (1024 * 1024)
        )));
    }

    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::Validation(format!("could not read PDF: {e}")))?;

    parse_from_text(llm, &text, title).await
}
