//! Text-generation assist operations: rewriting, title suggestions, ATS
//! analysis and application, cover letters.

use serde::Deserialize;

use crate::assist::normalize::merge_updated;
use crate::assist::prompts;
use crate::assist::AssistError;
use crate::llm_client::LlmClient;
use crate::models::resume::Resume;

/// Rewrites a piece of resume text (`context` names what it is, e.g.
/// "professional summary" or "work experience description").
pub async fn improve_text(
    llm: &LlmClient,
    text: &str,
    context: &str,
) -> Result<String, AssistError> {
    llm.call_text(
        &prompts::improve_prompt(text, context),
        prompts::IMPROVE_SYSTEM,
    )
    .await
    .map_err(AssistError::classify)
}

#[derive(Deserialize)]
struct TitleSuggestions {
    suggestions: Vec<String>,
}

/// Suggests professional job titles for an experience entry.
pub async fn suggest_job_titles(
    llm: &LlmClient,
    title: &str,
    company: &str,
    description: &str,
) -> Result<Vec<String>, AssistError> {
    let parsed: TitleSuggestions = llm
        .call_json(
            &prompts::suggest_titles_prompt(title, company, description),
            prompts::SUGGEST_TITLES_SYSTEM,
        )
        .await
        .map_err(AssistError::classify)?;
    Ok(parsed.suggestions)
}

/// Markdown checklist of ATS-friendliness suggestions for a resume.
pub async fn ats_suggestions(llm: &LlmClient, resume: &Resume) -> Result<String, AssistError> {
    let resume_text = resume_as_text(resume);
    llm.call_text(&prompts::ats_prompt(&resume_text), prompts::ATS_SYSTEM)
        .await
        .map_err(AssistError::classify)
}

/// Applies a suggestion list to a resume. The model returns the full
/// content body; identity, template, and design stay with the original
/// and every surviving item id is preserved.
pub async fn apply_suggestions(
    llm: &LlmClient,
    resume: &Resume,
    suggestions: &str,
) -> Result<Resume, AssistError> {
    let resume_json =
        serde_json::to_string(resume).map_err(|_| AssistError::MalformedResponse)?;
    let updated: Resume = llm
        .call_json(
            &prompts::apply_prompt(&resume_json, suggestions),
            prompts::APPLY_SYSTEM,
        )
        .await
        .map_err(AssistError::classify)?;

    // A structurally hollow reply (no personal info, no sections) is a
    // malformed response, not an edit.
    if updated.personal_info.name.is_empty() && updated.experience.is_empty() {
        return Err(AssistError::MalformedResponse);
    }

    Ok(merge_updated(resume, updated))
}

/// Drafts a cover letter tailored to a job description.
pub async fn cover_letter(
    llm: &LlmClient,
    resume: &Resume,
    job_description: &str,
) -> Result<String, AssistError> {
    let resume_text = resume_as_text(resume);
    llm.call_text(
        &prompts::cover_letter_prompt(&resume_text, job_description),
        prompts::COVER_LETTER_SYSTEM,
    )
    .await
    .map_err(AssistError::classify)
}

/// Flat text form of a resume for prose prompts — the rendered document
/// text, which already applies the description-splitting convention.
fn resume_as_text(resume: &Resume) -> String {
    use crate::render::registry::TemplateRegistry;
    TemplateRegistry::with_defaults().render(resume).plain_text()
}
