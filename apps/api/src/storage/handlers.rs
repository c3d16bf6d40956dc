use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::models::ops;
use crate::models::resume::Resume;
use crate::state::AppState;

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeListResponse {
    pub resumes: Vec<Resume>,
}

/// GET /api/v1/users/:user_id/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ResumeListResponse>, AppError> {
    let resumes = state.store.load(&user_id).await?;
    Ok(Json(ResumeListResponse { resumes }))
}

/// PUT /api/v1/users/:user_id/resumes
///
/// Replaces the user's whole collection. Save failures surface to the
/// caller rather than being swallowed.
pub async fn handle_save_resumes(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(req): Json<ResumeListResponse>,
) -> Result<Json<ResumeListResponse>, AppError> {
    let mut seen = std::collections::HashSet::new();
    for resume in &req.resumes {
        if !seen.insert(resume.id.as_str()) {
            return Err(AppError::UnprocessableEntity(format!(
                "duplicate resume id {}",
                resume.id
            )));
        }
    }
    state.store.save(&user_id, &req.resumes).await?;
    Ok(Json(ResumeListResponse {
        resumes: req.resumes,
    }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResumeRequest {
    pub title: String,
    #[serde(default)]
    pub template: Option<String>,
}

/// POST /api/v1/users/:user_id/resumes
pub async fn handle_create_resume(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(req): Json<CreateResumeRequest>,
) -> Result<Json<Resume>, AppError> {
    if req.title.trim().is_empty() {
        return Err(AppError::Validation("title is empty".to_string()));
    }
    let resume = match req.template.as_deref() {
        Some(template) => Resume::from_template(&req.title, template),
        None => Resume::blank(&req.title),
    };
    let resumes = state.store.load(&user_id).await?;
    let resumes = ops::append(&resumes, resume.clone());
    state.store.save(&user_id, &resumes).await?;
    Ok(Json(resume))
}

/// PUT /api/v1/users/:user_id/resumes/:resume_id
///
/// Replaces one resume in the collection, position preserved. The path
/// id wins over whatever id the body carries.
pub async fn handle_update_resume(
    State(state): State<AppState>,
    Path((user_id, resume_id)): Path<(String, String)>,
    Json(mut resume): Json<Resume>,
) -> Result<Json<Resume>, AppError> {
    resume.id = resume_id.clone();
    resume.touch();

    let resumes = state.store.load(&user_id).await?;
    if !resumes.iter().any(|r| r.id == resume_id) {
        return Err(AppError::NotFound(format!("resume {resume_id} not found")));
    }
    let resumes: Vec<Resume> = resumes
        .iter()
        .map(|r| {
            if r.id == resume_id {
                resume.clone()
            } else {
                r.clone()
            }
        })
        .collect();
    state.store.save(&user_id, &resumes).await?;
    Ok(Json(resume))
}

/// DELETE /api/v1/users/:user_id/resumes/:resume_id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path((user_id, resume_id)): Path<(String, String)>,
) -> Result<Json<ResumeListResponse>, AppError> {
    let resumes = state.store.load(&user_id).await?;
    if !resumes.iter().any(|r| r.id == resume_id) {
        return Err(AppError::NotFound(format!("resume {resume_id} not found")));
    }
    let resumes: Vec<Resume> = resumes.into_iter().filter(|r| r.id != resume_id).collect();
    state.store.save(&user_id, &resumes).await?;
    Ok(Json(ResumeListResponse { resumes }))
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionName {
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Volunteering,
    Publications,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionEditRequest {
    pub section: SectionName,
    pub op: SectionOp,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum SectionOp {
    Append { item: Value },
    Update { item: Value },
    Remove { item_id: String },
}

fn edit_section<T>(items: &[T], op: &SectionOp) -> Result<Vec<T>, AppError>
where
    T: crate::models::resume::SectionItem + Clone + serde::de::DeserializeOwned,
{
    match op {
        SectionOp::Append { item } => {
            let item: T = serde_json::from_value(item.clone())
                .map_err(|e| AppError::Validation(format!("invalid section item: {e}")))?;
            Ok(ops::append(items, item))
        }
        SectionOp::Update { item } => {
            let item: T = serde_json::from_value(item.clone())
                .map_err(|e| AppError::Validation(format!("invalid section item: {e}")))?;
            Ok(ops::update(items, item))
        }
        SectionOp::Remove { item_id } => Ok(ops::remove(items, item_id)),
    }
}

fn apply_section_edit(resume: &mut Resume, req: &SectionEditRequest) -> Result<(), AppError> {
    match req.section {
        SectionName::Experience => resume.experience = edit_section(&resume.experience, &req.op)?,
        SectionName::Education => resume.education = edit_section(&resume.education, &req.op)?,
        SectionName::Skills => resume.skills = edit_section(&resume.skills, &req.op)?,
        SectionName::Projects => resume.projects = edit_section(&resume.projects, &req.op)?,
        SectionName::Certifications => {
            resume.certifications = edit_section(&resume.certifications, &req.op)?
        }
        SectionName::Volunteering => {
            resume.volunteering = edit_section(&resume.volunteering, &req.op)?
        }
        SectionName::Publications => {
            resume.publications = edit_section(&resume.publications, &req.op)?
        }
    }
    resume.touch();
    Ok(())
}

/// PATCH /api/v1/users/:user_id/resumes/:resume_id/sections
///
/// Single section edit against the stored resume. The edited resume is
/// rebuilt and written back whole; the previous value is never mutated
/// in place, so a failed save leaves the stored collection untouched.
pub async fn handle_edit_section(
    State(state): State<AppState>,
    Path((user_id, resume_id)): Path<(String, String)>,
    Json(req): Json<SectionEditRequest>,
) -> Result<Json<Resume>, AppError> {
    let resumes = state.store.load(&user_id).await?;
    let mut edited = resumes
        .iter()
        .find(|r| r.id == resume_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("resume {resume_id} not found")))?;
    apply_section_edit(&mut edited, &req)?;

    let resumes: Vec<Resume> = resumes
        .iter()
        .map(|r| {
            if r.id == resume_id {
                edited.clone()
            } else {
                r.clone()
            }
        })
        .collect();
    state.store.save(&user_id, &resumes).await?;
    Ok(Json(edited))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::Skill;
    use serde_json::json;

    #[test]
    fn test_append_edit_adds_item_and_touches() {
        let mut resume = Resume::blank("Test");
        let before = resume.last_edited;
        let req = SectionEditRequest {
            section: SectionName::Skills,
            op: SectionOp::Append {
                item: json!({"name": "Rust"}),
            },
        };
        apply_section_edit(&mut resume, &req).unwrap();
        assert_eq!(resume.skills.len(), 1);
        assert_eq!(resume.skills[0].name, "Rust");
        assert!(!resume.skills[0].id.is_empty(), "missing id gets minted");
        assert!(resume.last_edited >= before);
    }

    #[test]
    fn test_remove_edit_filters_by_id() {
        let mut resume = Resume::blank("Test");
        resume.skills = vec![Skill::named("Rust"), Skill::named("Go")];
        let id = resume.skills[0].id.clone();
        let req = SectionEditRequest {
            section: SectionName::Skills,
            op: SectionOp::Remove { item_id: id },
        };
        apply_section_edit(&mut resume, &req).unwrap();
        assert_eq!(resume.skills.len(), 1);
        assert_eq!(resume.skills[0].name, "Go");
    }

    #[test]
    fn test_update_edit_preserves_position() {
        let mut resume = Resume::blank("Test");
        resume.skills = vec![Skill::named("Rust"), Skill::named("Go")];
        let id = resume.skills[0].id.clone();
        let req = SectionEditRequest {
            section: SectionName::Skills,
            op: SectionOp::Update {
                item: json!({"id": id, "name": "Rustlang"}),
            },
        };
        apply_section_edit(&mut resume, &req).unwrap();
        assert_eq!(resume.skills[0].name, "Rustlang");
        assert_eq!(resume.skills[1].name, "Go");
    }

    #[test]
    fn test_malformed_item_is_a_validation_error() {
        let mut resume = Resume::blank("Test");
        let req = SectionEditRequest {
            section: SectionName::Skills,
            op: SectionOp::Append {
                item: json!("not an object"),
            },
        };
        let err = apply_section_edit(&mut resume, &req).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
