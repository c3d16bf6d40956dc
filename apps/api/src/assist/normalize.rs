//! Coercion of AI output into the canonical Resume shape: every section
//! item ends up with a non-empty id (preserved from input when present,
//! freshly minted otherwise), server-owned fields are stamped, and a
//! default design is attached when the model returned none.

use crate::models::resume::{new_id, Resume};

/// Normalizes a parsed import into a well-formed aggregate.
pub fn normalize_imported(mut resume: Resume, title: &str) -> Resume {
    resume.id = new_id();
    resume.title = title.to_string();
    resume.touch();
    ensure_item_ids(&mut resume);
    resume
}

/// Merges an AI-updated resume body into the original aggregate: content
/// sections and personal info come from the update, while identity,
/// template selection, and design settings stay with the original.
pub fn merge_updated(original: &Resume, updated: Resume) -> Resume {
    let mut merged = original.clone();
    merged.personal_info = updated.personal_info;
    merged.experience = updated.experience;
    merged.education = updated.education;
    merged.skills = updated.skills;
    merged.projects = updated.projects;
    merged.certifications = updated.certifications;
    merged.volunteering = updated.volunteering;
    merged.publications = updated.publications;
    merged.touch();
    ensure_item_ids(&mut merged);
    merged
}

fn ensure_item_ids(resume: &mut Resume) {
    fn fill(id: &mut String) {
        if id.is_empty() {
            *id = new_id();
        }
    }
    resume.experience.iter_mut().for_each(|i| fill(&mut i.id));
    resume.education.iter_mut().for_each(|i| fill(&mut i.id));
    resume.skills.iter_mut().for_each(|i| fill(&mut i.id));
    resume.projects.iter_mut().for_each(|i| fill(&mut i.id));
    resume
        .certifications
        .iter_mut()
        .for_each(|i| fill(&mut i.id));
    resume.volunteering.iter_mut().for_each(|i| fill(&mut i.id));
    resume.publications.iter_mut().for_each(|i| fill(&mut i.id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{DesignSettings, PaperSize, Skill};

    #[test]
    fn test_normalize_mints_missing_item_ids_and_preserves_existing() {
        let mut imported = Resume::default();
        imported.skills = vec![
            Skill {
                id: "keep-me".to_string(),
                name: "Rust".to_string(),
            },
            Skill {
                id: String::new(),
                name: "Go".to_string(),
            },
        ];
        let resume = normalize_imported(imported, "Imported Resume");
        assert_eq!(resume.title, "Imported Resume");
        assert_eq!(resume.skills[0].id, "keep-me");
        assert!(!resume.skills[1].id.is_empty());
    }

    #[test]
    fn test_normalize_attaches_default_design() {
        // An AI payload with no design key deserializes to the default.
        let imported: Resume =
            serde_json::from_str(r#"{"personalInfo":{"name":"Jane"}}"#).unwrap();
        let resume = normalize_imported(imported, "Imported");
        assert_eq!(resume.design.font_size, DesignSettings::default().font_size);
    }

    #[test]
    fn test_merge_keeps_identity_and_design() {
        let mut original = Resume::blank("Original");
        original.design.paper_size = PaperSize::A4;
        let original_id = original.id.clone();

        let mut updated = Resume::default();
        updated.personal_info.name = "Improved Jane".to_string();
        updated.skills = vec![Skill::named("Rust")];

        let merged = merge_updated(&original, updated);
        assert_eq!(merged.id, original_id);
        assert_eq!(merged.title, "Original");
        assert_eq!(merged.design.paper_size, PaperSize::A4);
        assert_eq!(merged.personal_info.name, "Improved Jane");
        assert_eq!(merged.skills.len(), 1);
    }
}
