//! The Resume aggregate — the canonical shape shared by persistence, the
//! renderer pipeline, and the AI assist contract.
//!
//! Wire format is camelCase JSON. Every field carries `#[serde(default)]`
//! so hand-edited or imperfectly imported data still deserializes; the
//! renderer and scaler are total over whatever comes out of here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Template key used when none is specified and as the registry fallback.
pub const DEFAULT_TEMPLATE: &str = "professional";

/// Mints a fresh item id. Ids are stable for the life of the item and are
/// the addressing mechanism for in-place edits and deletes.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

// ────────────────────────────────────────────────────────────────────────────
// Aggregate root
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Resume {
    pub id: String,
    pub title: String,
    /// Key into the template registry. Unknown keys fall back to
    /// [`DEFAULT_TEMPLATE`] at lookup time, never at the data level.
    pub template: String,
    pub last_edited: DateTime<Utc>,
    pub personal_info: PersonalInfo,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub volunteering: Vec<Volunteering>,
    pub publications: Vec<Publication>,
    pub design: DesignSettings,
}

impl Default for Resume {
    fn default() -> Self {
        Resume {
            id: new_id(),
            title: String::new(),
            template: DEFAULT_TEMPLATE.to_string(),
            last_edited: Utc::now(),
            personal_info: PersonalInfo::default(),
            experience: vec![],
            education: vec![],
            skills: vec![],
            projects: vec![],
            certifications: vec![],
            volunteering: vec![],
            publications: vec![],
            design: DesignSettings::default(),
        }
    }
}

impl Resume {
    /// A blank resume with fresh ids and default design settings.
    pub fn blank(title: &str) -> Self {
        Resume {
            title: title.to_string(),
            ..Resume::default()
        }
    }

    /// A blank resume pre-selecting a template key.
    pub fn from_template(title: &str, template: &str) -> Self {
        Resume {
            template: template.to_string(),
            ..Resume::blank(title)
        }
    }

    /// Stamps `lastEdited` with the current time.
    pub fn touch(&mut self) {
        self.last_edited = Utc::now();
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Personal info
// ────────────────────────────────────────────────────────────────────────────

/// Single embedded record, not a sequence. The AI-parsing contract requires
/// name/email/phone/location/website/summary to be present, but any of them
/// may be an empty string; renderers omit the visual element for empties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub summary: String,
    pub target_title: String,
    pub photo_url: String,
    pub linkedin: String,
    pub twitter: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Section items
// ────────────────────────────────────────────────────────────────────────────

/// Common handle for section items: a stable id within the owning resume.
pub trait SectionItem {
    fn id(&self) -> &str;
}

macro_rules! section_item {
    ($ty:ident) => {
        impl SectionItem for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        }
    };
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    #[serde(default = "new_id")]
    pub id: String,
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    /// `\n`-delimited bullet lines, each optionally prefixed with `"- "`.
    pub description: String,
}

impl Default for Experience {
    fn default() -> Self {
        Experience {
            id: new_id(),
            job_title: String::new(),
            company: String::new(),
            location: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    #[serde(default = "new_id")]
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: String,
    pub end_date: String,
}

impl Default for Education {
    fn default() -> Self {
        Education {
            id: new_id(),
            institution: String::new(),
            degree: String::new(),
            field_of_study: String::new(),
            start_date: String::new(),
            end_date: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    #[serde(default = "new_id")]
    pub id: String,
    pub name: String,
}

impl Default for Skill {
    fn default() -> Self {
        Skill {
            id: new_id(),
            name: String::new(),
        }
    }
}

impl Skill {
    pub fn named(name: &str) -> Self {
        Skill {
            id: new_id(),
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(default = "new_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
}

impl Default for Project {
    fn default() -> Self {
        Project {
            id: new_id(),
            name: String::new(),
            description: String::new(),
            url: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    #[serde(default = "new_id")]
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub date: String,
}

impl Default for Certification {
    fn default() -> Self {
        Certification {
            id: new_id(),
            name: String::new(),
            issuer: String::new(),
            date: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Volunteering {
    #[serde(default = "new_id")]
    pub id: String,
    pub organization: String,
    pub role: String,
    pub description: String,
}

impl Default for Volunteering {
    fn default() -> Self {
        Volunteering {
            id: new_id(),
            organization: String::new(),
            role: String::new(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Publication {
    #[serde(default = "new_id")]
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub date: String,
}

impl Default for Publication {
    fn default() -> Self {
        Publication {
            id: new_id(),
            title: String::new(),
            publisher: String::new(),
            date: String::new(),
        }
    }
}

section_item!(Experience);
section_item!(Education);
section_item!(Skill);
section_item!(Project);
section_item!(Certification);
section_item!(Volunteering);
section_item!(Publication);

// ────────────────────────────────────────────────────────────────────────────
// Design settings
// ────────────────────────────────────────────────────────────────────────────

/// Purely visual/layout parameters, orthogonal to resume content.
/// Always fully populated — consumers assume presence of every field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DesignSettings {
    pub font_family: String,
    /// With unit suffix, e.g. `"10pt"`.
    pub font_size: String,
    /// Hex color threaded to renderers as an explicit parameter.
    pub accent_color: String,
    pub line_height: String,
    pub date_format: String,
    pub header_alignment: HeaderAlignment,
    pub date_alignment: DateAlignment,
    pub location_alignment: LocationAlignment,
    pub skills_layout: SkillsLayout,
    pub paper_size: PaperSize,
    /// Inches.
    pub left_right_margin: f64,
    /// Inches.
    pub top_bottom_margin: f64,
}

impl Default for DesignSettings {
    fn default() -> Self {
        DesignSettings {
            font_family: "'Inter', sans-serif".to_string(),
            font_size: "10pt".to_string(),
            accent_color: "#2563eb".to_string(),
            line_height: "1.4".to_string(),
            date_format: "MM/YYYY".to_string(),
            header_alignment: HeaderAlignment::Left,
            date_alignment: DateAlignment::Right,
            location_alignment: LocationAlignment::Right,
            skills_layout: SkillsLayout::Comma,
            paper_size: PaperSize::Letter,
            left_right_margin: 0.6,
            top_bottom_margin: 0.6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderAlignment {
    Center,
    Right,
    // Catch-all last: serde requires `other` on the final variant.
    #[default]
    #[serde(other)]
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateAlignment {
    Right,
    #[default]
    #[serde(other)]
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationAlignment {
    Right,
    #[default]
    #[serde(other)]
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillsLayout {
    List,
    Columns,
    #[default]
    #[serde(other)]
    Comma,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaperSize {
    A4,
    #[default]
    #[serde(other)]
    Letter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_resume_has_fresh_id_and_default_design() {
        let a = Resume::blank("One");
        let b = Resume::blank("Two");
        assert_ne!(a.id, b.id);
        assert_eq!(a.design.paper_size, PaperSize::Letter);
        assert_eq!(a.design.font_size, "10pt");
        assert!(a.experience.is_empty());
        assert_eq!(a.template, DEFAULT_TEMPLATE);
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let resume = Resume::blank("Test");
        let json = serde_json::to_value(&resume).unwrap();
        assert!(json.get("personalInfo").is_some());
        assert!(json.get("lastEdited").is_some());
        assert!(json["design"].get("skillsLayout").is_some());
        assert!(json["design"].get("leftRightMargin").is_some());
    }

    #[test]
    fn test_optional_personal_fields_serialize_as_empty_strings() {
        let resume = Resume::blank("Test");
        let json = serde_json::to_value(&resume).unwrap();
        // Never omitted — the AI contract requires every key present.
        assert_eq!(json["personalInfo"]["twitter"], "");
        assert_eq!(json["personalInfo"]["targetTitle"], "");
    }

    #[test]
    fn test_unknown_enum_values_fall_back_to_defaults() {
        let json = r#"{
            "title": "Hand-edited",
            "design": {
                "headerAlignment": "justified",
                "skillsLayout": "grid",
                "paperSize": "Legal"
            }
        }"#;
        let resume: Resume = serde_json::from_str(json).unwrap();
        assert_eq!(resume.design.header_alignment, HeaderAlignment::Left);
        assert_eq!(resume.design.skills_layout, SkillsLayout::Comma);
        assert_eq!(resume.design.paper_size, PaperSize::Letter);

        // A degraded value re-serializes with the canonical name, not
        // whatever the hand-edited payload carried.
        let out = serde_json::to_value(&resume).unwrap();
        assert_eq!(out["design"]["headerAlignment"], "left");
        assert_eq!(out["design"]["skillsLayout"], "comma");
        assert_eq!(out["design"]["paperSize"], "Letter");
    }

    #[test]
    fn test_partial_json_deserializes_with_defaults() {
        let resume: Resume = serde_json::from_str(r#"{"title":"Sparse"}"#).unwrap();
        assert_eq!(resume.title, "Sparse");
        assert!(resume.skills.is_empty());
        assert_eq!(resume.design.accent_color, "#2563eb");
    }

    #[test]
    fn test_item_with_missing_id_gets_one_minted() {
        let skill: Skill = serde_json::from_str(r#"{"name":"Rust"}"#).unwrap();
        assert!(!skill.id.is_empty());
    }
}
