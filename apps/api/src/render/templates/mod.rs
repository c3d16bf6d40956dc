//! Concrete template renderers plus the content builders they share.
//!
//! The builders implement the parts of the renderer contract that are
//! identical across every visual variant: optional contact omission, URL
//! normalization, section suppression, description splitting, and the
//! resolved design parameters.

pub mod modern;
pub mod professional;

use crate::design::{self, SkillsPlan};
use crate::models::resume::{DesignSettings, PersonalInfo, Resume};
use crate::render::document::{Block, Contact, ContactKind, DocumentStyle};
use crate::render::text::{description_lines, display_url, format_url};

/// Resolved document-root style from the design settings.
pub(crate) fn document_style(design: &DesignSettings) -> DocumentStyle {
    DocumentStyle {
        font_family: design.font_family.clone(),
        font_size: design.font_size.clone(),
        line_height: design.line_height.clone(),
        accent_color: design.accent_color.clone(),
        padding: design::margins(design),
    }
}

/// Header contact entries. Each field is independently optional: an empty
/// field contributes nothing, never an empty placeholder.
pub(crate) fn contact_items(info: &PersonalInfo) -> Vec<Contact> {
    let mut items = Vec::new();
    if !info.phone.is_empty() {
        items.push(Contact {
            kind: ContactKind::Phone,
            text: info.phone.clone(),
            href: None,
        });
    }
    if !info.email.is_empty() {
        items.push(Contact {
            kind: ContactKind::Email,
            text: info.email.clone(),
            href: Some(format!("mailto:{}", info.email)),
        });
    }
    if !info.location.is_empty() {
        items.push(Contact {
            kind: ContactKind::Location,
            text: info.location.clone(),
            href: None,
        });
    }
    for (kind, url) in [
        (ContactKind::Website, &info.website),
        (ContactKind::Linkedin, &info.linkedin),
        (ContactKind::Twitter, &info.twitter),
    ] {
        if !url.is_empty() {
            items.push(Contact {
                kind,
                text: display_url(url),
                href: Some(format_url(url)),
            });
        }
    }
    items
}

/// A bullet list for a `\n`-delimited description, or `None` when nothing
/// survives the split.
pub(crate) fn description_block(description: &str) -> Option<Block> {
    let items = description_lines(description);
    if items.is_empty() {
        None
    } else {
        Some(Block::Bullets { items })
    }
}

/// The body of the skills section per the resolved plan.
pub(crate) fn skills_body(plan: SkillsPlan) -> Vec<Block> {
    match plan {
        SkillsPlan::Comma(joined) => vec![Block::Paragraph {
            text: joined,
            justify: None,
            italic: false,
        }],
        SkillsPlan::List(items) => vec![Block::Bullets { items }],
        SkillsPlan::Columns(first, second) => vec![Block::Columns {
            columns: vec![
                vec![Block::Bullets { items: first }],
                vec![Block::Bullets { items: second }],
            ],
        }],
    }
}

/// Wraps a non-empty body in a titled section; an empty one renders
/// nothing at all (no heading, no body).
pub(crate) fn section(title: &str, children: Vec<Block>) -> Option<Block> {
    if children.is_empty() {
        None
    } else {
        Some(Block::Section {
            title: title.to_string(),
            children,
        })
    }
}

/// Sections for the skills sequence; suppressed entirely when empty.
pub(crate) fn skills_section(title: &str, resume: &Resume) -> Option<Block> {
    if resume.skills.is_empty() {
        return None;
    }
    let plan = design::skills_plan(resume.design.skills_layout, &resume.skills);
    section(title, skills_body(plan))
}
