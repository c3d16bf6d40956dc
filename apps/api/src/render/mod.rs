//! Template renderer contract: `render(&Resume) -> DocumentView`, a pure
//! function with no access to ambient state. Concrete renderers vary only
//! visually; the data-to-content mapping is shared and contract-tested.

pub mod document;
pub mod handlers;
pub mod html;
pub mod registry;
pub mod templates;
pub mod text;

use crate::models::resume::Resume;
use document::DocumentView;

/// Canonical section order. Empty sequences suppress the entire section.
pub const SECTION_ORDER: [&str; 7] = [
    "experience",
    "education",
    "skills",
    "projects",
    "certifications",
    "volunteering",
    "publications",
];

pub trait Renderer: Send + Sync {
    /// Registry key this renderer is addressed by.
    fn key(&self) -> &'static str;

    /// Pure transformation from resume data to a laid-out document view.
    /// Must be total over arbitrary stored data — never panics.
    fn render(&self, resume: &Resume) -> DocumentView;
}
