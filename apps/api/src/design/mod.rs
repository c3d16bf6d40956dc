//! Design Settings Engine — pure functions deriving concrete layout
//! parameters from [`DesignSettings`] for consumption by renderers.
//!
//! No side effects, no I/O; total over the documented domain. Out-of-range
//! numerics (e.g. a negative margin) are the editing surface's problem, not
//! validated here.

use serde::{Deserialize, Serialize};

use crate::models::resume::{
    DateAlignment, DesignSettings, HeaderAlignment, LocationAlignment, PaperSize, Skill,
    SkillsLayout,
};

/// CSS pixels per inch. All virtual-page math assumes 96dpi.
pub const PX_PER_INCH: f64 = 96.0;
const MM_PER_INCH: f64 = 25.4;

// ────────────────────────────────────────────────────────────────────────────
// Paper dimensions
// ────────────────────────────────────────────────────────────────────────────

/// Fixed pixel dimensions of the virtual page. Downstream scaling and the
/// print contract both depend on these being exact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperDimensions {
    pub width_px: f64,
    pub height_px: f64,
}

/// Letter = 8.5in × 11in at 96px/in; A4 = 210mm × 297mm via `mm / 25.4 * 96`.
pub fn paper_dimensions(size: PaperSize) -> PaperDimensions {
    match size {
        PaperSize::Letter => PaperDimensions {
            width_px: 8.5 * PX_PER_INCH,
            height_px: 11.0 * PX_PER_INCH,
        },
        PaperSize::A4 => PaperDimensions {
            width_px: 210.0 / MM_PER_INCH * PX_PER_INCH,
            height_px: 297.0 / MM_PER_INCH * PX_PER_INCH,
        },
    }
}

/// The `@page size` keyword and physical width/height for print CSS.
pub fn paper_css(size: PaperSize) -> (&'static str, &'static str, &'static str) {
    match size {
        PaperSize::Letter => ("Letter", "8.5in", "11in"),
        PaperSize::A4 => ("A4", "210mm", "297mm"),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Skills layout
// ────────────────────────────────────────────────────────────────────────────

/// A renderable plan for the skills section, resolved from the layout
/// variant before any visual concerns enter the picture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SkillsPlan {
    /// One `", "`-joined line.
    Comma(String),
    /// One bullet per skill, in sequence order.
    List(Vec<String>),
    /// Two columns split at `ceil(n/2)`; on odd counts the first column
    /// gets the larger half. Concatenating the columns reproduces the
    /// original sequence.
    Columns(Vec<String>, Vec<String>),
}

pub fn skills_plan(layout: SkillsLayout, skills: &[Skill]) -> SkillsPlan {
    let names: Vec<String> = skills.iter().map(|s| s.name.clone()).collect();
    match layout {
        SkillsLayout::Comma => SkillsPlan::Comma(names.join(", ")),
        SkillsLayout::List => SkillsPlan::List(names),
        SkillsLayout::Columns => {
            let midpoint = names.len().div_ceil(2);
            let (first, second) = names.split_at(midpoint.min(names.len()));
            SkillsPlan::Columns(first.to_vec(), second.to_vec())
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Alignment
// ────────────────────────────────────────────────────────────────────────────

/// Layout justification consumed by the HTML emitter as `text-align`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Justify {
    Left,
    Center,
    Right,
}

impl Justify {
    pub fn as_css(self) -> &'static str {
        match self {
            Justify::Left => "left",
            Justify::Center => "center",
            Justify::Right => "right",
        }
    }
}

pub fn header_justify(alignment: HeaderAlignment) -> Justify {
    match alignment {
        HeaderAlignment::Left => Justify::Left,
        HeaderAlignment::Center => Justify::Center,
        HeaderAlignment::Right => Justify::Right,
    }
}

pub fn date_justify(alignment: DateAlignment) -> Justify {
    match alignment {
        DateAlignment::Left => Justify::Left,
        DateAlignment::Right => Justify::Right,
    }
}

pub fn location_justify(alignment: LocationAlignment) -> Justify {
    match alignment {
        LocationAlignment::Left => Justify::Left,
        LocationAlignment::Right => Justify::Right,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Margins
// ────────────────────────────────────────────────────────────────────────────

/// Uniform page padding in inches: `topBottomMargin` for top/bottom,
/// `leftRightMargin` for left/right. The consuming layer uses inch units
/// natively, so no pixel conversion happens here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Margins {
    pub top_bottom_in: f64,
    pub left_right_in: f64,
}

pub fn margins(design: &DesignSettings) -> Margins {
    Margins {
        top_bottom_in: design.top_bottom_margin,
        left_right_in: design.left_right_margin,
    }
}

impl Margins {
    /// CSS shorthand, e.g. `"0.6in 0.6in"`.
    pub fn as_css_padding(&self) -> String {
        format!("{}in {}in", self.top_bottom_in, self.left_right_in)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills_named(names: &[&str]) -> Vec<Skill> {
        names.iter().map(|n| Skill::named(n)).collect()
    }

    #[test]
    fn test_letter_dimensions_exact() {
        let dims = paper_dimensions(PaperSize::Letter);
        assert_eq!(dims.width_px, 816.0);
        assert_eq!(dims.height_px, 1056.0);
    }

    #[test]
    fn test_a4_dimensions_within_tolerance() {
        let dims = paper_dimensions(PaperSize::A4);
        assert!(
            (dims.width_px - 793.7).abs() < 0.1,
            "A4 width ~793.7px, got {}",
            dims.width_px
        );
        assert!(
            (dims.height_px - 1122.5).abs() < 0.1,
            "A4 height ~1122.5px, got {}",
            dims.height_px
        );
    }

    #[test]
    fn test_comma_plan_joins_in_order() {
        let plan = skills_plan(SkillsLayout::Comma, &skills_named(&["Go", "Rust", "TS"]));
        assert_eq!(plan, SkillsPlan::Comma("Go, Rust, TS".to_string()));
    }

    #[test]
    fn test_columns_split_odd_count_favors_first_column() {
        let plan = skills_plan(
            SkillsLayout::Columns,
            &skills_named(&["a", "b", "c", "d", "e"]),
        );
        match plan {
            SkillsPlan::Columns(first, second) => {
                assert_eq!(first, vec!["a", "b", "c"]);
                assert_eq!(second, vec!["d", "e"]);
            }
            other => panic!("expected columns, got {other:?}"),
        }
    }

    #[test]
    fn test_columns_concatenation_reproduces_sequence() {
        for n in 0..8usize {
            let names: Vec<String> = (0..n).map(|i| format!("s{i}")).collect();
            let skills: Vec<Skill> = names.iter().map(|n| Skill::named(n)).collect();
            match skills_plan(SkillsLayout::Columns, &skills) {
                SkillsPlan::Columns(first, second) => {
                    assert_eq!(first.len(), n.div_ceil(2));
                    assert_eq!(second.len(), n / 2);
                    let joined: Vec<String> =
                        first.into_iter().chain(second).collect();
                    assert_eq!(joined, names);
                }
                other => panic!("expected columns, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_columns_empty_input_yields_empty_columns() {
        let plan = skills_plan(SkillsLayout::Columns, &[]);
        assert_eq!(plan, SkillsPlan::Columns(vec![], vec![]));
    }

    #[test]
    fn test_alignment_maps() {
        assert_eq!(header_justify(HeaderAlignment::Center), Justify::Center);
        assert_eq!(header_justify(HeaderAlignment::Left), Justify::Left);
        assert_eq!(date_justify(DateAlignment::Right), Justify::Right);
        assert_eq!(location_justify(LocationAlignment::Left), Justify::Left);
        assert_eq!(Justify::Right.as_css(), "right");
    }

    #[test]
    fn test_margins_pass_through_in_inches() {
        let design = DesignSettings {
            top_bottom_margin: 0.75,
            left_right_margin: 0.5,
            ..DesignSettings::default()
        };
        let m = margins(&design);
        assert_eq!(m.as_css_padding(), "0.75in 0.5in");
    }
}
