//! DocumentView — the renderer's output: a tree of styled content blocks
//! representing one laid-out resume page, independent of any UI framework.

use serde::{Deserialize, Serialize};

use crate::design::{Justify, Margins};

/// Root of a rendered resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentView {
    /// Registry key of the renderer that produced this view.
    pub template: String,
    pub style: DocumentStyle,
    pub blocks: Vec<Block>,
}

/// Resolved design parameters applied at the document root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentStyle {
    pub font_family: String,
    pub font_size: String,
    pub line_height: String,
    /// Hex token consumed by section headers and borders.
    pub accent_color: String,
    /// Page padding, in inches.
    pub padding: Margins,
}

/// One content block. `Entry` is the distinct tag for long, atomic blocks
/// that should avoid breaking across a print page boundary; everything
/// else is ordinary flow content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum Block {
    /// A titled section. Empty sections never reach the tree — renderers
    /// suppress heading and body together.
    Section { title: String, children: Vec<Block> },
    /// Atomic content (one experience entry, one education entry, ...).
    /// Layout hint only, not a hard constraint.
    Entry { children: Vec<Block> },
    Heading {
        level: u8,
        text: String,
        #[serde(default)]
        justify: Option<Justify>,
    },
    Paragraph {
        text: String,
        #[serde(default)]
        justify: Option<Justify>,
        #[serde(default)]
        italic: bool,
    },
    /// Two texts pushed to opposite edges of one row (title vs. dates).
    Split { left: String, right: String },
    /// One list item per string, already split and de-prefixed.
    Bullets { items: Vec<String> },
    /// Side-by-side columns (skills `columns` layout).
    Columns { columns: Vec<Vec<Block>> },
    /// The header contact row; each entry was non-empty at render time.
    Contacts {
        justify: Justify,
        items: Vec<Contact>,
    },
    Link { text: String, href: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub kind: ContactKind,
    /// Display text (URLs arrive scheme- and `www.`-stripped).
    pub text: String,
    /// Link target, if this contact is a link (normalized URL or mailto).
    #[serde(default)]
    pub href: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Email,
    Phone,
    Location,
    Website,
    Linkedin,
    Twitter,
}

impl DocumentView {
    /// All visible text, depth-first. Test and diagnostics helper.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            collect_text(block, &mut out);
        }
        out
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.plain_text().contains(needle)
    }

    /// Titles of top-level sections, in document order.
    pub fn section_titles(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Section { title, .. } => Some(title.as_str()),
                _ => None,
            })
            .collect()
    }

    /// All bullet items anywhere in the tree, in document order.
    pub fn bullet_items(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for block in &self.blocks {
            collect_bullets(block, &mut out);
        }
        out
    }
}

fn collect_text(block: &Block, out: &mut String) {
    let mut push = |s: &str| {
        if !s.is_empty() {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(s);
        }
    };
    match block {
        Block::Section { title, children } => {
            push(title);
            for c in children {
                collect_text(c, out);
            }
        }
        Block::Entry { children } => {
            for c in children {
                collect_text(c, out);
            }
        }
        Block::Heading { text, .. } => push(text),
        Block::Paragraph { text, .. } => push(text),
        Block::Split { left, right } => {
            push(left);
            push(right);
        }
        Block::Bullets { items } => {
            for item in items {
                push(item);
            }
        }
        Block::Columns { columns } => {
            for column in columns {
                for c in column {
                    collect_text(c, out);
                }
            }
        }
        Block::Contacts { items, .. } => {
            for contact in items {
                push(&contact.text);
            }
        }
        Block::Link { text, .. } => push(text),
    }
}

fn collect_bullets<'a>(block: &'a Block, out: &mut Vec<&'a str>) {
    match block {
        Block::Section { children, .. } | Block::Entry { children } => {
            for c in children {
                collect_bullets(c, out);
            }
        }
        Block::Bullets { items } => out.extend(items.iter().map(|s| s.as_str())),
        Block::Columns { columns } => {
            for column in columns {
                for c in column {
                    collect_bullets(c, out);
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::Margins;

    fn view(blocks: Vec<Block>) -> DocumentView {
        DocumentView {
            template: "test".to_string(),
            style: DocumentStyle {
                font_family: "serif".to_string(),
                font_size: "10pt".to_string(),
                line_height: "1.4".to_string(),
                accent_color: "#000000".to_string(),
                padding: Margins {
                    top_bottom_in: 0.5,
                    left_right_in: 0.5,
                },
            },
            blocks,
        }
    }

    #[test]
    fn test_plain_text_walks_nested_blocks() {
        let v = view(vec![Block::Section {
            title: "Experience".to_string(),
            children: vec![Block::Entry {
                children: vec![
                    Block::Split {
                        left: "Engineer".to_string(),
                        right: "2020 - Present".to_string(),
                    },
                    Block::Bullets {
                        items: vec!["Shipped things".to_string()],
                    },
                ],
            }],
        }]);
        let text = v.plain_text();
        assert!(text.contains("Experience"));
        assert!(text.contains("Engineer"));
        assert!(text.contains("Shipped things"));
    }

    #[test]
    fn test_section_titles_in_order() {
        let v = view(vec![
            Block::Section {
                title: "Experience".to_string(),
                children: vec![],
            },
            Block::Section {
                title: "Skills".to_string(),
                children: vec![],
            },
        ]);
        assert_eq!(v.section_titles(), vec!["Experience", "Skills"]);
    }

    #[test]
    fn test_bullet_items_cross_columns() {
        let v = view(vec![Block::Columns {
            columns: vec![
                vec![Block::Bullets {
                    items: vec!["a".to_string()],
                }],
                vec![Block::Bullets {
                    items: vec!["b".to_string()],
                }],
            ],
        }]);
        assert_eq!(v.bullet_items(), vec!["a", "b"]);
    }
}
