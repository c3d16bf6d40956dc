//! "Modern" template — uppercase accent-ruled section headings, summary
//! pulled out of the header into its own section, flatter entry rows.
//! Shares the full data-to-content contract with every other template.

use crate::design::{header_justify, Justify};
use crate::models::resume::Resume;
use crate::render::document::{Block, DocumentView};
use crate::render::templates::{
    contact_items, description_block, document_style, section, skills_section,
};
use crate::render::text::{date_range, display_url, format_url};
use crate::render::Renderer;

pub struct ModernTemplate;

impl Renderer for ModernTemplate {
    fn key(&self) -> &'static str {
        "modern"
    }

    fn render(&self, resume: &Resume) -> DocumentView {
        let design = &resume.design;
        let justify = header_justify(design.header_alignment);
        let info = &resume.personal_info;
        let mut blocks = Vec::new();

        if !info.name.is_empty() {
            blocks.push(Block::Heading {
                level: 1,
                text: info.name.clone(),
                justify: Some(justify),
            });
        }
        let contacts = contact_items(info);
        if !contacts.is_empty() {
            blocks.push(Block::Contacts {
                justify,
                items: contacts,
            });
        }
        if !info.summary.is_empty() {
            blocks.extend(section(
                "SUMMARY",
                vec![Block::Paragraph {
                    text: info.summary.clone(),
                    justify: None,
                    italic: false,
                }],
            ));
        }

        let sections = [
            section("EXPERIENCE", experience(resume)),
            section("EDUCATION", education(resume)),
            skills_section("SKILLS", resume),
            section("PROJECTS", projects(resume)),
            section("CERTIFICATIONS", one_liners(resume, Kind::Certifications)),
            section("VOLUNTEERING", volunteering(resume)),
            section("PUBLICATIONS", one_liners(resume, Kind::Publications)),
        ];
        blocks.extend(sections.into_iter().flatten());

        DocumentView {
            template: self.key().to_string(),
            style: document_style(design),
            blocks,
        }
    }
}

fn experience(resume: &Resume) -> Vec<Block> {
    resume
        .experience
        .iter()
        .map(|exp| {
            let mut children = vec![Block::Heading {
                level: 3,
                text: exp.job_title.clone(),
                justify: None,
            }];
            let dates = date_range(&exp.start_date, &exp.end_date);
            match dates {
                Some(dates) if !exp.company.is_empty() => children.push(Block::Split {
                    left: exp.company.clone(),
                    right: dates,
                }),
                Some(dates) => children.push(Block::Paragraph {
                    text: dates,
                    justify: Some(Justify::Right),
                    italic: true,
                }),
                None if !exp.company.is_empty() => children.push(Block::Paragraph {
                    text: exp.company.clone(),
                    justify: None,
                    italic: true,
                }),
                None => {}
            }
            children.extend(description_block(&exp.description));
            Block::Entry { children }
        })
        .collect()
}

fn education(resume: &Resume) -> Vec<Block> {
    resume
        .education
        .iter()
        .map(|edu| {
            let mut children = vec![Block::Heading {
                level: 4,
                text: edu.institution.clone(),
                justify: None,
            }];
            let mut line = edu.degree.clone();
            if !edu.field_of_study.is_empty() {
                if !line.is_empty() {
                    line.push_str(", ");
                }
                line.push_str(&edu.field_of_study);
            }
            if !line.is_empty() {
                children.push(Block::Paragraph {
                    text: line,
                    justify: None,
                    italic: false,
                });
            }
            Block::Entry { children }
        })
        .collect()
}

fn projects(resume: &Resume) -> Vec<Block> {
    resume
        .projects
        .iter()
        .map(|proj| {
            let mut children = vec![Block::Heading {
                level: 3,
                text: proj.name.clone(),
                justify: None,
            }];
            children.extend(description_block(&proj.description));
            if !proj.url.is_empty() {
                children.push(Block::Link {
                    text: display_url(&proj.url),
                    href: format_url(&proj.url),
                });
            }
            Block::Entry { children }
        })
        .collect()
}

fn volunteering(resume: &Resume) -> Vec<Block> {
    resume
        .volunteering
        .iter()
        .map(|vol| {
            let mut title = vol.organization.clone();
            if !vol.role.is_empty() {
                if !title.is_empty() {
                    title.push_str(" - ");
                }
                title.push_str(&vol.role);
            }
            let mut children = vec![Block::Heading {
                level: 3,
                text: title,
                justify: None,
            }];
            children.extend(description_block(&vol.description));
            Block::Entry { children }
        })
        .collect()
}

enum Kind {
    Certifications,
    Publications,
}

fn one_liners(resume: &Resume, kind: Kind) -> Vec<Block> {
    let lines: Vec<String> = match kind {
        Kind::Certifications => resume
            .certifications
            .iter()
            .map(|c| {
                let mut text = c.name.clone();
                if !c.issuer.is_empty() {
                    text.push_str(&format!(", {}", c.issuer));
                }
                if !c.date.is_empty() {
                    text.push_str(&format!(" ({})", c.date));
                }
                text
            })
            .collect(),
        Kind::Publications => resume
            .publications
            .iter()
            .map(|p| {
                let mut text = p.title.clone();
                if !p.publisher.is_empty() {
                    text.push_str(&format!(" - {}", p.publisher));
                }
                if !p.date.is_empty() {
                    text.push_str(&format!(" ({})", p.date));
                }
                text
            })
            .collect(),
    };
    lines
        .into_iter()
        .map(|text| Block::Paragraph {
            text,
            justify: None,
            italic: false,
        })
        .collect()
}
