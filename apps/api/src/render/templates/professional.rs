//! "Professional" template — single column, title/date rows pushed to
//! opposite edges, sentence-case section headings. The default renderer.

use crate::design::{date_justify, header_justify, location_justify, Justify};
use crate::models::resume::Resume;
use crate::render::document::{Block, DocumentView};
use crate::render::templates::{
    contact_items, description_block, document_style, section, skills_section,
};
use crate::render::text::{date_range, display_url, format_url};
use crate::render::Renderer;

pub struct ProfessionalTemplate;

impl Renderer for ProfessionalTemplate {
    fn key(&self) -> &'static str {
        "professional"
    }

    fn render(&self, resume: &Resume) -> DocumentView {
        let design = &resume.design;
        let justify = header_justify(design.header_alignment);
        let mut blocks = Vec::new();

        blocks.extend(header(resume, justify));

        let sections = [
            section("Work Experience", experience(resume)),
            section("Education", education(resume)),
            skills_section("Skills", resume),
            section("Projects", projects(resume)),
            section("Certifications", certifications(resume)),
            section("Volunteering", volunteering(resume)),
            section("Publications", publications(resume)),
        ];
        blocks.extend(sections.into_iter().flatten());

        DocumentView {
            template: self.key().to_string(),
            style: document_style(design),
            blocks,
        }
    }
}

fn header(resume: &Resume, justify: Justify) -> Vec<Block> {
    let info = &resume.personal_info;
    let mut blocks = Vec::new();
    if !info.name.is_empty() {
        blocks.push(Block::Heading {
            level: 1,
            text: info.name.clone(),
            justify: Some(justify),
        });
    }
    if !info.target_title.is_empty() {
        blocks.push(Block::Paragraph {
            text: info.target_title.clone(),
            justify: Some(justify),
            italic: false,
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
        blocks.push(Block::Paragraph {
            text: info.summary.clone(),
            justify: Some(justify),
            italic: true,
        });
    }
    blocks
}

/// Title row with the date range placed per the resolved date alignment.
fn titled_row(resume: &Resume, title: &str, dates: Option<String>) -> Vec<Block> {
    match dates {
        Some(dates) if date_justify(resume.design.date_alignment) == Justify::Right => {
            vec![Block::Split {
                left: title.to_string(),
                right: dates,
            }]
        }
        Some(dates) => vec![
            Block::Heading {
                level: 3,
                text: title.to_string(),
                justify: None,
            },
            Block::Paragraph {
                text: dates,
                justify: None,
                italic: false,
            },
        ],
        None => vec![Block::Heading {
            level: 3,
            text: title.to_string(),
            justify: None,
        }],
    }
}

/// Company/location line. A right-aligned location gets its own edge of
/// the row; otherwise the two are joined inline.
fn company_row(resume: &Resume, company: &str, location: &str) -> Vec<Block> {
    if company.is_empty() && location.is_empty() {
        return vec![];
    }
    if !company.is_empty()
        && !location.is_empty()
        && location_justify(resume.design.location_alignment) == Justify::Right
    {
        return vec![Block::Split {
            left: company.to_string(),
            right: location.to_string(),
        }];
    }
    let mut line = company.to_string();
    if !location.is_empty() {
        if !line.is_empty() {
            line.push_str(", ");
        }
        line.push_str(location);
    }
    vec![Block::Paragraph {
        text: line,
        justify: None,
        italic: true,
    }]
}

fn experience(resume: &Resume) -> Vec<Block> {
    resume
        .experience
        .iter()
        .map(|exp| {
            let mut children = titled_row(
                resume,
                &exp.job_title,
                date_range(&exp.start_date, &exp.end_date),
            );
            children.extend(company_row(resume, &exp.company, &exp.location));
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
            let mut children = titled_row(
                resume,
                &edu.degree,
                date_range(&edu.start_date, &edu.end_date),
            );
            let mut line = edu.institution.clone();
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
            if !proj.url.is_empty() {
                children.push(Block::Link {
                    text: display_url(&proj.url),
                    href: format_url(&proj.url),
                });
            }
            children.extend(description_block(&proj.description));
            Block::Entry { children }
        })
        .collect()
}

fn certifications(resume: &Resume) -> Vec<Block> {
    resume
        .certifications
        .iter()
        .map(|cert| {
            let mut text = cert.name.clone();
            if !cert.issuer.is_empty() {
                text.push_str(&format!(", {}", cert.issuer));
            }
            if !cert.date.is_empty() {
                text.push_str(&format!(" ({})", cert.date));
            }
            Block::Paragraph {
                text,
                justify: None,
                italic: false,
            }
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

fn publications(resume: &Resume) -> Vec<Block> {
    resume
        .publications
        .iter()
        .map(|publ| {
            let mut text = publ.title.clone();
            if !publ.publisher.is_empty() {
                text.push_str(&format!(" - {}", publ.publisher));
            }
            if !publ.date.is_empty() {
                text.push_str(&format!(" ({})", publ.date));
            }
            Block::Paragraph {
                text,
                justify: None,
                italic: false,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Certification, Experience, Skill};

    fn renderer() -> ProfessionalTemplate {
        ProfessionalTemplate
    }

    #[test]
    fn test_blank_resume_renders_without_sections() {
        let view = renderer().render(&Resume::blank("Empty"));
        assert!(view.section_titles().is_empty());
        assert_eq!(view.template, "professional");
    }

    #[test]
    fn test_certifications_heading_suppressed_when_empty() {
        let mut resume = Resume::blank("Test");
        resume.skills = vec![Skill::named("Rust")];
        let view = renderer().render(&resume);
        assert!(!view.section_titles().contains(&"Certifications"));
    }

    #[test]
    fn test_certifications_heading_appears_exactly_once() {
        let mut resume = Resume::blank("Test");
        resume.certifications = vec![Certification {
            name: "CKAD".to_string(),
            issuer: "The Linux Foundation".to_string(),
            date: "05/2021".to_string(),
            ..Certification::default()
        }];
        let view = renderer().render(&resume);
        let count = view
            .section_titles()
            .iter()
            .filter(|t| **t == "Certifications")
            .count();
        assert_eq!(count, 1);
        assert!(view.contains_text("CKAD, The Linux Foundation (05/2021)"));
    }

    #[test]
    fn test_description_lines_become_bullets() {
        let mut resume = Resume::blank("Test");
        resume.experience = vec![Experience {
            job_title: "Engineer".to_string(),
            company: "Acme".to_string(),
            start_date: "2020".to_string(),
            end_date: String::new(),
            description: "- Led team\nShipped feature\n".to_string(),
            ..Experience::default()
        }];
        let view = renderer().render(&resume);
        assert_eq!(view.bullet_items(), vec!["Led team", "Shipped feature"]);
        assert!(view.contains_text("2020 - Present"));
    }

    #[test]
    fn test_right_aligned_location_splits_company_row() {
        use crate::models::resume::LocationAlignment;
        let mut resume = Resume::blank("Test");
        resume.design.location_alignment = LocationAlignment::Right;
        resume.experience = vec![Experience {
            job_title: "Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Berlin".to_string(),
            ..Experience::default()
        }];
        let view = renderer().render(&resume);
        assert!(view.contains_text("Acme"));
        assert!(view.contains_text("Berlin"));
        assert!(!view.contains_text("Acme, Berlin"));
    }

    #[test]
    fn test_inline_location_joins_company_row() {
        use crate::models::resume::LocationAlignment;
        let mut resume = Resume::blank("Test");
        resume.design.location_alignment = LocationAlignment::Left;
        resume.experience = vec![Experience {
            job_title: "Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Berlin".to_string(),
            ..Experience::default()
        }];
        let view = renderer().render(&resume);
        assert!(view.contains_text("Acme, Berlin"));
    }

    #[test]
    fn test_sections_follow_canonical_order() {
        let mut resume = Resume::blank("Test");
        resume.experience = vec![Experience::default()];
        resume.skills = vec![Skill::named("Rust")];
        resume.certifications = vec![Certification::default()];
        let view = renderer().render(&resume);
        assert_eq!(
            view.section_titles(),
            vec!["Work Experience", "Skills", "Certifications"]
        );
    }
}
