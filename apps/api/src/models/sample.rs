//! Built-in sample dataset, returned on first load for a user who has
//! never saved. Absence of a prior save is not an error.

use chrono::{TimeZone, Utc};

use crate::models::resume::{
    Certification, DesignSettings, Education, Experience, PersonalInfo, Project, Resume, Skill,
    SkillsLayout, Volunteering,
};

/// The resume collection a brand-new user starts from.
pub fn sample_resumes() -> Vec<Resume> {
    vec![Resume {
        id: "sample-1".to_string(),
        title: "Software Engineer Resume".to_string(),
        template: "professional".to_string(),
        last_edited: Utc.with_ymd_and_hms(2023, 10, 26, 10, 0, 0).unwrap(),
        personal_info: PersonalInfo {
            name: "Jane Doe".to_string(),
            email: "jane.doe@example.com".to_string(),
            phone: "123-456-7890".to_string(),
            location: "San Francisco, CA".to_string(),
            website: "https://janedoe.dev".to_string(),
            linkedin: "https://linkedin.com/in/janedoe".to_string(),
            twitter: "https://twitter.com/janedoe".to_string(),
            summary: "Innovative and deadline-driven Software Engineer with 5+ years of \
                      experience designing and developing user-centered digital products \
                      from initial concept to final, polished deliverable."
                .to_string(),
            target_title: "Senior Software Engineer".to_string(),
            photo_url: String::new(),
        },
        experience: vec![
            Experience {
                id: "sample-exp-1".to_string(),
                job_title: "Senior Frontend Developer".to_string(),
                company: "Tech Solutions Inc.".to_string(),
                location: "San Francisco, CA".to_string(),
                start_date: "2020-01-01".to_string(),
                end_date: "Present".to_string(),
                description: "- Led a team of 5 developers in the creation of a new e-commerce \
                              platform, resulting in a 40% increase in sales.\n- Improved \
                              website performance by 30% through code optimization and a CDN.\n\
                              - Mentored junior developers and conducted code reviews."
                    .to_string(),
            },
            Experience {
                id: "sample-exp-2".to_string(),
                job_title: "Software Engineer".to_string(),
                company: "Innovate LLC".to_string(),
                location: "Palo Alto, CA".to_string(),
                start_date: "2016-07-01".to_string(),
                end_date: "2019-12-31".to_string(),
                description: "- Developed and maintained RESTful APIs for a client-facing web \
                              application with over 1 million active users.\n- Wrote unit and \
                              integration tests to ensure software reliability."
                    .to_string(),
            },
        ],
        education: vec![Education {
            id: "sample-edu-1".to_string(),
            institution: "University of Technology".to_string(),
            degree: "Bachelor of Science".to_string(),
            field_of_study: "Computer Science".to_string(),
            start_date: "2012-09-01".to_string(),
            end_date: "2016-06-01".to_string(),
        }],
        skills: [
            "React",
            "TypeScript",
            "Node.js",
            "GraphQL",
            "CI/CD",
            "Docker",
            "Kubernetes",
            "AWS",
            "Python",
            "SQL",
        ]
        .iter()
        .enumerate()
        .map(|(i, name)| Skill {
            id: format!("sample-skill-{}", i + 1),
            name: name.to_string(),
        })
        .collect(),
        projects: vec![Project {
            id: "sample-proj-1".to_string(),
            name: "Personal Portfolio".to_string(),
            description: "A responsive personal portfolio website built to showcase my \
                          projects and skills."
                .to_string(),
            url: "https://janedoe.dev".to_string(),
        }],
        certifications: vec![Certification {
            id: "sample-cert-1".to_string(),
            name: "AWS Certified Solutions Architect - Associate".to_string(),
            issuer: "Amazon Web Services".to_string(),
            date: "08/2022".to_string(),
        }],
        volunteering: vec![Volunteering {
            id: "sample-vol-1".to_string(),
            organization: "Girls Who Code".to_string(),
            role: "Volunteer Instructor".to_string(),
            description: "Taught basic web development concepts to high school students in \
                          an after-school program."
                .to_string(),
        }],
        publications: vec![],
        design: DesignSettings {
            skills_layout: SkillsLayout::Columns,
            ..DesignSettings::default()
        },
    }]
}
