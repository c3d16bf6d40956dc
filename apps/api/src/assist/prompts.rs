//! Prompt construction for the assist operations. All prompts that expect
//! structured output instruct the model to return the canonical resume
//! JSON shape with every key present and ids preserved.

pub const PARSE_SYSTEM: &str = "You are a strict resume parsing engine. Your SOLE function is to \
extract structured data from the provided text and fit it into the JSON schema. MANDATORY RULES: \
1. Parse ALL sections present in the text (Work Experience, Education, Skills, Projects, \
Certifications, Volunteering, Publications). DO NOT OMIT ANY SECTION. 2. For each section, \
extract ALL items. DO NOT OMIT any job, degree, or skill. 3. Preserve original formatting for \
descriptions using newline characters ('\\n'), one bullet per line. 4. If a field in the schema \
is not present in the text (e.g., no 'twitter' URL), return an empty string for that field. Do \
not omit keys. Return ONLY valid JSON.";

pub const IMPROVE_SYSTEM: &str = "You are a professional resume editor. Your task is to rewrite \
the given text. ONLY return the final, rewritten text. Do not include any additional \
explanations, options, markdown, or commentary.";

pub const SUGGEST_TITLES_SYSTEM: &str = "You suggest professional job titles. Return ONLY a JSON \
object of the form {\"suggestions\": [\"...\"]} with three to five titles.";

pub const APPLY_SYSTEM: &str = "You are an intelligent resume editor that updates JSON data based \
on instructions. You ONLY output valid JSON that matches the input's structure. Do not add, \
remove, or rename any keys. Preserve all existing ids for items in arrays.";

pub const COVER_LETTER_SYSTEM: &str = "You write professional, tailored cover letters. The tone \
is professional and enthusiastic. Never include placeholders like [Your Name] or [Company \
Name]; use the information available in the resume.";

pub const ATS_SYSTEM: &str = "You analyze resumes for ATS (Applicant Tracking System) \
friendliness and reply with a markdown checklist of actionable suggestions.";

/// The JSON schema description embedded in parse prompts. Matches the
/// wire shape of [`crate::models::resume::Resume`] minus server-owned
/// fields (id, title, template, lastEdited, design).
pub const RESUME_SCHEMA: &str = r#"{
  "personalInfo": {"name": "", "email": "", "phone": "", "location": "", "website": "", "linkedin": "", "twitter": "", "summary": "", "targetTitle": "", "photoUrl": ""},
  "experience": [{"id": "", "jobTitle": "", "company": "", "location": "", "startDate": "", "endDate": "", "description": ""}],
  "education": [{"id": "", "institution": "", "degree": "", "fieldOfStudy": "", "startDate": "", "endDate": ""}],
  "skills": [{"id": "", "name": ""}],
  "projects": [{"id": "", "name": "", "description": "", "url": ""}],
  "certifications": [{"id": "", "name": "", "issuer": "", "date": ""}],
  "volunteering": [{"id": "", "organization": "", "role": "", "description": ""}],
  "publications": [{"id": "", "title": "", "publisher": "", "date": ""}]
}"#;

pub fn parse_prompt(resume_text: &str) -> String {
    format!(
        "Parse the following resume text into this JSON shape:\n{RESUME_SCHEMA}\n\n\
         --- RESUME TEXT ---\n{resume_text}"
    )
}

pub fn improve_prompt(text: &str, context: &str) -> String {
    format!(
        "Rewrite the following {context} to be more concise and impactful for a resume. \
         Focus on action verbs and quantifiable results. Original text:\n\n\"{text}\""
    )
}

pub fn suggest_titles_prompt(title: &str, company: &str, description: &str) -> String {
    format!(
        "Suggest professional job titles for this role.\n\
         Current title: \"{title}\"\nCompany: \"{company}\"\nDescription:\n\"{description}\""
    )
}

pub fn ats_prompt(resume_text: &str) -> String {
    format!(
        "Analyze the following resume for ATS friendliness. Provide a list of actionable \
         suggestions to improve it. Focus on keywords, formatting, and clarity.\n\n\
         --- RESUME TEXT ---\n{resume_text}"
    )
}

pub fn apply_prompt(resume_json: &str, suggestions: &str) -> String {
    format!(
        "Based on the following resume JSON and the list of suggestions, apply the \
         suggestions and return the updated resume as a JSON object. If a suggestion \
         mentions removing an item, remove it from the corresponding array. If it mentions \
         adding information, add it to the correct field. If it mentions rephrasing text, \
         update the text accordingly. Preserve all existing ids.\n\n\
         --- RESUME JSON ---\n{resume_json}\n\n--- SUGGESTIONS ---\n{suggestions}"
    )
}

pub fn cover_letter_prompt(resume_text: &str, job_description: &str) -> String {
    format!(
        "Based on the following resume and job description, write a professional and \
         tailored cover letter highlighting the candidate's most relevant skills and \
         experience, addressed to the hiring manager.\n\n\
         --- RESUME TEXT ---\n{resume_text}\n\n--- JOB DESCRIPTION ---\n{job_description}"
    )
}
