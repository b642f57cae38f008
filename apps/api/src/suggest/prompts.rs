// Prompt templates for the per-entry suggestion buttons.
// Placeholders in braces are filled from the entry being edited.

use crate::models::resume::{Education, Experience, Project, SkillCategory};

pub const EDUCATION_DESCRIPTION_TEMPLATE: &str = "Generate a concise and professional \
description for my education at {institution} where I studied {degree} in {field}. GPA: {gpa}.";

pub const EXPERIENCE_DESCRIPTION_TEMPLATE: &str =
    "Generate a concise and professional description for my role as {position} at {company}.";

pub const EXPERIENCE_BULLETS_TEMPLATE: &str = "Generate 3-5 impactful bullet points for my \
resume highlighting achievements and responsibilities as {position} at {company}. Focus on \
quantifiable results and specific skills.";

pub const PROJECT_DESCRIPTION_TEMPLATE: &str =
    "Generate a concise and professional description for my project titled \"{title}\".";

pub const PROJECT_BULLETS_TEMPLATE: &str = "Generate 3-4 impactful bullet points for my resume \
highlighting technical achievements and skills demonstrated in my project \"{title}\". Focus on \
specific technologies used and problems solved.";

pub const SKILLS_TEMPLATE: &str = "Generate a list of 5-7 important skills for a software \
developer in the category of {category}. Format as a simple comma-separated list.";

pub const PROFESSIONAL_SUMMARY_PROMPT: &str = "Generate a professional summary for a software \
developer's resume. Focus on showcasing technical expertise, adaptability, and problem-solving \
skills. Keep it concise but impactful.";

pub const CAREER_OBJECTIVE_PROMPT: &str = "Write a clear career objective for a software \
developer looking to grow in a collaborative environment. Include goals related to technical \
growth and contribution to meaningful projects.";

pub fn education_description(edu: &Education) -> String {
    fill(
        EDUCATION_DESCRIPTION_TEMPLATE,
        &[
            ("institution", &edu.institution),
            ("degree", &edu.degree),
            ("field", &edu.field),
            ("gpa", &edu.gpa),
        ],
    )
}

pub fn experience_description(exp: &Experience) -> String {
    fill(
        EXPERIENCE_DESCRIPTION_TEMPLATE,
        &[("position", &exp.position), ("company", &exp.company)],
    )
}

pub fn experience_bullets(exp: &Experience) -> String {
    fill(
        EXPERIENCE_BULLETS_TEMPLATE,
        &[("position", &exp.position), ("company", &exp.company)],
    )
}

pub fn project_description(project: &Project) -> String {
    fill(PROJECT_DESCRIPTION_TEMPLATE, &[("title", &project.title)])
}

pub fn project_bullets(project: &Project) -> String {
    fill(PROJECT_BULLETS_TEMPLATE, &[("title", &project.title)])
}

pub fn skills(category: &SkillCategory) -> String {
    fill(SKILLS_TEMPLATE, &[("category", &category.name)])
}

/// Single pass over the template, so braces inside user text are never
/// treated as placeholders.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 64);
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                let key = &after[..end];
                match values.iter().find(|(k, _)| *k == key) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(key);
                        out.push('}');
                    }
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
