//! Skill categories and the skills inside them.
//!
//! Categories follow the shared list pattern (the last category can never be
//! removed). Skills inside a category are a plain ordered list with levels
//! clamped to 1–5 on every write.

use serde::Deserialize;

use crate::editor::{append_blank, edit_entry, find_entry, remove_entry, EditError};
use crate::models::resume::{clamp_level, ResumeData, Skill, SkillCategory, DEFAULT_SKILL_LEVEL};

pub const NEW_CATEGORY_NAME: &str = "New Category";

pub const SKILL_ID_PREFIX: &str = "skill";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum CategoryField {
    Name(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum SkillField {
    Name(String),
    Level(i64),
}

pub fn add_category(data: &ResumeData, id: &str) -> ResumeData {
    ResumeData {
        skills: append_blank(&data.skills, id),
        ..data.clone()
    }
}

pub fn remove_category(data: &ResumeData, id: &str) -> Result<ResumeData, EditError> {
    Ok(ResumeData {
        skills: remove_entry(&data.skills, id)?,
        ..data.clone()
    })
}

pub fn update_category(
    data: &ResumeData,
    id: &str,
    field: CategoryField,
) -> Result<ResumeData, EditError> {
    let skills = edit_entry(&data.skills, id, |category| match field {
        CategoryField::Name(name) => category.name = name,
    })?;
    Ok(ResumeData {
        skills,
        ..data.clone()
    })
}

pub fn find_category<'a>(data: &'a ResumeData, id: &str) -> Result<&'a SkillCategory, EditError> {
    find_entry(&data.skills, id)
}

/// Appends a skill to the category. Blank names are ignored.
pub fn add_skill(
    data: &ResumeData,
    category_id: &str,
    skill_id: &str,
    name: &str,
    level: i64,
) -> Result<ResumeData, EditError> {
    let name = name.trim();
    if name.is_empty() {
        find_category(data, category_id)?;
        return Ok(data.clone());
    }
    let skill = Skill {
        id: skill_id.to_string(),
        name: name.to_string(),
        level: clamp_level(level),
    };
    with_skills(data, category_id, |skills| skills.push(skill))
}

pub fn remove_skill(
    data: &ResumeData,
    category_id: &str,
    skill_id: &str,
) -> Result<ResumeData, EditError> {
    ensure_skill(data, category_id, skill_id)?;
    with_skills(data, category_id, |skills| skills.retain(|s| s.id != skill_id))
}

pub fn update_skill(
    data: &ResumeData,
    category_id: &str,
    skill_id: &str,
    field: SkillField,
) -> Result<ResumeData, EditError> {
    ensure_skill(data, category_id, skill_id)?;
    with_skills(data, category_id, |skills| {
        if let Some(skill) = skills.iter_mut().find(|s| s.id == skill_id) {
            match field {
                SkillField::Name(name) => skill.name = name,
                SkillField::Level(level) => skill.level = clamp_level(level),
            }
        }
    })
}

/// Splits a comma- or newline-delimited suggestion into skill names.
pub fn parse_suggested_skills(text: &str) -> Vec<String> {
    text.split([',', '\n'])
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Appends one level-3 skill per name in the suggestion. `new_id` is called
/// once per skill.
pub fn apply_suggestion<F>(
    data: &ResumeData,
    category_id: &str,
    suggestion: &str,
    mut new_id: F,
) -> Result<ResumeData, EditError>
where
    F: FnMut() -> String,
{
    let suggested: Vec<Skill> = parse_suggested_skills(suggestion)
        .into_iter()
        .map(|name| Skill {
            id: new_id(),
            name,
            level: DEFAULT_SKILL_LEVEL,
        })
        .collect();
    with_skills(data, category_id, |skills| skills.extend(suggested))
}

fn with_skills<F>(data: &ResumeData, category_id: &str, edit: F) -> Result<ResumeData, EditError>
where
    F: FnOnce(&mut Vec<Skill>),
{
    let skills = edit_entry(&data.skills, category_id, |category| edit(&mut category.skills))?;
    Ok(ResumeData {
        skills,
        ..data.clone()
    })
}

fn ensure_skill(data: &ResumeData, category_id: &str, skill_id: &str) -> Result<(), EditError> {
    let category = find_category(data, category_id)?;
    if category.skills.iter().any(|s| s.id == skill_id) {
        Ok(())
    } else {
        Err(EditError::SkillNotFound {
            category_id: category_id.to_string(),
            skill_id: skill_id.to_string(),
        })
    }
}
