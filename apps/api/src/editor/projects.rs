use serde::Deserialize;

use crate::editor::bullets::{parse_suggested_bullets, push_bullet, remove_bullet};
use crate::editor::experience::EntryTextTarget;
use crate::editor::{append_blank, edit_entry, find_entry, remove_entry, EditError};
use crate::models::resume::{Project, ResumeData};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum ProjectField {
    Title(String),
    Link(String),
    StartDate(String),
    EndDate(String),
    Description(String),
    Bullets(Vec<String>),
}

pub fn add_project(data: &ResumeData, id: &str) -> ResumeData {
    ResumeData {
        projects: append_blank(&data.projects, id),
        ..data.clone()
    }
}

pub fn remove_project(data: &ResumeData, id: &str) -> Result<ResumeData, EditError> {
    Ok(ResumeData {
        projects: remove_entry(&data.projects, id)?,
        ..data.clone()
    })
}

pub fn update_project(
    data: &ResumeData,
    id: &str,
    field: ProjectField,
) -> Result<ResumeData, EditError> {
    let projects = edit_entry(&data.projects, id, |project| match field {
        ProjectField::Title(v) => project.title = v,
        ProjectField::Link(v) => project.link = v,
        ProjectField::StartDate(v) => project.start_date = v,
        ProjectField::EndDate(v) => project.end_date = v,
        ProjectField::Description(v) => project.description = v,
        ProjectField::Bullets(v) => project.bullets = v,
    })?;
    Ok(ResumeData {
        projects,
        ..data.clone()
    })
}

pub fn find_project<'a>(data: &'a ResumeData, id: &str) -> Result<&'a Project, EditError> {
    find_entry(&data.projects, id)
}

pub fn add_project_bullet(data: &ResumeData, id: &str, text: &str) -> Result<ResumeData, EditError> {
    let project = find_project(data, id)?;
    match push_bullet(&project.bullets, text) {
        Some(bullets) => update_project(data, id, ProjectField::Bullets(bullets)),
        None => Ok(data.clone()),
    }
}

pub fn remove_project_bullet(
    data: &ResumeData,
    id: &str,
    index: usize,
) -> Result<ResumeData, EditError> {
    let project = find_project(data, id)?;
    match remove_bullet(&project.bullets, index) {
        Some(bullets) => update_project(data, id, ProjectField::Bullets(bullets)),
        None => Ok(data.clone()),
    }
}

pub fn apply_suggestion(
    data: &ResumeData,
    id: &str,
    target: EntryTextTarget,
    suggestion: &str,
) -> Result<ResumeData, EditError> {
    let field = match target {
        EntryTextTarget::Description => ProjectField::Description(suggestion.to_string()),
        EntryTextTarget::Bullets => ProjectField::Bullets(parse_suggested_bullets(suggestion)),
    };
    update_project(data, id, field)
}
