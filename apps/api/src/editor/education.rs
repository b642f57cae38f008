use serde::Deserialize;

use crate::editor::{append_blank, edit_entry, find_entry, remove_entry, EditError};
use crate::models::resume::{Education, ResumeData};

/// A single-field update to an education entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum EducationField {
    Institution(String),
    Degree(String),
    Field(String),
    StartDate(String),
    EndDate(String),
    Location(String),
    Gpa(String),
    Description(String),
}

pub fn add_education(data: &ResumeData, id: &str) -> ResumeData {
    ResumeData {
        education: append_blank(&data.education, id),
        ..data.clone()
    }
}

pub fn remove_education(data: &ResumeData, id: &str) -> Result<ResumeData, EditError> {
    Ok(ResumeData {
        education: remove_entry(&data.education, id)?,
        ..data.clone()
    })
}

pub fn update_education(
    data: &ResumeData,
    id: &str,
    field: EducationField,
) -> Result<ResumeData, EditError> {
    let education = edit_entry(&data.education, id, |edu| match field {
        EducationField::Institution(v) => edu.institution = v,
        EducationField::Degree(v) => edu.degree = v,
        EducationField::Field(v) => edu.field = v,
        EducationField::StartDate(v) => edu.start_date = v,
        EducationField::EndDate(v) => edu.end_date = v,
        EducationField::Location(v) => edu.location = v,
        EducationField::Gpa(v) => edu.gpa = v,
        EducationField::Description(v) => edu.description = v,
    })?;
    Ok(ResumeData {
        education,
        ..data.clone()
    })
}

pub fn find_education<'a>(data: &'a ResumeData, id: &str) -> Result<&'a Education, EditError> {
    find_entry(&data.education, id)
}

/// Writes a generated description into the entry.
pub fn apply_description_suggestion(
    data: &ResumeData,
    id: &str,
    suggestion: &str,
) -> Result<ResumeData, EditError> {
    update_education(data, id, EducationField::Description(suggestion.to_string()))
}
