//! Professional summary and career objective.
//!
//! Both fields carry a soft length limit. Going over it only produces a
//! warning for the editor to display; the text is stored as written.

use serde::{Deserialize, Serialize};

use crate::models::resume::{ResumeData, Summary};

pub const PROFESSIONAL_SUMMARY_SOFT_LIMIT: usize = 500;
pub const CAREER_OBJECTIVE_SOFT_LIMIT: usize = 300;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum SummaryField {
    ProfessionalSummary(String),
    CareerObjective(String),
}

/// Which summary text a suggestion fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SummaryTarget {
    ProfessionalSummary,
    CareerObjective,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LengthWarning {
    pub field: &'static str,
    pub length: usize,
    pub limit: usize,
}

pub fn update_summary(data: &ResumeData, field: SummaryField) -> ResumeData {
    let mut summary = data.summary.clone();
    match field {
        SummaryField::ProfessionalSummary(v) => summary.professional_summary = v,
        SummaryField::CareerObjective(v) => summary.career_objective = v,
    }
    ResumeData {
        summary,
        ..data.clone()
    }
}

pub fn apply_suggestion(data: &ResumeData, target: SummaryTarget, suggestion: &str) -> ResumeData {
    let field = match target {
        SummaryTarget::ProfessionalSummary => {
            SummaryField::ProfessionalSummary(suggestion.to_string())
        }
        SummaryTarget::CareerObjective => SummaryField::CareerObjective(suggestion.to_string()),
    };
    update_summary(data, field)
}

/// Character counts over the soft limits.
pub fn length_warnings(summary: &Summary) -> Vec<LengthWarning> {
    [
        (
            "professionalSummary",
            &summary.professional_summary,
            PROFESSIONAL_SUMMARY_SOFT_LIMIT,
        ),
        (
            "careerObjective",
            &summary.career_objective,
            CAREER_OBJECTIVE_SOFT_LIMIT,
        ),
    ]
    .into_iter()
    .filter_map(|(field, text, limit)| {
        let length = text.chars().count();
        (length > limit).then_some(LengthWarning {
            field,
            length,
            limit,
        })
    })
    .collect()
}
