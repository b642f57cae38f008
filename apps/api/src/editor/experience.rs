use serde::Deserialize;

use crate::editor::bullets::{parse_suggested_bullets, push_bullet, remove_bullet};
use crate::editor::{append_blank, edit_entry, find_entry, remove_entry, EditError};
use crate::models::resume::{Experience, ResumeData};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum ExperienceField {
    Company(String),
    Position(String),
    StartDate(String),
    /// Ignored while the role is current.
    EndDate(String),
    Location(String),
    /// Setting this clears the end date in the same update.
    Current(bool),
    Description(String),
    Bullets(Vec<String>),
}

/// Which text a suggestion fills on an experience or project entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntryTextTarget {
    #[default]
    Description,
    Bullets,
}

pub fn add_experience(data: &ResumeData, id: &str) -> ResumeData {
    ResumeData {
        experience: append_blank(&data.experience, id),
        ..data.clone()
    }
}

pub fn remove_experience(data: &ResumeData, id: &str) -> Result<ResumeData, EditError> {
    Ok(ResumeData {
        experience: remove_entry(&data.experience, id)?,
        ..data.clone()
    })
}

pub fn update_experience(
    data: &ResumeData,
    id: &str,
    field: ExperienceField,
) -> Result<ResumeData, EditError> {
    let experience = edit_entry(&data.experience, id, |exp| apply_field(exp, field))?;
    Ok(ResumeData {
        experience,
        ..data.clone()
    })
}

fn apply_field(exp: &mut Experience, field: ExperienceField) {
    match field {
        ExperienceField::Company(v) => exp.company = v,
        ExperienceField::Position(v) => exp.position = v,
        ExperienceField::StartDate(v) => exp.start_date = v,
        ExperienceField::EndDate(v) => {
            if !exp.current {
                exp.end_date = v;
            }
        }
        ExperienceField::Location(v) => exp.location = v,
        ExperienceField::Current(current) => {
            exp.current = current;
            if current {
                exp.end_date.clear();
            }
        }
        ExperienceField::Description(v) => exp.description = v,
        ExperienceField::Bullets(v) => exp.bullets = v,
    }
}

pub fn find_experience<'a>(data: &'a ResumeData, id: &str) -> Result<&'a Experience, EditError> {
    find_entry(&data.experience, id)
}

pub fn add_experience_bullet(
    data: &ResumeData,
    id: &str,
    text: &str,
) -> Result<ResumeData, EditError> {
    let exp = find_experience(data, id)?;
    match push_bullet(&exp.bullets, text) {
        Some(bullets) => update_experience(data, id, ExperienceField::Bullets(bullets)),
        None => Ok(data.clone()),
    }
}

pub fn remove_experience_bullet(
    data: &ResumeData,
    id: &str,
    index: usize,
) -> Result<ResumeData, EditError> {
    let exp = find_experience(data, id)?;
    match remove_bullet(&exp.bullets, index) {
        Some(bullets) => update_experience(data, id, ExperienceField::Bullets(bullets)),
        None => Ok(data.clone()),
    }
}

/// Applies generated text: a description replaces the field, bullets replace
/// the whole bullet list.
pub fn apply_suggestion(
    data: &ResumeData,
    id: &str,
    target: EntryTextTarget,
    suggestion: &str,
) -> Result<ResumeData, EditError> {
    let field = match target {
        EntryTextTarget::Description => ExperienceField::Description(suggestion.to_string()),
        EntryTextTarget::Bullets => ExperienceField::Bullets(parse_suggested_bullets(suggestion)),
    };
    update_experience(data, id, field)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_role(end_date: &str) -> ResumeData {
        let data = add_experience(&ResumeData::default(), "exp-1");
        update_experience(&data, "exp-1", ExperienceField::EndDate(end_date.into())).unwrap()
    }

    #[test]
    fn test_setting_current_clears_end_date() {
        let data = with_role("2021-08");
        assert_eq!(data.experience[0].end_date, "2021-08");

        let next = update_experience(&data, "exp-1", ExperienceField::Current(true)).unwrap();
        assert!(next.experience[0].current);
        assert_eq!(next.experience[0].end_date, "");
    }

    #[test]
    fn test_unsetting_current_keeps_end_date_empty() {
        let data = update_experience(&with_role("2021-08"), "exp-1", ExperienceField::Current(true))
            .unwrap();
        let next = update_experience(&data, "exp-1", ExperienceField::Current(false)).unwrap();
        assert!(!next.experience[0].current);
        assert_eq!(next.experience[0].end_date, "");
    }

    #[test]
    fn test_end_date_ignored_while_current() {
        let data = update_experience(&with_role(""), "exp-1", ExperienceField::Current(true))
            .unwrap();
        let next =
            update_experience(&data, "exp-1", ExperienceField::EndDate("2024-01".into())).unwrap();
        assert_eq!(next, data);
    }

    #[test]
    fn test_bullet_add_and_remove() {
        let data = add_experience(&ResumeData::default(), "exp-1");
        let data = add_experience_bullet(&data, "exp-1", "  Cut costs by 20%  ").unwrap();
        let data = add_experience_bullet(&data, "exp-1", "Hired 4 engineers").unwrap();
        assert_eq!(
            data.experience[0].bullets,
            vec!["Cut costs by 20%".to_string(), "Hired 4 engineers".to_string()]
        );

        let data = remove_experience_bullet(&data, "exp-1", 0).unwrap();
        assert_eq!(data.experience[0].bullets, vec!["Hired 4 engineers".to_string()]);
    }

    #[test]
    fn test_blank_bullet_is_noop() {
        let data = add_experience(&ResumeData::default(), "exp-1");
        assert_eq!(add_experience_bullet(&data, "exp-1", "  ").unwrap(), data);
    }

    #[test]
    fn test_bullet_on_missing_entry_fails() {
        let err = add_experience_bullet(&ResumeData::default(), "exp-9", "x").unwrap_err();
        assert!(matches!(err, EditError::EntryNotFound { .. }));
    }

    #[test]
    fn test_bullet_suggestion_replaces_existing_list() {
        let data = add_experience(&ResumeData::default(), "exp-1");
        let data = add_experience_bullet(&data, "exp-1", "Old bullet").unwrap();
        let next = apply_suggestion(
            &data,
            "exp-1",
            EntryTextTarget::Bullets,
            "- Built the thing\n- Shipped the thing\n",
        )
        .unwrap();
        assert_eq!(
            next.experience[0].bullets,
            vec!["Built the thing".to_string(), "Shipped the thing".to_string()]
        );
    }

    #[test]
    fn test_description_suggestion_leaves_bullets() {
        let data = add_experience(&ResumeData::default(), "exp-1");
        let data = add_experience_bullet(&data, "exp-1", "Kept").unwrap();
        let next =
            apply_suggestion(&data, "exp-1", EntryTextTarget::Description, "Generated").unwrap();
        assert_eq!(next.experience[0].description, "Generated");
        assert_eq!(next.experience[0].bullets, vec!["Kept".to_string()]);
    }

    #[test]
    fn test_current_field_deserializes_bool() {
        let field: ExperienceField =
            serde_json::from_str(r#"{"field": "current", "value": true}"#).unwrap();
        assert_eq!(field, ExperienceField::Current(true));
    }
}
