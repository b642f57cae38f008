//! The resume aggregate: the single unit of persistence and of every edit.
//!
//! Field names serialize in camelCase, which is the stored JSON layout.
//! Every struct defaults missing fields so that data written before a field
//! existed still loads.

use serde::{Deserialize, Deserializer, Serialize};

pub const MIN_SKILL_LEVEL: u8 = 1;
pub const MAX_SKILL_LEVEL: u8 = 5;
pub const DEFAULT_SKILL_LEVEL: u8 = 3;

/// Ordinal labels for skill levels 1 through 5.
const SKILL_LEVEL_LABELS: [&str; 5] = ["Beginner", "Basic", "Intermediate", "Advanced", "Expert"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub linkedin: String,
    pub website: String,
}

impl PersonalInfo {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    /// `YYYY-MM`
    pub start_date: String,
    /// `YYYY-MM`
    pub end_date: String,
    pub location: String,
    pub gpa: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    /// Always empty while `current` is set.
    pub end_date: String,
    pub location: String,
    pub current: bool,
    pub description: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub link: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub id: String,
    pub name: String,
    /// 1 (Beginner) – 5 (Expert)
    #[serde(deserialize_with = "deserialize_level")]
    pub level: u8,
}

impl Default for Skill {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            level: DEFAULT_SKILL_LEVEL,
        }
    }
}

impl Skill {
    pub fn level_label(&self) -> &'static str {
        level_label(self.level)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillCategory {
    pub id: String,
    pub name: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Summary {
    pub professional_summary: String,
    pub career_objective: String,
}

/// Which visual layout the preview uses.
///
/// Deserializes from any string; names that are not one of the four layouts
/// resolve to `Classic`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum TemplateKind {
    #[default]
    Classic,
    Modern,
    Creative,
    Technical,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 4] = [
        TemplateKind::Classic,
        TemplateKind::Modern,
        TemplateKind::Creative,
        TemplateKind::Technical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Classic => "classic",
            TemplateKind::Modern => "modern",
            TemplateKind::Creative => "creative",
            TemplateKind::Technical => "technical",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TemplateKind::Classic => "Classic",
            TemplateKind::Modern => "Modern",
            TemplateKind::Creative => "Creative",
            TemplateKind::Technical => "Technical",
        }
    }

    /// Case-insensitive lookup; anything unrecognised is `Classic`.
    pub fn parse(name: &str) -> Self {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }
}

impl From<String> for TemplateKind {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

/// Root aggregate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub summary: Summary,
    pub selected_template: TemplateKind,
}

impl ResumeData {
    /// Re-establishes invariants on data that did not come through the editors
    /// (stored JSON written by an older build or by hand).
    pub fn normalized(mut self) -> Self {
        for exp in &mut self.experience {
            if exp.current {
                exp.end_date.clear();
            }
        }
        for category in &mut self.skills {
            for skill in &mut category.skills {
                skill.level = clamp_level(skill.level);
            }
        }
        self
    }
}

/// Any integer is accepted and pulled into 1–5.
pub fn clamp_level(level: impl Into<i64>) -> u8 {
    let level = level
        .into()
        .clamp(i64::from(MIN_SKILL_LEVEL), i64::from(MAX_SKILL_LEVEL));
    // in range after the clamp
    level as u8
}

/// Stored levels outside 1–5 (or outside `u8`) are clamped instead of
/// failing the whole document.
fn deserialize_level<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    i64::deserialize(deserializer).map(clamp_level)
}

pub fn level_label(level: u8) -> &'static str {
    SKILL_LEVEL_LABELS[(clamp_level(level) - 1) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_aggregate_serializes_camel_case() {
        let json = serde_json::to_value(ResumeData::default()).unwrap();
        assert!(json.get("personalInfo").is_some());
        assert_eq!(json["personalInfo"]["zipCode"], "");
        assert_eq!(json["summary"]["professionalSummary"], "");
        assert_eq!(json["selectedTemplate"], "classic");
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let stored = r#"{
            "personalInfo": { "firstName": "Ada" },
            "experience": [{ "id": "exp-1", "company": "Analytical Engines" }]
        }"#;
        let data: ResumeData = serde_json::from_str(stored).unwrap();
        assert_eq!(data.personal_info.first_name, "Ada");
        assert_eq!(data.personal_info.last_name, "");
        assert_eq!(data.experience[0].company, "Analytical Engines");
        assert!(data.experience[0].bullets.is_empty());
        assert!(!data.experience[0].current);
        assert_eq!(data.selected_template, TemplateKind::Classic);
    }

    #[test]
    fn test_unknown_template_decodes_as_classic() {
        let data: ResumeData =
            serde_json::from_str(r#"{ "selectedTemplate": "brutalist" }"#).unwrap();
        assert_eq!(data.selected_template, TemplateKind::Classic);
    }

    #[test]
    fn test_template_round_trips_by_name() {
        for kind in TemplateKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            let back: TemplateKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }

    #[test]
    fn test_template_parse_is_case_insensitive() {
        assert_eq!(TemplateKind::parse("Technical"), TemplateKind::Technical);
        assert_eq!(TemplateKind::parse(" MODERN "), TemplateKind::Modern);
        assert_eq!(TemplateKind::parse(""), TemplateKind::Classic);
    }

    #[test]
    fn test_normalized_clears_end_date_on_current_role() {
        let data = ResumeData {
            experience: vec![Experience {
                id: "exp-1".to_string(),
                current: true,
                end_date: "2021-08".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
        .normalized();
        assert_eq!(data.experience[0].end_date, "");
    }

    #[test]
    fn test_normalized_clamps_skill_levels() {
        let data = ResumeData {
            skills: vec![SkillCategory {
                id: "cat-1".to_string(),
                name: "Languages".to_string(),
                skills: vec![
                    Skill { id: "a".into(), name: "Rust".into(), level: 9 },
                    Skill { id: "b".into(), name: "Go".into(), level: 0 },
                ],
            }],
            ..Default::default()
        }
        .normalized();
        assert_eq!(data.skills[0].skills[0].level, 5);
        assert_eq!(data.skills[0].skills[1].level, 1);
    }

    #[test]
    fn test_level_labels() {
        assert_eq!(level_label(1), "Beginner");
        assert_eq!(level_label(2), "Basic");
        assert_eq!(level_label(3), "Intermediate");
        assert_eq!(level_label(4), "Advanced");
        assert_eq!(level_label(5), "Expert");
        assert_eq!(level_label(42), "Expert");
    }

    #[test]
    fn test_skill_level_decodes_any_integer() {
        let high: Skill = serde_json::from_str(r#"{"name": "Rust", "level": 1000}"#).unwrap();
        let low: Skill = serde_json::from_str(r#"{"name": "Go", "level": -2}"#).unwrap();
        let missing: Skill = serde_json::from_str(r#"{"name": "SQL"}"#).unwrap();
        assert_eq!(high.level, 5);
        assert_eq!(low.level, 1);
        assert_eq!(missing.level, DEFAULT_SKILL_LEVEL);
    }

    #[test]
    fn test_full_name_trims_missing_parts() {
        let info = PersonalInfo {
            first_name: "Grace".to_string(),
            ..Default::default()
        };
        assert_eq!(info.full_name(), "Grace");
    }
}
