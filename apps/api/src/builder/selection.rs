//! Which entry each list section is currently editing. Never persisted.

use serde::Serialize;

use crate::editor::{EditError, Section};
use crate::models::resume::ResumeData;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selections {
    pub education: Option<String>,
    pub experience: Option<String>,
    pub projects: Option<String>,
    pub skills: Option<String>,
}

impl Selections {
    /// Selections pointing at the first entry of every section.
    pub fn for_data(data: &ResumeData) -> Self {
        let mut selections = Self::default();
        selections.reconcile(data);
        selections
    }

    pub fn get(&self, section: Section) -> Option<&str> {
        self.slot(section).as_deref()
    }

    /// Points `section` at `id`, which must exist in `data`.
    pub fn select(&mut self, data: &ResumeData, section: Section, id: &str) -> Result<(), EditError> {
        if !section_ids(data, section).contains(&id) {
            return Err(EditError::EntryNotFound {
                section,
                id: id.to_string(),
            });
        }
        *self.slot_mut(section) = Some(id.to_string());
        Ok(())
    }

    /// Repairs every pointer after an edit: a pointer to a vanished entry
    /// moves to the first entry, and an empty list has no selection.
    pub fn reconcile(&mut self, data: &ResumeData) {
        for section in Section::ALL {
            let ids = section_ids(data, section);
            let slot = self.slot_mut(section);
            let still_present = slot.as_deref().is_some_and(|id| ids.contains(&id));
            if !still_present {
                *slot = ids.first().map(|id| id.to_string());
            }
        }
    }

    fn slot(&self, section: Section) -> &Option<String> {
        match section {
            Section::Education => &self.education,
            Section::Experience => &self.experience,
            Section::Projects => &self.projects,
            Section::Skills => &self.skills,
        }
    }

    fn slot_mut(&mut self, section: Section) -> &mut Option<String> {
        match section {
            Section::Education => &mut self.education,
            Section::Experience => &mut self.experience,
            Section::Projects => &mut self.projects,
            Section::Skills => &mut self.skills,
        }
    }
}

fn section_ids(data: &ResumeData, section: Section) -> Vec<&str> {
    match section {
        Section::Education => data.education.iter().map(|e| e.id.as_str()).collect(),
        Section::Experience => data.experience.iter().map(|e| e.id.as_str()).collect(),
        Section::Projects => data.projects.iter().map(|p| p.id.as_str()).collect(),
        Section::Skills => data.skills.iter().map(|c| c.id.as_str()).collect(),
    }
}
