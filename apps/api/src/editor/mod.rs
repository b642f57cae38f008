// Section editors: one module per slice of the resume aggregate.
// Every operation is a pure function from the current aggregate to the next;
// nothing here mutates shared state or touches storage.

pub mod bullets;
pub mod education;
pub mod experience;
pub mod handlers;
pub mod personal;
pub mod projects;
pub mod skills;
pub mod summary;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::resume::{Education, Experience, Project, SkillCategory};

/// The list-backed sections of the aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Education,
    Experience,
    Projects,
    Skills,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Education,
        Section::Experience,
        Section::Projects,
        Section::Skills,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Education => "education",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Skills => "skills",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("{section} entry '{id}' not found")]
    EntryNotFound { section: Section, id: String },

    #[error("skill '{skill_id}' not found in category '{category_id}'")]
    SkillNotFound {
        category_id: String,
        skill_id: String,
    },
}

/// Common shape of an entry in a list-backed section.
pub trait SectionEntry: Clone {
    const SECTION: Section;
    const ID_PREFIX: &'static str;

    fn id(&self) -> &str;

    /// A fresh entry with every field empty.
    fn blank(id: String) -> Self;
}

impl SectionEntry for Education {
    const SECTION: Section = Section::Education;
    const ID_PREFIX: &'static str = "edu";

    fn id(&self) -> &str {
        &self.id
    }

    fn blank(id: String) -> Self {
        Education {
            id,
            ..Default::default()
        }
    }
}

impl SectionEntry for Experience {
    const SECTION: Section = Section::Experience;
    const ID_PREFIX: &'static str = "exp";

    fn id(&self) -> &str {
        &self.id
    }

    fn blank(id: String) -> Self {
        Experience {
            id,
            ..Default::default()
        }
    }
}

impl SectionEntry for Project {
    const SECTION: Section = Section::Projects;
    const ID_PREFIX: &'static str = "proj";

    fn id(&self) -> &str {
        &self.id
    }

    fn blank(id: String) -> Self {
        Project {
            id,
            ..Default::default()
        }
    }
}

impl SectionEntry for SkillCategory {
    const SECTION: Section = Section::Skills;
    const ID_PREFIX: &'static str = "cat";

    fn id(&self) -> &str {
        &self.id
    }

    fn blank(id: String) -> Self {
        SkillCategory {
            id,
            name: skills::NEW_CATEGORY_NAME.to_string(),
            skills: Vec::new(),
        }
    }
}

/// Generates a `<prefix>-<token>` identity, unique for the life of the process.
pub fn new_entry_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4().simple())
}

/// Returns the id for a new entry of type `T`.
pub fn new_id_for<T: SectionEntry>() -> String {
    new_entry_id(T::ID_PREFIX)
}

// ────────────────────────────────────────────────────────────────────────────
// Shared list operations
// ────────────────────────────────────────────────────────────────────────────

pub(crate) fn append_blank<T: SectionEntry>(entries: &[T], id: &str) -> Vec<T> {
    let mut next = entries.to_vec();
    next.push(T::blank(id.to_string()));
    next
}

/// Removes the entry with `id`. The last remaining entry is never removed;
/// in that case the list comes back unchanged.
pub(crate) fn remove_entry<T: SectionEntry>(entries: &[T], id: &str) -> Result<Vec<T>, EditError> {
    ensure_present(entries, id)?;
    if entries.len() <= 1 {
        return Ok(entries.to_vec());
    }
    Ok(entries.iter().filter(|e| e.id() != id).cloned().collect())
}

/// Applies `edit` to the entry with `id`, leaving every other entry untouched.
pub(crate) fn edit_entry<T, F>(entries: &[T], id: &str, edit: F) -> Result<Vec<T>, EditError>
where
    T: SectionEntry,
    F: FnOnce(&mut T),
{
    ensure_present(entries, id)?;
    let mut next = entries.to_vec();
    if let Some(entry) = next.iter_mut().find(|e| e.id() == id) {
        edit(entry);
    }
    Ok(next)
}

pub(crate) fn find_entry<'a, T: SectionEntry>(entries: &'a [T], id: &str) -> Result<&'a T, EditError> {
    entries
        .iter()
        .find(|e| e.id() == id)
        .ok_or_else(|| EditError::EntryNotFound {
            section: T::SECTION,
            id: id.to_string(),
        })
}

fn ensure_present<T: SectionEntry>(entries: &[T], id: &str) -> Result<(), EditError> {
    find_entry(entries, id).map(|_| ())
}
