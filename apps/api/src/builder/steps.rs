use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::editor::Section;

/// The six builder steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Personal,
    Education,
    Experience,
    Projects,
    Skills,
    Summary,
}

impl Step {
    pub const ALL: [Step; 6] = [
        Step::Personal,
        Step::Education,
        Step::Experience,
        Step::Projects,
        Step::Skills,
        Step::Summary,
    ];

    pub const LAST_INDEX: usize = Self::ALL.len() - 1;

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn id(&self) -> &'static str {
        match self {
            Step::Personal => "personal",
            Step::Education => "education",
            Step::Experience => "experience",
            Step::Projects => "projects",
            Step::Skills => "skills",
            Step::Summary => "summary",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Step::Personal => "Personal Info",
            Step::Education => "Education",
            Step::Experience => "Experience",
            Step::Projects => "Projects",
            Step::Skills => "Skills",
            Step::Summary => "Summary",
        }
    }

    /// The list section edited on this step, if any.
    pub fn section(&self) -> Option<Section> {
        match self {
            Step::Education => Some(Section::Education),
            Step::Experience => Some(Section::Experience),
            Step::Projects => Some(Section::Projects),
            Step::Skills => Some(Section::Skills),
            Step::Personal | Step::Summary => None,
        }
    }

    pub fn from_index(index: usize) -> Option<Step> {
        Self::ALL.get(index).copied()
    }

    /// Matches either the id (`personal`) or the label (`Personal Info`),
    /// ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Step> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|s| s.id().eq_ignore_ascii_case(name) || s.label().eq_ignore_ascii_case(name))
    }
}

/// Where a jump should land.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StepTarget {
    Index(usize),
    Name(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StepError {
    #[error("step index {0} is out of range (0-5)")]
    OutOfRange(usize),

    #[error("unknown step '{0}'")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Moved(Step),
    /// `next` on the final step: the builder hands off to the preview.
    Completed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepCursor {
    index: usize,
}

impl StepCursor {
    pub fn current(&self) -> Step {
        // index is only ever set from a valid step
        Step::ALL[self.index]
    }

    pub fn next(&mut self) -> Transition {
        if self.index >= Step::LAST_INDEX {
            return Transition::Completed;
        }
        self.index += 1;
        Transition::Moved(self.current())
    }

    pub fn previous(&mut self) -> Step {
        self.index = self.index.saturating_sub(1);
        self.current()
    }

    pub fn jump(&mut self, target: &StepTarget) -> Result<Step, StepError> {
        let step = match target {
            StepTarget::Index(i) => Step::from_index(*i).ok_or(StepError::OutOfRange(*i))?,
            StepTarget::Name(name) => {
                Step::from_name(name).ok_or_else(|| StepError::Unknown(name.clone()))?
            }
        };
        self.index = step.index();
        Ok(step)
    }
}
