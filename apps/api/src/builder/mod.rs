//! Step orchestration for the guided builder.

pub mod handlers;
pub mod selection;
pub mod steps;

use crate::models::resume::ResumeData;

pub use selection::Selections;
pub use steps::{Step, StepCursor, StepError, StepTarget, Transition};

/// Transient UI state for the single builder session: which step is showing
/// and which entry each list section is editing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuilderSession {
    pub cursor: StepCursor,
    pub selections: Selections,
}

impl BuilderSession {
    pub fn new(data: &ResumeData) -> Self {
        Self {
            cursor: StepCursor::default(),
            selections: Selections::for_data(data),
        }
    }
}
