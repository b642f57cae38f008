use std::sync::Arc;

use crate::suggest::{tracked_suggest, InFlight, SuggestionGenerator};
use crate::workspace::Workspace;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub workspace: Arc<Workspace>,
    /// Canned by default; model-backed when an API key is configured.
    pub suggester: Arc<dyn SuggestionGenerator>,
    pub in_flight: InFlight,
}

impl AppState {
    pub fn new(workspace: Arc<Workspace>, suggester: Arc<dyn SuggestionGenerator>) -> Self {
        Self {
            workspace,
            suggester,
            in_flight: InFlight::default(),
        }
    }

    /// Generates text for `prompt`. Never holds the workspace lock.
    pub async fn suggest(&self, prompt: &str) -> String {
        tracked_suggest(self.suggester.as_ref(), &self.in_flight, prompt).await
    }
}
