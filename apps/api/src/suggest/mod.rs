//! Suggestion generation: prompt in, text out.
//!
//! Editors only see `SuggestionGenerator`. The default backend is
//! `CannedSuggester` (keyword-matched canned text after a simulated delay);
//! `LlmSuggester` calls a real model when an API key is configured.
//!
//! `AppState` holds an `Arc<dyn SuggestionGenerator>` chosen at startup.

pub mod canned;
pub mod handlers;
pub mod llm;
pub mod prompts;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

use crate::llm_client::LlmError;

pub use canned::CannedSuggester;
pub use llm::LlmSuggester;

/// Returned in place of a suggestion whenever a backend fails.
pub const FALLBACK_SUGGESTION: &str =
    "Unable to generate suggestion at this time. Please try again later.";

#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("LLM backend failed: {0}")]
    Llm(#[from] LlmError),

    #[error("backend returned an empty suggestion")]
    Empty,
}

#[async_trait]
pub trait SuggestionGenerator: Send + Sync {
    /// Short backend name for logs and the builder view.
    fn backend(&self) -> &'static str;

    async fn generate(&self, prompt: &str) -> Result<String, SuggestError>;

    /// Never fails: backend errors are logged and replaced by
    /// `FALLBACK_SUGGESTION`.
    async fn suggest(&self, prompt: &str) -> String {
        match self.generate(prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!(backend = self.backend(), "Suggestion generation failed: {e}");
                FALLBACK_SUGGESTION.to_string()
            }
        }
    }
}

/// Counts suggestion calls that have not resolved yet. Drives the
/// "generating" indicator.
#[derive(Debug, Clone, Default)]
pub struct InFlight(Arc<AtomicUsize>);

impl InFlight {
    pub fn begin(&self) -> InFlightGuard {
        self.0.fetch_add(1, Ordering::SeqCst);
        InFlightGuard(self.0.clone())
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

pub struct InFlightGuard(Arc<AtomicUsize>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Runs one suggestion while it is counted as in flight.
pub async fn tracked_suggest(
    generator: &dyn SuggestionGenerator,
    in_flight: &InFlight,
    prompt: &str,
) -> String {
    let _guard = in_flight.begin();
    generator.suggest(prompt).await
}
