use async_trait::async_trait;
use tracing::debug;

use crate::llm_client::prompts::RESUME_WRITER_SYSTEM;
use crate::llm_client::LlmClient;
use crate::suggest::{SuggestError, SuggestionGenerator};

/// Model-backed suggestions. Errors surface as `SuggestError` and are turned
/// into the fallback text by `SuggestionGenerator::suggest`.
#[derive(Clone)]
pub struct LlmSuggester {
    client: LlmClient,
}

impl LlmSuggester {
    pub fn new(client: LlmClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SuggestionGenerator for LlmSuggester {
    fn backend(&self) -> &'static str {
        "llm"
    }

    async fn generate(&self, prompt: &str) -> Result<String, SuggestError> {
        let text = self.client.complete(prompt, RESUME_WRITER_SYSTEM).await?;
        debug!("LLM suggestion: {} chars", text.chars().count());
        if text.trim().is_empty() {
            return Err(SuggestError::Empty);
        }
        Ok(text)
    }
}
