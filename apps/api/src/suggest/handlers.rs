use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AssistantRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct AssistantResponse {
    pub suggestion: String,
    pub backend: &'static str,
}

/// POST /api/v1/suggest
/// Free-form writing assistant. Nothing is applied to the resume.
pub async fn handle_suggest(
    State(state): State<AppState>,
    Json(req): Json<AssistantRequest>,
) -> Result<Json<AssistantResponse>, AppError> {
    let prompt = req.prompt.trim();
    if prompt.is_empty() {
        return Err(AppError::Validation("prompt must not be empty".to_string()));
    }
    let suggestion = state.suggest(prompt).await;
    Ok(Json(AssistantResponse {
        suggestion,
        backend: state.suggester.backend(),
    }))
}
