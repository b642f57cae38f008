use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::builder::StepError;
use crate::editor::EditError;
use crate::store::StoreError;
use crate::workspace::WorkspaceError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<EditError> for AppError {
    fn from(e: EditError) -> Self {
        AppError::NotFound(e.to_string())
    }
}

impl From<WorkspaceError> for AppError {
    fn from(e: WorkspaceError) -> Self {
        match e {
            WorkspaceError::Edit(e) => e.into(),
            WorkspaceError::Store(e) => AppError::Storage(e),
        }
    }
}

impl From<StepError> for AppError {
    fn from(e: StepError) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Storage(e) => {
                tracing::error!("Storage error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "The resume could not be saved".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::Section;

    #[test]
    fn test_missing_entry_maps_to_404() {
        let err: AppError = EditError::EntryNotFound {
            section: Section::Projects,
            id: "proj-9".into(),
        }
        .into();
        assert!(matches!(&err, AppError::NotFound(msg) if msg == "projects entry 'proj-9' not found"));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_storage_error_hides_details() {
        let err = AppError::Storage(StoreError::io(
            "/secret/path.json",
            std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        ));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_bad_step_is_validation_error() {
        let err: AppError = StepError::OutOfRange(9).into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
