use axum::{
    extract::State,
    http::{header, HeaderName, HeaderValue, Uri},
    response::{Html, IntoResponse, Response},
};
use tracing::info;

use crate::errors::AppError;
use crate::render::dispatch::preview;
use crate::render::export::export_document;
use crate::render::landing::render_landing;
use crate::state::AppState;

pub const PDF_FILENAME_HEADER: &str = "x-pdf-filename";

/// GET /
pub async fn handle_landing() -> Html<String> {
    Html(render_landing())
}

/// GET /preview
pub async fn handle_preview(State(state): State<AppState>) -> Html<String> {
    let data = state.workspace.data().await;
    Html(preview(&data))
}

/// GET /export
pub async fn handle_export(State(state): State<AppState>) -> Result<Response, AppError> {
    let data = state.workspace.data().await;
    let doc = export_document(&data);
    info!("Exporting resume as {}", doc.filename);

    let disposition = HeaderValue::from_str(&doc.content_disposition())
        .map_err(|e| AppError::Internal(e.into()))?;
    let pdf_name = HeaderValue::from_str(&doc.pdf_filename_header())
        .map_err(|e| AppError::Internal(e.into()))?;

    Ok((
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/html; charset=utf-8"),
            ),
            (header::CONTENT_DISPOSITION, disposition),
            (HeaderName::from_static(PDF_FILENAME_HEADER), pdf_name),
        ],
        doc.body,
    )
        .into_response())
}

/// Anything unrouted.
pub async fn handle_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
