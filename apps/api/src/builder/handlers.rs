use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::builder::{Selections, Step, StepTarget, Transition};
use crate::editor::summary::{length_warnings, LengthWarning};
use crate::errors::AppError;
use crate::models::demo::demo_resume;
use crate::models::resume::{ResumeData, TemplateKind};
use crate::render::preview;
use crate::state::AppState;
use crate::workspace::Snapshot;

/// Where the client goes once the last step is passed.
pub const COMPLETION_TARGET: &str = "/preview";

#[derive(Debug, Deserialize)]
pub struct BuildQuery {
    #[serde(default)]
    pub demo: bool,
}

#[derive(Debug, Deserialize)]
pub struct JumpRequest {
    pub step: StepTarget,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepInfo {
    pub index: usize,
    pub id: &'static str,
    pub label: &'static str,
}

impl From<Step> for StepInfo {
    fn from(step: Step) -> Self {
        Self {
            index: step.index(),
            id: step.id(),
            label: step.label(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateOption {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuilderView {
    pub step: StepInfo,
    pub steps: Vec<StepInfo>,
    pub is_first: bool,
    pub is_last: bool,
    /// Set after `next` on the last step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<&'static str>,
    pub selections: Selections,
    /// Entry shown in the current step's form.
    pub active_entry: Option<String>,
    /// True while any suggestion is being generated.
    pub generating: bool,
    pub suggestion_backend: &'static str,
    pub template: TemplateKind,
    pub templates: Vec<TemplateOption>,
    pub summary_warnings: Vec<LengthWarning>,
    pub resume: ResumeData,
    pub preview_html: String,
}

fn builder_view(state: &AppState, snapshot: Snapshot, completed: bool) -> BuilderView {
    let step = snapshot.session.cursor.current();
    BuilderView {
        step: step.into(),
        steps: Step::ALL.into_iter().map(StepInfo::from).collect(),
        is_first: step.index() == 0,
        is_last: step.index() == Step::LAST_INDEX,
        completed: completed.then_some(COMPLETION_TARGET),
        active_entry: step
            .section()
            .and_then(|section| snapshot.session.selections.get(section))
            .map(str::to_string),
        selections: snapshot.session.selections,
        generating: state.in_flight.count() > 0,
        suggestion_backend: state.suggester.backend(),
        template: snapshot.data.selected_template,
        templates: TemplateKind::ALL
            .into_iter()
            .map(|kind| TemplateOption {
                id: kind.as_str(),
                label: kind.label(),
            })
            .collect(),
        summary_warnings: length_warnings(&snapshot.data.summary),
        preview_html: preview(&snapshot.data),
        resume: snapshot.data,
    }
}

/// GET /build
/// `?demo=true` replaces the resume with the demo data and restarts at the
/// first step.
pub async fn handle_build(
    State(state): State<AppState>,
    Query(query): Query<BuildQuery>,
) -> Result<Json<BuilderView>, AppError> {
    let snapshot = if query.demo {
        info!("Loading demo resume into builder");
        state.workspace.replace(demo_resume()).await?
    } else {
        state.workspace.snapshot().await
    };
    Ok(Json(builder_view(&state, snapshot, false)))
}

/// GET /api/v1/builder
pub async fn handle_get_builder(State(state): State<AppState>) -> Json<BuilderView> {
    let snapshot = state.workspace.snapshot().await;
    Json(builder_view(&state, snapshot, false))
}

/// POST /api/v1/builder/next
pub async fn handle_next(State(state): State<AppState>) -> Json<BuilderView> {
    let (transition, snapshot) = state
        .workspace
        .with_session(|_, session| session.cursor.next())
        .await;
    let completed = transition == Transition::Completed;
    if completed {
        info!("Builder completed, handing off to preview");
    }
    Json(builder_view(&state, snapshot, completed))
}

/// POST /api/v1/builder/previous
pub async fn handle_previous(State(state): State<AppState>) -> Json<BuilderView> {
    let (_, snapshot) = state
        .workspace
        .with_session(|_, session| session.cursor.previous())
        .await;
    Json(builder_view(&state, snapshot, false))
}

/// POST /api/v1/builder/jump
pub async fn handle_jump(
    State(state): State<AppState>,
    Json(req): Json<JumpRequest>,
) -> Result<Json<BuilderView>, AppError> {
    let (result, snapshot) = state
        .workspace
        .with_session(|_, session| session.cursor.jump(&req.step))
        .await;
    result?;
    Ok(Json(builder_view(&state, snapshot, false)))
}
