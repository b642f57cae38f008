use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::builder::Selections;
use crate::editor::education::{self, EducationField};
use crate::editor::experience::{self, EntryTextTarget, ExperienceField};
use crate::editor::personal::{self, PersonalField};
use crate::editor::projects::{self, ProjectField};
use crate::editor::skills::{self, CategoryField, SkillField, SKILL_ID_PREFIX};
use crate::editor::summary::{self, LengthWarning, SummaryField, SummaryTarget};
use crate::editor::{new_entry_id, new_id_for, EditError, Section, SectionEntry};
use crate::errors::AppError;
use crate::models::demo::demo_resume;
use crate::models::resume::{
    Education, Experience, Project, ResumeData, SkillCategory, TemplateKind, DEFAULT_SKILL_LEVEL,
};
use crate::state::AppState;
use crate::suggest::prompts;
use crate::workspace::{Committed, Snapshot, WorkspaceError};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditResponse {
    pub resume: ResumeData,
    pub selections: Selections,
    /// False when the request left the resume as it was (e.g. removing the
    /// last entry of a section).
    pub changed: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<LengthWarning>,
}

impl EditResponse {
    fn new(resume: ResumeData, selections: Selections, changed: bool) -> Self {
        let warnings = summary::length_warnings(&resume.summary);
        Self {
            resume,
            selections,
            changed,
            warnings,
        }
    }
}

impl From<Committed> for EditResponse {
    fn from(c: Committed) -> Self {
        Self::new(c.data, c.session.selections, c.changed)
    }
}

impl From<Snapshot> for EditResponse {
    fn from(s: Snapshot) -> Self {
        Self::new(s.data, s.session.selections, false)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionResponse {
    pub suggestion: String,
    /// False when the target entry was removed while the suggestion was
    /// being generated; the text is then returned but not stored.
    pub applied: bool,
    pub resume: ResumeData,
    pub selections: Selections,
}

#[derive(Debug, Deserialize)]
pub struct TemplateRequest {
    pub template: TemplateKind,
}

#[derive(Debug, Deserialize)]
pub struct BulletRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct EntrySuggestRequest {
    #[serde(default)]
    pub target: EntryTextTarget,
}

#[derive(Debug, Deserialize)]
pub struct SummarySuggestRequest {
    pub target: SummaryTarget,
}

#[derive(Debug, Deserialize)]
pub struct AddSkillRequest {
    pub name: String,
    #[serde(default = "default_skill_level")]
    pub level: i64,
}

/// Reads the suggestion target of an entry. An empty body means the
/// description; anything else must be a valid request.
fn entry_target(body: &[u8]) -> Result<EntryTextTarget, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(EntryTextTarget::default());
    }
    serde_json::from_slice::<EntrySuggestRequest>(body)
        .map(|req| req.target)
        .map_err(|e| AppError::Validation(format!("Invalid suggestion request: {e}")))
}

fn default_skill_level() -> i64 {
    DEFAULT_SKILL_LEVEL.into()
}

// ────────────────────────────────────────────────────────────────────────────
// Shared plumbing
// ────────────────────────────────────────────────────────────────────────────

async fn commit<F>(state: &AppState, edit: F) -> Result<Json<EditResponse>, AppError>
where
    F: FnOnce(&ResumeData) -> Result<ResumeData, EditError>,
{
    let committed = state.workspace.commit(edit).await?;
    Ok(Json(committed.into()))
}

/// Appends a blank entry with a fresh id and selects it.
async fn add_and_select<T: SectionEntry>(
    state: &AppState,
    add: fn(&ResumeData, &str) -> ResumeData,
) -> Result<Json<EditResponse>, AppError> {
    let id = new_id_for::<T>();
    let section = T::SECTION;
    let committed = state
        .workspace
        .commit_with(|data, session| {
            let next = add(data, &id);
            session.selections.select(&next, section, &id)?;
            Ok(next)
        })
        .await?;
    info!(section = %section, id = %id, "Added entry");
    Ok(Json(committed.into()))
}

async fn remove(
    state: &AppState,
    section: Section,
    id: &str,
    op: fn(&ResumeData, &str) -> Result<ResumeData, EditError>,
) -> Result<Json<EditResponse>, AppError> {
    let committed = state.workspace.commit(|data| op(data, id)).await?;
    if committed.changed {
        info!(section = %section, id = %id, "Removed entry");
    } else {
        info!(section = %section, id = %id, "Kept last remaining entry");
    }
    Ok(Json(committed.into()))
}

async fn select(state: &AppState, section: Section, id: &str) -> Result<Json<EditResponse>, AppError> {
    let (result, snapshot) = state
        .workspace
        .with_session(|data, session| session.selections.select(data, section, id))
        .await;
    result?;
    Ok(Json(snapshot.into()))
}

/// Generates text for `prompt` and applies it to whatever the aggregate is
/// once the text arrives. The workspace lock is not held while generating.
async fn suggest_and_apply<F>(
    state: &AppState,
    prompt: &str,
    apply: F,
) -> Result<Json<SuggestionResponse>, AppError>
where
    F: FnOnce(&ResumeData, &str) -> Result<ResumeData, EditError>,
{
    let suggestion = state.suggest(prompt).await;

    let (resume, selections, applied) = match state
        .workspace
        .commit(|data| apply(data, &suggestion))
        .await
    {
        Ok(committed) => (committed.data, committed.session.selections, true),
        Err(WorkspaceError::Edit(e)) => {
            warn!("Discarding suggestion: {e}");
            let snapshot = state.workspace.snapshot().await;
            (snapshot.data, snapshot.session.selections, false)
        }
        Err(e) => return Err(e.into()),
    };

    Ok(Json(SuggestionResponse {
        suggestion,
        applied,
        resume,
        selections,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Whole resume
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<EditResponse> {
    Json(state.workspace.snapshot().await.into())
}

/// DELETE /api/v1/resume
pub async fn handle_reset_resume(
    State(state): State<AppState>,
) -> Result<Json<EditResponse>, AppError> {
    let snapshot = state.workspace.reset().await?;
    Ok(Json(snapshot.into()))
}

/// POST /api/v1/resume/demo
pub async fn handle_load_demo(
    State(state): State<AppState>,
) -> Result<Json<EditResponse>, AppError> {
    let snapshot = state.workspace.replace(demo_resume()).await?;
    Ok(Json(snapshot.into()))
}

/// PUT /api/v1/resume/template
pub async fn handle_set_template(
    State(state): State<AppState>,
    Json(req): Json<TemplateRequest>,
) -> Result<Json<EditResponse>, AppError> {
    info!("Switching template to {}", req.template.as_str());
    commit(&state, |data| {
        Ok(ResumeData {
            selected_template: req.template,
            ..data.clone()
        })
    })
    .await
}

// ────────────────────────────────────────────────────────────────────────────
// Personal info & summary
// ────────────────────────────────────────────────────────────────────────────

/// PATCH /api/v1/resume/personal
pub async fn handle_update_personal(
    State(state): State<AppState>,
    Json(field): Json<PersonalField>,
) -> Result<Json<EditResponse>, AppError> {
    commit(&state, |data| Ok(personal::update_personal(data, field))).await
}

/// PATCH /api/v1/resume/summary
pub async fn handle_update_summary(
    State(state): State<AppState>,
    Json(field): Json<SummaryField>,
) -> Result<Json<EditResponse>, AppError> {
    commit(&state, |data| Ok(summary::update_summary(data, field))).await
}

/// POST /api/v1/resume/summary/suggest
pub async fn handle_suggest_summary(
    State(state): State<AppState>,
    Json(req): Json<SummarySuggestRequest>,
) -> Result<Json<SuggestionResponse>, AppError> {
    let prompt = match req.target {
        SummaryTarget::ProfessionalSummary => prompts::PROFESSIONAL_SUMMARY_PROMPT,
        SummaryTarget::CareerObjective => prompts::CAREER_OBJECTIVE_PROMPT,
    };
    suggest_and_apply(&state, prompt, |data, text| {
        Ok(summary::apply_suggestion(data, req.target, text))
    })
    .await
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/education
pub async fn handle_add_education(
    State(state): State<AppState>,
) -> Result<Json<EditResponse>, AppError> {
    add_and_select::<Education>(&state, education::add_education).await
}

/// PATCH /api/v1/resume/education/:id
pub async fn handle_update_education(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(field): Json<EducationField>,
) -> Result<Json<EditResponse>, AppError> {
    commit(&state, |data| education::update_education(data, &id, field)).await
}

/// DELETE /api/v1/resume/education/:id
pub async fn handle_remove_education(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EditResponse>, AppError> {
    remove(&state, Section::Education, &id, education::remove_education).await
}

/// POST /api/v1/resume/education/:id/select
pub async fn handle_select_education(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EditResponse>, AppError> {
    select(&state, Section::Education, &id).await
}

/// POST /api/v1/resume/education/:id/suggest
pub async fn handle_suggest_education(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuggestionResponse>, AppError> {
    let data = state.workspace.data().await;
    let prompt = prompts::education_description(education::find_education(&data, &id)?);
    suggest_and_apply(&state, &prompt, |data, text| {
        education::apply_description_suggestion(data, &id, text)
    })
    .await
}

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/experience
pub async fn handle_add_experience(
    State(state): State<AppState>,
) -> Result<Json<EditResponse>, AppError> {
    add_and_select::<Experience>(&state, experience::add_experience).await
}

/// PATCH /api/v1/resume/experience/:id
pub async fn handle_update_experience(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(field): Json<ExperienceField>,
) -> Result<Json<EditResponse>, AppError> {
    commit(&state, |data| experience::update_experience(data, &id, field)).await
}

/// DELETE /api/v1/resume/experience/:id
pub async fn handle_remove_experience(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EditResponse>, AppError> {
    remove(&state, Section::Experience, &id, experience::remove_experience).await
}

/// POST /api/v1/resume/experience/:id/select
pub async fn handle_select_experience(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EditResponse>, AppError> {
    select(&state, Section::Experience, &id).await
}

/// POST /api/v1/resume/experience/:id/suggest
pub async fn handle_suggest_experience(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<SuggestionResponse>, AppError> {
    let target = entry_target(&body)?;
    let data = state.workspace.data().await;
    let entry = experience::find_experience(&data, &id)?;
    let prompt = match target {
        EntryTextTarget::Description => prompts::experience_description(entry),
        EntryTextTarget::Bullets => prompts::experience_bullets(entry),
    };
    suggest_and_apply(&state, &prompt, |data, text| {
        experience::apply_suggestion(data, &id, target, text)
    })
    .await
}

/// POST /api/v1/resume/experience/:id/bullets
pub async fn handle_add_experience_bullet(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<BulletRequest>,
) -> Result<Json<EditResponse>, AppError> {
    commit(&state, |data| {
        experience::add_experience_bullet(data, &id, &req.text)
    })
    .await
}

/// DELETE /api/v1/resume/experience/:id/bullets/:index
pub async fn handle_remove_experience_bullet(
    State(state): State<AppState>,
    Path((id, index)): Path<(String, usize)>,
) -> Result<Json<EditResponse>, AppError> {
    commit(&state, |data| {
        experience::remove_experience_bullet(data, &id, index)
    })
    .await
}

// ────────────────────────────────────────────────────────────────────────────
// Projects
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/projects
pub async fn handle_add_project(
    State(state): State<AppState>,
) -> Result<Json<EditResponse>, AppError> {
    add_and_select::<Project>(&state, projects::add_project).await
}

/// PATCH /api/v1/resume/projects/:id
pub async fn handle_update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(field): Json<ProjectField>,
) -> Result<Json<EditResponse>, AppError> {
    commit(&state, |data| projects::update_project(data, &id, field)).await
}

/// DELETE /api/v1/resume/projects/:id
pub async fn handle_remove_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EditResponse>, AppError> {
    remove(&state, Section::Projects, &id, projects::remove_project).await
}

/// POST /api/v1/resume/projects/:id/select
pub async fn handle_select_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EditResponse>, AppError> {
    select(&state, Section::Projects, &id).await
}

/// POST /api/v1/resume/projects/:id/suggest
pub async fn handle_suggest_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<SuggestionResponse>, AppError> {
    let target = entry_target(&body)?;
    let data = state.workspace.data().await;
    let entry = projects::find_project(&data, &id)?;
    let prompt = match target {
        EntryTextTarget::Description => prompts::project_description(entry),
        EntryTextTarget::Bullets => prompts::project_bullets(entry),
    };
    suggest_and_apply(&state, &prompt, |data, text| {
        projects::apply_suggestion(data, &id, target, text)
    })
    .await
}

/// POST /api/v1/resume/projects/:id/bullets
pub async fn handle_add_project_bullet(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<BulletRequest>,
) -> Result<Json<EditResponse>, AppError> {
    commit(&state, |data| projects::add_project_bullet(data, &id, &req.text)).await
}

/// DELETE /api/v1/resume/projects/:id/bullets/:index
pub async fn handle_remove_project_bullet(
    State(state): State<AppState>,
    Path((id, index)): Path<(String, usize)>,
) -> Result<Json<EditResponse>, AppError> {
    commit(&state, |data| projects::remove_project_bullet(data, &id, index)).await
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/skills
pub async fn handle_add_category(
    State(state): State<AppState>,
) -> Result<Json<EditResponse>, AppError> {
    add_and_select::<SkillCategory>(&state, skills::add_category).await
}

/// PATCH /api/v1/resume/skills/:id
pub async fn handle_update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(field): Json<CategoryField>,
) -> Result<Json<EditResponse>, AppError> {
    commit(&state, |data| skills::update_category(data, &id, field)).await
}

/// DELETE /api/v1/resume/skills/:id
pub async fn handle_remove_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EditResponse>, AppError> {
    remove(&state, Section::Skills, &id, skills::remove_category).await
}

/// POST /api/v1/resume/skills/:id/select
pub async fn handle_select_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EditResponse>, AppError> {
    select(&state, Section::Skills, &id).await
}

/// POST /api/v1/resume/skills/:id/suggest
pub async fn handle_suggest_skills(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuggestionResponse>, AppError> {
    let data = state.workspace.data().await;
    let prompt = prompts::skills(skills::find_category(&data, &id)?);
    suggest_and_apply(&state, &prompt, |data, text| {
        skills::apply_suggestion(data, &id, text, || new_entry_id(SKILL_ID_PREFIX))
    })
    .await
}

/// POST /api/v1/resume/skills/:id/skills
pub async fn handle_add_skill(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<AddSkillRequest>,
) -> Result<Json<EditResponse>, AppError> {
    let skill_id = new_entry_id(SKILL_ID_PREFIX);
    commit(&state, |data| {
        skills::add_skill(data, &id, &skill_id, &req.name, req.level)
    })
    .await
}

/// PATCH /api/v1/resume/skills/:id/skills/:skill_id
pub async fn handle_update_skill(
    State(state): State<AppState>,
    Path((id, skill_id)): Path<(String, String)>,
    Json(field): Json<SkillField>,
) -> Result<Json<EditResponse>, AppError> {
    commit(&state, |data| skills::update_skill(data, &id, &skill_id, field)).await
}

/// DELETE /api/v1/resume/skills/:id/skills/:skill_id
pub async fn handle_remove_skill(
    State(state): State<AppState>,
    Path((id, skill_id)): Path<(String, String)>,
) -> Result<Json<EditResponse>, AppError> {
    commit(&state, |data| skills::remove_skill(data, &id, &skill_id)).await
}
