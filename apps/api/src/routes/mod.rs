pub mod health;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::builder::handlers as builder;
use crate::editor::handlers as editor;
use crate::render::handlers as render;
use crate::state::AppState;
use crate::suggest::handlers as suggest;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Screens
        .route("/", get(render::handle_landing))
        .route("/build", get(builder::handle_build))
        .route("/preview", get(render::handle_preview))
        .route("/export", get(render::handle_export))
        // Whole resume
        .route(
            "/api/v1/resume",
            get(editor::handle_get_resume).delete(editor::handle_reset_resume),
        )
        .route("/api/v1/resume/demo", post(editor::handle_load_demo))
        .route("/api/v1/resume/template", put(editor::handle_set_template))
        .route(
            "/api/v1/resume/personal",
            patch(editor::handle_update_personal),
        )
        .route(
            "/api/v1/resume/summary",
            patch(editor::handle_update_summary),
        )
        .route(
            "/api/v1/resume/summary/suggest",
            post(editor::handle_suggest_summary),
        )
        // Education
        .route("/api/v1/resume/education", post(editor::handle_add_education))
        .route(
            "/api/v1/resume/education/:id",
            patch(editor::handle_update_education)
                .delete(editor::handle_remove_education),
        )
        .route(
            "/api/v1/resume/education/:id/select",
            post(editor::handle_select_education),
        )
        .route(
            "/api/v1/resume/education/:id/suggest",
            post(editor::handle_suggest_education),
        )
        // Experience
        .route(
            "/api/v1/resume/experience",
            post(editor::handle_add_experience),
        )
        .route(
            "/api/v1/resume/experience/:id",
            patch(editor::handle_update_experience)
                .delete(editor::handle_remove_experience),
        )
        .route(
            "/api/v1/resume/experience/:id/select",
            post(editor::handle_select_experience),
        )
        .route(
            "/api/v1/resume/experience/:id/suggest",
            post(editor::handle_suggest_experience),
        )
        .route(
            "/api/v1/resume/experience/:id/bullets",
            post(editor::handle_add_experience_bullet),
        )
        .route(
            "/api/v1/resume/experience/:id/bullets/:index",
            delete(editor::handle_remove_experience_bullet),
        )
        // Projects
        .route("/api/v1/resume/projects", post(editor::handle_add_project))
        .route(
            "/api/v1/resume/projects/:id",
            patch(editor::handle_update_project)
                .delete(editor::handle_remove_project),
        )
        .route(
            "/api/v1/resume/projects/:id/select",
            post(editor::handle_select_project),
        )
        .route(
            "/api/v1/resume/projects/:id/suggest",
            post(editor::handle_suggest_project),
        )
        .route(
            "/api/v1/resume/projects/:id/bullets",
            post(editor::handle_add_project_bullet),
        )
        .route(
            "/api/v1/resume/projects/:id/bullets/:index",
            delete(editor::handle_remove_project_bullet),
        )
        // Skills
        .route("/api/v1/resume/skills", post(editor::handle_add_category))
        .route(
            "/api/v1/resume/skills/:id",
            patch(editor::handle_update_category)
                .delete(editor::handle_remove_category),
        )
        .route(
            "/api/v1/resume/skills/:id/select",
            post(editor::handle_select_category),
        )
        .route(
            "/api/v1/resume/skills/:id/suggest",
            post(editor::handle_suggest_skills),
        )
        .route(
            "/api/v1/resume/skills/:id/skills",
            post(editor::handle_add_skill),
        )
        .route(
            "/api/v1/resume/skills/:id/skills/:skill_id",
            patch(editor::handle_update_skill).delete(editor::handle_remove_skill),
        )
        // Builder
        .route("/api/v1/builder", get(builder::handle_get_builder))
        .route("/api/v1/builder/next", post(builder::handle_next))
        .route("/api/v1/builder/previous", post(builder::handle_previous))
        .route("/api/v1/builder/jump", post(builder::handle_jump))
        // Assistant
        .route("/api/v1/suggest", post(suggest::handle_suggest))
        .fallback(render::handle_not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::models::demo::demo_resume;
    use crate::store::{MemoryStore, ResumeStore};
    use crate::suggest::canned::{PROJECT_RESPONSE, SUMMARY_RESPONSE};
    use crate::suggest::CannedSuggester;
    use crate::workspace::Workspace;

    async fn app_with(store: Arc<MemoryStore>) -> Router {
        let workspace = Arc::new(Workspace::open(store).await.unwrap());
        let suggester = Arc::new(CannedSuggester::new(Duration::ZERO));
        build_router(AppState::new(workspace, suggester))
    }

    async fn app() -> Router {
        app_with(Arc::new(MemoryStore::new())).await
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();
        app.clone().oneshot(request).await.unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn text_body(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = app().await;
        let response = send(&app, Method::GET, "/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["service"], "vitae");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let app = app().await;
        let response = send(&app, Method::GET, "/nowhere", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_add_education_and_set_institution() {
        let store = Arc::new(MemoryStore::new());
        let app = app_with(store.clone()).await;

        let response = send(&app, Method::POST, "/api/v1/resume/education", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let id = body["selections"]["education"].as_str().unwrap().to_string();
        assert_eq!(body["resume"]["education"][0]["id"], id.as_str());

        let response = send(
            &app,
            Method::PATCH,
            &format!("/api/v1/resume/education/{id}"),
            Some(json!({"field": "institution", "value": "MIT"})),
        )
        .await;
        let body = json_body(response).await;
        assert_eq!(body["changed"], true);
        assert_eq!(body["resume"]["education"][0]["institution"], "MIT");
        assert_eq!(body["resume"]["education"][0]["degree"], "");

        let stored = store.load().await.unwrap().unwrap();
        assert_eq!(stored.education[0].institution, "MIT");
    }

    #[tokio::test]
    async fn test_update_missing_entry_is_not_found() {
        let app = app().await;
        let response = send(
            &app,
            Method::PATCH,
            "/api/v1/resume/experience/exp-404",
            Some(json!({"field": "company", "value": "Acme"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_current_clears_end_date() {
        let app = app_with(Arc::new(MemoryStore::with(demo_resume()))).await;
        let response = send(
            &app,
            Method::PATCH,
            "/api/v1/resume/experience/exp-2",
            Some(json!({"field": "current", "value": true})),
        )
        .await;
        let body = json_body(response).await;
        let entry = &body["resume"]["experience"][1];
        assert_eq!(entry["current"], true);
        assert_eq!(entry["endDate"], "");
    }

    #[tokio::test]
    async fn test_last_skill_category_is_kept() {
        let app = app().await;
        let body = json_body(send(&app, Method::POST, "/api/v1/resume/skills", None).await).await;
        let id = body["resume"]["skills"][0]["id"].as_str().unwrap().to_string();

        let response = send(
            &app,
            Method::DELETE,
            &format!("/api/v1/resume/skills/{id}"),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["changed"], false);
        assert_eq!(body["resume"]["skills"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_project_suggestion_is_applied() {
        let app = app_with(Arc::new(MemoryStore::with(demo_resume()))).await;
        let response = send(
            &app,
            Method::POST,
            "/api/v1/resume/projects/proj-1/suggest",
            Some(json!({"target": "description"})),
        )
        .await;
        let body = json_body(response).await;
        assert_eq!(body["applied"], true);
        assert_eq!(body["suggestion"], PROJECT_RESPONSE);
        assert_eq!(body["resume"]["projects"][0]["description"], PROJECT_RESPONSE);
    }

    #[tokio::test]
    async fn test_unknown_suggestion_target_is_rejected() {
        let app = app_with(Arc::new(MemoryStore::with(demo_resume()))).await;
        let response = send(
            &app,
            Method::POST,
            "/api/v1/resume/experience/exp-1/suggest",
            Some(json!({"target": "bullet"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "VALIDATION_ERROR");

        let body = json_body(send(&app, Method::GET, "/api/v1/resume", None).await).await;
        assert_eq!(
            body["resume"]["experience"][0]["description"],
            demo_resume().experience[0].description.as_str()
        );
    }

    #[tokio::test]
    async fn test_suggestion_without_body_fills_description() {
        let app = app_with(Arc::new(MemoryStore::with(demo_resume()))).await;
        let response = send(&app, Method::POST, "/api/v1/resume/projects/proj-1/suggest", None).await;
        let body = json_body(response).await;
        assert_eq!(body["applied"], true);
        assert_eq!(body["resume"]["projects"][0]["description"], PROJECT_RESPONSE);
    }

    #[tokio::test]
    async fn test_skill_levels_outside_range_are_clamped() {
        let app = app_with(Arc::new(MemoryStore::with(demo_resume()))).await;
        let response = send(
            &app,
            Method::POST,
            "/api/v1/resume/skills/cat-1/skills",
            Some(json!({"name": "Zig", "level": 300})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let added = body["resume"]["skills"][0]["skills"]
            .as_array()
            .unwrap()
            .last()
            .unwrap()
            .clone();
        assert_eq!(added["level"], 5);

        let skill_id = added["id"].as_str().unwrap().to_string();
        let response = send(
            &app,
            Method::PATCH,
            &format!("/api/v1/resume/skills/cat-1/skills/{skill_id}"),
            Some(json!({"field": "level", "value": -2})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let updated = body["resume"]["skills"][0]["skills"]
            .as_array()
            .unwrap()
            .last()
            .unwrap()
            .clone();
        assert_eq!(updated["level"], 1);
    }

    #[tokio::test]
    async fn test_summary_suggestion_fills_professional_summary() {
        let app = app().await;
        let response = send(
            &app,
            Method::POST,
            "/api/v1/resume/summary/suggest",
            Some(json!({"target": "professionalSummary"})),
        )
        .await;
        let body = json_body(response).await;
        assert_eq!(body["resume"]["summary"]["professionalSummary"], SUMMARY_RESPONSE);
    }

    #[tokio::test]
    async fn test_template_switch_changes_preview() {
        let app = app_with(Arc::new(MemoryStore::with(demo_resume()))).await;
        let response = send(
            &app,
            Method::PUT,
            "/api/v1/resume/template",
            Some(json!({"template": "technical"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = text_body(send(&app, Method::GET, "/preview", None).await).await;
        assert!(html.contains("data-template=\"technical\""));
    }

    #[tokio::test]
    async fn test_export_headers() {
        let app = app_with(Arc::new(MemoryStore::with(demo_resume()))).await;
        let response = send(&app, Method::GET, "/export", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(
            headers[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Alex_Johnson_Resume.html\"; \
             filename*=UTF-8''Alex_Johnson_Resume.html"
        );
        assert_eq!(
            headers[render::PDF_FILENAME_HEADER],
            "Alex_Johnson_Resume.pdf"
        );
    }

    #[tokio::test]
    async fn test_build_with_demo_resets_cursor() {
        let app = app().await;
        send(&app, Method::POST, "/api/v1/builder/next", None).await;
        send(&app, Method::POST, "/api/v1/builder/next", None).await;

        let body = json_body(send(&app, Method::GET, "/build?demo=true", None).await).await;
        assert_eq!(body["step"]["index"], 0);
        assert_eq!(body["resume"]["personalInfo"]["firstName"], "Alex");
        assert_eq!(body["steps"].as_array().unwrap().len(), 6);
        assert_eq!(body["generating"], false);

        let body = json_body(send(&app, Method::POST, "/api/v1/builder/next", None).await).await;
        assert_eq!(body["step"]["id"], "education");
        assert_eq!(body["activeEntry"], "edu-1");
    }

    #[tokio::test]
    async fn test_builder_walks_to_completion() {
        let app = app().await;
        let mut body = Value::Null;
        for _ in 0..5 {
            body = json_body(send(&app, Method::POST, "/api/v1/builder/next", None).await).await;
        }
        assert_eq!(body["step"]["label"], "Summary");
        assert_eq!(body["isLast"], true);
        assert!(body.get("completed").is_none());

        let body = json_body(send(&app, Method::POST, "/api/v1/builder/next", None).await).await;
        assert_eq!(body["completed"], "/preview");
        assert_eq!(body["step"]["index"], 5);
    }

    #[tokio::test]
    async fn test_builder_jump() {
        let app = app().await;
        let body = json_body(
            send(
                &app,
                Method::POST,
                "/api/v1/builder/jump",
                Some(json!({"step": "Projects"})),
            )
            .await,
        )
        .await;
        assert_eq!(body["step"]["index"], 3);
        assert_eq!(body["activeEntry"], Value::Null);

        let response = send(
            &app,
            Method::POST,
            "/api/v1/builder/jump",
            Some(json!({"step": 9})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(send(&app, Method::POST, "/api/v1/builder/previous", None).await).await;
        assert_eq!(body["step"]["index"], 2);
    }

    #[tokio::test]
    async fn test_free_form_assistant() {
        let app = app().await;
        let response = send(
            &app,
            Method::POST,
            "/api/v1/suggest",
            Some(json!({"prompt": "How should I describe my project?"})),
        )
        .await;
        let body = json_body(response).await;
        assert_eq!(body["suggestion"], PROJECT_RESPONSE);
        assert_eq!(body["backend"], "canned");

        let response = send(
            &app,
            Method::POST,
            "/api/v1/suggest",
            Some(json!({"prompt": "   "})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_reset_returns_default() {
        let app = app_with(Arc::new(MemoryStore::with(demo_resume()))).await;
        let body = json_body(send(&app, Method::DELETE, "/api/v1/resume", None).await).await;
        assert_eq!(body["resume"]["personalInfo"]["firstName"], "");
        assert_eq!(body["resume"]["selectedTemplate"], "classic");
    }
}
