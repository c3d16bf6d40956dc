pub mod health;

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::assist::handlers as assist;
use crate::export::handlers as export;
use crate::render::handlers as render;
use crate::state::AppState;
use crate::storage::handlers as storage;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Rendering
        .route("/api/v1/templates", get(render::handle_list_templates))
        .route("/api/v1/preview", post(render::handle_preview))
        .route("/api/v1/preview/config", get(render::handle_preview_config))
        .route("/api/v1/export/print", post(export::handle_print))
        // Resume collections
        .route(
            "/api/v1/users/:user_id/resumes",
            get(storage::handle_list_resumes)
                .put(storage::handle_save_resumes)
                .post(storage::handle_create_resume),
        )
        .route(
            "/api/v1/users/:user_id/resumes/:resume_id",
            put(storage::handle_update_resume).delete(storage::handle_delete_resume),
        )
        .route(
            "/api/v1/users/:user_id/resumes/:resume_id/sections",
            patch(storage::handle_edit_section),
        )
        // AI assist
        .route("/api/v1/assist/parse/text", post(assist::handle_parse_text))
        .route("/api/v1/assist/parse/file", post(assist::handle_parse_file))
        .route("/api/v1/assist/improve", post(assist::handle_improve))
        .route(
            "/api/v1/assist/suggest-titles",
            post(assist::handle_suggest_titles),
        )
        .route("/api/v1/assist/ats", post(assist::handle_ats))
        .route("/api/v1/assist/ats/apply", post(assist::handle_ats_apply))
        .route(
            "/api/v1/assist/cover-letter",
            post(assist::handle_cover_letter),
        )
        .with_state(state)
}
