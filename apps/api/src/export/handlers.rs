use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::models::resume::Resume;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintRequest {
    pub resume: Resume,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintResponse {
    /// Complete standalone HTML document for the isolated print context.
    pub html: String,
}

/// POST /api/v1/export/print
///
/// Print document assembly is total over arbitrary stored data, so this
/// is infallible once the request deserializes.
pub async fn handle_print(
    State(state): State<AppState>,
    Json(req): Json<PrintRequest>,
) -> Json<PrintResponse> {
    let html = super::print_document(&state.registry, &req.resume);
    Json(PrintResponse { html })
}
