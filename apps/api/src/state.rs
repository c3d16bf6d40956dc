use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::preview::PreviewLayout;
use crate::render::registry::TemplateRegistry;
use crate::storage::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ResumeStore>,
    pub llm: LlmClient,
    pub config: Config,
    pub registry: Arc<TemplateRegistry>,
    pub preview_layout: PreviewLayout,
}
