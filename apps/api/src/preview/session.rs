//! A live preview session: the pipeline between "user edits data" and
//! "preview reflects it".
//!
//! Resume updates funnel through a debounce window so a keystroke storm in
//! a multi-hundred-field form never triggers a full template re-layout per
//! keystroke; resize events recompute only the scale factor, immediately
//! and idempotently, without re-rendering the document.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::design::{paper_dimensions, PaperDimensions};
use crate::models::resume::Resume;
use crate::preview::debounce::Debouncer;
use crate::preview::scaler::PreviewLayout;
use crate::render::document::DocumentView;
use crate::render::html::document_html;
use crate::render::registry::TemplateRegistry;

/// One rendered preview frame.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedPreview {
    pub view: DocumentView,
    pub html: String,
    /// True print page size — the scaling reference, independent of the
    /// viewport.
    pub page: PaperDimensions,
    pub scale: f64,
}

pub struct PreviewSession {
    registry: Arc<TemplateRegistry>,
    layout: PreviewLayout,
    debouncer: Debouncer<Resume>,
    container_width: f64,
    viewport_width: f64,
    current: Option<RenderedPreview>,
}

impl PreviewSession {
    pub fn new(
        registry: Arc<TemplateRegistry>,
        layout: PreviewLayout,
        debounce_window: Duration,
    ) -> Self {
        PreviewSession {
            registry,
            layout,
            debouncer: Debouncer::new(debounce_window),
            container_width: 0.0,
            viewport_width: 0.0,
            current: None,
        }
    }

    /// Queues a data change. The full re-render happens once the debounce
    /// window elapses without another update.
    pub fn update_resume(&mut self, resume: Resume) {
        self.debouncer.submit(resume);
    }

    /// Container/viewport size change. Recomputes the scale on the
    /// current frame right away — resize never waits on the debounce
    /// window and never re-renders content.
    pub fn resize(&mut self, container_width: f64, viewport_width: f64) {
        self.container_width = container_width;
        self.viewport_width = viewport_width;
        if let Some(frame) = &mut self.current {
            frame.scale =
                self.layout
                    .fit_scale(container_width, viewport_width, frame.page.width_px);
        }
    }

    /// Waits out the debounce window and renders the latest queued
    /// resume, if any, returning the fresh frame.
    pub async fn settle(&mut self) -> Option<&RenderedPreview> {
        let resume = self.debouncer.settled().await?;
        let view = self.registry.render(&resume);
        let page = paper_dimensions(resume.design.paper_size);
        let scale = self
            .layout
            .fit_scale(self.container_width, self.viewport_width, page.width_px);
        let html = document_html(&view);
        self.current = Some(RenderedPreview {
            view,
            html,
            page,
            scale,
        });
        self.current.as_ref()
    }

    pub fn current(&self) -> Option<&RenderedPreview> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{PaperSize, Skill, SkillsLayout};

    fn session() -> PreviewSession {
        PreviewSession::new(
            Arc::new(TemplateRegistry::with_defaults()),
            PreviewLayout::default(),
            Duration::from_millis(300),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_only_latest_update_is_rendered() {
        let mut session = session();
        session.resize(1000.0, 1920.0);

        let mut first = Resume::blank("First");
        first.personal_info.name = "Draft One".to_string();
        let mut second = Resume::blank("Second");
        second.personal_info.name = "Draft Two".to_string();

        session.update_resume(first);
        session.update_resume(second);

        let frame = session.settle().await.expect("frame");
        assert!(frame.view.contains_text("Draft Two"));
        assert!(!frame.view.contains_text("Draft One"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_resize_rescales_without_rerender() {
        let mut session = session();
        session.resize(1000.0, 1920.0);
        session.update_resume(Resume::blank("Test"));
        session.settle().await.expect("frame");

        let before = session.current().unwrap().scale;
        session.resize(500.0, 1920.0);
        let after = session.current().unwrap().scale;
        assert!(after < before);
        // No pending re-render was scheduled by the resize.
        assert!(session.settle().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_a4_comma_skills_end_to_end() {
        let mut session = session();
        session.resize(2000.0, 1920.0);

        let mut resume = Resume::blank("Test");
        resume.design.paper_size = PaperSize::A4;
        resume.design.skills_layout = SkillsLayout::Comma;
        resume.skills = vec![
            Skill::named("Go"),
            Skill::named("Rust"),
            Skill::named("TS"),
        ];
        session.update_resume(resume);

        let frame = session.settle().await.expect("frame");
        assert!(frame.view.contains_text("Go, Rust, TS"));
        assert!((frame.page.width_px - 793.7).abs() < 0.1);
        assert_eq!(frame.scale, 1.0, "page fits 1:1 in a wide container");
    }

    #[tokio::test]
    async fn test_zero_window_settles_immediately_for_one_shot_use() {
        // The HTTP preview handler runs a one-shot session with no
        // debounce; the frame must land on the first settle.
        let mut session = PreviewSession::new(
            Arc::new(TemplateRegistry::with_defaults()),
            PreviewLayout::default(),
            Duration::ZERO,
        );
        session.resize(1000.0, 1920.0);
        session.update_resume(Resume::blank("One-shot"));
        session.settle().await.expect("frame");
        let frame = session.current().expect("frame retained");
        assert!(frame.scale > 0.0 && frame.scale <= 1.0);
        assert!(!frame.html.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmeasured_container_defaults_to_full_scale() {
        let mut session = session();
        // Never resized: container width is 0 (not yet laid out).
        session.update_resume(Resume::blank("Test"));
        let frame = session.settle().await.expect("frame");
        assert_eq!(frame.scale, 1.0);
    }
}
