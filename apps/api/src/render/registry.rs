//! Template registry — the single lookup from template key to renderer,
//! shared by the editable preview and the print path so the mapping is
//! never duplicated at call sites.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::models::resume::{Resume, DEFAULT_TEMPLATE};
use crate::render::document::DocumentView;
use crate::render::templates::{modern::ModernTemplate, professional::ProfessionalTemplate};
use crate::render::Renderer;

pub struct TemplateRegistry {
    templates: HashMap<&'static str, Arc<dyn Renderer>>,
}

impl TemplateRegistry {
    /// Registry with every built-in template.
    pub fn with_defaults() -> Self {
        let mut registry = TemplateRegistry {
            templates: HashMap::new(),
        };
        registry.register(Arc::new(ProfessionalTemplate));
        registry.register(Arc::new(ModernTemplate));
        registry
    }

    pub fn register(&mut self, renderer: Arc<dyn Renderer>) {
        self.templates.insert(renderer.key(), renderer);
    }

    /// Looks up a renderer by key. Unknown keys fall back to the default
    /// template — stored data may reference a template that no longer
    /// exists, and rendering must stay total.
    pub fn get(&self, key: &str) -> &Arc<dyn Renderer> {
        self.templates.get(key).unwrap_or_else(|| {
            debug!("unknown template key {key:?}, falling back to {DEFAULT_TEMPLATE}");
            &self.templates[DEFAULT_TEMPLATE]
        })
    }

    /// Renders a resume with its selected template.
    pub fn render(&self, resume: &Resume) -> DocumentView {
        self.get(&resume.template).render(resume)
    }

    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = self.templates.keys().copied().collect();
        keys.sort_unstable();
        keys
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_has_both_templates() {
        let registry = TemplateRegistry::with_defaults();
        assert_eq!(registry.keys(), vec!["modern", "professional"]);
    }

    #[test]
    fn test_unknown_key_falls_back_to_default() {
        let registry = TemplateRegistry::with_defaults();
        let mut resume = Resume::blank("Test");
        resume.template = "retired-template".to_string();
        let view = registry.render(&resume);
        assert_eq!(view.template, DEFAULT_TEMPLATE);
    }

    #[test]
    fn test_selected_template_is_used() {
        let registry = TemplateRegistry::with_defaults();
        let resume = Resume::from_template("Test", "modern");
        let view = registry.render(&resume);
        assert_eq!(view.template, "modern");
    }
}
