//! Résumé document renderer.
//!
//! `(ResumeData, template id) → PDF bytes`. Pure and synchronous: each call owns
//! its canvas, so renders may run concurrently without coordination. The HTTP
//! layer runs it inside `tokio::task::spawn_blocking`.
//!
//! Templates are layout strategies registered by id in a `TemplateRegistry`.
//! They differ only in presentational constants and in how they draw the
//! header and section headings; the section walk, wrapping and cursor
//! advancement live in `layout`.

pub mod canvas;
pub mod font_metrics;
pub mod handlers;
pub mod layout;
pub mod templates;

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::models::ResumeData;
use crate::render::canvas::{PageCanvas, A4};

pub use layout::LayoutStrategy;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template not found: {0}")]
    UnknownTemplate(String),

    #[error("Character {0:?} cannot be encoded in the document font")]
    UnsupportedCharacter(char),

    #[error("PDF serialization failed: {0}")]
    Pdf(String),
}

/// Public description of a template; the layout itself is never exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Template id → layout strategy, plus the display order used for listing.
#[derive(Clone, Default)]
pub struct TemplateRegistry {
    strategies: HashMap<&'static str, Arc<dyn LayoutStrategy>>,
    order: Vec<&'static str>,
}

impl TemplateRegistry {
    /// Registry with the built-in `modern`, `clean` and `professional` templates.
    pub fn with_builtin_templates() -> Self {
        let mut registry = Self::default();
        registry.register(Arc::new(templates::ModernTemplate::new()));
        registry.register(Arc::new(templates::CleanTemplate::new()));
        registry.register(Arc::new(templates::ProfessionalTemplate::new()));
        registry
    }

    /// Registers a strategy under its id, replacing any previous one.
    pub fn register(&mut self, strategy: Arc<dyn LayoutStrategy>) {
        let id = strategy.id();
        if self.strategies.insert(id, strategy).is_none() {
            self.order.push(id);
        }
    }

    pub fn get(&self, id: &str) -> Result<&Arc<dyn LayoutStrategy>, RenderError> {
        self.strategies
            .get(id)
            .ok_or_else(|| RenderError::UnknownTemplate(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.strategies.contains_key(id)
    }

    pub fn list(&self) -> Vec<TemplateInfo> {
        self.order
            .iter()
            .filter_map(|id| self.strategies.get(id))
            .map(|s| TemplateInfo {
                id: s.id(),
                name: s.name(),
                description: s.description(),
            })
            .collect()
    }

    /// Renders `data` with the template registered as `template_id`.
    ///
    /// The template is resolved before any drawing, so an unknown id produces
    /// no partial output.
    pub fn render(&self, data: &ResumeData, template_id: &str) -> Result<Vec<u8>, RenderError> {
        let strategy = self.get(template_id)?;
        let mut canvas = PageCanvas::new(A4, strategy.typography().margins);
        layout::layout_document(strategy.as_ref(), data, &mut canvas)?;
        debug!("Laid out {} page(s) with template '{template_id}'", canvas.page_count());
        canvas.finish()
    }
}
