//! Template engine wrapper.

use std::path::Path;

use minijinja::{path_loader, Environment, ErrorKind};

use crate::render::bindings::SharedBindings;
use crate::render::context::PageContext;

/// Error type for template rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("template {0:?} not found")]
    TemplateNotFound(String),

    #[error("template render failed: {0}")]
    Render(#[source] minijinja::Error),
}

/// Immutable template environment shared by all requests.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create an engine loading templates from the given directory, with
    /// the shared bindings installed.
    pub fn new(dir: &Path, bindings: &SharedBindings) -> Self {
        let mut env = Environment::new();
        env.set_loader(path_loader(dir));
        bindings.install(&mut env);
        Self { env }
    }

    /// Render the named template with the page context.
    pub fn render(&self, name: &str, context: &PageContext) -> Result<String, RenderError> {
        let template = self.env.get_template(name).map_err(|e| {
            if e.kind() == ErrorKind::TemplateNotFound {
                RenderError::TemplateNotFound(name.to_string())
            } else {
                RenderError::Render(e)
            }
        })?;

        template.render(context).map_err(RenderError::Render)
    }
}
