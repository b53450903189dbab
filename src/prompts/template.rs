//! Compiled prompt templates backed by Handlebars.
//!
//! [`PromptTemplate`] wraps a Handlebars registry holding exactly one
//! registered template. Compilation happens once at construction;
//! rendering accepts any serializable set of variable bindings.
//! Strict mode is off, so unbound variables render as empty strings,
//! and HTML escaping is disabled since prompts are plain text rather
//! than markup.

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::PromptdError;

#[derive(Debug)]
pub struct PromptTemplate {
    name: String,
    registry: Handlebars<'static>,
}

impl PromptTemplate {
    /// Compile `source` into a renderable template.
    pub fn compile(name: &str, source: &str) -> Result<Self, PromptdError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);
        registry.register_escape_fn(handlebars::no_escape);
        registry
            .register_template_string(name, source)
            .map_err(|e| PromptdError::TemplateSyntax {
                name: name.to_string(),
                source: Box::new(e),
            })?;
        Ok(Self {
            name: name.to_string(),
            registry,
        })
    }

    /// Render the template with the given variable bindings.
    pub fn render<T: Serialize>(&self, vars: &T) -> Result<String, PromptdError> {
        self.registry
            .render(&self.name, vars)
            .map_err(|e| PromptdError::TemplateRender {
                name: self.name.clone(),
                source: Box::new(e),
            })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
