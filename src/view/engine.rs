// ABOUTME: Handlebars engine wrapper for page rendering
// ABOUTME: Configures escaping, strict mode, built-in helpers and page templates

use handlebars::Handlebars;
use serde::Serialize;

use super::error::{Result, ViewError};
use super::{helpers, templates};

#[derive(Clone)]
pub struct PageEngine {
    handlebars: Handlebars<'static>,
}

impl PageEngine {
    /// Create a new page engine with all built-in helpers and templates.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // HTML escaping stays at the default; a missing context key is an
        // unrecoverable rendering failure rather than silent empty output.
        handlebars.set_strict_mode(true);
        handlebars.set_dev_mode(false);

        helpers::register_helpers(&mut handlebars)
            .map_err(|e| ViewError::HelperError(e.to_string()))?;
        templates::register_templates(&mut handlebars)?;

        Ok(Self { handlebars })
    }

    /// Render a registered template with the given context.
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(ViewError::RenderError)
    }

    /// Render an ad-hoc template string with the given context.
    pub fn render_template<T: Serialize>(&self, template: &str, context: &T) -> Result<String> {
        self.handlebars
            .render_template(template, context)
            .map_err(ViewError::RenderError)
    }
}
