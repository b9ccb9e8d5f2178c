//! Built-in templates using the Tera template engine
//!
//! Templates are embedded in the binary. `.html` and `.xml` templates are
//! autoescaped; values already rendered to HTML are marked `| safe` in the
//! template itself.

use tera::{Context, Tera};

use crate::error::Result;

pub const INDEX_TEMPLATE: &str = "index.html";
pub const FEED_TEMPLATE: &str = "atom.xml";

/// Template renderer with the embedded templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            (INDEX_TEMPLATE, include_str!("index.html")),
            (FEED_TEMPLATE, include_str!("atom.xml")),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}
