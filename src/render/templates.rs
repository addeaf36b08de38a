//! Template rendering with Tera
//!
//! Templates are registered under `.html` names so Tera autoescapes every
//! interpolated value.

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

/// Template renderer
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Create a new template renderer with embedded templates
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_template("results.html", include_str!("../templates/results.html"))?;
        tera.add_raw_template("profile.html", include_str!("../templates/profile.html"))?;
        tera.add_raw_template("summary.html", include_str!("../templates/summary.html"))?;
        tera.add_raw_template("status.html", include_str!("../templates/status.html"))?;

        Ok(Self { tera })
    }

    /// Render a template with context
    pub fn render(&self, template: &str, context: &impl Serialize) -> Result<String> {
        let ctx = Context::from_serialize(context)?;
        Ok(self.tera.render(template, &ctx)?)
    }

    /// Render a template with a Tera Context
    pub fn render_with_context(&self, template: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template, context)?)
    }
}
