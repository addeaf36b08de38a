//! HTML fragment rendering
//!
//! Every piece of remote text goes through Tera's autoescaping, so no value
//! from the directory service can inject markup.

mod card;
mod templates;

pub use card::{initials, truncate, CardView, ProfileView};
pub use templates::Templates;

use crate::api::Person;
use crate::config::UiSettings;
use crate::results::ResultSet;
use crate::search::SearchMode;
use anyhow::Result;
use serde::Serialize;
use tera::Context;

#[derive(Serialize)]
struct ResultsContext {
    cards: Vec<CardView>,
}

/// Renders result lists, profiles, summaries and status placeholders
pub struct Renderer {
    templates: Templates,
    ui: UiSettings,
}

impl Renderer {
    pub fn new(ui: UiSettings) -> Result<Self> {
        Ok(Self {
            templates: Templates::new()?,
            ui,
        })
    }

    /// Card list, or the "no results" placeholder for an empty set
    pub fn results(&self, results: &ResultSet) -> Result<String> {
        let cards = results
            .people()
            .iter()
            .map(|p| CardView::new(p, self.ui.bio_preview_length, self.ui.card_tag_limit))
            .collect();
        self.templates
            .render("results.html", &ResultsContext { cards })
    }

    /// Full profile for the modal
    pub fn profile(&self, person: &Person) -> Result<String> {
        self.templates
            .render("profile.html", &ProfileView::from(person))
    }

    /// AI summary panel; blank lines separate paragraphs
    pub fn summary(&self, text: &str) -> Result<String> {
        let paragraphs: Vec<&str> = text
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        let mut ctx = Context::new();
        ctx.insert("paragraphs", &paragraphs);
        self.templates.render_with_context("summary.html", &ctx)
    }

    /// Loading indicator shown as soon as a search is dispatched
    pub fn loading(&self, mode: SearchMode) -> Result<String> {
        let message = match mode {
            SearchMode::Lexical => "Searching...",
            SearchMode::Semantic => "Searching with AI...",
        };
        self.status("loading", message)
    }

    /// Inline error placeholder for the result area
    pub fn error(&self, message: &str) -> Result<String> {
        self.status("error", message)
    }

    fn status(&self, kind: &str, message: &str) -> Result<String> {
        let mut ctx = Context::new();
        ctx.insert("kind", kind);
        ctx.insert("message", message);
        self.templates.render_with_context("status.html", &ctx)
    }
}
