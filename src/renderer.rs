//! Flat `{{token}}` substitution for blueprint paths and contents.

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").expect("valid regex")
});

/// Token name to replacement value.
pub type Variables = HashMap<String, String>;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given variables.
    ///
    /// Rendering never fails: a token with no value renders as an empty string.
    fn render(&self, template: &str, variables: &Variables) -> String;
}

/// Replaces `{{ token }}` placeholders; there is no escape syntax.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokenRenderer;

impl TokenRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for TokenRenderer {
    fn render(&self, template: &str, variables: &Variables) -> String {
        PLACEHOLDER
            .replace_all(template, |caps: &Captures| {
                variables.get(&caps[1]).cloned().unwrap_or_default()
            })
            .into_owned()
    }
}

/// Renders with the default [`TokenRenderer`].
pub fn render_template(template: &str, variables: &Variables) -> String {
    TokenRenderer.render(template, variables)
}
