//! Access tiers and extension handling per blueprint name.

use crate::constants::{tiers, COMPONENT_BLUEPRINTS, EXTENSION_CHOICES};

/// How a blueprint is offered in the selection list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Free,
    Paid,
    Unannotated,
}

impl Tier {
    pub fn label(self) -> Option<&'static str> {
        match self {
            Tier::Free => Some(tiers::FREE_LABEL),
            Tier::Paid => Some(tiers::PAID_LABEL),
            Tier::Unannotated => None,
        }
    }
}

/// Which blueprints are free, paid or component-like, and the extensions
/// offered for component-like blueprints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPolicy {
    pub free_blueprint: String,
    pub paid_blueprints: Vec<String>,
    pub component_blueprints: Vec<String>,
    /// `(extension without dot, description)`
    pub extensions: Vec<(String, String)>,
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self {
            free_blueprint: tiers::FREE_BLUEPRINT.to_string(),
            paid_blueprints: tiers::PAID_BLUEPRINTS.iter().map(|s| s.to_string()).collect(),
            component_blueprints: COMPONENT_BLUEPRINTS.iter().map(|s| s.to_string()).collect(),
            extensions: EXTENSION_CHOICES
                .iter()
                .map(|(ext, description)| (ext.to_string(), description.to_string()))
                .collect(),
        }
    }
}

impl AccessPolicy {
    pub fn tier(&self, blueprint: &str) -> Tier {
        if blueprint == self.free_blueprint {
            Tier::Free
        } else if self.is_paid(blueprint) {
            Tier::Paid
        } else {
            Tier::Unannotated
        }
    }

    pub fn is_paid(&self, blueprint: &str) -> bool {
        self.paid_blueprints.iter().any(|paid| paid == blueprint)
    }

    pub fn is_component(&self, blueprint: &str) -> bool {
        self.component_blueprints.iter().any(|component| component == blueprint)
    }

    /// Looks up an offered extension, with or without a leading dot.
    pub fn find_extension(&self, requested: &str) -> Option<&str> {
        let requested = requested.strip_prefix('.').unwrap_or(requested);
        self.extensions
            .iter()
            .map(|(ext, _)| ext.as_str())
            .find(|ext| ext.eq_ignore_ascii_case(requested))
    }
}
