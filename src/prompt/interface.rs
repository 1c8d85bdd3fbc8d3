//! Pure interfaces for prompting without external dependencies
//!
//! These interfaces are independent of any specific UI library implementation.
//! A prompter returns `Ok(None)` when the user dismisses a prompt; that is a
//! normal exit, not an error.

use crate::error::Result;
use std::fmt;

/// One entry in a single choice list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceItem {
    pub label: String,
    pub description: Option<String>,
}

impl ChoiceItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), description: None }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl fmt::Display for ChoiceItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(description) => write!(f, "{} ({description})", self.label),
            None => f.write_str(&self.label),
        }
    }
}

/// Configuration for single choice selection
#[derive(Debug, Clone)]
pub struct SingleChoiceConfig {
    pub prompt: String,
    pub items: Vec<ChoiceItem>,
}

/// Configuration for text input prompts. Blank answers are refused with `blank_error`.
#[derive(Debug, Clone)]
pub struct TextPromptConfig {
    pub prompt: String,
    pub blank_error: String,
}

/// Configuration for boolean confirmation
#[derive(Debug, Clone)]
pub struct ConfirmationConfig {
    pub prompt: String,
    pub default: bool,
}

/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Abstract interface for single choice selection
pub trait SingleChoicePrompter {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<Option<usize>>;
}

/// Abstract interface for text input prompts
pub trait TextPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<Option<String>>;
}

/// Abstract interface for boolean confirmation. Dismissal counts as "no".
pub trait ConfirmationPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool>;
}

/// Abstract interface for advisory notifications
pub trait Notifier {
    fn notify(&self, level: NoticeLevel, message: &str);

    fn info(&self, message: &str) {
        self.notify(NoticeLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.notify(NoticeLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.notify(NoticeLevel::Error, message);
    }
}

/// Combined interface that provides all prompt types
pub trait PromptProvider:
    SingleChoicePrompter + TextPrompter + ConfirmationPrompter + Notifier
{
}

// Blanket implementation for any type that implements all prompt interfaces
impl<T> PromptProvider for T where
    T: SingleChoicePrompter + TextPrompter + ConfirmationPrompter + Notifier
{
}
