//! Dialoguer-based implementations of prompt interfaces
//!
//! This module provides concrete implementations of the prompt interfaces
//! using the dialoguer library for terminal user interaction.

use super::interface::{
    ConfirmationConfig, ConfirmationPrompter, NoticeLevel, Notifier, SingleChoiceConfig,
    SingleChoicePrompter, TextPromptConfig, TextPrompter,
};
use crate::error::Result;
use dialoguer::{Confirm, Input, Select};
use std::io;

/// Dialoguer-based implementation of all prompt interfaces
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl SingleChoicePrompter for DialoguerPrompter {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<Option<usize>> {
        Ok(Select::new()
            .with_prompt(&config.prompt)
            .items(&config.items)
            .default(0)
            .interact_opt()?)
    }
}

impl TextPrompter for DialoguerPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<Option<String>> {
        let blank_error = config.blank_error.clone();
        let input = Input::<String>::new()
            .with_prompt(&config.prompt)
            .validate_with(move |value: &String| -> std::result::Result<(), String> {
                if value.trim().is_empty() {
                    Err(blank_error.clone())
                } else {
                    Ok(())
                }
            })
            .interact_text();

        // `Input` has no dismiss key and ignores Esc. The only cancellation is a
        // read interrupted by a signal the process survives, which surfaces as
        // `Interrupted`; a default Ctrl-C terminates the process instead.
        match input {
            Ok(value) => Ok(Some(value)),
            Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl ConfirmationPrompter for DialoguerPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        let answer = Confirm::new()
            .with_prompt(&config.prompt)
            .default(config.default)
            .interact_opt()?;

        Ok(answer.unwrap_or(false))
    }
}

impl Notifier for DialoguerPrompter {
    fn notify(&self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Info => println!("{message}"),
            NoticeLevel::Warning => eprintln!("warning: {message}"),
            NoticeLevel::Error => eprintln!("error: {message}"),
        }
    }
}
