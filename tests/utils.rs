#![allow(dead_code)]

use blueprint_architect::error::Result;
use blueprint_architect::prompt::{
    ConfirmationConfig, ConfirmationPrompter, NoticeLevel, Notifier, SingleChoiceConfig,
    SingleChoicePrompter, TextPromptConfig, TextPrompter,
};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Answer to the next single choice prompt.
#[derive(Debug, Clone)]
pub enum Choice {
    /// Pick the item with this label.
    Label(&'static str),
    /// Dismiss the prompt.
    Dismiss,
}

/// Prompter that replays scripted answers and records every notification.
///
/// Panics when a prompt is asked that has no scripted answer left, so tests
/// also assert which prompts appear.
#[derive(Default)]
pub struct ScriptedPrompter {
    choices: RefCell<VecDeque<Choice>>,
    texts: RefCell<VecDeque<Option<String>>>,
    confirms: RefCell<VecDeque<bool>>,
    pub choice_prompts: RefCell<Vec<SingleChoiceConfig>>,
    pub confirm_prompts: RefCell<Vec<String>>,
    pub notices: RefCell<Vec<(NoticeLevel, String)>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn choose(self, choice: Choice) -> Self {
        self.choices.borrow_mut().push_back(choice);
        self
    }

    pub fn text(self, answer: Option<&str>) -> Self {
        self.texts.borrow_mut().push_back(answer.map(str::to_string));
        self
    }

    pub fn confirm(self, answer: bool) -> Self {
        self.confirms.borrow_mut().push_back(answer);
        self
    }

    pub fn notices_at(&self, level: NoticeLevel) -> Vec<String> {
        self.notices
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.clone())
            .collect()
    }

    /// Asserts every scripted answer was consumed.
    pub fn assert_exhausted(&self) {
        assert!(self.choices.borrow().is_empty(), "unused choices");
        assert!(self.texts.borrow().is_empty(), "unused texts");
        assert!(self.confirms.borrow().is_empty(), "unused confirmations");
    }
}

impl SingleChoicePrompter for ScriptedPrompter {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<Option<usize>> {
        self.choice_prompts.borrow_mut().push(config.clone());
        let answer = self
            .choices
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected choice prompt: {}", config.prompt));
        Ok(match answer {
            Choice::Label(label) => Some(
                config
                    .items
                    .iter()
                    .position(|item| item.label == label)
                    .unwrap_or_else(|| panic!("no item labelled {label}")),
            ),
            Choice::Dismiss => None,
        })
    }
}

impl TextPrompter for ScriptedPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<Option<String>> {
        Ok(self
            .texts
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected text prompt: {}", config.prompt)))
    }
}

impl ConfirmationPrompter for ScriptedPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        self.confirm_prompts.borrow_mut().push(config.prompt.clone());
        Ok(self
            .confirms
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected confirmation: {}", config.prompt)))
    }
}

impl Notifier for ScriptedPrompter {
    fn notify(&self, level: NoticeLevel, message: &str) {
        self.notices.borrow_mut().push((level, message.to_string()));
    }
}

/// Every file below `root`, relative to it, sorted.
pub fn relative_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .map(|entry| entry.path().strip_prefix(root).unwrap().to_path_buf())
        .collect();
    files.sort();
    files
}

/// Prints a diff of files and their contents between two directories.
pub fn print_dir_diff(actual: &Path, expected: &Path) {
    let actual_files = relative_files(actual);
    let expected_files = relative_files(expected);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", actual);
    println!("Expected output: {:?}", expected);

    for file in actual_files.iter().filter(|f| !expected_files.contains(f)) {
        println!("  + {:?}", file);
    }
    for file in expected_files.iter().filter(|f| !actual_files.contains(f)) {
        println!("  - {:?}", file);
    }
    for file in actual_files.iter().filter(|f| expected_files.contains(f)) {
        let left = fs::read_to_string(actual.join(file)).unwrap_or_default();
        let right = fs::read_to_string(expected.join(file)).unwrap_or_default();
        if left != right {
            println!("\n  File: {:?}\n  --- Actual:\n{left}\n  --- Expected:\n{right}", file);
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts two directory trees are identical, printing the differences first.
pub fn assert_dirs_equal(actual: &Path, expected: &Path) {
    let different = dir_diff::is_different(actual, expected).unwrap();
    if different {
        print_dir_diff(actual, expected);
    }
    assert!(!different, "Directories differ. See above for details.");
}
