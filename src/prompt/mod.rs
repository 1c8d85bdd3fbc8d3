//! User interaction capability
//!
//! The module is structured in layers:
//! - `interface`: Pure abstract interfaces independent of any UI library
//! - `dialoguer`: Concrete implementation using the dialoguer library

pub mod dialoguer;
pub mod interface;

pub use self::dialoguer::DialoguerPrompter;
pub use interface::*;

/// Convenience function to create the default prompt provider
pub fn get_prompt_provider() -> impl PromptProvider {
    DialoguerPrompter::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use std::cell::RefCell;

    #[derive(Default)]
    struct TestPromptProvider {
        notices: RefCell<Vec<(NoticeLevel, String)>>,
    }

    impl SingleChoicePrompter for TestPromptProvider {
        fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<Option<usize>> {
            Ok(config.items.len().checked_sub(1))
        }
    }

    impl TextPrompter for TestPromptProvider {
        fn prompt_text(&self, _config: &TextPromptConfig) -> Result<Option<String>> {
            Ok(Some("test".to_string()))
        }
    }

    impl ConfirmationPrompter for TestPromptProvider {
        fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
            Ok(config.default)
        }
    }

    impl Notifier for TestPromptProvider {
        fn notify(&self, level: NoticeLevel, message: &str) {
            self.notices.borrow_mut().push((level, message.to_string()));
        }
    }

    fn ask_all(provider: &dyn PromptProvider) -> Result<(Option<usize>, Option<String>, bool)> {
        let choice = provider.prompt_single_choice(&SingleChoiceConfig {
            prompt: "Choose one".to_string(),
            items: vec![ChoiceItem::new("A"), ChoiceItem::new("B")],
        })?;
        let text = provider.prompt_text(&TextPromptConfig {
            prompt: "Name".to_string(),
            blank_error: "required".to_string(),
        })?;
        let confirmed = provider.prompt_confirmation(&ConfirmationConfig {
            prompt: "Sure?".to_string(),
            default: true,
        })?;
        Ok((choice, text, confirmed))
    }

    #[test]
    fn test_custom_prompt_provider_as_trait_object() {
        let provider = TestPromptProvider::default();
        let (choice, text, confirmed) = ask_all(&provider).unwrap();
        assert_eq!(choice, Some(1));
        assert_eq!(text.as_deref(), Some("test"));
        assert!(confirmed);
    }

    #[test]
    fn test_notifier_helpers_set_levels() {
        let provider = TestPromptProvider::default();
        provider.info("a");
        provider.warn("b");
        provider.error("c");
        let levels: Vec<_> = provider.notices.borrow().iter().map(|(l, _)| *l).collect();
        assert_eq!(levels, vec![NoticeLevel::Info, NoticeLevel::Warning, NoticeLevel::Error]);
    }

    #[test]
    fn test_choice_item_display() {
        assert_eq!(ChoiceItem::new("hook").to_string(), "hook");
        assert_eq!(
            ChoiceItem::new("reactComponent").with_description("free").to_string(),
            "reactComponent (free)"
        );
    }
}
