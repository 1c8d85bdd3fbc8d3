//! Name case transformations.
//!
//! Word boundaries are ASCII-only: a lowercase letter or digit followed by an
//! uppercase letter, or any run of characters outside `[A-Za-z0-9]`. Every
//! function is total; input made only of separators yields an empty string.

use crate::constants::tokens;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid regex"));
static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]+").expect("valid regex"));
static UPPERCASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z])").expect("valid regex"));

/// `"my component"` -> `"MyComponent"`
pub fn to_pascal_case(input: &str) -> String {
    let spaced = CAMEL_BOUNDARY.replace_all(input, "$1 $2");
    let spaced = NON_ALPHANUMERIC.replace_all(&spaced, " ");

    spaced
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect()
}

/// `"MyComponent"` -> `"my-component"`
pub fn to_kebab_case(input: &str) -> String {
    separate_words(input, '-')
}

/// `"my-component"` -> `"my_component"`
pub fn to_snake_case(input: &str) -> String {
    separate_words(input, '_')
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(&chars.as_str().to_ascii_lowercase());
            out
        }
        None => String::new(),
    }
}

fn separate_words(input: &str, separator: char) -> String {
    let boundary = format!("${{1}}{separator}${{2}}");
    let sep = separator.to_string();

    let marked = CAMEL_BOUNDARY.replace_all(input, boundary.as_str());
    let marked = NON_ALPHANUMERIC.replace_all(&marked, sep.as_str());
    let marked = UPPERCASE.replace_all(&marked, format!("{separator}${{1}}").as_str());

    let mut out = String::with_capacity(marked.len());
    for ch in marked.trim_matches(separator).chars() {
        if ch == separator && out.ends_with(separator) {
            continue;
        }
        out.push(ch.to_ascii_lowercase());
    }
    out
}

/// The case variants of one base name, derived once per generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseVariants {
    pub pascal: String,
    pub kebab: String,
    pub snake: String,
}

impl CaseVariants {
    pub fn new(base_name: &str) -> Self {
        Self {
            pascal: to_pascal_case(base_name),
            kebab: to_kebab_case(base_name),
            snake: to_snake_case(base_name),
        }
    }

    /// Token map understood by the template renderer.
    pub fn to_variables(&self) -> HashMap<String, String> {
        HashMap::from([
            (tokens::PASCAL_CASE.to_string(), self.pascal.clone()),
            (tokens::KEBAB_CASE.to_string(), self.kebab.clone()),
            (tokens::SNAKE_CASE.to_string(), self.snake.clone()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_to_pascal_case() {
        assert_eq!(to_pascal_case("my component"), "MyComponent");
        assert_eq!(to_pascal_case("my_component"), "MyComponent");
        assert_eq!(to_pascal_case("my-component"), "MyComponent");
        assert_eq!(to_pascal_case("myComponent"), "MyComponent");
        assert_eq!(to_pascal_case("HTTP server"), "HttpServer");
    }

    #[test]
    fn converts_to_kebab_case() {
        assert_eq!(to_kebab_case("MyComponent"), "my-component");
        assert_eq!(to_kebab_case("my_component"), "my-component");
        assert_eq!(to_kebab_case("my component"), "my-component");
        assert_eq!(to_kebab_case("  --my   component--  "), "my-component");
    }

    #[test]
    fn converts_to_snake_case() {
        assert_eq!(to_snake_case("MyComponent"), "my_component");
        assert_eq!(to_snake_case("my-component"), "my_component");
        assert_eq!(to_snake_case("my component"), "my_component");
    }

    #[test]
    fn uppercase_runs_split_per_letter() {
        assert_eq!(to_kebab_case("ABC"), "a-b-c");
        assert_eq!(to_snake_case("ABC"), "a_b_c");
        assert_eq!(to_pascal_case("ABC"), "Abc");
    }

    #[test]
    fn digits_are_word_characters() {
        assert_eq!(to_pascal_case("widget2 panel"), "Widget2Panel");
        assert_eq!(to_kebab_case("widget2Panel"), "widget2-panel");
        assert_eq!(to_snake_case("v2"), "v2");
    }

    #[test]
    fn separators_only_yield_empty_strings() {
        for input in ["", "---", "  ", "_-_ .!"] {
            assert_eq!(to_pascal_case(input), "");
            assert_eq!(to_kebab_case(input), "");
            assert_eq!(to_snake_case(input), "");
        }
    }

    #[test]
    fn transforms_are_idempotent() {
        let inputs = [
            "my component",
            "MyComponent",
            "user_profile-Card",
            "XMLHttpRequest2Handler",
            "a1B2c3",
            "  spaced   out  ",
            "ÜberWidget",
            "ABC",
        ];
        for input in inputs {
            let pascal = to_pascal_case(input);
            let kebab = to_kebab_case(input);
            let snake = to_snake_case(input);
            assert_eq!(to_pascal_case(&pascal), pascal, "pascal of {input:?}");
            assert_eq!(to_kebab_case(&kebab), kebab, "kebab of {input:?}");
            assert_eq!(to_snake_case(&snake), snake, "snake of {input:?}");
        }
    }

    #[test]
    fn variants_expose_template_tokens() {
        let variants = CaseVariants::new("my widget");
        let vars = variants.to_variables();
        assert_eq!(vars["Name_pascalCase"], "MyWidget");
        assert_eq!(vars["Name_kebabCase"], "my-widget");
        assert_eq!(vars["Name_snakeCase"], "my_widget");
    }
}
