//! Blueprint configuration model

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One file of a blueprint: a path template and a content template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSpec {
    pub path: String,
    pub content: String,
}

impl FileSpec {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self { path: path.into(), content: content.into() }
    }
}

/// An ordered, non-empty list of file templates. Order is write order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blueprint {
    pub files: Vec<FileSpec>,
}

/// Named blueprints as read from the configuration file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlueprintConfig {
    blueprints: IndexMap<String, Blueprint>,
}

impl BlueprintConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, blueprint: Blueprint) {
        self.blueprints.insert(name.into(), blueprint);
    }

    pub fn get(&self, name: &str) -> Option<&Blueprint> {
        self.blueprints.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.blueprints.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.blueprints.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Blueprint)> {
        self.blueprints.iter().map(|(name, blueprint)| (name.as_str(), blueprint))
    }

    pub fn len(&self) -> usize {
        self.blueprints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blueprints.is_empty()
    }
}

impl FromIterator<(String, Blueprint)> for BlueprintConfig {
    fn from_iter<I: IntoIterator<Item = (String, Blueprint)>>(iter: I) -> Self {
        Self { blueprints: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_insertion_order() {
        let mut config = BlueprintConfig::new();
        let blueprint = Blueprint { files: vec![FileSpec::new("a", "")] };
        config.insert("zeta", blueprint.clone());
        config.insert("alpha", blueprint);
        assert_eq!(config.names().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let config: BlueprintConfig = [(
            "hook".to_string(),
            Blueprint { files: vec![FileSpec::new("use{{Name_pascalCase}}.ts", "x")] },
        )]
        .into_iter()
        .collect();
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"hook": {"files": [{"path": "use{{Name_pascalCase}}.ts", "content": "x"}]}})
        );
    }
}
