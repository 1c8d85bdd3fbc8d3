//! Narrowing of raw JSON into a [`BlueprintConfig`].
//!
//! `serde_json` keeps only the last of several identical object keys, so the
//! top level is read through [`RawConfig`], which keeps every entry in source
//! order. That lets duplicate blueprint names be reported instead of silently
//! collapsed.

use crate::config::types::{Blueprint, BlueprintConfig, FileSpec};
use crate::error::{ConfigError, ShapeError};
use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// Top level of a configuration document before validation.
#[derive(Debug)]
pub enum RawConfig {
    /// A JSON object, entries in source order, duplicates included.
    Object(Vec<(String, Value)>),
    /// Anything else: array, string, number, bool or null.
    NotObject,
}

impl<'de> Deserialize<'de> for RawConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RawConfigVisitor)
    }
}

struct RawConfigVisitor;

impl<'de> Visitor<'de> for RawConfigVisitor {
    type Value = RawConfig;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON document")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawConfig, A::Error> {
        let mut entries = Vec::new();
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            entries.push((key, value));
        }
        Ok(RawConfig::Object(entries))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RawConfig, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(RawConfig::NotObject)
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<RawConfig, E> {
        Ok(RawConfig::NotObject)
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<RawConfig, E> {
        Ok(RawConfig::NotObject)
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<RawConfig, E> {
        Ok(RawConfig::NotObject)
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<RawConfig, E> {
        Ok(RawConfig::NotObject)
    }

    fn visit_str<E: de::Error>(self, _: &str) -> Result<RawConfig, E> {
        Ok(RawConfig::NotObject)
    }

    fn visit_unit<E: de::Error>(self) -> Result<RawConfig, E> {
        Ok(RawConfig::NotObject)
    }

    fn visit_none<E: de::Error>(self) -> Result<RawConfig, E> {
        Ok(RawConfig::NotObject)
    }
}

/// Parses configuration text. `source` only appears in error messages.
pub fn parse_config(text: &str, source: &Path) -> Result<BlueprintConfig, ConfigError> {
    let raw: RawConfig = serde_json::from_str(text)
        .map_err(|e| ConfigError::Parse { path: source.to_path_buf(), source: e })?;
    validate_raw(raw)
}

/// Validates an already parsed top level.
pub fn validate_raw(raw: RawConfig) -> Result<BlueprintConfig, ConfigError> {
    let RawConfig::Object(entries) = raw else {
        return Err(ShapeError::TopLevelNotObject.into());
    };

    let mut seen = HashSet::new();
    let mut config = BlueprintConfig::new();
    for (name, value) in entries {
        if !seen.insert(name.clone()) {
            return Err(ConfigError::DuplicateKey { name });
        }
        let blueprint = validate_blueprint(&name, &value)?;
        config.insert(name, blueprint);
    }
    Ok(config)
}

/// Validates a `serde_json::Value`. Duplicate keys cannot be detected here
/// because the value has already collapsed them.
pub fn validate_value(value: &Value) -> Result<BlueprintConfig, ConfigError> {
    match value {
        Value::Object(map) => validate_raw(RawConfig::Object(
            map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        )),
        _ => Err(ShapeError::TopLevelNotObject.into()),
    }
}

fn validate_blueprint(name: &str, value: &Value) -> Result<Blueprint, ShapeError> {
    let Value::Object(object) = value else {
        return Err(ShapeError::BlueprintNotObject { blueprint: name.to_string() });
    };
    let Some(Value::Array(entries)) = object.get("files") else {
        return Err(ShapeError::MissingFiles { blueprint: name.to_string() });
    };
    if entries.is_empty() {
        return Err(ShapeError::EmptyFiles { blueprint: name.to_string() });
    }

    let files = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| validate_file(name, index, entry))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Blueprint { files })
}

fn validate_file(blueprint: &str, index: usize, value: &Value) -> Result<FileSpec, ShapeError> {
    let Value::Object(entry) = value else {
        return Err(ShapeError::FileNotObject { blueprint: blueprint.to_string(), index });
    };

    let path = match string_field(entry, "path") {
        Some(path) if !path.trim().is_empty() => path,
        _ => {
            return Err(ShapeError::InvalidPath { blueprint: blueprint.to_string(), index })
        }
    };
    let Some(content) = string_field(entry, "content") else {
        return Err(ShapeError::InvalidContent { blueprint: blueprint.to_string(), index });
    };

    Ok(FileSpec::new(path, content))
}

fn string_field<'a>(entry: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    entry.get(key).and_then(Value::as_str)
}
