//! Blueprint configuration
//!
//! - `types`: the validated configuration model
//! - `validate`: narrowing of raw JSON into the model
//! - `loader`: reading the configuration file from a workspace root
//! - `starter`: the starter configuration written by `blueprint init`

pub mod loader;
pub mod starter;
pub mod types;
pub mod validate;


pub use loader::{config_path, load_config};
pub use starter::{starter_config, starter_config_json};
pub use types::{Blueprint, BlueprintConfig, FileSpec};
pub use validate::{parse_config, validate_value, RawConfig};
