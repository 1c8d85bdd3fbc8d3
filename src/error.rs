use crate::constants::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Schema violations found while validating a parsed configuration.
///
/// `index` is zero-based; messages print it one-based so it matches what a
/// person counts in the file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("Config must be a top-level JSON object (not an array).")]
    TopLevelNotObject,

    #[error("Blueprint '{blueprint}' must be an object with a 'files' array.")]
    BlueprintNotObject { blueprint: String },

    #[error("Blueprint '{blueprint}' is missing a 'files' array.")]
    MissingFiles { blueprint: String },

    #[error("Blueprint '{blueprint}' has an empty 'files' array. At least one file entry is required.")]
    EmptyFiles { blueprint: String },

    #[error("File entry #{} in blueprint '{blueprint}' must be an object with 'path' and 'content' strings.", .index + 1)]
    FileNotObject { blueprint: String, index: usize },

    #[error("File entry #{} in blueprint '{blueprint}' is missing a valid 'path' string.", .index + 1)]
    InvalidPath { blueprint: String, index: usize },

    #[error("File entry #{} in blueprint '{blueprint}' is missing a valid 'content' string.", .index + 1)]
    InvalidContent { blueprint: String, index: usize },
}

/// Failures of the configuration loader. Never raised as a panic; callers decide
/// how to present them.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(".blueprint-architect.json not found in '{}'. Run `blueprint init` to scaffold a starter config.", .path.display())]
    NotFound { path: PathBuf },

    #[error("Config file '{}' is not valid JSON: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid config: {0} See the README for an example.")]
    Shape(#[from] ShapeError),

    #[error("Duplicate blueprint name '{name}' found. Each blueprint key must be unique.")]
    DuplicateKey { name: String },

    #[error("Unexpected error reading config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Prompt failed: {0}.")]
    PromptError(#[from] dialoguer::Error),

    #[error("No workspace is open.")]
    NoWorkspace,

    #[error("No blueprints found in config.")]
    NoBlueprints,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(exit_codes::FAILURE);
}
