/// Handles argument parsing and command dispatch.
pub mod cli;

/// Constants used throughout the crate.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// PascalCase, kebab-case and snake_case conversion of base names.
pub mod case;

/// Flat `{{token}}` template substitution.
pub mod renderer;

/// Blueprint configuration loading and validation.
pub mod config;

/// File access capability and its implementations.
pub mod ioutils;

/// User input and interaction handling.
pub mod prompt;

/// License capability for paid blueprints.
pub mod license;

/// Workspace root resolution.
pub mod workspace;

/// Blueprint generation pipeline.
pub mod generate;

/// Extension traits for standard library types.
pub mod ext;
