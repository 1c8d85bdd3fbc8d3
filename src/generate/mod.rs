//! Blueprint generation
//!
//! - `pipeline`: the `Generator` that turns a blueprint into files
//! - `safety`: checks on rendered destination paths
//! - `extension`: output extension substitution for component-like blueprints
//! - `policy`: free, paid and component-like blueprint sets
//! - `outcome`: per-file results and the run report
//! - `scaffold`: writing the starter configuration

pub mod extension;
pub mod outcome;
pub mod pipeline;
pub mod policy;
pub mod safety;
pub mod scaffold;

pub use outcome::{FileOutcome, GenerationReport};
pub use pipeline::{GenerateRequest, GenerationStatus, Generator};
pub use policy::{AccessPolicy, Tier};
pub use safety::{check_rendered_path, PathRejection};
pub use scaffold::{scaffold_config, ScaffoldStatus};
