use super::safety::PathRejection;
use std::path::PathBuf;

/// What happened to one file of a blueprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Created { target: PathBuf },
    Overwritten { target: PathBuf },
    /// The destination existed and the user did not confirm the overwrite.
    SkippedExisting { target: PathBuf },
    Rejected { rendered: String, reason: PathRejection },
    DirectoryFailed { target: PathBuf, reason: String },
    PermissionDenied { target: PathBuf },
    WriteFailed { target: PathBuf, reason: String },
}

impl FileOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, FileOutcome::Created { .. } | FileOutcome::Overwritten { .. })
    }

    /// Whether the outcome must be surfaced to the user as a warning.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            FileOutcome::Rejected { .. }
                | FileOutcome::DirectoryFailed { .. }
                | FileOutcome::PermissionDenied { .. }
                | FileOutcome::WriteFailed { .. }
        )
    }

    /// Gets a message describing the outcome.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };

        match self {
            FileOutcome::Created { target } => {
                format!("{prefix}Writing to '{}'", target.display())
            }
            FileOutcome::Overwritten { target } => {
                format!("{prefix}Writing to '{}' (overwriting existing file)", target.display())
            }
            FileOutcome::SkippedExisting { target } => {
                format!("{prefix}Skipping write to '{}' (target already exists)", target.display())
            }
            FileOutcome::Rejected { rendered, reason } => {
                format!("{prefix}Skipped file '{rendered}': {reason}.")
            }
            FileOutcome::DirectoryFailed { target, reason } => {
                format!(
                    "{prefix}Failed to create directory for '{}': {reason}",
                    target.display()
                )
            }
            FileOutcome::PermissionDenied { target } => {
                format!("{prefix}Permission denied: could not write '{}'.", target.display())
            }
            FileOutcome::WriteFailed { target, reason } => {
                format!("{prefix}Failed to write file '{}': {reason}", target.display())
            }
        }
    }
}

/// Per-file outcomes of one completed generation run, in blueprint order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub blueprint: String,
    pub name: String,
    pub outcomes: Vec<FileOutcome>,
}

impl GenerationReport {
    pub fn written(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.is_written())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.is_warning())
    }
}
