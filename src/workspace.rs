//! Workspace root resolution.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Picks the workspace root that contains `target`.
///
/// Roots are tried in order and matched component-wise; when none contains the
/// target the first root is used. Fails with [`Error::NoWorkspace`] when there
/// are no roots at all.
pub fn resolve_workspace_root(roots: &[PathBuf], target: &Path) -> Result<PathBuf> {
    let first = roots.first().ok_or(Error::NoWorkspace)?;
    let root = roots.iter().find(|root| target.starts_with(root)).unwrap_or(first);
    log::debug!("Resolved workspace root '{}' for '{}'", root.display(), target.display());
    Ok(root.clone())
}
