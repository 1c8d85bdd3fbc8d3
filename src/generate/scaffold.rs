use crate::config::{config_path, starter_config_json};
use crate::ioutils::FileAccess;
use crate::prompt::Notifier;
use crate::workspace::resolve_workspace_root;
use std::path::{Path, PathBuf};

/// How a `scaffold_config` call ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldStatus {
    Created(PathBuf),
    /// A configuration file was already present and was left untouched.
    AlreadyExists(PathBuf),
    Aborted,
}

/// Writes the starter configuration at the workspace root containing `target`,
/// unless one already exists.
pub fn scaffold_config(
    fs: &dyn FileAccess,
    notifier: &dyn Notifier,
    workspace_roots: &[PathBuf],
    target: &Path,
) -> ScaffoldStatus {
    let workspace_root = match resolve_workspace_root(workspace_roots, target) {
        Ok(root) => root,
        Err(e) => {
            notifier.error(&e.to_string());
            return ScaffoldStatus::Aborted;
        }
    };

    let path = config_path(&workspace_root);
    if fs.exists(&path) {
        notifier.warn(&format!("'{}' already exists in workspace root.", path.display()));
        return ScaffoldStatus::AlreadyExists(path);
    }

    let written = starter_config_json()
        .map_err(|e| e.to_string())
        .and_then(|json| fs.write(&path, &json).map_err(|e| e.to_string()));
    match written {
        Ok(()) => {
            log::info!("Wrote starter config to '{}'", path.display());
            notifier.info(&format!("'{}' created in workspace root.", path.display()));
            ScaffoldStatus::Created(path)
        }
        Err(reason) => {
            notifier.error(&format!("Failed to write '{}': {reason}", path.display()));
            ScaffoldStatus::Aborted
        }
    }
}
