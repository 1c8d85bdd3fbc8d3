//! Configuration loading

use crate::config::types::BlueprintConfig;
use crate::config::validate::parse_config;
use crate::constants::CONFIG_FILENAME;
use crate::error::ConfigError;
use crate::ioutils::FileAccess;
use std::io;
use std::path::{Path, PathBuf};

/// Location of the configuration file for a workspace root.
pub fn config_path(workspace_root: &Path) -> PathBuf {
    workspace_root.join(CONFIG_FILENAME)
}

/// Reads and validates the configuration at `workspace_root`.
///
/// The file is read fresh on every call; nothing is cached between runs.
pub fn load_config<F: FileAccess + ?Sized>(
    fs: &F,
    workspace_root: &Path,
) -> Result<BlueprintConfig, ConfigError> {
    let path = config_path(workspace_root);
    log::debug!("Loading blueprint config from '{}'", path.display());

    let text = fs.read_to_string(&path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => {
            ConfigError::NotFound { path: workspace_root.to_path_buf() }
        }
        _ => ConfigError::Io { path: path.clone(), source: e },
    })?;

    let config = parse_config(&text, &path)?;
    log::debug!("Loaded {} blueprint(s)", config.len());
    Ok(config)
}
