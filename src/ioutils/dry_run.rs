use super::FileAccess;
use std::cell::RefCell;
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

/// Reads through to another [`FileAccess`] but only logs directory creation
/// and writes. Paths "written" during the run report as existing afterwards,
/// so a later file with the same destination still asks before overwriting.
#[derive(Debug)]
pub struct DryRunFileSystem<F> {
    inner: F,
    planned: RefCell<HashSet<PathBuf>>,
}

impl<F: FileAccess> DryRunFileSystem<F> {
    pub fn new(inner: F) -> Self {
        Self { inner, planned: RefCell::new(HashSet::new()) }
    }

    /// Paths that would have been written.
    pub fn planned_writes(&self) -> Vec<PathBuf> {
        let mut planned: Vec<_> = self.planned.borrow().iter().cloned().collect();
        planned.sort();
        planned
    }
}

impl<F: FileAccess> FileAccess for DryRunFileSystem<F> {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.inner.read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        log::info!("[DRY RUN] Would write {} bytes to '{}'", contents.len(), path.display());
        self.planned.borrow_mut().insert(path.to_path_buf());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.planned.borrow().contains(path) || self.inner.exists(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        log::debug!("[DRY RUN] Would create directory '{}'", path.display());
        Ok(())
    }
}
