//! In-memory file system for tests and previews.

use super::FileAccess;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

/// In-memory file tree. Paths are stored as given; callers pass normalized paths.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    inner: RefCell<MemoryFileSystemInner>,
}

#[derive(Debug, Default)]
struct MemoryFileSystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    read_only: HashSet<PathBuf>,
    broken_directories: HashSet<PathBuf>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a file, creating its parent directories.
    pub fn with_file(self, path: impl AsRef<Path>, contents: &str) -> Self {
        let path = path.as_ref();
        {
            let mut inner = self.inner.borrow_mut();
            if let Some(parent) = path.parent() {
                inner.add_ancestors(parent);
            }
            inner.files.insert(path.to_path_buf(), contents.to_string());
        }
        self
    }

    /// Seeds a directory and its ancestors.
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        self.inner.borrow_mut().add_ancestors(path.as_ref());
        self
    }

    /// Makes writes to `path` fail with `PermissionDenied`.
    pub fn deny_writes(self, path: impl AsRef<Path>) -> Self {
        self.inner.borrow_mut().read_only.insert(path.as_ref().to_path_buf());
        self
    }

    /// Makes `create_dir_all` fail for `path` and anything below it.
    pub fn break_directory(self, path: impl AsRef<Path>) -> Self {
        self.inner.borrow_mut().broken_directories.insert(path.as_ref().to_path_buf());
        self
    }

    /// Contents of a file, if present.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.inner.borrow().files.get(path.as_ref()).cloned()
    }

    /// Every file path, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner.borrow().files.keys().cloned().collect()
    }

    pub fn is_dir(&self, path: impl AsRef<Path>) -> bool {
        self.inner.borrow().directories.contains(path.as_ref())
    }
}

impl MemoryFileSystemInner {
    fn add_ancestors(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }
}

impl FileAccess for MemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let inner = self.inner.borrow();
        inner.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{} not found", path.display()))
        })
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        let mut inner = self.inner.borrow_mut();
        if inner.read_only.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{} is read-only", path.display()),
            ));
        }
        if inner.directories.contains(path) {
            return Err(io::Error::other(format!("{} is a directory", path.display())));
        }
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) => {
                Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("{} does not exist", parent.display()),
                ))
            }
            _ => {
                inner.files.insert(path.to_path_buf(), contents.to_string());
                Ok(())
            }
        }
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.borrow();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut inner = self.inner.borrow_mut();
        if inner.broken_directories.iter().any(|broken| path.starts_with(broken)) {
            return Err(io::Error::other(format!("cannot create {}", path.display())));
        }
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains_key(&current) {
                return Err(io::Error::other(format!(
                    "{} exists and is not a directory",
                    current.display()
                )));
            }
        }
        inner.add_ancestors(path);
        Ok(())
    }
}
