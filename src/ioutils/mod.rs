//! File access capability.
//!
//! The generation pipeline only touches the file system through [`FileAccess`],
//! so it can run against disk ([`LocalFileSystem`]), an in-memory tree
//! ([`MemoryFileSystem`]) or a disk view that never writes ([`DryRunFileSystem`]).

use std::io;
use std::path::Path;

pub mod dry_run;
pub mod local;
pub mod memory;

pub use dry_run::DryRunFileSystem;
pub use local::LocalFileSystem;
pub use memory::MemoryFileSystem;

/// Read, write, stat and create-directory operations.
pub trait FileAccess {
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Creates or truncates `path`. The parent directory must exist.
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;

    /// Whether anything exists at `path`. Stat failures count as absent.
    fn exists(&self, path: &Path) -> bool;

    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// Whether an I/O failure belongs to the permission-denied class.
pub fn is_permission_denied(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::PermissionDenied
}
