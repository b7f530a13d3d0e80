//! Filesystem abstraction module.
//!
//! This module provides the `FileSystem` trait for abstracting the handful of
//! filesystem operations the replicator performs, so the procedure can run
//! against the real disk or an in-memory double in tests.

mod native;

pub use native::RealFileSystem;

use std::io::Result;
use std::path::{Path, PathBuf};

/// Abstraction over filesystem operations
/// Send + Sync so a filesystem can be shared by reference freely
pub trait FileSystem: Send + Sync {
    /// Reads the whole file as UTF-8 text
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Writes a file, creating it or truncating an existing one
    fn write_file(&self, path: &Path, content: &str) -> Result<()>;

    /// Deletes a file
    fn delete_file(&self, path: &Path) -> Result<()>;

    /// Checks if anything exists at the path
    fn exists(&self, path: &Path) -> bool;

    /// Checks if a path is a directory, following symlinks
    fn is_dir(&self, path: &Path) -> bool;

    /// Checks if the path itself is a symlink, without following it
    fn is_symlink(&self, _path: &Path) -> bool {
        false
    }

    /// Creates a single directory. The parent must exist and the path must not.
    fn create_dir(&self, path: &Path) -> Result<()>;

    /// Removes an empty directory
    fn remove_dir(&self, path: &Path) -> Result<()>;

    /// List all entries directly inside a directory (not recursive)
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>>;
}

// Blanket implementation for references to FileSystem
impl<T: FileSystem> FileSystem for &T {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        (*self).read_to_string(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        (*self).write_file(path, content)
    }

    fn delete_file(&self, path: &Path) -> Result<()> {
        (*self).delete_file(path)
    }

    fn exists(&self, path: &Path) -> bool {
        (*self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (*self).is_dir(path)
    }

    fn is_symlink(&self, path: &Path) -> bool {
        (*self).is_symlink(path)
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        (*self).create_dir(path)
    }

    fn remove_dir(&self, path: &Path) -> Result<()> {
        (*self).remove_dir(path)
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        (*self).list_files(dir)
    }
}
