//! Test utilities for doc_replicator_core
//!
//! This module provides a mock filesystem that tracks files and directories
//! separately, so the reset and creation steps can be exercised without disk.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::fs::FileSystem;

#[derive(Default)]
struct MockState {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
}

/// A mock filesystem for testing.
///
/// Uses `Arc<Mutex<..>>` for thread-safety and allows cloning
/// while sharing the same underlying storage.
#[derive(Clone, Default)]
pub struct MockFileSystem {
    state: Arc<Mutex<MockState>>,
}

impl MockFileSystem {
    /// Create a new empty mock filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file to the mock filesystem (builder pattern).
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .files
            .insert(PathBuf::from(path), content.to_string());
        self
    }

    /// Add a directory to the mock filesystem (builder pattern).
    pub fn with_dir(self, path: &str) -> Self {
        self.state.lock().unwrap().dirs.insert(PathBuf::from(path));
        self
    }

    /// Get the content of a file (for test assertions).
    pub fn get_content(&self, path: &str) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .files
            .get(&PathBuf::from(path))
            .cloned()
    }

    /// Number of files directly inside `dir`.
    pub fn file_count_in(&self, dir: &str) -> usize {
        let dir = Path::new(dir);
        self.state
            .lock()
            .unwrap()
            .files
            .keys()
            .filter(|path| path.parent() == Some(dir))
            .count()
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.state
            .lock()
            .unwrap()
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "File not found"))
    }

    fn write_file(&self, path: &Path, content: &str) -> io::Result<()> {
        let mut state = self.state.lock().unwrap();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !state.dirs.contains(parent)
        {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "Parent directory not found",
            ));
        }
        state.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn delete_file(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.dirs.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                "Is a directory",
            ));
        }
        state
            .files
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "File not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        let state = self.state.lock().unwrap();
        state.files.contains_key(path) || state.dirs.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.state.lock().unwrap().dirs.contains(path)
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.files.contains_key(path) || state.dirs.contains(path) {
            return Err(io::Error::new(io::ErrorKind::AlreadyExists, "Path exists"));
        }
        state.dirs.insert(path.to_path_buf());
        Ok(())
    }

    fn remove_dir(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state.lock().unwrap();
        if !state.dirs.contains(path) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "Directory not found"));
        }
        let occupied = state.files.keys().any(|p| p.parent() == Some(path))
            || state.dirs.iter().any(|p| p.parent() == Some(path));
        if occupied {
            return Err(io::Error::new(
                io::ErrorKind::DirectoryNotEmpty,
                "Directory not empty",
            ));
        }
        state.dirs.remove(path);
        Ok(())
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let state = self.state.lock().unwrap();
        if !state.dirs.contains(dir) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "Directory not found"));
        }
        let files = state.files.keys().filter(|p| p.parent() == Some(dir));
        let dirs = state.dirs.iter().filter(|p| p.parent() == Some(dir));
        let mut entries: Vec<PathBuf> = files.chain(dirs).cloned().collect();
        entries.sort();
        Ok(entries)
    }
}
