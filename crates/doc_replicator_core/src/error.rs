use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for replication operations
#[derive(Debug, Error)]
pub enum ReplicatorError {
    // IO errors
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    // Output directory reset errors
    #[error("Failed to remove '{path}': {source}")]
    RemoveEntry {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Refusing to clear nested directory '{0}'; the output directory must only contain files")]
    NestedDirectory(PathBuf),

    #[error("Failed to remove directory '{path}': {source}")]
    RemoveDir {
        path: PathBuf,
        source: std::io::Error,
    },

    // Output directory creation errors
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Output directory already exists at '{0}'")]
    OutputDirExists(PathBuf),
}

/// Result type alias for replication operations
pub type Result<T> = std::result::Result<T, ReplicatorError>;

impl ReplicatorError {
    /// Path the error refers to
    pub fn path(&self) -> &std::path::Path {
        match self {
            ReplicatorError::FileRead { path, .. }
            | ReplicatorError::FileWrite { path, .. }
            | ReplicatorError::RemoveEntry { path, .. }
            | ReplicatorError::RemoveDir { path, .. }
            | ReplicatorError::CreateDir { path, .. } => path.as_path(),
            ReplicatorError::NestedDirectory(path) | ReplicatorError::OutputDirExists(path) => {
                path.as_path()
            }
        }
    }
}
