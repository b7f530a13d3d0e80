//! Configuration types for the replicator.
//!
//! [`Config`] carries the two working-directory-relative paths and the
//! number of copies. `Config::default()` yields the fixed values the tool
//! always runs with; tests re-root the paths with [`Config::rooted_at`].
//!
//! # Example
//!
//! ```
//! use doc_replicator_core::config::{Config, REPLICA_COUNT};
//! use std::path::Path;
//!
//! let config = Config::default();
//! assert_eq!(config.copies, REPLICA_COUNT);
//!
//! let scratch = config.rooted_at("/tmp/scratch");
//! assert_eq!(scratch.output_dir, Path::new("/tmp/scratch/hard_docs"));
//! ```

use std::path::{Path, PathBuf};

/// Directory the replicated files are written to
pub const DEFAULT_OUTPUT_DIR: &str = "hard_docs";

/// Document whose content is replicated
pub const DEFAULT_SOURCE_PATH: &str = "docs.txt";

/// Number of replicated files, indexed `0..REPLICA_COUNT`
pub const REPLICA_COUNT: usize = 51;

/// `Config` describes one replication run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Output directory; destroyed and recreated on every run
    pub output_dir: PathBuf,

    /// Source document, read once per run
    pub source_path: PathBuf,

    /// How many replicated files to write
    pub copies: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE_PATH)
    }
}

impl Config {
    /// Create a config with the given paths and the default copy count
    pub fn new(output_dir: impl Into<PathBuf>, source_path: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            source_path: source_path.into(),
            copies: REPLICA_COUNT,
        }
    }

    /// Set the number of copies.
    pub fn with_copies(mut self, copies: usize) -> Self {
        self.copies = copies;
        self
    }

    /// Join both paths onto `base`, keeping the copy count
    pub fn rooted_at(&self, base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        Self {
            output_dir: base.join(&self.output_dir),
            source_path: base.join(&self.source_path),
            copies: self.copies,
        }
    }
}
