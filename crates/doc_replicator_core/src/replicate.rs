//! The replication procedure.
//!
//! A run is four strictly sequential steps, each exposed on its own:
//!
//! 1. [`reset_output_dir`]: delete the files inside the output directory, then
//!    the directory itself. Nested directories are not cleared; they fail the run.
//! 2. [`create_output_dir`]: recreate it empty.
//! 3. [`read_source`]: load the source document once.
//! 4. [`write_replicas`]: write `0.txt`, `1.txt`, ... each holding its index,
//!    a newline, and the verbatim source content.
//!
//! [`run`] chains them and stops at the first error. Nothing is rolled back.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{ReplicatorError, Result};
use crate::fs::FileSystem;

/// Line printed once every replicated file has been written
pub const COMPLETION_MESSAGE: &str = "Files created successfully.";

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplicationReport {
    /// Directory the files were written to
    pub output_dir: PathBuf,
    /// Number of replicated files written
    pub files_written: usize,
    /// Number of stale files removed during the reset
    pub removed_entries: usize,
}

/// File name of the replica with the given index, e.g. `7.txt`
pub fn replica_file_name(index: usize) -> String {
    format!("{index}.txt")
}

/// Content of the replica with the given index: the index, `\n`, then `source` as-is
pub fn replica_content(index: usize, source: &str) -> String {
    format!("{index}\n{source}")
}

/// Remove every file directly inside `dir`, then `dir` itself.
///
/// Does nothing when `dir` does not exist. Returns how many files were removed.
pub fn reset_output_dir<FS: FileSystem>(fs: &FS, dir: &Path) -> Result<usize> {
    if !fs.exists(dir) {
        log::debug!("Output directory {:?} does not exist, nothing to reset", dir);
        return Ok(0);
    }

    let entries = fs
        .list_files(dir)
        .map_err(|source| ReplicatorError::RemoveDir {
            path: dir.to_path_buf(),
            source,
        })?;

    let mut removed = 0;
    for entry in entries {
        // A symlink is unlinked even when it points at a directory
        if fs.is_dir(&entry) && !fs.is_symlink(&entry) {
            return Err(ReplicatorError::NestedDirectory(entry));
        }
        fs.delete_file(&entry)
            .map_err(|source| ReplicatorError::RemoveEntry {
                path: entry.clone(),
                source,
            })?;
        log::debug!("Removed {:?}", entry);
        removed += 1;
    }

    fs.remove_dir(dir).map_err(|source| ReplicatorError::RemoveDir {
        path: dir.to_path_buf(),
        source,
    })?;

    log::info!("Cleared {:?} ({} files removed)", dir, removed);
    Ok(removed)
}

/// Create the (single, non-nested) output directory.
///
/// Fails if anything already exists at `dir`.
pub fn create_output_dir<FS: FileSystem>(fs: &FS, dir: &Path) -> Result<()> {
    if fs.exists(dir) {
        return Err(ReplicatorError::OutputDirExists(dir.to_path_buf()));
    }
    fs.create_dir(dir).map_err(|source| ReplicatorError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Read the whole source document.
pub fn read_source<FS: FileSystem>(fs: &FS, path: &Path) -> Result<String> {
    fs.read_to_string(path)
        .map_err(|source| ReplicatorError::FileRead {
            path: path.to_path_buf(),
            source,
        })
}

/// Write `copies` replicas of `source` into `dir`, overwriting any that exist.
pub fn write_replicas<FS: FileSystem>(
    fs: &FS,
    dir: &Path,
    source: &str,
    copies: usize,
) -> Result<usize> {
    for index in 0..copies {
        let path = dir.join(replica_file_name(index));
        fs.write_file(&path, &replica_content(index, source))
            .map_err(|e| ReplicatorError::FileWrite {
                path: path.clone(),
                source: e,
            })?;
        log::debug!("Wrote {:?}", path);
    }
    Ok(copies)
}

/// Regenerate the output directory described by `config`.
pub fn run<FS: FileSystem>(fs: &FS, config: &Config) -> Result<ReplicationReport> {
    let removed_entries = reset_output_dir(fs, &config.output_dir)?;
    create_output_dir(fs, &config.output_dir)?;

    let source = read_source(fs, &config.source_path)?;
    log::info!("Read {} bytes from {:?}", source.len(), config.source_path);

    let files_written = write_replicas(fs, &config.output_dir, &source, config.copies)?;
    log::info!("Wrote {} files to {:?}", files_written, config.output_dir);

    Ok(ReplicationReport {
        output_dir: config.output_dir.clone(),
        files_written,
        removed_entries,
    })
}
