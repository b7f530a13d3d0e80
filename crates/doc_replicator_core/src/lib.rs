#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Configuration options
pub mod config;

/// Error (common error types)
#[allow(missing_docs)]
pub mod error;

/// Filesystem abstraction
pub mod fs;

/// Replication procedure (reset, recreate, read, write)
pub mod replicate;

#[cfg(test)]
pub mod test_utils;
