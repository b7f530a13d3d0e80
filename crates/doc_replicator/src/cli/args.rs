//! Command-line argument structures

use clap::Parser;

#[derive(Parser)]
#[command(name = "doc_replicator")]
#[command(version)]
#[command(
    about = "Regenerate hard_docs/ with numbered copies of docs.txt",
    long_about = "Deletes hard_docs/ in the current directory, recreates it, and writes \
                  0.txt through 50.txt, each holding its index on the first line followed \
                  by the contents of docs.txt. Set RUST_LOG=debug for per-file logging."
)]
pub struct Cli {}
