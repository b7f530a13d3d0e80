//! `doc_replicator` regenerates `hard_docs/` from `docs.txt` in the current directory.

/// CLI module - command-line interface for doc_replicator
mod cli;

fn main() {
    cli::run_cli();
}
