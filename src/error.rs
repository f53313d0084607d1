//! Crate-level error type and `Result` alias.
//! Covers the fatal conditions of a run: unreadable SQL files, failed writes to
//! the output sink and parse-tree rendering. Parse failures are not errors at
//! this level; the pipeline reports them as an `Outcome`.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read SQL file {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("AST rendering error: {0}")]
    Json(#[from] serde_json::Error),
}
