use std::path::PathBuf;
use thiserror::Error;

pub type DiskResult<T> = Result<T, DiskError>;

/// Errors surfaced by single-path metadata queries.
///
/// Best-effort traversal (`dir_size`) never returns these; it logs and
/// keeps going instead.
#[derive(Debug, Error)]
pub enum DiskError {
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    #[error("access denied: {0}")]
    AccessDenied(PathBuf),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
