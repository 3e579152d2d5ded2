//! Typed errors for environment directory access

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fatal directory-level errors. Any of these abort the run before a single
/// statement is written to stdout, so `eval` never sees partial input.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("failed to read directory {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    /// Classify an I/O error raised while opening or listing the directory.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => ScanError::DirectoryNotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => ScanError::PermissionDenied(path.to_path_buf()),
            _ => ScanError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}
