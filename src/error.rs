//! Error types for scanning and rendering

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A failure while walking the filesystem. Any of these aborts the whole walk.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot access '{}': No such file or directory", path.display())]
    NotFound { path: PathBuf },
    #[error("cannot access '{}': Permission denied", path.display())]
    PermissionDenied { path: PathBuf },
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    /// Attach the failing path to an I/O error, keeping the common kinds distinct.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => ScanError::NotFound { path },
            io::ErrorKind::PermissionDenied => ScanError::PermissionDenied { path },
            _ => ScanError::Io { path, source: err },
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            ScanError::NotFound { path }
            | ScanError::PermissionDenied { path }
            | ScanError::Io { path, .. } => path,
        }
    }
}

/// A failure while producing output for a finished scan.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Unknown type of output.")]
    UnknownFormat(String),
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}
