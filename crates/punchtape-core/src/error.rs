//! Error types for tape loading and access.

use std::io;
use std::path::PathBuf;

/// Errors produced while loading or reading a tape.
///
/// Everything here is fatal at startup except `IndexOutOfRange`, which
/// signals a logic fault in a caller and is never clamped away.
#[derive(Debug, thiserror::Error)]
pub enum TapeError {
    #[error("{}: file not found", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: cannot read tape data", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid tape input: {0}")]
    InvalidInput(String),

    #[error("byte index {index} out of range for tape of {len} bytes")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("{}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl TapeError {
    /// Maps an I/O failure on `path` to the matching file variant.
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            TapeError::FileNotFound { path, source }
        } else {
            TapeError::FileUnreadable { path, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, TapeError>;
