use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading the file being checksummed.
#[derive(Debug, Error)]
pub enum ChecksumError {
    /// The path is missing, is a directory, or cannot be opened for reading.
    #[error("{}: cannot open: {}", .path.display(), crate::common::io_error_msg(.source))]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A read failed after the scan had started.
    #[error("{}: read error at byte {offset}: {}", .path.display(), crate::common::io_error_msg(.source))]
    Io {
        path: PathBuf,
        offset: u64,
        #[source]
        source: io::Error,
    },
}

impl ChecksumError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            ChecksumError::FileAccess { path, .. } | ChecksumError::Io { path, .. } => path.as_path(),
        }
    }
}

/// Caller-supplied checking data that is not a valid hex digest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedInput {
    #[error("invalid checking data length {actual}, it must be {expected} characters")]
    Length { expected: usize, actual: usize },

    #[error("invalid character {found:?} at position {position} in checking data")]
    Character { position: usize, found: char },
}

pub type Result<T> = std::result::Result<T, ChecksumError>;
