//! Error taxonomy for a decomposition run.
//!
//! Every variant is fatal: the first failure aborts the run, the binary
//! prints the error with its cause chain and exits non-zero. Output files
//! already written stay on disk as-is.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while splitting a capture.
#[derive(Debug, Error)]
pub enum SplitError {
    /// No input path was supplied on the command line.
    #[error("no HAR file given; usage: har-splitter <HAR_FILE>")]
    Usage,

    /// The input file is missing or unreadable.
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input is not valid JSON.
    #[error("failed to parse {} as JSON", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document is valid JSON but does not have the HAR shape.
    #[error("no entries found in the HAR file or invalid HAR format: {0}")]
    InvalidFormat(String),

    /// An output directory or file could not be written.
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SplitError {
    pub(crate) fn invalid_format(reason: impl Into<String>) -> Self {
        Self::InvalidFormat(reason.into())
    }

    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
