//! Driver-level failures.
//!
//! These are I/O problems around a compilation, never problems in the
//! source text; those are diagnostics.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    /// The source file could not be read.
    #[error("{message}")]
    ReadSource {
        path: PathBuf,
        message: String,
        #[source]
        source: io::Error,
    },

    /// The token file could not be written.
    #[error("cannot write token file '{}': {source}", path.display())]
    WriteTokens {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The listing could not be written.
    #[error("cannot write listing: {0}")]
    WriteListing(#[source] io::Error),
}

impl DriverError {
    pub(crate) fn read_source(path: &Path, source: io::Error) -> Self {
        let shown = path.display();
        let message = match source.kind() {
            io::ErrorKind::NotFound => format!("cannot find file '{shown}'"),
            io::ErrorKind::PermissionDenied => format!("permission denied reading '{shown}'"),
            io::ErrorKind::InvalidData => format!("'{shown}' contains invalid UTF-8 data"),
            _ => format!("error reading '{shown}': {source}"),
        };
        DriverError::ReadSource {
            path: path.to_owned(),
            message,
            source,
        }
    }
}
