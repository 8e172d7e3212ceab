//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: blob error (too few edges, unknown stitch method)
//! - 11: I/O error (reading a recipe, writing output)
//! - 12: input error (bad fill color, bad JSON params or recipe)
//! - 13: serialization error

use blob_engine_core::BlobError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug, Error)]
pub enum CliError {
    /// A generation error (invalid parameter, unknown method).
    #[error(transparent)]
    Blob(BlobError),
    /// A file could not be read or written. Keeps the underlying `io::Error`.
    #[error("cannot {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A user input error (bad color, bad JSON).
    #[error("{0}")]
    Input(String),
    /// A serialization error (JSON output failure).
    #[error("{0}")]
    Serialization(String),
}

impl CliError {
    /// Wraps a failed read of `path`.
    pub fn read(path: &Path, source: io::Error) -> Self {
        CliError::Io {
            action: "read",
            path: path.to_path_buf(),
            source,
        }
    }

    /// Wraps a failed write of `path`.
    pub fn write(path: &Path, source: io::Error) -> Self {
        CliError::Io {
            action: "write",
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Blob(_) => 10,
            CliError::Io { .. } => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl From<BlobError> for CliError {
    fn from(e: BlobError) -> Self {
        match e {
            BlobError::InvalidColor(msg) => CliError::Input(format!("invalid color: {msg}")),
            other => CliError::Blob(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
