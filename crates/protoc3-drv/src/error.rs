//! Error type for the protoc3-drv crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while narrowing a path on disk down to source
/// text the front end can consume. Never wraps anything from
/// `protoc3-par` — the parser itself cannot fail, only report.
#[derive(Debug, Error)]
pub enum DrvError {
    /// The path's extension wasn't `.proto`.
    #[error("not a .proto file: {0}")]
    NotAProtoFile(PathBuf),

    /// Reading the file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, DrvError>;
