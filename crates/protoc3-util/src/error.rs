//! Core error types for the protoc3-util crate.

use thiserror::Error;

/// Error type for source map operations.
#[derive(Debug, Error)]
pub enum SourceMapError {
    /// A file was requested by id but never registered.
    #[error("file not found: {0:?}")]
    FileNotFound(crate::span::FileId),
}

/// Result alias for source map operations.
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;
