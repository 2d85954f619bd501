//! protoc3-drv — ties a source file on disk to a parse result.
//!
//! This crate is deliberately thin. Job running, configuration loading,
//! directory walking, and cross-file import resolution are external
//! collaborators' jobs, not this one's — this crate narrows "a path" down
//! to "text `protoc3_par::analyze` can consume" and nothing more. It never
//! decides success or failure on the caller's behalf: a parse result
//! always exists, and the caller checks `Ast::errors`.

mod error;

pub use error::{DrvError, Result};

use std::path::Path;

use protoc3_par::Ast;

/// Reads `path` and hands its contents to `protoc3_par::analyze`.
///
/// Returns `Err` only for a non-`.proto` extension or an I/O failure.
/// A successful read always returns `Ok`, even if the resulting [`Ast`]
/// carries parse errors — checking those is the caller's job.
pub fn read_and_analyze(path: &Path) -> Result<Ast> {
    if path.extension().and_then(|ext| ext.to_str()) != Some("proto") {
        return Err(DrvError::NotAProtoFile(path.to_path_buf()));
    }

    let source = std::fs::read_to_string(path).map_err(|source| DrvError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(protoc3_par::analyze(&source))
}
