//! A minimal source map: registers file text under a [`FileId`] so a
//! [`Span`](super::Span) can be resolved back to a path and a line of text.

use std::path::{Path, PathBuf};

use super::FileId;
use crate::error::{SourceMapError, SourceMapResult};

/// A single registered source file.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
    line_starts: Vec<usize>,
}

impl SourceFile {
    fn new(path: PathBuf, text: String) -> Self {
        let mut line_starts = vec![0];
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self {
            path,
            text,
            line_starts,
        }
    }

    /// The text of the 1-based line `line`, without its trailing newline.
    pub fn line_text(&self, line: u32) -> Option<&str> {
        let idx = line.checked_sub(1)? as usize;
        let start = *self.line_starts.get(idx)?;
        let end = self
            .line_starts
            .get(idx + 1)
            .map(|&e| e.saturating_sub(1))
            .unwrap_or(self.text.len());
        self.text.get(start..end)
    }
}

/// Registry of source files, keyed by [`FileId`].
#[derive(Debug, Default)]
pub struct SourceMap {
    files: Vec<SourceFile>,
}

impl SourceMap {
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Register a file's contents, returning the id it was assigned.
    pub fn add_file(&mut self, path: impl AsRef<Path>, text: impl Into<String>) -> FileId {
        let id = FileId(self.files.len());
        self.files
            .push(SourceFile::new(path.as_ref().to_path_buf(), text.into()));
        id
    }

    pub fn get(&self, id: FileId) -> SourceMapResult<&SourceFile> {
        self.files
            .get(id.0)
            .ok_or(SourceMapError::FileNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_text_splits_on_newlines() {
        let mut map = SourceMap::new();
        let id = map.add_file("a.proto", "syntax = \"proto3\";\npackage foo;\n");
        let file = map.get(id).unwrap();
        assert_eq!(file.line_text(1), Some("syntax = \"proto3\";"));
        assert_eq!(file.line_text(2), Some("package foo;"));
        assert_eq!(file.line_text(3), Some(""));
    }

    #[test]
    fn unknown_file_id_errors() {
        let map = SourceMap::new();
        assert!(map.get(FileId(7)).is_err());
    }
}
