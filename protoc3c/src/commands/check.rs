//! The `check` subcommand: parses one or more `.proto` files and reports
//! whatever diagnostics the front end produced. This is the out-of-scope
//! "job runner" — its own logic carries no spec invariants, just enough
//! to make the workspace a runnable program.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::Config;

#[derive(Debug, Clone)]
pub struct CheckArgs {
    pub paths: Vec<PathBuf>,
    pub recursive: bool,
}

/// Runs `check`, returning `true` if every file parsed without errors.
pub fn run_check(args: CheckArgs, config: &Config) -> Result<bool> {
    let mut files = Vec::new();
    for path in &args.paths {
        collect_proto_files(path, args.recursive, &mut files)
            .with_context(|| format!("failed to enumerate {}", path.display()))?;
    }

    if files.is_empty() {
        tracing::warn!("no .proto files found");
        return Ok(true);
    }

    let mut all_ok = true;
    for file in &files {
        tracing::info!(file = %file.display(), "checking");

        let ast = match protoc3_drv::read_and_analyze(file) {
            Ok(ast) => ast,
            Err(e) => {
                println!("{}: error: {}", file.display(), e);
                all_ok = false;
                continue;
            }
        };

        if ast.has_errors() {
            all_ok = false;
        }
        for error in ast.errors() {
            println!("{}: error: {}", file.display(), error);
        }
        if config.emit_warnings {
            for diagnostic in ast.lexer_diagnostics() {
                println!("{}: {}", file.display(), diagnostic);
            }
        }
    }

    Ok(all_ok)
}

/// Gathers `.proto` files under `path`. A bare file is included unconditionally
/// (even without the extension check `protoc3-drv` performs, since the user
/// named it directly); a directory is walked non-recursively unless
/// `recursive` is set.
fn collect_proto_files(path: &Path, recursive: bool, out: &mut Vec<PathBuf>) -> Result<()> {
    if path.is_file() {
        out.push(path.to_path_buf());
        return Ok(());
    }

    let entries = std::fs::read_dir(path)
        .with_context(|| format!("failed to read directory {}", path.display()))?;

    for entry in entries {
        let entry = entry?;
        let entry_path = entry.path();

        if entry_path.is_dir() {
            if recursive {
                collect_proto_files(&entry_path, recursive, out)?;
            }
            continue;
        }

        if entry_path.extension().and_then(|e| e.to_str()) == Some("proto") {
            out.push(entry_path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn checking_a_clean_file_reports_success() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ok.proto");
        std::fs::write(&path, "syntax = \"proto3\";\npackage ok;\n").unwrap();

        let args = CheckArgs {
            paths: vec![path],
            recursive: false,
        };
        let ok = run_check(args, &Config::default()).unwrap();
        assert!(ok);
    }

    #[test]
    fn checking_a_malformed_file_reports_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.proto");
        std::fs::write(&path, "not a proto file at all\n").unwrap();

        let args = CheckArgs {
            paths: vec![path],
            recursive: false,
        };
        let ok = run_check(args, &Config::default()).unwrap();
        assert!(!ok);
    }

    #[test]
    fn directory_walk_is_non_recursive_by_default() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("top.proto"), "syntax = \"proto3\";\n").unwrap();
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(nested.join("deep.proto"), "syntax = \"proto3\";\n").unwrap();

        let mut files = Vec::new();
        collect_proto_files(dir.path(), false, &mut files).unwrap();
        assert_eq!(files.len(), 1);

        let mut recursive_files = Vec::new();
        collect_proto_files(dir.path(), true, &mut recursive_files).unwrap();
        assert_eq!(recursive_files.len(), 2);
    }

    #[test]
    fn non_proto_files_are_skipped() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("readme.txt"), "hello").unwrap();
        std::fs::write(dir.path().join("schema.proto"), "syntax = \"proto3\";\n").unwrap();

        let mut files = Vec::new();
        collect_proto_files(dir.path(), false, &mut files).unwrap();
        assert_eq!(files.len(), 1);
    }
}
