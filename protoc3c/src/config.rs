//! Configuration for the protoc3c CLI.
//!
//! Covers only what spec.md explicitly puts outside the front end's scope:
//! include paths and whether warnings are reported alongside errors. Never
//! consulted by protoc3-lex or protoc3-par themselves.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

pub const CONFIG_FILE_NAME: &str = "protoc3.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Directories searched for imported `.proto` files.
    ///
    /// Unused until the driver grows import resolution; recorded now so a
    /// config file written today still loads once it does.
    #[serde(default)]
    pub include_paths: Vec<PathBuf>,

    /// Whether lexer warnings (unrecognized characters) are reported
    /// alongside parse errors in the `check` output.
    #[serde(default)]
    pub emit_warnings: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            include_paths: Vec::new(),
            emit_warnings: false,
        }
    }
}

impl Config {
    /// Loads from `path` if given, otherwise from the standard locations;
    /// falls back to [`Config::default`] if nothing is found.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => match Self::find_config_file() {
                Some(path) => Self::load_from_path(&path),
                None => Ok(Self::default()),
            },
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| CliError::Config(format!("failed to parse {}: {}", path.display(), e)))
    }

    fn find_config_file() -> Option<PathBuf> {
        let cwd = PathBuf::from(CONFIG_FILE_NAME);
        if cwd.exists() {
            return Some(cwd);
        }
        dirs::config_dir()
            .map(|dir| dir.join("protoc3").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }
}
