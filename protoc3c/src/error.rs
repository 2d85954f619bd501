//! CLI-local error type.
//!
//! Kept separate from the `anyhow::Result` used at the very top of `main`
//! so that `Config` and friends report structured errors instead of bare
//! strings; `anyhow::Error` converts from this via its blanket `From` impl.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
