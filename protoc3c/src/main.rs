//! protoc3c — command-line front end for the proto3 schema compiler.
//!
//! Parses `.proto` files with `protoc3-par` (via `protoc3-drv`) and reports
//! diagnostics. This binary is the out-of-scope "job runner": directory
//! walking, config loading, and the diagnostic report format all live here,
//! never inside the lexer or parser crates themselves.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::check::{run_check, CheckArgs};
use config::Config;

#[derive(Parser, Debug)]
#[command(name = "protoc3c")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Parses proto3 schema files and reports diagnostics")]
struct Cli {
    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a protoc3.toml configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse one or more .proto files and report diagnostics.
    Check(CheckCommand),
}

#[derive(Parser, Debug)]
struct CheckCommand {
    /// Files or directories to check.
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Descend into subdirectories when a path is a directory.
    #[arg(short, long)]
    recursive: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;

    let ok = match cli.command {
        Commands::Check(args) => run_check(
            CheckArgs {
                paths: args.paths,
                recursive: args.recursive,
            },
            &config,
        )?,
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_check_subcommand_with_one_path() {
        let cli = Cli::parse_from(["protoc3c", "check", "schema.proto"]);
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.paths, vec![PathBuf::from("schema.proto")]);
                assert!(!args.recursive);
            }
        }
    }

    #[test]
    fn parses_check_subcommand_with_multiple_paths() {
        let cli = Cli::parse_from(["protoc3c", "check", "a.proto", "b.proto"]);
        match cli.command {
            Commands::Check(args) => assert_eq!(args.paths.len(), 2),
        }
    }

    #[test]
    fn parses_recursive_flag() {
        let cli = Cli::parse_from(["protoc3c", "check", "--recursive", "schemas/"]);
        match cli.command {
            Commands::Check(args) => assert!(args.recursive),
        }
    }

    #[test]
    fn parses_global_verbose_flag() {
        let cli = Cli::parse_from(["protoc3c", "--verbose", "check", "a.proto"]);
        assert!(cli.verbose);
    }

    #[test]
    fn parses_global_config_flag() {
        let cli = Cli::parse_from([
            "protoc3c",
            "--config",
            "/path/to/protoc3.toml",
            "check",
            "a.proto",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/protoc3.toml")));
    }
}
