//! Subcommands for the protoc3c CLI.

pub mod check;
