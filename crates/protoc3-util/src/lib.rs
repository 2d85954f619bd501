//! protoc3-util — foundation types shared by the protoc3 front end.
//!
//! Provides source location tracking ([`span`]), diagnostic collection
//! ([`diagnostic`]), and a typed-index arena vector ([`index_vec`]) used by
//! `protoc3-par` to back its AST arena. Nothing here is proto3-specific;
//! it is the ambient layer the lexer and parser are built on top of.

pub mod diagnostic;
pub mod error;
pub mod index_vec;
pub mod span;

pub use diagnostic::{Diagnostic, Handler, Level};
pub use index_vec::{Idx, IndexVec};
pub use span::{FileId, SourceFile, SourceMap, Span};
