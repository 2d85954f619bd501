//! Parse-time error type.

use protoc3_lex::Token;

/// A single parse failure: what went wrong, and the token (if any) the
/// parser was looking at when it gave up on the current production.
///
/// Collected rather than returned early — the parser keeps going after one
/// of these so a single file can surface every syntax problem it has, not
/// just the first.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub token: Option<Token>,
}

impl ParseError {
    pub fn new(message: impl Into<String>, token: Option<Token>) -> Self {
        Self {
            message: message.into(),
            token,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.token {
            Some(tok) => write!(f, "{}:{}: {}", tok.line, tok.column, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ParseError {}
