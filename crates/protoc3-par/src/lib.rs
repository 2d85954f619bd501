//! protoc3-par — the proto3 recursive-descent parser.
//!
//! Takes the token stream `protoc3-lex` produces and builds an [`Ast`]: a
//! tree of [`NodeKind`] nodes addressed by [`NodeId`], plus whatever
//! [`ParseError`]s came up along the way. A parse result always exists —
//! there is no "parsing failed" outcome, only an [`Ast`] whose
//! [`Ast::errors`] may or may not be empty.
//!
//! Productions never unwind on a bad token: they return `None`, record a
//! [`ParseError`], and the caller resumes at the next token. At the top
//! level that means "burn the line" — skip to the next `EndLine` and try
//! the next item; inside a `{ ... }` body it means a progress guard forces
//! the cursor forward by one token if a whole iteration made no progress,
//! so a malformed body can never spin forever.

mod ast;
mod error;
mod items;
mod message;
mod predicates;
mod service;

pub use ast::{Ast, Node, NodeData, NodeId, NodeKind};
pub use error::ParseError;

use std::collections::VecDeque;

use protoc3_lex::{Token, TokenKind};
use protoc3_util::Handler;

/// Lexes and parses `source` in one call, returning the resulting [`Ast`]
/// (with any [`ParseError`]s attached).
pub fn analyze(source: &str) -> Ast {
    let mut handler = Handler::new();
    let tokens = protoc3_lex::tokenize(source, &mut handler);
    let mut ast = Parser::new(tokens).parse();
    ast.set_lexer_diagnostics(handler.into_diagnostics());
    ast
}

/// The recursive-descent parser.
///
/// Tokens are consumed strictly FIFO (`tokens.pop_front()`), matching the
/// "consumed exactly once" token lifecycle: once a token is popped it is
/// gone, there is no backtracking, and a production that needs to "look
/// ahead" without consuming only ever peeks the front of the queue.
pub struct Parser {
    tokens: VecDeque<Token>,
    ast: Ast,
}

impl Parser {
    pub fn new(tokens: VecDeque<Token>) -> Self {
        Self {
            tokens,
            ast: Ast::new(),
        }
    }

    /// Parses a complete file, consuming `self` and returning the [`Ast`].
    pub fn parse(mut self) -> Ast {
        let root = self.ast.root_id();
        while !self.is_at_end() {
            if self.dump_endline() {
                continue;
            }
            if self.peek_is_comment() {
                self.scoop_comment(root);
                continue;
            }
            if self.parse_top_level_item(root).is_none() {
                self.burn_the_line();
            }
        }
        self.ast
    }

    /// Dispatches on the current token's text to one of the top-level
    /// productions (syntax/package/import/option/message/enum/service).
    fn parse_top_level_item(&mut self, parent: NodeId) -> Option<NodeId> {
        let word = self.peek()?.lexeme.clone();
        if predicates::is_syntax_keyword(&word) {
            self.parse_syntax(parent)
        } else if predicates::is_package_keyword(&word) {
            self.parse_package(parent)
        } else if predicates::is_import_keyword(&word) {
            self.parse_import(parent)
        } else if predicates::is_option_keyword(&word) {
            self.parse_option(parent)
        } else if predicates::is_message_keyword(&word) {
            self.parse_message(parent)
        } else if predicates::is_enum_keyword(&word) {
            self.parse_enum(parent)
        } else if predicates::is_service_keyword(&word) {
            self.parse_service(parent)
        } else {
            self.error(format!("unexpected top-level token '{}'", word));
            None
        }
    }

    /// Skips tokens until (and including) the next `EndLine`, or end of
    /// input — the top-level error recovery strategy.
    fn burn_the_line(&mut self) {
        while let Some(tok) = self.tokens.front() {
            let done = tok.kind == TokenKind::EndLine;
            self.tokens.pop_front();
            if done {
                break;
            }
        }
    }

    /// Collects everything from a comment-opener token through its
    /// terminator (`EndLine` for `//`, the matching `*/` for `/*`) into a
    /// `Comment` node whose single `CommentText` child holds the joined text.
    fn scoop_comment(&mut self, parent: NodeId) -> NodeId {
        let opener = self.advance().expect("peek_is_comment guarantees a token");
        let is_block = opener.lexeme == "/*";
        let comment = self.ast.add_node(parent, NodeKind::Comment, opener.lexeme.as_str());

        let mut text = String::new();
        loop {
            let Some(tok) = self.tokens.front() else { break };
            if is_block {
                if tok.kind == TokenKind::Comment && tok.lexeme == "*/" {
                    self.tokens.pop_front();
                    break;
                }
            } else if tok.kind == TokenKind::EndLine {
                break;
            }
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(&tok.lexeme);
            self.tokens.pop_front();
        }
        self.ast.add_node(comment, NodeKind::CommentText, text);
        comment
    }

    /// Consumes a single trailing `EndLine` if present; does not error if
    /// there isn't one — some callers terminate a statement with `;` alone.
    fn dump_endline(&mut self) -> bool {
        if self.peek_kind() == Some(TokenKind::EndLine) {
            self.tokens.pop_front();
            true
        } else {
            false
        }
    }

    /// Consumes the `;` that ends a single-line statement, plus any
    /// `EndLine` tokens that follow it on the same physical line.
    fn terminate_single_line_statement(&mut self) -> bool {
        let ok = self.expect_control(";").is_some();
        while self.dump_endline() {}
        ok
    }

    fn peek_is_comment(&self) -> bool {
        self.peek_kind() == Some(TokenKind::Comment)
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.front()
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.tokens.front().map(|t| t.kind)
    }

    fn peek_value(&self) -> Option<&str> {
        self.tokens.front().map(|t| t.lexeme.as_str())
    }

    fn is_at_end(&self) -> bool {
        self.tokens.is_empty()
    }

    fn advance(&mut self) -> Option<Token> {
        self.tokens.pop_front()
    }

    /// Consumes the current token if it's a `Control` token with exactly
    /// this text; otherwise records an error and leaves it in place.
    fn expect_control(&mut self, text: &str) -> Option<Token> {
        match self.peek() {
            Some(tok) if tok.kind == TokenKind::Control && tok.lexeme == text => self.advance(),
            _ => {
                self.error(format!("expected '{}'", text));
                None
            }
        }
    }

    /// Whether the current token is a `Control` token with exactly this
    /// text, without consuming it.
    fn at_control(&self, text: &str) -> bool {
        matches!(self.peek(), Some(tok) if tok.kind == TokenKind::Control && tok.lexeme == text)
    }

    /// Consumes the current token if it's an `Id` token with exactly this
    /// text, without recording an error on mismatch.
    fn match_word(&mut self, word: &str) -> bool {
        match self.peek() {
            Some(tok) if tok.kind == TokenKind::Id && tok.lexeme == word => {
                self.advance();
                true
            }
            _ => false,
        }
    }

    /// Parses a single `Id` token as an identifier node, or records an
    /// error if the current token isn't one.
    fn parse_identifier(&mut self, parent: NodeId) -> Option<NodeId> {
        match self.peek() {
            Some(tok) if tok.kind == TokenKind::Id => {
                let text = tok.lexeme.clone();
                self.advance();
                Some(self.ast.add_node(parent, NodeKind::Identifier, text))
            }
            _ => {
                self.error("expected identifier".to_string());
                None
            }
        }
    }

    /// Parses a dotted identifier (`a.b.c`) as a single `Identifier` node
    /// whose value is the joined text.
    fn parse_full_identifier(&mut self, parent: NodeId) -> Option<NodeId> {
        self.parse_full_identifier_as(parent, NodeKind::Identifier)
    }

    /// Like [`Self::parse_full_identifier`], but tags the produced node with
    /// `kind` instead of always `Identifier` — used for `UserType` names.
    fn parse_full_identifier_as(&mut self, parent: NodeId, kind: NodeKind) -> Option<NodeId> {
        let first = match self.peek() {
            Some(tok) if tok.kind == TokenKind::Id => tok.lexeme.clone(),
            _ => {
                self.error("expected identifier".to_string());
                return None;
            }
        };
        self.advance();
        let mut full = first;

        loop {
            let is_dot = matches!(self.peek(), Some(tok) if tok.kind == TokenKind::Control && tok.lexeme == ".");
            if !is_dot {
                break;
            }
            self.advance();
            match self.peek() {
                Some(tok) if tok.kind == TokenKind::Id => {
                    full.push('.');
                    full.push_str(&tok.lexeme);
                    self.advance();
                }
                _ => {
                    self.error("expected identifier after '.'".to_string());
                    break;
                }
            }
        }

        Some(self.ast.add_node(parent, kind, full))
    }

    /// Parses a `String`-kind token, stripping its surrounding quotes.
    fn parse_string_literal(&mut self, parent: NodeId) -> Option<NodeId> {
        match self.peek() {
            Some(tok) if tok.kind == TokenKind::String => {
                let raw = tok.lexeme.clone();
                self.advance();
                let unquoted = unquote(&raw);
                Some(self.ast.add_node(parent, NodeKind::StringLiteral, unquoted))
            }
            _ => {
                self.error("expected string literal".to_string());
                None
            }
        }
    }

    /// Parses a `Numeric`-kind token as an `IntegerLiteral` node.
    fn parse_integer_literal(&mut self, parent: NodeId) -> Option<NodeId> {
        match self.peek() {
            Some(tok) if tok.kind == TokenKind::Numeric => {
                let text = tok.lexeme.clone();
                self.advance();
                Some(self.ast.add_node(parent, NodeKind::IntegerLiteral, text))
            }
            _ => {
                self.error("expected integer literal".to_string());
                None
            }
        }
    }

    /// Parses a numeric literal token as a bare `i64`, without adding an AST
    /// node for it — used where the raw value feeds a computation (e.g. a
    /// `reserved` range) rather than being recorded directly.
    fn parse_plain_integer(&mut self) -> Option<i64> {
        match self.peek() {
            Some(tok) if tok.kind == TokenKind::Numeric => {
                let text = tok.lexeme.clone();
                let value: i64 = text.parse().ok()?;
                self.advance();
                Some(value)
            }
            _ => {
                self.error("expected integer literal".to_string());
                None
            }
        }
    }

    fn error(&mut self, message: String) {
        let token = self.peek().cloned();
        self.ast.push_error(ParseError::new(message, token));
    }

    /// Parses a `{ ... }` body, dispatching each member to `try_item`.
    /// `try_item` returns `true` if it recognized and consumed something
    /// (even if that something was itself malformed and produced an
    /// error), `false` if the current token matched no production at all.
    ///
    /// Guards against infinite loops: if a full iteration consumes no
    /// tokens and the closing brace still hasn't been reached, the parser
    /// force-advances one token and records an error, guaranteeing the
    /// loop always makes progress.
    fn parse_braced_body(
        &mut self,
        parent: NodeId,
        mut try_item: impl FnMut(&mut Self, NodeId) -> bool,
    ) {
        if self.expect_control("{").is_none() {
            return;
        }

        loop {
            if self.is_at_end() {
                self.error("unexpected end of input inside block".to_string());
                break;
            }
            if matches!(self.peek(), Some(tok) if tok.kind == TokenKind::Control && tok.lexeme == "}")
            {
                self.advance();
                break;
            }
            if self.dump_endline() {
                continue;
            }
            if self.peek_is_comment() {
                self.scoop_comment(parent);
                continue;
            }

            let before = self.tokens.len();
            if !try_item(self, parent) {
                self.error("unexpected token in block body".to_string());
            }

            let is_closing_brace = matches!(self.peek(), Some(tok) if tok.kind == TokenKind::Control && tok.lexeme == "}");
            if self.tokens.len() == before && !is_closing_brace {
                self.advance();
            }
        }
    }
}

/// Strips a single matching pair of `"` or `` ` `` quotes from `raw`, if
/// present; otherwise returns `raw` unchanged.
fn unquote(raw: &str) -> &str {
    let mut chars = raw.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) if first == last && (first == '"' || first == '`') => {
            chars.as_str()
        }
        _ => raw,
    }
}
