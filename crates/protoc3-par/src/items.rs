//! Top-level productions: `syntax`, `package`, `import`, `option`.

use crate::ast::{NodeId, NodeKind};
use crate::Parser;

impl Parser {
    /// `syntax = "syntax" "=" strLit ";"`
    pub(crate) fn parse_syntax(&mut self, parent: NodeId) -> Option<NodeId> {
        self.advance(); // "syntax"
        let node = self.ast.add_node(parent, NodeKind::Syntax, "");
        self.expect_control("=")?;
        self.parse_string_literal(node)?;
        self.terminate_single_line_statement();
        Some(node)
    }

    /// `package = "package" fullIdent ";"`
    pub(crate) fn parse_package(&mut self, parent: NodeId) -> Option<NodeId> {
        self.advance(); // "package"
        let node = self.ast.add_node(parent, NodeKind::Package, "");
        self.parse_full_identifier(node)?;
        self.terminate_single_line_statement();
        Some(node)
    }

    /// `import = "import" [ "weak" | "public" ] strLit ";"`
    pub(crate) fn parse_import(&mut self, parent: NodeId) -> Option<NodeId> {
        self.advance(); // "import"
        let node = self.ast.add_node(parent, NodeKind::Import, "");

        if let Some(word) = self.peek_value() {
            if crate::predicates::is_import_modifier(word) {
                let word = word.to_string();
                self.advance();
                self.ast.add_node(node, NodeKind::ImportModifier, word);
            }
        }

        self.parse_string_literal(node)?;
        self.terminate_single_line_statement();
        Some(node)
    }

    /// `option = "option" optionName "=" constant ";"`
    pub(crate) fn parse_option(&mut self, parent: NodeId) -> Option<NodeId> {
        self.advance(); // "option"
        let node = self.ast.add_node(parent, NodeKind::Option, "");
        self.parse_full_identifier(node)?;
        self.expect_control("=")?;
        self.parse_constant(node)?;
        self.terminate_single_line_statement();
        Some(node)
    }

    /// A constant as used on the right-hand side of an option or enum
    /// field default: a string, a number, a boolean, or an identifier
    /// (for enum-valued options).
    ///
    /// `FloatLiteral` and `BooleanLiteral` are reserved node kinds that no
    /// production emits: a float-looking numeral is still recorded as
    /// `IntegerLiteral`, and `true`/`false` fall through to the plain
    /// identifier path like any other enum-valued option constant.
    pub(crate) fn parse_constant(&mut self, parent: NodeId) -> Option<NodeId> {
        use protoc3_lex::TokenKind;

        match self.peek().map(|t| t.kind) {
            Some(TokenKind::String) => self.parse_string_literal(parent),
            Some(TokenKind::Numeric) => self.parse_integer_literal(parent),
            Some(TokenKind::Id) => self.parse_full_identifier(parent),
            _ => {
                self.error("expected constant".to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{analyze, NodeKind};

    #[test]
    fn parses_syntax_declaration() {
        let ast = analyze("syntax = \"proto3\";\n");
        assert!(!ast.has_errors());
        let syntax = ast.root().children().next().unwrap();
        assert_eq!(syntax.kind(), NodeKind::Syntax);
        let value = syntax.children().next().unwrap();
        assert_eq!(value.kind(), NodeKind::StringLiteral);
        assert_eq!(value.value(), "proto3");
    }

    #[test]
    fn parses_package_declaration() {
        let ast = analyze("package foo.bar.baz;\n");
        assert!(!ast.has_errors());
        let package = ast.root().children().next().unwrap();
        assert_eq!(package.kind(), NodeKind::Package);
        let ident = package.children().next().unwrap();
        assert_eq!(ident.value(), "foo.bar.baz");
    }

    #[test]
    fn parses_import_with_modifier() {
        let ast = analyze("import public \"other.proto\";\n");
        assert!(!ast.has_errors());
        let import = ast.root().children().next().unwrap();
        assert_eq!(import.kind(), NodeKind::Import);
        let mut children = import.children();
        assert_eq!(children.next().unwrap().kind(), NodeKind::ImportModifier);
        assert_eq!(children.next().unwrap().kind(), NodeKind::StringLiteral);
    }

    #[test]
    fn parses_plain_import() {
        let ast = analyze("import \"other.proto\";\n");
        assert!(!ast.has_errors());
        let import = ast.root().children().next().unwrap();
        assert_eq!(import.children().count(), 1);
    }

    #[test]
    fn parses_option_with_boolean_constant() {
        let ast = analyze("option java_multiple_files = true;\n");
        assert!(!ast.has_errors());
        let option = ast.root().children().next().unwrap();
        assert_eq!(option.kind(), NodeKind::Option);
        let mut children = option.children();
        assert_eq!(children.next().unwrap().kind(), NodeKind::Identifier);
        let value = children.next().unwrap();
        assert_eq!(value.kind(), NodeKind::Identifier);
        assert_eq!(value.value(), "true");
    }

    #[test]
    fn unknown_top_level_token_burns_the_line() {
        let ast = analyze("bogus stuff here;\nsyntax = \"proto3\";\n");
        assert!(ast.has_errors());
        let syntax = ast.root().children().find(|n| n.kind() == NodeKind::Syntax);
        assert!(syntax.is_some());
    }
}
