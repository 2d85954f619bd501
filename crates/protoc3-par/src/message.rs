//! `message`, `enum`, `oneof`, map fields, scalar/user-typed fields, and
//! `reserved` ranges.

use protoc3_lex::TokenKind;

use crate::ast::{NodeId, NodeKind};
use crate::predicates;
use crate::Parser;

/// Proto3's field-number ceiling (2^29 - 1), what `reserved ... to max`
/// expands to.
const MAX_FIELD_NUMBER: i64 = 536_870_911;

impl Parser {
    /// `message = "message" messageName messageBody`
    pub(crate) fn parse_message(&mut self, parent: NodeId) -> Option<NodeId> {
        self.advance(); // "message"
        let node = self.ast.add_node(parent, NodeKind::Message, "");
        self.parse_identifier(node)?;
        self.parse_braced_body(node, |p, parent| p.try_message_member(parent));
        Some(node)
    }

    fn try_message_member(&mut self, parent: NodeId) -> bool {
        if self.at_control(";") {
            self.advance();
            return true;
        }
        let Some(word) = self.peek_value().map(str::to_string) else {
            return false;
        };
        if predicates::is_message_keyword(&word) {
            self.parse_message(parent).is_some()
        } else if predicates::is_enum_keyword(&word) {
            self.parse_enum(parent).is_some()
        } else if predicates::is_option_keyword(&word) {
            self.parse_option(parent).is_some()
        } else if predicates::is_oneof_keyword(&word) {
            self.parse_oneof(parent).is_some()
        } else if predicates::is_map_keyword(&word) {
            self.parse_map_field(parent).is_some()
        } else if predicates::is_reserved_keyword(&word) {
            self.parse_reserved(parent).is_some()
        } else {
            self.parse_field(parent).is_some()
        }
    }

    /// `enum = "enum" enumName enumBody`
    pub(crate) fn parse_enum(&mut self, parent: NodeId) -> Option<NodeId> {
        self.advance(); // "enum"
        let node = self.ast.add_node(parent, NodeKind::Enum, "");
        self.parse_identifier(node)?;
        self.parse_braced_body(node, |p, parent| p.try_enum_member(parent));
        Some(node)
    }

    fn try_enum_member(&mut self, parent: NodeId) -> bool {
        if self.at_control(";") {
            self.advance();
            return true;
        }
        if let Some(word) = self.peek_value() {
            if predicates::is_option_keyword(word) {
                return self.parse_option(parent).is_some();
            }
        }
        self.parse_enum_field(parent).is_some()
    }

    /// `enumField = ident "=" intLit [ "[" enumValueOption { "," enumValueOption } "]" ] ";"`
    fn parse_enum_field(&mut self, parent: NodeId) -> Option<NodeId> {
        let node = self.ast.add_node(parent, NodeKind::EnumField, "");
        self.parse_identifier(node)?;
        self.expect_control("=")?;
        self.parse_integer_literal(node)?;
        self.parse_field_options(node);
        self.terminate_single_line_statement();
        Some(node)
    }

    /// `oneof = "oneof" oneofName "{" { option | oneofField | emptyStatement } "}"`
    ///
    /// There is no dedicated "oneof" node kind in the closed enumeration;
    /// `OneOfField` stands for the whole construct, with an `Identifier`
    /// child for its name followed by one `Field` child per member.
    pub(crate) fn parse_oneof(&mut self, parent: NodeId) -> Option<NodeId> {
        self.advance(); // "oneof"
        let node = self.ast.add_node(parent, NodeKind::OneOfField, "");
        self.parse_identifier(node)?;
        self.parse_braced_body(node, |p, parent| p.try_oneof_member(parent));
        Some(node)
    }

    fn try_oneof_member(&mut self, parent: NodeId) -> bool {
        if self.at_control(";") {
            self.advance();
            return true;
        }
        if let Some(word) = self.peek_value() {
            if predicates::is_option_keyword(word) {
                return self.parse_option(parent).is_some();
            }
        }
        self.parse_oneof_field(parent).is_some()
    }

    /// `oneofField = type fieldName "=" fieldNumber [ "[" fieldOptions "]" ] ";"`
    fn parse_oneof_field(&mut self, parent: NodeId) -> Option<NodeId> {
        let node = self.ast.add_node(parent, NodeKind::Field, "");
        self.parse_type(node)?;
        self.parse_identifier(node)?;
        self.expect_control("=")?;
        self.parse_field_number(node)?;
        self.parse_field_options(node);
        self.terminate_single_line_statement();
        Some(node)
    }

    /// `field = [ "repeated" ] type fieldName "=" fieldNumber [ "[" fieldOptions "]" ] ";"`
    fn parse_field(&mut self, parent: NodeId) -> Option<NodeId> {
        let node = self.ast.add_node(parent, NodeKind::Field, "");
        if let Some(word) = self.peek_value() {
            if predicates::is_repeated_keyword(word) {
                self.advance();
                self.ast.add_node(node, NodeKind::Repeated, "");
            }
        }
        self.parse_type(node)?;
        self.parse_identifier(node)?;
        self.expect_control("=")?;
        self.parse_field_number(node)?;
        self.parse_field_options(node);
        self.terminate_single_line_statement();
        Some(node)
    }

    /// `mapField = "map" "<" keyType "," valueType ">" mapName "=" fieldNumber [ "[" fieldOptions "]" ] ";"`
    ///
    /// The `Map` node's children are ordered `Identifier, MapKey, MapValue,
    /// FieldNumber`. The map's name comes first even though it's parsed
    /// after the `<keyType, valueType>` annotation in the source text.
    fn parse_map_field(&mut self, parent: NodeId) -> Option<NodeId> {
        self.advance(); // "map"
        let node = self.ast.add_node(parent, NodeKind::Map, "");

        self.expect_control("<")?;
        let key = self.ast.add_node(node, NodeKind::MapKey, "");
        self.parse_type(key)?;
        self.expect_control(",")?;
        let value = self.ast.add_node(node, NodeKind::MapValue, "");
        self.parse_type(value)?;
        self.expect_control(">")?;

        let name = self.parse_identifier(node)?;
        self.ast.move_to_front(node, name);

        self.expect_control("=")?;
        self.parse_field_number(node)?;
        self.parse_field_options(node);
        self.terminate_single_line_statement();
        Some(node)
    }

    /// `fieldNumber = intLit`, wrapped in its own `FieldNumber` node.
    fn parse_field_number(&mut self, parent: NodeId) -> Option<NodeId> {
        let node = self.ast.add_node(parent, NodeKind::FieldNumber, "");
        self.parse_integer_literal(node)?;
        Some(node)
    }

    /// `type = scalarType | messageType | enumType`. A scalar type is a
    /// `Type` leaf carrying the type name; anything else is assumed to
    /// name a message or enum type and becomes a `Type` node wrapping a
    /// `UserType` child.
    fn parse_type(&mut self, parent: NodeId) -> Option<NodeId> {
        match self.peek() {
            Some(tok) if tok.kind == TokenKind::Id => {
                let word = tok.lexeme.clone();
                if predicates::is_basic_type(&word) {
                    self.advance();
                    Some(self.ast.add_node(parent, NodeKind::Type, word))
                } else {
                    let node = self.ast.add_node(parent, NodeKind::Type, "");
                    self.parse_full_identifier_as(node, NodeKind::UserType)?;
                    Some(node)
                }
            }
            _ => {
                self.error("expected type".to_string());
                None
            }
        }
    }

    /// `[ fieldOptions ]`, each entry `optionName "=" constant`, attached as
    /// `Option` children of `parent`. A no-op if `[` isn't next.
    fn parse_field_options(&mut self, parent: NodeId) {
        if !self.at_control("[") {
            return;
        }
        self.advance();

        loop {
            if self.at_control("]") {
                self.advance();
                break;
            }
            if self.is_at_end() {
                self.error("unexpected end of input in field options".to_string());
                break;
            }

            let option = self.ast.add_node(parent, NodeKind::Option, "");
            if self.parse_full_identifier(option).is_none() {
                break;
            }
            if self.expect_control("=").is_none() {
                break;
            }
            if self.parse_constant(option).is_none() {
                break;
            }
            if self.at_control(",") {
                self.advance();
            }
        }
    }

    /// `reserved = "reserved" ( ranges | fieldNames ) ";"`
    ///
    /// `ranges` is `range { "," range }`, `range = intLit [ "to" (intLit | "max") ]`.
    /// Each range is expanded to its individual numbers rather than kept as
    /// a start/end pair: the count is `max(0, end - start + 1)` (an
    /// inverted range reserves nothing), the numbers are pushed onto a
    /// stack in descending order and popped back off, so the emitted
    /// `IntegerLiteral` children come out in ascending order per range.
    /// Overlapping ranges are not deduplicated.
    pub(crate) fn parse_reserved(&mut self, parent: NodeId) -> Option<NodeId> {
        self.advance(); // "reserved"
        let node = self.ast.add_node(parent, NodeKind::Reserved, "");

        if matches!(self.peek(), Some(tok) if tok.kind == TokenKind::String) {
            loop {
                self.parse_string_literal(node)?;
                if self.at_control(",") {
                    self.advance();
                    continue;
                }
                break;
            }
        } else {
            loop {
                self.parse_reserved_range(node)?;
                if self.at_control(",") {
                    self.advance();
                    continue;
                }
                break;
            }
        }

        self.terminate_single_line_statement();
        Some(node)
    }

    fn parse_reserved_range(&mut self, parent: NodeId) -> Option<()> {
        let start = self.parse_plain_integer()?;
        let end = if self.match_word("to") {
            if self.match_word("max") {
                MAX_FIELD_NUMBER
            } else {
                self.parse_plain_integer()?
            }
        } else {
            start
        };

        let count = (end - start + 1).max(0);
        let mut stack = Vec::with_capacity(count as usize);
        for n in (start..start + count).rev() {
            stack.push(n);
        }
        while let Some(n) = stack.pop() {
            self.ast.add_node(parent, NodeKind::IntegerLiteral, n.to_string());
        }
        Some(())
    }

}
