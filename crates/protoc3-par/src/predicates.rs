//! Pure grammar predicates.
//!
//! Every function here is a plain `&str -> bool` (or `char -> bool`)
//! classifier: no shared state, no side effects, case-sensitive unless noted.
//! The parser calls these to decide which production to take; they never
//! consume tokens themselves.

/// The proto3 basic (scalar) type names.
const BASIC_TYPES: &[&str] = &[
    "double", "float", "int32", "int64", "uint32", "uint64", "sint32", "sint64", "fixed32",
    "fixed64", "sfixed32", "sfixed64", "bool", "string", "bytes",
];

/// Basic types that proto3 forbids as a map's key type.
const NON_KEY_TYPES: &[&str] = &["double", "float", "bytes"];

pub fn is_basic_type(word: &str) -> bool {
    BASIC_TYPES.contains(&word)
}

/// Whether `word` is a basic type proto3 permits as a map key (every basic
/// type except `double`, `float`, and `bytes`).
pub fn is_map_key_type(word: &str) -> bool {
    is_basic_type(word) && !NON_KEY_TYPES.contains(&word)
}

pub fn is_boolean_literal(word: &str) -> bool {
    word == "true" || word == "false"
}

pub fn is_repeated_keyword(word: &str) -> bool {
    word == "repeated"
}

pub fn is_oneof_keyword(word: &str) -> bool {
    word == "oneof"
}

pub fn is_map_keyword(word: &str) -> bool {
    word == "map"
}

pub fn is_reserved_keyword(word: &str) -> bool {
    word == "reserved"
}

pub fn is_import_modifier(word: &str) -> bool {
    word == "public" || word == "weak"
}

pub fn is_syntax_keyword(word: &str) -> bool {
    word == "syntax"
}

pub fn is_package_keyword(word: &str) -> bool {
    word == "package"
}

pub fn is_import_keyword(word: &str) -> bool {
    word == "import"
}

pub fn is_option_keyword(word: &str) -> bool {
    word == "option"
}

pub fn is_message_keyword(word: &str) -> bool {
    word == "message"
}

pub fn is_enum_keyword(word: &str) -> bool {
    word == "enum"
}

pub fn is_service_keyword(word: &str) -> bool {
    word == "service"
}

pub fn is_rpc_keyword(word: &str) -> bool {
    word == "rpc"
}

pub fn is_returns_keyword(word: &str) -> bool {
    word == "returns"
}

pub fn is_stream_keyword(word: &str) -> bool {
    word == "stream"
}

pub fn is_to_keyword(word: &str) -> bool {
    word == "to"
}

pub fn is_max_keyword(word: &str) -> bool {
    word == "max"
}

/// Whether `word` is a letter-led run of letters, digits, or underscores —
/// a valid proto3 identifier shape.
pub fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Whether `word` is a dotted sequence of identifiers (`a.b.c`), proto3's
/// "full identifier" production.
pub fn is_full_identifier(word: &str) -> bool {
    !word.is_empty() && word.split('.').all(is_identifier)
}

pub fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_octal_digit(c: char) -> bool {
    ('0'..='7').contains(&c)
}

pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Whether `lexeme` parses as an integer literal (decimal, octal, or hex).
pub fn is_integer_literal(lexeme: &str) -> bool {
    if let Some(hex) = lexeme.strip_prefix("0x").or_else(|| lexeme.strip_prefix("0X")) {
        return !hex.is_empty() && hex.chars().all(is_hex_digit);
    }
    !lexeme.is_empty() && lexeme.chars().all(is_decimal_digit)
}

/// Whether `lexeme` contains a `.` or an exponent marker, i.e. is a float
/// rather than an integer numeric literal.
pub fn is_float_literal(lexeme: &str) -> bool {
    lexeme.contains('.') || lexeme.contains('e') || lexeme.contains('E')
}

/// Whether `lexeme` parses as a base-10 integer literal, excluding hex and
/// octal forms that `is_integer_literal` also accepts.
pub fn is_decimal_literal(lexeme: &str) -> bool {
    !lexeme.is_empty() && lexeme.chars().all(is_decimal_digit)
}

/// Whether `lexeme` is a quoted string literal, single- or double-quoted.
pub fn is_string_literal(lexeme: &str) -> bool {
    let mut chars = lexeme.chars();
    match (chars.next(), lexeme.chars().last()) {
        (Some('"'), Some('"')) | (Some('\''), Some('\'')) => lexeme.len() >= 2,
        _ => false,
    }
}

/// Whether `word` can open a field production: `repeated`, a basic type, or
/// a (possibly dotted) user-type identifier.
pub fn is_field_start(word: &str) -> bool {
    is_repeated_keyword(word) || is_basic_type(word) || is_full_identifier(word)
}

pub fn is_assignment(word: &str) -> bool {
    word == "="
}

pub fn is_empty_statement(word: &str) -> bool {
    word == ";"
}

pub fn is_inline_comment(word: &str) -> bool {
    word == "//"
}

pub fn is_multiline_comment_open(word: &str) -> bool {
    word == "/*"
}

pub fn is_multiline_comment_close(word: &str) -> bool {
    word == "*/"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_basic_types() {
        assert!(is_basic_type("int32"));
        assert!(is_basic_type("bytes"));
        assert!(!is_basic_type("Foo"));
    }

    #[test]
    fn map_key_type_excludes_double_float_bytes() {
        assert!(is_map_key_type("string"));
        assert!(is_map_key_type("int32"));
        assert!(!is_map_key_type("double"));
        assert!(!is_map_key_type("float"));
        assert!(!is_map_key_type("bytes"));
    }

    #[test]
    fn recognizes_boolean_literals() {
        assert!(is_boolean_literal("true"));
        assert!(is_boolean_literal("false"));
        assert!(!is_boolean_literal("True"));
    }

    #[test]
    fn identifier_shape() {
        assert!(is_identifier("foo_Bar1"));
        assert!(!is_identifier("1foo"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("foo.bar"));
    }

    #[test]
    fn full_identifier_allows_dots() {
        assert!(is_full_identifier("google.protobuf.Any"));
        assert!(!is_full_identifier("google..Any"));
        assert!(!is_full_identifier(""));
    }

    #[test]
    fn integer_literal_bases() {
        assert!(is_integer_literal("0755"));
        assert!(is_integer_literal("0x1AF"));
        assert!(is_integer_literal("12345"));
        assert!(!is_integer_literal("12.5"));
        assert!(!is_integer_literal(""));
    }

    #[test]
    fn float_literal_detection() {
        assert!(is_float_literal("1.5"));
        assert!(is_float_literal("1e10"));
        assert!(!is_float_literal("15"));
    }

    #[test]
    fn decimal_literal_rejects_hex_and_octal_prefixes() {
        assert!(is_decimal_literal("12345"));
        assert!(!is_decimal_literal("0x1AF"));
        assert!(!is_decimal_literal(""));
    }

    #[test]
    fn string_literal_shape() {
        assert!(is_string_literal("\"hi\""));
        assert!(is_string_literal("'hi'"));
        assert!(!is_string_literal("\"unterminated"));
        assert!(!is_string_literal(""));
    }

    #[test]
    fn field_start_accepts_repeated_basic_or_identifier() {
        assert!(is_field_start("repeated"));
        assert!(is_field_start("string"));
        assert!(is_field_start("google.protobuf.Any"));
        assert!(!is_field_start("="));
    }

    #[test]
    fn recognizes_control_markers() {
        assert!(is_assignment("="));
        assert!(is_empty_statement(";"));
        assert!(is_inline_comment("//"));
        assert!(is_multiline_comment_open("/*"));
        assert!(is_multiline_comment_close("*/"));
        assert!(!is_assignment(";"));
    }
}
