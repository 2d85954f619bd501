//! End-to-end parsing scenarios: a complete, realistic file, and a handful
//! of malformed inputs exercising the two recovery strategies (burn-the-line
//! at top level, the progress guard inside a block body).

use protoc3_par::{analyze, NodeKind};

#[test]
fn parses_a_complete_realistic_file() {
    let source = r#"
        syntax = "proto3";
        package addressbook;

        option java_package = "com.example.addressbook";

        // A contact's phone number.
        message Person {
            string name = 1;
            int32 id = 2;
            string email = 3;

            enum PhoneType {
                MOBILE = 0;
                HOME = 1;
                WORK = 2;
            }

            message PhoneNumber {
                string number = 1;
                PhoneType type = 2;
            }

            repeated PhoneNumber phones = 4;

            oneof contact_method {
                string email_address = 5;
                string phone_number = 6;
            }

            map<string, string> attributes = 7;

            reserved 8, 9 to 11;
            reserved "legacy_field";
        }

        service Directory {
            rpc Lookup (LookupRequest) returns (Person);
            rpc WatchAll (WatchRequest) returns (stream Person);
        }
    "#;

    let ast = analyze(source);
    assert!(!ast.has_errors(), "unexpected errors: {:?}", ast.errors());

    let root = ast.root();
    let kinds: Vec<_> = root.children().map(|n| n.kind()).collect();
    assert!(kinds.contains(&NodeKind::Syntax));
    assert!(kinds.contains(&NodeKind::Package));
    assert!(kinds.contains(&NodeKind::Option));
    assert!(kinds.contains(&NodeKind::Message));
    assert!(kinds.contains(&NodeKind::Service));

    let comment = root.children().find(|n| n.kind() == NodeKind::Comment).unwrap();
    let text = comment.children().next().unwrap();
    assert_eq!(text.kind(), NodeKind::CommentText);

    let person = root.children().find(|n| n.kind() == NodeKind::Message).unwrap();
    assert!(person.children().any(|n| n.kind() == NodeKind::Enum));
    assert!(person.children().any(|n| n.kind() == NodeKind::OneOfField));
    assert!(person.children().any(|n| n.kind() == NodeKind::Map));
    assert!(person.children().any(|n| n.kind() == NodeKind::Reserved));
}

#[test]
fn garbage_top_level_line_is_skipped_and_parsing_continues() {
    let source = "this is not valid at all\nsyntax = \"proto3\";\n";
    let ast = analyze(source);
    assert!(ast.has_errors());
    assert!(ast.root().children().any(|n| n.kind() == NodeKind::Syntax));
}

#[test]
fn malformed_message_field_does_not_stall_the_parser() {
    let source = "message Foo {\n  !!! broken\n  string ok = 1;\n}\n";
    let ast = analyze(source);
    assert!(ast.has_errors());
    let message = ast.root().children().next().unwrap();
    assert_eq!(message.kind(), NodeKind::Message);
    assert!(message.children().any(|n| n.kind() == NodeKind::Field));
}

#[test]
fn unterminated_message_body_still_returns_a_result() {
    let source = "message Foo {\n  string name = 1;\n";
    let ast = analyze(source);
    assert!(ast.has_errors());
    let message = ast.root().children().next().unwrap();
    assert_eq!(message.kind(), NodeKind::Message);
}

#[test]
fn unrecognized_characters_surface_as_lexer_diagnostics_not_parse_errors() {
    let source = "syntax = \"proto3\";\n$\n";
    let ast = analyze(source);
    assert!(!ast.lexer_diagnostics().is_empty());
}

#[test]
fn multiple_top_level_declarations_all_survive_one_bad_line() {
    let source = "syntax = \"proto3\";\n???\npackage demo;\n";
    let ast = analyze(source);
    let kinds: Vec<_> = ast.root().children().map(|n| n.kind()).collect();
    assert!(kinds.contains(&NodeKind::Syntax));
    assert!(kinds.contains(&NodeKind::Package));
}
