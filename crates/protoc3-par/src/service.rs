//! `service` and `rpc` productions.
//!
//! Not part of the original closed grammar this front end grew from, but
//! invited by the reserved `Service`/`Streaming`/`ServiceReturnType`/
//! `ServiceInputType` node kinds already sitting unused in the
//! enumeration. Grounded directly in the standard proto3 grammar, since
//! there's no richer precedent to draw the shape from:
//!
//! ```text
//! service = "service" serviceName "{" { option | rpc | emptyStatement } "}"
//! rpc = "rpc" rpcName "(" [ "stream" ] messageType ")" "returns"
//!       "(" [ "stream" ] messageType ")" (( "{" {option|emptyStatement} "}" ) | ";")
//! ```

use crate::ast::{NodeId, NodeKind};
use crate::predicates;
use crate::Parser;

impl Parser {
    pub(crate) fn parse_service(&mut self, parent: NodeId) -> Option<NodeId> {
        self.advance(); // "service"
        let node = self.ast.add_node(parent, NodeKind::Service, "");
        self.parse_identifier(node)?;
        self.parse_braced_body(node, |p, parent| p.try_service_member(parent));
        Some(node)
    }

    fn try_service_member(&mut self, parent: NodeId) -> bool {
        if self.at_control(";") {
            self.advance();
            return true;
        }
        let Some(word) = self.peek_value().map(str::to_string) else {
            return false;
        };
        if predicates::is_option_keyword(&word) {
            self.parse_option(parent).is_some()
        } else if predicates::is_rpc_keyword(&word) {
            self.parse_rpc(parent).is_some()
        } else {
            false
        }
    }

    /// Each `rpc` entry reuses the `Service` node kind — the closed
    /// enumeration has no separate "Rpc" variant, the same way `Field`
    /// stands for both scalar- and message-typed fields elsewhere in this
    /// grammar. Its children distinguish it from the outer `service` node:
    /// `Identifier` (rpc name), `ServiceInputType`, `ServiceReturnType`, in
    /// that order.
    fn parse_rpc(&mut self, parent: NodeId) -> Option<NodeId> {
        self.advance(); // "rpc"
        let node = self.ast.add_node(parent, NodeKind::Service, "");
        self.parse_identifier(node)?;

        self.expect_control("(")?;
        self.parse_service_message_type(node, NodeKind::ServiceInputType)?;
        self.expect_control(")")?;

        if !self.match_word("returns") {
            self.error("expected 'returns'".to_string());
            return None;
        }

        self.expect_control("(")?;
        self.parse_service_message_type(node, NodeKind::ServiceReturnType)?;
        self.expect_control(")")?;

        if self.at_control("{") {
            self.parse_braced_body(node, |p, parent| p.try_rpc_option(parent));
        } else {
            self.terminate_single_line_statement();
        }

        Some(node)
    }

    /// `[ "stream" ] messageType`, wrapped in a `ServiceInputType` or
    /// `ServiceReturnType` node with an optional leading `Streaming` marker.
    fn parse_service_message_type(&mut self, parent: NodeId, kind: NodeKind) -> Option<NodeId> {
        let node = self.ast.add_node(parent, kind, "");
        if self.match_word("stream") {
            self.ast.add_node(node, NodeKind::Streaming, "");
        }
        self.parse_full_identifier(node)?;
        Some(node)
    }

    fn try_rpc_option(&mut self, parent: NodeId) -> bool {
        if self.at_control(";") {
            self.advance();
            return true;
        }
        if let Some(word) = self.peek_value() {
            if predicates::is_option_keyword(word) {
                return self.parse_option(parent).is_some();
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze;

    #[test]
    fn parses_service_with_unary_rpc() {
        let ast = analyze(
            "service Greeter {\n  rpc SayHello (HelloRequest) returns (HelloReply);\n}\n",
        );
        assert!(!ast.has_errors());
        let service = ast.root().children().next().unwrap();
        assert_eq!(service.kind(), NodeKind::Service);
        assert_eq!(service.children().next().unwrap().value(), "Greeter");

        let rpc = service.children().find(|n| n.kind() == NodeKind::Service).unwrap();
        let mut children = rpc.children();
        assert_eq!(children.next().unwrap().value(), "SayHello");

        let input = children.next().unwrap();
        assert_eq!(input.kind(), NodeKind::ServiceInputType);
        assert_eq!(input.children().next().unwrap().value(), "HelloRequest");

        let output = children.next().unwrap();
        assert_eq!(output.kind(), NodeKind::ServiceReturnType);
        assert_eq!(output.children().next().unwrap().value(), "HelloReply");
    }

    #[test]
    fn parses_streaming_rpc() {
        let ast = analyze(
            "service Chat {\n  rpc Messages (stream Msg) returns (stream Msg);\n}\n",
        );
        assert!(!ast.has_errors());
        let service = ast.root().children().next().unwrap();
        let rpc = service.children().find(|n| n.kind() == NodeKind::Service).unwrap();
        let input = rpc.children().find(|n| n.kind() == NodeKind::ServiceInputType).unwrap();
        assert_eq!(input.children().next().unwrap().kind(), NodeKind::Streaming);
    }

    #[test]
    fn parses_rpc_with_option_body() {
        let ast = analyze(
            "service Greeter {\n  rpc SayHello (Req) returns (Rep) {\n    option idempotent = true;\n  }\n}\n",
        );
        assert!(!ast.has_errors());
        let service = ast.root().children().next().unwrap();
        let rpc = service.children().find(|n| n.kind() == NodeKind::Service).unwrap();
        assert!(rpc.children().any(|n| n.kind() == NodeKind::Option));
    }
}
