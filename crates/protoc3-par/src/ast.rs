//! The AST: a closed [`NodeKind`] enumeration over an arena of [`NodeData`],
//! addressed by typed [`NodeId`]s instead of owned/ref-counted pointers.
//!
//! A tree built from raw parent/child pointers needs either `Rc`+`Weak` pairs
//! or unsafe aliasing to let a child point back at its parent without a
//! cycle. Indexing into one flat [`IndexVec`] sidesteps that: a [`NodeId`] is
//! `Copy`, a parent and its children can both hold each other's id without
//! either owning the other, and the arena itself owns every node.

use protoc3_util::diagnostic::Diagnostic;
use protoc3_util::index_vec::{define_idx, IndexVec};

use crate::error::ParseError;

define_idx!(NodeId);

/// The closed set of AST node kinds a proto3 file can parse into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Root,
    Comment,
    CommentText,
    Identifier,
    Assignment,
    StringLiteral,
    IntegerLiteral,
    FloatLiteral,
    BooleanLiteral,
    Syntax,
    Package,
    Import,
    ImportModifier,
    Option,
    Enum,
    EnumConstant,
    Message,
    OneOfField,
    Field,
    FieldNumber,
    Type,
    UserType,
    Repeated,
    EnumField,
    Map,
    MapKey,
    MapValue,
    Service,
    Streaming,
    ServiceReturnType,
    ServiceInputType,
    Reserved,
}

/// A node's storage in the arena: its kind, literal text, and structural
/// links. `parent` is `None` only for the root.
#[derive(Clone, Debug)]
pub struct NodeData {
    pub kind: NodeKind,
    pub value: String,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
}

/// A parsed proto3 file: the node arena, the id of its root, and every
/// [`ParseError`] collected along the way. A parse result always exists —
/// callers check [`Ast::errors`] rather than an overall success/failure flag.
#[derive(Clone, Debug)]
pub struct Ast {
    nodes: IndexVec<NodeId, NodeData>,
    root: NodeId,
    errors: Vec<ParseError>,
    lexer_diagnostics: Vec<Diagnostic>,
}

impl Ast {
    /// Creates an AST containing only its root node.
    pub fn new() -> Self {
        let mut nodes = IndexVec::new();
        let root = nodes.push(NodeData {
            kind: NodeKind::Root,
            value: String::new(),
            children: Vec::new(),
            parent: None,
        });
        Self {
            nodes,
            root,
            errors: Vec::new(),
            lexer_diagnostics: Vec::new(),
        }
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn push_error(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    /// Diagnostics the lexer reported while tokenizing (unrecognized
    /// characters); separate from [`Ast::errors`] since the lexer never
    /// fails, it only warns.
    pub fn lexer_diagnostics(&self) -> &[Diagnostic] {
        &self.lexer_diagnostics
    }

    pub fn set_lexer_diagnostics(&mut self, diagnostics: Vec<Diagnostic>) {
        self.lexer_diagnostics = diagnostics;
    }

    pub fn root(&self) -> Node<'_> {
        Node {
            ast: self,
            id: self.root,
        }
    }

    pub fn root_id(&self) -> NodeId {
        self.root
    }

    /// Adds a node to the arena and links it as the last child of `parent`.
    pub fn add_node(&mut self, parent: NodeId, kind: NodeKind, value: impl Into<String>) -> NodeId {
        let id = self.nodes.push(NodeData {
            kind,
            value: value.into(),
            children: Vec::new(),
            parent: Some(parent),
        });
        self.nodes[parent].children.push(id);
        id
    }

    /// Moves `child` to the front of `parent`'s children list. Used when a
    /// production parses its children out of source order but the AST shape
    /// calls for a different one (e.g. a map field's name, parsed last,
    /// still belongs first among the `Map` node's children).
    pub fn move_to_front(&mut self, parent: NodeId, child: NodeId) {
        let children = &mut self.nodes[parent].children;
        if let Some(pos) = children.iter().position(|&id| id == child) {
            let id = children.remove(pos);
            children.insert(0, id);
        }
    }

    pub fn get(&self, id: NodeId) -> &NodeData {
        &self.nodes[id]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id]
    }

    pub fn node(&self, id: NodeId) -> Node<'_> {
        Node { ast: self, id }
    }
}

impl Default for Ast {
    fn default() -> Self {
        Self::new()
    }
}

/// A read-only view of one arena node, borrowing the [`Ast`] it belongs to.
///
/// Exists so structural equality and tree-walking don't have to thread raw
/// [`NodeId`]s plus a separate `&Ast` through every call site.
#[derive(Clone, Copy)]
pub struct Node<'a> {
    ast: &'a Ast,
    id: NodeId,
}

impl<'a> Node<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.ast.get(self.id).kind
    }

    pub fn value(&self) -> &'a str {
        &self.ast.get(self.id).value
    }

    pub fn is_root(&self) -> bool {
        self.ast.get(self.id).parent.is_none()
    }

    pub fn parent(&self) -> Option<Node<'a>> {
        self.ast.get(self.id).parent.map(|id| Node { ast: self.ast, id })
    }

    pub fn children(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        let ast = self.ast;
        ast.get(self.id).children.iter().map(move |&id| Node { ast, id })
    }

    pub fn child_count(&self) -> usize {
        self.ast.get(self.id).children.len()
    }
}

/// Structural equality: kind must match; for non-root nodes, value matches
/// case-insensitively; children must match pairwise, in order. Two root
/// nodes are equal iff their children match — a root's own value is never
/// compared, since it carries none. A root is never equal to a non-root,
/// regardless of what either holds.
impl<'a> PartialEq for Node<'a> {
    fn eq(&self, other: &Self) -> bool {
        if self.is_root() != other.is_root() {
            return false;
        }
        if self.kind() != other.kind() {
            return false;
        }
        if !self.is_root() && !self.value().eq_ignore_ascii_case(other.value()) {
            return false;
        }
        self.children().eq(other.children())
    }
}

impl<'a> Eq for Node<'a> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_simple() -> Ast {
        let mut ast = Ast::new();
        let root = ast.root_id();
        ast.add_node(root, NodeKind::Package, "foo.bar");
        ast
    }

    #[test]
    fn root_has_no_parent_and_no_value() {
        let ast = Ast::new();
        let root = ast.root();
        assert!(root.is_root());
        assert!(root.parent().is_none());
        assert_eq!(root.kind(), NodeKind::Root);
    }

    #[test]
    fn child_links_back_to_parent() {
        let ast = build_simple();
        let child = ast.root().children().next().unwrap();
        assert_eq!(child.parent().unwrap().id(), ast.root_id());
    }

    #[test]
    fn value_equality_is_case_insensitive() {
        let mut a = Ast::new();
        let ra = a.root_id();
        a.add_node(ra, NodeKind::Identifier, "Foo");

        let mut b = Ast::new();
        let rb = b.root_id();
        b.add_node(rb, NodeKind::Identifier, "foo");

        assert_eq!(a.root(), b.root());
    }

    #[test]
    fn differing_kind_is_not_equal() {
        let mut a = Ast::new();
        let ra = a.root_id();
        a.add_node(ra, NodeKind::Identifier, "x");

        let mut b = Ast::new();
        let rb = b.root_id();
        b.add_node(rb, NodeKind::StringLiteral, "x");

        assert_ne!(a.root(), b.root());
    }

    #[test]
    fn root_never_equals_non_root() {
        let ast = build_simple();
        let root = ast.root();
        let child = root.children().next().unwrap();
        assert_ne!(root, child);
    }

    #[test]
    fn children_order_matters() {
        let mut a = Ast::new();
        let ra = a.root_id();
        a.add_node(ra, NodeKind::Identifier, "x");
        a.add_node(ra, NodeKind::Identifier, "y");

        let mut b = Ast::new();
        let rb = b.root_id();
        b.add_node(rb, NodeKind::Identifier, "y");
        b.add_node(rb, NodeKind::Identifier, "x");

        assert_ne!(a.root(), b.root());
    }
}
