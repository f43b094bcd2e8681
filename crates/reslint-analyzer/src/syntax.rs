//! The syntax surface the host feeds to the analyzer.
//!
//! The analyzer does not own a parser. The host front end walks its own
//! syntax tree and hands over one `SyntaxNode` per node of a kind some rule
//! registered for. Today that is object-construction expressions only, but
//! the node kind stays an explicit tag so further kinds slot into the same
//! dispatch table.

use reslint_common::Span;
use smallvec::SmallVec;

/// Index of a syntax node within its compilation unit.
///
/// Node indices are only meaningful to the host that issued them; the
/// analyzer uses them as opaque keys into the semantic model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeIndex(pub u32);

/// Syntax-node kinds the analyzer can register rules for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    ObjectCreation,
}

/// One argument of a construction expression.
///
/// Only the tag matters to the rules: a literal is a fixed value written in
/// source, anything else (identifier, member access, call) is `Other`. The
/// literal's text is carried for debugging but never inspected by rule logic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArgumentExpr {
    Literal(String),
    Other,
}

impl ArgumentExpr {
    pub fn is_literal(&self) -> bool {
        matches!(self, ArgumentExpr::Literal(_))
    }
}

/// Per-kind payload of a syntax node.
#[derive(Clone, Debug)]
pub enum NodeData {
    ObjectCreation(ConstructionData),
}

/// Payload of an object-construction expression: `new T(args)`.
#[derive(Clone, Debug)]
pub struct ConstructionData {
    /// Type name as written in source (for logging only; resolution goes
    /// through the semantic model keyed by node index).
    pub type_name: String,
    /// Arguments in source order.
    pub arguments: SmallVec<[ArgumentExpr; 4]>,
}

/// A syntax node handed to the analyzer by the host.
#[derive(Clone, Debug)]
pub struct SyntaxNode {
    pub index: NodeIndex,
    pub span: Span,
    pub data: NodeData,
}

impl SyntaxNode {
    pub fn kind(&self) -> NodeKind {
        match self.data {
            NodeData::ObjectCreation(_) => NodeKind::ObjectCreation,
        }
    }
}

/// One source file's worth of rule-relevant syntax nodes.
#[derive(Clone, Debug)]
pub struct CompilationUnit {
    pub file_name: String,
    /// Nodes in source order; `SyntaxNode::index` equals the position here
    /// for host-issued units, but rules must not rely on that.
    pub nodes: Vec<SyntaxNode>,
    /// Whether the host marked this file as generated code.
    pub is_generated: bool,
}

impl CompilationUnit {
    pub fn new(file_name: impl Into<String>) -> Self {
        CompilationUnit {
            file_name: file_name.into(),
            nodes: Vec::new(),
            is_generated: false,
        }
    }
}
