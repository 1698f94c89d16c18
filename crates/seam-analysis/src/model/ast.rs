//! AST node kinds and the arena node record.

use seam_core::types::collections::{SmallVec2, SmallVec4};
use seam_core::types::{CallableId, NodeId, SourceLocation, TypeId};

/// Syntactic constructs the analysis distinguishes. Everything else is
/// [`Other`](NodeKind::Other) and only participates in parent-chain walks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A call expression, resolved to its statically-possible targets.
    /// Empty targets means the host could not resolve the call at all.
    Call { targets: SmallVec2<CallableId> },
    /// The declaration body of a callable unit.
    CallableDecl { callable: CallableId },
    /// A try block. Its first child is the protected body; catch clauses
    /// and an optional finally block follow as further children.
    Try,
    /// A catch clause with the types it catches.
    Catch { caught: SmallVec4<TypeId> },
    /// A throw expression raising a value of the given type.
    Throw { thrown: TypeId },
    /// Any other construct: blocks, conditions, lambdas.
    Other,
}

/// One node in a program model's arena.
///
/// The arena owns every node; `parent` and `children` are index links,
/// never owners. Multiple parentless roots are allowed, one per source
/// file.
#[derive(Debug, Clone)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    pub location: SourceLocation,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}
