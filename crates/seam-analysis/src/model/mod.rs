//! The program model: a materialized, read-only snapshot of one program.
//!
//! A host front-end (parser, symbol resolver) assembles the model through
//! [`ModelBuilder`]; the analysis only ever reads it. The model owns one
//! node arena covering every source file, a type table, and a callable
//! table, all addressed by the index IDs from `seam_core`.

pub mod ast;
pub mod builder;
pub mod symbols;

pub use ast::{NodeKind, SyntaxNode};
pub use builder::ModelBuilder;
pub use symbols::{CallableEntry, CallableKind, TypeEntry};

use seam_core::errors::ResolutionError;
use seam_core::types::collections::{FxHashMap, SmallVec4};
use seam_core::types::{CallableId, NodeId, SourceLocation, TypeId};

/// One immutable program snapshot, shared read-only by every analysis
/// pass of a run.
#[derive(Debug)]
pub struct ProgramModel {
    nodes: Vec<SyntaxNode>,
    types: Vec<TypeEntry>,
    type_names: FxHashMap<String, TypeId>,
    callables: Vec<CallableEntry>,
    /// Call expression nodes in creation order.
    calls: Vec<NodeId>,
    /// Throw expression nodes in creation order.
    throws: Vec<NodeId>,
}

impl ProgramModel {
    /// The full node record behind an ID.
    pub fn node(&self, node: NodeId) -> &SyntaxNode {
        &self.nodes[node.index()]
    }

    pub fn kind_of(&self, node: NodeId) -> &NodeKind {
        &self.nodes[node.index()].kind
    }

    pub fn parent_of(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.index()].parent
    }

    pub fn children_of(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.index()].children
    }

    pub fn location_of(&self, node: NodeId) -> &SourceLocation {
        &self.nodes[node.index()].location
    }

    /// The types a call expression may propagate: the union of the
    /// declared throws of all statically-possible targets, first-seen
    /// order. Empty when the call is unresolved or its targets declare
    /// nothing.
    pub fn declared_throw_types(&self, call: NodeId) -> SmallVec4<TypeId> {
        let mut throws: SmallVec4<TypeId> = SmallVec4::new();
        for &target in self.resolve_call_target(call) {
            for &ty in &self.callables[target.index()].declared_throws {
                if !throws.contains(&ty) {
                    throws.push(ty);
                }
            }
        }
        throws
    }

    /// Statically-possible targets of a call expression. More than one
    /// on dynamic-dispatch ambiguity, none when unresolvable. Empty for
    /// nodes that are not calls.
    pub fn resolve_call_target(&self, call: NodeId) -> &[CallableId] {
        match &self.nodes[call.index()].kind {
            NodeKind::Call { targets } => targets,
            _ => &[],
        }
    }

    /// Direct declared supertypes of a type. Fails when the type was
    /// referenced but never declared.
    pub fn direct_supertypes(&self, ty: TypeId) -> Result<&[TypeId], ResolutionError> {
        let entry = &self.types[ty.index()];
        entry
            .supertypes
            .as_deref()
            .ok_or_else(|| ResolutionError::UnknownSupertypes {
                type_name: entry.qualified_name.clone(),
            })
    }

    pub fn type_id(&self, qualified_name: &str) -> Option<TypeId> {
        self.type_names.get(qualified_name).copied()
    }

    pub fn type_name(&self, ty: TypeId) -> &str {
        &self.types[ty.index()].qualified_name
    }

    pub fn callable(&self, callable: CallableId) -> &CallableEntry {
        &self.callables[callable.index()]
    }

    /// All callable rows with their IDs, in registration order.
    pub fn callables(&self) -> impl Iterator<Item = (CallableId, &CallableEntry)> {
        self.callables
            .iter()
            .enumerate()
            .map(|(index, entry)| (CallableId::new(index as u32), entry))
    }

    /// The callable whose declaration body lexically contains `node`,
    /// found by walking parent links. `None` for top-level code.
    pub fn enclosing_callable(&self, node: NodeId) -> Option<CallableId> {
        let mut current = self.parent_of(node);
        while let Some(id) = current {
            if let NodeKind::CallableDecl { callable } = self.nodes[id.index()].kind {
                return Some(callable);
            }
            current = self.parent_of(id);
        }
        None
    }

    /// Every call expression, in creation order.
    pub fn call_sites(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.calls.iter().copied()
    }

    /// Every throw expression, in creation order.
    pub fn throw_sites(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.throws.iter().copied()
    }

    pub fn call_site_count(&self) -> usize {
        self.calls.len()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    pub fn callable_count(&self) -> usize {
        self.callables.len()
    }
}
