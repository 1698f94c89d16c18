//! Incremental construction of a program model.

use seam_core::errors::ModelError;
use seam_core::types::collections::FxHashMap;
use seam_core::types::{CallableId, NodeId, SourceLocation, TypeId};

use super::ast::{NodeKind, SyntaxNode};
use super::symbols::{CallableEntry, CallableKind, TypeEntry};
use super::ProgramModel;

/// Assembles a [`ProgramModel`] row by row and node by node.
///
/// The builder is the seam between a host front-end and the analysis: it
/// performs no parsing and trusts the host for names, locations, and call
/// resolution, but it does validate handler structure in
/// [`finish`](Self::finish) so the engines can rely on it.
#[derive(Default)]
pub struct ModelBuilder {
    nodes: Vec<SyntaxNode>,
    types: Vec<TypeEntry>,
    type_names: FxHashMap<String, TypeId>,
    callables: Vec<CallableEntry>,
    callable_names: FxHashMap<String, CallableId>,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a type by name. Referencing a type does not declare it;
    /// its supertypes stay unknown until [`declare_type`](Self::declare_type)
    /// fills them in.
    pub fn type_ref(&mut self, qualified_name: &str) -> TypeId {
        if let Some(&id) = self.type_names.get(qualified_name) {
            return id;
        }
        let id = TypeId::new(self.types.len() as u32);
        self.types.push(TypeEntry {
            qualified_name: qualified_name.to_string(),
            supertypes: None,
        });
        self.type_names.insert(qualified_name.to_string(), id);
        id
    }

    /// Declare a type with its direct supertypes. Re-declaring replaces
    /// the supertype list.
    pub fn declare_type(&mut self, qualified_name: &str, supertypes: &[TypeId]) -> TypeId {
        let id = self.type_ref(qualified_name);
        self.types[id.index()].supertypes = Some(supertypes.to_vec());
        id
    }

    /// Register a method or function.
    pub fn method(
        &mut self,
        qualified_name: &str,
        parameter_count: u32,
        throws: &[TypeId],
    ) -> Result<CallableId, ModelError> {
        self.register_callable(
            qualified_name.to_string(),
            CallableKind::Method,
            None,
            parameter_count,
            throws,
        )
    }

    /// Register a constructor of `ty`. The row is named `{type}.<init>`.
    pub fn constructor(
        &mut self,
        ty: TypeId,
        parameter_count: u32,
        throws: &[TypeId],
    ) -> Result<CallableId, ModelError> {
        let qualified_name = format!("{}.<init>", self.types[ty.index()].qualified_name);
        self.register_callable(
            qualified_name,
            CallableKind::Constructor,
            Some(ty),
            parameter_count,
            throws,
        )
    }

    fn register_callable(
        &mut self,
        qualified_name: String,
        kind: CallableKind,
        constructed_type: Option<TypeId>,
        parameter_count: u32,
        throws: &[TypeId],
    ) -> Result<CallableId, ModelError> {
        if self.callable_names.contains_key(&qualified_name) {
            return Err(ModelError::DuplicateCallable {
                name: qualified_name,
            });
        }
        let id = CallableId::new(self.callables.len() as u32);
        self.callable_names.insert(qualified_name.clone(), id);
        self.callables.push(CallableEntry {
            qualified_name,
            kind,
            constructed_type,
            declared_throws: throws.iter().copied().collect(),
            parameter_count,
            decl_node: None,
        });
        Ok(id)
    }

    /// Append a node to the arena and link it under `parent`.
    pub fn node(
        &mut self,
        kind: NodeKind,
        parent: Option<NodeId>,
        location: SourceLocation,
    ) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(SyntaxNode {
            kind,
            location,
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            self.nodes[parent.index()].children.push(id);
        }
        id
    }

    /// Add the declaration body node of a callable and back-link the
    /// callable row to it.
    pub fn callable_decl(
        &mut self,
        callable: CallableId,
        parent: Option<NodeId>,
        location: SourceLocation,
    ) -> NodeId {
        let id = self.node(NodeKind::CallableDecl { callable }, parent, location);
        self.callables[callable.index()].decl_node = Some(id);
        id
    }

    /// Add a call expression resolved to `targets`.
    pub fn call(
        &mut self,
        targets: &[CallableId],
        parent: Option<NodeId>,
        location: SourceLocation,
    ) -> NodeId {
        self.node(
            NodeKind::Call {
                targets: targets.iter().copied().collect(),
            },
            parent,
            location,
        )
    }

    pub fn try_block(&mut self, parent: Option<NodeId>, location: SourceLocation) -> NodeId {
        self.node(NodeKind::Try, parent, location)
    }

    /// Add a catch clause under its try block.
    pub fn catch(
        &mut self,
        try_block: NodeId,
        caught: &[TypeId],
        location: SourceLocation,
    ) -> NodeId {
        self.node(
            NodeKind::Catch {
                caught: caught.iter().copied().collect(),
            },
            Some(try_block),
            location,
        )
    }

    pub fn throw(
        &mut self,
        thrown: TypeId,
        parent: Option<NodeId>,
        location: SourceLocation,
    ) -> NodeId {
        self.node(NodeKind::Throw { thrown }, parent, location)
    }

    /// Add a plain structural node (block, condition, lambda body).
    pub fn block(&mut self, parent: Option<NodeId>, location: SourceLocation) -> NodeId {
        self.node(NodeKind::Other, parent, location)
    }

    /// Validate handler structure and freeze the model.
    ///
    /// Checks that every catch clause names at least one type and hangs
    /// off a try block, and that every try block has a protected body as
    /// its first child.
    pub fn finish(self) -> Result<ProgramModel, ModelError> {
        let mut calls = Vec::new();
        let mut throws = Vec::new();

        for (index, node) in self.nodes.iter().enumerate() {
            let id = NodeId::new(index as u32);
            match &node.kind {
                NodeKind::Call { .. } => calls.push(id),
                NodeKind::Throw { .. } => throws.push(id),
                NodeKind::Catch { caught } => {
                    if caught.is_empty() {
                        return Err(ModelError::CatchWithoutTypes { node: id });
                    }
                    let attached = node
                        .parent
                        .map(|parent| matches!(self.nodes[parent.index()].kind, NodeKind::Try))
                        .unwrap_or(false);
                    if !attached {
                        return Err(ModelError::DetachedCatch { node: id });
                    }
                }
                NodeKind::Try => {
                    let has_body = node
                        .children
                        .first()
                        .map(|&child| {
                            !matches!(self.nodes[child.index()].kind, NodeKind::Catch { .. })
                        })
                        .unwrap_or(false);
                    if !has_body {
                        return Err(ModelError::TryWithoutBody { node: id });
                    }
                }
                _ => {}
            }
        }

        Ok(ProgramModel {
            nodes: self.nodes,
            types: self.types,
            type_names: self.type_names,
            callables: self.callables,
            calls,
            throws,
        })
    }
}
