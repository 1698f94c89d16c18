//! Outward walk for enclosing try/catch handlers.

use seam_core::types::NodeId;

use crate::model::{NodeKind, ProgramModel};

/// A try block found on the outward walk. Its catch clauses are the
/// `Catch` children of `try_block`; whether they actually cover a throw
/// set is the analyzer's decision, not the walker's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerScope {
    pub try_block: NodeId,
}

/// Find the nearest try block that protects `anchor`, walking parent
/// links outward. Returns `None` at the tree root.
///
/// A try block protects a node only when the walk arrives through its
/// body, the first child. Arriving through a catch clause or a finally
/// block means the node runs after the protected region, so the walk
/// continues outward past that try. Passing a try block itself as the
/// anchor resumes the search outside it.
pub fn find_enclosing_handler(model: &ProgramModel, anchor: NodeId) -> Option<HandlerScope> {
    let mut came_from = anchor;
    let mut current = model.parent_of(anchor)?;
    loop {
        if matches!(model.kind_of(current), NodeKind::Try)
            && model.children_of(current).first() == Some(&came_from)
        {
            return Some(HandlerScope { try_block: current });
        }
        came_from = current;
        current = model.parent_of(current)?;
    }
}
