//! Per-call-site exception flow analysis and its mirror checks.

use seam_core::diagnostics::{Diagnostic, Severity};
use seam_core::errors::ResolutionError;
use seam_core::types::collections::SmallVec4;
use seam_core::types::{CallableId, NodeId, TypeId};
use tracing::debug;

use crate::hierarchy::{is_ancestor, is_unchecked};
use crate::model::{NodeKind, ProgramModel};
use crate::rules::rule_ids;

use super::scope::find_enclosing_handler;

/// Decides, per call site, whether every type the call may throw is
/// caught by an enclosing handler, and mirrors the same hierarchy test
/// onto outgoing throws and declared throws.
pub struct ExceptionFlowAnalyzer<'m> {
    model: &'m ProgramModel,
}

impl<'m> ExceptionFlowAnalyzer<'m> {
    pub fn new(model: &'m ProgramModel) -> Self {
        Self { model }
    }

    /// Analyze one call site. `None` when the call's throw set is empty
    /// or some enclosing try covers the full set.
    ///
    /// The walk is progressive: a try whose catch clauses do not cover
    /// every thrown type does not protect the call, and the search
    /// resumes outside it. Coverage never combines across try blocks;
    /// one try must cover the full set by itself.
    pub fn check_call(&self, call: NodeId) -> Result<Option<Diagnostic>, ResolutionError> {
        let throw_types = self.model.declared_throw_types(call);
        if throw_types.is_empty() {
            return Ok(None);
        }

        let mut anchor = call;
        while let Some(scope) = find_enclosing_handler(self.model, anchor) {
            if self.covers_all(scope.try_block, &throw_types)? {
                debug!(
                    call = call.0,
                    try_block = scope.try_block.0,
                    "throw set fully handled"
                );
                return Ok(None);
            }
            anchor = scope.try_block;
        }

        debug!(call = call.0, "throw set escapes every enclosing handler");
        Ok(Some(self.unhandled_diagnostic(call, &throw_types)))
    }

    /// Analyze one throw expression against the unchecked root. `None`
    /// for nodes that are not throws or that raise unchecked types.
    pub fn check_throw_site(
        &self,
        throw: NodeId,
        unchecked_root: TypeId,
    ) -> Result<Option<Diagnostic>, ResolutionError> {
        let NodeKind::Throw { thrown } = *self.model.kind_of(throw) else {
            return Ok(None);
        };
        if is_unchecked(self.model, thrown, unchecked_root)? {
            return Ok(None);
        }
        Ok(Some(Diagnostic::new(
            rule_ids::CHECKED_THROW_PROPAGATION,
            Severity::Error,
            self.model.location_of(throw).clone(),
            format!(
                "throw of checked exception {}; raise an unchecked type or handle it locally",
                self.model.type_name(thrown)
            ),
        )))
    }

    /// Analyze one callable's declared throws. External callables are
    /// never reported; their declarations are not ours to fix. At most
    /// one diagnostic per declaration, at the first offending type.
    pub fn check_declaration(
        &self,
        callable: CallableId,
        unchecked_root: TypeId,
    ) -> Result<Option<Diagnostic>, ResolutionError> {
        let entry = self.model.callable(callable);
        let Some(decl) = entry.decl_node else {
            return Ok(None);
        };
        for &ty in &entry.declared_throws {
            if !is_unchecked(self.model, ty, unchecked_root)? {
                return Ok(Some(Diagnostic::new(
                    rule_ids::CHECKED_THROW_PROPAGATION,
                    Severity::Error,
                    self.model.location_of(decl).clone(),
                    format!(
                        "{} declares checked exception {}; callers cannot be forced to handle it",
                        entry.qualified_name,
                        self.model.type_name(ty)
                    ),
                )));
            }
        }
        Ok(None)
    }

    /// Every thrown type must match at least one catch clause of this
    /// try block; the clauses count collectively.
    fn covers_all(
        &self,
        try_block: NodeId,
        throw_types: &[TypeId],
    ) -> Result<bool, ResolutionError> {
        let mut caught: SmallVec4<TypeId> = SmallVec4::new();
        for &child in self.model.children_of(try_block) {
            if let NodeKind::Catch { caught: types } = self.model.kind_of(child) {
                caught.extend(types.iter().copied());
            }
        }

        for &thrown in throw_types {
            let mut matched = false;
            for &catch_type in &caught {
                if is_ancestor(self.model, catch_type, thrown)? {
                    matched = true;
                    break;
                }
            }
            if !matched {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn unhandled_diagnostic(&self, call: NodeId, throw_types: &[TypeId]) -> Diagnostic {
        let names = throw_types
            .iter()
            .map(|&ty| self.model.type_name(ty))
            .collect::<Vec<_>>()
            .join(", ");
        Diagnostic::new(
            rule_ids::CHECKED_CALL_UNHANDLED,
            Severity::Error,
            self.model.location_of(call).clone(),
            format!("call may throw {names}; no enclosing try/catch handles every thrown type"),
        )
    }
}
