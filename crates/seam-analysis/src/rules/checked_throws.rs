//! Code in the model must not raise or declare checked exceptions.

use seam_core::diagnostics::{Diagnostic, Severity};
use seam_core::errors::{AnalysisError, ResolutionError};

use crate::exception_flow::ExceptionFlowAnalyzer;

use super::{rule_ids, Rule, RuleContext, RuleMetadata};

pub struct CheckedThrowRule;

impl Rule for CheckedThrowRule {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            id: rule_ids::CHECKED_THROW_PROPAGATION,
            name: "Checked exception propagation",
            description: "Throw expressions and declared throws lists must stay inside the \
                          unchecked-exception hierarchy",
            severity: Severity::Error,
        }
    }

    fn run(&self, ctx: &RuleContext<'_>) -> Result<Vec<Diagnostic>, AnalysisError> {
        let has_declarations = ctx
            .model
            .callables()
            .any(|(_, entry)| entry.decl_node.is_some() && !entry.declared_throws.is_empty());
        if ctx.model.throw_sites().next().is_none() && !has_declarations {
            return Ok(Vec::new());
        }

        // The root is resolved lazily: a model with nothing to check
        // never needs it.
        let root_name = ctx.config.effective_unchecked_root();
        let root = ctx
            .model
            .type_id(root_name)
            .ok_or_else(|| ResolutionError::UnknownType {
                name: root_name.to_string(),
            })?;

        let analyzer = ExceptionFlowAnalyzer::new(ctx.model);
        let mut diagnostics = Vec::new();
        for throw in ctx.model.throw_sites() {
            if let Some(diagnostic) = analyzer.check_throw_site(throw, root)? {
                diagnostics.push(diagnostic);
            }
        }
        for (callable, entry) in ctx.model.callables() {
            if entry.decl_node.is_none() || entry.declared_throws.is_empty() {
                continue;
            }
            if let Some(diagnostic) = analyzer.check_declaration(callable, root)? {
                diagnostics.push(diagnostic);
            }
        }
        Ok(diagnostics)
    }
}
