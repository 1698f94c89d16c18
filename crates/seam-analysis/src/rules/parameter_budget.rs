//! Callable declarations must stay within the configured parameter budget.

use seam_core::diagnostics::{Diagnostic, Severity};
use seam_core::errors::AnalysisError;

use super::{rule_ids, Rule, RuleContext, RuleMetadata};

pub struct ParameterBudgetRule;

impl Rule for ParameterBudgetRule {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            id: rule_ids::PARAMETER_BUDGET,
            name: "Parameter budget exceeded",
            description: "Callables declared with more parameters than the configured budget \
                          are hard to call correctly and should take a parameter object",
            severity: Severity::Warning,
        }
    }

    fn run(&self, ctx: &RuleContext<'_>) -> Result<Vec<Diagnostic>, AnalysisError> {
        let max = ctx.config.effective_max_parameters();
        let mut diagnostics = Vec::new();
        for (_, entry) in ctx.model.callables() {
            // External callables have no declaration to anchor a report to.
            let Some(decl) = entry.decl_node else {
                continue;
            };
            if entry.parameter_count > max {
                diagnostics.push(Diagnostic::new(
                    rule_ids::PARAMETER_BUDGET,
                    Severity::Warning,
                    ctx.model.location_of(decl).clone(),
                    format!(
                        "{} declares {} parameters, more than the budget of {}",
                        entry.qualified_name, entry.parameter_count, max
                    ),
                ));
            }
        }
        Ok(diagnostics)
    }
}
