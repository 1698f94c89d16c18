//! Calls that may throw checked exceptions must be handled where made.

use seam_core::diagnostics::{Diagnostic, Severity};
use seam_core::errors::AnalysisError;

use crate::exception_flow::ExceptionFlowAnalyzer;

use super::{rule_ids, Rule, RuleContext, RuleMetadata};

pub struct CheckedCallRule;

impl Rule for CheckedCallRule {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            id: rule_ids::CHECKED_CALL_UNHANDLED,
            name: "Unhandled checked exception",
            description: "A call whose throw set is not fully covered by the catch clauses \
                          of one enclosing try block lets checked exceptions escape",
            severity: Severity::Error,
        }
    }

    fn run(&self, ctx: &RuleContext<'_>) -> Result<Vec<Diagnostic>, AnalysisError> {
        let analyzer = ExceptionFlowAnalyzer::new(ctx.model);
        let mut diagnostics = Vec::new();
        for call in ctx.model.call_sites() {
            if let Some(diagnostic) = analyzer.check_call(call)? {
                diagnostics.push(diagnostic);
            }
        }
        Ok(diagnostics)
    }
}
