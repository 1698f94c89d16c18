//! Flagged resource types must be constructed at exactly one site.

use seam_core::diagnostics::{Diagnostic, Severity};
use seam_core::errors::AnalysisError;

use crate::reachability::find_multi_site_violations;

use super::{rule_ids, Rule, RuleContext, RuleMetadata};

pub struct ResourceSingletonRule;

impl Rule for ResourceSingletonRule {
    fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            id: rule_ids::RESOURCE_MULTI_CONSTRUCTION,
            name: "Multiple resource construction sites",
            description: "A configured singleton type must be constructed once; multiple \
                          construction sites or divergent call paths toward one are reported",
            severity: Severity::Warning,
        }
    }

    fn run(&self, ctx: &RuleContext<'_>) -> Result<Vec<Diagnostic>, AnalysisError> {
        let mut diagnostics = Vec::new();
        for type_name in &ctx.config.singleton_types {
            // A type the model never mentions is never constructed.
            let Some(ty) = ctx.model.type_id(type_name) else {
                continue;
            };
            diagnostics.extend(find_multi_site_violations(
                ctx.call_graph,
                |node| {
                    node.context.is_some()
                        && ctx.model.callable(node.callable).constructed_type == Some(ty)
                },
                type_name,
            ));
        }
        Ok(diagnostics)
    }
}
