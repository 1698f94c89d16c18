//! Rule packaging: metadata, shared context, and the built-in registry.

pub mod checked_calls;
pub mod checked_throws;
pub mod parameter_budget;
pub mod resource_singleton;

pub use checked_calls::CheckedCallRule;
pub use checked_throws::CheckedThrowRule;
pub use parameter_budget::ParameterBudgetRule;
pub use resource_singleton::ResourceSingletonRule;

use seam_core::config::AnalysisConfig;
use seam_core::diagnostics::{Diagnostic, Severity};
use seam_core::errors::AnalysisError;

use crate::call_graph::types::CallGraph;
use crate::model::ProgramModel;

/// Stable rule identifiers, kebab-case.
pub mod rule_ids {
    pub const CHECKED_CALL_UNHANDLED: &str = "checked-call-unhandled";
    pub const CHECKED_THROW_PROPAGATION: &str = "checked-throw-propagation";
    pub const RESOURCE_MULTI_CONSTRUCTION: &str = "resource-multi-construction";
    pub const PARAMETER_BUDGET: &str = "parameter-budget";
}

/// Static description of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMetadata {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Severity of every diagnostic the rule emits.
    pub severity: Severity,
}

/// Everything a rule may read during a run. Shared and read-only, so the
/// registry can fan rules out across threads.
pub struct RuleContext<'a> {
    pub model: &'a ProgramModel,
    pub config: &'a AnalysisConfig,
    pub call_graph: &'a CallGraph,
}

/// Trait every rule implements.
pub trait Rule: Send + Sync {
    fn metadata(&self) -> RuleMetadata;

    /// Run the rule over the whole model, returning diagnostics in
    /// discovery order. An error is fatal to the run.
    fn run(&self, ctx: &RuleContext<'_>) -> Result<Vec<Diagnostic>, AnalysisError>;
}

/// The built-in rules. Per-rule diagnostic lists are merged in this
/// order, so the report layout is stable across runs and thread
/// schedules.
pub fn built_in_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(CheckedCallRule),
        Box::new(CheckedThrowRule),
        Box::new(ResourceSingletonRule),
        Box::new(ParameterBudgetRule),
    ]
}
