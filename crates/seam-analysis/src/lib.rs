//! seam-analysis: Static analysis engine for interop boundaries
//!
//! This crate provides the analysis passes of Seam:
//! - Model: Materialized program snapshot (node arena, type table, callables)
//! - Hierarchy: Recursive supertype matching with cycle detection
//! - Exception Flow: Per-call-site handler search and throw checks
//! - Call Graph: Inter-procedural graph with context-sensitive constructors
//! - Reachability: Backward search from flagged construction sites
//! - Rules: The built-in rule registry
//! - Analyzer: Parallel rule execution with deterministic reports

pub mod analyzer;
pub mod call_graph;
pub mod exception_flow;
pub mod hierarchy;
pub mod model;
pub mod reachability;
pub mod rules;

// Re-exports for convenience
pub use analyzer::Analyzer;
pub use call_graph::{build_call_graph, CallEdge, CallGraph, CallGraphStats, CallNode, NodeKey};
pub use exception_flow::{find_enclosing_handler, ExceptionFlowAnalyzer, HandlerScope};
pub use hierarchy::{is_ancestor, is_unchecked};
pub use model::{
    CallableEntry, CallableKind, ModelBuilder, NodeKind, ProgramModel, SyntaxNode, TypeEntry,
};
pub use reachability::find_multi_site_violations;
pub use rules::{
    built_in_rules, rule_ids, CheckedCallRule, CheckedThrowRule, ParameterBudgetRule,
    ResourceSingletonRule, Rule, RuleContext, RuleMetadata,
};
