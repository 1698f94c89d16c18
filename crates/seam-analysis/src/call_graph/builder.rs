//! Call graph construction from the program model.

use seam_core::config::AnalysisConfig;
use seam_core::types::collections::FxHashSet;
use seam_core::types::{CallableId, SourceLocation, TypeId};
use tracing::{debug, info};

use crate::model::{CallableKind, ProgramModel};

use super::types::{CallEdge, CallGraph, CallGraphStats, CallNode};

/// Build the call graph for one model, single-writer.
///
/// Every resolvable call contributes one edge per statically-possible
/// target; ambiguous calls over-approximate rather than drop. Callee
/// nodes for constructors of a configured singleton type carry the call
/// site as context, so each construction site stays a distinct node.
/// Calls with no target or no enclosing callable are skipped and
/// counted.
pub fn build_call_graph(model: &ProgramModel, config: &AnalysisConfig) -> (CallGraph, CallGraphStats) {
    let singleton_ids: FxHashSet<TypeId> = config
        .singleton_types
        .iter()
        .filter_map(|name| model.type_id(name))
        .collect();

    let mut graph = CallGraph::new();
    let mut stats = CallGraphStats::default();

    for call in model.call_sites() {
        let targets = model.resolve_call_target(call);
        if targets.is_empty() {
            stats.unresolved_calls += 1;
            debug!(call = call.0, "call with no resolved target, skipped");
            continue;
        }
        let Some(caller) = model.enclosing_callable(call) else {
            stats.orphan_calls += 1;
            debug!(call = call.0, "call outside any callable, skipped");
            continue;
        };

        let caller_idx = graph.add_node(CallNode {
            callable: caller,
            context: None,
            location: declared_location(model, caller, call),
        });

        for &target in targets {
            let entry = model.callable(target);
            let is_singleton_constructor = entry.kind == CallableKind::Constructor
                && entry
                    .constructed_type
                    .is_some_and(|ty| singleton_ids.contains(&ty));

            let callee = if is_singleton_constructor {
                CallNode {
                    callable: target,
                    context: Some(call),
                    location: model.location_of(call).clone(),
                }
            } else {
                CallNode {
                    callable: target,
                    context: None,
                    location: declared_location(model, target, call),
                }
            };
            let callee_idx = graph.add_node(callee);
            graph.add_edge(
                caller_idx,
                callee_idx,
                CallEdge {
                    call_site: call,
                    location: model.location_of(call).clone(),
                },
            );
        }
    }

    stats.nodes = graph.node_count();
    stats.edges = graph.edge_count();
    info!(
        nodes = stats.nodes,
        edges = stats.edges,
        unresolved = stats.unresolved_calls,
        orphans = stats.orphan_calls,
        "call graph built"
    );
    (graph, stats)
}

/// A callable's declaration location, falling back to the referencing
/// call site for external callables with no declaration in the model.
fn declared_location(
    model: &ProgramModel,
    callable: CallableId,
    referencing_call: seam_core::types::NodeId,
) -> SourceLocation {
    model
        .callable(callable)
        .decl_node
        .map(|decl| model.location_of(decl).clone())
        .unwrap_or_else(|| model.location_of(referencing_call).clone())
}
