//! Backward multi-site search over the call graph.

use petgraph::graph::NodeIndex;
use seam_core::diagnostics::{Diagnostic, Severity};
use seam_core::types::collections::FxHashSet;
use tracing::debug;

use crate::call_graph::types::{CallGraph, CallNode};
use crate::rules::rule_ids;

/// Find and report multi-site construction violations.
///
/// Seeds are the nodes `is_interesting` accepts. No seeds is clean.
/// Several seeds report at every seed's location without walking.
/// Exactly one seed starts a backward walk over inbound edges: a node
/// with one caller is a transparent relay and the walk continues through
/// it; a node with several callers is a divergence point and reports at
/// each caller's call site, then stops; a node with none is a program
/// entry point and stops cleanly. Cycles terminate via a visited set.
pub fn find_multi_site_violations<F>(
    graph: &CallGraph,
    is_interesting: F,
    subject: &str,
) -> Vec<Diagnostic>
where
    F: Fn(&CallNode) -> bool,
{
    let seeds: Vec<NodeIndex> = graph
        .graph
        .node_indices()
        .filter(|&idx| is_interesting(&graph.graph[idx]))
        .collect();
    debug!(subject, seeds = seeds.len(), "backward search seeded");

    match seeds.as_slice() {
        [] => Vec::new(),
        [seed] => backward_walk(graph, *seed, subject),
        many => many
            .iter()
            .map(|&seed| seed_diagnostic(graph, seed, subject))
            .collect(),
    }
}

fn seed_diagnostic(graph: &CallGraph, seed: NodeIndex, subject: &str) -> Diagnostic {
    Diagnostic::new(
        rule_ids::RESOURCE_MULTI_CONSTRUCTION,
        Severity::Warning,
        graph.graph[seed].location.clone(),
        format!("{subject} is constructed at more than one site; share a single instance"),
    )
}

/// Walk backward from the single seed. States are driven purely by
/// inbound-edge cardinality; revisiting a node ends the walk.
fn backward_walk(graph: &CallGraph, seed: NodeIndex, subject: &str) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut visited: FxHashSet<NodeIndex> = FxHashSet::default();
    let mut current = seed;

    loop {
        if !visited.insert(current) {
            // recursion in the call graph, already walked
            break;
        }
        let callers = graph.callers_of(current);
        match callers.as_slice() {
            [] => break,
            [(_, only_caller)] => current = *only_caller,
            divergent => {
                for &(edge, _) in divergent {
                    diagnostics.push(Diagnostic::new(
                        rule_ids::RESOURCE_MULTI_CONSTRUCTION,
                        Severity::Warning,
                        graph.graph[edge].location.clone(),
                        format!(
                            "this call path independently reaches construction of {subject}; \
                             share a single instance"
                        ),
                    ));
                }
                break;
            }
        }
    }
    diagnostics
}
