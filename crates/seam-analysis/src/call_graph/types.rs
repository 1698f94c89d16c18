//! Call graph types: nodes, edges, dedup index, stats.

use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::stable_graph::StableGraph;
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction};
use serde::{Deserialize, Serialize};

use seam_core::types::collections::FxHashMap;
use seam_core::types::{CallableId, NodeId, SourceLocation};

/// Key identifying a node: the callable plus an optional call-site
/// context.
pub type NodeKey = (CallableId, Option<NodeId>);

/// A callable unit in the call graph, optionally specialized to one
/// call-site context. Contextual nodes keep distinct invocation sites of
/// the same callable distinct; the builder uses them for constructors of
/// flagged resource types, so every construction site is its own node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallNode {
    pub callable: CallableId,
    pub context: Option<NodeId>,
    /// Where to point a diagnostic about this node: the context call
    /// site for contextual nodes, the declaration otherwise.
    pub location: SourceLocation,
}

impl CallNode {
    pub fn key(&self) -> NodeKey {
        (self.callable, self.context)
    }
}

/// A call edge: the caller invokes the callee at `call_site`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallEdge {
    pub call_site: NodeId,
    pub location: SourceLocation,
}

/// Counters from one build pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallGraphStats {
    pub nodes: usize,
    pub edges: usize,
    /// Call expressions skipped because their target set was empty.
    pub unresolved_calls: usize,
    /// Call expressions skipped because no callable declaration encloses
    /// them.
    pub orphan_calls: usize,
}

/// The call graph: a directed graph of callable units. Nodes are
/// deduplicated by key; parallel edges between the same pair are kept,
/// one per call site.
pub struct CallGraph {
    /// The underlying petgraph StableGraph.
    pub graph: StableGraph<CallNode, CallEdge, Directed>,
    /// Map from (callable, context) to NodeIndex for O(1) dedup.
    pub node_index: FxHashMap<NodeKey, NodeIndex>,
}

impl CallGraph {
    /// Create an empty call graph.
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            node_index: FxHashMap::default(),
        }
    }

    /// Number of callable-unit nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of call edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Look up a node by its key.
    pub fn get_node(&self, key: &NodeKey) -> Option<NodeIndex> {
        self.node_index.get(key).copied()
    }

    /// Add a node, returning the existing index when the key is already
    /// present.
    pub fn add_node(&mut self, node: CallNode) -> NodeIndex {
        let key = node.key();
        if let Some(&existing) = self.node_index.get(&key) {
            return existing;
        }
        let idx = self.graph.add_node(node);
        self.node_index.insert(key, idx);
        idx
    }

    /// Add a call edge between two nodes.
    pub fn add_edge(&mut self, caller: NodeIndex, callee: NodeIndex, edge: CallEdge) -> EdgeIndex {
        self.graph.add_edge(caller, callee, edge)
    }

    /// Inbound edges of `node` with their sources, in edge insertion
    /// order. Petgraph iterates incoming edges most-recent-first, so the
    /// list is sorted back into insertion order for deterministic
    /// reporting.
    pub fn callers_of(&self, node: NodeIndex) -> Vec<(EdgeIndex, NodeIndex)> {
        let mut callers: Vec<(EdgeIndex, NodeIndex)> = self
            .graph
            .edges_directed(node, Direction::Incoming)
            .map(|edge| (edge.id(), edge.source()))
            .collect();
        callers.sort_by_key(|&(edge, _)| edge);
        callers
    }
}

impl Default for CallGraph {
    fn default() -> Self {
        Self::new()
    }
}
