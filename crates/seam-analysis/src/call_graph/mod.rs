//! Inter-procedural call graph.
//! One node per (callable, context) pair, one edge per call site,
//! built once per analysis run.

pub mod builder;
pub mod types;

pub use builder::build_call_graph;
pub use types::{CallEdge, CallGraph, CallGraphStats, CallNode, NodeKey};
