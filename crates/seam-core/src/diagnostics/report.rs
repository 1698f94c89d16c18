//! Ordered diagnostic reports with run statistics.

use serde::{Deserialize, Serialize};

use super::{Diagnostic, DiagnosticSink};

/// Counters describing one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisStats {
    /// Call expressions whose throw sets were checked.
    pub call_sites_checked: usize,
    /// Callable declarations visited by declaration-level rules.
    pub callables_checked: usize,
    /// Nodes in the call graph after dedup.
    pub graph_nodes: usize,
    /// Edges in the call graph (parallel edges retained).
    pub graph_edges: usize,
    /// Call expressions that contributed no edge because no target
    /// could be resolved.
    pub unresolved_calls: usize,
    /// Wall-clock duration of the run in milliseconds.
    pub duration_ms: u64,
}

/// The outcome of one analysis run: diagnostics in discovery order plus
/// run statistics. Append-only while the run executes, read-only after.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub diagnostics: Vec<Diagnostic>,
    pub stats: AnalysisStats,
}

impl AnalysisReport {
    pub fn new(diagnostics: Vec<Diagnostic>, stats: AnalysisStats) -> Self {
        Self { diagnostics, stats }
    }

    /// Number of error-severity diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    /// True when the run produced no diagnostics.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Hand every diagnostic to the sink in report order, consuming the
    /// report.
    pub fn drain_into(self, sink: &mut dyn DiagnosticSink) {
        for diagnostic in self.diagnostics {
            sink.accept(diagnostic);
        }
    }
}
