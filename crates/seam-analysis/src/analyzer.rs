//! Analyzer: runs the rule registry over a program model.

use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use seam_core::config::AnalysisConfig;
use seam_core::diagnostics::{AnalysisReport, AnalysisStats, Diagnostic};
use seam_core::errors::AnalysisError;

use crate::call_graph::build_call_graph;
use crate::model::ProgramModel;
use crate::rules::{built_in_rules, Rule, RuleContext};

/// The analysis entry point.
///
/// Owns a configuration and a rule list, builds the call graph once per
/// run, and executes the rules in parallel. Diagnostics come back in
/// registry order regardless of scheduling, so two runs over the same
/// model produce byte-identical reports.
pub struct Analyzer {
    config: AnalysisConfig,
    rules: Vec<Box<dyn Rule>>,
}

impl Analyzer {
    /// Create an analyzer with every built-in rule registered.
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            rules: built_in_rules(),
        }
    }

    /// Create an analyzer running only the given rules.
    pub fn with_rules(config: AnalysisConfig, rules: Vec<Box<dyn Rule>>) -> Self {
        Self { config, rules }
    }

    /// Run every registered rule over `model`.
    ///
    /// A [`ResolutionError`](seam_core::errors::ResolutionError) from any
    /// rule is fatal: the run returns the error and findings from other
    /// rules are discarded rather than reported as complete.
    pub fn analyze(&self, model: &ProgramModel) -> Result<AnalysisReport, AnalysisError> {
        let started = Instant::now();
        info!(
            nodes = model.node_count(),
            types = model.type_count(),
            callables = model.callable_count(),
            call_sites = model.call_site_count(),
            rules = self.rules.len(),
            "starting analysis run"
        );

        // Step 1: build the call graph once; every rule shares it.
        let (call_graph, graph_stats) = build_call_graph(model, &self.config);

        // Step 2: run the rules in parallel.
        let ctx = RuleContext {
            model,
            config: &self.config,
            call_graph: &call_graph,
        };
        let per_rule = self
            .rules
            .par_iter()
            .map(|rule| {
                let found = rule.run(&ctx)?;
                debug!(
                    rule = rule.metadata().id,
                    findings = found.len(),
                    "rule finished"
                );
                Ok(found)
            })
            .collect::<Result<Vec<Vec<Diagnostic>>, AnalysisError>>()?;

        // Step 3: merge in registry order and close out the report.
        let diagnostics: Vec<Diagnostic> = per_rule.into_iter().flatten().collect();
        let duration_ms = started.elapsed().as_millis() as u64;
        let stats = AnalysisStats {
            call_sites_checked: model.call_site_count(),
            callables_checked: model.callable_count(),
            graph_nodes: graph_stats.nodes,
            graph_edges: graph_stats.edges,
            unresolved_calls: graph_stats.unresolved_calls,
            duration_ms,
        };
        info!(
            diagnostics = diagnostics.len(),
            errors = diagnostics.iter().filter(|d| d.is_error()).count(),
            duration_ms,
            "analysis run finished"
        );
        Ok(AnalysisReport::new(diagnostics, stats))
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}
