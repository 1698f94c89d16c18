//! Reachability diagnostics over the call graph.
//! Backward search from flagged construction sites.

pub mod engine;

pub use engine::find_multi_site_violations;
