//! seam-core: Shared vocabulary for the Seam analysis engine
//!
//! This crate provides the pieces every analysis pass depends on:
//! - Types: arena-index ID types, performance collections, source locations
//! - Diagnostics: severity, diagnostic records, ordered reports, sinks
//! - Errors: per-domain error enums with stable host-boundary codes
//! - Config: per-run analysis configuration with serde defaults
//! - Tracing: `SEAM_LOG`-driven structured logging setup

pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-exports for convenience
pub use config::AnalysisConfig;
pub use diagnostics::{AnalysisReport, AnalysisStats, Diagnostic, DiagnosticSink, Severity};
pub use errors::{AnalysisError, ModelError, ResolutionError};
pub use types::{CallableId, NodeId, SourceLocation, TypeId};
