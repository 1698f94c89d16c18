//! Diagnostic vocabulary shared by every rule.
//! Severities, diagnostic records, ordered reports, and the sink trait.

pub mod diagnostic;
pub mod report;
pub mod sink;

pub use diagnostic::{Diagnostic, Severity};
pub use report::{AnalysisReport, AnalysisStats};
pub use sink::DiagnosticSink;
