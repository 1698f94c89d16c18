//! Sink abstraction for handing diagnostics to a host tool.

use super::Diagnostic;

/// Receives diagnostics in report order. Implemented by host-side
/// collectors; `Vec<Diagnostic>` works out of the box.
pub trait DiagnosticSink {
    fn accept(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn accept(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
