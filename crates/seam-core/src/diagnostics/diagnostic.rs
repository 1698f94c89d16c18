//! Diagnostic records emitted by analysis rules.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::SourceLocation;

/// How severe a diagnostic is for the host tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Stable lowercase name, identical to the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single finding: which rule fired, how severe, where, and why.
///
/// Immutable once created. Diagnostics accumulate into an
/// [`AnalysisReport`](super::AnalysisReport) in discovery order, which is
/// deterministic for identical input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Stable kebab-case rule identifier (e.g. "checked-call-unhandled").
    pub rule_id: String,
    pub severity: Severity,
    pub location: SourceLocation,
    pub message: String,
}

impl Diagnostic {
    pub fn new(
        rule_id: impl Into<String>,
        severity: Severity,
        location: SourceLocation,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            severity,
            location,
            message: message.into(),
        }
    }

    /// True when this diagnostic should fail a host run outright.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
