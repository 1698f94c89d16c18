//! Source locations attached to AST nodes and diagnostics.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A half-open byte-offset range within one source file.
///
/// `start` is the offset of the first covered byte, `end` is one past the
/// last. Offsets are whatever the host front-end measured; the analysis
/// never interprets them beyond carrying them into diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Path of the source file, as supplied by the host front-end.
    pub file: String,
    pub start: u32,
    pub end: u32,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, start: u32, end: u32) -> Self {
        Self {
            file: file.into(),
            start,
            end,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}..{}", self.file, self.start, self.end)
    }
}
