//! Resolution errors.

use super::error_code::{self, SeamErrorCode};

/// Errors raised when the program model cannot answer a query the analysis
/// depends on. All of them are fatal to the current run: a verdict reached
/// over an incompletely resolved model would be unsound, so partial
/// diagnostics are discarded rather than reported.
#[derive(Debug, thiserror::Error)]
pub enum ResolutionError {
    /// A type occurs in a throw set, catch clause, or supertype list but
    /// was never declared, so its supertypes are unknown.
    #[error("Supertypes unavailable for {type_name}: referenced but never declared")]
    UnknownSupertypes { type_name: String },

    /// A type name the analysis must resolve (e.g. the configured
    /// unchecked-exception root) does not occur in the program model.
    #[error("Type {name} not found in the program model")]
    UnknownType { name: String },

    /// The declared supertype relation reaches this type again while
    /// walking upward from it.
    #[error("Cycle detected in supertype hierarchy at {type_name}")]
    SupertypeCycle { type_name: String },
}

impl SeamErrorCode for ResolutionError {
    fn error_code(&self) -> &'static str {
        error_code::RESOLUTION_ERROR
    }
}
