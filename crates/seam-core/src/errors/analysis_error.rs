//! Top-level analysis error.

use super::error_code::SeamErrorCode;
use super::{ModelError, ResolutionError};

/// Umbrella error returned by analysis entry points. Domain errors
/// convert via `From`, so engine code can use `?` across domains.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Resolution failed: {0}")]
    Resolution(#[from] ResolutionError),

    #[error("Invalid program model: {0}")]
    Model(#[from] ModelError),
}

impl SeamErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Resolution(e) => e.error_code(),
            Self::Model(e) => e.error_code(),
        }
    }
}
