//! Typed errors for the Seam analysis engine.
//!
//! One enum per failure domain plus the [`AnalysisError`] umbrella that
//! analysis entry points return. Every enum implements
//! [`SeamErrorCode`](error_code::SeamErrorCode) so hosts get a stable
//! code string alongside the message.

pub mod analysis_error;
pub mod error_code;
pub mod model_error;
pub mod resolution_error;

pub use analysis_error::AnalysisError;
pub use model_error::ModelError;
pub use resolution_error::ResolutionError;
