//! Program model validation errors.

use crate::types::NodeId;

use super::error_code::{self, SeamErrorCode};

/// Structural defects in a program model, caught when the builder
/// finishes. A model that fails validation is never handed to analysis.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Catch clause at node {node:?} lists no caught types")]
    CatchWithoutTypes { node: NodeId },

    #[error("Try block at node {node:?} has no protected body child")]
    TryWithoutBody { node: NodeId },

    #[error("Catch clause at node {node:?} is not a child of a try block")]
    DetachedCatch { node: NodeId },

    #[error("Callable {name} registered twice")]
    DuplicateCallable { name: String },
}

impl SeamErrorCode for ModelError {
    fn error_code(&self) -> &'static str {
        error_code::MODEL_ERROR
    }
}
