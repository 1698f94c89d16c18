//! SeamErrorCode trait for host-boundary error classification.

/// Trait for converting Seam errors to stable code strings.
/// Every error enum implements this so hosts and structured logs can
/// classify failures without parsing messages.
pub trait SeamErrorCode {
    /// Returns the stable error code string (e.g., "RESOLUTION_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted log string: `[ERROR_CODE] message`.
    fn log_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the host boundary.
pub const RESOLUTION_ERROR: &str = "RESOLUTION_ERROR";
pub const MODEL_ERROR: &str = "MODEL_ERROR";
