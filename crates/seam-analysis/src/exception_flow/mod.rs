//! Exception flow analysis.
//! Outward handler search plus recursive supertype matching, per call
//! site, with mirror checks for outgoing throws and declared throws.

pub mod analyzer;
pub mod scope;

pub use analyzer::ExceptionFlowAnalyzer;
pub use scope::{find_enclosing_handler, HandlerScope};
