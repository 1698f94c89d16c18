//! Configuration for the Seam analysis engine.

pub mod analysis_config;

pub use analysis_config::AnalysisConfig;
