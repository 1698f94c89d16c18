//! Analysis run configuration.

use serde::{Deserialize, Serialize};

/// Configuration for one analysis run.
///
/// All fields are optional in serialized form; the `effective_*`
/// accessors apply the defaults the built-in rules expect.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Fully-qualified names of resource types expected to be constructed
    /// exactly once per program (e.g. "okhttp3.OkHttpClient").
    /// Empty disables the multi-construction rule.
    #[serde(default)]
    pub singleton_types: Vec<String>,
    /// Root type of the unchecked-exception hierarchy.
    /// Default: "java.lang.RuntimeException".
    pub unchecked_root: Option<String>,
    /// Maximum number of parameters a callable may declare. Default: 5.
    pub max_parameters: Option<u32>,
}

impl AnalysisConfig {
    /// Returns the effective unchecked-exception root type name.
    pub fn effective_unchecked_root(&self) -> &str {
        self.unchecked_root
            .as_deref()
            .unwrap_or("java.lang.RuntimeException")
    }

    /// Returns the effective parameter budget, defaulting to 5.
    pub fn effective_max_parameters(&self) -> u32 {
        self.max_parameters.unwrap_or(5)
    }
}
