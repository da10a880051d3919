//! Matching configuration injected into the annotator.
//!
//! # Example YAML
//!
//! ```yaml
//! case_sensitive: false
//! common_parameters:
//!   - Verbose
//!   - Debug
//!   - WhatIf
//!   - Confirm
//! ```

use serde::{Deserialize, Serialize};

use crate::name_key;

/// Infrastructure parameters present on virtually every command.
///
/// These are removed from every parameter set before annotation and are
/// never reported as not found.
pub const DEFAULT_COMMON_PARAMETERS: &[&str] = &[
    "Verbose",
    "Debug",
    "ErrorAction",
    "WarningAction",
    "InformationAction",
    "ProgressAction",
    "ErrorVariable",
    "WarningVariable",
    "InformationVariable",
    "OutVariable",
    "OutBuffer",
    "PipelineVariable",
    "WhatIf",
    "Confirm",
];

/// Controls how input tokens are compared with declared parameter names.
///
/// # Examples
///
/// ```
/// use param_syntax_core::AnalysisConfig;
///
/// let config = AnalysisConfig::default();
/// assert!(config.names_match("path", "Path"));
/// assert!(config.is_common("whatif"));
///
/// let strict = AnalysisConfig { case_sensitive: true, ..AnalysisConfig::default() };
/// assert!(!strict.names_match("path", "Path"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Compare parameter names case-sensitively.
    pub case_sensitive: bool,
    /// Parameter names excluded from every set.
    pub common_parameters: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            common_parameters: DEFAULT_COMMON_PARAMETERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl AnalysisConfig {
    /// Returns `true` if two parameter names are equal under this config.
    pub fn names_match(&self, a: &str, b: &str) -> bool {
        if self.case_sensitive {
            a == b
        } else {
            name_key(a) == name_key(b)
        }
    }

    /// Returns `true` if `name` is in the common parameter exclusion list.
    pub fn is_common(&self, name: &str) -> bool {
        self.common_parameters
            .iter()
            .any(|common| self.names_match(common, name))
    }

    /// Returns `true` if any of `names` matches `name`.
    pub fn contains_name<'a>(&self, mut names: impl Iterator<Item = &'a str>, name: &str) -> bool {
        names.any(|candidate| self.names_match(candidate, name))
    }
}
