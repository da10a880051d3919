//! Tool configuration file.
//!
//! Combines the analysis settings with the list of registry sources to
//! load.
//!
//! # Example YAML
//!
//! ```yaml
//! version: "1.0"
//! analysis:
//!   case_sensitive: false
//!   common_parameters:
//!     - Verbose
//!     - Debug
//!     - WhatIf
//!     - Confirm
//! registry:
//!   include_builtin: true
//!   paths:
//!     - commands/
//!     - team-catalog.yaml
//! ```

use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use param_syntax_core::AnalysisConfig;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::loader::RegistryBuilder;

/// Which registry sources to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Load the built-in catalog before any path.
    pub include_builtin: bool,
    /// Directories or catalog files, loaded in order.
    pub paths: Vec<PathBuf>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            include_builtin: true,
            paths: Vec::new(),
        }
    }
}

/// Top-level configuration.
///
/// Every section is optional; missing sections take their defaults.
///
/// # Examples
///
/// ```
/// # let yaml = r#"
/// # version: "1.0"
/// # analysis: { case_sensitive: true }
/// # registry: { include_builtin: false, paths: [commands/] }
/// # "#;
/// # let config: param_syntax_registry::SyntaxConfig = serde_yaml::from_str(yaml).unwrap();
/// assert!(config.analysis.case_sensitive);
/// assert!(!config.registry.include_builtin);
/// assert_eq!(config.registry.paths.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntaxConfig {
    /// Configuration format version (e.g., `"1.0"`).
    pub version: String,
    /// Name matching settings.
    pub analysis: AnalysisConfig,
    /// Registry sources.
    pub registry: RegistryConfig,
}

impl Default for SyntaxConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            analysis: AnalysisConfig::default(),
            registry: RegistryConfig::default(),
        }
    }
}

impl SyntaxConfig {
    /// Loads configuration from a YAML file.
    ///
    /// Relative registry paths are resolved against the file's directory.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::RegistryError::IoError) if the file cannot
    /// be read, or [`YamlError`](crate::RegistryError::YamlError) if parsing
    /// fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let mut config: SyntaxConfig = serde_yaml::from_reader(reader)?;

        if let Some(base) = path.parent() {
            for entry in &mut config.registry.paths {
                if entry.is_relative() {
                    *entry = base.join(&*entry);
                }
            }
        }
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::RegistryError::IoError) if the file cannot
    /// be written, or [`YamlError`](crate::RegistryError::YamlError) if
    /// serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Returns a builder preloaded with this configuration's sources.
    pub fn registry_builder(&self) -> RegistryBuilder {
        let builder = if self.registry.include_builtin {
            RegistryBuilder::new().with_builtin()
        } else {
            RegistryBuilder::new()
        };
        self.registry
            .paths
            .iter()
            .fold(builder, |builder, path| builder.with_path(path))
    }
}
