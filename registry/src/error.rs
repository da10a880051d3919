//! Error types for registry operations.
//!
//! Provides a unified error type covering I/O, serialization, and catalog
//! validation failures.

use std::path::PathBuf;

use param_syntax_core::ValidationError;
use thiserror::Error;

/// Errors that can occur while loading a registry or its configuration.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing or serialization failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// A loaded catalog or metadata file failed structural validation.
    #[error("invalid catalog {path}: {error}")]
    InvalidCatalog {
        path: PathBuf,
        error: ValidationError,
    },

    /// The file extension is not one of `json`, `yaml`, `yml`.
    #[error("unsupported registry file: {0}")]
    UnsupportedFormat(PathBuf),

    /// No registry sources were configured.
    #[error("no registry sources available")]
    NoSourcesAvailable,
}

/// Convenience alias for results with [`RegistryError`].
pub type Result<T> = std::result::Result<T, RegistryError>;
