//! Metadata and catalog validation.
//!
//! Validates structural invariants of command metadata and catalogs,
//! catching errors such as duplicate parameters, dash-prefixed parameter
//! names, and alias collisions before a registry serves them.
//!
//! # Examples
//!
//! ```
//! use param_syntax_core::*;
//!
//! let metadata = CommandMetadata::new("Get-Item")
//!     .with_set(ParameterSet::new("Path").with_parameter(ParameterDescriptor::mandatory("Path")));
//! assert!(validate_metadata(&metadata).is_empty());
//!
//! // Invalid: parameter name carries its dash
//! let bad = CommandMetadata::new("Get-Item")
//!     .with_set(ParameterSet::new("Path").with_parameter(ParameterDescriptor::mandatory("-Path")));
//! assert!(!validate_metadata(&bad).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::{CommandCatalog, CommandMetadata, ParameterSet, name_key};

/// Metadata/catalog validation errors.
///
/// Each variant describes a specific structural problem found during
/// validation. The `Display` impl provides a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Catalog version string is empty.
    #[error("catalog version cannot be empty")]
    EmptyCatalogVersion,
    /// Command name is empty or whitespace-only.
    #[error("command name cannot be empty")]
    EmptyCommandName,
    /// Two commands in the same catalog share a name or alias.
    #[error("duplicate command or alias in catalog: {0}")]
    DuplicateCommand(String),
    /// Parameter set name is empty.
    #[error("parameter set name cannot be empty in command: {0}")]
    EmptySetName(String),
    /// Two parameter sets of one command share a name.
    #[error("duplicate parameter set: {0}")]
    DuplicateSet(String),
    /// Parameter name is empty.
    #[error("parameter name cannot be empty in set: {0}")]
    EmptyParameterName(String),
    /// Parameter name starts with a dash or contains whitespace.
    #[error("invalid parameter name: {0}")]
    InvalidParameterName(String),
    /// Two parameters in one set share a name.
    #[error("duplicate parameter in set {set}: {parameter}")]
    DuplicateParameter { set: String, parameter: String },
}

/// Validates a full command catalog.
///
/// Checks for an empty version string, command names or aliases claimed by
/// more than one command, and validates each command individually.
/// Names are compared case-insensitively, as registries look them up.
///
/// # Examples
///
/// ```
/// use param_syntax_core::*;
///
/// let mut catalog = CommandCatalog::new("1.0.0");
/// catalog.commands.push(CommandMetadata::new("Get-ChildItem").with_alias("ls"));
/// assert!(validate_catalog(&catalog).is_empty());
///
/// // Alias collides with another command → error
/// catalog.commands.push(CommandMetadata::new("LS"));
/// let errors = validate_catalog(&catalog);
/// assert!(errors.iter().any(|e| matches!(e, ValidationError::DuplicateCommand(_))));
/// ```
pub fn validate_catalog(catalog: &CommandCatalog) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if catalog.version.trim().is_empty() {
        errors.push(ValidationError::EmptyCatalogVersion);
        return errors;
    }

    let mut seen_names: HashSet<String> = HashSet::new();
    for metadata in &catalog.commands {
        let names = std::iter::once(&metadata.command).chain(metadata.aliases.iter());
        for name in names {
            if !seen_names.insert(name_key(name)) {
                errors.push(ValidationError::DuplicateCommand(name.clone()));
                return errors;
            }
        }
        errors.extend(validate_metadata(metadata));
        if !errors.is_empty() {
            return errors;
        }
    }

    errors
}

/// Validates the metadata of one command.
///
/// Checks for an empty command name, empty or duplicate set names, and
/// invalid or duplicate parameter names within each set.
pub fn validate_metadata(metadata: &CommandMetadata) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if metadata.command.trim().is_empty() {
        errors.push(ValidationError::EmptyCommandName);
        return errors;
    }

    let mut seen_sets: HashSet<String> = HashSet::new();
    for set in &metadata.parameter_sets {
        let name = set.name.trim();
        if name.is_empty() {
            errors.push(ValidationError::EmptySetName(metadata.command.clone()));
            return errors;
        }
        if !seen_sets.insert(name_key(name)) {
            errors.push(ValidationError::DuplicateSet(name.to_string()));
            return errors;
        }

        errors.extend(validate_parameters(set));
        if !errors.is_empty() {
            return errors;
        }
    }

    errors
}

fn validate_parameters(set: &ParameterSet) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for parameter in &set.parameters {
        let name = parameter.name.as_str();
        if name.trim().is_empty() {
            errors.push(ValidationError::EmptyParameterName(set.name.clone()));
            return errors;
        }
        if name.starts_with('-') || name.chars().any(char::is_whitespace) {
            errors.push(ValidationError::InvalidParameterName(name.to_string()));
            return errors;
        }
        if !seen.insert(name_key(name)) {
            errors.push(ValidationError::DuplicateParameter {
                set: set.name.clone(),
                parameter: name.to_string(),
            });
            return errors;
        }
    }

    errors
}
