//! Command metadata type definitions.
//!
//! This module defines the data model a metadata resolver hands to the
//! annotator: commands, their parameter sets, and the parameter descriptors
//! inside each set. The types are designed for serialization with [`serde`]
//! so registries can be stored as JSON or YAML.

use serde::{Deserialize, Serialize};

/// Version of the metadata contract (semver).
///
/// Embedded in every [`CommandCatalog`](crate::CommandCatalog) to track
/// compatibility across catalog files.
pub const METADATA_CONTRACT_VERSION: &str = "1.0.0";

/// A single declared parameter of a command.
///
/// Use the constructors [`mandatory`](ParameterDescriptor::mandatory),
/// [`optional`](ParameterDescriptor::optional) and
/// [`switch`](ParameterDescriptor::switch), then chain builder methods like
/// [`with_value_type`](ParameterDescriptor::with_value_type).
///
/// # Examples
///
/// ```
/// use param_syntax_core::ParameterDescriptor;
///
/// let path = ParameterDescriptor::mandatory("Path").with_value_type("string");
/// assert!(path.is_mandatory);
/// assert!(path.takes_value);
///
/// let force = ParameterDescriptor::switch("Force");
/// assert!(!force.is_mandatory);
/// assert!(!force.takes_value);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    /// Parameter name without the leading dash (e.g. "Path")
    pub name: String,
    /// Whether the parameter must be supplied for its set
    #[serde(default, rename = "mandatory")]
    pub is_mandatory: bool,
    /// Whether the parameter carries a value (false for toggles)
    #[serde(default = "default_takes_value")]
    pub takes_value: bool,
    /// Optional label for the value placeholder (e.g. "string", "int")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
}

fn default_takes_value() -> bool {
    true
}

impl ParameterDescriptor {
    /// Creates a mandatory value-taking parameter.
    pub fn mandatory(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_mandatory: true,
            takes_value: true,
            value_type: None,
        }
    }

    /// Creates an optional value-taking parameter.
    pub fn optional(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_mandatory: false,
            takes_value: true,
            value_type: None,
        }
    }

    /// Creates an optional toggle parameter (no value).
    pub fn switch(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_mandatory: false,
            takes_value: false,
            value_type: None,
        }
    }

    /// Sets the value type label.
    pub fn with_value_type(mut self, value_type: &str) -> Self {
        self.value_type = Some(value_type.to_string());
        self
    }

    /// Marks the parameter as a toggle that carries no value.
    pub fn without_value(mut self) -> Self {
        self.takes_value = false;
        self.value_type = None;
        self
    }

    /// Returns the placeholder text shown after the parameter name, if it
    /// takes a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use param_syntax_core::ParameterDescriptor;
    ///
    /// assert_eq!(ParameterDescriptor::optional("Filter").placeholder().as_deref(), Some("<value>"));
    /// assert_eq!(
    ///     ParameterDescriptor::optional("Id").with_value_type("int").placeholder().as_deref(),
    ///     Some("<int>")
    /// );
    /// assert_eq!(ParameterDescriptor::switch("Force").placeholder(), None);
    /// ```
    pub fn placeholder(&self) -> Option<String> {
        if !self.takes_value {
            return None;
        }
        Some(format!("<{}>", self.value_type.as_deref().unwrap_or("value")))
    }
}

/// A named, ordered group of parameters.
///
/// A command may expose several mutually exclusive sets; only one of them
/// applies to a given invocation.
///
/// # Examples
///
/// ```
/// use param_syntax_core::{ParameterDescriptor, ParameterSet};
///
/// let set = ParameterSet::new("Path")
///     .with_parameter(ParameterDescriptor::mandatory("Path"))
///     .with_parameter(ParameterDescriptor::switch("Force"));
///
/// assert_eq!(set.name, "Path");
/// assert_eq!(set.parameter_names(), vec!["Path", "Force"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSet {
    /// Name of the parameter set
    pub name: String,
    /// Declared parameters, in declaration order
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
}

impl ParameterSet {
    /// Creates an empty parameter set with the given name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            parameters: Vec::new(),
        }
    }

    /// Adds a parameter to this set.
    pub fn with_parameter(mut self, parameter: ParameterDescriptor) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Gets all parameter names in declaration order.
    pub fn parameter_names(&self) -> Vec<&str> {
        self.parameters.iter().map(|p| p.name.as_str()).collect()
    }
}

/// Declared parameter metadata for one command.
///
/// This is what a [`MetadataResolver`](crate::MetadataResolver) returns for a
/// command name.
///
/// # Examples
///
/// ```
/// use param_syntax_core::*;
///
/// let metadata = CommandMetadata::new("Copy-Item")
///     .with_alias("cp")
///     .with_set(
///         ParameterSet::new("Path")
///             .with_parameter(ParameterDescriptor::mandatory("Path"))
///             .with_parameter(ParameterDescriptor::optional("Destination")),
///     )
///     .with_set(
///         ParameterSet::new("LiteralPath")
///             .with_parameter(ParameterDescriptor::mandatory("LiteralPath")),
///     );
///
/// assert_eq!(metadata.set_names(), vec!["Path", "LiteralPath"]);
/// assert!(metadata.answers_to("CP"));
/// assert!(metadata.find_set("literalpath").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// The command name (e.g. "Get-ChildItem")
    pub command: String,
    /// Alternative names that resolve to this command
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    /// Short description of the command
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Parameter sets, in declaration order
    #[serde(default)]
    pub parameter_sets: Vec<ParameterSet>,
}

impl CommandMetadata {
    /// Creates metadata for a command with no parameter sets.
    pub fn new(command: &str) -> Self {
        Self {
            command: command.to_string(),
            ..Default::default()
        }
    }

    /// Adds an alias.
    pub fn with_alias(mut self, alias: &str) -> Self {
        self.aliases.push(alias.to_string());
        self
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Adds a parameter set.
    pub fn with_set(mut self, set: ParameterSet) -> Self {
        self.parameter_sets.push(set);
        self
    }

    /// Returns `true` if `name` is the command name or one of its aliases,
    /// compared case-insensitively.
    pub fn answers_to(&self, name: &str) -> bool {
        let key = name_key(name);
        name_key(&self.command) == key || self.aliases.iter().any(|a| name_key(a) == key)
    }

    /// Finds a parameter set by name, case-insensitively.
    pub fn find_set(&self, name: &str) -> Option<&ParameterSet> {
        let key = name_key(name);
        self.parameter_sets.iter().find(|s| name_key(&s.name) == key)
    }

    /// Gets all parameter set names.
    pub fn set_names(&self) -> Vec<&str> {
        self.parameter_sets.iter().map(|s| s.name.as_str()).collect()
    }
}

/// Case-folded lookup key for command, alias, set and parameter names.
///
/// Every case-insensitive comparison in the workspace goes through this, so
/// registries, resolvers and validation agree on non-ASCII names.
pub fn name_key(name: &str) -> String {
    name.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_constructors() {
        let path = ParameterDescriptor::mandatory("Path");
        assert!(path.is_mandatory);
        assert!(path.takes_value);

        let filter = ParameterDescriptor::optional("Filter");
        assert!(!filter.is_mandatory);
        assert!(filter.takes_value);

        let force = ParameterDescriptor::switch("Force");
        assert!(!force.takes_value);
    }

    #[test]
    fn test_without_value_clears_value_type() {
        let p = ParameterDescriptor::optional("Recurse")
            .with_value_type("switch")
            .without_value();
        assert!(!p.takes_value);
        assert_eq!(p.value_type, None);
        assert_eq!(p.placeholder(), None);
    }

    #[test]
    fn test_descriptor_deserialize_defaults() {
        let p: ParameterDescriptor = serde_json::from_str(r#"{"name": "Path"}"#).unwrap();
        assert!(!p.is_mandatory);
        assert!(p.takes_value);
        assert_eq!(p.value_type, None);

        let p: ParameterDescriptor =
            serde_json::from_str(r#"{"name": "Force", "mandatory": false, "takes_value": false}"#)
                .unwrap();
        assert!(!p.takes_value);
    }

    #[test]
    fn test_metadata_alias_lookup() {
        let metadata = CommandMetadata::new("Get-ChildItem")
            .with_alias("ls")
            .with_alias("gci");

        assert!(metadata.answers_to("get-childitem"));
        assert!(metadata.answers_to("GCI"));
        assert!(!metadata.answers_to("dir"));
    }

    #[test]
    fn test_lookups_fold_non_ascii_case() {
        let metadata = CommandMetadata::new("Größe-Ändern")
            .with_alias("ÄNDERN")
            .with_set(ParameterSet::new("Übersicht"));

        assert!(metadata.answers_to("größe-ändern"));
        assert!(metadata.answers_to("ändern"));
        assert!(metadata.find_set("ÜBERSICHT").is_some());
        assert_eq!(name_key("ÄNDERN"), "ändern");
    }

    #[test]
    fn test_metadata_serialization_skips_empty_fields() {
        let metadata = CommandMetadata::new("Get-Date");
        let json = serde_json::to_value(&metadata).unwrap();
        assert!(json.get("aliases").is_none());
        assert!(json.get("description").is_none());
        assert_eq!(json["parameter_sets"], serde_json::json!([]));
    }
}
