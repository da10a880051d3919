use serde::{Deserialize, Serialize};

use crate::CommandMetadata;

/// Serializable bundle of command metadata used for registries.
///
/// A catalog groups multiple [`CommandMetadata`] values with version
/// metadata, making it suitable for storing as a single JSON or YAML file or
/// embedding at build time.
///
/// # Examples
///
/// ```
/// use param_syntax_core::*;
///
/// let mut catalog = CommandCatalog::new("1.0.0");
/// catalog.name = Some("file-commands".into());
/// catalog.commands.push(CommandMetadata::new("Copy-Item"));
/// catalog.commands.push(CommandMetadata::new("Move-Item"));
///
/// assert_eq!(catalog.command_count(), 2);
/// assert_eq!(catalog.version, "1.0.0");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandCatalog {
    /// Metadata contract version (populated from
    /// [`METADATA_CONTRACT_VERSION`](crate::METADATA_CONTRACT_VERSION)).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_version: Option<String>,
    /// Catalog format version (semver string).
    pub version: String,
    /// Optional catalog name.
    #[serde(default)]
    pub name: Option<String>,
    /// Optional catalog description.
    #[serde(default)]
    pub description: Option<String>,
    /// Commands included in this catalog.
    #[serde(default)]
    pub commands: Vec<CommandMetadata>,
}

impl CommandCatalog {
    /// Creates an empty catalog.
    ///
    /// The `contract_version` is automatically set from
    /// [`METADATA_CONTRACT_VERSION`](crate::METADATA_CONTRACT_VERSION).
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            contract_version: Some(crate::METADATA_CONTRACT_VERSION.to_string()),
            version: version.into(),
            name: None,
            description: None,
            commands: Vec::new(),
        }
    }

    /// Returns the number of commands in this catalog.
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }
}
