//! Registry loading with a builder that merges several sources.
//!
//! Provides [`CommandRegistry`] for in-memory metadata lookup and
//! [`RegistryBuilder`] for layering sources on top of each other.
//!
//! # Loading patterns
//!
//! ```no_run
//! use param_syntax_registry::CommandRegistry;
//!
//! // Load from a directory of per-command JSON/YAML files
//! let registry = CommandRegistry::from_dir("commands/").unwrap();
//! assert!(registry.get("Get-ChildItem").is_some());
//!
//! // Load from a single CommandCatalog file
//! let registry = CommandRegistry::from_catalog("catalog.yaml").unwrap();
//!
//! // Layer local files over the built-in catalog
//! let registry = CommandRegistry::builder()
//!     .with_builtin()
//!     .with_path("commands/")
//!     .build()
//!     .unwrap();
//! ```
//!
//! Lookups by command name or alias are O(1) and case-insensitive.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use param_syntax_core::{
    CommandCatalog, CommandMetadata, MetadataResolver, SyntaxError, ValidationError, name_key,
    validate_catalog, validate_metadata,
};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::{RegistryError, Result};

/// Describes where a [`CommandRegistry`] was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrySource {
    /// Loaded from a directory of per-command metadata files.
    Directory(PathBuf),
    /// Loaded from a single [`CommandCatalog`] file.
    Catalog(PathBuf),
    /// Loaded from the catalog embedded at build time.
    Builtin,
    /// Assembled in memory.
    Memory,
    /// Merged from several sources, in order.
    Multiple(Vec<RegistrySource>),
}

/// In-memory collection of command metadata with O(1) lookup by command name
/// or alias.
///
/// Names are compared case-insensitively. Inserting metadata for a command
/// that is already present replaces it, aliases included. A command name
/// always wins over an alias spelled the same way.
///
/// # Examples
///
/// ```
/// use param_syntax_core::{CommandMetadata, MetadataResolver};
/// use param_syntax_registry::CommandRegistry;
///
/// let mut registry = CommandRegistry::new();
/// registry.insert(CommandMetadata::new("Get-ChildItem").with_alias("ls"));
///
/// assert!(registry.contains("get-childitem"));
/// assert_eq!(registry.get("LS").unwrap().command, "Get-ChildItem");
/// assert!(registry.resolve("dir").is_err());
/// ```
#[derive(Debug)]
pub struct CommandRegistry {
    commands: HashMap<String, CommandMetadata>,
    aliases: HashMap<String, String>,
    source: RegistrySource,
}

impl CommandRegistry {
    /// Creates an empty in-memory registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            aliases: HashMap::new(),
            source: RegistrySource::Memory,
        }
    }

    /// Returns a new [`RegistryBuilder`] for layering sources.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Loads metadata from a directory of `*.json`, `*.yaml` or `*.yml`
    /// files, one [`CommandMetadata`] per file.
    ///
    /// Files are read in file-name order; other extensions are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::IoError`] if the directory or a file cannot
    /// be read, a parse error if a file is malformed, or
    /// [`RegistryError::InvalidCatalog`] if a file fails validation or claims
    /// a command name or alias already claimed by another file.
    pub fn from_dir(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut files = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let file_path = entry?.path();
            if file_path.is_file() && is_supported(&file_path) {
                files.push(file_path);
            } else {
                debug!(path = %file_path.display(), "Skipping non-metadata entry");
            }
        }
        files.sort();

        let mut registry = Self::new();
        let mut seen_names: HashSet<String> = HashSet::new();
        for file_path in files {
            let metadata: CommandMetadata = read_file(&file_path)?;
            let mut errors = validate_metadata(&metadata);
            let names = std::iter::once(&metadata.command).chain(metadata.aliases.iter());
            for name in names {
                if !seen_names.insert(name_key(name)) {
                    errors.push(ValidationError::DuplicateCommand(name.clone()));
                }
            }
            if let Some(error) = errors.into_iter().next() {
                return Err(RegistryError::InvalidCatalog {
                    path: file_path,
                    error,
                });
            }
            registry.insert(metadata);
        }

        info!(path = %path.display(), commands = registry.len(), "Loaded metadata directory");
        registry.source = RegistrySource::Directory(path.to_path_buf());
        Ok(registry)
    }

    /// Loads metadata from a single [`CommandCatalog`] file (JSON or YAML).
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::IoError`] if the file cannot be read, a parse
    /// error if it is malformed, or [`RegistryError::InvalidCatalog`] if it
    /// fails validation.
    pub fn from_catalog(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let catalog: CommandCatalog = read_file(path)?;
        let mut registry = Self::from_validated(catalog, path)?;

        info!(path = %path.display(), commands = registry.len(), "Loaded catalog");
        registry.source = RegistrySource::Catalog(path.to_path_buf());
        Ok(registry)
    }

    /// Loads the catalog embedded at build time.
    ///
    /// Only available when the `builtin-catalog` feature is enabled.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::JsonError`] if the embedded catalog cannot be
    /// parsed.
    #[cfg(feature = "builtin-catalog")]
    pub fn builtin() -> Result<Self> {
        let catalog = crate::builtin::builtin_catalog()?;
        let mut registry = Self::from_validated(catalog, Path::new("<builtin>"))?;
        registry.source = RegistrySource::Builtin;
        Ok(registry)
    }

    fn from_validated(catalog: CommandCatalog, path: &Path) -> Result<Self> {
        if let Some(error) = validate_catalog(&catalog).into_iter().next() {
            return Err(RegistryError::InvalidCatalog {
                path: path.to_path_buf(),
                error,
            });
        }
        let mut registry = Self::new();
        for metadata in catalog.commands {
            registry.insert(metadata);
        }
        Ok(registry)
    }

    /// Looks up metadata by command name or alias.
    pub fn get(&self, name: &str) -> Option<&CommandMetadata> {
        let key = name_key(name);
        self.commands.get(&key).or_else(|| {
            self.aliases
                .get(&key)
                .and_then(|target| self.commands.get(target))
        })
    }

    /// Inserts metadata, replacing any existing entry for the same command
    /// and taking over its aliases.
    ///
    /// An alias of an earlier command spelled like the new command name is
    /// dropped, so the new command is reachable by its own name.
    pub fn insert(&mut self, metadata: CommandMetadata) {
        let key = name_key(&metadata.command);
        self.aliases.retain(|_, target| *target != key);
        self.aliases.remove(&key);
        for alias in &metadata.aliases {
            self.aliases.insert(name_key(alias), key.clone());
        }
        self.commands.insert(key, metadata);
    }

    /// Inserts every command of `other`, replacing entries present in both.
    ///
    /// Commands are inserted in name order so that alias conflicts inside
    /// `other` resolve the same way on every run.
    pub fn merge(&mut self, other: CommandRegistry) {
        let mut incoming: Vec<(String, CommandMetadata)> = other.commands.into_iter().collect();
        incoming.sort_by(|a, b| a.0.cmp(&b.0));
        for (_, metadata) in incoming {
            self.insert(metadata);
        }
    }

    /// Returns `true` if `name` resolves to a command.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the number of commands in the registry.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if the registry holds no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns all metadata sorted by command name.
    pub fn commands(&self) -> Vec<&CommandMetadata> {
        let mut commands: Vec<&CommandMetadata> = self.commands.values().collect();
        commands.sort_by_key(|m| name_key(&m.command));
        commands
    }

    /// Returns a reference to the source metadata.
    pub fn source(&self) -> &RegistrySource {
        &self.source
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataResolver for CommandRegistry {
    fn resolve(&self, command: &str) -> param_syntax_core::Result<CommandMetadata> {
        self.get(command)
            .cloned()
            .ok_or_else(|| SyntaxError::CommandNotFound(command.to_string()))
    }
}

/// Builder for a [`CommandRegistry`] merged from several sources.
///
/// Sources are loaded in the order they are added; a command defined by a
/// later source replaces the same command from an earlier one. Any source
/// that fails to load fails the build.
///
/// # Example
///
/// ```no_run
/// use param_syntax_registry::CommandRegistry;
///
/// let registry = CommandRegistry::builder()
///     .with_builtin()
///     .from_dir("/etc/param-syntax/commands/")
///     .from_catalog("./team-commands.yaml")
///     .build()
///     .unwrap();
/// ```
pub struct RegistryBuilder {
    sources: Vec<RegistrySource>,
}

impl RegistryBuilder {
    /// Creates a new builder with no sources.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Adds the embedded built-in catalog as a source.
    ///
    /// Only effective when the `builtin-catalog` feature is enabled;
    /// otherwise this source is skipped during [`build`](Self::build).
    pub fn with_builtin(mut self) -> Self {
        self.sources.push(RegistrySource::Builtin);
        self
    }

    /// Adds a directory of per-command metadata files as a source.
    pub fn from_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.sources.push(RegistrySource::Directory(path.into()));
        self
    }

    /// Adds a [`CommandCatalog`] file as a source.
    pub fn from_catalog(mut self, path: impl Into<PathBuf>) -> Self {
        self.sources.push(RegistrySource::Catalog(path.into()));
        self
    }

    /// Adds `path` as a directory source if it is a directory, otherwise as
    /// a catalog file.
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if path.is_dir() {
            self.from_dir(path)
        } else {
            self.from_catalog(path)
        }
    }

    /// Loads and merges all configured sources in order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NoSourcesAvailable`] if no sources were
    /// added, or the first error raised by a source.
    pub fn build(self) -> Result<CommandRegistry> {
        if self.sources.is_empty() {
            return Err(RegistryError::NoSourcesAvailable);
        }

        let mut registry = CommandRegistry::new();
        for source in &self.sources {
            let loaded = match source {
                RegistrySource::Directory(path) => CommandRegistry::from_dir(path)?,
                RegistrySource::Catalog(path) => CommandRegistry::from_catalog(path)?,
                RegistrySource::Builtin => {
                    #[cfg(feature = "builtin-catalog")]
                    {
                        CommandRegistry::builtin()?
                    }
                    #[cfg(not(feature = "builtin-catalog"))]
                    {
                        debug!("Built-in catalog disabled, skipping");
                        continue;
                    }
                }
                RegistrySource::Memory | RegistrySource::Multiple(_) => continue,
            };
            registry.merge(loaded);
        }

        registry.source = RegistrySource::Multiple(self.sources);
        Ok(registry)
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn is_supported(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("json" | "yaml" | "yml")
    )
}

/// Reads a JSON or YAML file, chosen by extension.
pub(crate) fn read_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Ok(serde_json::from_reader(reader)?),
        Some("yaml" | "yml") => Ok(serde_yaml::from_reader(reader)?),
        _ => Err(RegistryError::UnsupportedFormat(path.to_path_buf())),
    }
}
