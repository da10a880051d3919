//! Command metadata registries for syntax help.
//!
//! This crate provides the [`MetadataResolver`](param_syntax_core::MetadataResolver)
//! implementation used by the `syntax-help` binary: command metadata loaded
//! from directories, catalog files, or the embedded built-in catalog, plus
//! the YAML configuration that selects those sources.
//!
//! # Quick start
//!
//! ```no_run
//! use param_syntax_registry::{CommandRegistry, SyntaxConfig};
//!
//! // Load metadata from a directory
//! let registry = CommandRegistry::from_dir("commands/").unwrap();
//! if let Some(metadata) = registry.get("Copy-Item") {
//!     println!("Copy-Item has {} parameter sets", metadata.parameter_sets.len());
//! }
//!
//! // Build the registry described by a config file
//! let config = SyntaxConfig::load("param-syntax.yaml").unwrap();
//! let registry = config.registry_builder().build().unwrap();
//! ```
//!
//! # Feature flags
//!
//! - **`builtin-catalog`** (default): embeds a catalog of sample commands,
//!   available through `CommandRegistry::builtin`.

#[cfg(feature = "builtin-catalog")]
mod builtin;
mod config;
mod error;
mod loader;

pub use config::{RegistryConfig, SyntaxConfig};
pub use error::{RegistryError, Result};
pub use loader::{CommandRegistry, RegistryBuilder, RegistrySource};

#[cfg(feature = "builtin-catalog")]
pub use builtin::builtin_catalog;
