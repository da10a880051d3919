//! Command metadata embedded at build time.

use param_syntax_core::CommandCatalog;

use crate::error::Result;

const BUILTIN_CATALOG: &str = include_str!("../data/builtin.json");

/// Parses the embedded catalog.
///
/// # Errors
///
/// Returns [`RegistryError::JsonError`](crate::RegistryError::JsonError) if
/// the embedded data is malformed.
pub fn builtin_catalog() -> Result<CommandCatalog> {
    Ok(serde_json::from_str(BUILTIN_CATALOG)?)
}
