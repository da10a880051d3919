//! Boundary between the annotator and wherever command metadata lives.

use crate::error::{Result, SyntaxError};
use crate::CommandMetadata;

/// Looks up declared parameter metadata by command name.
///
/// Implementations decide how names are compared and where metadata comes
/// from. Remote implementations must apply their own timeout policy; the
/// pipeline calls `resolve` synchronously, once per invocation.
pub trait MetadataResolver {
    /// Returns the metadata for `command`.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::CommandNotFound`] if the command is unknown.
    fn resolve(&self, command: &str) -> Result<CommandMetadata>;
}

/// A resolver over a plain slice of metadata, matching command names and
/// aliases case-insensitively.
///
/// # Examples
///
/// ```
/// use param_syntax_core::{CommandMetadata, MetadataResolver};
///
/// let commands = vec![CommandMetadata::new("Get-Date").with_alias("date")];
/// let resolver = commands.as_slice();
/// assert_eq!(resolver.resolve("DATE").unwrap().command, "Get-Date");
/// assert!(resolver.resolve("Get-Time").is_err());
/// ```
impl MetadataResolver for [CommandMetadata] {
    fn resolve(&self, command: &str) -> Result<CommandMetadata> {
        self.iter()
            .find(|metadata| metadata.answers_to(command))
            .cloned()
            .ok_or_else(|| SyntaxError::CommandNotFound(command.to_string()))
    }
}

impl<R: MetadataResolver + ?Sized> MetadataResolver for &R {
    fn resolve(&self, command: &str) -> Result<CommandMetadata> {
        (**self).resolve(command)
    }
}
