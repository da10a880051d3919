//! Parameter-set matching and annotation for command syntax help.
//!
//! This crate turns a free-form command line into annotated, styled syntax
//! help:
//!
//! - [`tokenize`] — splits the text into a command name and `-Name` tokens.
//! - [`MetadataResolver`] — looks up a command's [`CommandMetadata`]: its
//!   [`ParameterSet`]s and their [`ParameterDescriptor`]s.
//! - [`Annotator`] — classifies every declared parameter as matched,
//!   mandatory-missing or optional-absent (or just mandatory/optional) and
//!   collects tokens the command does not declare.
//! - [`render`] — produces [`StyledLine`]s tagged with semantic [`Style`]s.
//!
//! [`inspect`] runs the whole pipeline. Validation ([`validate_metadata`],
//! [`validate_catalog`]) catches structural errors in registry data.
//!
//! # Example
//!
//! ```
//! use param_syntax_core::*;
//!
//! let commands = vec![CommandMetadata::new("Copy-Item").with_set(
//!     ParameterSet::new("Path")
//!         .with_parameter(ParameterDescriptor::mandatory("Path"))
//!         .with_parameter(ParameterDescriptor::optional("Destination"))
//!         .with_parameter(ParameterDescriptor::switch("Force")),
//! )];
//! let config = AnalysisConfig::default();
//!
//! let request = Request::new("Copy-Item -Destination out -Recurse", Mode::Validate);
//! let lines = inspect(&request, commands.as_slice(), &config).unwrap();
//! let text: Vec<String> = lines.iter().map(StyledLine::text).collect();
//!
//! assert_eq!(text[0], "ParameterSet Name: Path - Validated List");
//! assert_eq!(text[1], "Copy-Item -Path <value> ✗ -Destination <value> ✓ -Force");
//! assert_eq!(text[3], "Parameters Not Found:");
//! assert_eq!(text[4], "  -Recurse");
//! ```

mod annotate;
mod catalog;
mod config;
mod error;
mod inspect;
mod render;
mod resolve;
mod tokenize;
mod types;
mod validate;

pub use annotate::{AnnotatedParameter, AnnotatedSet, Annotation, Annotator, Category, Mode};
pub use catalog::CommandCatalog;
pub use config::{AnalysisConfig, DEFAULT_COMMON_PARAMETERS};
pub use error::{Result, SyntaxError};
pub use inspect::{Request, analyze, inspect};
pub use render::{
    MATCHED_MARKER, MISSING_MARKER, NOT_FOUND_HEADER, Span, Style, StyledLine, legend, render,
};
pub use resolve::MetadataResolver;
pub use tokenize::{TokenizedCommand, tokenize};
pub use types::*;
pub use validate::{ValidationError, validate_catalog, validate_metadata};
