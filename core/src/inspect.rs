//! The end-to-end pipeline: tokenize, resolve, annotate, render.

use tracing::debug;

use crate::error::{Result, SyntaxError};
use crate::{AnalysisConfig, Annotation, Annotator, MetadataResolver, Mode, StyledLine, render, tokenize};

/// One inspection request.
#[derive(Debug, Clone)]
pub struct Request<'a> {
    /// Free-form command text, e.g. `Copy-Item -Path a -Destination b`.
    pub command_text: &'a str,
    pub mode: Mode,
    /// Append the legend block.
    pub include_legend: bool,
}

impl<'a> Request<'a> {
    pub fn new(command_text: &'a str, mode: Mode) -> Self {
        Self {
            command_text,
            mode,
            include_legend: false,
        }
    }

    pub fn with_legend(mut self, include_legend: bool) -> Self {
        self.include_legend = include_legend;
        self
    }
}

/// Tokenizes, resolves and annotates the command text without rendering.
///
/// Failures are detected in pipeline order: an empty command text, then (in
/// [`Mode::Validate`]) a text without parameter tokens, then an unknown
/// command.
///
/// # Errors
///
/// Returns [`SyntaxError::NoCommandFound`], [`SyntaxError::NoParametersFound`]
/// or [`SyntaxError::CommandNotFound`].
pub fn analyze<R>(request: &Request<'_>, resolver: &R, config: &AnalysisConfig) -> Result<Annotation>
where
    R: MetadataResolver + ?Sized,
{
    let parsed = tokenize(request.command_text)?;
    debug!(command = %parsed.command, tokens = ?parsed.tokens, "Tokenized command text");

    if request.mode == Mode::Validate && parsed.has_no_parameters() {
        return Err(SyntaxError::NoParametersFound(
            request.command_text.trim().to_string(),
        ));
    }

    let metadata = resolver.resolve(&parsed.command)?;
    debug!(
        command = %metadata.command,
        sets = metadata.parameter_sets.len(),
        "Resolved command metadata"
    );

    let annotation = Annotator::new(config).annotate(&metadata, &parsed.tokens, request.mode);
    debug!(not_found = ?annotation.not_found, "Annotated parameter sets");
    Ok(annotation)
}

/// Runs the whole pipeline and returns the rendered lines.
///
/// # Errors
///
/// See [`analyze`]. Rendering itself never fails.
///
/// # Examples
///
/// ```
/// use param_syntax_core::*;
///
/// let commands = vec![CommandMetadata::new("Foo").with_set(
///     ParameterSet::new("Default")
///         .with_parameter(ParameterDescriptor::mandatory("Bar"))
///         .with_parameter(ParameterDescriptor::optional("Baz"))
///         .with_parameter(ParameterDescriptor::mandatory("Qux")),
/// )];
/// let config = AnalysisConfig::default();
///
/// let lines = inspect(&Request::new("Foo -Bar -Baz", Mode::Validate), commands.as_slice(), &config).unwrap();
/// assert_eq!(lines[1].text(), "Foo -Bar <value> ✓ -Baz <value> ✓ -Qux <value> ✗");
///
/// let err = inspect(&Request::new("", Mode::Validate), commands.as_slice(), &config).unwrap_err();
/// assert_eq!(err, SyntaxError::NoCommandFound);
/// ```
pub fn inspect<R>(request: &Request<'_>, resolver: &R, config: &AnalysisConfig) -> Result<Vec<StyledLine>>
where
    R: MetadataResolver + ?Sized,
{
    let annotation = analyze(request, resolver, config)?;
    Ok(render(&annotation, request.include_legend))
}
