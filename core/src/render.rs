//! Rendering of annotations into styled lines.
//!
//! The renderer only tags text with a semantic [`Style`]; mapping styles to
//! terminal colors (or anything else) is up to the caller. Output is
//! line-oriented and does not depend on terminal width.

use serde::Serialize;

use crate::{AnnotatedParameter, AnnotatedSet, Annotation, Category, Mode};

/// Marker appended to a parameter found in the command text.
pub const MATCHED_MARKER: &str = "✓";
/// Marker appended to a mandatory parameter missing from the command text.
pub const MISSING_MARKER: &str = "✗";
/// Header of the not-found block.
pub const NOT_FOUND_HEADER: &str = "Parameters Not Found:";

/// Semantic style of a rendered span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Style {
    CommandName,
    MandatoryParam,
    OptionalParam,
    ValuePlaceholder,
    MatchedMarker,
    MandatoryMissingMarker,
    NotFoundParam,
    Emphasis,
}

/// A run of text with an optional style. Unstyled spans are plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub text: String,
    pub style: Option<Style>,
}

/// One output line made of spans.
///
/// # Examples
///
/// ```
/// use param_syntax_core::{Style, StyledLine};
///
/// let line = StyledLine::new()
///     .plain("Name: ")
///     .styled("Path", Style::Emphasis);
/// assert_eq!(line.text(), "Name: Path");
/// assert_eq!(line.spans[1].style, Some(Style::Emphasis));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StyledLine {
    pub spans: Vec<Span>,
}

impl StyledLine {
    /// Creates an empty line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends unstyled text.
    pub fn plain(mut self, text: impl Into<String>) -> Self {
        self.spans.push(Span {
            text: text.into(),
            style: None,
        });
        self
    }

    /// Appends text tagged with `style`.
    pub fn styled(mut self, text: impl Into<String>, style: Style) -> Self {
        self.spans.push(Span {
            text: text.into(),
            style: Some(style),
        });
        self
    }

    /// Returns the line's text with styles dropped.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Returns `true` if the line has no visible text.
    pub fn is_blank(&self) -> bool {
        self.spans.iter().all(|s| s.text.is_empty())
    }

    /// Returns the spans tagged with `style`.
    pub fn spans_with(&self, style: Style) -> impl Iterator<Item = &Span> {
        self.spans.iter().filter(move |s| s.style == Some(style))
    }
}

/// Renders an annotation, optionally followed by the legend for its mode.
///
/// # Examples
///
/// ```
/// use param_syntax_core::*;
///
/// let metadata = CommandMetadata::new("Foo").with_set(
///     ParameterSet::new("Default")
///         .with_parameter(ParameterDescriptor::mandatory("Bar"))
///         .with_parameter(ParameterDescriptor::switch("Force")),
/// );
/// let config = AnalysisConfig::default();
/// let annotation = Annotator::new(&config).annotate(&metadata, &["Bar".to_string()], Mode::Validate);
///
/// let text: Vec<String> = render(&annotation, false).iter().map(StyledLine::text).collect();
/// assert_eq!(
///     text,
///     vec![
///         "ParameterSet Name: Default - Validated List",
///         "Foo -Bar <value> ✓ -Force",
///         "",
///         "Parameters Not Found:",
///     ]
/// );
/// ```
pub fn render(annotation: &Annotation, include_legend: bool) -> Vec<StyledLine> {
    let sets = annotation
        .sets
        .iter()
        .flat_map(|set| render_set(&annotation.command, set, annotation.mode));

    let not_found = match annotation.mode {
        Mode::Validate => render_not_found(&annotation.not_found),
        Mode::ShowParameters => Vec::new(),
    };

    let legend = if include_legend {
        legend(annotation.mode)
    } else {
        Vec::new()
    };

    sets.chain(not_found).chain(legend).collect()
}

fn render_set(command: &str, set: &AnnotatedSet, mode: Mode) -> Vec<StyledLine> {
    let kind = match mode {
        Mode::Validate => "Validated List",
        Mode::ShowParameters => "Parameter List",
    };
    let header = StyledLine::new()
        .plain("ParameterSet Name: ")
        .styled(set.name.as_str(), Style::Emphasis)
        .plain(format!(" - {kind}"));

    let syntax = set.parameters.iter().fold(
        StyledLine::new().styled(command, Style::CommandName),
        |line, parameter| render_parameter(line.plain(" "), parameter),
    );

    vec![header, syntax, StyledLine::new()]
}

fn render_parameter(line: StyledLine, parameter: &AnnotatedParameter) -> StyledLine {
    let style = if parameter.is_mandatory {
        Style::MandatoryParam
    } else {
        Style::OptionalParam
    };
    let line = line.styled(format!("-{}", parameter.name), style);

    let line = match &parameter.placeholder {
        Some(placeholder) => line.plain(" ").styled(placeholder.as_str(), Style::ValuePlaceholder),
        None => line,
    };

    match parameter.category {
        Category::Matched => line.plain(" ").styled(MATCHED_MARKER, Style::MatchedMarker),
        Category::MandatoryMissing => line
            .plain(" ")
            .styled(MISSING_MARKER, Style::MandatoryMissingMarker),
        Category::OptionalAbsent | Category::Mandatory | Category::Optional => line,
    }
}

fn render_not_found(not_found: &[String]) -> Vec<StyledLine> {
    std::iter::once(StyledLine::new().styled(NOT_FOUND_HEADER, Style::Emphasis))
        .chain(not_found.iter().map(|token| {
            StyledLine::new()
                .plain("  ")
                .styled(format!("-{token}"), Style::NotFoundParam)
        }))
        .collect()
}

const VALIDATE_LEGEND: &[(&str, Style, &str)] = &[
    ("Command", Style::CommandName, "command name"),
    ("-Mandatory", Style::MandatoryParam, "mandatory parameter"),
    ("-Optional", Style::OptionalParam, "optional parameter"),
    ("<value>", Style::ValuePlaceholder, "parameter takes a value"),
    (MATCHED_MARKER, Style::MatchedMarker, "parameter found in the command text"),
    (
        MISSING_MARKER,
        Style::MandatoryMissingMarker,
        "mandatory parameter missing from the command text",
    ),
    ("-NotFound", Style::NotFoundParam, "parameter the command does not declare"),
];

const SHOW_LEGEND: &[(&str, Style, &str)] = &[
    ("Command", Style::CommandName, "command name"),
    ("-Mandatory", Style::MandatoryParam, "mandatory parameter"),
    ("-Optional", Style::OptionalParam, "optional parameter"),
    ("<value>", Style::ValuePlaceholder, "parameter takes a value"),
];

/// Returns the static legend for `mode`.
pub fn legend(mode: Mode) -> Vec<StyledLine> {
    let entries = match mode {
        Mode::Validate => VALIDATE_LEGEND,
        Mode::ShowParameters => SHOW_LEGEND,
    };
    let width = entries
        .iter()
        .map(|(sample, _, _)| sample.chars().count())
        .max()
        .unwrap_or(0);

    [StyledLine::new(), StyledLine::new().styled("Legend:", Style::Emphasis)]
        .into_iter()
        .chain(entries.iter().map(|(sample, style, meaning)| {
            let pad = width - sample.chars().count() + 2;
            StyledLine::new()
                .plain("  ")
                .styled(*sample, *style)
                .plain(format!("{}{meaning}", " ".repeat(pad)))
        }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnalysisConfig, Annotator, CommandMetadata, ParameterDescriptor, ParameterSet};

    fn foo() -> CommandMetadata {
        CommandMetadata::new("Foo").with_set(
            ParameterSet::new("Default")
                .with_parameter(ParameterDescriptor::mandatory("Bar"))
                .with_parameter(ParameterDescriptor::optional("Baz").with_value_type("int"))
                .with_parameter(ParameterDescriptor::mandatory("Qux"))
                .with_parameter(ParameterDescriptor::switch("Force")),
        )
    }

    fn annotate(metadata: &CommandMetadata, tokens: &[&str], mode: Mode) -> Annotation {
        let config = AnalysisConfig::default();
        let tokens: Vec<String> = tokens.iter().map(|s| s.to_string()).collect();
        Annotator::new(&config).annotate(metadata, &tokens, mode)
    }

    fn texts(lines: &[StyledLine]) -> Vec<String> {
        lines.iter().map(StyledLine::text).collect()
    }

    #[test]
    fn test_validate_rendering() {
        let lines = render(&annotate(&foo(), &["Bar", "Zzz"], Mode::Validate), false);
        assert_eq!(
            texts(&lines),
            vec![
                "ParameterSet Name: Default - Validated List",
                "Foo -Bar <value> ✓ -Baz <int> -Qux <value> ✗ -Force",
                "",
                "Parameters Not Found:",
                "  -Zzz",
            ]
        );
    }

    #[test]
    fn test_show_rendering_has_no_markers_or_not_found_block() {
        let lines = render(&annotate(&foo(), &["Bar", "Zzz"], Mode::ShowParameters), false);
        assert_eq!(
            texts(&lines),
            vec![
                "ParameterSet Name: Default - Parameter List",
                "Foo -Bar <value> -Baz <int> -Qux <value> -Force",
                "",
            ]
        );
        assert!(lines.iter().all(|l| l.spans_with(Style::MatchedMarker).next().is_none()));
    }

    #[test]
    fn test_styles_follow_mandatory_flag() {
        let lines = render(&annotate(&foo(), &["Baz"], Mode::Validate), false);
        let syntax = &lines[1];

        assert_eq!(syntax.spans[0], Span { text: "Foo".into(), style: Some(Style::CommandName) });
        let mandatory: Vec<&str> = syntax
            .spans_with(Style::MandatoryParam)
            .map(|s| s.text.as_str())
            .collect();
        let optional: Vec<&str> = syntax
            .spans_with(Style::OptionalParam)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(mandatory, vec!["-Bar", "-Qux"]);
        assert_eq!(optional, vec!["-Baz", "-Force"]);
        assert_eq!(syntax.spans_with(Style::MandatoryMissingMarker).count(), 2);
        assert_eq!(syntax.spans_with(Style::MatchedMarker).count(), 1);
    }

    #[test]
    fn test_every_parameter_listed_once_in_order() {
        let metadata = foo()
            .with_set(ParameterSet::new("Other").with_parameter(ParameterDescriptor::switch("Bar")));
        let lines = render(&annotate(&metadata, &[], Mode::ShowParameters), false);

        let names = |line: &StyledLine| -> Vec<String> {
            line.spans
                .iter()
                .filter(|s| matches!(s.style, Some(Style::MandatoryParam | Style::OptionalParam)))
                .map(|s| s.text.clone())
                .collect()
        };
        assert_eq!(names(&lines[1]), vec!["-Bar", "-Baz", "-Qux", "-Force"]);
        assert_eq!(texts(&lines)[3], "ParameterSet Name: Other - Parameter List");
        assert_eq!(names(&lines[4]), vec!["-Bar"]);
    }

    #[test]
    fn test_zero_sets_validate_still_has_not_found_header() {
        let metadata = CommandMetadata::new("Empty");
        let lines = render(&annotate(&metadata, &["X"], Mode::Validate), false);
        assert_eq!(texts(&lines), vec!["Parameters Not Found:", "  -X"]);

        let lines = render(&annotate(&metadata, &[], Mode::ShowParameters), false);
        assert!(lines.is_empty());
    }

    #[test]
    fn test_not_found_tokens_are_styled() {
        let lines = render(&annotate(&foo(), &["A", "B"], Mode::Validate), false);
        let flagged: Vec<&str> = lines
            .iter()
            .flat_map(|l| l.spans_with(Style::NotFoundParam))
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(flagged, vec!["-A", "-B"]);
    }

    #[test]
    fn test_legend_only_when_requested() {
        let annotation = annotate(&foo(), &["Bar"], Mode::Validate);
        let without = render(&annotation, false);
        let with = render(&annotation, true);

        assert_eq!(with.len(), without.len() + legend(Mode::Validate).len());
        assert!(texts(&with).contains(&"Legend:".to_string()));
        assert!(!texts(&without).contains(&"Legend:".to_string()));
    }

    #[test]
    fn test_legend_per_mode() {
        let validate = texts(&legend(Mode::Validate));
        let show = texts(&legend(Mode::ShowParameters));

        assert!(validate.iter().any(|l| l.contains(MISSING_MARKER)));
        assert!(validate.iter().any(|l| l.contains("-NotFound")));
        assert!(!show.iter().any(|l| l.contains(MATCHED_MARKER)));
        assert_eq!(show[2], "  Command     command name");
    }
}
