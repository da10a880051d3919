//! Parameter-set annotation.
//!
//! Walks every parameter set of a command and classifies each declared
//! parameter against the tokens found in the command text. Common parameters
//! are filtered out first, so they never show up in a set or in the
//! not-found list.

use serde::Serialize;

use crate::{AnalysisConfig, CommandMetadata, ParameterSet};

/// What the caller wants to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mode {
    /// Compare the command text against every parameter set.
    Validate,
    /// List the parameter sets without looking at the command text.
    ShowParameters,
}

/// Display category of one parameter within one set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    /// Present in the command text (mandatory or not).
    Matched,
    /// Mandatory and absent from the command text.
    MandatoryMissing,
    /// Optional and absent from the command text.
    OptionalAbsent,
    /// Mandatory, listed without comparison.
    Mandatory,
    /// Optional, listed without comparison.
    Optional,
}

impl Category {
    /// Returns `true` if the parameter is mandatory and was not supplied.
    pub fn is_missing(self) -> bool {
        self == Category::MandatoryMissing
    }
}

/// One declared parameter with its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedParameter {
    pub name: String,
    pub is_mandatory: bool,
    pub category: Category,
    /// Placeholder such as `<string>`, or `None` for toggles
    pub placeholder: Option<String>,
}

/// One parameter set with every non-common parameter annotated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedSet {
    pub name: String,
    pub parameters: Vec<AnnotatedParameter>,
}

impl AnnotatedSet {
    /// Returns `true` if no mandatory parameter of this set is missing.
    pub fn is_satisfied(&self) -> bool {
        !self.parameters.iter().any(|p| p.category.is_missing())
    }
}

/// Result of annotating a command against its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    /// Command name as resolved (not as typed).
    pub command: String,
    pub mode: Mode,
    pub sets: Vec<AnnotatedSet>,
    /// Tokens declared by no set, in input order. Always empty in
    /// [`Mode::ShowParameters`].
    pub not_found: Vec<String>,
}

/// Classifies declared parameters against input tokens.
///
/// # Examples
///
/// ```
/// use param_syntax_core::*;
///
/// let metadata = CommandMetadata::new("Foo").with_set(
///     ParameterSet::new("Default")
///         .with_parameter(ParameterDescriptor::mandatory("Bar"))
///         .with_parameter(ParameterDescriptor::optional("Baz"))
///         .with_parameter(ParameterDescriptor::mandatory("Qux")),
/// );
/// let tokens = vec!["Bar".to_string(), "Zzz".to_string()];
///
/// let config = AnalysisConfig::default();
/// let annotation = Annotator::new(&config).annotate(&metadata, &tokens, Mode::Validate);
///
/// let categories: Vec<Category> = annotation.sets[0].parameters.iter().map(|p| p.category).collect();
/// assert_eq!(
///     categories,
///     vec![Category::Matched, Category::OptionalAbsent, Category::MandatoryMissing]
/// );
/// assert_eq!(annotation.not_found, vec!["Zzz"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Annotator<'a> {
    config: &'a AnalysisConfig,
}

impl<'a> Annotator<'a> {
    pub fn new(config: &'a AnalysisConfig) -> Self {
        Self { config }
    }

    /// Returns `metadata`'s parameter sets with common parameters removed.
    pub fn filtered_sets(&self, metadata: &CommandMetadata) -> Vec<ParameterSet> {
        metadata
            .parameter_sets
            .iter()
            .map(|set| ParameterSet {
                name: set.name.clone(),
                parameters: set
                    .parameters
                    .iter()
                    .filter(|p| !self.config.is_common(&p.name))
                    .cloned()
                    .collect(),
            })
            .collect()
    }

    /// Annotates every parameter set of `metadata`.
    ///
    /// In [`Mode::ShowParameters`] `tokens` is ignored.
    pub fn annotate(&self, metadata: &CommandMetadata, tokens: &[String], mode: Mode) -> Annotation {
        let sets = self.filtered_sets(metadata);

        let annotated = sets
            .iter()
            .map(|set| AnnotatedSet {
                name: set.name.clone(),
                parameters: set
                    .parameters
                    .iter()
                    .map(|p| {
                        let present = mode == Mode::Validate
                            && self
                                .config
                                .contains_name(tokens.iter().map(String::as_str), &p.name);
                        AnnotatedParameter {
                            name: p.name.clone(),
                            is_mandatory: p.is_mandatory,
                            category: categorize(mode, p.is_mandatory, present),
                            placeholder: p.placeholder(),
                        }
                    })
                    .collect(),
            })
            .collect();

        let not_found = match mode {
            Mode::Validate => self.not_found(&sets, tokens),
            Mode::ShowParameters => Vec::new(),
        };

        Annotation {
            command: metadata.command.clone(),
            mode,
            sets: annotated,
            not_found,
        }
    }

    /// Tokens that match no declared parameter, each reported once under the
    /// configured comparison, in first-occurrence order.
    fn not_found(&self, sets: &[ParameterSet], tokens: &[String]) -> Vec<String> {
        let declared = || {
            sets.iter()
                .flat_map(|s| s.parameters.iter())
                .map(|p| p.name.as_str())
        };

        let mut not_found: Vec<String> = Vec::new();
        for token in tokens {
            if self.config.is_common(token)
                || self.config.contains_name(declared(), token)
                || self.config.contains_name(not_found.iter().map(String::as_str), token)
            {
                continue;
            }
            not_found.push(token.clone());
        }
        not_found
    }
}

fn categorize(mode: Mode, is_mandatory: bool, present: bool) -> Category {
    match (mode, present, is_mandatory) {
        (Mode::Validate, true, _) => Category::Matched,
        (Mode::Validate, false, true) => Category::MandatoryMissing,
        (Mode::Validate, false, false) => Category::OptionalAbsent,
        (Mode::ShowParameters, _, true) => Category::Mandatory,
        (Mode::ShowParameters, _, false) => Category::Optional,
    }
}
