//! Command-line tokenization.
//!
//! Splits raw command text into the command name and the candidate parameter
//! names it mentions. This is a heuristic, not a shell parser: every
//! whitespace-preceded `-word` is taken as a parameter, so values that start
//! with a dash (`-b.txt`) are reported as parameters too, and quotes give no
//! protection.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, SyntaxError};

static PARAMETER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s-(\S+)").expect("static regex must compile"));

/// A command line split into command name and parameter tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedCommand {
    /// First whitespace-delimited run of the input.
    pub command: String,
    /// Parameter names without their leading dash, first occurrence order,
    /// duplicates collapsed.
    pub tokens: Vec<String>,
}

impl TokenizedCommand {
    /// Returns `true` if no parameter tokens were found.
    pub fn has_no_parameters(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Tokenizes a raw command line.
///
/// # Errors
///
/// Returns [`SyntaxError::NoCommandFound`] if `raw` is empty or contains only
/// whitespace.
///
/// # Examples
///
/// ```
/// use param_syntax_core::tokenize;
///
/// let parsed = tokenize("Copy-Item -Path a.txt -Destination b -Force").unwrap();
/// assert_eq!(parsed.command, "Copy-Item");
/// assert_eq!(parsed.tokens, vec!["Path", "Destination", "Force"]);
///
/// assert!(tokenize("   ").is_err());
/// ```
pub fn tokenize(raw: &str) -> Result<TokenizedCommand> {
    let command = raw
        .split_whitespace()
        .next()
        .ok_or(SyntaxError::NoCommandFound)?
        .to_string();

    let mut tokens: Vec<String> = Vec::new();
    for capture in PARAMETER_RE.captures_iter(raw) {
        let token = capture[1].trim();
        if !tokens.iter().any(|seen| seen == token) {
            tokens.push(token.to_string());
        }
    }

    Ok(TokenizedCommand { command, tokens })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_name_is_first_run() {
        assert_eq!(tokenize("Get-Process").unwrap().command, "Get-Process");
        assert_eq!(tokenize("  Get-Process   -Name x").unwrap().command, "Get-Process");
        assert_eq!(tokenize("\tfoo\nbar").unwrap().command, "foo");
    }

    #[test]
    fn test_empty_input_has_no_command() {
        assert_eq!(tokenize(""), Err(SyntaxError::NoCommandFound));
        assert_eq!(tokenize(" \t\n "), Err(SyntaxError::NoCommandFound));
    }

    #[test]
    fn test_tokens_preserve_case_and_strip_dash() {
        let parsed = tokenize("Foo -Bar -baz").unwrap();
        assert_eq!(parsed.tokens, vec!["Bar", "baz"]);
    }

    #[test]
    fn test_values_are_not_tokens() {
        let parsed = tokenize("Get-ChildItem -Path C:\\Temp -Filter *.log").unwrap();
        assert_eq!(parsed.tokens, vec!["Path", "Filter"]);
    }

    #[test]
    fn test_duplicates_collapse_in_first_occurrence_order() {
        let parsed = tokenize("Foo -B -A -B").unwrap();
        assert_eq!(parsed.tokens, vec!["B", "A"]);
    }

    #[test]
    fn test_no_tokens() {
        let parsed = tokenize("Get-Date").unwrap();
        assert!(parsed.has_no_parameters());

        // A lone dash is not a parameter.
        let parsed = tokenize("Foo - bar").unwrap();
        assert!(parsed.has_no_parameters());
    }

    #[test]
    fn test_dash_prefixed_values_are_taken_as_parameters() {
        let parsed = tokenize("Copy-Item -Path a.txt -b.txt").unwrap();
        assert_eq!(parsed.tokens, vec!["Path", "b.txt"]);

        let parsed = tokenize(r#"Write-Host -Object "x -Fake""#).unwrap();
        assert_eq!(parsed.tokens, vec!["Object", "Fake\""]);
    }

    #[test]
    fn test_double_dash_keeps_one_dash() {
        let parsed = tokenize("tool --verbose").unwrap();
        assert_eq!(parsed.tokens, vec!["-verbose"]);
    }

    #[test]
    fn test_colon_bound_value_stays_in_token() {
        let parsed = tokenize("Remove-Item -Path x -Confirm:$false").unwrap();
        assert_eq!(parsed.tokens, vec!["Path", "Confirm:$false"]);
    }
}
