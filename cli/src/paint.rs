//! Maps semantic styles to terminal colors.

use std::io::IsTerminal;

use nu_ansi_term::{Color, Style as AnsiStyle};
use param_syntax_core::{Style, StyledLine};

/// When to emit ANSI color codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    /// Color only when stdout is a terminal and `NO_COLOR` is unset.
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(choice: ColorChoice) -> Self {
        let enabled = match choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
            }
        };
        Self { enabled }
    }

    pub fn paint_line(&self, line: &StyledLine) -> String {
        if !self.enabled {
            return line.text();
        }
        line.spans
            .iter()
            .map(|span| match span.style {
                Some(style) => ansi_style(style).paint(span.text.as_str()).to_string(),
                None => span.text.clone(),
            })
            .collect()
    }
}

fn ansi_style(style: Style) -> AnsiStyle {
    match style {
        Style::CommandName => Color::Cyan.bold(),
        Style::MandatoryParam => Color::Yellow.normal(),
        Style::OptionalParam => Color::White.normal(),
        Style::ValuePlaceholder => Color::DarkGray.normal(),
        Style::MatchedMarker => Color::Green.bold(),
        Style::MandatoryMissingMarker => Color::Red.bold(),
        Style::NotFoundParam => Color::Magenta.normal(),
        Style::Emphasis => AnsiStyle::new().bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StyledLine {
        StyledLine::new()
            .styled("Copy-Item", Style::CommandName)
            .plain(" ")
            .styled("-Path", Style::MandatoryParam)
    }

    #[test]
    fn test_never_emits_plain_text() {
        let painter = Painter::new(ColorChoice::Never);
        assert_eq!(painter.paint_line(&sample()), "Copy-Item -Path");
    }

    #[test]
    fn test_always_emits_escape_codes() {
        let painter = Painter::new(ColorChoice::Always);
        let painted = painter.paint_line(&sample());
        assert!(painted.contains("\u{1b}["));
        assert!(painted.contains("Copy-Item"));
        assert!(painted.contains("-Path"));
    }
}
