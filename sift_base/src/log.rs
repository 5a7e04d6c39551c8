//! Provides the functions related to logging/printing messages to the console.

use std::fmt::Display;

use derive_new::new;
use formatting::{Color, Style};

use crate::source_text::Span;

pub mod formatting;

/// Represents the severity of a log message to be printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
    Info,
    Warning,
}

/// Is a struct implementing [`Display`] that represents a log message to be displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Message<T> {
    /// The severity of the log message.
    pub severity: Severity,

    /// The message to be displayed.
    pub display: T,
}

impl<T: Display> Display for Message<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let log_header = Style::Bold.with(match self.severity {
            Severity::Error => Color::Red.with("[error]:"),
            Severity::Info => Color::Green.with("[info]:"),
            Severity::Warning => Color::Yellow.with("[warning]:"),
        });

        let message_part = Style::Bold.with(&self.display);

        write!(f, "{log_header} {message_part}")
    }
}

/// Structure implementing [`Display`] that prints the source line a span starts on, with a caret
/// marker under the spanned characters.
///
/// A span that crosses a line boundary is anchored at its starting line; the markers then run to
/// the end of that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct SourceSnippet<'a, T> {
    /// The span of the source text to be printed.
    pub span: &'a Span,

    /// The help message to be displayed.
    pub help_display: Option<T>,
}

impl<'a, T: Display> Display for SourceSnippet<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let start_location = self.span.start_location();
        let line = self
            .span
            .source_text()
            .get_line(start_location.line)
            .unwrap();

        // the column (1-based, exclusive) the markers stop at
        let marker_end = match self.span.end_location() {
            Some(end_location) if end_location.line == start_location.line => end_location.column,
            _ => line.chars().count() + 1,
        };

        let pipe = Style::Bold.with(Color::Cyan.with("┃"));

        // prints the source location
        writeln!(
            f,
            " {} {}",
            Style::Bold.with(Color::Cyan.with("-->")),
            format_args!(
                "{}:{}:{}",
                self.span.source_text().path().display(),
                start_location.line,
                start_location.column
            )
        )?;

        // prints the line the span starts on
        write!(f, " {pipe} ")?;
        for char in line.chars() {
            // if the char is tab, print 4 spaces
            if char == '\t' {
                write!(f, "    ")?;
            } else if char != '\n' && char != '\r' {
                write!(f, "{char}")?;
            }
        }
        writeln!(f)?;

        // prints the marker line
        write!(f, " {pipe} ")?;
        for (index, char) in line.chars().enumerate() {
            let column = index + 1;

            if column >= marker_end {
                break;
            }

            if column < start_location.column {
                write!(f, "{}", if char == '\t' { "    " } else { " " })?;
            } else {
                write!(f, "{}", Style::Bold.with(Color::Red.with('^')))?;
            }
        }
        writeln!(f)?;

        if let Some(help_display) = &self.help_display {
            writeln!(f, " {pipe} {}: {help_display}", Style::Bold.with("help"))?;
        }

        Ok(())
    }
}
