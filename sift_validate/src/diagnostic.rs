//! Contains all kinds of diagnostics the validator can report while classifying a token stream.

use std::fmt::Display;

use derive_more::From;
use enum_as_inner::EnumAsInner;
use sift_base::{
    log::{Message, Severity, SourceSnippet},
    source_text::{SourceElement, Span},
};

/// The token matched the vocabulary's keyword set.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Keyword {
    /// The span of the classified token.
    pub span: Span,
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = format!("valid keyword `{}`", self.span.str());
        write!(f, "{}", Message::new(Severity::Info, message))
    }
}

/// The token matched the vocabulary's operator set.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Operator {
    /// The span of the classified token.
    pub span: Span,
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = format!("valid operator `{}`", self.span.str());
        write!(f, "{}", Message::new(Severity::Info, message))
    }
}

/// The token matched the vocabulary's punctuation set.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Punctuation {
    /// The span of the classified token.
    pub span: Span,
}

impl Display for Punctuation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = format!("valid punctuation `{}`", self.span.str());
        write!(f, "{}", Message::new(Severity::Info, message))
    }
}

/// The token consists solely of decimal digits.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Number {
    /// The span of the classified token.
    pub span: Span,
}

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = format!("valid number `{}`", self.span.str());
        write!(f, "{}", Message::new(Severity::Info, message))
    }
}

/// The token begins and ends with a double quote.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StringLiteral {
    /// The span of the classified token, including the delimiting quotes.
    pub span: Span,
}

impl StringLiteral {
    /// Gets the literal content with the two delimiting quote characters stripped.
    #[must_use]
    pub fn content(&self) -> &str {
        let text = self.span.str();
        &text[1..text.len() - 1]
    }
}

impl Display for StringLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = format!("valid string `{}`", self.content());
        write!(f, "{}", Message::new(Severity::Info, message))
    }
}

/// The token matched no category of the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InvalidToken {
    /// The span of the unclassifiable token.
    pub span: Span,
}

impl InvalidToken {
    /// Gets the line number the invalid token starts on (starts at 1).
    #[must_use]
    pub fn line(&self) -> usize { self.span.start_location().line }
}

impl Display for InvalidToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = format!("invalid token `{}` at line {}", self.span.str(), self.line());

        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Error, message),
            SourceSnippet::new(&self.span, Option::<i32>::None)
        )
    }
}

/// The token stream does not end with the statement terminator.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MissingTerminator {
    /// The span of the last token in the stream.
    pub span: Span,

    /// The statement terminator the stream should end with.
    pub terminator: char,
}

impl Display for MissingTerminator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = format!("missing `{}` at the end of the code", self.terminator);
        let help = format!("the last statement is not terminated by `{}`", self.terminator);

        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Error, message),
            SourceSnippet::new(&self.span, Some(help))
        )
    }
}

/// Is an enumeration containing all kinds of diagnostics the validator can report.
///
/// One diagnostic is reported per classified token; [`MissingTerminator`] is reported at most
/// once, after the walk completes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Diagnostic {
    Keyword(Keyword),
    Operator(Operator),
    Punctuation(Punctuation),
    Number(Number),
    StringLiteral(StringLiteral),
    InvalidToken(InvalidToken),
    MissingTerminator(MissingTerminator),
}

impl Diagnostic {
    /// Gets the severity the diagnostic is reported with.
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::Keyword(..)
            | Self::Operator(..)
            | Self::Punctuation(..)
            | Self::Number(..)
            | Self::StringLiteral(..) => Severity::Info,
            Self::InvalidToken(..) | Self::MissingTerminator(..) => Severity::Error,
        }
    }
}

impl SourceElement for Diagnostic {
    fn span(&self) -> Span {
        match self {
            Self::Keyword(diagnostic) => diagnostic.span.clone(),
            Self::Operator(diagnostic) => diagnostic.span.clone(),
            Self::Punctuation(diagnostic) => diagnostic.span.clone(),
            Self::Number(diagnostic) => diagnostic.span.clone(),
            Self::StringLiteral(diagnostic) => diagnostic.span.clone(),
            Self::InvalidToken(diagnostic) => diagnostic.span.clone(),
            Self::MissingTerminator(diagnostic) => diagnostic.span.clone(),
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keyword(diagnostic) => diagnostic.fmt(f),
            Self::Operator(diagnostic) => diagnostic.fmt(f),
            Self::Punctuation(diagnostic) => diagnostic.fmt(f),
            Self::Number(diagnostic) => diagnostic.fmt(f),
            Self::StringLiteral(diagnostic) => diagnostic.fmt(f),
            Self::InvalidToken(diagnostic) => diagnostic.fmt(f),
            Self::MissingTerminator(diagnostic) => diagnostic.fmt(f),
        }
    }
}
