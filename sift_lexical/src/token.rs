//! Is a module containing the [`Token`] type.

use sift_base::source_text::{SourceElement, Span};

/// Represents a single lexical unit extracted from the source text.
///
/// A token carries no classification of its own; it is just the span of characters the tokenizer
/// cut out. A string token's raw text still includes its delimiting quote characters; they are
/// stripped when the token is classified as a string literal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token {
    /// Is the span that makes up the token.
    pub span: Span,
}

impl Token {
    /// Gets the raw text of the token.
    #[must_use]
    pub fn str(&self) -> &str { self.span.str() }

    /// Gets the line number the token starts on (starts at 1).
    #[must_use]
    pub fn line(&self) -> usize { self.span.start_location().line }
}

impl SourceElement for Token {
    fn span(&self) -> Span { self.span.clone() }
}
