//! Contains the [`Validator`] logic.

use derive_new::new;
use getset::{CopyGetters, Getters};
use sift_base::diagnostic::{Handler, Storage};
use sift_lexical::{token::Token, token_stream::TokenStream, vocabulary::Vocabulary};

use crate::diagnostic::{
    Diagnostic, InvalidToken, Keyword, MissingTerminator, Number, Operator, Punctuation,
    StringLiteral,
};

/// Walks a [`TokenStream`] by index.
#[derive(Debug, Clone, Copy, new)]
struct Cursor<'a> {
    token_stream: &'a TokenStream,

    #[new(default)]
    current_index: usize,
}

impl<'a> Cursor<'a> {
    /// Checks if the cursor has reached the end of the [`TokenStream`].
    fn is_end(&self) -> bool { self.current_index >= self.token_stream.len() }

    /// Returns the [`Token`] pointed to by the `current_index`, if any.
    fn peek(&self) -> Option<&'a Token> { self.token_stream.get(self.current_index) }

    /// Forwards the `current_index` by 1 if the cursor is not at the end.
    fn forward(&mut self) {
        if !self.is_end() {
            self.current_index += 1;
        }
    }

    /// Makes the cursor stop at the first token that satisfies the predicate, or at the last
    /// token of the stream, whichever comes first.
    fn stop_at(&mut self, predicate: impl Fn(&Token) -> bool) {
        while self.current_index + 1 < self.token_stream.len() {
            if predicate(&self.token_stream[self.current_index]) {
                return;
            }

            self.current_index += 1;
        }
    }
}

/// Classifies every token of a [`TokenStream`] against a [`Vocabulary`], reporting one
/// [`Diagnostic`] per classified token through a [`Handler`].
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct Validator {
    /// Gets the vocabulary the validator classifies against.
    #[get = "pub"]
    vocabulary: Vocabulary,
}

impl Validator {
    /// Validates the given token stream.
    ///
    /// The walk is strictly left to right. Each token is classified in priority order: keyword,
    /// operator, punctuation, number, string, invalid. Upon an invalid token the validator
    /// recovers by skipping forward to the next statement terminator (or to the final token);
    /// the skipped tokens and the token the recovery lands on receive no diagnostic.
    ///
    /// After the walk, a [`MissingTerminator`] diagnostic is reported when a non-empty stream
    /// does not end with the terminator.
    ///
    /// # Returns
    /// Whether the stream ends with the statement terminator. An empty stream returns `false`
    /// and reports nothing.
    pub fn validate(&self, token_stream: &TokenStream, handler: &dyn Handler<Diagnostic>) -> bool {
        let mut cursor = Cursor::new(token_stream);

        while let Some(token) = cursor.peek() {
            let diagnostic = self.classify(token);
            let recover = diagnostic.is_invalid_token();

            handler.receive(diagnostic);

            if recover {
                // skip ahead to the next statement terminator, diagnosing nothing in between
                cursor.stop_at(|token| self.vocabulary.is_terminator(token.str()));
            }

            // steps past the classified token, or past the token the recovery stopped at
            cursor.forward();
        }

        match token_stream.last() {
            Some(last) if self.vocabulary.is_terminator(last.str()) => true,
            Some(last) => {
                handler.receive(
                    MissingTerminator {
                        span: last.span.clone(),
                        terminator: self.vocabulary.terminator(),
                    }
                    .into(),
                );

                false
            }
            // an empty stream has no terminator and nothing to report
            None => false,
        }
    }

    /// Validates the given token stream, collecting the diagnostics into a [`ValidationResult`].
    #[must_use]
    pub fn validate_to_result(&self, token_stream: &TokenStream) -> ValidationResult {
        let storage: Storage<Diagnostic> = Storage::new();
        let trailing_terminator = self.validate(token_stream, &storage);

        ValidationResult {
            diagnostics: storage.into_vec(),
            trailing_terminator,
        }
    }

    fn classify(&self, token: &Token) -> Diagnostic {
        let text = token.str();
        let span = token.span.clone();

        if self.vocabulary.is_keyword(text) {
            Keyword { span }.into()
        } else if self.vocabulary.is_operator(text) {
            Operator { span }.into()
        } else if self.vocabulary.is_punctuation(text) {
            Punctuation { span }.into()
        } else if !text.is_empty() && text.chars().all(|character| character.is_ascii_digit()) {
            Number { span }.into()
        } else if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
            StringLiteral { span }.into()
        } else {
            InvalidToken { span }.into()
        }
    }
}

/// Is the terminal outcome of validating a token stream.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct ValidationResult {
    /// Gets the ordered list of diagnostics reported during the walk.
    #[get = "pub"]
    diagnostics: Vec<Diagnostic>,

    /// Gets whether the stream ends with the statement terminator.
    ///
    /// `false` for an empty stream.
    #[get_copy = "pub"]
    trailing_terminator: bool,
}

impl ValidationResult {
    /// Dissolves this struct into a tuple of its components.
    #[must_use]
    pub fn dissolve(self) -> (Vec<Diagnostic>, bool) {
        (self.diagnostics, self.trailing_terminator)
    }
}

#[cfg(test)]
mod tests;
