//! Contains the [`Vocabulary`] type: the fixed sets of recognized keywords, operators, and
//! punctuation symbols shared read-only by the tokenizer and the validator.

use std::collections::BTreeSet;

use getset::{CopyGetters, Getters};
use lazy_static::lazy_static;
use strum_macros::{Display, EnumIter};
use thiserror::Error;

/// Is an enumeration naming the three token categories a [`Vocabulary`] recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[allow(missing_docs)]
pub enum Category {
    Keyword,
    Operator,
    Punctuation,
}

/// Is an error that is returned when constructing a [`Vocabulary`] from sets that violate its
/// invariants.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Error)]
pub enum VocabularyError {
    /// The same entry appears in more than one category set, making classification ambiguous.
    #[error("the entry `{entry}` appears in both the {first} set and the {second} set")]
    OverlappingCategories {
        /// The entry present in both sets.
        entry: String,

        /// The first category the entry appears in.
        first: Category,

        /// The second category the entry appears in.
        second: Category,
    },

    /// Punctuation is emitted as single-character tokens, so every entry must be one character.
    #[error("the punctuation entry `{entry}` is not a single character")]
    MultiCharacterPunctuation {
        /// The offending punctuation entry.
        entry: String,
    },

    /// The statement terminator must itself be a recognized punctuation symbol.
    #[error("the statement terminator `{terminator}` is not a member of the punctuation set")]
    TerminatorNotPunctuation {
        /// The configured terminator.
        terminator: char,
    },
}

/// Represents the three fixed token category sets plus the statement terminator symbol.
///
/// A [`Vocabulary`] is immutable after construction; the tokenizer uses its punctuation set to
/// split tokens and the validator uses all three sets to classify them.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct Vocabulary {
    /// Gets the set of recognized keywords.
    #[get = "pub"]
    keywords: BTreeSet<String>,

    /// Gets the set of recognized operators.
    #[get = "pub"]
    operators: BTreeSet<String>,

    /// Gets the set of recognized punctuation characters.
    #[get = "pub"]
    punctuation: BTreeSet<char>,

    /// Gets the statement terminator symbol.
    #[get_copy = "pub"]
    terminator: char,
}

impl Vocabulary {
    /// Creates a new [`Vocabulary`] from the given category sets and terminator.
    ///
    /// # Errors
    /// - [`VocabularyError::OverlappingCategories`]: an entry appears in more than one set.
    /// - [`VocabularyError::MultiCharacterPunctuation`]: a punctuation entry is not a single
    ///   character.
    /// - [`VocabularyError::TerminatorNotPunctuation`]: the terminator is not in the punctuation
    ///   set.
    pub fn new(
        keywords: impl IntoIterator<Item = impl Into<String>>,
        operators: impl IntoIterator<Item = impl Into<String>>,
        punctuation: impl IntoIterator<Item = impl Into<String>>,
        terminator: char,
    ) -> Result<Self, VocabularyError> {
        let keywords: BTreeSet<String> = keywords.into_iter().map(Into::into).collect();
        let operators: BTreeSet<String> = operators.into_iter().map(Into::into).collect();
        let punctuation_entries: BTreeSet<String> =
            punctuation.into_iter().map(Into::into).collect();

        let sets = [
            (Category::Keyword, &keywords),
            (Category::Operator, &operators),
            (Category::Punctuation, &punctuation_entries),
        ];

        // classification is unambiguous only if the three sets are pairwise disjoint
        for (index, (first, first_set)) in sets.iter().enumerate() {
            for (second, second_set) in &sets[index + 1..] {
                if let Some(entry) = first_set.intersection(second_set).next() {
                    return Err(VocabularyError::OverlappingCategories {
                        entry: entry.clone(),
                        first: *first,
                        second: *second,
                    });
                }
            }
        }

        let mut punctuation = BTreeSet::new();
        for entry in punctuation_entries {
            let mut chars = entry.chars();

            match (chars.next(), chars.next()) {
                (Some(char), None) => {
                    punctuation.insert(char);
                }
                _ => return Err(VocabularyError::MultiCharacterPunctuation { entry }),
            }
        }

        if !punctuation.contains(&terminator) {
            return Err(VocabularyError::TerminatorNotPunctuation { terminator });
        }

        Ok(Self {
            keywords,
            operators,
            punctuation,
            terminator,
        })
    }

    /// Checks if the given token text is a recognized keyword.
    #[must_use]
    pub fn is_keyword(&self, text: &str) -> bool { self.keywords.contains(text) }

    /// Checks if the given token text is a recognized operator.
    #[must_use]
    pub fn is_operator(&self, text: &str) -> bool { self.operators.contains(text) }

    /// Checks if the given token text is a recognized punctuation symbol.
    #[must_use]
    pub fn is_punctuation(&self, text: &str) -> bool {
        let mut chars = text.chars();

        matches!(
            (chars.next(), chars.next()),
            (Some(char), None) if self.punctuation.contains(&char)
        )
    }

    /// Checks if the given character is a recognized punctuation symbol.
    #[must_use]
    pub fn is_punctuation_char(&self, character: char) -> bool {
        self.punctuation.contains(&character)
    }

    /// Checks if the given token text is the statement terminator.
    #[must_use]
    pub fn is_terminator(&self, text: &str) -> bool {
        let mut chars = text.chars();

        matches!((chars.next(), chars.next()), (Some(char), None) if char == self.terminator)
    }
}

impl Default for Vocabulary {
    /// The default vocabulary of the checked language: `if else while for int float string`,
    /// the four arithmetic operators, parentheses/braces/semicolon punctuation, and `;` as the
    /// statement terminator.
    fn default() -> Self {
        lazy_static! {
            static ref DEFAULT_VOCABULARY: Vocabulary = Vocabulary::new(
                ["if", "else", "while", "for", "int", "float", "string"],
                ["+", "-", "*", "/"],
                ["(", ")", "{", "}", ";"],
                ';',
            )
            .unwrap();
        }

        DEFAULT_VOCABULARY.clone()
    }
}

#[cfg(test)]
mod tests;
