use proptest::{prop_assert_eq, proptest};
use sift_base::source_text::SourceText;

use super::TokenStream;
use crate::vocabulary::Vocabulary;

fn token_texts(text: &str) -> Vec<String> {
    let source_text = SourceText::memory(text);

    TokenStream::tokenize(&source_text, &Vocabulary::default())
        .iter()
        .map(|token| token.str().to_string())
        .collect()
}

#[test]
fn empty_input() {
    assert!(token_texts("").is_empty());
}

#[test]
fn declaration() {
    assert_eq!(token_texts("int x;"), ["int", "x", ";"]);
}

#[test]
fn keyword_and_parentheses() {
    assert_eq!(token_texts("if (1);"), ["if", "(", "1", ")", ";"]);
}

#[test]
fn whitespace_inside_string_is_retained() {
    assert_eq!(token_texts("\"hello world\";"), ["\"hello world\"", ";"]);
}

#[test]
fn consecutive_whitespace_separates_once() {
    assert_eq!(token_texts("1  +\t\n2"), ["1", "+", "2"]);
}

#[test]
fn unterminated_string_degrades_to_one_token() {
    assert_eq!(token_texts("\"abc"), ["\"abc"]);
}

// pins the long-standing behavior: punctuation is recognized before the in-string state, so a
// punctuation character splits a quoted string
#[test]
fn splits_string_at_punctuation() {
    assert_eq!(token_texts("\"a;b\""), ["\"a", ";", "b\""]);
}

// operators are not separators; an unspaced arithmetic expression stays one token
#[test]
fn operators_do_not_split() {
    assert_eq!(token_texts("1+2;"), ["1+2", ";"]);
}

#[test]
fn tokens_carry_line_numbers() {
    let source_text = SourceText::memory("int\nx;");
    let token_stream = TokenStream::tokenize(&source_text, &Vocabulary::default());

    assert_eq!(token_stream[0].line(), 1);
    assert_eq!(token_stream[1].line(), 2);
    assert_eq!(token_stream[2].line(), 2);
}

proptest! {
    #[test]
    fn tokenization_is_idempotent(source in ".*") {
        let source_text = SourceText::memory(source);
        let vocabulary = Vocabulary::default();

        let first = TokenStream::tokenize(&source_text, &vocabulary);
        let second = TokenStream::tokenize(&source_text, &vocabulary);

        prop_assert_eq!(first, second);
    }

    // for quote-free inputs, concatenating the raw token texts reproduces the input with its
    // whitespace removed
    #[test]
    fn reconstruction_preserves_non_whitespace(source in "[^\"]*") {
        let source_text = SourceText::memory(source.as_str());
        let token_stream = TokenStream::tokenize(&source_text, &Vocabulary::default());

        let reconstructed: String = token_stream
            .iter()
            .map(super::Token::str)
            .collect();
        let expected: String = source.chars().filter(|x| !x.is_whitespace()).collect();

        prop_assert_eq!(reconstructed, expected);
    }
}
