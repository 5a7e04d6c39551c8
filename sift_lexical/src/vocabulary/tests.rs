use strum::IntoEnumIterator;

use super::{Category, Vocabulary, VocabularyError};

#[test]
fn default_vocabulary() {
    let vocabulary = Vocabulary::default();

    assert!(vocabulary.is_keyword("while"));
    assert!(vocabulary.is_operator("+"));
    assert!(vocabulary.is_punctuation(";"));
    assert!(vocabulary.is_punctuation_char('{'));
    assert!(vocabulary.is_terminator(";"));

    assert!(!vocabulary.is_keyword("when"));
    assert!(!vocabulary.is_operator("++"));
    assert!(!vocabulary.is_punctuation("();"));
    assert!(!vocabulary.is_terminator("x;"));
}

#[test]
fn overlapping_categories() {
    let error = Vocabulary::new(["if", "+"], ["+"], [";"], ';').unwrap_err();

    assert_eq!(error, VocabularyError::OverlappingCategories {
        entry: "+".to_string(),
        first: Category::Keyword,
        second: Category::Operator,
    });
}

#[test]
fn multi_character_punctuation() {
    let error = Vocabulary::new(["if"], ["+"], [";", "::"], ';').unwrap_err();

    assert_eq!(error, VocabularyError::MultiCharacterPunctuation {
        entry: "::".to_string()
    });
}

#[test]
fn terminator_not_punctuation() {
    let error = Vocabulary::new(["if"], ["+"], ["(", ")"], ';').unwrap_err();

    assert_eq!(error, VocabularyError::TerminatorNotPunctuation { terminator: ';' });
}

#[test]
fn category_names() {
    let names: Vec<String> = Category::iter().map(|x| x.to_string()).collect();

    assert_eq!(names, ["keyword", "operator", "punctuation"]);
}
