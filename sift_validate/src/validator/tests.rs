use proptest::{prop_assert, proptest};
use sift_base::source_text::SourceText;
use sift_lexical::{token_stream::TokenStream, vocabulary::Vocabulary};

use super::{ValidationResult, Validator};
use crate::diagnostic::Diagnostic;

fn validate(text: &str) -> ValidationResult {
    let source_text = SourceText::memory(text);
    let vocabulary = Vocabulary::default();
    let token_stream = TokenStream::tokenize(&source_text, &vocabulary);

    Validator::new(vocabulary).validate_to_result(&token_stream)
}

fn describe(diagnostic: &Diagnostic) -> String {
    match diagnostic {
        Diagnostic::Keyword(x) => format!("keyword {}", x.span.str()),
        Diagnostic::Operator(x) => format!("operator {}", x.span.str()),
        Diagnostic::Punctuation(x) => format!("punctuation {}", x.span.str()),
        Diagnostic::Number(x) => format!("number {}", x.span.str()),
        Diagnostic::StringLiteral(x) => format!("string {}", x.content()),
        Diagnostic::InvalidToken(x) => format!("invalid {}", x.span.str()),
        Diagnostic::MissingTerminator(..) => "missing terminator".to_string(),
    }
}

fn describe_all(result: &ValidationResult) -> Vec<String> {
    result.diagnostics().iter().map(describe).collect()
}

#[test]
fn declaration_with_unknown_identifier() {
    let result = validate("int x;");

    assert_eq!(describe_all(&result), ["keyword int", "invalid x"]);
    assert!(result.trailing_terminator());
}

#[test]
fn unterminated_expression() {
    let result = validate("1 + 2");

    assert_eq!(describe_all(&result), [
        "number 1",
        "operator +",
        "number 2",
        "missing terminator"
    ]);
    assert!(!result.trailing_terminator());
}

#[test]
fn string_statement() {
    let result = validate("\"hello world\";");

    assert_eq!(describe_all(&result), [
        "string hello world",
        "punctuation ;"
    ]);
    assert!(result.trailing_terminator());
}

#[test]
fn empty_input() {
    let result = validate("");

    assert!(result.diagnostics().is_empty());
    assert!(!result.trailing_terminator());
}

#[test]
fn keyword_with_parenthesized_number() {
    let result = validate("if (1);");

    assert_eq!(describe_all(&result), [
        "keyword if",
        "punctuation (",
        "number 1",
        "punctuation )",
        "punctuation ;"
    ]);
    assert!(result.trailing_terminator());
}

#[test]
fn recovery_skips_to_terminator() {
    let result = validate("int @ x y ; int");

    // the tokens between `@` and the terminator are skipped silently, and so is the
    // terminator the recovery lands on
    assert_eq!(describe_all(&result), [
        "keyword int",
        "invalid @",
        "keyword int",
        "missing terminator"
    ]);
    assert!(!result.trailing_terminator());
}

#[test]
fn recovery_without_terminator_stops_at_last_token() {
    let result = validate("@ x y");

    assert_eq!(describe_all(&result), ["invalid @", "missing terminator"]);
    assert!(!result.trailing_terminator());
}

#[test]
fn recovery_landing_terminator_still_passes_terminal_check() {
    let result = validate("@;");

    // the terminator the recovery lands on gets no diagnostic of its own, but the stream
    // still ends with it
    assert_eq!(describe_all(&result), ["invalid @"]);
    assert!(result.trailing_terminator());
}

#[test]
fn single_invalid_token() {
    let result = validate("@");

    assert_eq!(describe_all(&result), ["invalid @", "missing terminator"]);
    assert!(!result.trailing_terminator());
}

#[test]
fn invalid_token_reports_real_line() {
    let result = validate("int\n@;");

    let invalid = result.diagnostics()[1].as_invalid_token().unwrap();
    assert_eq!(invalid.line(), 2);
}

#[test]
fn invalid_token_display() {
    let result = validate("int x;");

    let rendered = result.diagnostics()[1].to_string();
    assert!(rendered.contains("invalid token `x` at line 1"));
    assert!(rendered.contains("<memory>:1:5"));
}

proptest! {
    // the validator terminates for any input and reports at most one diagnostic per token,
    // plus the terminal check
    #[test]
    fn validation_always_completes(source in ".*") {
        let source_text = SourceText::memory(source);
        let vocabulary = Vocabulary::default();
        let token_stream = TokenStream::tokenize(&source_text, &vocabulary);

        let result = Validator::new(vocabulary).validate_to_result(&token_stream);

        prop_assert!(result.diagnostics().len() <= token_stream.len() + 1);

        if token_stream.is_empty() {
            prop_assert!(result.diagnostics().is_empty());
        } else {
            prop_assert!(!result.diagnostics().is_empty());
        }
    }
}
