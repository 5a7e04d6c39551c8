#[test]
fn test_get_line_byte_positions() {
    let text = "Hello\nworld\r\n!\rtes";
    let byte_positions = super::get_line_byte_positions(text);
    assert_eq!(byte_positions, vec![0..6, 6..13, 13..15, 15..18]);
}

#[test]
fn test_memory_source() {
    const TEST_TEXT: &str = "test text";
    let source_text = super::SourceText::memory(TEST_TEXT);
    assert_eq!(source_text.content(), TEST_TEXT);
    assert_eq!(source_text.path().to_str(), Some("<memory>"));
}

#[test]
fn test_get_location() {
    let source_text = super::SourceText::memory("int x;\nint y;");

    assert_eq!(
        source_text.get_location(0),
        Some(super::Location { line: 1, column: 1 })
    );
    assert_eq!(
        source_text.get_location(4),
        Some(super::Location { line: 1, column: 5 })
    );
    assert_eq!(
        source_text.get_location(7),
        Some(super::Location { line: 2, column: 1 })
    );
}

#[test]
fn test_span_str() {
    let source_text = super::SourceText::memory("while (1);");

    let span = super::Span::new(source_text.clone(), 0, 5).unwrap();
    assert_eq!(span.str(), "while");

    let span = super::Span::to_end(source_text, 6).unwrap();
    assert_eq!(span.str(), "(1);");
}
