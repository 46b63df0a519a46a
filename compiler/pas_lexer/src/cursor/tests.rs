use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_normalize_line_endings() {
    assert_eq!(normalize_line_endings("a\r\nb"), "a\nb");
    assert_eq!(normalize_line_endings("a\rb"), "a\nb");
    assert_eq!(normalize_line_endings("a\r\r\nb"), "a\n\nb");
    assert_eq!(normalize_line_endings("a\nb"), "a\nb");
}

#[test]
fn test_empty_source_is_eof() {
    let cursor = Cursor::new("");
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), EOF_CHAR);
    assert_eq!(cursor.position(), Position::START);
}

#[test]
fn test_advance_tracks_columns() {
    let mut cursor = Cursor::new("abc");
    assert_eq!(cursor.current(), 'a');
    assert_eq!(cursor.peek(), 'b');
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.current(), 'c');
    assert_eq!(cursor.position(), Position::new(0, 2));
    assert_eq!(cursor.peek(), EOF_CHAR);
}

#[test]
fn test_advance_over_newline_resets_column() {
    let mut cursor = Cursor::new("ab\ncd");
    for _ in 0..3 {
        cursor.advance();
    }
    assert_eq!(cursor.current(), 'c');
    assert_eq!(cursor.position(), Position::new(1, 0));
}

#[test]
fn test_crlf_counts_as_one_break() {
    let mut cursor = Cursor::new("a\r\nb");
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.current(), 'b');
    assert_eq!(cursor.position(), Position::new(1, 0));
}

#[test]
fn test_advance_at_eof_is_noop() {
    let mut cursor = Cursor::new("x");
    cursor.advance();
    assert!(cursor.is_eof());
    let before = cursor.position();
    cursor.advance();
    assert_eq!(cursor.position(), before);
    assert_eq!(cursor.offset(), 1);
}

#[test]
fn test_interior_nul_is_not_eof() {
    let cursor = Cursor::new("\0x");
    assert_eq!(cursor.current(), EOF_CHAR);
    assert!(!cursor.is_eof());
}

#[test]
fn test_eat_while_stops_at_predicate() {
    let mut cursor = Cursor::new("123abc");
    cursor.eat_while(|c| c.is_ascii_digit());
    assert_eq!(cursor.current(), 'a');
    assert_eq!(cursor.offset(), 3);
}

#[test]
fn test_clamped_position_after_end() {
    let mut cursor = Cursor::new("ab");
    cursor.eat_while(|_| true);
    assert_eq!(cursor.position(), Position::new(0, 2));
    assert_eq!(cursor.clamped_position(), Position::new(0, 1));
}

#[test]
fn test_lines_split_normalized_text() {
    let cursor = Cursor::new("one\r\ntwo\rthree");
    assert_eq!(cursor.lines(), vec!["one", "two", "three"]);
    assert_eq!(cursor.text(), "one\ntwo\nthree");
}

#[test]
fn test_record_error_defaults() {
    let mut cursor = Cursor::new("ab");
    cursor.advance();
    let mut sink: Vec<Diagnostic> = Vec::new();
    let _ = cursor.record_error(&mut sink, ErrorCode::INVALID_CHARACTER, None, None);
    assert_eq!(sink.len(), 1);
    assert_eq!((sink[0].line, sink[0].column), (1, 2));
    assert_eq!(sink[0].message, "invalid character");
}

#[test]
fn test_record_error_explicit_position_and_message() {
    let cursor = Cursor::new("ab");
    let mut sink: Vec<Diagnostic> = Vec::new();
    let _ = cursor.record_error(
        &mut sink,
        ErrorCode::new(1234),
        Some("custom".to_owned()),
        Some(Position::new(3, 4)),
    );
    assert_eq!((sink[0].line, sink[0].column), (4, 5));
    assert_eq!(sink[0].message, "custom");
}

#[test]
fn test_record_error_unknown_code_message() {
    let cursor = Cursor::new("");
    let mut sink: Vec<Diagnostic> = Vec::new();
    let _ = cursor.record_error(&mut sink, ErrorCode::new(1234), None, None);
    assert_eq!(sink[0].message, "unknown error");
}
