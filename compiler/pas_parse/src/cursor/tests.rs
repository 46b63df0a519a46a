use super::*;
use pretty_assertions::assert_eq;

fn tokens() -> Vec<Token> {
    vec![
        Token::new(TokenKind::Begin, Position::new(0, 0)),
        Token::new(TokenKind::Ident, Position::new(1, 2)),
        Token::new(TokenKind::End, Position::new(2, 0)),
    ]
}

#[test]
fn test_new_cursor_is_at_first_token() {
    let tokens = tokens();
    let cursor = Cursor::new(&tokens);
    assert_eq!(cursor.current(), TokenKind::Begin);
    assert_eq!(cursor.position(), 0);
    assert_eq!(cursor.token_count(), 3);
    assert_eq!(cursor.previous_position(), Position::START);
    assert_eq!(cursor.current_position(), Position::new(0, 0));
}

#[test]
fn test_peek_past_end_is_eof() {
    let tokens = tokens();
    let cursor = Cursor::new(&tokens);
    assert_eq!(cursor.peek(1), TokenKind::Ident);
    assert_eq!(cursor.peek(2), TokenKind::End);
    assert_eq!(cursor.peek(3), TokenKind::Eof);
    assert_eq!(cursor.peek(100), TokenKind::Eof);
}

#[test]
fn test_advance_moves_previous_position() {
    let tokens = tokens();
    let mut cursor = Cursor::new(&tokens);
    cursor.advance();
    assert!(cursor.check(TokenKind::Ident));
    assert_eq!(cursor.previous_position(), Position::new(0, 0));
    assert_eq!(cursor.current_position(), Position::new(1, 2));
}

#[test]
fn test_exhausted_cursor() {
    let tokens = tokens();
    let mut cursor = Cursor::new(&tokens);
    for _ in 0..5 {
        cursor.advance();
    }
    assert!(cursor.is_at_end());
    assert_eq!(cursor.position(), 3);
    assert_eq!(cursor.current(), TokenKind::Eof);
    assert_eq!(cursor.current_position(), Position::new(2, 0));
}

#[test]
fn test_empty_stream() {
    let cursor = Cursor::new(&[]);
    assert!(cursor.is_at_end());
    assert_eq!(cursor.current(), TokenKind::Eof);
    assert_eq!(cursor.current_position(), Position::START);
}
