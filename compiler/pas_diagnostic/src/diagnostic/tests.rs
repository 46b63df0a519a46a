use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_new_renders_one_based_position() {
    let diag = Diagnostic::new(ErrorCode::UNTERMINATED_STRING, Position::new(0, 4));
    assert_eq!(diag.line, 1);
    assert_eq!(diag.column, 5);
    assert_eq!(diag.message, "unterminated string");
    assert_eq!(diag.position(), Position::new(0, 4));
}

#[test]
fn test_unknown_code_uses_placeholder_message() {
    let diag = Diagnostic::new(ErrorCode::new(777), Position::START);
    assert_eq!(diag.message, "unknown error");
}

#[test]
fn test_with_message_overrides_table() {
    let diag = Diagnostic::new(ErrorCode::INVALID_CHARACTER, Position::START)
        .with_message("invalid character '?'");
    assert_eq!(diag.message, "invalid character '?'");
    assert_eq!(diag.code, ErrorCode::INVALID_CHARACTER);
}

#[test]
fn test_expected_names_token() {
    let diag = Diagnostic::expected(";", Position::new(2, 10));
    assert_eq!(diag.code, ErrorCode::EXPECTED_TOKEN);
    assert_eq!(diag.message, "expected ';'");
    assert_eq!((diag.line, diag.column), (3, 11));
}

#[test]
fn test_display() {
    let diag = Diagnostic::new(ErrorCode::EXPECTED_END, Position::new(1, 0));
    assert_eq!(diag.to_string(), "2:1: error 408: expected 'end'");
}

#[test]
fn test_vec_sink_numbers_in_insertion_order() {
    let mut sink: Vec<Diagnostic> = Vec::new();
    DiagnosticSink::push(&mut sink, Diagnostic::new(ErrorCode::EXPECTED_DOT, Position::new(5, 0)));
    let _ = sink.report(Diagnostic::new(ErrorCode::EXPECTED_BEGIN, Position::new(1, 0)));
    assert_eq!(sink.error_count(), 2);
    assert_eq!(sink[0].number, 1);
    assert_eq!(sink[1].number, 2);
}

#[test]
fn test_same_condition_twice_is_kept_twice() {
    let mut sink: Vec<Diagnostic> = Vec::new();
    let diag = Diagnostic::new(ErrorCode::INVALID_CHARACTER, Position::new(0, 3));
    let _ = sink.report(diag.clone());
    let _ = sink.report(diag);
    assert_eq!(sink.len(), 2);
}

#[test]
fn test_mut_ref_forwards() {
    fn report_one(mut sink: impl DiagnosticSink) {
        let _ = sink.report(Diagnostic::new(ErrorCode::EXPECTED_TYPE, Position::START));
    }
    let mut sink: Vec<Diagnostic> = Vec::new();
    report_one(&mut sink);
    assert_eq!(sink.len(), 1);
}
