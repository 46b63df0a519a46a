use super::*;
use crate::{DiagnosticQueue, DiagnosticSink, ErrorCode};
use pas_ir::Position;
use pretty_assertions::assert_eq;

fn render_listing(lines: &[String], diagnostics: &[Diagnostic]) -> String {
    let mut emitter = ListingEmitter::new(Vec::new(), lines, ColorMode::Never, false);
    emitter.emit_all(diagnostics).unwrap_or_else(|e| panic!("write failed: {e}"));
    emitter
        .emit_summary(diagnostics.len())
        .unwrap_or_else(|e| panic!("write failed: {e}"));
    String::from_utf8(emitter.into_inner()).unwrap_or_else(|e| panic!("not utf-8: {e}"))
}

fn source_lines(source: &str) -> Vec<String> {
    source.split('\n').map(str::to_owned).collect()
}

#[test]
fn test_color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn test_listing_without_diagnostics() {
    let lines = source_lines("begin\nend.");
    let out = render_listing(&lines, &[]);
    assert_eq!(
        out,
        "        begin\n        end.\n\nCompilation finished: errors - 0 !\n"
    );
}

#[test]
fn test_listing_places_caret_under_column() {
    let lines = source_lines("program p;\nbegin x := end.");
    let mut queue = DiagnosticQueue::new();
    queue.push(Diagnostic::new(ErrorCode::EXPECTED_OPERAND, Position::new(1, 11)));
    let diagnostics = queue.flush();

    let out = render_listing(&lines, &diagnostics);
    let expected = "        program p;\n\
                    \x20       begin x := end.\n\
                    **01**            ^ error code 409\n\
                    ****** expected identifier or number\n\
                    \n\
                    Compilation finished: errors - 1 !\n";
    assert_eq!(out, expected);
}

#[test]
fn test_listing_numbers_follow_sorted_order() {
    let lines = source_lines("a\nb");
    let mut queue = DiagnosticQueue::new();
    queue.push(Diagnostic::new(ErrorCode::EXPECTED_DOT, Position::new(1, 0)));
    queue.push(Diagnostic::new(ErrorCode::INVALID_CHARACTER, Position::new(0, 0)));
    let diagnostics = queue.flush();

    let out = render_listing(&lines, &diagnostics);
    let first = out.find("**01** ^ error code 302");
    let second = out.find("**02** ^ error code 403");
    assert!(first.is_some() && second.is_some(), "{out}");
    assert!(first < second);
}

#[test]
fn test_listing_keeps_out_of_range_diagnostics() {
    let lines = source_lines("x");
    let diagnostics = vec![Diagnostic::new(ErrorCode::EXPECTED_END, Position::new(7, 0))];
    let out = render_listing(&lines, &diagnostics);
    assert!(out.contains("error code 408"), "{out}");
}

#[test]
fn test_listing_colors_marker() {
    let lines = source_lines("x");
    let diagnostics = vec![Diagnostic::new(ErrorCode::EXPECTED_END, Position::new(0, 0))];
    let mut emitter = ListingEmitter::new(Vec::new(), &lines, ColorMode::Always, false);
    emitter.emit_all(&diagnostics).unwrap_or_else(|e| panic!("write failed: {e}"));
    let out = String::from_utf8(emitter.into_inner()).unwrap_or_else(|e| panic!("not utf-8: {e}"));
    assert!(out.contains("\x1b[1;31m^ error code 408\x1b[0m"), "{out:?}");
}

#[test]
fn test_short_emitter() {
    let diagnostics = vec![
        Diagnostic::new(ErrorCode::UNTERMINATED_STRING, Position::new(0, 4)),
        Diagnostic::new(ErrorCode::EXPECTED_DOT, Position::new(2, 3)),
    ];
    let mut emitter = ShortEmitter::new(Vec::new()).with_file_path("a.pas");
    emitter.emit_all(&diagnostics).unwrap_or_else(|e| panic!("write failed: {e}"));
    emitter.emit_summary(2).unwrap_or_else(|e| panic!("write failed: {e}"));
    let out = String::from_utf8(emitter.into_inner()).unwrap_or_else(|e| panic!("not utf-8: {e}"));
    assert_eq!(
        out,
        "a.pas:1:5: error 301: unterminated string\n\
         a.pas:3:4: error 403: expected '.' at end of program\n\
         2 errors\n"
    );
}
