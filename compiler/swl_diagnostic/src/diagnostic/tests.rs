use super::*;
use pretty_assertions::assert_eq;

#[test]
fn error_uses_code_description_by_default() {
    let diag = Diagnostic::error(ErrorCode::IncompatibleTypes);
    assert_eq!(diag.message, "incompatible operand types");
    assert!(diag.is_error());
    assert_eq!(diag.location, None);
}

#[test]
fn builder_sets_fields() {
    let diag = Diagnostic::error(ErrorCode::Syntax)
        .with_message("missing operator")
        .at(Location::new(4, 9))
        .with_note("two operands are adjacent");
    assert_eq!(diag.message, "missing operator");
    assert_eq!(diag.location, Some(Location::new(4, 9)));
    assert_eq!(diag.notes, vec!["two operands are adjacent".to_string()]);
    assert_eq!(diag.line(), 4);
}

#[test]
fn warning_keeps_code() {
    let diag = Diagnostic::warning(ErrorCode::Lexical).with_message("unterminated comment");
    assert!(!diag.is_error());
    assert_eq!(diag.code, ErrorCode::Lexical);
}

#[test]
fn display_format() {
    let diag = Diagnostic::error(ErrorCode::Semantic)
        .with_message("division by zero")
        .at(Location::new(1, 5));
    assert_eq!(diag.to_string(), "error[9]: division by zero at 1:5");
    let bare = Diagnostic::warning(ErrorCode::Lexical).with_message("x");
    assert_eq!(bare.to_string(), "warning[1]: x");
}
