use super::*;
use crate::Location;
use pretty_assertions::assert_eq;

#[test]
fn keywords_are_case_sensitive() {
    assert_eq!(Keyword::from_ident(b"while"), Some(Keyword::While));
    assert_eq!(Keyword::from_ident(b"While"), None);
    assert_eq!(Keyword::from_ident(b"nil"), Some(Keyword::Nil));
    assert_eq!(Keyword::from_ident(b"Int"), None);
}

#[test]
fn keyword_round_trips_through_as_str() {
    for kw in [
        Keyword::Else,
        Keyword::Func,
        Keyword::If,
        Keyword::Let,
        Keyword::Nil,
        Keyword::Return,
        Keyword::Var,
        Keyword::While,
    ] {
        assert_eq!(Keyword::from_ident(kw.as_str().as_bytes()), Some(kw));
    }
}

#[test]
fn base_types() {
    assert_eq!(BaseType::from_ident(b"Double"), Some(BaseType::Double));
    assert_eq!(BaseType::from_ident(b"Bool"), None);
}

#[test]
fn relational_operators() {
    assert!(Operator::Le.is_relational());
    assert!(Operator::Ne.is_relational());
    assert!(!Operator::NilCoalesce.is_relational());
    assert!(!Operator::Assign.is_relational());
}

#[test]
fn token_debug_shows_newline_flag() {
    let tok = Token::new(TokenKind::Int(7), Location::new(2, 5)).with_preceding_eol(true);
    assert_eq!(format!("{tok:?}"), "Int(7) @ 2:5 (after newline)");
    let ty = Token::dummy(TokenKind::DataType {
        ty: BaseType::String,
        nilable: true,
    });
    assert_eq!(format!("{ty:?}"), "Type(String?) @ 1:1");
}

#[test]
fn token_predicates() {
    let tok = Token::dummy(TokenKind::Operator(Operator::LParen));
    assert!(tok.is_operator(Operator::LParen));
    assert!(!tok.is_operator(Operator::RParen));
    assert!(Token::dummy(TokenKind::Keyword(Keyword::Nil)).is_keyword(Keyword::Nil));
    assert!(Token::dummy(TokenKind::Eof).is_eof());
}
