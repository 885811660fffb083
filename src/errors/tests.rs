//! Unit tests for error handling.

use crate::errors::errors::{Diagnostics, Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

fn at(offset: u32) -> Position {
    Position(offset, Rc::new("test.mk".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::MissingPrefixHandler {
            kind: TokenKind::Illegal,
        },
        at(10),
    );

    assert_eq!(error.get_error_name(), "MissingPrefixHandler");
    assert_eq!(error.get_position().0, 10);
}

#[test]
fn test_unexpected_token_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Identifier,
            got: TokenKind::Integer,
        },
        at(4),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(
        error.to_string(),
        "expected next token to be Identifier, got Integer instead"
    );
}

#[test]
fn test_integer_parse_message() {
    let error = Error::new(
        ErrorImpl::IntegerParseError {
            literal: "99999999999999999999".to_string(),
        },
        at(0),
    );

    assert_eq!(
        error.to_string(),
        "could not parse \"99999999999999999999\" as integer"
    );
}

#[test]
fn test_missing_prefix_message() {
    let error = Error::new(ErrorImpl::MissingPrefixHandler { kind: TokenKind::Plus }, at(0));

    assert_eq!(error.to_string(), "no prefix parse function for Plus found");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 256 }, at(0));

    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(
        error.to_string(),
        "expression nesting exceeds maximum depth of 256"
    );
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::MissingPrefixHandler {
            kind: TokenKind::CloseCurly,
        },
        at(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "`CloseCurly` cannot start an expression"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_diagnostics_keep_order_and_duplicates() {
    let mut diagnostics = Diagnostics::new();
    assert!(diagnostics.is_empty());

    let missing = Error::new(ErrorImpl::MissingPrefixHandler { kind: TokenKind::Star }, at(2));
    diagnostics.push(missing.clone());
    diagnostics.push(Error::new(ErrorImpl::NestingTooDeep { limit: 1 }, at(3)));
    diagnostics.push(missing);

    assert_eq!(diagnostics.len(), 3);
    assert_eq!(
        diagnostics.messages(),
        vec![
            "no prefix parse function for Star found".to_string(),
            "expression nesting exceeds maximum depth of 1".to_string(),
            "no prefix parse function for Star found".to_string(),
        ]
    );
    assert_eq!(diagnostics.as_slice()[1].get_position().0, 3);
    assert_eq!((&diagnostics).into_iter().count(), 3);
}
