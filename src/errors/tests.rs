//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

fn file() -> Rc<String> {
    Rc::new("test.lox".to_string())
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnexpectedCharacter { ch: '@' },
        Position::new(10, 4),
        file(),
    );

    assert_eq!(error.get_error_name(), "UnexpectedCharacter");
    assert_eq!(error.get_file(), "test.lox");
    assert!(!error.is_fatal());
}

#[test]
fn test_error_position() {
    let error = Error::new(ErrorImpl::UnterminatedString, Position::new(42, 7), file());

    assert_eq!(error.get_position().line, 42);
    assert_eq!(error.get_position().column, 7);
}

#[test]
fn test_unexpected_character_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedCharacter { ch: '#' },
        Position::new(3, 1),
        file(),
    );

    assert_eq!(error.to_string(), "[line 3] Error: Unexpected character: #");
}

#[test]
fn test_unterminated_string_message() {
    let error = Error::new(ErrorImpl::UnterminatedString, Position::new(5, 9), file());

    assert_eq!(error.get_error_name(), "UnterminatedString");
    assert_eq!(error.to_string(), "[line 5] Error: Unterminated string.");
}

#[test]
fn test_number_decode_is_fatal() {
    let error = Error::new(
        ErrorImpl::NumberDecode {
            lexeme: "1.2.3".to_string(),
        },
        Position::start(),
        file(),
    );

    assert!(error.is_fatal());
    assert_eq!(error.get_error_name(), "NumberDecode");
    assert!(error.to_string().contains("\"1.2.3\""));
}

#[test]
fn test_error_source() {
    let error = Error::new(ErrorImpl::UnterminatedString, Position::start(), file());
    let source = std::error::Error::source(&error).map(|e| e.to_string());

    assert_eq!(source.as_deref(), Some("Unterminated string."));
}

#[test]
fn test_unterminated_string_into_token() {
    let token = Error::new(ErrorImpl::UnterminatedString, Position::new(2, 1), file()).into_token();

    assert_eq!(token.kind, TokenKind::LexError);
    assert_eq!(token.lexeme, "");
    assert_eq!(token.position, Position::new(2, 1));
}
