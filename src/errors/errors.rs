use std::{fmt::Display, rc::Rc};

use thiserror::Error;

use crate::{
    lexer::tokens::{Token, TokenKind},
    Position,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    file: Rc<String>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position, file: Rc<String>) -> Self {
        Error {
            internal_error: error_impl,
            position,
            file,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_file(&self) -> &str {
        &self.file
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::NumberDecode { .. } => "NumberDecode",
        }
    }

    /// Fatal errors mean the lexer broke one of its own invariants; the
    /// token stream cannot be trusted past them.
    pub fn is_fatal(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::NumberDecode { .. })
    }

    /// Flattens a recoverable lexical error into a `LexError` token.
    pub fn into_token(self) -> Token {
        let lexeme = match self.internal_error {
            ErrorImpl::UnexpectedCharacter { ch } => ch.to_string(),
            ErrorImpl::UnterminatedString => String::new(),
            ErrorImpl::NumberDecode { lexeme } => lexeme,
        };

        Token {
            kind: TokenKind::LexError,
            lexeme,
            literal: None,
            position: self.position,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[line {}] Error: {}", self.position.line, self.internal_error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("Unexpected character: {ch}")]
    UnexpectedCharacter { ch: char },
    #[error("Unterminated string.")]
    UnterminatedString,
    #[error("Internal error: could not decode number {lexeme:?}")]
    NumberDecode { lexeme: String },
}
