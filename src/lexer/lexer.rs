use std::{iter::FusedIterator, rc::Rc};

use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_PAIRED_TOKEN, MK_TOKEN,
};

use super::tokens::{lookup_identifier, Literal, Token, TokenKind};

/// Single pass scanner over a borrowed source buffer.
///
/// `start..current` is the byte range of the token being assembled;
/// `line`/`column` always describe the character at `current`.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    file: Rc<String>,
    start: usize,
    current: usize,
    line: u32,
    column: u32,
    start_position: Position,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, file: Option<String>) -> Lexer<'a> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("<stdin>"))
        };

        Lexer {
            source,
            file: file_name,
            start: 0,
            current: 0,
            line: 1,
            column: 1,
            start_position: Position::start(),
            finished: false,
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn current_position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn at_eof(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Produces the next token, skipping whitespace and comments first.
    ///
    /// Lexical errors are returned as values and leave the lexer ready for
    /// the next call. Once the input is exhausted every call yields `EOF`.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        let result = self.scan_token();

        match &result {
            Ok(token) => trace!(
                kind = %token.kind,
                lexeme = %token.lexeme,
                position = %token.position,
                "scanned token"
            ),
            Err(error) => debug!(
                file = %self.file,
                position = %error.get_position(),
                "{}",
                error.get_error()
            ),
        }

        result
    }

    fn scan_token(&mut self) -> Result<Token, Error> {
        self.skip_insignificant();

        self.start = self.current;
        self.start_position = self.current_position();

        let Some(ch) = self.advance() else {
            return Ok(self.make_token(TokenKind::EOF));
        };

        match ch {
            '(' => Ok(self.make_token(TokenKind::OpenParen)),
            ')' => Ok(self.make_token(TokenKind::CloseParen)),
            '{' => Ok(self.make_token(TokenKind::OpenCurly)),
            '}' => Ok(self.make_token(TokenKind::CloseCurly)),
            ',' => Ok(self.make_token(TokenKind::Comma)),
            '.' => Ok(self.make_token(TokenKind::Dot)),
            '-' => Ok(self.make_token(TokenKind::Minus)),
            '+' => Ok(self.make_token(TokenKind::Plus)),
            ';' => Ok(self.make_token(TokenKind::Semicolon)),
            '*' => Ok(self.make_token(TokenKind::Star)),
            // `//` never gets here, comments are consumed with whitespace
            '/' => Ok(self.make_token(TokenKind::Slash)),
            '=' => Ok(MK_PAIRED_TOKEN!(self, TokenKind::Equals, TokenKind::Assignment)),
            '!' => Ok(MK_PAIRED_TOKEN!(self, TokenKind::NotEquals, TokenKind::Not)),
            '>' => Ok(MK_PAIRED_TOKEN!(self, TokenKind::GreaterEquals, TokenKind::Greater)),
            '<' => Ok(MK_PAIRED_TOKEN!(self, TokenKind::LessEquals, TokenKind::Less)),
            '"' => self.string(),
            c if c.is_ascii_digit() => self.number(),
            c if c.is_ascii_alphabetic() || c == '_' => Ok(self.identifier()),
            c => Err(self.error(ErrorImpl::UnexpectedCharacter { ch: c }, self.start_position)),
        }
    }

    fn skip_insignificant(&mut self) {
        while let Some(ch) = self.peek() {
            match ch {
                ' ' | '\r' | '\t' | '\n' => {
                    self.advance();
                }
                '/' if self.peek_next() == Some('/') => {
                    while self.peek().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    fn string(&mut self) -> Result<Token, Error> {
        while self.peek().is_some_and(|c| c != '"') {
            self.advance();
        }

        if self.at_eof() {
            return Err(self.error(ErrorImpl::UnterminatedString, self.current_position()));
        }

        // closing quote
        self.advance();

        let value = &self.source[self.start + 1..self.current - 1];
        Ok(self.make_literal(TokenKind::String, Literal::String(value.to_string())))
    }

    fn number(&mut self) -> Result<Token, Error> {
        self.consume_digits();

        // A dot only belongs to the number when a digit follows it
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            self.consume_digits();
        }

        let lexeme = &self.source[self.start..self.current];
        match lexeme.parse::<f64>() {
            Ok(value) => Ok(self.make_literal(TokenKind::Number, Literal::Number(value))),
            Err(_) => Err(self.error(
                ErrorImpl::NumberDecode {
                    lexeme: lexeme.to_string(),
                },
                self.start_position,
            )),
        }
    }

    fn identifier(&mut self) -> Token {
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let kind = lookup_identifier(&self.source[self.start..self.current]);
        self.make_token(kind)
    }

    fn consume_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.current += ch.len_utf8();

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    fn match_next(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        self.source[self.current..].chars().nth(1)
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        MK_TOKEN!(
            kind,
            self.source[self.start..self.current].to_string(),
            None,
            self.start_position
        )
    }

    fn make_literal(&self, kind: TokenKind, literal: Literal) -> Token {
        MK_TOKEN!(
            kind,
            self.source[self.start..self.current].to_string(),
            Some(literal),
            self.start_position
        )
    }

    fn error(&self, error_impl: ErrorImpl, position: Position) -> Error {
        Error::new(error_impl, position, Rc::clone(&self.file))
    }
}

/// Yields every token up to and including `EOF`, interleaved with the
/// lexical errors met along the way. Stops early only on a fatal error.
impl Iterator for Lexer<'_> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();
        match &result {
            Ok(token) if token.kind == TokenKind::EOF => self.finished = true,
            Err(error) if error.is_fatal() => self.finished = true,
            _ => {}
        }

        Some(result)
    }
}

impl FusedIterator for Lexer<'_> {}

/// Scans the whole source, keeping every token (ending with `EOF`) and
/// every error. The caller decides what the errors mean for the run.
pub fn tokenize(source: &str, file: Option<String>) -> (Vec<Token>, Vec<Error>) {
    let mut tokens = vec![];
    let mut errors = vec![];

    for result in Lexer::new(source, file) {
        match result {
            Ok(token) => tokens.push(token),
            Err(error) => errors.push(error),
        }
    }

    (tokens, errors)
}
