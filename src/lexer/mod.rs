//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Punctuation and one/two character operators
//! - String and number literals, identifiers and reserved words
//! - Line comments and whitespace
//! - Line/column tracking for every token and error

pub mod lexer;
pub mod tokens;
