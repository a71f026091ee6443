//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PAIRED_TOKEN!` - Picks between a one and two character operator

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The raw source text of the token
/// * `$literal` - The decoded `Option<Literal>`
/// * `$position` - Where the token starts
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), Some(Literal::Number(42.0)), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $literal:expr, $position:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            literal: $literal,
            position: $position,
        }
    };
}

/// Consumes a trailing `=` when present and yields the two character kind,
/// otherwise yields the one character kind.
///
/// # Example
///
/// ```ignore
/// '=' => MK_PAIRED_TOKEN!(self, TokenKind::Equals, TokenKind::Assignment),
/// ```
#[macro_export]
macro_rules! MK_PAIRED_TOKEN {
    ($lexer:expr, $paired:expr, $single:expr) => {
        if $lexer.match_next('=') {
            $lexer.make_token($paired)
        } else {
            $lexer.make_token($single)
        }
    };
}
