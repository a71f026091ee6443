#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::Error;

pub mod errors;
pub mod lexer;
pub mod macros;

/// 1-indexed line and column of a character in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    pub fn start() -> Self {
        Position { line: 1, column: 1 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Returns the text of the 1-indexed `line`, without its line terminator.
pub fn get_line_at_position(source: &str, line: u32) -> Option<String> {
    let index = (line as usize).checked_sub(1)?;

    source
        .split('\n')
        .nth(index)
        .map(|text| text.trim_end_matches('\r').to_string())
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nsecond\r\n\nTesting { }\n";

        assert_eq!(
            super::get_line_at_position(source, 1),
            Some(String::from("Hello, world!"))
        );
        assert_eq!(
            super::get_line_at_position(source, 2),
            Some(String::from("second"))
        );
        assert_eq!(super::get_line_at_position(source, 3), Some(String::new()));
        assert_eq!(
            super::get_line_at_position(source, 4),
            Some(String::from("Testing { }"))
        );
        assert_eq!(super::get_line_at_position(source, 0), None);
        assert_eq!(super::get_line_at_position(source, 9), None);
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(3, 14).to_string(), "3:14");
        assert_eq!(Position::start(), Position::new(1, 1));
    }

    #[test]
    fn test_display_error_snippet() {
        let source = "var x = 1;\n    var a = @;\n";
        let error = Error::new(
            ErrorImpl::UnexpectedCharacter { ch: '@' },
            Position::new(2, 13),
            Rc::new(String::from("demo.lox")),
        );

        let expected = "[line 2] Error: Unexpected character: @\n\
                        -> demo.lox\n  \
                        |\n\
                        2 | var a = @;\n  \
                        | --------^\n";

        assert_eq!(super::display_error(&error, source), expected);
    }

    #[test]
    fn test_display_error_past_last_line() {
        let source = "\"abc\n";
        let error = Error::new(
            ErrorImpl::UnterminatedString,
            Position::new(2, 1),
            Rc::new(String::from("demo.lox")),
        );

        let rendered = super::display_error(&error, source);
        assert!(rendered.starts_with("[line 2] Error: Unterminated string.\n"));
        assert!(rendered.ends_with("2 | \n  | ^\n"));
    }

    #[test]
    fn test_display_error_wide_line_number() {
        let source = format!("{}\t# here", "\n".repeat(11));
        let error = Error::new(
            ErrorImpl::UnexpectedCharacter { ch: '#' },
            Position::new(12, 2),
            Rc::new(String::from("demo.lox")),
        );

        let expected = "[line 12] Error: Unexpected character: #\n\
                        -> demo.lox\n   \
                        |\n\
                        12 | # here\n   \
                        | ^\n";

        assert_eq!(super::display_error(&error, &source), expected);
    }
}

/// Renders an error together with the offending source line.
///
/// ```text
/// [line 20] Error: Unexpected character: #
/// -> final.lox
///    |
/// 20 | var a = #;
///    | --------^
/// ```
pub fn display_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let line_text = get_line_at_position(source, position.line).unwrap_or_default();

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let column = (position.column as usize).saturating_sub(1);
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    format!(
        "{}\n-> {}\n{:>padding$}\n{} | {}\n{:>padding$} {:->arrows$}\n",
        error,
        error.get_file(),
        "|",
        line_string,
        line_text_removed.trim_end(),
        "|",
        "^",
    )
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
