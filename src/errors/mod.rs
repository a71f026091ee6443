//! Error types produced while scanning source text.
//!
//! Every error carries the position it was raised at and the label of the
//! file being scanned. `Display` gives the one-line diagnostic form:
//!
//! - `[line N] Error: Unexpected character: C`
//! - `[line N] Error: Unterminated string.`

pub mod errors;

#[cfg(test)]
mod tests;
