//! Numeric literal grammar
//!
//!     The accepted grammar is an optional sign, digits with an optional fraction, and an
//!     optional exponent:
//!
//!         [+-]? ( digits ( "." digits? )? | "." digits ) ( [eE] [+-]? digits )?
//!
//!     The decimal point is always `.`. There are no grouping separators, and `inf`/`nan`
//!     spellings are not literals. A token is only accepted when the grammar consumes it
//!     entirely; `3x` is an error, not `3`.
use crate::error::FormatError;
use crate::lexing::tokenizer::Token;
use logos::Logos;

/// Tokens recognized inside a single list item
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Literal {
    #[regex(r"[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?")]
    Number,
}

/// Parse one literal into an `f32`
pub fn parse_number(text: &str) -> Result<f32, FormatError> {
    parse_at(text, 0)
}

/// Parse a tokenizer token, reporting its source offset on failure
pub fn parse_token(token: Token<'_>) -> Result<f32, FormatError> {
    parse_at(token.as_str(), token.start())
}

fn parse_at(text: &str, offset: usize) -> Result<f32, FormatError> {
    if text.is_empty() {
        return Err(FormatError::Empty);
    }

    let mut lexer = Literal::lexer(text);
    match lexer.next() {
        Some(Ok(Literal::Number)) if lexer.span() == (0..text.len()) => text
            .parse::<f32>()
            .map_err(|_| FormatError::invalid(text, offset)),
        _ => Err(FormatError::invalid(text, offset)),
    }
}
