//! Lexing of list-valued attribute text
//!
//!     Attribute lists are lexed in two steps. The tokenizer splits the source on a
//!     delimiter set, producing span views into the source. Each span is then matched
//!     against the numeric literal grammar by a logos lexer and converted to `f32`.
//!
//!     Neither step copies the source: tokens are `&str` slices plus their byte offset,
//!     and the literal parser reads straight from the slice.

pub mod delimiters;
pub mod literal;
pub mod tokenizer;

pub use delimiters::{Delimiters, LIST_DELIMITERS};
pub use literal::{parse_number, parse_token, Literal};
pub use tokenizer::{tokenize, Token, Tokens};
