//! # attrlist
//!
//! Decoding of delimiter-separated numeric lists found in markup attribute values
//! (`points="10 20,30 40"`, `stroke-dasharray="5, 3"`, ...), and a generic traversal
//! engine for walking tree-shaped documents.
//!
//! The decoding side is layered:
//!
//!     tokenize  ->  parse_token  ->  NumberList
//!
//! [lexing::tokenize] splits text on a [lexing::Delimiters] set without copying, the
//! literal parser turns each token into an `f32` independent of host locale, and
//! [NumberList] collects the values in source order.
//!
//! The traversal side ([traversal]) walks any node type through a caller supplied
//! child accessor, breadth-first or depth-first, using an explicit queue/stack.

pub mod config;
pub mod error;
pub mod lexing;
pub mod numbers;
pub mod traversal;

pub use error::{BoxError, FormatError, TraversalError};
pub use lexing::{parse_number, tokenize, Delimiters, Token, Tokens, LIST_DELIMITERS};
pub use numbers::{NumberFormat, NumberList};
pub use traversal::{
    apply_to_all, traverse, traverse_many, HasChildren, Nodes, Traverse, TraversalOrder,
};
