//! Error types shared by the decoder and the traversal engine.
//!
//! Nothing in this crate swallows a failure or substitutes a default value: every
//! error below surfaces to the immediate caller.

use thiserror::Error;

/// Boxed caller error, used to carry failures raised by child accessors and actions.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A token did not match the numeric literal grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// An empty string was given where a numeric literal was expected
    #[error("expected a numeric literal, found empty input")]
    Empty,

    /// The literal is not fully consumed by the numeric grammar
    #[error("invalid numeric literal `{literal}` at offset {offset}")]
    InvalidLiteral { literal: String, offset: usize },
}

impl FormatError {
    pub(crate) fn invalid(literal: &str, offset: usize) -> Self {
        FormatError::InvalidLiteral {
            literal: literal.to_string(),
            offset,
        }
    }

    /// Byte offset of the offending literal in the decoded text, if known
    pub fn offset(&self) -> Option<usize> {
        match self {
            FormatError::Empty => None,
            FormatError::InvalidLiteral { offset, .. } => Some(*offset),
        }
    }
}

/// Failure while walking a tree.
#[derive(Debug, Error)]
pub enum TraversalError {
    /// A required argument was missing; raised before any node is visited
    #[error("invalid argument: `{0}` must be supplied")]
    InvalidArgument(&'static str),

    /// The child accessor failed while queried
    #[error("child accessor failed: {0}")]
    Children(#[source] BoxError),

    /// The per-node action failed
    #[error("action failed: {0}")]
    Action(#[source] BoxError),
}

impl TraversalError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, TraversalError::InvalidArgument(_))
    }
}
