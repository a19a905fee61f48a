//! Error types for path parsing.

use thiserror::Error;

/// Problems found while tokenizing a path expression.
///
/// The tokenizer always recovers from these; they are reported as
/// diagnostics, or as an error by [`Parser::parse_strict`](super::Parser::parse_strict).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// Unexpected token at a specific position.
    #[error("Unexpected token '{found}' at position {position}")]
    UnexpectedToken { position: usize, found: String },

    /// Input ended inside a bracket, lookup or opaque-key marker.
    #[error("Unexpected end of input, expected {expected} (opened at position {position})")]
    UnexpectedEnd { position: usize, expected: String },

    /// A segment with no content, such as `a..b` or `[]`.
    #[error("Empty path segment at position {position}")]
    EmptySegment { position: usize },
}

impl PathError {
    pub fn position(&self) -> usize {
        match self {
            PathError::UnexpectedToken { position, .. }
            | PathError::UnexpectedEnd { position, .. }
            | PathError::EmptySegment { position } => *position,
        }
    }
}
