//! Error types for searches.

use thiserror::Error;

/// Errors that fail a search before any traversal happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Invalid search mode '{0}'. Must be one of: value, key, type, all")]
    InvalidMode(String),
}
