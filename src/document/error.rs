//! Error types for graph construction and property access.

use super::node::NodeId;
use thiserror::Error;

/// Errors raised while building or mutating a [`Graph`](super::graph::Graph).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("node {0} does not exist")]
    NodeNotFound(NodeId),

    #[error("node {id} is not a {expected}")]
    KindMismatch { id: NodeId, expected: &'static str },

    #[error("class '{0}' is not registered")]
    UnknownClass(String),
}

/// Raised by a computed property whose read fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AccessError {
    message: String,
}

impl AccessError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
