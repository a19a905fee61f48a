//! Object graph data model.
//!
//! This module contains the value vocabulary (`node`), the arena that owns
//! composite nodes (`graph`), and the conversion from YAML/JSON text
//! (`parser`).

pub mod error;
pub mod graph;
pub mod node;
pub mod parser;

pub use error::{AccessError, GraphError};
pub use graph::{Accessor, Container, Graph, Property, Record, Slot, TypeRegistry, TypeTag};
pub use node::{Callable, Key, NodeId, Number, OpaqueKey, Value};
pub use parser::{parse_document, Document};
