//! Scalar values, keys and node references.
//!
//! This module provides the value vocabulary shared by the graph, the search
//! engine and the path resolver. Composite values (records, sequences and
//! associative containers) live in a [`Graph`](super::graph::Graph) arena and
//! are referenced from a `Value` through a [`NodeId`]; everything else is a
//! scalar stored inline.
//!
//! # Example
//!
//! ```
//! use graphsift::document::node::{OpaqueKey, Value};
//!
//! let name = Value::from("Alice");
//! assert_eq!(name.type_name(), "string");
//!
//! let key = OpaqueKey::new("secret");
//! assert_eq!(key.to_string(), "Symbol(secret)");
//! assert_ne!(key, OpaqueKey::new("secret")); // identity, not description
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_OPAQUE_ID: AtomicU64 = AtomicU64::new(1);
static NEXT_CALLABLE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a composite node inside a [`Graph`](super::graph::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Returns the arena slot of this node.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A unique, unforgeable key with an optional description.
///
/// Two keys are equal only if they were produced by the same call to
/// [`OpaqueKey::new`] (or cloned from it). The description is informational
/// and is what appears in formatted paths.
#[derive(Debug, Clone)]
pub struct OpaqueKey {
    id: u64,
    description: Option<String>,
}

impl OpaqueKey {
    /// Creates a fresh key with the given description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: NEXT_OPAQUE_ID.fetch_add(1, Ordering::Relaxed),
            description: Some(description.into()),
        }
    }

    /// Creates a fresh key without a description.
    pub fn anonymous() -> Self {
        Self {
            id: NEXT_OPAQUE_ID.fetch_add(1, Ordering::Relaxed),
            description: None,
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns true if this key's canonical form is `Symbol(<description>)`.
    pub fn has_canonical_form(&self, description: &str) -> bool {
        self.description.as_deref().unwrap_or("") == description
    }
}

impl PartialEq for OpaqueKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for OpaqueKey {}

impl Hash for OpaqueKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for OpaqueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description.as_deref().unwrap_or(""))
    }
}

/// Represents numbers (integer or float).
///
/// Integers and floats compare by numeric value, so `Integer(2)` equals
/// `Float(2.0)`.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a == b,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

/// A callable value. Only its name is observable.
///
/// Like [`OpaqueKey`], callables compare by identity: a clone equals its
/// source, a second callable with the same name does not.
#[derive(Debug, Clone)]
pub struct Callable {
    id: u64,
    name: String,
}

impl Callable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: NEXT_CALLABLE_ID.fetch_add(1, Ordering::Relaxed),
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Callable {}

impl Hash for Callable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Any value that can appear in a graph.
///
/// `Node` values compare by identity; every other variant compares by
/// content.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// An absent value
    #[default]
    Undefined,
    Null,
    Boolean(bool),
    Number(Number),
    String(String),
    Opaque(OpaqueKey),
    Callable(Callable),
    /// A reference to a composite node in the graph
    Node(NodeId),
}

impl Value {
    /// Returns the runtime category of this value.
    ///
    /// Null and every composite report `"object"`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Opaque(_) => "symbol",
            Value::Callable(_) => "function",
            Value::Node(_) => "object",
        }
    }

    /// Returns true for every value that is not a reference to a node.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Value::Node(_))
    }

    /// Returns true for `Null` and `Undefined`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<NodeId> {
        match self {
            Value::Node(id) => Some(*id),
            _ => None,
        }
    }

    pub fn as_opaque(&self) -> Option<&OpaqueKey> {
        match self {
            Value::Opaque(key) => Some(key),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Opaque(key) => write!(f, "{}", key),
            Value::Callable(c) => write!(f, "[function {}]", c.name()),
            Value::Node(id) => write!(f, "[object {}]", id),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Number(Number::Integer(i))
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Number(Number::Integer(i as i64))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Number(Number::Float(f))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<OpaqueKey> for Value {
    fn from(key: OpaqueKey) -> Self {
        Value::Opaque(key)
    }
}

impl From<Callable> for Value {
    fn from(c: Callable) -> Self {
        Value::Callable(c)
    }
}

impl From<NodeId> for Value {
    fn from(id: NodeId) -> Self {
        Value::Node(id)
    }
}

/// A field key of a record: a printable name or an opaque key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Name(String),
    Opaque(OpaqueKey),
}

impl Key {
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Name(name) => Some(name),
            Key::Opaque(_) => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Name(name) => write!(f, "{}", name),
            Key::Opaque(key) => write!(f, "{}", key),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Name(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Name(s)
    }
}

impl From<OpaqueKey> for Key {
    fn from(key: OpaqueKey) -> Self {
        Key::Opaque(key)
    }
}

impl From<&OpaqueKey> for Key {
    fn from(key: &OpaqueKey) -> Self {
        Key::Opaque(key.clone())
    }
}
