//! Arena-backed object graphs.
//!
//! This module provides the `Graph` type that owns every composite node of a
//! document. Nodes refer to each other through [`NodeId`]s stored in
//! [`Value::Node`], which makes shared and cyclic structures ordinary data:
//! a record that contains itself simply stores its own id.
//!
//! # Example
//!
//! ```
//! use graphsift::document::graph::{Container, Graph};
//! use graphsift::document::node::Value;
//!
//! let mut graph = Graph::new();
//! let root = graph.add_record();
//! graph.set(root, "name", "Alice").unwrap();
//! graph.set(root, "self", root).unwrap();
//!
//! let record = graph.record(root).unwrap();
//! assert_eq!(record.len(), 2);
//! assert!(matches!(graph.node(root), Some(Container::Record(_))));
//! ```

use super::error::{AccessError, GraphError};
use super::node::{Key, NodeId, OpaqueKey, Value};
use indexmap::IndexMap;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

type ReadFn = dyn Fn() -> Result<Value, AccessError>;

/// A computed property.
///
/// Every read invokes the closure; a failing read surfaces as an
/// [`AccessError`].
#[derive(Clone)]
pub struct Accessor {
    read: Rc<ReadFn>,
}

impl Accessor {
    pub fn new<F>(read: F) -> Self
    where
        F: Fn() -> Result<Value, AccessError> + 'static,
    {
        Self {
            read: Rc::new(read),
        }
    }

    pub fn read(&self) -> Result<Value, AccessError> {
        (self.read)()
    }
}

impl fmt::Debug for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Accessor(..)")
    }
}

/// Storage behind a record property.
#[derive(Debug, Clone)]
pub enum Slot {
    Data(Value),
    Accessor(Accessor),
}

/// A record property: its storage plus visibility.
///
/// Non-enumerable properties are part of the record's full key set and are
/// searched and resolved like any other; they are only left out of
/// [`Record::visible_keys`].
#[derive(Debug, Clone)]
pub struct Property {
    slot: Slot,
    enumerable: bool,
}

impl Property {
    pub fn data(value: impl Into<Value>) -> Self {
        Self {
            slot: Slot::Data(value.into()),
            enumerable: true,
        }
    }

    pub fn hidden(value: impl Into<Value>) -> Self {
        Self {
            slot: Slot::Data(value.into()),
            enumerable: false,
        }
    }

    pub fn accessor(accessor: Accessor) -> Self {
        Self {
            slot: Slot::Accessor(accessor),
            enumerable: true,
        }
    }

    pub fn slot(&self) -> &Slot {
        &self.slot
    }

    pub fn is_enumerable(&self) -> bool {
        self.enumerable
    }

    /// Reads the property. Data slots are borrowed, accessor results are owned.
    pub fn read(&self) -> Result<Cow<'_, Value>, AccessError> {
        match &self.slot {
            Slot::Data(value) => Ok(Cow::Borrowed(value)),
            Slot::Accessor(accessor) => accessor.read().map(Cow::Owned),
        }
    }
}

/// A composite record: ordered named fields and an optional class.
#[derive(Debug, Clone, Default)]
pub struct Record {
    class: Option<String>,
    fields: IndexMap<Key, Property>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty record that is an instance of `class`.
    pub fn instance_of(class: impl Into<String>) -> Self {
        Self {
            class: Some(class.into()),
            fields: IndexMap::new(),
        }
    }

    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, key: &Key) -> Option<&Property> {
        self.fields.get(key)
    }

    /// Looks up a property by field name.
    pub fn field(&self, name: &str) -> Option<&Property> {
        self.fields.get(&Key::Name(name.to_owned()))
    }

    /// Iterates over the full key set in declaration order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Property> {
        self.fields.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.fields.keys()
    }

    /// Keys of enumerable properties only.
    pub fn visible_keys(&self) -> impl Iterator<Item = &Key> {
        self.fields
            .iter()
            .filter(|(_, property)| property.enumerable)
            .map(|(key, _)| key)
    }

    /// Inserts a property. Re-inserting an existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<Key>, property: Property) {
        self.fields.insert(key.into(), property);
    }
}

/// A composite node stored in the graph.
#[derive(Debug, Clone)]
pub enum Container {
    /// Named fields
    Record(Record),
    /// Index-addressable items
    Sequence(Vec<Value>),
    /// Insertion-ordered entries with arbitrary keys
    Map(Vec<(Value, Value)>),
}

impl Container {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Container::Record(_) => "record",
            Container::Sequence(_) => "sequence",
            Container::Map(_) => "map",
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Container::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Container::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&[(Value, Value)]> {
        match self {
            Container::Map(entries) => Some(entries),
            _ => None,
        }
    }
}

/// A type tag for membership tests.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Every composite and callable
    Object,
    Sequence,
    Map,
    Function,
    /// A registered class, matched together with its subclasses
    Class(String),
}

impl TypeTag {
    pub fn class(name: impl Into<String>) -> Self {
        TypeTag::Class(name.into())
    }

    /// Maps a constructor name to a tag. Built-in names map to structural
    /// tags, anything else names a class.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Object" => TypeTag::Object,
            "Array" | "Sequence" => TypeTag::Sequence,
            "Map" => TypeTag::Map,
            "Function" => TypeTag::Function,
            other => TypeTag::Class(other.to_string()),
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Object => write!(f, "Object"),
            TypeTag::Sequence => write!(f, "Array"),
            TypeTag::Map => write!(f, "Map"),
            TypeTag::Function => write!(f, "Function"),
            TypeTag::Class(name) => write!(f, "{}", name),
        }
    }
}

/// Known classes and their parents.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    classes: IndexMap<String, Option<String>>,
}

impl Default for TypeRegistry {
    /// Registers the built-in `Date`, `RegExp` and `Error` classes.
    fn default() -> Self {
        let mut classes = IndexMap::new();
        for builtin in ["Date", "RegExp", "Error"] {
            classes.insert(builtin.to_string(), None);
        }
        Self { classes }
    }
}

impl TypeRegistry {
    /// Registers a root class. Registering twice is a no-op.
    pub fn register(&mut self, name: impl Into<String>) {
        self.classes.entry(name.into()).or_insert(None);
    }

    /// Registers `name` as a subclass of an already registered `parent`.
    pub fn register_subclass(
        &mut self,
        name: impl Into<String>,
        parent: &str,
    ) -> Result<(), GraphError> {
        if !self.classes.contains_key(parent) {
            return Err(GraphError::UnknownClass(parent.to_string()));
        }
        self.classes.insert(name.into(), Some(parent.to_string()));
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    pub fn parent(&self, name: &str) -> Option<&str> {
        self.classes.get(name)?.as_deref()
    }

    /// Returns true if `class` is `ancestor` or inherits from it.
    pub fn is_subclass_of(&self, class: &str, ancestor: &str) -> bool {
        let mut current = Some(class);
        // Bounded by the registry size so a malformed chain cannot loop.
        for _ in 0..=self.classes.len() {
            match current {
                Some(name) if name == ancestor => return true,
                Some(name) => current = self.parent(name),
                None => return false,
            }
        }
        false
    }
}

/// A complete object graph.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Container>,
    types: TypeRegistry,
    shared_keys: HashMap<String, OpaqueKey>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of composite nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn add(&mut self, container: Container) -> NodeId {
        self.nodes.push(container);
        NodeId(self.nodes.len() - 1)
    }

    pub fn add_record(&mut self) -> NodeId {
        self.add(Container::Record(Record::new()))
    }

    /// Adds an empty instance of a registered class.
    pub fn add_instance(&mut self, class: &str) -> Result<NodeId, GraphError> {
        if !self.types.contains(class) {
            return Err(GraphError::UnknownClass(class.to_string()));
        }
        Ok(self.add(Container::Record(Record::instance_of(class))))
    }

    pub fn add_sequence<I>(&mut self, items: I) -> NodeId
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.add(Container::Sequence(
            items.into_iter().map(Into::into).collect(),
        ))
    }

    pub fn add_map(&mut self) -> NodeId {
        self.add(Container::Map(Vec::new()))
    }

    pub fn node(&self, id: NodeId) -> Option<&Container> {
        self.nodes.get(id.0)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Container> {
        self.nodes.get_mut(id.0)
    }

    pub fn record(&self, id: NodeId) -> Option<&Record> {
        self.node(id)?.as_record()
    }

    pub fn sequence(&self, id: NodeId) -> Option<&[Value]> {
        self.node(id)?.as_sequence()
    }

    pub fn map(&self, id: NodeId) -> Option<&[(Value, Value)]> {
        self.node(id)?.as_map()
    }

    /// Sets an enumerable data field on a record.
    pub fn set(
        &mut self,
        id: NodeId,
        key: impl Into<Key>,
        value: impl Into<Value>,
    ) -> Result<(), GraphError> {
        self.record_mut(id)?.insert(key, Property::data(value));
        Ok(())
    }

    /// Sets a non-enumerable data field on a record.
    pub fn set_hidden(
        &mut self,
        id: NodeId,
        key: impl Into<Key>,
        value: impl Into<Value>,
    ) -> Result<(), GraphError> {
        self.record_mut(id)?.insert(key, Property::hidden(value));
        Ok(())
    }

    /// Sets a computed field on a record.
    pub fn set_accessor(
        &mut self,
        id: NodeId,
        key: impl Into<Key>,
        accessor: Accessor,
    ) -> Result<(), GraphError> {
        self.record_mut(id)?
            .insert(key, Property::accessor(accessor));
        Ok(())
    }

    /// Appends an item to a sequence.
    pub fn push(&mut self, id: NodeId, value: impl Into<Value>) -> Result<(), GraphError> {
        match self.nodes.get_mut(id.0) {
            Some(Container::Sequence(items)) => {
                items.push(value.into());
                Ok(())
            }
            Some(_) => Err(GraphError::KindMismatch {
                id,
                expected: "sequence",
            }),
            None => Err(GraphError::NodeNotFound(id)),
        }
    }

    /// Inserts an entry into an associative container. An existing equal key
    /// keeps its position and gets the new value.
    pub fn insert_entry(
        &mut self,
        id: NodeId,
        key: impl Into<Value>,
        value: impl Into<Value>,
    ) -> Result<(), GraphError> {
        let (key, value) = (key.into(), value.into());
        match self.nodes.get_mut(id.0) {
            Some(Container::Map(entries)) => {
                match entries.iter_mut().find(|(existing, _)| *existing == key) {
                    Some(entry) => entry.1 = value,
                    None => entries.push((key, value)),
                }
                Ok(())
            }
            Some(_) => Err(GraphError::KindMismatch { id, expected: "map" }),
            None => Err(GraphError::NodeNotFound(id)),
        }
    }

    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    pub fn types_mut(&mut self) -> &mut TypeRegistry {
        &mut self.types
    }

    /// Returns the graph-wide key registered under `description`, creating it
    /// on first use.
    pub fn shared_key(&mut self, description: &str) -> OpaqueKey {
        self.shared_keys
            .entry(description.to_string())
            .or_insert_with(|| OpaqueKey::new(description))
            .clone()
    }

    /// Runtime type-membership test.
    pub fn is_instance_of(&self, value: &Value, tag: &TypeTag) -> bool {
        match (tag, value) {
            (TypeTag::Object, Value::Node(_) | Value::Callable(_)) => true,
            (TypeTag::Function, Value::Callable(_)) => true,
            (TypeTag::Sequence, Value::Node(id)) => self.sequence(*id).is_some(),
            (TypeTag::Map, Value::Node(id)) => self.map(*id).is_some(),
            (TypeTag::Class(name), Value::Node(id)) => self
                .record(*id)
                .and_then(Record::class)
                .map(|class| self.types.is_subclass_of(class, name))
                .unwrap_or(false),
            _ => false,
        }
    }

    fn record_mut(&mut self, id: NodeId) -> Result<&mut Record, GraphError> {
        match self.nodes.get_mut(id.0) {
            Some(Container::Record(record)) => Ok(record),
            Some(_) => Err(GraphError::KindMismatch {
                id,
                expected: "record",
            }),
            None => Err(GraphError::NodeNotFound(id)),
        }
    }
}
