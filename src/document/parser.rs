//! YAML/JSON text to object graph conversion.
//!
//! This module parses a document with `serde_yaml` (JSON is valid YAML) and
//! converts the result into a [`Graph`]. A few YAML features map onto graph
//! concepts that plain JSON cannot express:
//!
//! - a mapping whose keys are all strings becomes a record; any other key
//!   (number, boolean, sequence, ...) turns it into an associative container
//! - `!symbol <description>` produces an opaque key; used as a mapping key it
//!   becomes an opaque record key
//! - `!fn <name>` produces a callable
//! - any other tag on a mapping (`!Person {name: Ann}`) produces an instance
//!   of that class; on a scalar (`!Date 2023-01-01`) it produces an instance
//!   holding the scalar in a hidden `value` field
//!
//! # Example
//!
//! ```
//! use graphsift::document::parser::parse_document;
//!
//! let doc = parse_document("user: !Person\n  name: Ann\n").unwrap();
//! let root = doc.graph.record(doc.root.as_node().unwrap()).unwrap();
//! assert!(root.field("user").is_some());
//! ```

use super::graph::{Container, Graph, Property, Record};
use super::node::{Callable, Key, Number, Value};
use anyhow::{Context, Result};
use serde_yaml::Value as YamlValue;

const SYMBOL_TAG: &str = "symbol";
const CALLABLE_TAG: &str = "fn";

/// A parsed document: the graph plus its root value.
#[derive(Debug, Clone)]
pub struct Document {
    pub graph: Graph,
    pub root: Value,
}

/// Parses YAML or JSON text into a [`Document`].
///
/// # Errors
///
/// Returns an error if the text is not valid YAML.
pub fn parse_document(source: &str) -> Result<Document> {
    let yaml: YamlValue = serde_yaml::from_str(source).context("Failed to parse document")?;
    Ok(from_yaml(&yaml))
}

/// Converts an already parsed `serde_yaml::Value` into a [`Document`].
pub fn from_yaml(value: &YamlValue) -> Document {
    let mut graph = Graph::new();
    let root = convert(&mut graph, value);
    Document { graph, root }
}

fn convert(graph: &mut Graph, value: &YamlValue) -> Value {
    match value {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Boolean(*b),
        YamlValue::Number(n) => convert_number(n),
        YamlValue::String(s) => Value::String(s.clone()),
        YamlValue::Sequence(items) => {
            let items: Vec<Value> = items.iter().map(|item| convert(graph, item)).collect();
            Value::Node(graph.add_sequence(items))
        }
        YamlValue::Mapping(mapping) => convert_mapping(graph, mapping, None),
        YamlValue::Tagged(tagged) => {
            let tag = tag_name(&tagged.tag);
            convert_tagged(graph, &tag, &tagged.value)
        }
    }
}

fn convert_number(n: &serde_yaml::Number) -> Value {
    match n.as_i64() {
        Some(i) => Value::Number(Number::Integer(i)),
        None => Value::Number(Number::Float(n.as_f64().unwrap_or(f64::NAN))),
    }
}

fn convert_tagged(graph: &mut Graph, tag: &str, inner: &YamlValue) -> Value {
    match (tag, inner) {
        (SYMBOL_TAG, _) => Value::Opaque(graph.shared_key(&scalar_text(inner))),
        (CALLABLE_TAG, _) => Value::Callable(Callable::new(scalar_text(inner))),
        (class, YamlValue::Mapping(mapping)) => {
            graph.types_mut().register(class);
            convert_mapping(graph, mapping, Some(class))
        }
        (class, YamlValue::Sequence(_)) => {
            tracing::debug!(tag = class, "ignoring tag on sequence");
            convert(graph, inner)
        }
        (class, scalar) => {
            graph.types_mut().register(class);
            let value = convert(graph, scalar);
            let mut record = Record::instance_of(class);
            record.insert("value", Property::hidden(value));
            Value::Node(graph.add(Container::Record(record)))
        }
    }
}

fn convert_mapping(graph: &mut Graph, mapping: &serde_yaml::Mapping, class: Option<&str>) -> Value {
    let record_keys: Option<Vec<Key>> = mapping
        .keys()
        .map(|key| record_key(graph, key))
        .collect();

    match record_keys {
        Some(keys) => {
            let mut record = match class {
                Some(class) => Record::instance_of(class),
                None => Record::new(),
            };
            for (key, value) in keys.into_iter().zip(mapping.values()) {
                let value = convert(graph, value);
                record.insert(key, Property::data(value));
            }
            Value::Node(graph.add(Container::Record(record)))
        }
        None => {
            if let Some(class) = class {
                tracing::debug!(class, "mapping with non-string keys cannot carry a class");
            }
            let entries = mapping
                .iter()
                .map(|(key, value)| (convert(graph, key), convert(graph, value)))
                .collect();
            Value::Node(graph.add(Container::Map(entries)))
        }
    }
}

/// Returns a record key for string and `!symbol` keys, `None` otherwise.
fn record_key(graph: &mut Graph, key: &YamlValue) -> Option<Key> {
    match key {
        YamlValue::String(s) => Some(Key::Name(s.clone())),
        YamlValue::Tagged(tagged) if tag_name(&tagged.tag) == SYMBOL_TAG => {
            Some(Key::Opaque(graph.shared_key(&scalar_text(&tagged.value))))
        }
        _ => None,
    }
}

fn tag_name(tag: &serde_yaml::value::Tag) -> String {
    let text = tag.to_string();
    text.strip_prefix('!').unwrap_or(&text).to_string()
}

fn scalar_text(value: &YamlValue) -> String {
    match value {
        YamlValue::String(s) => s.clone(),
        YamlValue::Number(n) => n.to_string(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Null => String::new(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
    }
}
