//! Rendering of search hits and resolved values.
//!
//! Text output prints one hit per line with a short preview of the value
//! (`{ 3 fields }`, `[ 2 items ]`, `"Alice"`). JSON output expands values
//! fully; a reference back to an enclosing node is written as
//! `"[Circular]"`.

use crate::document::graph::{Container, Graph, Slot};
use crate::document::node::{Number, Value};
use crate::search::{MatchKind, MatchResult};
use anyhow::Result;
use serde::Serialize;
use serde_json::{Map as JsonMap, Value as JsonValue};
use std::collections::HashSet;

const ROOT_LABEL: &str = "<root>";
const CIRCULAR: &str = "[Circular]";

#[derive(Debug, Serialize)]
struct HitRecord<'a> {
    path: String,
    #[serde(rename = "type")]
    matched_type: &'a str,
    kind: MatchKind,
    value: JsonValue,
}

/// Renders hits as aligned text lines.
pub fn render_text(graph: &Graph, hits: &[MatchResult<'_>], show_types: bool) -> String {
    let labels: Vec<String> = hits.iter().map(|hit| path_label(&hit.path)).collect();
    let width = labels.iter().map(|label| label.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    for (hit, label) in hits.iter().zip(&labels) {
        let preview = preview(graph, &hit.value);
        if show_types {
            out.push_str(&format!(
                "{:<width$}  {:<9}  {}\n",
                label, hit.matched_type, preview
            ));
        } else {
            out.push_str(&format!("{:<width$}  {}\n", label, preview));
        }
    }
    out
}

/// Renders hits as a pretty-printed JSON array of
/// `{path, type, kind, value}` objects.
pub fn render_json(graph: &Graph, hits: &[MatchResult<'_>]) -> Result<String> {
    let records: Vec<HitRecord<'_>> = hits
        .iter()
        .map(|hit| HitRecord {
            path: hit.path.to_string(),
            matched_type: hit.matched_type,
            kind: hit.kind,
            value: to_json(graph, &hit.value),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Renders a single value as JSON.
pub fn render_value_json(graph: &Graph, value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_json(graph, value))?)
}

/// One-line preview of a value.
pub fn preview(graph: &Graph, value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", s),
        Value::Node(id) => match graph.node(*id) {
            Some(Container::Record(record)) => match record.class() {
                Some(class) => format!("{} {{ {} fields }}", class, record.len()),
                None => format!("{{ {} fields }}", record.len()),
            },
            Some(Container::Sequence(items)) => format!("[ {} items ]", items.len()),
            Some(Container::Map(entries)) => format!("Map({})", entries.len()),
            None => value.to_string(),
        },
        other => other.to_string(),
    }
}

/// Converts a value into JSON, expanding nodes recursively.
pub fn to_json(graph: &Graph, value: &Value) -> JsonValue {
    JsonWriter {
        graph,
        ancestors: HashSet::new(),
    }
    .write(value)
}

fn path_label(path: &crate::objpath::Path) -> String {
    if path.is_empty() {
        ROOT_LABEL.to_string()
    } else {
        path.to_string()
    }
}

struct JsonWriter<'g> {
    graph: &'g Graph,
    ancestors: HashSet<crate::document::node::NodeId>,
}

impl JsonWriter<'_> {
    fn write(&mut self, value: &Value) -> JsonValue {
        match value {
            Value::Undefined | Value::Null => JsonValue::Null,
            Value::Boolean(b) => JsonValue::Bool(*b),
            Value::Number(Number::Integer(i)) => JsonValue::from(*i),
            Value::Number(Number::Float(f)) => serde_json::Number::from_f64(*f)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            Value::String(s) => JsonValue::String(s.clone()),
            Value::Opaque(_) | Value::Callable(_) => JsonValue::String(value.to_string()),
            Value::Node(id) => {
                if !self.ancestors.insert(*id) {
                    return JsonValue::String(CIRCULAR.to_string());
                }
                let graph = self.graph;
                let json = match graph.node(*id) {
                    Some(container) => self.write_container(container),
                    None => JsonValue::Null,
                };
                self.ancestors.remove(id);
                json
            }
        }
    }

    fn write_container(&mut self, container: &Container) -> JsonValue {
        match container {
            Container::Record(record) => {
                let mut object = JsonMap::new();
                for key in record.visible_keys() {
                    let Some(property) = record.get(key) else {
                        continue;
                    };
                    // Computed fields are not evaluated for display.
                    let value = match property.slot() {
                        Slot::Data(value) => self.write(value),
                        Slot::Accessor(_) => JsonValue::String("[Getter]".to_string()),
                    };
                    object.insert(key.to_string(), value);
                }
                JsonValue::Object(object)
            }
            Container::Sequence(items) => {
                JsonValue::Array(items.iter().map(|item| self.write(item)).collect())
            }
            Container::Map(entries) => JsonValue::Array(
                entries
                    .iter()
                    .map(|(key, value)| JsonValue::Array(vec![self.write(key), self.write(value)]))
                    .collect(),
            ),
        }
    }
}
