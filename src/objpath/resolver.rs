use super::ast::{Path, Step};
use super::parser::Parser;
use crate::document::graph::{Container, Graph, Property};
use crate::document::node::{Key, OpaqueKey, Value};
use std::borrow::Cow;
use std::fmt;

/// Resolves a path string against `target`.
///
/// Returns `None` when any step cannot be followed: a missing key, an index
/// out of range, a step applied to a scalar or to null, or a computed field
/// whose read fails.
///
/// # Example
///
/// ```
/// use graphsift::document::graph::Graph;
/// use graphsift::document::node::Value;
/// use graphsift::objpath::resolve;
///
/// let mut graph = Graph::new();
/// let root = graph.add_record();
/// graph.set(root, "a", 1).unwrap();
///
/// let target = Value::Node(root);
/// assert_eq!(resolve(&graph, &target, "a").as_deref(), Some(&Value::from(1)));
/// assert!(resolve(&graph, &target, "a.b.c").is_none());
/// ```
pub fn resolve<'a>(graph: &'a Graph, target: &'a Value, path: &str) -> Option<Cow<'a, Value>> {
    Resolver::new(graph).resolve(target, &Parser::parse(path))
}

/// Replays parsed paths against a graph.
pub struct Resolver<'a> {
    graph: &'a Graph,
}

impl<'a> Resolver<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Resolver { graph }
    }

    /// Follows every step of `path` starting at `target`.
    pub fn resolve(&self, target: &'a Value, path: &Path) -> Option<Cow<'a, Value>> {
        let mut current = Cow::Borrowed(target);
        for step in path {
            if current.is_nullish() {
                return None;
            }
            current = self.step(&current, step)?;
        }
        Some(current)
    }

    fn step(&self, current: &Value, step: &Step) -> Option<Cow<'a, Value>> {
        let container = self.graph.node(current.as_node()?)?;
        match step {
            Step::Field(name) => read_property(name, container.as_record()?.field(name)?),
            Step::Index(index) => container
                .as_sequence()?
                .get(*index)
                .map(Cow::Borrowed),
            Step::OpaqueKeyRef(description) => match container {
                Container::Record(record) => {
                    let (key, property) = record.iter().find(|(key, _)| match key {
                        Key::Opaque(opaque) => opaque.has_canonical_form(description),
                        Key::Name(_) => false,
                    })?;
                    read_property(key, property)
                }
                Container::Map(entries) => find_opaque_entry(entries, description),
                Container::Sequence(_) => None,
            },
            Step::ContainerKey { key, opaque } => {
                let entries = container.as_map()?;
                if *opaque {
                    find_opaque_entry(entries, key)
                } else {
                    find_entry(entries, key)
                }
            }
        }
    }

}

fn read_property<'a>(key: impl fmt::Display, property: &'a Property) -> Option<Cow<'a, Value>> {
    match property.read() {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::warn!(%key, %error, "failed to read field while resolving path");
            None
        }
    }
}

/// Finds an entry keyed by the string `key`, falling back to any key whose
/// display form equals it (`get("42")` finds the numeric key `42`).
fn find_entry<'a>(entries: &'a [(Value, Value)], key: &str) -> Option<Cow<'a, Value>> {
    entries
        .iter()
        .find(|(candidate, _)| candidate.as_str() == Some(key))
        .or_else(|| {
            entries
                .iter()
                .find(|(candidate, _)| candidate.is_scalar() && candidate.to_string() == key)
        })
        .map(|(_, value)| Cow::Borrowed(value))
}

fn find_opaque_entry<'a>(
    entries: &'a [(Value, Value)],
    description: &str,
) -> Option<Cow<'a, Value>> {
    entries
        .iter()
        .find(|(candidate, _)| {
            candidate
                .as_opaque()
                .is_some_and(|opaque: &OpaqueKey| opaque.has_canonical_form(description))
        })
        .map(|(_, value)| Cow::Borrowed(value))
}
