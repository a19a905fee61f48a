//! Depth-first traversal that collects search hits.

use super::criterion::Criterion;
use super::error::SearchError;
use super::mode::SearchMode;
use super::options::{EntryKey, SearchOptions};
use super::result::{MatchKind, MatchResult};
use crate::document::graph::{Container, Graph};
use crate::document::node::{Key, NodeId, Value};
use crate::objpath::{Path, Step};
use std::borrow::Cow;
use std::collections::HashSet;

/// Searches `target` for locations matching `criterion`.
///
/// `mode` is one of `value`, `key`, `type` or `all`; the empty string means
/// `all`. Any other mode fails before the graph is touched.
///
/// # Example
///
/// ```
/// use graphsift::document::graph::Graph;
/// use graphsift::document::node::Value;
/// use graphsift::search::{search, SearchOptions};
///
/// let mut graph = Graph::new();
/// let root = graph.add_record();
/// graph.set(root, "greeting", "hello").unwrap();
///
/// let target = Value::Node(root);
/// let hits = search(&graph, &target, "value", "hello", &SearchOptions::default()).unwrap();
/// assert_eq!(hits[0].path.to_string(), "greeting");
/// assert!(search(&graph, &target, "bogus", "hello", &SearchOptions::default()).is_err());
/// ```
pub fn search<'g>(
    graph: &'g Graph,
    target: &'g Value,
    mode: &str,
    criterion: impl Into<Criterion>,
    options: &SearchOptions<'_>,
) -> Result<Vec<MatchResult<'g>>, SearchError> {
    let mode = mode.parse::<SearchMode>()?;
    Ok(search_with_mode(graph, target, mode, criterion, options))
}

/// Like [`search`], with an already parsed mode.
pub fn search_with_mode<'g>(
    graph: &'g Graph,
    target: &'g Value,
    mode: SearchMode,
    criterion: impl Into<Criterion>,
    options: &SearchOptions<'_>,
) -> Vec<MatchResult<'g>> {
    if target.is_nullish() {
        return Vec::new();
    }
    let mut searcher = Searcher::new(graph, mode, criterion.into(), options);
    searcher.visit(&Cow::Borrowed(target), &Path::root(), 1);
    searcher.results
}

/// State of one search call.
struct Searcher<'g, 'o, 'f> {
    graph: &'g Graph,
    mode: SearchMode,
    criterion: Criterion,
    options: &'o SearchOptions<'f>,
    visited: HashSet<NodeId>,
    results: Vec<MatchResult<'g>>,
}

impl<'g, 'o, 'f> Searcher<'g, 'o, 'f> {
    fn new(
        graph: &'g Graph,
        mode: SearchMode,
        criterion: Criterion,
        options: &'o SearchOptions<'f>,
    ) -> Self {
        Self {
            graph,
            mode,
            criterion,
            options,
            visited: HashSet::new(),
            results: Vec::new(),
        }
    }

    fn is_full(&self) -> bool {
        self.results.len() >= self.options.max_results
    }

    fn push(&mut self, path: &Path, value: &Cow<'g, Value>, kind: MatchKind) {
        if !self.is_full() {
            self.results
                .push(MatchResult::new(path.clone(), value.clone(), kind));
        }
    }

    /// Tests `value` itself, then walks its children if it is a container
    /// that has not been seen yet.
    fn visit(&mut self, value: &Cow<'g, Value>, path: &Path, depth: usize) {
        if self.options.exceeds_depth(depth) || self.is_full() {
            return;
        }

        if self.mode.checks_types() && self.criterion.matches_type(self.graph, value) {
            self.push(path, value, MatchKind::Type);
        }

        let Some(id) = value.as_node() else {
            return;
        };
        if !self.visited.insert(id) {
            return;
        }

        let graph = self.graph;
        let Some(container) = graph.node(id) else {
            tracing::debug!(node = %id, "skipping reference to missing node");
            return;
        };

        match container {
            Container::Record(record) => {
                for (key, property) in record.iter() {
                    if self.is_full() {
                        break;
                    }
                    if !self.options.accepts(container, EntryKey::Field(key)) {
                        continue;
                    }
                    let child_path = path.child(field_step(key));
                    let child = match property.read() {
                        Ok(child) => child,
                        Err(error) => {
                            tracing::warn!(path = %child_path, %error, "failed to read field");
                            continue;
                        }
                    };
                    if self.mode.checks_keys() && self.criterion.matches_key(key) {
                        self.push(&child_path, &child, MatchKind::Key);
                    }
                    self.visit_child(&child, &child_path, depth);
                }
            }
            Container::Sequence(items) => {
                for (index, item) in items.iter().enumerate() {
                    if self.is_full() {
                        break;
                    }
                    if !self.options.accepts(container, EntryKey::Index(index)) {
                        continue;
                    }
                    let child_path = path.child(Step::Index(index));
                    self.visit_child(&Cow::Borrowed(item), &child_path, depth);
                }
            }
            Container::Map(entries) => {
                for (key, item) in entries {
                    if self.is_full() {
                        break;
                    }
                    if !self.options.accepts(container, EntryKey::Entry(key)) {
                        continue;
                    }
                    let child_path = path.child(entry_step(key));
                    let child = Cow::Borrowed(item);
                    if self.mode.checks_keys() && self.criterion.matches_entry_key(key) {
                        self.push(&child_path, &child, MatchKind::Key);
                    }
                    self.visit_child(&child, &child_path, depth);
                }
            }
        }
    }

    /// Value and scalar type checks for a child, then descent into it.
    /// Composite children are type-tested by [`Searcher::visit`] instead.
    fn visit_child(&mut self, child: &Cow<'g, Value>, path: &Path, depth: usize) {
        if self.mode.checks_values() && self.criterion.matches_value(child) {
            self.push(path, child, MatchKind::Value);
        }
        if child.is_scalar() {
            if self.mode.checks_types() && self.criterion.matches_type(self.graph, child) {
                self.push(path, child, MatchKind::Type);
            }
        } else {
            self.visit(child, path, depth + 1);
        }
    }
}

fn field_step(key: &Key) -> Step {
    match key {
        Key::Name(name) => Step::Field(name.clone()),
        Key::Opaque(opaque) => {
            Step::OpaqueKeyRef(opaque.description().unwrap_or_default().to_string())
        }
    }
}

fn entry_step(key: &Value) -> Step {
    match key {
        Value::Opaque(opaque) => Step::ContainerKey {
            key: opaque.description().unwrap_or_default().to_string(),
            opaque: true,
        },
        other => Step::ContainerKey {
            key: other.to_string(),
            opaque: false,
        },
    }
}
