use crate::document::graph::Container;
use crate::document::node::{Key, Value};
use std::fmt;

/// Default cap on the number of hits a search collects.
pub const DEFAULT_MAX_RESULTS: usize = 10_000;

/// The key under which a child sits in its parent container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntryKey<'a> {
    /// Record field
    Field(&'a Key),
    /// Sequence position
    Index(usize),
    /// Associative container key
    Entry(&'a Value),
}

type FilterFn<'f> = dyn Fn(&Container, EntryKey<'_>) -> bool + 'f;

/// Tuning knobs for a search.
pub struct SearchOptions<'f> {
    filter: Option<Box<FilterFn<'f>>>,
    /// Deepest level to descend to; 0 means unlimited
    pub max_depth: usize,
    /// Stop once this many hits are collected
    pub max_results: usize,
}

impl<'f> SearchOptions<'f> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skips every child for which `filter(parent, key)` returns false. A
    /// skipped child is neither matched nor descended into.
    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&Container, EntryKey<'_>) -> bool + 'f,
    {
        self.filter = Some(Box::new(filter));
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub(crate) fn accepts(&self, parent: &Container, key: EntryKey<'_>) -> bool {
        self.filter.as_ref().map_or(true, |filter| filter(parent, key))
    }

    pub(crate) fn exceeds_depth(&self, depth: usize) -> bool {
        self.max_depth > 0 && depth > self.max_depth
    }
}

impl Default for SearchOptions<'_> {
    fn default() -> Self {
        Self {
            filter: None,
            max_depth: 0,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl fmt::Debug for SearchOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchOptions")
            .field("filter", &self.filter.as_ref().map(|_| ".."))
            .field("max_depth", &self.max_depth)
            .field("max_results", &self.max_results)
            .finish()
    }
}
