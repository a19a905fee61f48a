//! Graph search.
//!
//! A search walks a graph depth-first from a target value and collects every
//! location whose key, value or runtime type matches a [`Criterion`]. The
//! walk is cycle-safe and bounded by [`SearchOptions`].
//!
//! ```
//! use graphsift::document::graph::Graph;
//! use graphsift::document::node::Value;
//! use graphsift::search::{search_with_mode, Criterion, SearchMode, SearchOptions};
//!
//! let mut graph = Graph::new();
//! let root = graph.add_record();
//! graph.set(root, "email", "alice@example.com").unwrap();
//! graph.set(root, "phone", "555-0100").unwrap();
//!
//! let target = Value::Node(root);
//! let criterion = Criterion::pattern("@example").unwrap();
//! let hits = search_with_mode(&graph, &target, SearchMode::Value, criterion, &SearchOptions::new());
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].path.to_string(), "email");
//! ```

pub mod criterion;
pub mod engine;
pub mod error;
pub mod mode;
pub mod options;
pub mod result;

pub use criterion::Criterion;
pub use engine::{search, search_with_mode};
pub use error::SearchError;
pub use mode::SearchMode;
pub use options::{EntryKey, SearchOptions, DEFAULT_MAX_RESULTS};
pub use result::{MatchKind, MatchResult};
