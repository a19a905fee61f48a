//! graphsift - search object graphs by value, key or type, and resolve path
//! expressions back to the values they name.
//!
//! A document is an arena [`Graph`] of records, sequences and associative
//! containers. [`search`] walks it depth-first from a target value and
//! returns every matching location as a [`MatchResult`]; each hit's path
//! formats into the syntax accepted by [`resolve`].
//!
//! ```
//! use graphsift::{parse_document, resolve, search, SearchOptions};
//!
//! let doc = parse_document("users:\n  - name: Ann\n  - name: Bob\n").unwrap();
//! let hits = search(&doc.graph, &doc.root, "value", "Bob", &SearchOptions::default()).unwrap();
//! let path = hits[0].path.to_string();
//! assert_eq!(path, "users[1].name");
//! assert_eq!(
//!     resolve(&doc.graph, &doc.root, &path).as_deref(),
//!     Some(&hits[0].value.clone().into_owned())
//! );
//! ```

pub mod config;
pub mod document;
pub mod file;
pub mod objpath;
pub mod report;
pub mod search;

pub use document::{parse_document, Document, Graph, Value};
pub use objpath::{resolve, Path, Step};
pub use search::{
    search, search_with_mode, Criterion, MatchKind, MatchResult, SearchError, SearchMode,
    SearchOptions,
};
