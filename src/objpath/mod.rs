//! Object path parsing and resolution.
//!
//! A path names a single location inside an object graph. Paths produced by
//! the search engine format back into this syntax, so a hit can be fetched
//! again with [`resolve`].
//!
//! # Supported Syntax
//!
//! - `name`, `.name` - Named field access
//! - `[0]` - Sequence index
//! - `["a.b"]`, `[any text]` - Field names that are not plain identifiers
//! - `[Symbol(desc)]` - Entry keyed by an opaque key with that description
//! - `get("key")`, `get(Symbol(desc))` - Associative container lookup
//! - `[Symbol("a]b")]` - Quoted description; `\` escapes inside quotes
//!
//! # Examples
//!
//! ```
//! // items[1].id              - field of the second item
//! // withSymbol[Symbol(tag)]  - opaque-keyed field
//! // lookup.get("mapKey1")    - associative entry
//! ```

pub mod ast;
pub mod error;
pub mod parser;
pub mod resolver;

pub use ast::{Path, Step};
pub use error::PathError;
pub use parser::Parser;
pub use resolver::{resolve, Resolver};

impl std::str::FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::parse_strict(s)
    }
}
