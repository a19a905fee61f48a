use crate::document::node::Value;
use crate::objpath::Path;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// Which predicate produced a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Value,
    Key,
    Type,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchKind::Value => write!(f, "value"),
            MatchKind::Key => write!(f, "key"),
            MatchKind::Type => write!(f, "type"),
        }
    }
}

/// One hit produced by a search.
///
/// `value` borrows from the graph, except for values produced by computed
/// fields, which are owned.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult<'a> {
    pub path: Path,
    pub value: Cow<'a, Value>,
    /// Runtime type name of `value`
    pub matched_type: &'static str,
    pub kind: MatchKind,
}

impl<'a> MatchResult<'a> {
    pub fn new(path: Path, value: Cow<'a, Value>, kind: MatchKind) -> Self {
        let matched_type = value.type_name();
        Self {
            path,
            value,
            matched_type,
            kind,
        }
    }
}
