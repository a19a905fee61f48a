//! Search criteria and their comparison semantics.
//!
//! One criterion is interpreted three ways, depending on which predicate the
//! search mode evaluates:
//!
//! | Criterion | value predicate | key predicate | type predicate |
//! |---|---|---|---|
//! | `Exact(v)` | `value == v` | name / opaque description / `Symbol(..)` form equals a string `v`; identity for an opaque `v`; `==` for associative keys | string `v` names the runtime type |
//! | `Pattern(re)` | string values matching `re` | string keys, opaque descriptions and `Symbol(..)` forms matching `re` | never |
//! | `Type(tag)` | never | never | `is_instance_of(value, tag)` |

use crate::document::graph::{Graph, TypeTag};
use crate::document::node::{Key, OpaqueKey, Value};
use regex::Regex;

/// What a search looks for.
#[derive(Debug, Clone)]
pub enum Criterion {
    /// Exact equality
    Exact(Value),
    /// Regular-expression match against strings
    Pattern(Regex),
    /// Runtime type membership
    Type(TypeTag),
}

impl Criterion {
    /// Compiles `pattern` into a [`Criterion::Pattern`].
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Criterion::Pattern)
    }

    /// Creates a type criterion for a class name or built-in constructor name.
    pub fn instance_of(name: &str) -> Self {
        Criterion::Type(TypeTag::from_name(name))
    }

    pub(crate) fn matches_value(&self, value: &Value) -> bool {
        match self {
            Criterion::Exact(expected) => value == expected,
            Criterion::Pattern(regex) => value.as_str().is_some_and(|s| regex.is_match(s)),
            Criterion::Type(_) => false,
        }
    }

    /// Key predicate for record fields.
    pub(crate) fn matches_key(&self, key: &Key) -> bool {
        match (self, key) {
            (Criterion::Exact(Value::String(expected)), Key::Name(name)) => name == expected,
            (_, Key::Opaque(opaque)) => self.matches_opaque(opaque),
            (Criterion::Pattern(regex), Key::Name(name)) => regex.is_match(name),
            _ => false,
        }
    }

    /// Key predicate for associative container entries.
    pub(crate) fn matches_entry_key(&self, key: &Value) -> bool {
        match (self, key) {
            (_, Value::Opaque(opaque)) => self.matches_opaque(opaque),
            (Criterion::Exact(expected), key) => key == expected,
            (Criterion::Pattern(regex), Value::String(s)) => regex.is_match(s),
            _ => false,
        }
    }

    pub(crate) fn matches_type(&self, graph: &Graph, value: &Value) -> bool {
        match self {
            Criterion::Exact(Value::String(type_name)) => value.type_name() == type_name,
            Criterion::Type(tag) => graph.is_instance_of(value, tag),
            _ => false,
        }
    }

    fn matches_opaque(&self, opaque: &OpaqueKey) -> bool {
        let description = opaque.description().unwrap_or("");
        match self {
            Criterion::Exact(Value::String(expected)) => {
                description == expected || opaque.to_string() == *expected
            }
            Criterion::Exact(Value::Opaque(expected)) => opaque == expected,
            Criterion::Pattern(regex) => {
                regex.is_match(description) || regex.is_match(&opaque.to_string())
            }
            _ => false,
        }
    }
}

impl From<Value> for Criterion {
    fn from(value: Value) -> Self {
        Criterion::Exact(value)
    }
}

impl From<&str> for Criterion {
    fn from(s: &str) -> Self {
        Criterion::Exact(Value::from(s))
    }
}

impl From<String> for Criterion {
    fn from(s: String) -> Self {
        Criterion::Exact(Value::String(s))
    }
}

impl From<i64> for Criterion {
    fn from(i: i64) -> Self {
        Criterion::Exact(Value::from(i))
    }
}

impl From<i32> for Criterion {
    fn from(i: i32) -> Self {
        Criterion::Exact(Value::from(i))
    }
}

impl From<f64> for Criterion {
    fn from(f: f64) -> Self {
        Criterion::Exact(Value::from(f))
    }
}

impl From<bool> for Criterion {
    fn from(b: bool) -> Self {
        Criterion::Exact(Value::from(b))
    }
}

impl From<OpaqueKey> for Criterion {
    fn from(key: OpaqueKey) -> Self {
        Criterion::Exact(Value::Opaque(key))
    }
}

impl From<Regex> for Criterion {
    fn from(regex: Regex) -> Self {
        Criterion::Pattern(regex)
    }
}

impl From<TypeTag> for Criterion {
    fn from(tag: TypeTag) -> Self {
        Criterion::Type(tag)
    }
}
