//! Step and path types for object path expressions.

use std::fmt::{self, Write};

/// A single navigation step.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    /// Named field of a record (`name`, `.name` or `["name"]`)
    Field(String),
    /// Position in a sequence (`[0]`)
    Index(usize),
    /// Entry whose key is an opaque key with this description (`[Symbol(desc)]`)
    OpaqueKeyRef(String),
    /// Lookup in an associative container (`get("key")` or `get(Symbol(desc))`)
    ContainerKey { key: String, opaque: bool },
}

impl Step {
    /// Returns true for steps that navigate into a record or sequence.
    pub fn is_navigation(&self) -> bool {
        !matches!(self, Step::ContainerKey { .. })
    }
}

/// Returns true if `name` can be written without brackets and parse back to
/// the same field.
fn is_bare_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().all(|ch| ch.is_ascii_digit())
        && !name
            .chars()
            .any(|ch| ch.is_whitespace() || matches!(ch, '.' | '[' | ']' | '(' | ')' | '"' | '\''))
}

/// Returns true if an opaque-key description can be written inside
/// `Symbol(...)` without quoting.
fn is_bare_description(description: &str) -> bool {
    !description
        .chars()
        .any(|ch| matches!(ch, '[' | ']' | '(' | ')' | '"' | '\'' | '\\'))
}

/// Writes `text` in double quotes, escaping `"` and `\`.
fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    f.write_char('"')?;
    for ch in text.chars() {
        if matches!(ch, '"' | '\\') {
            f.write_char('\\')?;
        }
        f.write_char(ch)?;
    }
    f.write_char('"')
}

fn write_symbol(f: &mut fmt::Formatter<'_>, description: &str) -> fmt::Result {
    f.write_str("Symbol(")?;
    if is_bare_description(description) {
        f.write_str(description)?;
    } else {
        write_quoted(f, description)?;
    }
    f.write_char(')')
}

/// A complete path: the steps from a root value to one location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    /// Steps that make up the path.
    pub steps: Vec<Step>,
}

impl Path {
    /// Creates a new path with the given steps.
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// An empty path, denoting the root itself.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Returns a copy of this path extended by one step.
    pub fn child(&self, step: Step) -> Self {
        let mut steps = Vec::with_capacity(self.steps.len() + 1);
        steps.extend_from_slice(&self.steps);
        steps.push(step);
        Self { steps }
    }

    /// Returns true if no step is an associative lookup.
    pub fn is_plain(&self) -> bool {
        self.steps.iter().all(Step::is_navigation)
    }
}

impl fmt::Display for Path {
    /// Formats the path in the syntax accepted by [`Parser`](super::Parser).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, step) in self.steps.iter().enumerate() {
            let separator = if position == 0 { "" } else { "." };
            match step {
                Step::Field(name) if is_bare_name(name) => write!(f, "{}{}", separator, name)?,
                Step::Field(name) => {
                    f.write_char('[')?;
                    write_quoted(f, name)?;
                    f.write_char(']')?
                }
                Step::Index(index) => write!(f, "[{}]", index)?,
                Step::OpaqueKeyRef(description) => {
                    f.write_char('[')?;
                    write_symbol(f, description)?;
                    f.write_char(']')?
                }
                Step::ContainerKey { key, opaque } => {
                    write!(f, "{}get(", separator)?;
                    if *opaque {
                        write_symbol(f, key)?;
                    } else {
                        write_quoted(f, key)?;
                    }
                    f.write_char(')')?
                }
            }
        }
        Ok(())
    }
}

impl FromIterator<Step> for Path {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
