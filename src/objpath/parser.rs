//! Object path tokenizer.
//!
//! A single left-to-right scan turns a path string into [`Step`]s:
//!
//! - `.` outside brackets ends a bare identifier
//! - `[Symbol(desc)]` is an opaque-key step, `[123]` an index, `["a.b"]` or
//!   `[anything else]` a field
//! - `get("key")` and `get(Symbol(desc))` are associative lookups
//! - a description may be quoted as well: `[Symbol("a]b")]`
//! - inside quotes, `\` escapes the next character
//! - whitespace outside brackets is ignored; inside brackets it is kept
//! - a single leading `.` is allowed
//!
//! Malformed input never fails: the scan keeps whatever it can and records a
//! [`PathError`] for each repair.

use super::ast::{Path, Step};
use super::error::PathError;

const SYMBOL_OPEN: &str = "Symbol(";
const LOOKUP_CALL: &str = "get";

/// Parser for object path strings.
pub struct Parser {
    chars: Vec<char>,
    position: usize,
    steps: Vec<Step>,
    issues: Vec<PathError>,
    pending_dot: Option<usize>,
}

impl Parser {
    /// Creates a new parser for the given path string.
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            position: 0,
            steps: Vec::new(),
            issues: Vec::new(),
            pending_dot: None,
        }
    }

    /// Parses a path, repairing malformed input on a best-effort basis.
    pub fn parse(input: &str) -> Path {
        let (path, issues) = Self::parse_with_diagnostics(input);
        for issue in &issues {
            tracing::debug!(path = input, %issue, "repaired malformed path");
        }
        path
    }

    /// Parses a path and returns the repairs that were needed.
    pub fn parse_with_diagnostics(input: &str) -> (Path, Vec<PathError>) {
        let mut parser = Parser::new(input);
        parser.scan();
        (Path::new(parser.steps), parser.issues)
    }

    /// Parses a path, failing on the first malformed segment.
    pub fn parse_strict(input: &str) -> Result<Path, PathError> {
        let (path, issues) = Self::parse_with_diagnostics(input);
        match issues.into_iter().next() {
            Some(issue) => Err(issue),
            None => Ok(path),
        }
    }

    fn scan(&mut self) {
        let mut bare = String::new();
        let mut bare_start = 0;

        while let Some(ch) = self.peek() {
            match ch {
                '.' => {
                    self.flush_bare(&mut bare);
                    if self.pending_dot.is_some() {
                        self.issues.push(PathError::EmptySegment {
                            position: self.position,
                        });
                    }
                    self.pending_dot = Some(self.position);
                    self.next();
                }
                '[' => {
                    self.flush_bare(&mut bare);
                    self.parse_bracket();
                }
                '(' if bare == LOOKUP_CALL => {
                    bare.clear();
                    self.parse_lookup(bare_start);
                }
                ']' => {
                    self.issues.push(PathError::UnexpectedToken {
                        position: self.position,
                        found: "]".to_string(),
                    });
                    self.next();
                }
                ch if ch.is_whitespace() => {
                    self.next();
                }
                ch => {
                    if bare.is_empty() {
                        bare_start = self.position;
                    }
                    bare.push(ch);
                    self.next();
                }
            }
        }

        self.flush_bare(&mut bare);
        if let Some(position) = self.pending_dot {
            self.issues.push(PathError::EmptySegment { position });
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    /// Returns the next character and advances position.
    fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }

    fn push(&mut self, step: Step) {
        self.pending_dot = None;
        self.steps.push(step);
    }

    fn flush_bare(&mut self, bare: &mut String) {
        if !bare.is_empty() {
            let name = std::mem::take(bare);
            self.push(Step::Field(name));
        }
    }

    /// Collects characters up to the `close` that balances the already
    /// consumed opener. A quoted section at the start, or right after
    /// `Symbol(`, is taken literally and escapes are kept for [`unquote`].
    /// The flag is false if the input ended first.
    fn collect_balanced(&mut self, open: char, close: char) -> (String, bool) {
        let mut content = String::new();
        let mut depth = 1;
        let mut quote: Option<char> = None;

        while let Some(ch) = self.next() {
            match quote {
                Some(_) if ch == '\\' => {
                    content.push(ch);
                    if let Some(escaped) = self.next() {
                        content.push(escaped);
                    }
                }
                Some(q) if ch == q => {
                    quote = None;
                    content.push(ch);
                }
                Some(_) => content.push(ch),
                None => match ch {
                    '"' | '\''
                        if content.trim().is_empty() || content.ends_with(SYMBOL_OPEN) =>
                    {
                        quote = Some(ch);
                        content.push(ch);
                    }
                    ch if ch == open => {
                        depth += 1;
                        content.push(ch);
                    }
                    ch if ch == close => {
                        depth -= 1;
                        if depth == 0 {
                            return (content, true);
                        }
                        content.push(ch);
                    }
                    ch => content.push(ch),
                },
            }
        }

        (content, false)
    }

    /// Parses `[...]` starting at the opening bracket.
    fn parse_bracket(&mut self) {
        let open = self.position;
        self.next();
        let (content, closed) = self.collect_balanced('[', ']');
        if !closed {
            self.issues.push(PathError::UnexpectedEnd {
                position: open,
                expected: "']'".to_string(),
            });
        }

        if content.is_empty() {
            self.issues.push(PathError::EmptySegment { position: open });
            return;
        }

        if let Some(rest) = content.strip_prefix(SYMBOL_OPEN) {
            let description = match rest.strip_suffix(')') {
                Some(description) => description,
                None => {
                    self.issues.push(PathError::UnexpectedEnd {
                        position: open + 1,
                        expected: "')' closing Symbol(".to_string(),
                    });
                    rest
                }
            };
            let description = unquote(description).unwrap_or_else(|| description.to_string());
            self.push(Step::OpaqueKeyRef(description));
        } else if content.chars().all(|ch| ch.is_ascii_digit()) {
            match content.parse::<usize>() {
                Ok(index) => self.push(Step::Index(index)),
                Err(_) => self.push(Step::Field(content)),
            }
        } else {
            let name = unquote(&content).unwrap_or(content);
            self.push(Step::Field(name));
        }
    }

    /// Parses the `(...)` of a `get(...)` lookup. `start` is the position of
    /// the `get` keyword.
    fn parse_lookup(&mut self, start: usize) {
        self.next();
        let (content, closed) = self.collect_balanced('(', ')');
        if !closed {
            self.issues.push(PathError::UnexpectedEnd {
                position: start,
                expected: "')' closing get(".to_string(),
            });
        }

        let content = content.trim();
        if content.is_empty() {
            self.issues.push(PathError::EmptySegment { position: start });
            return;
        }

        let step = if let Some(rest) = content.strip_prefix(SYMBOL_OPEN) {
            let description = rest.strip_suffix(')').unwrap_or_else(|| {
                self.issues.push(PathError::UnexpectedEnd {
                    position: start,
                    expected: "')' closing Symbol(".to_string(),
                });
                rest
            });
            Step::ContainerKey {
                key: unquote(description).unwrap_or_else(|| description.to_string()),
                opaque: true,
            }
        } else {
            Step::ContainerKey {
                key: unquote(content).unwrap_or_else(|| content.to_string()),
                opaque: false,
            }
        };
        self.push(step);
    }
}

/// Strips one pair of matching quotes and resolves `\` escapes.
fn unquote(text: &str) -> Option<String> {
    let quote = text.chars().next().filter(|ch| matches!(ch, '"' | '\''))?;
    let inner = text[1..].strip_suffix(quote)?;

    let mut unescaped = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => unescaped.push(chars.next().unwrap_or('\\')),
            ch => unescaped.push(ch),
        }
    }
    Some(unescaped)
}
