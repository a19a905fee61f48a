//! Search modes.

use super::error::SearchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which predicates a search evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Compare values against the criterion
    Value,
    /// Compare field names and entry keys against the criterion
    Key,
    /// Test runtime types against the criterion
    Type,
    /// All three at once; one hit per predicate that matches
    #[default]
    All,
}

impl SearchMode {
    pub const NAMES: [&'static str; 4] = ["value", "key", "type", "all"];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Value => "value",
            SearchMode::Key => "key",
            SearchMode::Type => "type",
            SearchMode::All => "all",
        }
    }

    pub fn checks_values(&self) -> bool {
        matches!(self, SearchMode::Value | SearchMode::All)
    }

    pub fn checks_keys(&self) -> bool {
        matches!(self, SearchMode::Key | SearchMode::All)
    }

    pub fn checks_types(&self) -> bool {
        matches!(self, SearchMode::Type | SearchMode::All)
    }
}

impl FromStr for SearchMode {
    type Err = SearchError;

    /// Parses a mode name. The empty string selects [`SearchMode::All`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "value" => Ok(SearchMode::Value),
            "key" => Ok(SearchMode::Key),
            "type" => Ok(SearchMode::Type),
            "all" | "" => Ok(SearchMode::All),
            other => Err(SearchError::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
