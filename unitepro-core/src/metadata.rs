//! Per-unit display metadata

use std::fmt;

use serde::{Deserialize, Serialize};

/// Display name and symbol for a unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitMetadata {
    /// Human-readable name (e.g. "Pouce")
    pub name: String,
    /// Short symbol (e.g. "in")
    pub symbol: String,
}

impl UnitMetadata {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        UnitMetadata {
            name: name.into(),
            symbol: symbol.into(),
        }
    }

    /// Fallback for an identifier the catalog does not know: the raw id
    /// stands in for both name and symbol, so unrecognized units still
    /// display instead of failing.
    pub fn fallback(id: &str) -> Self {
        UnitMetadata {
            name: id.to_string(),
            symbol: id.to_string(),
        }
    }
}

impl fmt::Display for UnitMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name == self.symbol {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} ({})", self.name, self.symbol)
        }
    }
}
