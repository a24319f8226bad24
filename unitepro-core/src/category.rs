//! Measurement categories and unit systems

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CatalogError;

/// One of the three fixed measurement categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Area,
    Volume,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 3] = [Category::Length, Category::Area, Category::Volume];

    /// Stable identifier used in lookups and serialized output
    pub fn id(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Area => "area",
            Category::Volume => "volume",
        }
    }

    /// French display name, as shown by the converter UI
    pub fn label(&self) -> &'static str {
        match self {
            Category::Length => "Longueur",
            Category::Area => "Superficie",
            Category::Volume => "Volume",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    /// Accepts the English identifier or its French spelling,
    /// case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "length" | "longueur" => Ok(Category::Length),
            "area" | "superficie" => Ok(Category::Area),
            "volume" => Ok(Category::Volume),
            _ => Err(CatalogError::UnknownCategory(s.trim().to_string())),
        }
    }
}

/// The two disjoint unit families the converter maps between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum System {
    Imperial,
    Metric,
}

impl System {
    /// Label of the language family the system's units are named in
    pub fn label(&self) -> &'static str {
        match self {
            System::Imperial => "anglais",
            System::Metric => "francais",
        }
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            System::Imperial => write!(f, "imperial"),
            System::Metric => write!(f, "metric"),
        }
    }
}
