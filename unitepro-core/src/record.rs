//! Conversion history records

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::Category;

/// Immutable trace of one successful conversion
///
/// Created only by a successful engine invocation; the hosting session
/// appends it to its rolling history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub category: Category,
    pub from_value: f64,
    /// Canonical identifier of the source unit
    pub from_unit: String,
    pub to_value: f64,
    /// Canonical identifier of the target unit
    pub to_unit: String,
    pub timestamp: DateTime<Local>,
}

impl ConversionRecord {
    /// Stamp a new record with the current local time
    pub fn new(
        category: Category,
        from_value: f64,
        from_unit: impl Into<String>,
        to_value: f64,
        to_unit: impl Into<String>,
    ) -> Self {
        ConversionRecord {
            category,
            from_value,
            from_unit: from_unit.into(),
            to_value,
            to_unit: to_unit.into(),
            timestamp: Local::now(),
        }
    }
}
