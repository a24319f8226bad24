//! Library errors
//!
//! Only catalog lookups can fail as a Rust error; everything on the
//! conversion path is reported as a [`crate::ConversionOutcome`] value.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by catalog lookups
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum CatalogError {
    /// Category string outside the fixed set of three
    #[error("Catégorie inconnue: {0}")]
    UnknownCategory(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = CatalogError::UnknownCategory("poids".to_string());
        assert_eq!(format!("{}", err), "Catégorie inconnue: poids");
    }
}
