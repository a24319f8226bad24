//! Conversion outcomes
//!
//! Failures never raise. They are values that propagate to the host,
//! which renders a message deterministically.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{format_value, Category, ConversionRecord, UnitMetadata};

/// Fixed user-facing messages, French like the rest of the display layer
pub mod messages {
    pub const INVALID_INPUT: &str = "Veuillez entrer une valeur valide";
    pub const UNSUPPORTED_CONVERSION: &str = "Conversion non supportée";
}

/// Payload of a successful conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub category: Category,
    /// Parsed source value
    pub value: f64,
    /// Source unit display metadata (imperial / English family)
    pub from: UnitMetadata,
    /// Computed target value, unrounded
    pub result: f64,
    /// Target unit display metadata (metric / French family)
    pub to: UnitMetadata,
    /// Freshly stamped record for the caller to append to history
    pub record: ConversionRecord,
}

impl Conversion {
    /// One-line result, e.g. `2 in = 50.8 mm`
    pub fn summary(&self) -> String {
        format!(
            "{} {} = {} {}",
            format_value(self.value),
            self.from.symbol,
            format_value(self.result),
            self.to.symbol
        )
    }
}

/// Tagged result of one conversion attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ConversionOutcome {
    Success(Conversion),
    InvalidInput { message: String },
    UnsupportedConversion { message: String },
}

impl ConversionOutcome {
    /// Raw input did not parse to a finite number
    pub fn invalid_input() -> Self {
        ConversionOutcome::InvalidInput {
            message: messages::INVALID_INPUT.to_string(),
        }
    }

    /// No factor registered for the requested triple
    pub fn unsupported() -> Self {
        ConversionOutcome::UnsupportedConversion {
            message: messages::UNSUPPORTED_CONVERSION.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ConversionOutcome::Success(_))
    }

    pub fn as_success(&self) -> Option<&Conversion> {
        match self {
            ConversionOutcome::Success(c) => Some(c),
            _ => None,
        }
    }

    /// Failure message, if this outcome is a failure
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            ConversionOutcome::Success(_) => None,
            ConversionOutcome::InvalidInput { message }
            | ConversionOutcome::UnsupportedConversion { message } => Some(message),
        }
    }
}

impl fmt::Display for ConversionOutcome {
    /// The line the host shows: a success summary or the fixed message
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionOutcome::Success(c) => write!(f, "{}", c.summary()),
            ConversionOutcome::InvalidInput { message }
            | ConversionOutcome::UnsupportedConversion { message } => {
                write!(f, "{}", message)
            }
        }
    }
}
