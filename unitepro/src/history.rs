//! Bounded conversion history and the session that owns it
//!
//! The engine never touches history; the session appends records after
//! successful calls.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use unitepro_core::{Category, ConversionOutcome, ConversionRecord};

use crate::engine;

/// Maximum records retained, newest first
pub const HISTORY_CAPACITY: usize = 5;

/// Rolling list of the most recent successful conversions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    entries: VecDeque<ConversionRecord>,
}

impl History {
    pub fn new() -> Self {
        History::default()
    }

    /// Prepend a record, evicting the oldest beyond capacity
    pub fn push(&mut self, record: ConversionRecord) {
        self.entries.push_front(record);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    /// Records, newest first
    pub fn iter(&self) -> impl Iterator<Item = &ConversionRecord> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// One interactive session: engine calls plus the rolling history
#[derive(Debug, Default)]
pub struct Session {
    history: History,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    /// Convert and, on success, append the stamped record to history
    pub fn convert(
        &mut self,
        category: Category,
        from_unit: &str,
        to_unit: &str,
        raw_input: &str,
    ) -> ConversionOutcome {
        let outcome = engine::convert(category, from_unit, to_unit, raw_input);
        if let ConversionOutcome::Success(conversion) = &outcome {
            self.history.push(conversion.record.clone());
        }
        outcome
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
