//! The edit journal — a serializable log of applied operations.
//!
//! Each mutating operation that actually applies appends one [`EditRecord`]
//! with its parameters; no-ops and `copy` leave no trace. The journal is a
//! passive record for display and session export — undo and redo do not
//! rewrite it, and restoring one does not replay any audio.

use serde::{Deserialize, Serialize};

use crate::curve::FadeCurve;
use crate::error::Result;

/// One applied edit operation and its parameters.
///
/// Pasted content is recorded by its duration in seconds, not its samples,
/// so a journal stays small regardless of buffer size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditRecord {
    /// Range removed and returned as a clip.
    Cut {
        /// Range start in seconds.
        start_s: f64,
        /// Range end in seconds.
        end_s: f64,
    },
    /// Range removed and discarded.
    Delete {
        /// Range start in seconds.
        start_s: f64,
        /// Range end in seconds.
        end_s: f64,
    },
    /// Clip splice-inserted at a position.
    Paste {
        /// Insertion position in seconds.
        position_s: f64,
        /// Duration of the inserted clip in seconds.
        inserted_s: f64,
    },
    /// Everything outside the range removed.
    Trim {
        /// Range start in seconds.
        start_s: f64,
        /// Range end in seconds.
        end_s: f64,
    },
    /// Range zeroed in place.
    Silence {
        /// Range start in seconds.
        start_s: f64,
        /// Range end in seconds.
        end_s: f64,
    },
    /// Range reversed in place.
    Reverse {
        /// Range start in seconds.
        start_s: f64,
        /// Range end in seconds.
        end_s: f64,
    },
    /// Gain ramp 0 → 1 applied.
    FadeIn {
        /// Fade start in seconds.
        start_s: f64,
        /// Fade duration in seconds.
        duration_s: f64,
        /// Ramp shape.
        curve: FadeCurve,
    },
    /// Gain ramp 1 → 0 applied.
    FadeOut {
        /// Fade start in seconds.
        start_s: f64,
        /// Fade duration in seconds.
        duration_s: f64,
        /// Ramp shape.
        curve: FadeCurve,
    },
    /// Whole buffer scaled to a target peak level.
    Normalize {
        /// Target peak level in dBFS.
        target_db: f64,
        /// The linear gain that was applied.
        gain: f32,
    },
    /// Whole buffer scaled by a fixed amount.
    Gain {
        /// Gain in decibels.
        db: f64,
    },
}

/// Append-only log of applied edits, serializable to JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditJournal {
    /// Records in application order (oldest first).
    records: Vec<EditRecord>,
}

impl EditJournal {
    /// Create a new, empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub(crate) fn push(&mut self, record: EditRecord) {
        self.records.push(record);
    }

    /// All records in application order.
    pub fn records(&self) -> &[EditRecord] {
        &self.records
    }

    /// Number of recorded operations.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop all records.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Serialize the journal to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize a journal from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
