//! The editor facade — current buffer, bounded history, and journal.
//!
//! [`WaveEditor`] owns the single live [`SampleBuffer`] plus the undo/redo
//! [`History`] and the [`EditJournal`]. Every mutating operation first pushes
//! the pre-edit buffer onto the undo stack (clearing redo), then applies the
//! edit — that ordering is what makes `undo` correct.
//!
//! # Fail-soft ranges
//!
//! Range-taking operations validate defensively and **no-op** on a bad range
//! (`start >= end`, negative start, end past the duration) instead of
//! raising: they return `false`/`None` and leave the buffer, history, and
//! journal untouched. Callers that care must check the return value.
//!
//! # Snapshot semantics
//!
//! [`buffer`](WaveEditor::buffer) borrows the live buffer, so the borrow
//! checker prevents holding it across an edit. Playback and export consumers
//! should take an independent deep copy via [`to_buffer`](WaveEditor::to_buffer).

use crest_buffer::SampleBuffer;

use crate::curve::FadeCurve;
use crate::error::Result;
use crate::history::{History, DEFAULT_MAX_DEPTH};
use crate::journal::{EditJournal, EditRecord};
use crate::ops::{self, FadeDirection};
use crate::range;

/// Non-destructive waveform editor with bounded undo/redo.
///
/// # Example
/// ```rust
/// use crest_buffer::SampleBuffer;
/// use crest_edit::{FadeCurve, WaveEditor};
///
/// let buf = SampleBuffer::from_channels(vec![vec![0.5; 44_100]], 44_100).unwrap();
/// let mut editor = WaveEditor::new(buf);
///
/// assert!(editor.silence(0.25, 0.5));
/// assert!(editor.fade_in(0.0, 0.1, FadeCurve::Linear));
/// assert!(editor.undo());
/// assert!(editor.undo());
/// assert_eq!(editor.peak(), 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct WaveEditor {
    /// The live buffer; replaced wholesale (or mutated as an owned copy) by
    /// every applied edit.
    current: SampleBuffer,
    /// Bounded undo/redo snapshot stacks.
    history: History,
    /// Log of applied operations.
    journal: EditJournal,
}

impl WaveEditor {
    /// Create an editor owning the given buffer, with the default undo depth.
    pub fn new(buffer: SampleBuffer) -> Self {
        Self::with_max_depth(buffer, DEFAULT_MAX_DEPTH)
    }

    /// Create an editor with an explicit maximum undo depth.
    pub fn with_max_depth(buffer: SampleBuffer, max_depth: usize) -> Self {
        Self {
            current: buffer,
            history: History::new(max_depth),
            journal: EditJournal::new(),
        }
    }

    /// Create an editor directly from decoded per-channel sample data.
    ///
    /// Validates the channel data the same way
    /// [`SampleBuffer::from_channels`] does.
    pub fn from_channels(channels: Vec<Vec<f32>>, sample_rate: u32) -> Result<Self> {
        Ok(Self::new(SampleBuffer::from_channels(channels, sample_rate)?))
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// Borrow the live buffer (read-only snapshot semantics).
    pub fn buffer(&self) -> &SampleBuffer {
        &self.current
    }

    /// Deep clone of the live buffer, for handoff to playback or export.
    pub fn to_buffer(&self) -> SampleBuffer {
        self.current.clone()
    }

    /// Duration of the live buffer in seconds.
    pub fn duration(&self) -> f64 {
        self.current.duration()
    }

    /// Sample count per channel of the live buffer.
    pub fn len(&self) -> usize {
        self.current.len()
    }

    /// True if the live buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.current.sample_rate()
    }

    /// Channel count.
    pub fn num_channels(&self) -> usize {
        self.current.num_channels()
    }

    // ── Analysis (read-only, no history interaction) ────────────────

    /// Maximum absolute sample value across all channels.
    pub fn peak(&self) -> f32 {
        self.current.peak()
    }

    /// Root-mean-square level over all channels.
    pub fn rms(&self) -> f32 {
        self.current.rms()
    }

    /// Time in seconds of the global peak sample.
    pub fn peak_time(&self) -> f64 {
        self.current.peak_time()
    }

    // ── Edit operations ─────────────────────────────────────────────

    /// Remove `[start_s, end_s)`, closing the gap, and return the removed
    /// segment as a standalone buffer. `None` on an invalid range.
    pub fn cut(&mut self, start_s: f64, end_s: f64) -> Option<SampleBuffer> {
        let range = range::resolve(&self.current, start_s, end_s)?;
        self.history.record(self.current.clone());
        let (remaining, removed) = ops::remove(&self.current, range);
        self.current = remaining;
        self.journal.push(EditRecord::Cut { start_s, end_s });
        Some(removed)
    }

    /// Standalone buffer of `[start_s, end_s)`; does not mutate, touch
    /// history, or journal. `None` on an invalid range.
    pub fn copy(&self, start_s: f64, end_s: f64) -> Option<SampleBuffer> {
        let range = range::resolve(&self.current, start_s, end_s)?;
        Some(ops::extract(&self.current, range))
    }

    /// Remove `[start_s, end_s)` and discard it. `false` on an invalid range.
    pub fn delete(&mut self, start_s: f64, end_s: f64) -> bool {
        let Some(range) = range::resolve(&self.current, start_s, end_s) else {
            return false;
        };
        self.history.record(self.current.clone());
        let (remaining, _removed) = ops::remove(&self.current, range);
        self.current = remaining;
        self.journal.push(EditRecord::Delete { start_s, end_s });
        true
    }

    /// Splice-insert `clip` at `position_s` seconds, extending the buffer.
    ///
    /// `position_s` is valid in `[0, duration]` inclusive — a position of
    /// exactly `duration` appends. Destination channels beyond the clip's
    /// channel count reuse the clip's last channel. `false` (no-op) on a
    /// position outside that range or an empty clip.
    pub fn paste(&mut self, position_s: f64, clip: &SampleBuffer) -> bool {
        // Positive-form guard: a NaN position fails both comparisons.
        if !(position_s >= 0.0 && position_s <= self.current.duration()) || clip.is_empty() {
            return false;
        }
        let at = self.current.sample_index(position_s);
        self.history.record(self.current.clone());
        self.current = ops::splice(&self.current, at, clip);
        self.journal.push(EditRecord::Paste {
            position_s,
            inserted_s: clip.duration(),
        });
        true
    }

    /// Keep only `[start_s, end_s)`. `false` on an invalid range.
    pub fn trim(&mut self, start_s: f64, end_s: f64) -> bool {
        let Some(range) = range::resolve(&self.current, start_s, end_s) else {
            return false;
        };
        self.history.record(self.current.clone());
        self.current = ops::extract(&self.current, range);
        self.journal.push(EditRecord::Trim { start_s, end_s });
        true
    }

    /// Zero `[start_s, end_s)` in place; length unchanged. `false` on an
    /// invalid range.
    pub fn silence(&mut self, start_s: f64, end_s: f64) -> bool {
        let Some(range) = range::resolve(&self.current, start_s, end_s) else {
            return false;
        };
        self.history.record(self.current.clone());
        ops::silence_in_place(&mut self.current, range);
        self.journal.push(EditRecord::Silence { start_s, end_s });
        true
    }

    /// Reverse sample order within `[start_s, end_s)`, per channel. `false`
    /// on an invalid range.
    pub fn reverse(&mut self, start_s: f64, end_s: f64) -> bool {
        let Some(range) = range::resolve(&self.current, start_s, end_s) else {
            return false;
        };
        self.history.record(self.current.clone());
        ops::reverse_in_place(&mut self.current, range);
        self.journal.push(EditRecord::Reverse { start_s, end_s });
        true
    }

    /// Ramp gain 0 → 1 over `[start_s, start_s + duration_s)` using `curve`.
    /// `false` on an invalid range.
    pub fn fade_in(&mut self, start_s: f64, duration_s: f64, curve: FadeCurve) -> bool {
        let Some(range) = range::resolve(&self.current, start_s, start_s + duration_s) else {
            return false;
        };
        self.history.record(self.current.clone());
        ops::fade_in_place(&mut self.current, range, curve, FadeDirection::In);
        self.journal.push(EditRecord::FadeIn {
            start_s,
            duration_s,
            curve,
        });
        true
    }

    /// Ramp gain 1 → 0 over `[start_s, start_s + duration_s)` using `curve`.
    /// `false` on an invalid range.
    pub fn fade_out(&mut self, start_s: f64, duration_s: f64, curve: FadeCurve) -> bool {
        let Some(range) = range::resolve(&self.current, start_s, start_s + duration_s) else {
            return false;
        };
        self.history.record(self.current.clone());
        ops::fade_in_place(&mut self.current, range, curve, FadeDirection::Out);
        self.journal.push(EditRecord::FadeOut {
            start_s,
            duration_s,
            curve,
        });
        true
    }

    /// Scale the whole buffer so its peak reaches `target_db` dBFS.
    ///
    /// Returns the linear gain that was applied. A silent buffer (peak 0) is
    /// left untouched — including history and the redo stack — and returns
    /// 0.0; that is a soft outcome, not an error.
    pub fn normalize(&mut self, target_db: f64) -> f32 {
        let peak = self.current.peak();
        if peak == 0.0 {
            return 0.0;
        }
        let gain = ops::db_to_linear(target_db) / peak;
        self.history.record(self.current.clone());
        ops::apply_gain(&mut self.current, gain);
        self.journal.push(EditRecord::Normalize { target_db, gain });
        gain
    }

    /// Apply `db` decibels of gain (`10^(db/20)`) to the whole buffer.
    pub fn gain(&mut self, db: f64) {
        self.history.record(self.current.clone());
        ops::apply_gain(&mut self.current, ops::db_to_linear(db));
        self.journal.push(EditRecord::Gain { db });
    }

    // ── History ─────────────────────────────────────────────────────

    /// Step back one edit. `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.current)
    }

    /// Step forward one undone edit. `false` if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.current)
    }

    /// Drop all history and the journal (used when loading a new file).
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.journal.clear();
    }

    /// Number of edits that can currently be undone.
    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    /// Number of edits that can currently be redone.
    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    /// The configured maximum undo depth.
    pub fn max_depth(&self) -> usize {
        self.history.max_depth()
    }

    /// The log of applied operations.
    pub fn journal(&self) -> &EditJournal {
        &self.journal
    }
}
