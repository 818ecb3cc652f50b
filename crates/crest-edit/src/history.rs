//! Bounded undo/redo history over full buffer snapshots.
//!
//! The history exclusively owns its snapshots; the editor holds the single
//! "current" buffer, distinct from any snapshot. Together the two stacks
//! define a linear timeline — recording a new state after one or more undos
//! discards the forward branch (the redo stack), so there is no
//! redo-after-diverge.

use std::collections::VecDeque;
use std::mem;

use crest_buffer::SampleBuffer;

/// Default maximum number of undo snapshots retained.
pub const DEFAULT_MAX_DEPTH: usize = 20;

/// Bounded-depth undo/redo stacks of [`SampleBuffer`] snapshots.
#[derive(Debug, Clone)]
pub struct History {
    /// Undo snapshots, oldest at the front, most recent at the back.
    undo: VecDeque<SampleBuffer>,
    /// Redo snapshots, most recent last.
    redo: Vec<SampleBuffer>,
    /// Maximum undo depth; pushing past it evicts the oldest entry.
    max_depth: usize,
}

impl History {
    /// Create an empty history with the given maximum undo depth.
    ///
    /// A `max_depth` of 0 is treated as 1 — a history that can hold nothing
    /// would make every edit irreversible by accident.
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Record a pre-edit snapshot, clearing the redo stack.
    ///
    /// Called by the editor *before* each mutation. Pushing beyond
    /// `max_depth` drops the oldest snapshot first (FIFO at the bottom), so
    /// the most recent `max_depth` states are always retained.
    pub fn record(&mut self, snapshot: SampleBuffer) {
        self.redo.clear();
        if self.undo.len() == self.max_depth {
            self.undo.pop_front();
        }
        self.undo.push_back(snapshot);
    }

    /// Step back one state, swapping `current` with the top undo snapshot.
    ///
    /// Returns `false` (no-op) if there is nothing to undo.
    pub fn undo(&mut self, current: &mut SampleBuffer) -> bool {
        match self.undo.pop_back() {
            Some(snapshot) => {
                self.redo.push(mem::replace(current, snapshot));
                true
            }
            None => false,
        }
    }

    /// Step forward one state, swapping `current` with the top redo snapshot.
    ///
    /// Returns `false` (no-op) if there is nothing to redo.
    pub fn redo(&mut self, current: &mut SampleBuffer) -> bool {
        match self.redo.pop() {
            Some(snapshot) => {
                self.undo.push_back(mem::replace(current, snapshot));
                true
            }
            None => false,
        }
    }

    /// Drop all snapshots from both stacks (used when loading a new file).
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    /// Number of states that can currently be undone.
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Number of states that can currently be redone.
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// The configured maximum undo depth.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}
