//! # crest-edit — Non-destructive waveform editing with bounded undo
//!
//! The editing core of CREST: a [`WaveEditor`] owns one live
//! [`SampleBuffer`](crest_buffer::SampleBuffer), applies range-based edit
//! operations (cut, copy, paste, trim, silence, reverse, fades, gain,
//! normalize), and keeps full pre-edit snapshots on a bounded undo/redo
//! [`History`]. Applied operations are also logged to a serializable
//! [`EditJournal`].
//!
//! ## Modules
//!
//! - [`editor`] — the [`WaveEditor`] facade and its operation surface.
//! - [`curve`] — [`FadeCurve`] gain-ramp shapes.
//! - [`history`] — bounded undo/redo snapshot stacks.
//! - [`journal`] — the serializable log of applied edits.
//! - [`error`] — error types used throughout the crate.
//!
//! ## Example
//! ```rust
//! use crest_buffer::SampleBuffer;
//! use crest_edit::{FadeCurve, WaveEditor};
//!
//! let decoded = SampleBuffer::from_channels(vec![vec![0.4; 48_000]], 48_000).unwrap();
//! let mut editor = WaveEditor::new(decoded);
//!
//! let clip = editor.cut(0.25, 0.5).expect("valid range");
//! editor.paste(0.75, &clip);
//! editor.fade_out(0.9, 0.1, FadeCurve::Sigmoid);
//! let applied = editor.normalize(-1.0);
//! assert!(applied > 0.0);
//!
//! // Hand a frozen copy to playback; keep editing the live buffer.
//! let for_playback = editor.to_buffer();
//! editor.undo();
//! assert_eq!(for_playback.len(), 48_000);
//! ```

pub mod curve;
pub mod editor;
pub mod error;
pub mod history;
pub mod journal;
mod ops;
mod range;

pub use curve::FadeCurve;
pub use editor::WaveEditor;
pub use error::{EditError, Result};
pub use history::{History, DEFAULT_MAX_DEPTH};
pub use journal::{EditJournal, EditRecord};
