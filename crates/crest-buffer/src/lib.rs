//! # crest-buffer
//!
//! The sample data model for the CREST waveform editor. Holds decoded audio
//! as per-channel `f32` sample stores at a fixed sample rate, plus read-only
//! level analysis (peak, RMS, peak position).
//!
//! ## Modules
//!
//! - [`buffer`] — [`SampleBuffer`], construction, and time/index conversion.
//! - [`analysis`] — peak, RMS, and peak-time queries.
//! - [`error`] — error types used throughout the crate.
//!
//! ## Example
//! ```rust
//! use crest_buffer::SampleBuffer;
//!
//! let buf = SampleBuffer::silent(2, 44_100, 44_100).unwrap();
//! assert_eq!(buf.num_channels(), 2);
//! assert!((buf.duration() - 1.0).abs() < 1e-9);
//! assert_eq!(buf.peak(), 0.0);
//! ```

pub mod analysis;
pub mod buffer;
pub mod error;

pub use buffer::SampleBuffer;
pub use error::{BufferError, Result};
