//! The in-memory sample store — multi-channel f32 audio at a fixed sample rate.
//!
//! A [`SampleBuffer`] is the unit of exchange across the whole editor: the
//! decoder hands one in, every edit operation produces a new one (or mutates
//! an exclusively-owned copy), and the undo history stores full snapshots.
//! Cloning is a deep copy, so a snapshot is always independent of the live
//! buffer.
//!
//! Samples are 32-bit floats, conceptually in `[-1.0, 1.0]` but never clamped
//! on write — normalization and gain can push values outside that range and
//! the exporter is expected to deal with it.

use serde::{Deserialize, Serialize};

use crate::error::{BufferError, Result};

/// Multi-channel audio sample data at a fixed sample rate.
///
/// # Invariants
///
/// - At least one channel.
/// - Every channel holds exactly [`len`](SampleBuffer::len) samples.
/// - The sample rate is positive and never changes after construction.
///
/// Constructors enforce these invariants; accessors rely on them.
/// Deserialization routes through [`SampleBuffer::from_channels`], so a
/// serialized payload cannot smuggle in an invariant-breaking buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSampleBuffer")]
pub struct SampleBuffer {
    /// Per-channel sample stores, all of equal length.
    channels: Vec<Vec<f32>>,
    /// Sample rate in Hz.
    sample_rate: u32,
}

/// Unvalidated wire form of [`SampleBuffer`]; field layout matches the
/// `Serialize` output exactly.
#[derive(Deserialize)]
struct RawSampleBuffer {
    channels: Vec<Vec<f32>>,
    sample_rate: u32,
}

impl TryFrom<RawSampleBuffer> for SampleBuffer {
    type Error = BufferError;

    fn try_from(raw: RawSampleBuffer) -> Result<Self> {
        Self::from_channels(raw.channels, raw.sample_rate)
    }
}

impl SampleBuffer {
    /// Create a silent (all-zero) buffer.
    ///
    /// # Arguments
    ///
    /// * `num_channels` — channel count (≥ 1).
    /// * `len` — sample count per channel (may be 0).
    /// * `sample_rate` — sample rate in Hz (> 0).
    pub fn silent(num_channels: usize, len: usize, sample_rate: u32) -> Result<Self> {
        if num_channels == 0 {
            return Err(BufferError::NoChannels);
        }
        if sample_rate == 0 {
            return Err(BufferError::ZeroSampleRate);
        }
        Ok(Self {
            channels: vec![vec![0.0; len]; num_channels],
            sample_rate,
        })
    }

    /// Create a buffer from existing per-channel sample data.
    ///
    /// Rejects an empty channel list, a zero sample rate, and channels of
    /// unequal length.
    pub fn from_channels(channels: Vec<Vec<f32>>, sample_rate: u32) -> Result<Self> {
        if channels.is_empty() {
            return Err(BufferError::NoChannels);
        }
        if sample_rate == 0 {
            return Err(BufferError::ZeroSampleRate);
        }
        let expected = channels[0].len();
        for (channel, data) in channels.iter().enumerate().skip(1) {
            if data.len() != expected {
                return Err(BufferError::ChannelLengthMismatch {
                    channel,
                    expected,
                    got: data.len(),
                });
            }
        }
        Ok(Self {
            channels,
            sample_rate,
        })
    }

    /// Number of channels.
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    /// Sample count per channel.
    pub fn len(&self) -> usize {
        self.channels[0].len()
    }

    /// True if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Duration in seconds (`len / sample_rate`).
    pub fn duration(&self) -> f64 {
        self.len() as f64 / self.sample_rate as f64
    }

    /// Borrow one channel's samples.
    ///
    /// # Panics
    ///
    /// Panics if `channel >= num_channels()`.
    pub fn channel(&self, channel: usize) -> &[f32] {
        &self.channels[channel]
    }

    /// Mutably borrow one channel's samples.
    ///
    /// # Panics
    ///
    /// Panics if `channel >= num_channels()`.
    pub fn channel_mut(&mut self, channel: usize) -> &mut [f32] {
        &mut self.channels[channel]
    }

    /// Borrow all channels.
    pub fn channels(&self) -> &[Vec<f32>] {
        &self.channels
    }

    /// Convert a time in seconds to a sample index, clamped to `[0, len]`.
    ///
    /// Negative times map to 0; times at or past the end map to `len`.
    /// Truncates toward zero, matching the frame math used throughout the
    /// edit operations.
    pub fn sample_index(&self, seconds: f64) -> usize {
        if seconds <= 0.0 {
            return 0;
        }
        let idx = (seconds * self.sample_rate as f64) as usize;
        idx.min(self.len())
    }
}
