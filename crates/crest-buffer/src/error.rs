//! Error types for the buffer crate.

use thiserror::Error;

/// All errors that can occur constructing a `crest-buffer` type.
#[derive(Error, Debug)]
pub enum BufferError {
    /// A buffer must have at least one channel.
    #[error("a sample buffer requires at least one channel")]
    NoChannels,

    /// The sample rate must be a positive integer.
    #[error("sample rate must be positive")]
    ZeroSampleRate,

    /// All channels must share the same sample count.
    #[error("channel {channel} has {got} samples, expected {expected}")]
    ChannelLengthMismatch {
        /// Index of the offending channel.
        channel: usize,
        /// Sample count of channel 0.
        expected: usize,
        /// Sample count of the offending channel.
        got: usize,
    },
}

/// A convenience result type for `crest-buffer` operations.
pub type Result<T> = std::result::Result<T, BufferError>;
