//! Fail-soft resolution of `[start, end)` second ranges to sample indices.
//!
//! Callers are expected to clamp selections to the buffer before invoking an
//! operation; this module is the defensive backstop. An invalid range
//! resolves to `None` and the operation becomes a silent no-op — the editor
//! never raises on bad ranges. That policy comes straight from the original
//! contract and is what keeps a scrubbing UI responsive.

use crest_buffer::SampleBuffer;

/// A resolved, validated half-open sample index range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SampleRange {
    /// First sample index in the range.
    pub start: usize,
    /// One past the last sample index in the range.
    pub end: usize,
}

impl SampleRange {
    /// Number of samples covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

/// Resolve a `[start_s, end_s)` range in seconds against a buffer.
///
/// Returns `None` (no-op) when `start_s < 0`, `start_s >= end_s`,
/// `end_s > duration`, either bound is NaN, or the range is shorter than
/// one sample. The guard is written in positive form so a NaN bound fails
/// every comparison and falls through to the reject branch.
pub(crate) fn resolve(buf: &SampleBuffer, start_s: f64, end_s: f64) -> Option<SampleRange> {
    if !(start_s >= 0.0 && start_s < end_s && end_s <= buf.duration()) {
        return None;
    }
    let start = buf.sample_index(start_s);
    let end = buf.sample_index(end_s);
    if start >= end {
        return None;
    }
    Some(SampleRange { start, end })
}
