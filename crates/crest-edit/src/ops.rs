//! Pure sample transformations backing the editor's operation surface.
//!
//! Every function here works on resolved [`SampleRange`]s, either producing a
//! fresh [`SampleBuffer`] or mutating one the caller exclusively owns. Range
//! validation and history bookkeeping live in [`crate::editor`]; nothing in
//! this module touches shared state.

use crest_buffer::SampleBuffer;

use crate::curve::FadeCurve;
use crate::range::SampleRange;

/// Which way a fade ramp runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FadeDirection {
    /// Gain ramps 0 → 1 over the range.
    In,
    /// Gain ramps 1 → 0 over the range.
    Out,
}

/// Convert decibels to a linear gain factor (`10^(db/20)`).
pub(crate) fn db_to_linear(db: f64) -> f32 {
    10.0_f64.powf(db / 20.0) as f32
}

/// Copy the range out of the buffer as a standalone buffer.
pub(crate) fn extract(buf: &SampleBuffer, range: SampleRange) -> SampleBuffer {
    let channels = buf
        .channels()
        .iter()
        .map(|ch| ch[range.start..range.end].to_vec())
        .collect();
    SampleBuffer::from_channels(channels, buf.sample_rate())
        .expect("extracted channels share one length")
}

/// Remove the range, closing the gap. Returns `(remaining, removed)`.
pub(crate) fn remove(buf: &SampleBuffer, range: SampleRange) -> (SampleBuffer, SampleBuffer) {
    let removed = extract(buf, range);
    let channels = buf
        .channels()
        .iter()
        .map(|ch| {
            let mut out = Vec::with_capacity(ch.len() - range.len());
            out.extend_from_slice(&ch[..range.start]);
            out.extend_from_slice(&ch[range.end..]);
            out
        })
        .collect();
    let remaining = SampleBuffer::from_channels(channels, buf.sample_rate())
        .expect("gap-closed channels share one length");
    (remaining, removed)
}

/// Splice-insert `clip`'s samples at sample index `at`, extending the buffer.
///
/// Destination channels beyond `clip`'s channel count reuse the clip's last
/// channel; extra clip channels are ignored. The clip's samples are taken
/// as-is at the destination's sample rate.
pub(crate) fn splice(buf: &SampleBuffer, at: usize, clip: &SampleBuffer) -> SampleBuffer {
    let last_src = clip.num_channels() - 1;
    let channels = buf
        .channels()
        .iter()
        .enumerate()
        .map(|(c, ch)| {
            let src = clip.channel(c.min(last_src));
            let mut out = Vec::with_capacity(ch.len() + src.len());
            out.extend_from_slice(&ch[..at]);
            out.extend_from_slice(src);
            out.extend_from_slice(&ch[at..]);
            out
        })
        .collect();
    SampleBuffer::from_channels(channels, buf.sample_rate())
        .expect("spliced channels share one length")
}

/// Zero the range in place; length unchanged.
pub(crate) fn silence_in_place(buf: &mut SampleBuffer, range: SampleRange) {
    for c in 0..buf.num_channels() {
        buf.channel_mut(c)[range.start..range.end].fill(0.0);
    }
}

/// Reverse sample order within the range, per channel, in place.
pub(crate) fn reverse_in_place(buf: &mut SampleBuffer, range: SampleRange) {
    for c in 0..buf.num_channels() {
        buf.channel_mut(c)[range.start..range.end].reverse();
    }
}

/// Apply a fade ramp over the range in place.
///
/// `t` is the fraction of elapsed fade time (`i / range_len`); for a
/// fade-out it is inverted to `1 - t` before the curve is applied, so the
/// same curve shape serves both directions.
pub(crate) fn fade_in_place(
    buf: &mut SampleBuffer,
    range: SampleRange,
    curve: FadeCurve,
    direction: FadeDirection,
) {
    let len = range.len();
    for c in 0..buf.num_channels() {
        let samples = &mut buf.channel_mut(c)[range.start..range.end];
        for (i, sample) in samples.iter_mut().enumerate() {
            let mut t = i as f32 / len as f32;
            if direction == FadeDirection::Out {
                t = 1.0 - t;
            }
            *sample *= curve.gain(t);
        }
    }
}

/// Multiply every sample in the buffer by a linear gain factor, in place.
pub(crate) fn apply_gain(buf: &mut SampleBuffer, linear: f32) {
    for c in 0..buf.num_channels() {
        for sample in buf.channel_mut(c) {
            *sample *= linear;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp_buffer() -> SampleBuffer {
        // Two channels of 0..10, second negated, at 10 Hz.
        let ch0: Vec<f32> = (0..10).map(|i| i as f32).collect();
        let ch1: Vec<f32> = (0..10).map(|i| -(i as f32)).collect();
        SampleBuffer::from_channels(vec![ch0, ch1], 10).unwrap()
    }

    fn range(start: usize, end: usize) -> SampleRange {
        SampleRange { start, end }
    }

    #[test]
    fn test_db_to_linear() {
        assert!((db_to_linear(0.0) - 1.0).abs() < 1e-6);
        assert!((db_to_linear(6.0) - 1.9952623).abs() < 1e-4);
        assert!((db_to_linear(-6.0) - 0.5011872).abs() < 1e-4);
    }

    #[test]
    fn test_extract() {
        let buf = ramp_buffer();
        let segment = extract(&buf, range(2, 5));
        assert_eq!(segment.len(), 3);
        assert_eq!(segment.num_channels(), 2);
        assert_eq!(segment.channel(0), &[2.0, 3.0, 4.0]);
        assert_eq!(segment.channel(1), &[-2.0, -3.0, -4.0]);
        // Source untouched.
        assert_eq!(buf.len(), 10);
    }

    #[test]
    fn test_remove_closes_gap() {
        let buf = ramp_buffer();
        let (remaining, removed) = remove(&buf, range(2, 5));
        assert_eq!(remaining.len(), 7);
        assert_eq!(remaining.channel(0), &[0.0, 1.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(removed.channel(0), &[2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_remove_whole_buffer() {
        let buf = ramp_buffer();
        let (remaining, removed) = remove(&buf, range(0, 10));
        assert!(remaining.is_empty());
        assert_eq!(removed.len(), 10);
    }

    #[test]
    fn test_splice_interior() {
        let buf = ramp_buffer();
        let clip = SampleBuffer::from_channels(vec![vec![99.0; 2], vec![-99.0; 2]], 10).unwrap();
        let result = splice(&buf, 3, &clip);
        assert_eq!(result.len(), 12);
        assert_eq!(
            &result.channel(0)[..6],
            &[0.0, 1.0, 2.0, 99.0, 99.0, 3.0]
        );
    }

    #[test]
    fn test_splice_append() {
        let buf = ramp_buffer();
        let clip = SampleBuffer::from_channels(vec![vec![7.0], vec![7.0]], 10).unwrap();
        let result = splice(&buf, 10, &clip);
        assert_eq!(result.len(), 11);
        assert_eq!(result.channel(0)[10], 7.0);
    }

    #[test]
    fn test_splice_mono_clip_into_stereo() {
        // A mono clip fills every destination channel from its only channel.
        let buf = ramp_buffer();
        let clip = SampleBuffer::from_channels(vec![vec![5.5, 6.5]], 10).unwrap();
        let result = splice(&buf, 0, &clip);
        assert_eq!(&result.channel(0)[..2], &[5.5, 6.5]);
        assert_eq!(&result.channel(1)[..2], &[5.5, 6.5]);
    }

    #[test]
    fn test_splice_ignores_extra_clip_channels() {
        let buf = SampleBuffer::from_channels(vec![vec![1.0, 2.0]], 10).unwrap();
        let clip =
            SampleBuffer::from_channels(vec![vec![8.0], vec![9.0], vec![10.0]], 10).unwrap();
        let result = splice(&buf, 1, &clip);
        assert_eq!(result.num_channels(), 1);
        assert_eq!(result.channel(0), &[1.0, 8.0, 2.0]);
    }

    #[test]
    fn test_silence_in_place() {
        let mut buf = ramp_buffer();
        silence_in_place(&mut buf, range(3, 6));
        assert_eq!(
            buf.channel(0),
            &[0.0, 1.0, 2.0, 0.0, 0.0, 0.0, 6.0, 7.0, 8.0, 9.0]
        );
        assert_eq!(buf.channel(1)[3], 0.0);
        assert_eq!(buf.channel(1)[2], -2.0);
    }

    #[test]
    fn test_reverse_in_place() {
        let mut buf = ramp_buffer();
        reverse_in_place(&mut buf, range(2, 6));
        assert_eq!(
            buf.channel(0),
            &[0.0, 1.0, 5.0, 4.0, 3.0, 2.0, 6.0, 7.0, 8.0, 9.0]
        );
        // Channels reverse independently.
        assert_eq!(
            buf.channel(1),
            &[0.0, -1.0, -5.0, -4.0, -3.0, -2.0, -6.0, -7.0, -8.0, -9.0]
        );
    }

    #[test]
    fn test_fade_in_linear() {
        let mut buf = SampleBuffer::from_channels(vec![vec![1.0; 4]], 4).unwrap();
        fade_in_place(&mut buf, range(0, 4), FadeCurve::Linear, FadeDirection::In);
        assert_eq!(buf.channel(0), &[0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_fade_out_linear() {
        let mut buf = SampleBuffer::from_channels(vec![vec![1.0; 4]], 4).unwrap();
        fade_in_place(&mut buf, range(0, 4), FadeCurve::Linear, FadeDirection::Out);
        assert_eq!(buf.channel(0), &[1.0, 0.75, 0.5, 0.25]);
    }

    #[test]
    fn test_fade_in_exponential() {
        let mut buf = SampleBuffer::from_channels(vec![vec![1.0; 4]], 4).unwrap();
        fade_in_place(
            &mut buf,
            range(0, 4),
            FadeCurve::Exponential,
            FadeDirection::In,
        );
        assert_eq!(buf.channel(0), &[0.0, 0.0625, 0.25, 0.5625]);
    }

    #[test]
    fn test_fade_partial_range_leaves_rest() {
        let mut buf = SampleBuffer::from_channels(vec![vec![1.0; 8]], 8).unwrap();
        fade_in_place(&mut buf, range(0, 4), FadeCurve::Linear, FadeDirection::In);
        assert_eq!(&buf.channel(0)[4..], &[1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_apply_gain() {
        let mut buf = ramp_buffer();
        apply_gain(&mut buf, 0.5);
        assert_eq!(buf.channel(0)[4], 2.0);
        assert_eq!(buf.channel(1)[4], -2.0);
    }
}
