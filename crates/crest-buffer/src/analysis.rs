//! Read-only level analysis over a [`SampleBuffer`].
//!
//! Pure queries with no side effects and no history interaction. `peak` feeds
//! the editor's normalize operation; `rms` and `peak_time` back level
//! reporting in the surrounding UI.

use crate::buffer::SampleBuffer;

impl SampleBuffer {
    /// Maximum absolute sample value across all channels and samples.
    ///
    /// Returns 0.0 for an empty or silent buffer.
    pub fn peak(&self) -> f32 {
        let mut peak = 0.0_f32;
        for channel in self.channels() {
            for &sample in channel {
                let abs = sample.abs();
                if abs > peak {
                    peak = abs;
                }
            }
        }
        peak
    }

    /// Root-mean-square level over all channels and samples.
    ///
    /// Returns 0.0 for an empty buffer.
    pub fn rms(&self) -> f32 {
        let total = self.num_channels() * self.len();
        if total == 0 {
            return 0.0;
        }
        let sum_sq: f64 = self
            .channels()
            .iter()
            .flat_map(|channel| channel.iter())
            .map(|&s| s as f64 * s as f64)
            .sum();
        (sum_sq / total as f64).sqrt() as f32
    }

    /// Time in seconds of the global peak sample.
    ///
    /// The earliest sample index wins: channels are scanned in order and a
    /// later position only replaces the recorded one on a strictly greater
    /// absolute value. Returns 0.0 for an empty or silent buffer.
    pub fn peak_time(&self) -> f64 {
        let mut peak = 0.0_f32;
        let mut peak_index = 0usize;
        for channel in self.channels() {
            for (i, &sample) in channel.iter().enumerate() {
                let abs = sample.abs();
                if abs > peak || (abs == peak && abs > 0.0 && i < peak_index) {
                    peak = abs;
                    peak_index = i;
                }
            }
        }
        peak_index as f64 / self.sample_rate() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(channels: Vec<Vec<f32>>) -> SampleBuffer {
        SampleBuffer::from_channels(channels, 100).unwrap()
    }

    #[test]
    fn test_peak_silent() {
        let buf = SampleBuffer::silent(2, 50, 100).unwrap();
        assert_eq!(buf.peak(), 0.0);
    }

    #[test]
    fn test_peak_across_channels() {
        let buf = buffer(vec![vec![0.1, -0.3, 0.2], vec![0.0, 0.25, -0.7]]);
        assert_eq!(buf.peak(), 0.7);
    }

    #[test]
    fn test_peak_empty() {
        let buf = SampleBuffer::silent(1, 0, 100).unwrap();
        assert_eq!(buf.peak(), 0.0);
    }

    #[test]
    fn test_rms_constant_signal() {
        let buf = buffer(vec![vec![0.5; 100]]);
        assert!((buf.rms() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_rms_sine_wave() {
        // RMS of a full-scale sine is 1/sqrt(2).
        let samples: Vec<f32> = (0..1000)
            .map(|i| (2.0 * std::f32::consts::PI * 10.0 * i as f32 / 1000.0).sin())
            .collect();
        let buf = SampleBuffer::from_channels(vec![samples], 1000).unwrap();
        assert!((buf.rms() - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-3);
    }

    #[test]
    fn test_rms_empty() {
        let buf = SampleBuffer::silent(1, 0, 100).unwrap();
        assert_eq!(buf.rms(), 0.0);
    }

    #[test]
    fn test_peak_time() {
        // Peak of 0.9 at index 30 of a 100 Hz buffer → 0.3 seconds.
        let mut samples = vec![0.1_f32; 100];
        samples[30] = -0.9;
        let buf = buffer(vec![samples]);
        assert!((buf.peak_time() - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_peak_time_earliest_wins_on_tie() {
        // Same magnitude at index 10 (channel 1) and index 40 (channel 0):
        // the earlier sample index is reported.
        let mut ch0 = vec![0.0_f32; 100];
        let mut ch1 = vec![0.0_f32; 100];
        ch0[40] = 0.8;
        ch1[10] = -0.8;
        let buf = buffer(vec![ch0, ch1]);
        assert!((buf.peak_time() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_peak_time_silent() {
        let buf = SampleBuffer::silent(1, 50, 100).unwrap();
        assert_eq!(buf.peak_time(), 0.0);
    }
}
