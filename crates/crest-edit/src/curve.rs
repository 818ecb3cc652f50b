//! Fade curve shapes — a closed set of gain-ramp functions.
//!
//! The curve is selected by tag at call time; modeling it as an enum with a
//! pure function per variant gives compile-time exhaustiveness instead of
//! runtime string dispatch.

use serde::{Deserialize, Serialize};

/// The shape of a fade's gain ramp.
///
/// `gain(t)` maps an elapsed-fade fraction `t` in `[0, 1)` to a gain factor.
/// All three shapes map 0 to (near) 0 and approach 1 as `t` approaches 1.
/// Fade-out uses the same shapes with `t` inverted to `1 - t` before
/// application, so one function serves both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FadeCurve {
    /// Straight ramp: `t`.
    #[default]
    Linear,
    /// Slow start, fast finish: `t²`.
    Exponential,
    /// S-shaped ramp: `1 / (1 + e^(-10(t - 0.5)))`.
    Sigmoid,
}

impl FadeCurve {
    /// Gain factor at elapsed-fade fraction `t`.
    pub fn gain(self, t: f32) -> f32 {
        match self {
            FadeCurve::Linear => t,
            FadeCurve::Exponential => t * t,
            FadeCurve::Sigmoid => 1.0 / (1.0 + (-10.0 * (t - 0.5)).exp()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_is_identity() {
        assert_eq!(FadeCurve::Linear.gain(0.0), 0.0);
        assert_eq!(FadeCurve::Linear.gain(0.25), 0.25);
        assert_eq!(FadeCurve::Linear.gain(1.0), 1.0);
    }

    #[test]
    fn test_exponential_squares() {
        assert_eq!(FadeCurve::Exponential.gain(0.0), 0.0);
        assert_eq!(FadeCurve::Exponential.gain(0.5), 0.25);
        assert_eq!(FadeCurve::Exponential.gain(1.0), 1.0);
    }

    #[test]
    fn test_sigmoid_midpoint_is_half() {
        assert!((FadeCurve::Sigmoid.gain(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_sigmoid_endpoints() {
        // e^(±5) terms leave the endpoints slightly off 0 and 1.
        assert!(FadeCurve::Sigmoid.gain(0.0) < 0.01);
        assert!(FadeCurve::Sigmoid.gain(1.0) > 0.99);
    }

    #[test]
    fn test_curves_monotonic() {
        for curve in [
            FadeCurve::Linear,
            FadeCurve::Exponential,
            FadeCurve::Sigmoid,
        ] {
            let mut prev = curve.gain(0.0);
            for i in 1..=100 {
                let g = curve.gain(i as f32 / 100.0);
                assert!(g >= prev, "{curve:?} not monotonic at step {i}");
                prev = g;
            }
        }
    }

    #[test]
    fn test_serde_tag_round_trip() {
        let json = serde_json::to_string(&FadeCurve::Sigmoid).unwrap();
        assert_eq!(json, "\"sigmoid\"");
        let back: FadeCurve = serde_json::from_str(&json).unwrap();
        assert_eq!(back, FadeCurve::Sigmoid);
    }
}
