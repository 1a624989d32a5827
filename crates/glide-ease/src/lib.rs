//! Easing functions for animation timing.
//!
//! This module implements the classic Penner curve families as a closed
//! catalog. Every kind maps a normalized progress value in `[0, 1]` to a
//! shaped progress value, which callers then use to blend between two
//! endpoint values.
//!
//! - Each `*In` kind accelerates from rest (zero slope at `t = 0`).
//! - Each `*Out` kind decelerates to rest (zero slope at `t = 1`).
//! - Each `*InOut` kind stitches the two halves so the midpoint maps to 0.5.
//! - `Elastic*` and `Back*` intentionally overshoot outside `[0, 1]`.
//!
//! All math is `f32`. Inputs outside `[0, 1]` are not validated; the
//! formulas extrapolate and the result is unspecified.
//!
//! # Usage
//!
//! ```
//! use glide_ease::EasingKind;
//!
//! let shaped = EasingKind::QuadraticIn.apply(0.5);
//! assert!((shaped - 0.25).abs() < 1e-6);
//! ```

use std::f32::consts::PI;

/// Overshoot amplitude shared by the back family.
const BACK_OVERSHOOT: f32 = 1.70158;
/// Overshoot amplitude for the stitched back in-out curve.
const BACK_OVERSHOOT_IN_OUT: f32 = BACK_OVERSHOOT * 1.525;

/// Angular frequency of the elastic oscillation.
const ELASTIC_FREQ: f32 = (2.0 * PI) / 3.0;
/// Angular frequency for the stitched elastic in-out curve.
const ELASTIC_FREQ_IN_OUT: f32 = (2.0 * PI) / 4.5;

/// Progress below this is treated as exactly 0 by the elastic kinds, and
/// progress above [`ELASTIC_NEAR_ONE`] as exactly 1. The guards pin the
/// endpoints and keep the exponential decay term from blowing up.
const ELASTIC_NEAR_ZERO: f32 = 1e-5;
const ELASTIC_NEAR_ONE: f32 = 0.999;

/// Easing curve catalog.
///
/// A closed set of named curves; growing it means adding a variant here and
/// an arm in [`EasingKind::apply`], which the compiler enforces exhaustively.
/// Serialized names are the snake_case variant names (`"quadratic_in"`,
/// `"elastic_in_out"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingKind {
    /// Identity mapping (no easing).
    #[default]
    Linear,
    /// Sinusoidal ease in.
    SineIn,
    /// Sinusoidal ease out.
    SineOut,
    /// Sinusoidal ease in-out.
    SineInOut,
    /// Quadratic ease in.
    QuadraticIn,
    /// Quadratic ease out.
    QuadraticOut,
    /// Quadratic ease in-out.
    QuadraticInOut,
    /// Cubic ease in.
    CubicIn,
    /// Cubic ease out.
    CubicOut,
    /// Cubic ease in-out.
    CubicInOut,
    /// Quartic ease in.
    QuarticIn,
    /// Quartic ease out.
    QuarticOut,
    /// Quartic ease in-out.
    QuarticInOut,
    /// Quintic ease in.
    QuinticIn,
    /// Quintic ease out.
    QuinticOut,
    /// Quintic ease in-out.
    QuinticInOut,
    /// Exponential ease in.
    ExponentialIn,
    /// Exponential ease out.
    ExponentialOut,
    /// Exponential ease in-out.
    ExponentialInOut,
    /// Circular ease in.
    CircularIn,
    /// Circular ease out.
    CircularOut,
    /// Circular ease in-out.
    CircularInOut,
    /// Elastic ease in (oscillates below 0 before snapping to 1).
    ElasticIn,
    /// Elastic ease out (overshoots 1 and rings down).
    ElasticOut,
    /// Elastic ease in-out.
    ElasticInOut,
    /// Back ease in (dips below 0 before rising).
    BackIn,
    /// Back ease out (overshoots 1 before settling).
    BackOut,
    /// Back ease in-out.
    BackInOut,
}

impl EasingKind {
    /// Every kind in the catalog, in display order.
    pub const ALL: [EasingKind; 28] = [
        EasingKind::Linear,
        EasingKind::SineIn,
        EasingKind::SineOut,
        EasingKind::SineInOut,
        EasingKind::QuadraticIn,
        EasingKind::QuadraticOut,
        EasingKind::QuadraticInOut,
        EasingKind::CubicIn,
        EasingKind::CubicOut,
        EasingKind::CubicInOut,
        EasingKind::QuarticIn,
        EasingKind::QuarticOut,
        EasingKind::QuarticInOut,
        EasingKind::QuinticIn,
        EasingKind::QuinticOut,
        EasingKind::QuinticInOut,
        EasingKind::ExponentialIn,
        EasingKind::ExponentialOut,
        EasingKind::ExponentialInOut,
        EasingKind::CircularIn,
        EasingKind::CircularOut,
        EasingKind::CircularInOut,
        EasingKind::ElasticIn,
        EasingKind::ElasticOut,
        EasingKind::ElasticInOut,
        EasingKind::BackIn,
        EasingKind::BackOut,
        EasingKind::BackInOut,
    ];

    /// Evaluate the curve at the given progress.
    ///
    /// # Arguments
    /// * `t` - Progress value from 0.0 to 1.0
    ///
    /// # Returns
    /// Shaped progress. For the elastic and back families the result may
    /// leave `[0, 1]` between the endpoints; at `t = 0` and `t = 1` every
    /// kind returns 0 and 1.
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::SineIn => sine_in(t),
            Self::SineOut => sine_out(t),
            Self::SineInOut => sine_in_out(t),
            Self::QuadraticIn => quadratic_in(t),
            Self::QuadraticOut => quadratic_out(t),
            Self::QuadraticInOut => quadratic_in_out(t),
            Self::CubicIn => cubic_in(t),
            Self::CubicOut => cubic_out(t),
            Self::CubicInOut => cubic_in_out(t),
            Self::QuarticIn => quartic_in(t),
            Self::QuarticOut => quartic_out(t),
            Self::QuarticInOut => quartic_in_out(t),
            Self::QuinticIn => quintic_in(t),
            Self::QuinticOut => quintic_out(t),
            Self::QuinticInOut => quintic_in_out(t),
            Self::ExponentialIn => exponential_in(t),
            Self::ExponentialOut => exponential_out(t),
            Self::ExponentialInOut => exponential_in_out(t),
            Self::CircularIn => circular_in(t),
            Self::CircularOut => circular_out(t),
            Self::CircularInOut => circular_in_out(t),
            Self::ElasticIn => elastic_in(t),
            Self::ElasticOut => elastic_out(t),
            Self::ElasticInOut => elastic_in_out(t),
            Self::BackIn => back_in(t),
            Self::BackOut => back_out(t),
            Self::BackInOut => back_in_out(t),
        }
    }

    /// Stable snake_case name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::SineIn => "sine_in",
            Self::SineOut => "sine_out",
            Self::SineInOut => "sine_in_out",
            Self::QuadraticIn => "quadratic_in",
            Self::QuadraticOut => "quadratic_out",
            Self::QuadraticInOut => "quadratic_in_out",
            Self::CubicIn => "cubic_in",
            Self::CubicOut => "cubic_out",
            Self::CubicInOut => "cubic_in_out",
            Self::QuarticIn => "quartic_in",
            Self::QuarticOut => "quartic_out",
            Self::QuarticInOut => "quartic_in_out",
            Self::QuinticIn => "quintic_in",
            Self::QuinticOut => "quintic_out",
            Self::QuinticInOut => "quintic_in_out",
            Self::ExponentialIn => "exponential_in",
            Self::ExponentialOut => "exponential_out",
            Self::ExponentialInOut => "exponential_in_out",
            Self::CircularIn => "circular_in",
            Self::CircularOut => "circular_out",
            Self::CircularInOut => "circular_in_out",
            Self::ElasticIn => "elastic_in",
            Self::ElasticOut => "elastic_out",
            Self::ElasticInOut => "elastic_in_out",
            Self::BackIn => "back_in",
            Self::BackOut => "back_out",
            Self::BackInOut => "back_in_out",
        }
    }

    /// Look up a kind by its snake_case name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

#[inline]
fn sine_in(t: f32) -> f32 {
    1.0 - (t * PI / 2.0).cos()
}

#[inline]
fn sine_out(t: f32) -> f32 {
    (t * PI / 2.0).sin()
}

#[inline]
fn sine_in_out(t: f32) -> f32 {
    -(t * PI).cos() / 2.0 + 0.5
}

#[inline]
fn quadratic_in(t: f32) -> f32 {
    t * t
}

#[inline]
fn quadratic_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

#[inline]
fn quadratic_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

#[inline]
fn cubic_in(t: f32) -> f32 {
    t * t * t
}

#[inline]
fn cubic_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[inline]
fn cubic_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[inline]
fn quartic_in(t: f32) -> f32 {
    t * t * t * t
}

#[inline]
fn quartic_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(4)
}

#[inline]
fn quartic_in_out(t: f32) -> f32 {
    if t < 0.5 {
        8.0 * t * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
    }
}

#[inline]
fn quintic_in(t: f32) -> f32 {
    t * t * t * t * t
}

#[inline]
fn quintic_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(5)
}

#[inline]
fn quintic_in_out(t: f32) -> f32 {
    if t < 0.5 {
        16.0 * t * t * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(5) / 2.0
    }
}

#[inline]
fn exponential_in(t: f32) -> f32 {
    if t == 0.0 {
        0.0
    } else {
        2.0f32.powf(10.0 * t - 10.0)
    }
}

#[inline]
fn exponential_out(t: f32) -> f32 {
    if t == 1.0 {
        1.0
    } else {
        1.0 - 2.0f32.powf(-10.0 * t)
    }
}

#[inline]
fn exponential_in_out(t: f32) -> f32 {
    if t == 0.0 {
        0.0
    } else if t == 1.0 {
        1.0
    } else if t < 0.5 {
        2.0f32.powf(20.0 * t - 10.0) / 2.0
    } else {
        (2.0 - 2.0f32.powf(-20.0 * t + 10.0)) / 2.0
    }
}

#[inline]
fn circular_in(t: f32) -> f32 {
    1.0 - (1.0 - t * t).sqrt()
}

#[inline]
fn circular_out(t: f32) -> f32 {
    (1.0 - (t - 1.0).powi(2)).sqrt()
}

#[inline]
fn circular_in_out(t: f32) -> f32 {
    if t < 0.5 {
        (1.0 - (1.0 - (2.0 * t).powi(2)).sqrt()) / 2.0
    } else {
        ((1.0 - (-2.0 * t + 2.0).powi(2)).sqrt() + 1.0) / 2.0
    }
}

#[inline]
fn elastic_in(t: f32) -> f32 {
    if t < ELASTIC_NEAR_ZERO {
        0.0
    } else if t > ELASTIC_NEAR_ONE {
        1.0
    } else {
        -(2.0f32.powf(10.0 * t - 10.0)) * ((t * 10.0 - 10.75) * ELASTIC_FREQ).sin()
    }
}

#[inline]
fn elastic_out(t: f32) -> f32 {
    if t < ELASTIC_NEAR_ZERO {
        0.0
    } else if t > ELASTIC_NEAR_ONE {
        1.0
    } else {
        2.0f32.powf(-10.0 * t) * ((t * 10.0 - 0.75) * ELASTIC_FREQ).sin() + 1.0
    }
}

#[inline]
fn elastic_in_out(t: f32) -> f32 {
    if t < ELASTIC_NEAR_ZERO {
        0.0
    } else if t > ELASTIC_NEAR_ONE {
        1.0
    } else if t < 0.5 {
        -(2.0f32.powf(20.0 * t - 10.0) * ((20.0 * t - 11.125) * ELASTIC_FREQ_IN_OUT).sin()) / 2.0
    } else {
        (2.0f32.powf(-20.0 * t + 10.0) * ((20.0 * t - 11.125) * ELASTIC_FREQ_IN_OUT).sin()) / 2.0
            + 1.0
    }
}

#[inline]
fn back_in(t: f32) -> f32 {
    (BACK_OVERSHOOT + 1.0) * t * t * t - BACK_OVERSHOOT * t * t
}

#[inline]
fn back_out(t: f32) -> f32 {
    1.0 + (BACK_OVERSHOOT + 1.0) * (t - 1.0).powi(3) + BACK_OVERSHOOT * (t - 1.0).powi(2)
}

#[inline]
fn back_in_out(t: f32) -> f32 {
    let c = BACK_OVERSHOOT_IN_OUT;
    if t < 0.5 {
        ((2.0 * t).powi(2) * ((c + 1.0) * 2.0 * t - c)) / 2.0
    } else {
        ((2.0 * t - 2.0).powi(2) * ((c + 1.0) * (t * 2.0 - 2.0) + c) + 2.0) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_linear_is_identity() {
        for t in [0.0, 0.125, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(EasingKind::Linear.apply(t), t);
        }
    }

    #[test]
    fn test_all_kinds_hit_endpoints() {
        for kind in EasingKind::ALL {
            let start = kind.apply(0.0);
            let end = kind.apply(1.0);
            assert!(
                approx_eq(start, 0.0),
                "{} at t=0: expected 0, got {}",
                kind.name(),
                start
            );
            assert!(
                approx_eq(end, 1.0),
                "{} at t=1: expected 1, got {}",
                kind.name(),
                end
            );
        }
    }

    #[test]
    fn test_in_out_midpoint() {
        let kinds = [
            EasingKind::SineInOut,
            EasingKind::QuadraticInOut,
            EasingKind::CubicInOut,
            EasingKind::QuarticInOut,
            EasingKind::QuinticInOut,
            EasingKind::ExponentialInOut,
            EasingKind::CircularInOut,
            EasingKind::ElasticInOut,
            EasingKind::BackInOut,
        ];
        for kind in kinds {
            let mid = kind.apply(0.5);
            assert!(
                approx_eq(mid, 0.5),
                "{} at t=0.5: expected 0.5, got {}",
                kind.name(),
                mid
            );
        }
    }

    #[test]
    fn test_in_variants_accelerate_from_rest() {
        // Shortly after t=0 an "in" curve lags behind the identity line.
        let kinds = [
            EasingKind::SineIn,
            EasingKind::QuadraticIn,
            EasingKind::CubicIn,
            EasingKind::QuarticIn,
            EasingKind::QuinticIn,
            EasingKind::ExponentialIn,
            EasingKind::CircularIn,
        ];
        for kind in kinds {
            let v = kind.apply(0.25);
            assert!(v < 0.25, "{} at t=0.25 should be below 0.25, got {}", kind.name(), v);
        }
    }

    #[test]
    fn test_out_variants_decelerate_to_rest() {
        let kinds = [
            EasingKind::SineOut,
            EasingKind::QuadraticOut,
            EasingKind::CubicOut,
            EasingKind::QuarticOut,
            EasingKind::QuinticOut,
            EasingKind::ExponentialOut,
            EasingKind::CircularOut,
        ];
        for kind in kinds {
            let v = kind.apply(0.75);
            assert!(v > 0.75, "{} at t=0.75 should be above 0.75, got {}", kind.name(), v);
        }
    }

    #[test]
    fn test_back_overshoots() {
        assert!(
            EasingKind::BackIn.apply(0.2) < 0.0,
            "back_in should dip below 0 near the start"
        );
        assert!(
            EasingKind::BackOut.apply(0.8) > 1.0,
            "back_out should overshoot above 1 near the end"
        );
    }

    #[test]
    fn test_elastic_oscillates() {
        let samples: Vec<f32> = (0..100)
            .map(|i| EasingKind::ElasticOut.apply(i as f32 / 100.0))
            .collect();

        let mut crossings = 0;
        for i in 1..samples.len() {
            if (samples[i] - 1.0).signum() != (samples[i - 1] - 1.0).signum() {
                crossings += 1;
            }
        }
        assert!(crossings >= 2, "elastic_out should ring around the target");
    }

    #[test]
    fn test_elastic_endpoint_guards() {
        // Inside the guard thresholds the elastic kinds pin to exact 0/1
        // instead of evaluating the decay term.
        for kind in [
            EasingKind::ElasticIn,
            EasingKind::ElasticOut,
            EasingKind::ElasticInOut,
        ] {
            assert_eq!(kind.apply(0.000_001), 0.0, "{}", kind.name());
            assert_eq!(kind.apply(0.999_9), 1.0, "{}", kind.name());
        }
    }

    #[test]
    fn test_quadratic_below_linear_at_midpoint() {
        assert!(EasingKind::QuadraticIn.apply(0.5) < 0.5);
        assert!(approx_eq(EasingKind::QuadraticIn.apply(0.5), 0.25));
    }

    #[test]
    fn test_name_round_trip() {
        for kind in EasingKind::ALL {
            assert_eq!(EasingKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(EasingKind::from_name("bogus"), None);
    }

    #[test]
    fn test_serde_names_match() {
        for kind in EasingKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.name()));
            let parsed: EasingKind = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_default_is_linear() {
        assert_eq!(EasingKind::default(), EasingKind::Linear);
    }
}
