// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timing curves and tweens.
//!
//! Time is always supplied by the caller as a [`Duration`] measured from an arbitrary epoch;
//! nothing here reads a clock. A retargeted [`Tween`] continues from the value it currently
//! displays, so a new transition visually supersedes an in-flight one.

use core::f64::consts::{PI, TAU};
use core::time::Duration;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Residual displacement below which a spring counts as settled.
const SPRING_SETTLE_EPSILON: f64 = 1e-4;

/// Maps elapsed time to interpolation progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Curve {
    /// Constant rate over `duration`.
    Linear {
        /// Total duration.
        duration: Duration,
    },
    /// Cosine smoothstep over `duration`.
    EaseInOut {
        /// Total duration.
        duration: Duration,
    },
    /// Damped harmonic oscillator released from rest at 0 toward 1.
    ///
    /// Underdamped springs overshoot before settling.
    Spring {
        /// Period of the undamped oscillation, in seconds.
        response: f64,
        /// Damping ratio; `1.0` is critically damped.
        damping_fraction: f64,
    },
}

impl Curve {
    /// The default reveal spring.
    pub const SPRING: Self = Self::Spring {
        response: 0.55,
        damping_fraction: 0.825,
    };

    /// A fast ease-in-out, used for selection emphasis.
    pub const FAST_EASE_IN_OUT: Self = Self::EaseInOut {
        duration: Duration::from_millis(200),
    };

    /// Progress after `elapsed` seconds. `0.0` at the start, `1.0` once settled.
    pub fn progress(&self, elapsed: f64) -> f64 {
        if elapsed.is_nan() || elapsed <= 0.0 {
            return 0.0;
        }
        match *self {
            Self::Linear { duration } => ratio(elapsed, duration),
            Self::EaseInOut { duration } => {
                let p = ratio(elapsed, duration);
                0.5 - 0.5 * (PI * p).cos()
            }
            Self::Spring {
                response,
                damping_fraction,
            } => {
                if elapsed >= self.settle_time() {
                    return 1.0;
                }
                let omega = TAU / response;
                let zeta = damping_fraction.clamp(0.05, 1.0);
                if zeta < 1.0 {
                    let damped = omega * (1.0 - zeta * zeta).sqrt();
                    let envelope = (-zeta * omega * elapsed).exp();
                    1.0 - envelope
                        * ((damped * elapsed).cos()
                            + zeta * omega / damped * (damped * elapsed).sin())
                } else {
                    // Overdamped springs are approximated as critically damped.
                    let envelope = (-omega * elapsed).exp();
                    1.0 - envelope * (1.0 + omega * elapsed)
                }
            }
        }
    }

    /// Seconds until the curve reports a steady `1.0`.
    pub fn settle_time(&self) -> f64 {
        match *self {
            Self::Linear { duration } | Self::EaseInOut { duration } => duration.as_secs_f64(),
            Self::Spring {
                response,
                damping_fraction,
            } => {
                if response.is_nan() || response <= 0.0 {
                    return 0.0;
                }
                let omega = TAU / response;
                let zeta = damping_fraction.clamp(0.05, 1.0);
                // The critically damped tail carries an extra `1 + wt` factor.
                let slack = if zeta >= 1.0 { 1.5 } else { 1.0 };
                -SPRING_SETTLE_EPSILON.ln() * slack / (zeta * omega)
            }
        }
    }
}

fn settle_duration(curve: &Curve) -> Duration {
    Duration::try_from_secs_f64(curve.settle_time().max(0.0)).unwrap_or(Duration::MAX)
}

fn ratio(elapsed: f64, duration: Duration) -> f64 {
    let total = duration.as_secs_f64();
    if total <= 0.0 {
        1.0
    } else {
        (elapsed / total).clamp(0.0, 1.0)
    }
}

/// A delayed transition between two values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    start: Duration,
    delay: Duration,
    curve: Curve,
}

impl Tween {
    /// A tween resting at `value`.
    pub fn settled(value: f64) -> Self {
        Self {
            from: value,
            to: value,
            start: Duration::ZERO,
            delay: Duration::ZERO,
            curve: Curve::Linear {
                duration: Duration::ZERO,
            },
        }
    }

    /// A tween from `from` to `to`, starting `delay` after `now`.
    pub fn new(from: f64, to: f64, now: Duration, delay: Duration, curve: Curve) -> Self {
        Self {
            from,
            to,
            start: now,
            delay,
            curve,
        }
    }

    /// Value target of this tween.
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Value displayed at `now`.
    pub fn value(&self, now: Duration) -> f64 {
        if self.from == self.to {
            return self.to;
        }
        let Some(elapsed) = now.checked_sub(self.start.saturating_add(self.delay)) else {
            return self.from;
        };
        let elapsed = elapsed.as_secs_f64();
        if elapsed >= self.curve.settle_time() {
            return self.to;
        }
        self.from + (self.to - self.from) * self.curve.progress(elapsed)
    }

    /// Returns `true` once the value no longer changes.
    pub fn is_settled(&self, now: Duration) -> bool {
        if self.from == self.to {
            return true;
        }
        let end = self
            .start
            .saturating_add(self.delay)
            .saturating_add(settle_duration(&self.curve));
        now >= end
    }

    /// Starts a new transition toward `to` from the value displayed at `now`.
    pub fn retarget(&mut self, to: f64, now: Duration, delay: Duration, curve: Curve) {
        *self = Self::new(self.value(now), to, now, delay, curve);
    }

    /// Jumps to `value` with no transition.
    pub fn snap(&mut self, value: f64) {
        *self = Self::settled(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn ease_in_out_is_symmetric_and_bounded() {
        let curve = Curve::EaseInOut { duration: ms(200) };
        assert_eq!(curve.progress(0.0), 0.0);
        assert!((curve.progress(0.1) - 0.5).abs() < 1e-12, "midpoint");
        assert!((curve.progress(0.2) - 1.0).abs() < 1e-12, "end");
        assert!((curve.progress(5.0) - 1.0).abs() < 1e-12, "past the end");
    }

    #[test]
    fn spring_settles_at_one() {
        let curve = Curve::SPRING;
        let settle = curve.settle_time();
        assert!(settle > 0.0 && settle < 5.0, "settle {settle}");
        assert_eq!(curve.progress(settle), 1.0);
        let early = curve.progress(0.05);
        assert!(early > 0.0 && early < 0.5, "early {early}");
    }

    #[test]
    fn underdamped_spring_overshoots() {
        let curve = Curve::Spring {
            response: 0.5,
            damping_fraction: 0.5,
        };
        let peak = (1..200)
            .map(|i| curve.progress(f64::from(i) * 0.005))
            .fold(0.0_f64, f64::max);
        assert!(peak > 1.0, "expected overshoot, peak {peak}");
    }

    #[test]
    fn critically_damped_spring_is_monotonic() {
        let curve = Curve::Spring {
            response: 0.4,
            damping_fraction: 1.0,
        };
        let mut last = 0.0;
        for i in 1..100 {
            let p = curve.progress(f64::from(i) * 0.01);
            assert!(p >= last && p <= 1.0, "step {i}: {p} after {last}");
            last = p;
        }
    }

    #[test]
    fn negative_damping_stays_finite() {
        let curve = Curve::Spring {
            response: 0.5,
            damping_fraction: -2.0,
        };
        for i in 0..50 {
            let p = curve.progress(f64::from(i) * 0.02);
            assert!(p.is_finite(), "step {i}: {p}");
        }
    }

    #[test]
    fn tween_holds_during_delay() {
        let tween = Tween::new(0.0, 1.0, ms(100), ms(50), Curve::Linear { duration: ms(100) });
        assert_eq!(tween.value(ms(0)), 0.0);
        assert_eq!(tween.value(ms(150)), 0.0);
        assert!((tween.value(ms(200)) - 0.5).abs() < 1e-9, "halfway");
        assert_eq!(tween.value(ms(250)), 1.0);
        assert!(!tween.is_settled(ms(249)), "still moving");
        assert!(tween.is_settled(ms(250)), "settled");
    }

    #[test]
    fn retarget_continues_from_displayed_value() {
        let linear = Curve::Linear { duration: ms(100) };
        let mut tween = Tween::new(1.0, 2.0, ms(0), Duration::ZERO, linear);
        tween.retarget(1.0, ms(50), Duration::ZERO, linear);
        assert!((tween.value(ms(50)) - 1.5).abs() < 1e-9, "no jump on retarget");
        assert!((tween.value(ms(100)) - 1.25).abs() < 1e-9, "heading back");
        assert_eq!(tween.value(ms(150)), 1.0);
    }

    #[test]
    fn snap_skips_the_transition() {
        let mut tween = Tween::new(0.0, 1.0, ms(0), Duration::ZERO, Curve::SPRING);
        tween.snap(1.12);
        assert_eq!(tween.value(ms(0)), 1.12);
        assert!(tween.is_settled(ms(0)), "snapped tween is settled");
    }
}
