// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Staggered reveal scheduling.
//!
//! A chart has a single "entered" flag. Flipping it starts one transition per segment, each
//! delayed by `index * stagger`, so segments reveal (or hide) in sequence.

use core::time::Duration;

use smallvec::SmallVec;

use crate::animation::{Curve, Tween};

/// Per-segment reveal progress driven by one entered flag.
#[derive(Clone, Debug)]
pub struct RevealScheduler {
    entered: bool,
    pinned: bool,
    curve: Curve,
    stagger: Duration,
    tweens: SmallVec<[Tween; 8]>,
}

impl RevealScheduler {
    /// A scheduler that starts hidden and animates on [`RevealScheduler::set_entered`].
    pub fn new(curve: Curve, stagger: Duration) -> Self {
        Self {
            entered: false,
            pinned: false,
            curve,
            stagger,
            tweens: SmallVec::new(),
        }
    }

    /// A scheduler that always reports full progress and ignores lifecycle changes.
    pub fn pinned() -> Self {
        Self {
            entered: true,
            pinned: true,
            curve: Curve::SPRING,
            stagger: Duration::ZERO,
            tweens: SmallVec::new(),
        }
    }

    /// Returns `true` if lifecycle changes are ignored.
    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    /// Current value of the entered flag.
    pub fn has_entered(&self) -> bool {
        self.entered
    }

    /// Delay before segment `index` starts moving.
    pub fn delay(&self, index: usize) -> Duration {
        let steps = u32::try_from(index).unwrap_or(u32::MAX);
        self.stagger.saturating_mul(steps)
    }

    /// Flips the entered flag for `count` segments.
    ///
    /// Each segment continues from the progress it displays at `now`. Returns `false` if the flag
    /// was already set to `entered` or the scheduler is pinned.
    pub fn set_entered(&mut self, entered: bool, now: Duration, count: usize) -> bool {
        if self.pinned || self.entered == entered {
            return false;
        }
        self.entered = entered;
        let target = self.resting();
        let from = if entered { 0.0 } else { 1.0 };
        self.tweens.resize(count, Tween::settled(from));
        for index in 0..count {
            let delay = self.delay(index);
            let curve = self.curve;
            self.tweens[index].retarget(target, now, delay, curve);
        }
        true
    }

    /// Matches the number of tracked segments to `count`.
    ///
    /// New segments rest at the current target; they do not animate in.
    pub fn resize(&mut self, count: usize) {
        let resting = self.resting();
        self.tweens.resize(count, Tween::settled(resting));
    }

    /// Progress in `[0, 1]` (springs may briefly exceed 1) of segment `index` at `now`.
    pub fn progress(&self, index: usize, now: Duration) -> f64 {
        if self.pinned {
            return 1.0;
        }
        self.tweens
            .get(index)
            .map_or_else(|| self.resting(), |tween| tween.value(now))
    }

    /// Returns `true` once no segment is moving.
    pub fn is_settled(&self, now: Duration) -> bool {
        self.pinned || self.tweens.iter().all(|tween| tween.is_settled(now))
    }

    fn resting(&self) -> f64 {
        if self.entered { 1.0 } else { 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn linear() -> Curve {
        Curve::Linear { duration: ms(100) }
    }

    #[test]
    fn starts_hidden_until_entered() {
        let scheduler = RevealScheduler::new(linear(), ms(50));
        assert!(!scheduler.has_entered(), "starts hidden");
        assert_eq!(scheduler.progress(0, ms(1_000)), 0.0);
    }

    #[test]
    fn segments_reveal_in_index_order() {
        let mut scheduler = RevealScheduler::new(linear(), ms(50));
        assert!(scheduler.set_entered(true, ms(0), 3), "flag flipped");

        let at = ms(75);
        let p0 = scheduler.progress(0, at);
        let p1 = scheduler.progress(1, at);
        let p2 = scheduler.progress(2, at);
        assert!((p0 - 0.75).abs() < 1e-9, "p0 {p0}");
        assert!((p1 - 0.25).abs() < 1e-9, "p1 {p1}");
        assert_eq!(p2, 0.0);
        assert!(!scheduler.is_settled(at), "still revealing");

        assert!(scheduler.is_settled(ms(200)), "last segment done at 100ms + 100ms");
        assert_eq!(scheduler.progress(2, ms(200)), 1.0);
    }

    #[test]
    fn exit_continues_from_displayed_progress() {
        let mut scheduler = RevealScheduler::new(linear(), Duration::ZERO);
        scheduler.set_entered(true, ms(0), 1);
        scheduler.set_entered(false, ms(40), 1);
        assert!((scheduler.progress(0, ms(40)) - 0.4).abs() < 1e-9, "no jump");
        assert!((scheduler.progress(0, ms(90)) - 0.2).abs() < 1e-9, "heading out");
        assert_eq!(scheduler.progress(0, ms(140)), 0.0);
    }

    #[test]
    fn repeated_flag_is_a_no_op() {
        let mut scheduler = RevealScheduler::new(linear(), ms(10));
        assert!(scheduler.set_entered(true, ms(0), 2), "first flip");
        assert!(!scheduler.set_entered(true, ms(5), 2), "same flag again");
        assert!((scheduler.progress(0, ms(50)) - 0.5).abs() < 1e-9, "timing kept");
    }

    #[test]
    fn pinned_scheduler_is_always_visible() {
        let mut scheduler = RevealScheduler::pinned();
        assert_eq!(scheduler.progress(0, Duration::ZERO), 1.0);
        assert!(!scheduler.set_entered(false, ms(10), 4), "pinned ignores lifecycle");
        assert_eq!(scheduler.progress(3, ms(10)), 1.0);
        assert!(scheduler.is_settled(Duration::ZERO), "pinned never animates");
    }

    #[test]
    fn resized_segments_rest_at_target() {
        let mut scheduler = RevealScheduler::new(linear(), ms(10));
        scheduler.set_entered(true, ms(0), 1);
        scheduler.resize(3);
        assert_eq!(scheduler.progress(2, ms(0)), 1.0);
    }
}
