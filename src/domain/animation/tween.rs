// SPDX-License-Identifier: MPL-2.0
//! Explicit interpolation over time.
//!
//! A [`Tween`] describes one transition (start value, end value, curve, start
//! instant). An [`Animated`] value owns the currently presented scalar plus an
//! optional in-flight tween and is advanced by the host's frame callback.

use super::Easing;
use std::time::{Duration, Instant};

/// One interpolation from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    easing: Easing,
    start: Instant,
}

impl Tween {
    #[must_use]
    pub fn new(from: f32, to: f32, easing: Easing, start: Instant) -> Self {
        Self {
            from,
            to,
            easing,
            start,
        }
    }

    /// Shifts the start of the tween by `delay`.
    #[must_use]
    pub fn starting_after(mut self, delay: Duration) -> Self {
        self.start += delay;
        self
    }

    /// Interpolated value at `now`. Before the start instant this is `from`.
    #[must_use]
    pub fn sample(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start);
        if now < self.start {
            return self.from;
        }
        self.from + (self.to - self.from) * self.easing.progress(elapsed)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now >= self.start + self.easing.duration()
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }
}

/// A scalar that can jump or animate toward a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animated {
    value: f32,
    tween: Option<Tween>,
}

impl Animated {
    #[must_use]
    pub const fn new(value: f32) -> Self {
        Self { value, tween: None }
    }

    /// Value presented at the last [`Animated::tick`] or [`Animated::set`].
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Value the scalar is heading to (the current value when idle).
    #[must_use]
    pub fn target(&self) -> f32 {
        self.tween.map_or(self.value, |tween| tween.target())
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Jumps to `value`, dropping any in-flight tween.
    pub fn set(&mut self, value: f32) {
        self.value = value;
        self.tween = None;
    }

    /// Starts animating from the presented value toward `target`.
    pub fn animate_to(&mut self, target: f32, easing: Easing, now: Instant) {
        self.animate_to_after(target, easing, now, Duration::ZERO);
    }

    /// Like [`Animated::animate_to`], holding the current value for `delay` first.
    pub fn animate_to_after(&mut self, target: f32, easing: Easing, now: Instant, delay: Duration) {
        self.tween = Some(Tween::new(self.value, target, easing, now).starting_after(delay));
    }

    /// Samples the tween at `now`. Returns whether the value is still animating.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Some(tween) = self.tween {
            if tween.is_finished(now) {
                self.value = tween.target();
                self.tween = None;
            } else {
                self.value = tween.sample(now);
            }
        }
        self.tween.is_some()
    }
}

impl Default for Animated {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn set_jumps_and_cancels_tween() {
        let now = Instant::now();
        let mut value = Animated::new(0.0);
        value.animate_to(1.0, Easing::linear(1.0), now);
        value.set(0.3);

        assert!(!value.is_animating());
        assert_abs_diff_eq!(value.value(), 0.3);
        assert_abs_diff_eq!(value.target(), 0.3);
    }

    #[test]
    fn tick_interpolates_and_finishes_on_target() {
        let now = Instant::now();
        let mut value = Animated::new(0.0);
        value.animate_to(2.0, Easing::linear(1.0), now);

        assert!(value.tick(now + Duration::from_millis(500)));
        assert_abs_diff_eq!(value.value(), 1.0, epsilon = 1e-4);

        assert!(!value.tick(now + Duration::from_secs(1)));
        assert_abs_diff_eq!(value.value(), 2.0);
    }

    #[test]
    fn retarget_starts_from_presented_value() {
        let now = Instant::now();
        let mut value = Animated::new(0.0);
        value.animate_to(1.0, Easing::linear(1.0), now);
        value.tick(now + Duration::from_millis(500));

        let later = now + Duration::from_millis(500);
        value.animate_to(0.0, Easing::linear(1.0), later);
        value.tick(later);
        assert_abs_diff_eq!(value.value(), 0.5, epsilon = 1e-4);
        assert_abs_diff_eq!(value.target(), 0.0);
    }

    #[test]
    fn delayed_tween_holds_initial_value() {
        let now = Instant::now();
        let mut glow = Animated::new(0.0);
        glow.animate_to_after(1.0, Easing::linear(1.0), now, Duration::from_secs(2));

        glow.tick(now + Duration::from_secs(1));
        assert_abs_diff_eq!(glow.value(), 0.0);
        assert!(glow.is_animating());

        glow.tick(now + Duration::from_millis(2_500));
        assert_abs_diff_eq!(glow.value(), 0.5, epsilon = 1e-4);
    }

    #[test]
    fn tween_sample_before_start_is_from() {
        let now = Instant::now();
        let tween = Tween::new(3.0, 5.0, Easing::linear(1.0), now + Duration::from_secs(1));
        assert_abs_diff_eq!(tween.sample(now), 3.0);
        assert!(!tween.is_finished(now + Duration::from_millis(1_500)));
        assert!(tween.is_finished(now + Duration::from_secs(2)));
    }
}
