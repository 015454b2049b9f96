// SPDX-License-Identifier: MPL-2.0
//! Single-axis drag mapping and haptic step bucketing.
//!
//! Every interactive layer converts one component of the drag translation
//! into a bounded progress value. Movement in the wrong direction is ignored
//! rather than pushing progress below zero.

/// Horizontal tear distance, as a fraction of the strip width, that maps to
/// a fully torn strip. The tear line follows the finger across the strip.
pub const TEAR_SPAN_RATIO: f32 = 1.0;

/// Degrees of flap rotation per flap height of upward drag.
pub const FLAP_DEGREES_PER_HEIGHT: f32 = 200.0;

/// Upward card drag, as a multiple of the card height, that maps to a fully
/// pulled card.
pub const CARD_SPAN_RATIO: f32 = 1.5;

/// Haptic buckets across a full tear.
pub const TEAR_HAPTIC_STEPS: u32 = 25;

/// Haptic buckets across a full card pull.
pub const CARD_HAPTIC_STEPS: u32 = 10;

/// Maps a drag `delta` over `span` pixels to progress in `[0, 1]`.
///
/// Non-positive deltas (or a degenerate span) leave `current` unchanged.
#[must_use]
pub fn progress_from_drag(delta: f32, span: f32, current: f32) -> f32 {
    if delta <= 0.0 || span <= 0.0 {
        return current;
    }
    (delta / span).clamp(0.0, 1.0)
}

/// Maps an upward drag to a flap angle in `[0, max_degrees]`.
#[must_use]
pub fn angle_from_drag(upward: f32, flap_height: f32, max_degrees: f32, current: f32) -> f32 {
    if upward <= 0.0 || flap_height <= 0.0 {
        return current;
    }
    (upward / flap_height * FLAP_DEGREES_PER_HEIGHT).clamp(0.0, max_degrees)
}

/// Emits one feedback signal each time progress enters a higher bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HapticStepper {
    step_count: u32,
    last_step: u32,
}

impl HapticStepper {
    #[must_use]
    pub const fn new(step_count: u32) -> Self {
        Self {
            step_count,
            last_step: 0,
        }
    }

    /// Returns `true` when `progress` lands in a bucket above the last one
    /// that fired during this gesture.
    pub fn advance(&mut self, progress: f32) -> bool {
        let step = self.bucket(progress);
        if step > self.last_step {
            self.last_step = step;
            true
        } else {
            false
        }
    }

    /// Forgets the gesture's high-water mark.
    pub fn reset(&mut self) {
        self.last_step = 0;
    }

    #[must_use]
    pub fn last_step(&self) -> u32 {
        self.last_step
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    // progress is clamped to [0, 1] and step_count is small
    fn bucket(&self, progress: f32) -> u32 {
        (progress.clamp(0.0, 1.0) * self.step_count as f32).floor() as u32
    }
}
