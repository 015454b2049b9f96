// SPDX-License-Identifier: MPL-2.0
//! The envelope interaction state machine.
//!
//! Four phases unlock in strict order: the strip is torn, the flap is
//! opened, the card is pulled and finally the card is out. Each gesture
//! writes its progress scalar on every drag update and is resolved on
//! release: at or above the variant's threshold it commits (animates to the
//! end value and latches after a settle delay), below it springs back.
//!
//! Latches are one-way. Settle delays are [`Scheduler`] entries drained from
//! [`Envelope::tick`], so a re-grab of the same layer or dropping the
//! envelope cancels them.

use super::gesture::{self, HapticStepper};
use super::scheduler::Scheduler;
use crate::domain::animation::{Animated, Easing};
use crate::domain::layout::Vector;
use crate::domain::transform;
use crate::domain::variant::{Variant, VariantConfig};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Timings of the commit choreography.
pub mod timing {
    use std::time::Duration;

    /// Delay between a committed tear and the `is_torn` latch.
    pub const TORN_LATCH: Duration = Duration::from_millis(300);
    /// Delay between a committed tear and the flap nudge.
    pub const FLAP_NUDGE: Duration = Duration::from_millis(550);
    /// Delay between a committed flap and the `is_open` latch.
    pub const OPEN_LATCH: Duration = Duration::from_millis(450);
    /// Delay between a committed pull and the `card_out` latch.
    pub const CARD_OUT_LATCH: Duration = Duration::from_millis(300);
    /// Delay before the flap text starts glowing once open.
    pub const GLOW_DELAY: Duration = Duration::from_secs(2);
    /// Angle the flap lifts to by itself once the strip is gone.
    pub const FLAP_NUDGE_DEGREES: f32 = 10.0;
    /// Angle the flap lies flat at while the card is pulled.
    pub const FLAP_FLAT_DEGREES: f32 = 180.0;
}

/// Interactive layer of the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    TearStrip,
    Flap,
    Card,
}

/// Committed progress of the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Sealed,
    Torn,
    Open,
    Revealed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactStyle {
    Medium,
    Soft,
}

/// A discrete haptic feedback request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HapticPulse {
    pub style: ImpactStyle,
    pub intensity: f32,
}

impl HapticPulse {
    const TEAR_STEP: Self = Self {
        style: ImpactStyle::Medium,
        intensity: 0.7,
    };
    const CARD_GRAB: Self = Self {
        style: ImpactStyle::Soft,
        intensity: 0.6,
    };
    const CARD_STEP: Self = Self {
        style: ImpactStyle::Soft,
        intensity: 0.3,
    };
}

/// Notification emitted by the envelope for its host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnvelopeEvent {
    Haptic(HapticPulse),
    PhaseChanged(Phase),
    GestureCommitted(Layer),
    GestureReverted(Layer),
    /// The card is close to leaving the pocket. Fires at most once.
    CardNearOut,
    /// The card has left the pocket. Fires exactly once.
    CardOut,
}

/// Pixel spans the drags are mapped against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionGeometry {
    pub strip_width: f32,
    pub flap_height: f32,
    pub card_height: f32,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvelopeVisuals {
    pub phase: Phase,
    pub tear_progress: f32,
    pub strip_opacity: f32,
    pub flap_angle: f32,
    pub open_scale: f32,
    pub flap_text_opacity: f32,
    pub flap_glow: f32,
    pub card_progress: f32,
    pub is_torn: bool,
    pub is_open: bool,
    pub card_out: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deferred {
    LatchTorn,
    NudgeFlap,
    LatchOpen,
    LatchCardOut,
}

impl Deferred {
    /// Whether grabbing `layer` supersedes this task.
    fn superseded_by(self, layer: Layer) -> bool {
        match self {
            Deferred::LatchTorn => layer == Layer::TearStrip,
            Deferred::NudgeFlap => matches!(layer, Layer::TearStrip | Layer::Flap),
            Deferred::LatchOpen => layer == Layer::Flap,
            Deferred::LatchCardOut => layer == Layer::Card,
        }
    }
}

/// Interaction state of one envelope.
#[derive(Debug, Clone)]
pub struct Envelope {
    variant: Variant,
    config: VariantConfig,
    geometry: InteractionGeometry,

    tear: Animated,
    strip_opacity: Animated,
    flap_angle: Animated,
    open_scale: Animated,
    flap_text_opacity: Animated,
    flap_glow: Animated,
    card: Animated,

    is_torn: bool,
    is_open: bool,
    card_out: bool,
    near_out_fired: bool,

    active: Option<Layer>,
    tear_steps: HapticStepper,
    card_steps: HapticStepper,
    card_grabbed: bool,

    scheduler: Scheduler<Deferred>,
    events: Vec<EnvelopeEvent>,
}

impl Envelope {
    #[must_use]
    pub fn new(variant: Variant, geometry: InteractionGeometry) -> Self {
        Self {
            variant,
            config: variant.config(),
            geometry,
            tear: Animated::new(0.0),
            strip_opacity: Animated::new(1.0),
            flap_angle: Animated::new(0.0),
            open_scale: Animated::new(1.0),
            flap_text_opacity: Animated::new(0.2),
            flap_glow: Animated::new(0.0),
            card: Animated::new(0.0),
            is_torn: false,
            is_open: false,
            card_out: false,
            near_out_fired: false,
            active: None,
            tear_steps: HapticStepper::new(gesture::TEAR_HAPTIC_STEPS),
            card_steps: HapticStepper::new(gesture::CARD_HAPTIC_STEPS),
            card_grabbed: false,
            scheduler: Scheduler::new(),
            events: Vec::new(),
        }
    }

    /// Discards all progress and pending tasks.
    pub fn reset(&mut self) {
        *self = Self::new(self.variant, self.geometry);
    }

    pub fn set_geometry(&mut self, geometry: InteractionGeometry) {
        self.geometry = geometry;
    }

    #[must_use]
    pub fn geometry(&self) -> InteractionGeometry {
        self.geometry
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.card_out {
            Phase::Revealed
        } else if self.is_open {
            Phase::Open
        } else if self.is_torn {
            Phase::Torn
        } else {
            Phase::Sealed
        }
    }

    /// Whether `layer` currently takes gestures.
    #[must_use]
    pub fn accepts(&self, layer: Layer) -> bool {
        match layer {
            Layer::TearStrip => !self.is_torn,
            Layer::Flap => self.is_torn && !self.is_open,
            Layer::Card => self.is_open && !self.card_out,
        }
    }

    /// Starts a gesture on `layer`. Pending settle tasks of that layer are
    /// cancelled; the release decides again.
    pub fn drag_began(&mut self, layer: Layer) {
        if !self.accepts(layer) || self.active == Some(layer) {
            return;
        }
        let cancelled = self
            .scheduler
            .cancel_matching(|task| task.superseded_by(layer));
        if cancelled > 0 {
            tracing::debug!(?layer, cancelled, "re-grab cancelled pending tasks");
        }
        self.active = Some(layer);
        self.tear_steps.reset();
        self.card_steps.reset();
        self.card_grabbed = false;
    }

    /// Applies a drag update. `translation` is relative to the press point.
    pub fn drag_changed(&mut self, layer: Layer, translation: Vector, now: Instant) {
        if !self.accepts(layer) {
            return;
        }
        if self.active != Some(layer) {
            self.drag_began(layer);
        }

        match layer {
            Layer::TearStrip => self.update_tear(translation.x),
            Layer::Flap => self.update_flap(-translation.y),
            Layer::Card => self.update_card(-translation.y, now),
        }
    }

    /// Resolves the gesture on `layer` against its threshold.
    pub fn drag_ended(&mut self, layer: Layer, now: Instant) {
        let was_active = self.active == Some(layer);
        if was_active {
            self.active = None;
            self.tear_steps.reset();
            self.card_steps.reset();
            self.card_grabbed = false;
        }
        if !was_active || !self.accepts(layer) {
            return;
        }

        match layer {
            Layer::TearStrip => self.release_tear(now),
            Layer::Flap => self.release_flap(now),
            Layer::Card => self.release_card(now),
        }
    }

    /// Runs due tasks and advances animations.
    /// Returns whether another frame is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        for task in self.scheduler.drain_due(now) {
            self.run(task, now);
        }

        let mut animating = false;
        for value in [
            &mut self.tear,
            &mut self.strip_opacity,
            &mut self.flap_angle,
            &mut self.open_scale,
            &mut self.flap_text_opacity,
            &mut self.flap_glow,
            &mut self.card,
        ] {
            animating |= value.tick(now);
        }

        animating || !self.scheduler.is_empty()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.scheduler.is_empty()
            || [
                &self.tear,
                &self.strip_opacity,
                &self.flap_angle,
                &self.open_scale,
                &self.flap_text_opacity,
                &self.flap_glow,
                &self.card,
            ]
            .iter()
            .any(|value| value.is_animating())
    }

    /// Events emitted since the last call.
    pub fn take_events(&mut self) -> Vec<EnvelopeEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub fn visuals(&self) -> EnvelopeVisuals {
        EnvelopeVisuals {
            phase: self.phase(),
            tear_progress: self.tear.value(),
            strip_opacity: self.strip_opacity.value(),
            flap_angle: self.flap_angle.value(),
            open_scale: self.open_scale.value(),
            flap_text_opacity: self.flap_text_opacity.value(),
            flap_glow: self.flap_glow.value(),
            card_progress: self.card.value(),
            is_torn: self.is_torn,
            is_open: self.is_open,
            card_out: self.card_out,
        }
    }

    #[must_use]
    pub fn tear_progress(&self) -> f32 {
        self.tear.value()
    }

    #[must_use]
    pub fn flap_angle(&self) -> f32 {
        self.flap_angle.value()
    }

    #[must_use]
    pub fn card_progress(&self) -> f32 {
        self.card.value()
    }

    #[must_use]
    pub fn is_torn(&self) -> bool {
        self.is_torn
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn is_card_out(&self) -> bool {
        self.card_out
    }

    /// Number of settle tasks still waiting.
    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.len()
    }

    fn update_tear(&mut self, rightward: f32) {
        let span = self.geometry.strip_width * gesture::TEAR_SPAN_RATIO;
        let progress = gesture::progress_from_drag(rightward, span, self.tear.value());
        self.tear.set(progress);

        if self.tear_steps.advance(progress) {
            self.events.push(EnvelopeEvent::Haptic(HapticPulse::TEAR_STEP));
        }
    }

    fn update_flap(&mut self, upward: f32) {
        if upward <= 0.0 {
            return;
        }
        let max = self.config.flap_max_degrees;
        let angle =
            gesture::angle_from_drag(upward, self.geometry.flap_height, max, self.flap_angle.value());
        self.flap_angle.set(angle);
        self.open_scale.set(transform::open_scale_for_angle(angle, max));
    }

    fn update_card(&mut self, upward: f32, now: Instant) {
        if upward <= 0.0 {
            return;
        }

        if !self.card_grabbed {
            self.card_grabbed = true;
            self.events.push(EnvelopeEvent::Haptic(HapticPulse::CARD_GRAB));
            if self.flap_angle.target() < timing::FLAP_FLAT_DEGREES {
                self.flap_angle
                    .animate_to(timing::FLAP_FLAT_DEGREES, Easing::spring(0.5, 0.8), now);
            }
        }

        let span = self.geometry.card_height * gesture::CARD_SPAN_RATIO;
        let progress = gesture::progress_from_drag(upward, span, self.card.value());
        self.card.set(progress);

        if self.card_steps.advance(progress) {
            self.events.push(EnvelopeEvent::Haptic(HapticPulse::CARD_STEP));
        }
        if progress > self.config.near_out_progress {
            self.fire_near_out();
        }
    }

    fn release_tear(&mut self, now: Instant) {
        if self.tear.value() >= self.config.thresholds.tear {
            self.tear.animate_to(1.0, Easing::spring(0.35, 0.6), now);
            self.scheduler.schedule(now, timing::TORN_LATCH, Deferred::LatchTorn);
            self.scheduler.schedule(now, timing::FLAP_NUDGE, Deferred::NudgeFlap);
            self.commit(Layer::TearStrip);
        } else {
            self.tear.animate_to(0.0, Easing::spring(0.5, 0.85), now);
            self.revert(Layer::TearStrip);
        }
    }

    fn release_flap(&mut self, now: Instant) {
        if self.flap_angle.value() >= self.config.thresholds.flap_degrees {
            let spring = Easing::spring(0.65, 0.76);
            self.flap_angle.animate_to(self.config.flap_max_degrees, spring, now);
            self.open_scale.animate_to(transform::OPEN_SCALE, spring, now);
            self.scheduler.schedule(now, timing::OPEN_LATCH, Deferred::LatchOpen);
            self.commit(Layer::Flap);
        } else {
            let spring = Easing::spring(0.5, 0.82);
            self.flap_angle.animate_to(0.0, spring, now);
            self.open_scale.animate_to(1.0, spring, now);
            self.revert(Layer::Flap);
        }
    }

    fn release_card(&mut self, now: Instant) {
        if self.card.value() >= self.config.thresholds.card_pull {
            self.card.animate_to(1.0, Easing::spring(0.55, 0.78), now);
            self.fire_near_out();
            self.scheduler.schedule(now, timing::CARD_OUT_LATCH, Deferred::LatchCardOut);
            self.commit(Layer::Card);
        } else {
            self.card.animate_to(0.0, Easing::spring(0.5, 0.82), now);
            self.revert(Layer::Card);
        }
    }

    fn run(&mut self, task: Deferred, now: Instant) {
        match task {
            Deferred::LatchTorn => {
                if !self.is_torn {
                    self.is_torn = true;
                    self.strip_opacity.animate_to(0.0, Easing::ease_out(0.15), now);
                    self.enter(Phase::Torn);
                }
            }
            Deferred::NudgeFlap => {
                if self.is_torn && !self.is_open && self.active != Some(Layer::Flap) {
                    self.flap_angle.animate_to(
                        timing::FLAP_NUDGE_DEGREES,
                        Easing::spring(0.6, 0.7),
                        now,
                    );
                }
            }
            Deferred::LatchOpen => {
                if !self.is_open {
                    self.is_open = true;
                    self.flap_text_opacity.animate_to(1.0, Easing::ease_in_out(2.0), now);
                    self.flap_glow.animate_to_after(
                        1.0,
                        Easing::ease_in_out(2.0),
                        now,
                        timing::GLOW_DELAY,
                    );
                    self.enter(Phase::Open);
                }
            }
            Deferred::LatchCardOut => {
                if !self.card_out {
                    self.card_out = true;
                    self.events.push(EnvelopeEvent::CardOut);
                    self.enter(Phase::Revealed);
                }
            }
        }
    }

    fn fire_near_out(&mut self) {
        if !self.near_out_fired {
            self.near_out_fired = true;
            self.events.push(EnvelopeEvent::CardNearOut);
        }
    }

    fn commit(&mut self, layer: Layer) {
        tracing::debug!(?layer, "gesture committed");
        self.events.push(EnvelopeEvent::GestureCommitted(layer));
    }

    fn revert(&mut self, layer: Layer) {
        tracing::trace!(?layer, "gesture reverted");
        self.events.push(EnvelopeEvent::GestureReverted(layer));
    }

    fn enter(&mut self, phase: Phase) {
        tracing::info!(?phase, variant = %self.variant, "envelope phase changed");
        self.events.push(EnvelopeEvent::PhaseChanged(phase));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::time::Duration;

    const FRAME: Duration = Duration::from_millis(16);

    const GEOMETRY: InteractionGeometry = InteractionGeometry {
        strip_width: 300.0,
        flap_height: 150.0,
        card_height: 140.0,
    };

    fn envelope(variant: Variant) -> Envelope {
        Envelope::new(variant, GEOMETRY)
    }

    /// Ticks at frame rate from `from` for `duration`; returns the end instant.
    fn run_for(envelope: &mut Envelope, from: Instant, duration: Duration) -> Instant {
        let mut now = from;
        let end = from + duration;
        while now < end {
            now += FRAME;
            envelope.tick(now);
        }
        now
    }

    fn drag(envelope: &mut Envelope, layer: Layer, translation: Vector, now: Instant) {
        envelope.drag_began(layer);
        envelope.drag_changed(layer, translation, now);
        envelope.drag_ended(layer, now);
    }

    fn tear_open(envelope: &mut Envelope, now: Instant) -> Instant {
        drag(envelope, Layer::TearStrip, Vector::new(300.0, 0.0), now);
        run_for(envelope, now, Duration::from_secs(1))
    }

    fn open_flap(envelope: &mut Envelope, now: Instant) -> Instant {
        let now = tear_open(envelope, now);
        drag(envelope, Layer::Flap, Vector::new(0.0, -140.0), now);
        run_for(envelope, now, Duration::from_millis(1500))
    }

    fn count(events: &[EnvelopeEvent], wanted: EnvelopeEvent) -> usize {
        events.iter().filter(|event| **event == wanted).count()
    }

    #[test]
    fn starts_sealed_with_only_the_strip_enabled() {
        let envelope = envelope(Variant::Sunset);
        assert_eq!(envelope.phase(), Phase::Sealed);
        assert!(envelope.accepts(Layer::TearStrip));
        assert!(!envelope.accepts(Layer::Flap));
        assert!(!envelope.accepts(Layer::Card));
        assert!(!envelope.is_animating());
    }

    #[test]
    fn tear_past_half_commits_and_unlocks_flap() {
        let start = Instant::now();
        let mut envelope = envelope(Variant::Sunset);

        envelope.drag_began(Layer::TearStrip);
        envelope.drag_changed(Layer::TearStrip, Vector::new(180.0, 0.0), start);
        assert_abs_diff_eq!(envelope.tear_progress(), 0.6);
        envelope.drag_ended(Layer::TearStrip, start);

        let now = run_for(&mut envelope, start, Duration::from_millis(200));
        assert!(!envelope.is_torn(), "latch waits for the settle delay");

        run_for(&mut envelope, now, Duration::from_secs(1));
        assert!(envelope.is_torn());
        assert_abs_diff_eq!(envelope.tear_progress(), 1.0);
        assert_abs_diff_eq!(envelope.visuals().strip_opacity, 0.0);
        assert!(envelope.accepts(Layer::Flap));
        assert!(!envelope.accepts(Layer::TearStrip));
    }

    #[test]
    fn tear_below_half_springs_back() {
        let start = Instant::now();
        let mut envelope = envelope(Variant::Sunset);

        drag(&mut envelope, Layer::TearStrip, Vector::new(90.0, 0.0), start);
        run_for(&mut envelope, start, Duration::from_secs(2));

        assert!(!envelope.is_torn());
        assert_abs_diff_eq!(envelope.tear_progress(), 0.0);
        assert!(!envelope.is_animating());
        assert!(envelope
            .take_events()
            .contains(&EnvelopeEvent::GestureReverted(Layer::TearStrip)));
    }

    #[test]
    fn release_exactly_at_threshold_commits() {
        let start = Instant::now();
        let mut envelope = envelope(Variant::Sunset);

        drag(&mut envelope, Layer::TearStrip, Vector::new(150.0, 0.0), start);
        run_for(&mut envelope, start, Duration::from_secs(1));
        assert!(envelope.is_torn());
    }

    #[test]
    fn flap_released_exactly_at_threshold_opens() {
        let start = Instant::now();
        let mut sunset = envelope(Variant::Sunset);
        let mut meadow = envelope(Variant::Meadow);
        let now = tear_open(&mut sunset, start);
        tear_open(&mut meadow, start);

        // 45 px over a 150 px flap maps to 60 degrees; 56.25 px maps to 75.
        drag(&mut sunset, Layer::Flap, Vector::new(0.0, -45.0), now);
        drag(&mut meadow, Layer::Flap, Vector::new(0.0, -56.25), now);
        run_for(&mut sunset, now, Duration::from_secs(2));
        run_for(&mut meadow, now, Duration::from_secs(2));

        assert!(sunset.is_open());
        assert!(meadow.is_open());
    }

    #[test]
    fn card_released_exactly_at_threshold_comes_out() {
        let start = Instant::now();
        let mut envelope = envelope(Variant::Sunset);
        let now = open_flap(&mut envelope, start);
        envelope.take_events();

        // 0.45 * 140 * 1.5 = 94.5 px.
        envelope.drag_began(Layer::Card);
        envelope.drag_changed(Layer::Card, Vector::new(0.0, -94.5), now);
        assert_abs_diff_eq!(envelope.card_progress(), 0.45, epsilon = 1e-6);
        envelope.drag_ended(Layer::Card, now);

        run_for(&mut envelope, now, Duration::from_secs(2));
        assert!(envelope.is_card_out());
        let events = envelope.take_events();
        assert_eq!(count(&events, EnvelopeEvent::CardOut), 1);
    }

    #[test]
    fn meadow_card_released_exactly_at_threshold_comes_out() {
        let start = Instant::now();
        let mut envelope = envelope(Variant::Meadow);
        let now = tear_open(&mut envelope, start);
        drag(&mut envelope, Layer::Flap, Vector::new(0.0, -140.0), now);
        let now = run_for(&mut envelope, now, Duration::from_millis(1500));

        // 0.5 * 140 * 1.5 = 105 px.
        drag(&mut envelope, Layer::Card, Vector::new(0.0, -105.0), now);
        run_for(&mut envelope, now, Duration::from_secs(2));
        assert!(envelope.is_card_out());
    }

    #[test]
    fn leftward_tear_is_ignored() {
        let now = Instant::now();
        let mut envelope = envelope(Variant::Sunset);
        envelope.drag_changed(Layer::TearStrip, Vector::new(60.0, 0.0), now);
        envelope.drag_changed(Layer::TearStrip, Vector::new(-40.0, 0.0), now);
        assert_abs_diff_eq!(envelope.tear_progress(), 0.2);
    }

    #[test]
    fn tear_haptics_fire_once_per_bucket() {
        let now = Instant::now();
        let mut envelope = envelope(Variant::Sunset);
        envelope.drag_began(Layer::TearStrip);
        for x in (0..=300).step_by(3) {
            envelope.drag_changed(Layer::TearStrip, Vector::new(x as f32, 0.0), now);
        }
        envelope.drag_changed(Layer::TearStrip, Vector::new(120.0, 0.0), now);
        envelope.drag_changed(Layer::TearStrip, Vector::new(300.0, 0.0), now);

        let pulses = envelope
            .take_events()
            .into_iter()
            .filter(|event| matches!(event, EnvelopeEvent::Haptic(_)))
            .count();
        assert_eq!(pulses, gesture::TEAR_HAPTIC_STEPS as usize);
    }

    #[test]
    fn torn_envelope_nudges_flap_open() {
        let start = Instant::now();
        let mut envelope = envelope(Variant::Sunset);
        let now = tear_open(&mut envelope, start);
        assert!(envelope.flap_angle() > 0.0);
        run_for(&mut envelope, now, Duration::from_secs(1));
        assert_abs_diff_eq!(envelope.flap_angle(), timing::FLAP_NUDGE_DEGREES, epsilon = 1e-3);
    }

    #[test]
    fn flap_gesture_is_gated_until_torn() {
        let now = Instant::now();
        let mut envelope = envelope(Variant::Sunset);
        envelope.drag_changed(Layer::Flap, Vector::new(0.0, -200.0), now);
        envelope.drag_ended(Layer::Flap, now);

        assert_abs_diff_eq!(envelope.flap_angle(), 0.0);
        assert!(!envelope.is_animating());
        assert!(envelope.take_events().is_empty());
    }

    #[test]
    fn flap_past_threshold_opens_after_settle_delay() {
        let start = Instant::now();
        let mut envelope = envelope(Variant::Sunset);
        let now = tear_open(&mut envelope, start);

        // 127.5 px of upward drag over a 150 px flap maps to 170 degrees, clamped to 145.
        envelope.drag_began(Layer::Flap);
        envelope.drag_changed(Layer::Flap, Vector::new(0.0, -127.5), now);
        assert_abs_diff_eq!(envelope.flap_angle(), 145.0);
        assert_abs_diff_eq!(envelope.visuals().open_scale, transform::OPEN_SCALE, epsilon = 1e-6);
        envelope.drag_ended(Layer::Flap, now);

        let mid = run_for(&mut envelope, now, Duration::from_millis(400));
        assert!(!envelope.is_open());
        run_for(&mut envelope, mid, Duration::from_secs(1));
        assert!(envelope.is_open());
        assert_abs_diff_eq!(envelope.flap_angle(), 145.0, epsilon = 1e-3);
        assert!(envelope.accepts(Layer::Card));
    }

    #[test]
    fn meadow_flap_reaches_180_degrees() {
        let start = Instant::now();
        let mut envelope = envelope(Variant::Meadow);
        let now = tear_open(&mut envelope, start);

        drag(&mut envelope, Layer::Flap, Vector::new(0.0, -127.5), now);
        run_for(&mut envelope, now, Duration::from_secs(2));
        assert!(envelope.is_open());
        assert_abs_diff_eq!(envelope.flap_angle(), 180.0, epsilon = 1e-3);
    }

    #[test]
    fn flap_below_threshold_springs_closed() {
        let start = Instant::now();
        let mut envelope = envelope(Variant::Sunset);
        let now = tear_open(&mut envelope, start);

        // 30 px maps to 40 degrees.
        drag(&mut envelope, Layer::Flap, Vector::new(0.0, -30.0), now);
        run_for(&mut envelope, now, Duration::from_secs(2));
        assert!(!envelope.is_open());
        assert_abs_diff_eq!(envelope.flap_angle(), 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(envelope.visuals().open_scale, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn meadow_flap_threshold_is_stricter() {
        let start = Instant::now();
        let mut sunset = envelope(Variant::Sunset);
        let mut meadow = envelope(Variant::Meadow);
        let now = tear_open(&mut sunset, start);
        tear_open(&mut meadow, start);

        // 52.5 px maps to 70 degrees: past 60, short of 75.
        drag(&mut sunset, Layer::Flap, Vector::new(0.0, -52.5), now);
        drag(&mut meadow, Layer::Flap, Vector::new(0.0, -52.5), now);
        run_for(&mut sunset, now, Duration::from_secs(2));
        run_for(&mut meadow, now, Duration::from_secs(2));

        assert!(sunset.is_open());
        assert!(!meadow.is_open());
    }

    #[test]
    fn card_gesture_is_gated_until_open() {
        let start = Instant::now();
        let mut envelope = envelope(Variant::Sunset);
        let now = tear_open(&mut envelope, start);
        envelope.take_events();

        drag(&mut envelope, Layer::Card, Vector::new(0.0, -400.0), now);
        assert_abs_diff_eq!(envelope.card_progress(), 0.0);
        assert!(envelope.take_events().is_empty());
    }

    #[test]
    fn card_pull_fires_card_out_exactly_once() {
        let start = Instant::now();
        let mut envelope = envelope(Variant::Sunset);
        let now = open_flap(&mut envelope, start);
        envelope.take_events();

        // 0.5 * 140 * 1.5 = 105 px.
        envelope.drag_began(Layer::Card);
        envelope.drag_changed(Layer::Card, Vector::new(0.0, -105.0), now);
        assert_abs_diff_eq!(envelope.card_progress(), 0.5);
        envelope.drag_ended(Layer::Card, now);

        let end = run_for(&mut envelope, now, Duration::from_secs(2));
        assert!(envelope.is_card_out());
        assert_eq!(envelope.phase(), Phase::Revealed);
        assert_abs_diff_eq!(envelope.card_progress(), 1.0, epsilon = 1e-4);

        // Nothing left to do afterwards.
        drag(&mut envelope, Layer::Card, Vector::new(0.0, -10.0), end);
        run_for(&mut envelope, end, Duration::from_secs(1));

        let events = envelope.take_events();
        assert_eq!(count(&events, EnvelopeEvent::CardOut), 1);
        assert_eq!(count(&events, EnvelopeEvent::CardNearOut), 1);
        assert_eq!(
            count(&events, EnvelopeEvent::PhaseChanged(Phase::Revealed)),
            1
        );
    }

    #[test]
    fn card_grab_flattens_flap_and_pulses_once() {
        let start = Instant::now();
        let mut envelope = envelope(Variant::Sunset);
        let now = open_flap(&mut envelope, start);
        envelope.take_events();

        envelope.drag_began(Layer::Card);
        for y in 1..=5 {
            envelope.drag_changed(Layer::Card, Vector::new(0.0, -(y as f32)), now);
        }
        let grabs = envelope
            .take_events()
            .into_iter()
            .filter(|event| *event == EnvelopeEvent::Haptic(HapticPulse::CARD_GRAB))
            .count();
        assert_eq!(grabs, 1);

        run_for(&mut envelope, now, Duration::from_secs(2));
        assert_abs_diff_eq!(envelope.flap_angle(), 180.0, epsilon = 1e-3);
    }

    #[test]
    fn near_out_fires_during_drag_past_threshold() {
        let start = Instant::now();
        let mut envelope = envelope(Variant::Sunset);
        let now = open_flap(&mut envelope, start);
        envelope.take_events();

        envelope.drag_began(Layer::Card);
        envelope.drag_changed(Layer::Card, Vector::new(0.0, -150.0), now);
        envelope.drag_changed(Layer::Card, Vector::new(0.0, -160.0), now);
        let events = envelope.take_events();
        assert_eq!(count(&events, EnvelopeEvent::CardNearOut), 1);
        assert!(!events.contains(&EnvelopeEvent::CardOut));
    }

    #[test]
    fn short_card_pull_springs_back_into_pocket() {
        let start = Instant::now();
        let mut envelope = envelope(Variant::Sunset);
        let now = open_flap(&mut envelope, start);
        envelope.take_events();

        drag(&mut envelope, Layer::Card, Vector::new(0.0, -63.0), now);
        run_for(&mut envelope, now, Duration::from_secs(2));

        assert!(!envelope.is_card_out());
        assert_abs_diff_eq!(envelope.card_progress(), 0.0, epsilon = 1e-4);
        let events = envelope.take_events();
        assert_eq!(count(&events, EnvelopeEvent::CardOut), 0);
        assert_eq!(count(&events, EnvelopeEvent::CardNearOut), 0);
    }

    #[test]
    fn regrab_cancels_pending_latch() {
        let start = Instant::now();
        let mut envelope = envelope(Variant::Sunset);

        drag(&mut envelope, Layer::TearStrip, Vector::new(240.0, 0.0), start);
        assert_eq!(envelope.pending_tasks(), 2);

        let now = start + Duration::from_millis(100);
        envelope.tick(now);
        envelope.drag_began(Layer::TearStrip);
        assert_eq!(envelope.pending_tasks(), 0);

        envelope.drag_changed(Layer::TearStrip, Vector::new(30.0, 0.0), now);
        envelope.drag_ended(Layer::TearStrip, now);
        run_for(&mut envelope, now, Duration::from_secs(2));

        assert!(!envelope.is_torn());
        assert_abs_diff_eq!(envelope.tear_progress(), 0.0, epsilon = 1e-4);
    }

    #[test]
    fn reset_drops_pending_tasks() {
        let start = Instant::now();
        let mut envelope = envelope(Variant::Sunset);
        drag(&mut envelope, Layer::TearStrip, Vector::new(240.0, 0.0), start);
        envelope.reset();

        run_for(&mut envelope, start, Duration::from_secs(1));
        assert_eq!(envelope.phase(), Phase::Sealed);
        assert_abs_diff_eq!(envelope.tear_progress(), 0.0);
    }

    #[test]
    fn latches_survive_any_further_input() {
        let start = Instant::now();
        let mut envelope = envelope(Variant::Sunset);
        let mut now = open_flap(&mut envelope, start);

        for layer in [Layer::TearStrip, Layer::Flap, Layer::Card] {
            drag(&mut envelope, layer, Vector::new(-50.0, 80.0), now);
            drag(&mut envelope, layer, Vector::new(2.0, -1.0), now);
            now = run_for(&mut envelope, now, Duration::from_secs(1));
            assert!(envelope.is_torn());
            assert!(envelope.is_open());
        }
    }

    #[test]
    fn flap_text_brightens_then_glows_once_open() {
        let start = Instant::now();
        let mut envelope = envelope(Variant::Sunset);
        let now = open_flap(&mut envelope, start);
        let visuals = envelope.visuals();
        assert!(visuals.flap_text_opacity > 0.2);
        assert!(visuals.flap_glow < 1.0);

        run_for(&mut envelope, now, Duration::from_secs(5));
        let visuals = envelope.visuals();
        assert_abs_diff_eq!(visuals.flap_text_opacity, 1.0);
        assert_abs_diff_eq!(visuals.flap_glow, 1.0);
        assert!(!envelope.is_animating());
    }

    #[test]
    fn phase_changes_are_reported_in_order() {
        let start = Instant::now();
        let mut envelope = envelope(Variant::Meadow);
        let now = open_flap(&mut envelope, start);
        drag(&mut envelope, Layer::Card, Vector::new(0.0, -200.0), now);
        run_for(&mut envelope, now, Duration::from_secs(2));

        let phases: Vec<Phase> = envelope
            .take_events()
            .into_iter()
            .filter_map(|event| match event {
                EnvelopeEvent::PhaseChanged(phase) => Some(phase),
                _ => None,
            })
            .collect();
        assert_eq!(phases, vec![Phase::Torn, Phase::Open, Phase::Revealed]);
    }
}
