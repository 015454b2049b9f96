// SPDX-License-Identifier: MPL-2.0
//! Reveal choreography around the envelope.
//!
//! The host reacts to the two completion events: when the card is nearly
//! out the gradient background slides in under a white flash that then
//! fades; once the card is out the standalone card takes over and the
//! envelope fades away (for variants that detach the card).

use super::animation::{Animated, Easing};
use super::interaction::{Scheduler, TaskId};
use super::variant::RevealStyle;
use std::time::{Duration, Instant};

/// Delay before the flash starts fading.
pub const FLASH_HOLD: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RevealStep {
    FadeFlash,
}

/// Per-frame values of the reveal scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealVisuals {
    /// Share of the container covered by the gradient background, sliding up
    /// from the bottom edge.
    pub background_coverage: f32,
    pub light_flash: f32,
    pub envelope_opacity: f32,
    pub show_card: bool,
}

#[derive(Debug, Clone)]
pub struct RevealScene {
    style: RevealStyle,
    background: Animated,
    light_flash: Animated,
    envelope_opacity: Animated,
    background_shown: bool,
    show_card: bool,
    scheduler: Scheduler<RevealStep>,
    flash_fade: Option<TaskId>,
}

impl RevealScene {
    #[must_use]
    pub fn new(style: RevealStyle) -> Self {
        Self {
            style,
            background: Animated::new(0.0),
            light_flash: Animated::new(1.0),
            envelope_opacity: Animated::new(1.0),
            background_shown: false,
            show_card: false,
            scheduler: Scheduler::new(),
            flash_fade: None,
        }
    }

    /// Slides the background in under a fresh flash. A repeated call
    /// restarts the flash hold.
    pub fn card_near_out(&mut self, now: Instant) {
        self.light_flash.set(1.0);
        self.background_shown = true;
        self.background.animate_to(1.0, Easing::ease_in_out(0.5), now);
        if let Some(id) = self.flash_fade.take() {
            self.scheduler.cancel(id);
        }
        self.flash_fade = Some(self.scheduler.schedule(now, FLASH_HOLD, RevealStep::FadeFlash));
    }

    /// Hands over to the standalone card, if the style detaches it.
    pub fn card_out(&mut self, now: Instant) {
        if self.style == RevealStyle::DetachedCard && !self.show_card {
            self.show_card = true;
            self.envelope_opacity.animate_to(0.0, Easing::ease_out(0.35), now);
        }
    }

    /// Returns whether another frame is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        for step in self.scheduler.drain_due(now) {
            match step {
                RevealStep::FadeFlash => {
                    self.flash_fade = None;
                    self.light_flash.animate_to(0.0, Easing::ease_out(0.8), now);
                }
            }
        }

        let mut animating = self.background.tick(now);
        animating |= self.light_flash.tick(now);
        animating |= self.envelope_opacity.tick(now);
        animating || !self.scheduler.is_empty()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.scheduler.is_empty()
            || self.background.is_animating()
            || self.light_flash.is_animating()
            || self.envelope_opacity.is_animating()
    }

    #[must_use]
    pub fn background_shown(&self) -> bool {
        self.background_shown
    }

    #[must_use]
    pub fn visuals(&self) -> RevealVisuals {
        RevealVisuals {
            background_coverage: self.background.value(),
            light_flash: if self.background_shown {
                self.light_flash.value()
            } else {
                0.0
            },
            envelope_opacity: self.envelope_opacity.value(),
            show_card: self.show_card,
        }
    }
}
