// SPDX-License-Identifier: MPL-2.0
//! One run of the envelope: interaction machine, reveal scene, haptics and
//! the diagnostics log, wired together.
//!
//! The session owns every piece of mutable scene state and is driven with
//! explicit instants, so the whole flow can be replayed without a window.

use crate::diagnostics::{EventLog, InteractionEventKind};
use crate::domain::interaction::{Envelope, EnvelopeEvent, Layer};
use crate::domain::layout::{EnvelopeLayout, Size, Vector};
use crate::domain::reveal::{RevealScene, RevealVisuals};
use crate::domain::variant::Variant;
use crate::feedback::HapticEngine;
use std::time::Instant;

#[derive(Debug)]
pub struct Session {
    variant: Variant,
    layout: EnvelopeLayout,
    envelope: Envelope,
    reveal: RevealScene,
    haptics: Box<dyn HapticEngine>,
    event_log: EventLog,
}

impl Session {
    pub fn new(
        variant: Variant,
        container: Size,
        haptics: Box<dyn HapticEngine>,
        mut event_log: EventLog,
        now: Instant,
    ) -> Self {
        let config = variant.config();
        let layout = EnvelopeLayout::new(container, config.strip_height);
        event_log.record(InteractionEventKind::Restarted { variant }, now);
        Self {
            variant,
            layout,
            envelope: Envelope::new(variant, layout.interaction_geometry()),
            reveal: RevealScene::new(config.reveal),
            haptics,
            event_log,
        }
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    #[must_use]
    pub fn layout(&self) -> &EnvelopeLayout {
        &self.layout
    }

    #[must_use]
    pub fn reveal_visuals(&self) -> RevealVisuals {
        self.reveal.visuals()
    }

    #[must_use]
    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    pub fn drag_began(&mut self, layer: Layer, now: Instant) {
        if !self.envelope.accepts(layer) {
            return;
        }
        self.event_log
            .record(InteractionEventKind::GestureStarted { layer }, now);
        self.envelope.drag_began(layer);
    }

    pub fn drag_changed(&mut self, layer: Layer, translation: Vector, now: Instant) {
        self.envelope.drag_changed(layer, translation, now);
        self.dispatch(now);
    }

    pub fn drag_ended(&mut self, layer: Layer, now: Instant) {
        self.envelope.drag_ended(layer, now);
        self.dispatch(now);
    }

    /// Advances animations and deferred tasks; returns whether another frame
    /// is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut animating = self.envelope.tick(now);
        self.dispatch(now);
        animating |= self.reveal.tick(now);
        animating
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.envelope.is_animating() || self.reveal.is_animating()
    }

    /// Recomputes the layout for a new container size.
    pub fn resize(&mut self, container: Size) {
        if container == self.layout.container {
            return;
        }
        self.layout = EnvelopeLayout::new(container, self.variant.config().strip_height);
        self.envelope.set_geometry(self.layout.interaction_geometry());
    }

    /// Fresh envelope and reveal scene; pending deferred tasks are dropped.
    pub fn restart(&mut self, now: Instant) {
        self.set_variant(self.variant, now);
    }

    pub fn set_variant(&mut self, variant: Variant, now: Instant) {
        let config = variant.config();
        self.variant = variant;
        self.layout = EnvelopeLayout::new(self.layout.container, config.strip_height);
        self.envelope = Envelope::new(variant, self.layout.interaction_geometry());
        self.reveal = RevealScene::new(config.reveal);
        self.event_log
            .record(InteractionEventKind::Restarted { variant }, now);
        tracing::info!(%variant, "envelope restarted");
    }

    fn dispatch(&mut self, now: Instant) {
        for event in self.envelope.take_events() {
            match event {
                EnvelopeEvent::Haptic(pulse) => self.haptics.impact(pulse),
                EnvelopeEvent::CardNearOut => self.reveal.card_near_out(now),
                EnvelopeEvent::CardOut => self.reveal.card_out(now),
                EnvelopeEvent::PhaseChanged(_)
                | EnvelopeEvent::GestureCommitted(_)
                | EnvelopeEvent::GestureReverted(_) => {}
            }
            self.event_log.record(event, now);
        }
    }
}
