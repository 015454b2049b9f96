// SPDX-License-Identifier: MPL-2.0
//! Haptic output.
//!
//! Desktop hardware has no impact generator, so the default engine traces
//! each pulse. Platforms with real actuators plug in through [`HapticEngine`].

use crate::domain::interaction::{HapticPulse, ImpactStyle};

pub trait HapticEngine: std::fmt::Debug {
    fn impact(&mut self, pulse: HapticPulse);
}

/// Emits each pulse as a `tracing` event and counts them.
#[derive(Debug, Default)]
pub struct LoggingHaptics {
    pulses: u64,
}

impl LoggingHaptics {
    #[must_use]
    pub fn pulses(&self) -> u64 {
        self.pulses
    }
}

impl HapticEngine for LoggingHaptics {
    fn impact(&mut self, pulse: HapticPulse) {
        self.pulses += 1;
        let style = match pulse.style {
            ImpactStyle::Medium => "medium",
            ImpactStyle::Soft => "soft",
        };
        tracing::trace!(style, intensity = pulse.intensity, "haptic impact");
    }
}

/// Drops every pulse (`[haptics] enabled = false`).
#[derive(Debug, Default)]
pub struct DisabledHaptics;

impl HapticEngine for DisabledHaptics {
    fn impact(&mut self, _pulse: HapticPulse) {}
}

#[must_use]
pub fn engine(enabled: bool) -> Box<dyn HapticEngine> {
    if enabled {
        Box::new(LoggingHaptics::default())
    } else {
        Box::new(DisabledHaptics)
    }
}
