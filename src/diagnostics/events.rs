// SPDX-License-Identifier: MPL-2.0
//! Interaction events recorded for diagnostics.

use crate::domain::interaction::{EnvelopeEvent, ImpactStyle, Layer, Phase};
use crate::domain::variant::Variant;
use serde::{Deserialize, Serialize};

/// What happened, tagged by `type` in the exported JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InteractionEventKind {
    /// A gesture started on a layer.
    GestureStarted { layer: Layer },
    GestureCommitted { layer: Layer },
    GestureReverted { layer: Layer },
    PhaseChanged { phase: Phase },
    Haptic { style: ImpactStyle, intensity: f32 },
    CardNearOut,
    CardOut,
    /// The envelope was reset (startup, restart key or variant change).
    Restarted { variant: Variant },
}

impl From<EnvelopeEvent> for InteractionEventKind {
    fn from(event: EnvelopeEvent) -> Self {
        match event {
            EnvelopeEvent::Haptic(pulse) => Self::Haptic {
                style: pulse.style,
                intensity: pulse.intensity,
            },
            EnvelopeEvent::PhaseChanged(phase) => Self::PhaseChanged { phase },
            EnvelopeEvent::GestureCommitted(layer) => Self::GestureCommitted { layer },
            EnvelopeEvent::GestureReverted(layer) => Self::GestureReverted { layer },
            EnvelopeEvent::CardNearOut => Self::CardNearOut,
            EnvelopeEvent::CardOut => Self::CardOut,
        }
    }
}

/// An event with its offset from the start of the log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InteractionEvent {
    /// Milliseconds since the log started.
    pub timestamp_ms: u64,
    #[serde(flatten)]
    pub kind: InteractionEventKind,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::interaction::HapticPulse;

    #[test]
    fn serializes_with_type_tag() {
        let event = InteractionEvent {
            timestamp_ms: 42,
            kind: InteractionEventKind::GestureCommitted {
                layer: Layer::TearStrip,
            },
        };
        let json = serde_json::to_value(&event).expect("serialize");
        assert_eq!(json["type"], "gesture_committed");
        assert_eq!(json["layer"], "tear_strip");
        assert_eq!(json["timestamp_ms"], 42);
    }

    #[test]
    fn converts_envelope_events() {
        let pulse = HapticPulse {
            style: ImpactStyle::Soft,
            intensity: 0.3,
        };
        assert_eq!(
            InteractionEventKind::from(EnvelopeEvent::Haptic(pulse)),
            InteractionEventKind::Haptic {
                style: ImpactStyle::Soft,
                intensity: 0.3
            }
        );
        assert_eq!(
            InteractionEventKind::from(EnvelopeEvent::PhaseChanged(Phase::Open)),
            InteractionEventKind::PhaseChanged { phase: Phase::Open }
        );
    }

    #[test]
    fn round_trips_through_json() {
        let event = InteractionEvent {
            timestamp_ms: 7,
            kind: InteractionEventKind::Restarted {
                variant: Variant::Meadow,
            },
        };
        let json = serde_json::to_string(&event).expect("serialize");
        assert!(json.contains("\"variant\":\"meadow\""));
        let back: InteractionEvent = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, event);
    }
}
