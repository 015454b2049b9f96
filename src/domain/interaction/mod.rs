// SPDX-License-Identifier: MPL-2.0
//! Gesture-driven interaction state of the envelope.

pub mod gesture;
mod machine;
pub mod scheduler;

pub use machine::{
    timing, Envelope, EnvelopeEvent, EnvelopeVisuals, HapticPulse, ImpactStyle,
    InteractionGeometry, Layer, Phase,
};
pub use scheduler::{Scheduler, TaskId};
