// SPDX-License-Identifier: MPL-2.0
//! Domain layer - the envelope interaction without any GUI framework.
//!
//! Everything here is driven by explicit `Instant`s, so the whole interaction
//! can be replayed and tested without a window.
//!
//! # Modules
//!
//! - [`animation`]: Interpolation primitive ([`Easing`](animation::Easing),
//!   [`Animated`](animation::Animated))
//! - [`interaction`]: The state machine ([`Envelope`](interaction::Envelope)),
//!   gesture mapping and deferred tasks
//! - [`layout`]: Container size to envelope geometry
//! - [`reveal`]: Background, flash and detached card choreography
//! - [`transform`]: Pure derived visuals
//! - [`variant`]: Presentation configurations

pub mod animation;
pub mod interaction;
pub mod layout;
pub mod reveal;
pub mod transform;
pub mod variant;
