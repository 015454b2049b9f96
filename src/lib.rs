// SPDX-License-Identifier: MPL-2.0
//! `envelope_reveal` is a tear-open envelope interaction built with the Iced
//! GUI framework.
//!
//! Four ordered gestures drive it: tear the perforated strip, lift the flap,
//! pull the card out of its pocket, then watch the reveal. The interaction
//! logic lives in [`domain`] and runs without a window; [`ui`] draws it on a
//! canvas and [`app`] wires both into an iced application.

#![doc(html_root_url = "https://docs.rs/envelope_reveal/0.1.0")]

pub mod app;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod feedback;
pub mod i18n;
pub mod icon;
pub mod ui;
