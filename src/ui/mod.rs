// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! State lives in the domain layer; the UI renders it and publishes
//! messages upward ("state down, messages up").
//!
//! - [`envelope`] - Canvas drawing the envelope scene and routing drags
//! - [`notifications`] - Short status messages (export results, config warnings)
//! - [`design_tokens`] - Design system constants (colors, sizing, typography)
//! - [`theme`] - Gradients and color helpers

pub mod design_tokens;
pub mod envelope;
pub mod notifications;
pub mod theme;
