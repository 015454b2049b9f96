// SPDX-License-Identifier: MPL-2.0
//! Framework-independent animation primitives.

mod easing;
mod tween;

pub use easing::Easing;
pub use tween::{Animated, Tween};
