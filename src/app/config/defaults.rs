// SPDX-License-Identifier: MPL-2.0
//! Default values for every configuration constant.
//!
//! # Categories
//!
//! - **Window**: Initial and minimum window size
//! - **Animation**: Frame tick interval
//! - **Diagnostics**: Event log capacity

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Initial window width; a portrait phone-like frame.
pub const WINDOW_DEFAULT_WIDTH: f32 = 430.0;

/// Initial window height.
pub const WINDOW_DEFAULT_HEIGHT: f32 = 880.0;

/// Minimum window width.
pub const MIN_WINDOW_WIDTH: f32 = 320.0;

/// Minimum window height.
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Default interval between animation frames in milliseconds (~60 fps).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 16;

/// Minimum animation frame interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 4;

/// Maximum animation frame interval in milliseconds.
pub const MAX_TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Haptics Defaults
// ==========================================================================

/// Haptic pulses are forwarded to the feedback engine unless disabled.
pub const DEFAULT_HAPTICS_ENABLED: bool = true;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of interaction events kept in memory.
pub const DEFAULT_EVENT_LOG_CAPACITY: usize = 1000;

/// Minimum event log capacity.
pub const MIN_EVENT_LOG_CAPACITY: usize = 100;

/// Maximum event log capacity.
pub const MAX_EVENT_LOG_CAPACITY: usize = 10000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_WINDOW_WIDTH > 0.0);
    assert!(MIN_WINDOW_HEIGHT > 0.0);
    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);

    assert!(MIN_TICK_INTERVAL_MS > 0);
    assert!(MAX_TICK_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS <= MAX_TICK_INTERVAL_MS);

    assert!(MIN_EVENT_LOG_CAPACITY > 0);
    assert!(MAX_EVENT_LOG_CAPACITY >= MIN_EVENT_LOG_CAPACITY);
    assert!(DEFAULT_EVENT_LOG_CAPACITY >= MIN_EVENT_LOG_CAPACITY);
    assert!(DEFAULT_EVENT_LOG_CAPACITY <= MAX_EVENT_LOG_CAPACITY);
};
