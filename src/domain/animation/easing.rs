// SPDX-License-Identifier: MPL-2.0
//! Easing curves mapping elapsed time to normalized progress.
//!
//! Timed curves (`Linear`, `EaseOut`, `EaseInOut`) run for a fixed duration.
//! `Spring` models a unit-mass damped harmonic oscillator parameterized the
//! way designers usually describe springs: a `response` (period of the
//! undamped oscillation, in seconds) and a `damping_fraction` (1.0 is
//! critically damped, lower values overshoot).

use std::f32::consts::PI;
use std::time::Duration;

/// Spring motion is considered settled once its envelope drops below this.
const SPRING_SETTLE_EPSILON: f32 = 1e-3;

/// Smallest accepted spring response, in seconds.
const MIN_SPRING_RESPONSE: f32 = 0.01;

/// Animation curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear { duration: Duration },
    EaseOut { duration: Duration },
    EaseInOut { duration: Duration },
    Spring {
        /// Period of the undamped oscillation, in seconds.
        response: f32,
        /// Damping ratio; clamped to `(0, 1]`.
        damping_fraction: f32,
    },
}

impl Easing {
    #[must_use]
    pub fn linear(seconds: f32) -> Self {
        Self::Linear {
            duration: Duration::from_secs_f32(seconds.max(0.0)),
        }
    }

    #[must_use]
    pub fn ease_out(seconds: f32) -> Self {
        Self::EaseOut {
            duration: Duration::from_secs_f32(seconds.max(0.0)),
        }
    }

    #[must_use]
    pub fn ease_in_out(seconds: f32) -> Self {
        Self::EaseInOut {
            duration: Duration::from_secs_f32(seconds.max(0.0)),
        }
    }

    #[must_use]
    pub fn spring(response: f32, damping_fraction: f32) -> Self {
        Self::Spring {
            response,
            damping_fraction,
        }
    }

    /// Total time until the curve reaches (or settles on) its end value.
    #[must_use]
    pub fn duration(&self) -> Duration {
        match *self {
            Self::Linear { duration }
            | Self::EaseOut { duration }
            | Self::EaseInOut { duration } => duration,
            Self::Spring {
                response,
                damping_fraction,
            } => {
                let (omega, zeta) = spring_params(response, damping_fraction);
                Duration::from_secs_f32(-SPRING_SETTLE_EPSILON.ln() / (zeta * omega))
            }
        }
    }

    /// Normalized progress after `elapsed`.
    ///
    /// Timed curves stay within `[0, 1]`; an underdamped spring may overshoot
    /// 1 before settling. Every curve returns exactly 1 once `elapsed` reaches
    /// [`Easing::duration`].
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> f32 {
        let total = self.duration();
        if elapsed >= total {
            return 1.0;
        }
        let secs = elapsed.as_secs_f32();

        match *self {
            Self::Linear { .. } => secs / total.as_secs_f32(),
            Self::EaseOut { .. } => {
                let t = secs / total.as_secs_f32();
                1.0 - (1.0 - t).powi(3)
            }
            Self::EaseInOut { .. } => {
                let t = secs / total.as_secs_f32();
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Self::Spring {
                response,
                damping_fraction,
            } => spring_position(response, damping_fraction, secs),
        }
    }
}

/// Returns `(natural angular frequency, damping ratio)`.
fn spring_params(response: f32, damping_fraction: f32) -> (f32, f32) {
    let omega = 2.0 * PI / response.max(MIN_SPRING_RESPONSE);
    let zeta = damping_fraction.clamp(0.05, 1.0);
    (omega, zeta)
}

fn spring_position(response: f32, damping_fraction: f32, t: f32) -> f32 {
    let (omega, zeta) = spring_params(response, damping_fraction);
    let decay = (-zeta * omega * t).exp();

    if zeta >= 1.0 {
        return 1.0 - decay * (1.0 + omega * t);
    }

    let damped = omega * (1.0 - zeta * zeta).sqrt();
    1.0 - decay * ((damped * t).cos() + (zeta * omega / damped) * (damped * t).sin())
}
