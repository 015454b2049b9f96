// SPDX-License-Identifier: MPL-2.0
//! Presentation variants.
//!
//! The envelope ships in two looks that differ only in constants: strip
//! height, flap travel, commit thresholds, reveal choreography and labels.
//! Colors live with the renderer (see `ui::theme`); everything the
//! interaction logic needs is here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named presentation configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Warm amber-to-purple envelope; the card detaches on reveal.
    #[default]
    Sunset,
    /// Green-to-blue envelope with a thin strip; the card stays in place.
    Meadow,
}

/// Release thresholds. A gesture released at or above its threshold commits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Tear progress fraction.
    pub tear: f32,
    /// Flap angle, in degrees.
    pub flap_degrees: f32,
    /// Card pull progress fraction.
    pub card_pull: f32,
}

/// What happens once the card is out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStyle {
    /// A standalone card takes over at a fixed screen position while the
    /// envelope fades away.
    DetachedCard,
    /// The card stays above the shrunken envelope.
    InPlace,
}

/// Fluent keys for the strings drawn on the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelKeys {
    pub brand: &'static str,
    pub flap_title: &'static str,
}

/// Every constant that differs between variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantConfig {
    pub thresholds: Thresholds,
    /// Flap angle when fully open, in degrees.
    pub flap_max_degrees: f32,
    /// Tear strip height in pixels.
    pub strip_height: f32,
    /// Fraction of the strip width occupied by the curling piece.
    pub curl_radius: f32,
    /// Card progress above which the "nearly out" notification fires.
    pub near_out_progress: f32,
    pub reveal: RevealStyle,
    pub labels: LabelKeys,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Sunset, Variant::Meadow];

    #[must_use]
    pub fn config(self) -> VariantConfig {
        match self {
            Variant::Sunset => VariantConfig {
                thresholds: Thresholds {
                    tear: 0.5,
                    flap_degrees: 60.0,
                    card_pull: 0.45,
                },
                flap_max_degrees: 145.0,
                strip_height: 44.0,
                curl_radius: 0.18,
                near_out_progress: 0.7,
                reveal: RevealStyle::DetachedCard,
                labels: LabelKeys {
                    brand: "sunset-brand",
                    flap_title: "sunset-flap-title",
                },
            },
            Variant::Meadow => VariantConfig {
                thresholds: Thresholds {
                    tear: 0.5,
                    flap_degrees: 75.0,
                    card_pull: 0.5,
                },
                flap_max_degrees: 180.0,
                strip_height: 22.0,
                curl_radius: 0.18,
                near_out_progress: 0.7,
                reveal: RevealStyle::InPlace,
                labels: LabelKeys {
                    brand: "meadow-brand",
                    flap_title: "meadow-flap-title",
                },
            },
        }
    }

    /// Cycles to the next variant.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Variant::Sunset => Variant::Meadow,
            Variant::Meadow => Variant::Sunset,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Sunset => "sunset",
            Variant::Meadow => "meadow",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sunset" => Ok(Variant::Sunset),
            "meadow" => Ok(Variant::Meadow),
            other => Err(format!("unknown variant: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_keep_their_own_thresholds() {
        let sunset = Variant::Sunset.config();
        let meadow = Variant::Meadow.config();

        assert_eq!(sunset.thresholds.flap_degrees, 60.0);
        assert_eq!(meadow.thresholds.flap_degrees, 75.0);
        assert_eq!(sunset.strip_height, 44.0);
        assert_eq!(meadow.strip_height, 22.0);
        assert_eq!(sunset.thresholds.card_pull, 0.45);
    }

    #[test]
    fn thresholds_sit_inside_their_ranges() {
        for variant in Variant::ALL {
            let config = variant.config();
            assert!(config.thresholds.tear > 0.0 && config.thresholds.tear < 1.0);
            assert!(config.thresholds.card_pull > 0.0 && config.thresholds.card_pull < 1.0);
            assert!(config.thresholds.flap_degrees < config.flap_max_degrees);
            assert!(config.flap_max_degrees > 90.0);
            assert!(config.near_out_progress > config.thresholds.card_pull);
        }
    }

    #[test]
    fn next_cycles_through_all_variants() {
        assert_eq!(Variant::Sunset.next(), Variant::Meadow);
        assert_eq!(Variant::Meadow.next(), Variant::Sunset);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Meadow".parse::<Variant>(), Ok(Variant::Meadow));
        assert_eq!(" sunset ".parse::<Variant>(), Ok(Variant::Sunset));
        assert!("autumn".parse::<Variant>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for variant in Variant::ALL {
            assert_eq!(variant.to_string().parse::<Variant>(), Ok(variant));
        }
    }
}
