// SPDX-License-Identifier: MPL-2.0
//! Derived visual transforms.
//!
//! Every rendered property of the envelope is a pure function of the
//! interaction scalars. Nothing here holds state; the renderer calls these
//! once per frame.

/// Envelope zoom once the flap is fully open.
pub const OPEN_SCALE: f32 = 1.13;

/// Envelope shrink applied across a full card pull.
pub const PULL_SHRINK: f32 = 0.21;

/// Below this envelope scale the counter-scale is disabled.
const MIN_COMPENSATED_SCALE: f32 = 0.01;

/// Perspective strength of the flap rotation.
pub const FLAP_PERSPECTIVE: f32 = 0.35;

/// Flap angle above which the drop shadow appears.
const FLAP_SHADOW_MIN_DEGREES: f32 = 3.0;

/// Tear progress after which the curling piece fades out.
pub const CURL_FADE_START: f32 = 0.85;

/// Tear progress above which the "TEAR" hint is hidden.
pub const HINT_VISIBLE_BELOW: f32 = 0.4;

/// Share of the lip height the resting card tucks under.
pub const LIP_OVERLAP: f32 = 0.35;

/// Envelope zoom while the flap is being dragged past vertical.
#[must_use]
pub fn open_scale_for_angle(angle_degrees: f32, max_degrees: f32) -> f32 {
    let span = max_degrees - 90.0;
    if span <= 0.0 {
        return 1.0;
    }
    let past_vertical = ((angle_degrees - 90.0) / span).clamp(0.0, 1.0);
    1.0 + past_vertical * (OPEN_SCALE - 1.0)
}

/// Scale applied to the whole envelope group.
#[must_use]
pub fn envelope_scale(open_scale: f32, card_progress: f32) -> f32 {
    open_scale - card_progress * PULL_SHRINK
}

/// Scale applied to the card so that only the open zoom, not the pull
/// shrink, affects its rendered size.
#[must_use]
pub fn counter_scale(open_scale: f32, card_progress: f32) -> f32 {
    let scale = envelope_scale(open_scale, card_progress);
    if scale > MIN_COMPENSATED_SCALE {
        open_scale / scale
    } else {
        1.0
    }
}

/// Drop shadow under the sliding card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardShadow {
    pub opacity: f32,
    pub radius: f32,
    pub offset_y: f32,
}

#[must_use]
pub fn card_shadow(card_progress: f32) -> CardShadow {
    let p = card_progress.clamp(0.0, 1.0);
    CardShadow {
        opacity: p * 0.25,
        radius: p * 20.0,
        offset_y: p * 10.0,
    }
}

/// Peak opacity of the chip highlight.
#[must_use]
pub fn chip_shimmer(card_progress: f32) -> f32 {
    card_progress.clamp(0.0, 1.0) * 0.5
}

/// Vertical offset of the card center from the pocket center.
#[must_use]
pub fn card_offset(lip_height: f32, travel: f32, card_progress: f32) -> f32 {
    -lip_height * LIP_OVERLAP - card_progress * travel
}

/// Which side of the flap faces the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlapFace {
    Outside,
    Inside,
}

/// Flap rotated about its top edge, projected onto the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlapProjection {
    pub face: FlapFace,
    /// Signed screen height of the flap; negative once it folds above the hinge.
    pub projected_height: f32,
    /// Width multiplier of the free edge from perspective.
    pub free_edge_scale: f32,
    /// Past vertical the flap is drawn behind the body.
    pub behind_body: bool,
    pub casts_shadow: bool,
}

#[must_use]
pub fn flap_projection(angle_degrees: f32, flap_height: f32) -> FlapProjection {
    let radians = angle_degrees.to_radians();
    let face = if angle_degrees <= 90.0 {
        FlapFace::Outside
    } else {
        FlapFace::Inside
    };

    FlapProjection {
        face,
        projected_height: flap_height * radians.cos(),
        free_edge_scale: 1.0 + FLAP_PERSPECTIVE * radians.sin().max(0.0) / 2.0,
        behind_body: angle_degrees > 90.0,
        casts_shadow: angle_degrees > FLAP_SHADOW_MIN_DEGREES,
    }
}

/// Geometry of the strip being peeled from left to right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeelGeometry {
    /// Horizontal position of the tear line.
    pub tear_x: f32,
    /// Width of the still-attached remainder right of the tear line.
    pub stuck_width: f32,
    /// Width of the piece curling up at the tear line.
    pub curl_width: f32,
    /// How far the curling piece lifts off the envelope.
    pub curl_lift: f32,
    /// Rotation of the curling piece, in degrees.
    pub curl_angle_degrees: f32,
    pub curl_opacity: f32,
}

#[must_use]
pub fn peel_geometry(
    tear_progress: f32,
    strip_width: f32,
    strip_height: f32,
    curl_radius: f32,
) -> PeelGeometry {
    let p = tear_progress.clamp(0.0, 1.0);
    let tear_x = p * strip_width;

    let curl_opacity = if p > CURL_FADE_START {
        ((1.0 - p) / (1.0 - CURL_FADE_START)).clamp(0.0, 1.0)
    } else {
        1.0
    };

    PeelGeometry {
        tear_x,
        stuck_width: strip_width - tear_x,
        curl_width: p.min(curl_radius) * strip_width,
        curl_lift: (p / 0.3).clamp(0.0, 1.0) * strip_height * 0.6,
        curl_angle_degrees: (p * 120.0).clamp(0.0, 60.0),
        curl_opacity,
    }
}

/// Opacity of the "TEAR" hint, or `None` once it should be hidden.
#[must_use]
pub fn tear_hint_opacity(tear_progress: f32) -> Option<f32> {
    if tear_progress < HINT_VISIBLE_BELOW {
        Some((0.7 * (1.0 - tear_progress * 2.5)).max(0.0))
    } else {
        None
    }
}
