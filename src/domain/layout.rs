// SPDX-License-Identifier: MPL-2.0
//! Envelope geometry derived from the hosting container size.
//!
//! All rects are expressed in the *envelope frame*: origin at the top-left
//! corner of the unscaled envelope, which is centered in the container. The
//! envelope group is scaled about its own center, so pointer positions are
//! mapped back through [`EnvelopeLayout::to_envelope_space`] before hit
//! testing.

use super::interaction::{EnvelopeVisuals, InteractionGeometry, Layer};
use super::transform;

/// Credit card aspect ratio (85.6 mm × 53.98 mm).
pub const CARD_ASPECT_RATIO: f32 = 1.586;

/// Maximum envelope width in logical pixels.
pub const MAX_ENVELOPE_WIDTH: f32 = 370.0;

/// Maximum envelope height in logical pixels.
pub const MAX_ENVELOPE_HEIGHT: f32 = 540.0;

/// Scale of the standalone card shown after the reveal.
pub const DETACHED_CARD_SCALE: f32 = 1.13;

const WIDTH_RATIO: f32 = 0.88;
const HEIGHT_RATIO: f32 = 0.72;
const CARD_WIDTH_RATIO: f32 = 0.82;
const BODY_HEIGHT_RATIO: f32 = 0.72;
const FLAP_HEIGHT_RATIO: f32 = 0.62;
const SLOT_LIFT_RATIO: f32 = 0.06;
const SLOT_PADDING_X: f32 = 24.0;
const SLOT_PADDING_Y: f32 = 20.0;
const LIP_RATIO: f32 = 0.36;
const TRAVEL_RATIO: f32 = 1.1;
const DETACHED_SHRINK: f32 = 0.79;
const DETACHED_DROP: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Drag translation relative to the press position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

impl Vector {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn from_center(center: Point, size: Size) -> Self {
        Self::new(
            center.x - size.width / 2.0,
            center.y - size.height / 2.0,
            size.width,
            size.height,
        )
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Every dimension the renderer and hit tester need for one container size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvelopeLayout {
    pub container: Size,
    pub envelope: Size,
    pub card: Size,
    pub body_top: f32,
    pub body_height: f32,
    pub flap_height: f32,
    pub strip_height: f32,
    /// Pocket the card rests in.
    pub slot: Rect,
    pub lip_height: f32,
    /// Distance the card center travels over a full pull.
    pub travel: f32,
}

impl EnvelopeLayout {
    #[must_use]
    pub fn new(container: Size, strip_height: f32) -> Self {
        let envelope = Size::new(
            (container.width * WIDTH_RATIO).min(MAX_ENVELOPE_WIDTH),
            (container.height * HEIGHT_RATIO).min(MAX_ENVELOPE_HEIGHT),
        );
        let card_width = envelope.width * CARD_WIDTH_RATIO;
        let card = Size::new(card_width, card_width / CARD_ASPECT_RATIO);

        let body_height = envelope.height * BODY_HEIGHT_RATIO;
        let body_top = envelope.height - body_height;

        let slot_center = Point::new(
            envelope.width / 2.0,
            body_top + body_height / 2.0 - body_height * SLOT_LIFT_RATIO,
        );
        let slot = Rect::from_center(
            slot_center,
            Size::new(card.width + SLOT_PADDING_X, card.height + SLOT_PADDING_Y),
        );

        Self {
            container,
            envelope,
            card,
            body_top,
            body_height,
            flap_height: body_height * FLAP_HEIGHT_RATIO,
            strip_height,
            slot,
            lip_height: card.height * LIP_RATIO,
            travel: card.height * TRAVEL_RATIO,
        }
    }

    /// Envelope frame origin in container coordinates.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(
            (self.container.width - self.envelope.width) / 2.0,
            (self.container.height - self.envelope.height) / 2.0,
        )
    }

    /// Center of the envelope frame; the group scales about this point.
    #[must_use]
    pub fn pivot(&self) -> Point {
        Point::new(self.envelope.width / 2.0, self.envelope.height / 2.0)
    }

    #[must_use]
    pub fn body(&self) -> Rect {
        Rect::new(0.0, self.body_top, self.envelope.width, self.body_height)
    }

    /// Flap region while it lies on the body (closed or lifting).
    #[must_use]
    pub fn flap(&self) -> Rect {
        Rect::new(0.0, self.body_top, self.envelope.width, self.flap_height)
    }

    /// Tear strip, centered on the flap's free edge.
    #[must_use]
    pub fn tear_strip(&self) -> Rect {
        Rect::new(
            0.0,
            self.body_top + self.flap_height - self.strip_height / 2.0,
            self.envelope.width,
            self.strip_height,
        )
    }

    /// Lip covering the bottom of the pocket.
    #[must_use]
    pub fn lip(&self) -> Rect {
        Rect::new(
            self.slot.x,
            self.slot.bottom() - self.lip_height,
            self.slot.width,
            self.lip_height,
        )
    }

    /// Card rect for a pull progress, before the counter-scale.
    #[must_use]
    pub fn card_rect(&self, card_progress: f32) -> Rect {
        let center = self.slot.center();
        let offset = transform::card_offset(self.lip_height, self.travel, card_progress);
        Rect::from_center(Point::new(center.x, center.y + offset), self.card)
    }

    /// Maps a container point into the unscaled envelope frame.
    #[must_use]
    pub fn to_envelope_space(&self, point: Point, envelope_scale: f32) -> Point {
        let origin = self.origin();
        let pivot = self.pivot();
        let scale = if envelope_scale.abs() > f32::EPSILON {
            envelope_scale
        } else {
            1.0
        };
        Point::new(
            pivot.x + (point.x - origin.x - pivot.x) / scale,
            pivot.y + (point.y - origin.y - pivot.y) / scale,
        )
    }

    /// Topmost interactive layer under a container point.
    ///
    /// Only layers accepted by `accepts` are considered. The flap is only
    /// grabbable while it still covers the body.
    #[must_use]
    pub fn hit_test(
        &self,
        point: Point,
        visuals: &EnvelopeVisuals,
        accepts: impl Fn(Layer) -> bool,
    ) -> Option<Layer> {
        let scale = transform::envelope_scale(visuals.open_scale, visuals.card_progress);
        let local = self.to_envelope_space(point, scale);

        if accepts(Layer::TearStrip) && self.tear_strip().contains(local) {
            return Some(Layer::TearStrip);
        }
        if accepts(Layer::Flap) && visuals.flap_angle <= 90.0 && self.flap().contains(local) {
            return Some(Layer::Flap);
        }
        if accepts(Layer::Card)
            && (self.body().contains(local) || self.card_rect(visuals.card_progress).contains(local))
        {
            return Some(Layer::Card);
        }
        None
    }

    /// Center of the standalone card once it detaches from the envelope.
    #[must_use]
    pub fn detached_card_center(&self) -> Point {
        let pulled = self.slot.center().y - self.lip_height * transform::LIP_OVERLAP - self.travel;
        let relative = pulled - self.envelope.height / 2.0;
        let in_envelope = self.envelope.height / 2.0 + relative * DETACHED_SHRINK + DETACHED_DROP;
        Point::new(self.container.width / 2.0, self.origin().y + in_envelope)
    }

    /// Dimensions the interaction state machine maps drags against.
    #[must_use]
    pub fn interaction_geometry(&self) -> InteractionGeometry {
        InteractionGeometry {
            strip_width: self.envelope.width,
            flap_height: self.flap_height,
            card_height: self.card.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::interaction::Envelope;
    use crate::domain::variant::Variant;
    use approx::assert_abs_diff_eq;

    fn phone() -> EnvelopeLayout {
        EnvelopeLayout::new(Size::new(390.0, 844.0), 44.0)
    }

    #[test]
    fn envelope_is_capped_on_large_containers() {
        let layout = EnvelopeLayout::new(Size::new(2000.0, 2000.0), 44.0);
        assert_abs_diff_eq!(layout.envelope.width, MAX_ENVELOPE_WIDTH);
        assert_abs_diff_eq!(layout.envelope.height, MAX_ENVELOPE_HEIGHT);
    }

    #[test]
    fn dimensions_follow_container_ratios() {
        let layout = phone();
        // 390 * 0.88 = 343.2, 844 * 0.72 = 607.68 capped at 540.
        assert_abs_diff_eq!(layout.envelope.width, 343.2, epsilon = 1e-3);
        assert_abs_diff_eq!(layout.envelope.height, 540.0);
        assert_abs_diff_eq!(layout.card.width, 343.2 * 0.82, epsilon = 1e-3);
        assert_abs_diff_eq!(layout.card.height, 343.2 * 0.82 / 1.586, epsilon = 1e-3);
        assert_abs_diff_eq!(layout.body_height, 388.8, epsilon = 1e-3);
        assert_abs_diff_eq!(layout.body_top, 151.2, epsilon = 1e-3);
        assert_abs_diff_eq!(layout.flap_height, 388.8 * 0.62, epsilon = 1e-3);
    }

    #[test]
    fn slot_wraps_card_with_padding() {
        let layout = phone();
        assert_abs_diff_eq!(layout.slot.width, layout.card.width + 24.0, epsilon = 1e-4);
        assert_abs_diff_eq!(layout.slot.height, layout.card.height + 20.0, epsilon = 1e-4);
        let expected_center = 151.2 + 388.8 / 2.0 - 388.8 * 0.06;
        assert_abs_diff_eq!(layout.slot.center().y, expected_center, epsilon = 1e-3);
        assert_abs_diff_eq!(layout.lip().bottom(), layout.slot.bottom(), epsilon = 1e-4);
    }

    #[test]
    fn detached_card_matches_closed_form() {
        let layout = phone();
        let card_h = 343.2 * 0.82 / 1.586;
        let body_h = 540.0 * 0.72;
        let body_top = 540.0 * 0.28;
        let slot_center = body_top + body_h / 2.0 - body_h * 0.06;
        let card_in_group = slot_center - card_h * 0.36 * 0.35 - card_h * 1.1;
        let in_env = 540.0 / 2.0 + (card_in_group - 540.0 / 2.0) * 0.79 + 20.0;
        let expected = (844.0 - 540.0) / 2.0 + in_env;

        let center = layout.detached_card_center();
        assert_abs_diff_eq!(center.x, 195.0);
        assert_abs_diff_eq!(center.y, expected, epsilon = 1e-3);
    }

    #[test]
    fn envelope_space_undoes_group_scale() {
        let layout = phone();
        let origin = layout.origin();
        let pivot = layout.pivot();

        let at_pivot = Point::new(origin.x + pivot.x, origin.y + pivot.y);
        assert_eq!(layout.to_envelope_space(at_pivot, 0.8), pivot);

        let right = Point::new(origin.x + pivot.x + 80.0, origin.y + pivot.y);
        assert_abs_diff_eq!(layout.to_envelope_space(right, 0.8).x, pivot.x + 100.0);
    }

    #[test]
    fn hit_test_prefers_tear_strip_while_sealed() {
        let layout = phone();
        let envelope = Envelope::new(Variant::Sunset, layout.interaction_geometry());
        let strip = layout.tear_strip().center();
        let origin = layout.origin();
        let point = Point::new(origin.x + strip.x, origin.y + strip.y);

        let hit = layout.hit_test(point, &envelope.visuals(), |layer| envelope.accepts(layer));
        assert_eq!(hit, Some(Layer::TearStrip));
    }

    #[test]
    fn hit_test_ignores_disabled_layers() {
        let layout = phone();
        let envelope = Envelope::new(Variant::Sunset, layout.interaction_geometry());
        let body = layout.body();
        let origin = layout.origin();
        let point = Point::new(origin.x + body.center().x, origin.y + body.bottom() - 4.0);

        assert_eq!(
            layout.hit_test(point, &envelope.visuals(), |layer| envelope.accepts(layer)),
            None
        );
        assert_eq!(
            layout.hit_test(point, &envelope.visuals(), |_| true),
            Some(Layer::Card)
        );
    }

    #[test]
    fn geometry_for_state_machine() {
        let layout = phone();
        let geometry = layout.interaction_geometry();
        assert_abs_diff_eq!(geometry.strip_width, layout.envelope.width);
        assert_abs_diff_eq!(geometry.flap_height, layout.flap_height);
        assert_abs_diff_eq!(geometry.card_height, layout.card.height);
    }
}
