// SPDX-License-Identifier: MPL-2.0
//! Silver card with an EMV chip, drawn inside the pocket or standalone.

use super::draw::{label, rect_path, soft_shadow};
use super::EnvelopeLabels;
use crate::domain::interaction::EnvelopeVisuals;
use crate::domain::layout::{self, EnvelopeLayout, Rect};
use crate::domain::transform::{self, CardShadow};
use crate::ui::design_tokens::{palette, radius, sizing, typography};
use crate::ui::theme;
use iced::widget::canvas::{Frame, Path, Stroke};
use iced::{Point, Vector};

/// Shadow under the standalone card.
const DETACHED_SHADOW: CardShadow = CardShadow {
    opacity: 0.2,
    radius: 20.0,
    offset_y: 10.0,
};

/// Card sliding out of the pocket, in the envelope frame.
///
/// The counter-scale keeps the card at its open-zoom size while the
/// envelope around it shrinks.
pub(super) fn in_pocket(
    frame: &mut Frame,
    layout: &EnvelopeLayout,
    visuals: &EnvelopeVisuals,
    labels: &EnvelopeLabels,
    alpha: f32,
) {
    let progress = visuals.card_progress;
    let rect = layout.card_rect(progress);
    let face = CardFace {
        size: layout.card,
        scale: transform::counter_scale(visuals.open_scale, progress),
        shimmer: transform::chip_shimmer(progress),
        shadow: transform::card_shadow(progress),
        alpha,
    };
    face.draw(frame, rect.center(), labels);
}

/// Standalone card that remains once the envelope has faded.
pub(super) fn detached(frame: &mut Frame, layout: &EnvelopeLayout, labels: &EnvelopeLabels) {
    let face = CardFace {
        size: layout.card,
        scale: layout::DETACHED_CARD_SCALE,
        shimmer: 0.0,
        shadow: DETACHED_SHADOW,
        alpha: 1.0,
    };
    face.draw(frame, layout.detached_card_center(), labels);
}

struct CardFace {
    size: layout::Size,
    scale: f32,
    shimmer: f32,
    shadow: CardShadow,
    alpha: f32,
}

impl CardFace {
    fn draw(&self, frame: &mut Frame, center: layout::Point, labels: &EnvelopeLabels) {
        let width = self.size.width;
        let height = self.size.height;
        let card = Rect::new(-width / 2.0, -height / 2.0, width, height);

        frame.with_save(|frame| {
            frame.translate(Vector::new(center.x, center.y));
            frame.scale(self.scale);

            soft_shadow(
                frame,
                card,
                radius::MD,
                self.shadow.radius,
                self.shadow.offset_y,
                self.shadow.opacity * self.alpha,
            );
            soft_shadow(frame, card, radius::MD, 4.0, 2.0, 0.08 * self.alpha);

            let outline = rect_path(card, radius::MD);
            frame.fill(
                &outline,
                theme::spread(
                    Point::new(card.x, card.y),
                    Point::new(card.x + card.width, card.bottom()),
                    &theme::CARD_STOPS,
                    self.alpha,
                ),
            );
            frame.stroke(
                &outline,
                Stroke::default()
                    .with_width(0.5)
                    .with_color(theme::faded(palette::WHITE, 0.5 * self.alpha)),
            );

            self.chip(frame, card);

            let ink = theme::faded(palette::CARD_INK, self.alpha);
            label(
                frame,
                &labels.card_holder,
                Point::new(card.x + width * 0.25, card.bottom() - height * 0.14),
                typography::CAPTION,
                ink,
                false,
            );
            label(
                frame,
                &labels.card_network,
                Point::new(card.x + width * 0.84, card.bottom() - height * 0.14),
                typography::BODY,
                ink,
                true,
            );
        });
    }

    fn chip(&self, frame: &mut Frame, card: Rect) {
        let chip_width = card.width * sizing::CHIP_WIDTH_RATIO;
        let chip = Rect::new(
            card.x + card.width * 0.12,
            card.y + card.height * 0.3,
            chip_width,
            chip_width * sizing::CHIP_HEIGHT_RATIO,
        );
        let corner = chip.width * 0.15;
        let outline = rect_path(chip, corner);

        frame.fill(
            &outline,
            theme::spread(
                Point::new(chip.x, chip.y),
                Point::new(chip.x + chip.width, chip.bottom()),
                &theme::CHIP_STOPS,
                self.alpha,
            ),
        );

        if self.shimmer > 0.0 {
            let highlight = theme::faded(palette::WHITE, self.shimmer * self.alpha);
            frame.fill(
                &outline,
                theme::spread(
                    Point::new(chip.x, chip.y),
                    Point::new(chip.x + chip.width, chip.y),
                    &[
                        theme::faded(palette::WHITE, 0.0),
                        highlight,
                        theme::faded(palette::WHITE, 0.0),
                    ],
                    1.0,
                ),
            );
        }

        let cx = chip.x + chip.width / 2.0;
        let cy = chip.y + chip.height / 2.0;
        let half_h = chip.height / 2.0;
        let half_w = chip.width / 2.0;
        let line = |opacity: f32| {
            Stroke::default()
                .with_width(0.8)
                .with_color(theme::faded(palette::WHITE, opacity * self.alpha))
        };

        frame.stroke(
            &Path::line(Point::new(cx, chip.y), Point::new(cx, chip.bottom())),
            line(0.55),
        );
        frame.stroke(
            &Path::line(Point::new(chip.x, cy), Point::new(chip.x + chip.width, cy)),
            line(0.55),
        );

        // Contact pad curves, mirrored on each side
        for side in [-1.0_f32, 1.0] {
            let edge = cx + side * half_w;
            for vertical in [-1.0_f32, 1.0] {
                let start_y = cy + vertical * half_h * 0.55;
                let end_y = cy + vertical * half_h;
                let curve = Path::new(|builder| {
                    builder.move_to(Point::new(edge, start_y));
                    builder.quadratic_curve_to(
                        Point::new(cx + side * half_w * 0.85, cy + vertical * half_h * 0.9),
                        Point::new(cx + side * half_w * 0.45, end_y),
                    );
                });
                frame.stroke(&curve, line(0.4));
            }
        }

        frame.stroke(
            &outline,
            Stroke::default()
                .with_width(0.8)
                .with_color(theme::faded(palette::CHIP_BORDER, 0.6 * self.alpha)),
        );
    }
}
