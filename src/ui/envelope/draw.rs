// SPDX-License-Identifier: MPL-2.0
//! Envelope rendering in the scaled envelope frame.

use super::{card, EnvelopeLabels};
use crate::domain::interaction::EnvelopeVisuals;
use crate::domain::layout::{EnvelopeLayout, Rect};
use crate::domain::reveal::RevealVisuals;
use crate::domain::transform::{self, FlapFace, FlapProjection};
use crate::domain::variant::Variant;
use crate::ui::design_tokens::{palette, radius, sizing, typography};
use crate::ui::theme;
use iced::alignment;
use iced::border;
use iced::widget::canvas::{self, Frame, LineDash, Path, Stroke};
use iced::{Color, Font, Point, Size, Vector};

/// Envelope-group inputs for one frame.
pub(super) struct EnvelopeScene<'a> {
    pub variant: Variant,
    pub layout: &'a EnvelopeLayout,
    pub visuals: &'a EnvelopeVisuals,
    pub labels: &'a EnvelopeLabels,
    /// Opacity of the whole group while it fades after the reveal.
    pub alpha: f32,
}

const PERFORATION_DASHES: [f32; 2] = [sizing::PERFORATION_DASH, sizing::PERFORATION_GAP];

/// Envelope drop shadow: radius and vertical offset.
const GROUP_SHADOW_RADIUS: f32 = 28.0;
const GROUP_SHADOW_OFFSET: f32 = 14.0;

/// Tooth height of the ragged tear line.
const TEAR_EDGE_STEP: f32 = 3.0;

pub(super) fn rect_path(rect: Rect, corner: f32) -> Path {
    Path::rounded_rectangle(
        Point::new(rect.x, rect.y),
        Size::new(rect.width, rect.height),
        corner.into(),
    )
}

/// Soft shadow approximated by stacked, expanding translucent shapes.
pub(super) fn soft_shadow(
    frame: &mut Frame,
    rect: Rect,
    corner: f32,
    blur: f32,
    offset_y: f32,
    opacity: f32,
) {
    if opacity <= 0.0 {
        return;
    }
    let layers = sizing::SHADOW_LAYERS;
    let step_alpha = opacity / layers as f32;
    for layer in 1..=layers {
        let spread = blur * layer as f32 / layers as f32;
        let shadow = Rect::new(
            rect.x - spread / 2.0,
            rect.y + offset_y - spread / 2.0,
            rect.width + spread,
            rect.height + spread,
        );
        frame.fill(
            &rect_path(shadow, corner + spread / 2.0),
            Color {
                a: step_alpha,
                ..palette::BLACK
            },
        );
    }
}

pub(super) fn label(
    frame: &mut Frame,
    content: &str,
    position: Point,
    size: f32,
    color: Color,
    bold: bool,
) {
    let font = if bold {
        Font {
            weight: iced::font::Weight::Bold,
            ..Font::DEFAULT
        }
    } else {
        Font::DEFAULT
    };
    frame.fill_text(canvas::Text {
        content: content.to_string(),
        position,
        color,
        size: size.into(),
        font,
        align_x: alignment::Horizontal::Center.into(),
        align_y: alignment::Vertical::Center,
        ..canvas::Text::default()
    });
}

/// Paper page, plus the gradient sliding up from the bottom and its flash.
pub(super) fn backdrop(frame: &mut Frame, variant: Variant, reveal: &RevealVisuals) {
    let size = frame.size();
    frame.fill_rectangle(Point::ORIGIN, size, palette::PAPER);

    let coverage = reveal.background_coverage.clamp(0.0, 1.0);
    if coverage <= 0.0 {
        return;
    }
    let top = size.height * (1.0 - coverage);
    let area = Path::rectangle(Point::new(0.0, top), Size::new(size.width, size.height - top));
    frame.fill(
        &area,
        theme::vertical_gradient(variant, size.width / 2.0, top, top + size.height, 1.0),
    );
    if reveal.light_flash > 0.0 {
        frame.fill(&area, theme::faded(palette::WHITE, reveal.light_flash));
    }
}

/// Draws the envelope group scaled about its center.
pub(super) fn envelope(frame: &mut Frame, scene: &EnvelopeScene<'_>) {
    let layout = scene.layout;
    let visuals = scene.visuals;
    let scale = transform::envelope_scale(visuals.open_scale, visuals.card_progress);
    let origin = layout.origin();
    let pivot = layout.pivot();
    let projection = transform::flap_projection(visuals.flap_angle, layout.flap_height);

    frame.with_save(|frame| {
        frame.translate(Vector::new(origin.x + pivot.x, origin.y + pivot.y));
        frame.scale(scale);
        frame.translate(Vector::new(-pivot.x, -pivot.y));

        soft_shadow(
            frame,
            layout.body(),
            radius::LG,
            GROUP_SHADOW_RADIUS,
            GROUP_SHADOW_OFFSET,
            theme::drop_shadow_color(scene.alpha).a,
        );

        if projection.behind_body {
            flap(frame, scene, &projection);
        }
        body(frame, scene);
        if !projection.behind_body {
            flap(frame, scene, &projection);
        }
        if visuals.strip_opacity > 0.0 {
            tear_strip(frame, scene);
        }
    });
}

fn body(frame: &mut Frame, scene: &EnvelopeScene<'_>) {
    let layout = scene.layout;
    let rect = layout.body();
    frame.fill(
        &rect_path(rect, radius::LG),
        theme::spread(
            Point::new(rect.x, rect.y),
            Point::new(rect.x + rect.width, rect.bottom()),
            theme::gradient_stops(scene.variant),
            scene.alpha,
        ),
    );

    let pocket = rect_path(layout.slot, radius::LG - 2.0);
    frame.fill(&pocket, theme::faded(theme::pocket_color(), scene.alpha));
    frame.stroke(
        &pocket,
        Stroke::default()
            .with_width(1.5)
            .with_color(theme::faded(theme::pocket_border_color(), scene.alpha)),
    );

    card::in_pocket(frame, layout, scene.visuals, scene.labels, scene.alpha);

    let lip = layout.lip();
    soft_shadow(frame, lip, 0.0, 3.0, -2.0, 0.08 * scene.alpha);
    frame.fill(
        &Path::rounded_rectangle(
            Point::new(lip.x, lip.y),
            Size::new(lip.width, lip.height),
            border::Radius {
                top_left: 0.0,
                top_right: 0.0,
                bottom_right: radius::LG - 2.0,
                bottom_left: radius::LG - 2.0,
            },
        ),
        theme::faded(theme::lip_color(), scene.alpha),
    );

    let center_x = rect.x + rect.width / 2.0;
    label(
        frame,
        &scene.labels.notice,
        Point::new(center_x, layout.slot.bottom() + 20.0),
        typography::CAPTION,
        theme::faded(theme::ink_color(), 0.35 * scene.alpha),
        false,
    );
    label(
        frame,
        &scene.labels.brand,
        Point::new(center_x, rect.y + rect.height * 0.9),
        typography::BODY,
        theme::faded(theme::ink_color(), 0.55 * scene.alpha),
        true,
    );
}

fn flap(frame: &mut Frame, scene: &EnvelopeScene<'_>, projection: &FlapProjection) {
    let layout = scene.layout;
    let width = layout.envelope.width;
    let hinge = layout.body_top;
    let free_edge = hinge + projection.projected_height;
    let half_edge = width * projection.free_edge_scale / 2.0;
    let center_x = width / 2.0;

    if projection.projected_height.abs() < f32::EPSILON {
        return;
    }

    let shape = Path::new(|builder| {
        builder.move_to(Point::new(0.0, hinge));
        builder.line_to(Point::new(width, hinge));
        builder.line_to(Point::new(center_x + half_edge, free_edge));
        builder.line_to(Point::new(center_x - half_edge, free_edge));
        builder.close();
    });

    if projection.casts_shadow && projection.face == FlapFace::Outside {
        for offset in [1.0, 2.0, 3.0] {
            let shadow = Path::line(
                Point::new(center_x - half_edge, free_edge + offset),
                Point::new(center_x + half_edge, free_edge + offset),
            );
            frame.stroke(
                &shadow,
                Stroke::default()
                    .with_width(2.0)
                    .with_color(theme::shade_color(0.55 * scene.alpha / offset)),
            );
        }
    }

    match projection.face {
        FlapFace::Outside => {
            let body = layout.body();
            // Same gradient as the body so the closed flap is seamless
            frame.fill(
                &shape,
                theme::spread(
                    Point::new(body.x, body.y),
                    Point::new(body.x + body.width, body.bottom()),
                    theme::gradient_stops(scene.variant),
                    scene.alpha,
                ),
            );
            frame.stroke(
                &Path::line(
                    Point::new(center_x - half_edge, free_edge),
                    Point::new(center_x + half_edge, free_edge),
                ),
                Stroke::default()
                    .with_width(1.0)
                    .with_color(theme::highlight_color(0.5 * scene.alpha)),
            );
        }
        FlapFace::Inside => {
            frame.fill(
                &shape,
                theme::spread(
                    Point::new(0.0, hinge),
                    Point::new(width, free_edge),
                    theme::flap_inside_stops(scene.variant),
                    scene.alpha,
                ),
            );
            flap_title(frame, scene, projection);
        }
    }
}

/// Title printed on the inside of the flap, foreshortened with it.
fn flap_title(frame: &mut Frame, scene: &EnvelopeScene<'_>, projection: &FlapProjection) {
    let visuals = scene.visuals;
    let layout = scene.layout;
    let alpha = visuals.flap_text_opacity * scene.alpha;
    if alpha <= 0.0 {
        return;
    }

    let foreshorten = (projection.projected_height.abs() / layout.flap_height).clamp(0.05, 1.0);
    let center = Point::new(
        layout.envelope.width / 2.0,
        layout.body_top + projection.projected_height * 0.5,
    );
    let size = layout.envelope.width * 0.124 * 0.5;
    let title = &scene.labels.flap_title;

    frame.with_save(|frame| {
        frame.translate(Vector::new(center.x, center.y));
        frame.scale_nonuniform(Vector::new(1.0, foreshorten));

        let glow = visuals.flap_glow * scene.alpha;
        if glow > 0.0 {
            for (spread, strength) in [(2.0, 0.3), (1.0, 0.6)] {
                for direction in [(-1.0, 0.0), (1.0, 0.0), (0.0, -1.0), (0.0, 1.0)] {
                    label(
                        frame,
                        title,
                        Point::new(direction.0 * spread * glow, direction.1 * spread * glow),
                        size,
                        theme::faded(palette::WHITE, glow * strength * 0.5),
                        true,
                    );
                }
            }
        }

        label(
            frame,
            title,
            Point::ORIGIN,
            size,
            theme::faded(theme::ink_color(), alpha),
            true,
        );
    });
}

fn tear_strip(frame: &mut Frame, scene: &EnvelopeScene<'_>) {
    let layout = scene.layout;
    let config = scene.variant.config();
    let strip = layout.tear_strip();
    let alpha = scene.alpha * scene.visuals.strip_opacity;
    let peel = transform::peel_geometry(
        scene.visuals.tear_progress,
        strip.width,
        strip.height,
        config.curl_radius,
    );
    let strip_fill = |alpha: f32| {
        theme::spread(
            Point::new(strip.x, strip.y),
            Point::new(strip.x + strip.width, strip.y),
            &theme::STRIP_STOPS,
            alpha,
        )
    };

    // Still-attached remainder right of the tear line
    if peel.stuck_width > 0.0 {
        let stuck = Rect::new(strip.x + peel.tear_x, strip.y, peel.stuck_width, strip.height);
        frame.fill(&rect_path(stuck, 3.0), strip_fill(alpha));

        for y in [stuck.y + 2.0, stuck.bottom() - 2.0] {
            frame.stroke(
                &Path::line(Point::new(stuck.x, y), Point::new(stuck.x + stuck.width, y)),
                Stroke {
                    line_dash: LineDash {
                        segments: &PERFORATION_DASHES,
                        offset: 0,
                    },
                    ..Stroke::default()
                        .with_width(sizing::PERFORATION_WIDTH)
                        .with_color(theme::faded(theme::perforation_color(), alpha))
                },
            );
        }
        frame.stroke(
            &Path::line(
                Point::new(stuck.x, stuck.y + stuck.height / 2.0),
                Point::new(stuck.x + stuck.width, stuck.y + stuck.height / 2.0),
            ),
            Stroke::default()
                .with_width(0.5)
                .with_color(theme::faded(palette::PERFORATION, 0.2 * alpha)),
        );

        if peel.tear_x > 0.0 {
            tear_edge(frame, stuck, alpha);
        }
    }

    if let Some(hint_alpha) = transform::tear_hint_opacity(scene.visuals.tear_progress) {
        tear_hint(frame, strip, &scene.labels.tear_hint, hint_alpha * alpha);
    }

    // Piece curling up at the tear line
    if peel.curl_width > 0.0 && peel.curl_opacity > 0.0 {
        let curl_alpha = alpha * peel.curl_opacity;
        frame.with_save(|frame| {
            frame.translate(Vector::new(strip.x + peel.tear_x, strip.y - peel.curl_lift));
            frame.rotate(-peel.curl_angle_degrees.to_radians());
            let piece = Rect::new(-peel.curl_width, 0.0, peel.curl_width, strip.height);
            soft_shadow(frame, piece, 3.0, 6.0, 3.0, 0.15 * curl_alpha);
            frame.fill(&rect_path(piece, 3.0), strip_fill(curl_alpha));
            frame.fill(&rect_path(piece, 3.0), theme::shade_color(0.6 * curl_alpha));
        });
    }
}

/// Ragged left edge of the attached strip.
fn tear_edge(frame: &mut Frame, stuck: Rect, alpha: f32) {
    let teeth = (stuck.height / TEAR_EDGE_STEP) as usize;
    let edge = Path::new(|builder| {
        builder.move_to(Point::new(stuck.x, stuck.y));
        for tooth in 0..teeth {
            let y = stuck.y + tooth as f32 * TEAR_EDGE_STEP;
            let x = if tooth % 2 == 0 {
                stuck.x + TEAR_EDGE_STEP / 2.0
            } else {
                stuck.x - TEAR_EDGE_STEP / 2.0
            };
            builder.line_to(Point::new(x, y + TEAR_EDGE_STEP / 2.0));
            builder.line_to(Point::new(stuck.x, y + TEAR_EDGE_STEP));
        }
    });
    frame.stroke(
        &edge,
        Stroke::default()
            .with_width(1.0)
            .with_color(theme::faded(palette::PERFORATION, alpha)),
    );
}

/// "› TEAR ›" hint in the middle of the strip.
fn tear_hint(frame: &mut Frame, strip: Rect, text: &str, alpha: f32) {
    if alpha <= 0.0 {
        return;
    }
    let center = strip.center();
    let color = theme::hint_color(alpha);
    let text_half = typography::CAPTION * text.chars().count() as f32 * 0.4;

    for x in [
        center.x - text_half - sizing::CHEVRON_SIZE * 2.0,
        center.x + text_half + sizing::CHEVRON_SIZE,
    ] {
        let chevron = Path::new(|builder| {
            builder.move_to(Point::new(x, center.y - sizing::CHEVRON_SIZE / 1.5));
            builder.line_to(Point::new(x + sizing::CHEVRON_SIZE / 1.5, center.y));
            builder.line_to(Point::new(x, center.y + sizing::CHEVRON_SIZE / 1.5));
        });
        frame.stroke(&chevron, Stroke::default().with_width(1.6).with_color(color));
    }

    label(
        frame,
        text,
        Point::new(center.x, center.y),
        typography::CAPTION,
        color,
        true,
    );
}
