// SPDX-License-Identifier: MPL-2.0
//! Shared color helpers for the envelope canvas and the reveal scene.

use crate::domain::variant::Variant;
use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
};
use iced::widget::canvas::gradient;
use iced::{Color, Point, Theme};

const SUNSET_STOPS: [Color; 5] = [
    palette::SUNSET_AMBER,
    palette::SUNSET_ORANGE,
    palette::SUNSET_PINK,
    palette::SUNSET_MAGENTA,
    palette::SUNSET_PURPLE,
];

const MEADOW_STOPS: [Color; 3] = [
    palette::MEADOW_GREEN,
    palette::MEADOW_TEAL,
    palette::MEADOW_BLUE,
];

/// Gradient colors of a variant, top to bottom.
pub fn gradient_stops(variant: Variant) -> &'static [Color] {
    match variant {
        Variant::Sunset => &SUNSET_STOPS,
        Variant::Meadow => &MEADOW_STOPS,
    }
}

/// Multiplies the alpha channel; used to fade whole layers.
pub fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

/// Linear gradient spreading `stops` evenly from `start` to `end`.
pub fn spread(start: Point, end: Point, stops: &[Color], alpha: f32) -> gradient::Linear {
    let last = stops.len().saturating_sub(1).max(1) as f32;
    stops.iter().enumerate().fold(
        gradient::Linear::new(start, end),
        |linear, (index, color)| linear.add_stop(index as f32 / last, faded(*color, alpha)),
    )
}

/// Variant gradient running from `top` to `bottom` at column `x`.
pub fn vertical_gradient(
    variant: Variant,
    x: f32,
    top: f32,
    bottom: f32,
    alpha: f32,
) -> gradient::Linear {
    spread(
        Point::new(x, top),
        Point::new(x, bottom),
        gradient_stops(variant),
        alpha,
    )
}

const SUNSET_INSIDE: [Color; 5] = [
    palette::INSIDE_GREEN,
    palette::INSIDE_SAGE,
    palette::INSIDE_SLATE,
    palette::INSIDE_INDIGO,
    palette::INSIDE_LAVENDER,
];

const MEADOW_INSIDE: [Color; 3] = [
    palette::SUNSET_AMBER,
    palette::SUNSET_ORANGE,
    palette::SUNSET_PINK,
];

/// Inside face of the flap, seen once it folds past vertical.
pub fn flap_inside_stops(variant: Variant) -> &'static [Color] {
    match variant {
        Variant::Sunset => &SUNSET_INSIDE,
        Variant::Meadow => &MEADOW_INSIDE,
    }
}

pub const CARD_STOPS: [Color; 4] = [
    palette::CARD_LIGHT,
    palette::CARD_MID,
    Color::from_rgb(0.94, 0.94, 0.95),
    palette::CARD_DARK,
];

pub const CHIP_STOPS: [Color; 4] = [
    palette::CHIP_SHADOW,
    palette::CHIP_GOLD,
    palette::CHIP_LIGHT,
    Color::from_rgb(0.82, 0.78, 0.68),
];

pub const STRIP_STOPS: [Color; 4] = [
    palette::STRIP_LIGHT,
    palette::STRIP_DARK,
    Color::from_rgb(0.95, 0.94, 0.90),
    Color::from_rgb(0.93, 0.92, 0.88),
];

/// Pocket inset behind the card.
pub fn pocket_color() -> Color {
    Color { a: 0.06, ..BLACK }
}

pub fn pocket_border_color() -> Color {
    Color { a: 0.18, ..WHITE }
}

pub fn lip_color() -> Color {
    Color {
        a: opacity::LIP,
        ..palette::LIP
    }
}

pub fn perforation_color() -> Color {
    Color {
        a: opacity::PERFORATION,
        ..palette::PERFORATION
    }
}

/// Text printed on the envelope.
pub fn ink_color() -> Color {
    WHITE
}

pub fn hint_color(alpha: f32) -> Color {
    faded(palette::HINT, alpha)
}

pub fn shade_color(strength: f32) -> Color {
    Color {
        a: opacity::SHADE * strength.clamp(0.0, 1.0),
        ..BLACK
    }
}

pub fn drop_shadow_color(alpha: f32) -> Color {
    Color {
        a: opacity::DROP_SHADOW * alpha.clamp(0.0, 1.0),
        ..BLACK
    }
}

pub fn highlight_color(strength: f32) -> Color {
    Color {
        a: opacity::HIGHLIGHT * strength.clamp(0.0, 1.0),
        ..WHITE
    }
}

/// Style of the status line shown at the bottom of the window.
pub fn status_text_style(_theme: &Theme) -> iced::widget::text::Style {
    iced::widget::text::Style {
        color: Some(palette::GRAY_400),
    }
}
