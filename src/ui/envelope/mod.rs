// SPDX-License-Identifier: MPL-2.0
//! Envelope canvas: pointer routing into the interaction machine and drawing
//! of the envelope, card and reveal backdrop.
//!
//! The canvas never mutates domain state. Presses, moves and releases are
//! published as [`Message`]s that the application feeds into
//! [`Envelope`](crate::domain::interaction::Envelope).

mod canvas;
mod card;
mod draw;

pub use canvas::{DragTracker, EnvelopeCanvas, Pointer};

use crate::domain::interaction::{Envelope, Layer};
use crate::domain::layout::{EnvelopeLayout, Vector};
use crate::domain::reveal::RevealVisuals;
use crate::i18n::fluent::I18n;
use iced::widget::Canvas;
use iced::{Element, Length};

/// Gesture notifications published by the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    DragBegan(Layer),
    DragMoved { layer: Layer, translation: Vector },
    DragEnded(Layer),
}

/// Localized strings printed on the envelope and card.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvelopeLabels {
    pub brand: String,
    pub flap_title: String,
    pub tear_hint: String,
    pub notice: String,
    pub card_holder: String,
    pub card_network: String,
}

impl EnvelopeLabels {
    #[must_use]
    pub fn new(i18n: &I18n, variant: crate::domain::variant::Variant) -> Self {
        let keys = variant.config().labels;
        Self {
            brand: i18n.tr(keys.brand),
            flap_title: i18n.tr(keys.flap_title),
            tear_hint: i18n.tr("tear-hint"),
            notice: i18n.tr("envelope-notice"),
            card_holder: i18n.tr("card-holder"),
            card_network: i18n.tr("card-network"),
        }
    }
}

/// Everything the canvas needs to render one frame.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub envelope: &'a Envelope,
    pub layout: &'a EnvelopeLayout,
    pub reveal: RevealVisuals,
    pub labels: &'a EnvelopeLabels,
}

/// Full-window envelope canvas.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    Canvas::new(EnvelopeCanvas::new(ctx))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;

    #[test]
    fn labels_follow_the_variant() {
        let config = Config::default();
        let i18n = I18n::new(Some("en-US".to_string()), &config);

        let sunset = EnvelopeLabels::new(&i18n, crate::domain::variant::Variant::Sunset);
        let meadow = EnvelopeLabels::new(&i18n, crate::domain::variant::Variant::Meadow);

        assert_eq!(sunset.tear_hint, "TEAR");
        assert_ne!(sunset.brand, meadow.brand);
        assert!(!sunset.flap_title.starts_with("MISSING"));
    }
}
