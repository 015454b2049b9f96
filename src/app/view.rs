// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The envelope canvas fills the window; notifications and the shortcut hint
//! float at the bottom.

use super::session::Session;
use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::envelope::{self, EnvelopeLabels};
use crate::ui::notifications;
use crate::ui::theme;
use iced::widget::{Column, Container, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a Session,
    pub labels: &'a EnvelopeLabels,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let scene = envelope::view(envelope::ViewContext {
        envelope: ctx.session.envelope(),
        layout: ctx.session.layout(),
        reveal: ctx.session.reveal_visuals(),
        labels: ctx.labels,
    })
    .map(Message::Envelope);

    let hint = Text::new(ctx.i18n.tr("shortcut-hint"))
        .size(typography::CAPTION)
        .style(theme::status_text_style);

    let overlay = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(notifications::view(ctx.notifications, ctx.i18n))
        .push(hint);

    let bottom = Container::new(overlay)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Bottom);

    Stack::new()
        .push(scene)
        .push(bottom)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
