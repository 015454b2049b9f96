// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Every handler works on an [`UpdateContext`] borrowed from `App`, so the
//! logic can be exercised without a running window.

use super::message::Shortcut;
use super::paths;
use super::session::Session;
use crate::domain::layout::Size;
use crate::i18n::fluent::I18n;
use crate::ui::envelope::{self, EnvelopeLabels};
use crate::ui::notifications::{self, Notification};
use std::path::PathBuf;
use std::time::Instant;

/// Mutable view of the application state needed by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a mut Session,
    pub labels: &'a mut EnvelopeLabels,
    pub notifications: &'a mut notifications::Manager,
    pub event_log_path: Option<&'a PathBuf>,
}

pub fn handle_envelope_message(ctx: &mut UpdateContext<'_>, message: envelope::Message, now: Instant) {
    match message {
        envelope::Message::DragBegan(layer) => ctx.session.drag_began(layer, now),
        envelope::Message::DragMoved { layer, translation } => {
            ctx.session.drag_changed(layer, translation, now);
        }
        envelope::Message::DragEnded(layer) => ctx.session.drag_ended(layer, now),
    }
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) {
    ctx.session.tick(now);
    ctx.notifications.tick(now);
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: iced::Size) {
    ctx.session.resize(Size::new(size.width, size.height));
}

pub fn handle_shortcut(ctx: &mut UpdateContext<'_>, shortcut: Shortcut, now: Instant) {
    match shortcut {
        Shortcut::Restart => ctx.session.restart(now),
        Shortcut::NextVariant => {
            let variant = ctx.session.variant().next();
            ctx.session.set_variant(variant, now);
            *ctx.labels = EnvelopeLabels::new(ctx.i18n, variant);
        }
        Shortcut::ExportLog => export_event_log(ctx, now),
    }
}

fn export_event_log(ctx: &mut UpdateContext<'_>, now: Instant) {
    // The data directory is only needed when no explicit target was given.
    let default_dir = paths::get_app_data_dir();
    if ctx.event_log_path.is_none() && default_dir.is_none() {
        tracing::warn!("no data directory available for the event log");
        ctx.notifications
            .push(Notification::error("notification-export-error", now));
        return;
    }
    let default_dir = default_dir.unwrap_or_default();

    let log = ctx.session.event_log();
    match log.export(
        ctx.session.variant(),
        ctx.event_log_path.map(PathBuf::as_path),
        &default_dir,
    ) {
        Ok(path) => {
            tracing::info!(path = %path.display(), events = log.len(), "event log exported");
            ctx.notifications
                .push(Notification::success("notification-export-success", now));
        }
        Err(error) => {
            tracing::error!(%error, "failed to export event log");
            ctx.notifications
                .push(Notification::error("notification-export-error", now));
        }
    }
}
