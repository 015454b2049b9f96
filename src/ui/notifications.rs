// SPDX-License-Identifier: MPL-2.0
//! Short status notifications shown under the envelope.
//!
//! Notifications carry an i18n key resolved at render time and expire on
//! their own; the manager is advanced by the application's frame tick.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{Column, Text};
use iced::{Color, Element};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

/// Severity level determines display duration and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    #[must_use]
    pub fn display_duration(self) -> Duration {
        match self {
            Severity::Success => Duration::from_secs(3),
            Severity::Warning => Duration::from_secs(5),
            Severity::Error => Duration::from_secs(8),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    severity: Severity,
    message_key: String,
    shown_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>, now: Instant) -> Self {
        Self {
            severity,
            message_key: message_key.into(),
            shown_at: now,
        }
    }

    pub fn success(message_key: impl Into<String>, now: Instant) -> Self {
        Self::new(Severity::Success, message_key, now)
    }

    pub fn warning(message_key: impl Into<String>, now: Instant) -> Self {
        Self::new(Severity::Warning, message_key, now)
    }

    pub fn error(message_key: impl Into<String>, now: Instant) -> Self {
        Self::new(Severity::Error, message_key, now)
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.severity.display_duration()
    }
}

/// Visible notifications (newest first) and the overflow queue.
#[derive(Debug, Default)]
pub struct Manager {
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Drops expired notifications and promotes queued ones.
    ///
    /// Promoted notifications start their display time at `now`.
    pub fn tick(&mut self, now: Instant) {
        self.visible.retain(|notification| !notification.is_expired(now));
        while self.visible.len() < MAX_VISIBLE {
            let Some(mut notification) = self.queue.pop_front() else {
                break;
            };
            notification.shown_at = now;
            self.visible.push_back(notification);
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }
}

/// Stack of visible notifications, newest on top.
pub fn view<'a, Message: 'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
    manager
        .visible()
        .fold(Column::new().spacing(spacing::XS), |column, notification| {
            let color = notification.severity().color();
            column.push(
                Text::new(i18n.tr(notification.message_key()))
                    .size(typography::BODY)
                    .style(move |_theme| iced::widget::text::Style { color: Some(color) }),
            )
        })
        .into()
}
