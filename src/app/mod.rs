// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the envelope session, localization, notifications
//! and configuration together, and translates iced messages into session
//! calls stamped with the current instant.

pub mod config;
mod message;
pub mod paths;
pub mod session;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, Shortcut};
pub use session::Session;

use crate::diagnostics::{BufferCapacity, EventLog};
use crate::domain::layout::Size;
use crate::feedback;
use crate::i18n::fluent::I18n;
use crate::ui::envelope::EnvelopeLabels;
use crate::ui::notifications::{self, Notification};
use config::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    session: Session,
    labels: EnvelopeLabels,
    notifications: notifications::Manager,
    tick_interval: Duration,
    /// Explicit export target from `--event-log`.
    event_log_path: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("variant", &self.session.variant())
            .field("phase", &self.session.envelope().phase())
            .field("tick_interval", &self.tick_interval)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // iced 0.14 requires a Fn boot; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let now = Instant::now();
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut notifications = notifications::Manager::new();
        if let Some(key) = config_warning {
            notifications.push(Notification::warning(key, now));
        }

        let variant = flags.variant.unwrap_or_else(|| config.variant());
        let event_log = EventLog::new(BufferCapacity::new(config.event_log_capacity()), now);
        let session = Session::new(
            variant,
            Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            feedback::engine(config.haptics.enabled),
            event_log,
            now,
        );
        tracing::info!(
            %variant,
            locale = %i18n.current_locale(),
            haptics = config.haptics.enabled,
            "envelope ready"
        );

        let app = App {
            labels: EnvelopeLabels::new(&i18n, variant),
            i18n,
            session,
            notifications,
            tick_interval: config.tick_interval(),
            event_log_path: flags.event_log,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        let needs_frames = self.session.is_animating() || self.notifications.has_notifications();
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(needs_frames, self.tick_interval),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            session: &mut self.session,
            labels: &mut self.labels,
            notifications: &mut self.notifications,
            event_log_path: self.event_log_path.as_ref(),
        };

        match message {
            Message::Envelope(message) => update::handle_envelope_message(&mut ctx, message, now),
            Message::Tick(instant) => update::handle_tick(&mut ctx, instant),
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::Shortcut(shortcut) => update::handle_shortcut(&mut ctx, shortcut, now),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            session: &self.session,
            labels: &self.labels,
            notifications: &self.notifications,
        })
    }
}
