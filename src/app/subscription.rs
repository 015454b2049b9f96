// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window size changes and keyboard shortcuts are routed from native events;
//! frame ticks only run while the scene animates or a notification is shown.

use super::message::Shortcut;
use super::Message;
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Window resizes and shortcut keys not captured by a widget.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(window::Event::Opened { size, .. } | window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Character(character),
            modifiers,
            ..
        }) if status == event::Status::Ignored && !modifiers.command() => {
            Shortcut::from_character(character.as_str()).map(Message::Shortcut)
        }
        _ => None,
    })
}

/// Periodic frame tick, active only while needed.
pub fn create_tick_subscription(needs_frames: bool, interval: Duration) -> Subscription<Message> {
    if needs_frames {
        time::every(interval).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
