// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::variant::Variant;
use crate::ui::envelope;
use std::path::PathBuf;
use std::time::Instant;

/// Keyboard shortcuts handled by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// `R`: fresh envelope, pending tasks dropped.
    Restart,
    /// `E`: write the interaction event log to disk.
    ExportLog,
    /// `V`: switch to the next variant (restarts).
    NextVariant,
}

impl Shortcut {
    /// Maps a pressed character to its shortcut, ignoring case.
    #[must_use]
    pub fn from_character(character: &str) -> Option<Self> {
        match character.to_ascii_lowercase().as_str() {
            "r" => Some(Shortcut::Restart),
            "e" => Some(Shortcut::ExportLog),
            "v" => Some(Shortcut::NextVariant),
            _ => None,
        }
    }
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Envelope(envelope::Message),
    /// Frame tick while something animates.
    Tick(Instant),
    WindowResized(iced::Size),
    Shortcut(Shortcut),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Variant to start with; overrides `[presentation] variant`.
    pub variant: Option<Variant>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ENVELOPE_REVEAL_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// File the event log is exported to; defaults to a timestamped file in
    /// the data directory.
    pub event_log: Option<PathBuf>,
}
