// SPDX-License-Identifier: MPL-2.0
//! Bounded log of interaction events with JSON export.
//!
//! - [`CircularBuffer`]: ring buffer with configurable capacity
//! - [`InteractionEvent`]: one recorded event, timestamped relative to the log start
//! - [`EventLog`]: the buffer plus its start time, exported as an [`EventLogReport`]

mod buffer;
mod events;
mod export;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use events::{InteractionEvent, InteractionEventKind};
pub use export::{export_to_file, generate_default_filename, write_atomic, EventLogReport};

use crate::domain::variant::Variant;
use crate::error::Result;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct EventLog {
    started_at: Instant,
    started_wall: DateTime<Utc>,
    events: CircularBuffer<InteractionEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new(capacity: BufferCapacity, now: Instant) -> Self {
        Self {
            started_at: now,
            started_wall: Utc::now(),
            events: CircularBuffer::new(capacity),
        }
    }

    #[allow(clippy::cast_possible_truncation)] // session length in ms fits in u64
    pub fn record(&mut self, kind: impl Into<InteractionEventKind>, now: Instant) {
        let timestamp_ms = now.saturating_duration_since(self.started_at).as_millis() as u64;
        self.events.push(InteractionEvent {
            timestamp_ms,
            kind: kind.into(),
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &InteractionEvent> {
        self.events.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[must_use]
    pub fn report(&self, variant: Variant) -> EventLogReport {
        EventLogReport::new(self.started_wall, variant, self.events.iter().cloned().collect())
    }

    /// Exports to `path`, or to a timestamped file in `default_dir`.
    pub fn export(
        &self,
        variant: Variant,
        path: Option<&Path>,
        default_dir: &Path,
    ) -> Result<PathBuf> {
        let target = match path {
            Some(path) => path.to_path_buf(),
            None => default_dir.join(generate_default_filename()),
        };
        export_to_file(&self.report(variant), &target)
    }
}
