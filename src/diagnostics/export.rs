// SPDX-License-Identifier: MPL-2.0
//! JSON export of the interaction event log.

use super::events::InteractionEvent;
use crate::domain::variant::Variant;
use crate::error::Result;
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Exported document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventLogReport {
    /// When the report was generated (RFC 3339).
    pub generated_at: String,
    /// When the log started (RFC 3339).
    pub started_at: String,
    pub app_version: String,
    pub variant: Variant,
    pub event_count: usize,
    pub events: Vec<InteractionEvent>,
}

impl EventLogReport {
    #[must_use]
    pub fn new(started_at: DateTime<Utc>, variant: Variant, events: Vec<InteractionEvent>) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            started_at: started_at.to_rfc3339(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            variant,
            event_count: events.len(),
            events,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Format: `envelope_reveal_events_YYYYMMDD_HHMMSS.json`, local time.
#[must_use]
pub fn generate_default_filename() -> String {
    let now = Local::now();
    format!("envelope_reveal_events_{}.json", now.format("%Y%m%d_%H%M%S"))
}

/// Writes through a temporary file and renames it into place.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");

    fs::write(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}

/// Writes `report` to `path`, creating parent directories.
pub fn export_to_file(report: &EventLogReport, path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    write_atomic(path, &report.to_json()?)?;
    Ok(path.to_path_buf())
}
