// SPDX-License-Identifier: MPL-2.0
//! User preferences stored in `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[presentation]` - Envelope variant and frame interval
//! - `[haptics]` - Whether haptic pulses are emitted
//! - `[diagnostics]` - Interaction event log size
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. `--config-dir` on the command line
//! 3. `ENVELOPE_REVEAL_CONFIG_DIR` environment variable
//! 4. Platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use envelope_reveal::app::config;
//! use envelope_reveal::domain::variant::Variant;
//!
//! let (mut config, _warning) = config::load();
//! config.presentation.variant = Some(Variant::Meadow);
//! config::save_to_path(&config, std::path::Path::new("settings.toml"))
//!     .expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::variant::Variant;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// i18n key of the warning shown when the config file cannot be read.
pub const LOAD_WARNING_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PresentationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<Variant>,

    /// Interval between animation frames in milliseconds.
    #[serde(
        default = "default_tick_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub tick_interval_ms: Option<u64>,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            variant: Some(Variant::default()),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HapticsConfig {
    #[serde(default = "default_haptics_enabled")]
    pub enabled: bool,
}

impl Default for HapticsConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_HAPTICS_ENABLED,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Interaction events kept in memory for export.
    #[serde(
        default = "default_event_log_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub event_log_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            event_log_capacity: default_event_log_capacity(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub presentation: PresentationConfig,
    #[serde(default)]
    pub haptics: HapticsConfig,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl Config {
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.presentation.variant.unwrap_or_default()
    }

    /// Frame interval, clamped to the supported range.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        let millis = self
            .presentation
            .tick_interval_ms
            .unwrap_or(DEFAULT_TICK_INTERVAL_MS)
            .clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS);
        Duration::from_millis(millis)
    }

    /// Event log capacity, clamped to the supported range.
    #[must_use]
    pub fn event_log_capacity(&self) -> usize {
        self.diagnostics
            .event_log_capacity
            .unwrap_or(DEFAULT_EVENT_LOG_CAPACITY)
            .clamp(MIN_EVENT_LOG_CAPACITY, MAX_EVENT_LOG_CAPACITY)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_tick_interval_ms() -> Option<u64> {
    Some(DEFAULT_TICK_INTERVAL_MS)
}

fn default_haptics_enabled() -> bool {
    DEFAULT_HAPTICS_ENABLED
}

fn default_event_log_capacity() -> Option<usize> {
    Some(DEFAULT_EVENT_LOG_CAPACITY)
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning message.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid config, using defaults");
            (Config::default(), Some(LOAD_WARNING_KEY.to_string()))
        }
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            presentation: PresentationConfig {
                variant: Some(Variant::Meadow),
                tick_interval_ms: Some(8),
            },
            haptics: HapticsConfig { enabled: false },
            diagnostics: DiagnosticsConfig {
                event_log_capacity: Some(250),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);

        save_to_path(&config, &path).expect("save should succeed");
        let loaded = load_from_path(&path).expect("load should succeed");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "[presentation]\nvariant = \"meadow\"\n").expect("write config");

        let config = load_from_path(&path).expect("load should succeed");
        assert_eq!(config.variant(), Variant::Meadow);
        assert_eq!(config.tick_interval(), Duration::from_millis(16));
        assert!(config.haptics.enabled);
        assert_eq!(config.event_log_capacity(), DEFAULT_EVENT_LOG_CAPACITY);
    }

    #[test]
    fn invalid_file_yields_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "[presentation\nvariant = ").expect("write config");

        assert!(matches!(load_from_path(&path), Err(Error::Config(_))));

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(LOAD_WARNING_KEY));
    }

    #[test]
    fn unknown_variant_is_rejected() {
        let parsed = toml::from_str::<Config>("[presentation]\nvariant = \"autumn\"\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config = Config::default();
        config.presentation.tick_interval_ms = Some(1);
        config.diagnostics.event_log_capacity = Some(1_000_000);

        assert_eq!(
            config.tick_interval(),
            Duration::from_millis(MIN_TICK_INTERVAL_MS)
        );
        assert_eq!(config.event_log_capacity(), MAX_EVENT_LOG_CAPACITY);
    }

    #[test]
    fn save_creates_missing_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = temp_dir.path().join("nested");

        save_to_path(&Config::default(), &base.join(CONFIG_FILE)).expect("save");
        let (config, warning) = load_with_override(Some(base));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }
}
