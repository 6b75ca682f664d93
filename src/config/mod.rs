// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! Timing values the feed engine depends on (pulse duration, advance settle
//! interval) live here rather than as magic constants, so they can be tuned
//! per installation.

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "TasteReel";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    /// Whether videos should attempt autoplay when their item becomes active.
    #[serde(default)]
    pub video_autoplay: Option<bool>,
    /// Heart pulse visibility duration after a double-tap, in milliseconds.
    #[serde(default)]
    pub pulse_duration_ms: Option<u64>,
    /// Scroll-observer suppression interval after a programmatic advance,
    /// in milliseconds.
    #[serde(default)]
    pub advance_settle_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            video_autoplay: Some(true),
            pulse_duration_ms: Some(DEFAULT_PULSE_DURATION_MS),
            advance_settle_ms: Some(DEFAULT_ADVANCE_SETTLE_MS),
        }
    }
}

impl Config {
    /// Returns the pulse duration, clamped to the supported range.
    #[must_use]
    pub fn pulse_duration(&self) -> Duration {
        let ms = self
            .pulse_duration_ms
            .unwrap_or(DEFAULT_PULSE_DURATION_MS)
            .clamp(MIN_PULSE_DURATION_MS, MAX_PULSE_DURATION_MS);
        Duration::from_millis(ms)
    }

    /// Returns the advance settle interval, clamped to the supported range.
    #[must_use]
    pub fn advance_settle(&self) -> Duration {
        let ms = self
            .advance_settle_ms
            .unwrap_or(DEFAULT_ADVANCE_SETTLE_MS)
            .clamp(MIN_ADVANCE_SETTLE_MS, MAX_ADVANCE_SETTLE_MS);
        Duration::from_millis(ms)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_enables_autoplay() {
        let config = Config::default();
        assert_eq!(config.video_autoplay, Some(true));
    }

    #[test]
    fn pulse_duration_clamps_out_of_range_values() {
        let config = Config {
            pulse_duration_ms: Some(999_999),
            ..Config::default()
        };
        assert_eq!(
            config.pulse_duration(),
            Duration::from_millis(MAX_PULSE_DURATION_MS)
        );
    }

    #[test]
    fn advance_settle_falls_back_to_default_when_unset() {
        let config = Config {
            advance_settle_ms: None,
            ..Config::default()
        };
        assert_eq!(
            config.advance_settle(),
            Duration::from_millis(DEFAULT_ADVANCE_SETTLE_MS)
        );
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("settings.toml");

        let config = Config {
            language: Some("fr".to_string()),
            video_autoplay: Some(false),
            pulse_duration_ms: Some(500),
            advance_settle_ms: Some(400),
        };
        save_to_path(&config, &path).expect("save failed");

        let loaded = load_from_path(&path).expect("load failed");
        assert_eq!(loaded.language, Some("fr".to_string()));
        assert_eq!(loaded.video_autoplay, Some(false));
        assert_eq!(loaded.pulse_duration_ms, Some(500));
        assert_eq!(loaded.advance_settle_ms, Some(400));
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("nope.toml");
        assert!(load_from_path(&path).is_err());
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "not [valid toml").expect("write failed");

        let loaded = load_from_path(&path).expect("load failed");
        assert_eq!(loaded.video_autoplay, Config::default().video_autoplay);
    }
}
