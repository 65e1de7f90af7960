//! Persistent monitor settings.
//!
//! Stored as JSON under the user's config directory. Loading is lenient: each
//! known key is merged on its own, so one bad value never discards the rest.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Known setting keys.
pub const KEYS: &[&str] = &[
    "poll_interval",
    "low_battery_threshold",
    "low_battery_notify",
    "display_mode",
    "launch_at_login",
];

/// How the battery reading is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    IconPercent,
    PercentOnly,
    IconOnly,
}

/// User-adjustable monitor settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Seconds between polls while the device is healthy.
    pub poll_interval: u64,
    /// Battery percentage at or below which a low-battery event fires.
    pub low_battery_threshold: u8,
    pub low_battery_notify: bool,
    pub display_mode: DisplayMode,
    pub launch_at_login: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            poll_interval: 300,
            low_battery_threshold: 20,
            low_battery_notify: true,
            display_mode: DisplayMode::IconPercent,
            launch_at_login: false,
        }
    }
}

/// Default settings file location.
///
/// `$XDG_CONFIG_HOME/razer-battery/settings.json`, falling back to
/// `$HOME/.config/razer-battery/settings.json`.
pub fn settings_path() -> Result<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .ok_or_else(|| Error::Settings("neither XDG_CONFIG_HOME nor HOME is set".into()))?;
    Ok(base.join("razer-battery").join("settings.json"))
}

/// Temp file beside `path`, unique per process: `settings.json.<pid>.tmp`.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}

impl Settings {
    /// Load settings, falling back to defaults for anything unusable.
    pub fn load(path: &Path) -> Self {
        let mut settings = Self::default();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return settings,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Error reading settings, using defaults");
                return settings;
            }
        };

        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(saved)) => {
                settings.merge(&saved);
                debug!(path = %path.display(), "Settings loaded");
            }
            Ok(_) => warn!("Settings file has invalid structure, using defaults"),
            Err(e) => warn!(error = %e, "Corrupt settings file, using defaults"),
        }
        settings
    }

    fn merge(&mut self, saved: &Map<String, Value>) {
        for &key in KEYS {
            let Some(value) = saved.get(key) else {
                continue;
            };
            if let Err(e) = self.apply(key, value) {
                warn!(key, error = %e, "Ignoring saved setting, using default");
            }
        }
    }

    /// Apply one JSON value to a known key.
    fn apply(&mut self, key: &str, value: &Value) -> Result<()> {
        let wrong_type = |expected: &str| {
            Error::Settings(format!("'{key}' requires {expected}, got {value}"))
        };
        match key {
            "poll_interval" => {
                self.poll_interval = value
                    .as_u64()
                    .filter(|v| *v > 0)
                    .ok_or_else(|| wrong_type("a positive integer"))?;
            }
            "low_battery_threshold" => {
                self.low_battery_threshold = value
                    .as_u64()
                    .and_then(|v| u8::try_from(v).ok())
                    .filter(|v| *v <= 100)
                    .ok_or_else(|| wrong_type("an integer 0..=100"))?;
            }
            "low_battery_notify" => {
                self.low_battery_notify = value.as_bool().ok_or_else(|| wrong_type("a bool"))?;
            }
            "launch_at_login" => {
                self.launch_at_login = value.as_bool().ok_or_else(|| wrong_type("a bool"))?;
            }
            "display_mode" => {
                self.display_mode = serde_json::from_value(value.clone())
                    .map_err(|_| Error::Settings(format!("invalid display mode: {value}")))?;
            }
            other => return Err(Error::Settings(format!("unknown setting key: {other:?}"))),
        }
        Ok(())
    }

    /// Set a key from its command-line text form.
    ///
    /// Booleans accept only `true`/`false`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if !KEYS.contains(&key) {
            return Err(Error::Settings(format!("unknown setting key: {key:?}")));
        }
        let parsed = match key {
            "display_mode" => Value::String(value.to_string()),
            _ => serde_json::from_str::<Value>(value)
                .map_err(|_| Error::Settings(format!("'{key}' cannot be set to {value:?}")))?,
        };
        self.apply(key, &parsed)
    }

    /// Current value of a key as JSON.
    pub fn get(&self, key: &str) -> Option<Value> {
        serde_json::to_value(self).ok()?.get(key).cloned()
    }

    /// Write atomically: per-process temp file in the same directory, then rename.
    pub fn save(&self, path: &Path) -> Result<()> {
        let dir = path
            .parent()
            .ok_or_else(|| Error::Settings(format!("no parent directory: {}", path.display())))?;
        fs::create_dir_all(dir)?;

        let json = serde_json::to_string_pretty(self).map_err(|e| Error::Settings(e.to_string()))?;
        let tmp = temp_path_for(path);
        if let Err(e) = fs::write(&tmp, json).and_then(|_| fs::rename(&tmp, path)) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        debug!(path = %path.display(), "Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "razer-battery-test-{}-{name}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir.join("settings.json")
    }

    fn write(path: &Path, text: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, text).unwrap();
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = temp_path("missing");
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn corrupt_json_gives_defaults() {
        let path = temp_path("corrupt");
        write(&path, "{not json");
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn non_object_gives_defaults() {
        let path = temp_path("list");
        write(&path, "[1, 2, 3]");
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn partial_file_merges_with_defaults() {
        let path = temp_path("partial");
        write(&path, r#"{"poll_interval": 60, "extra_key": 1}"#);
        let settings = Settings::load(&path);
        assert_eq!(settings.poll_interval, 60);
        assert_eq!(settings.low_battery_threshold, 20);
        assert_eq!(settings.display_mode, DisplayMode::IconPercent);
    }

    #[test]
    fn wrong_types_fall_back_per_key() {
        let path = temp_path("types");
        write(
            &path,
            r#"{"poll_interval": "fast", "low_battery_notify": 1,
                "display_mode": "sparkles", "low_battery_threshold": 15}"#,
        );
        let settings = Settings::load(&path);
        assert_eq!(settings.poll_interval, 300);
        assert!(settings.low_battery_notify);
        assert_eq!(settings.display_mode, DisplayMode::IconPercent);
        assert_eq!(settings.low_battery_threshold, 15);
    }

    #[test]
    fn save_then_load_round_trip() {
        let path = temp_path("roundtrip");
        let mut settings = Settings::default();
        settings.set("poll_interval", "900").unwrap();
        settings.set("display_mode", "percent_only").unwrap();
        settings.set("low_battery_notify", "false").unwrap();
        settings.save(&path).unwrap();

        assert!(!temp_path_for(&path).exists());
        let leftovers: Vec<_> = fs::read_dir(path.parent().unwrap())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name() != "settings.json")
            .collect();
        assert!(leftovers.is_empty());
        assert_eq!(Settings::load(&path), settings);
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut settings = Settings::default();
        assert!(matches!(
            settings.set("volume", "11"),
            Err(Error::Settings(_))
        ));
    }

    #[test]
    fn set_rejects_wrong_type() {
        let mut settings = Settings::default();
        assert!(settings.set("poll_interval", "soon").is_err());
        assert!(settings.set("low_battery_threshold", "101").is_err());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn temp_file_name_is_per_process() {
        let tmp = temp_path_for(Path::new("/cfg/razer-battery/settings.json"));
        assert_eq!(tmp.parent(), Some(Path::new("/cfg/razer-battery")));
        assert_eq!(
            tmp.file_name().unwrap().to_string_lossy(),
            format!("settings.json.{}.tmp", std::process::id())
        );
    }

    #[test]
    fn zero_poll_interval_rejected() {
        let mut settings = Settings::default();
        assert!(matches!(
            settings.set("poll_interval", "0"),
            Err(Error::Settings(_))
        ));
        assert_eq!(settings.poll_interval, 300);

        let path = temp_path("zero-interval");
        write(&path, r#"{"poll_interval": 0, "low_battery_threshold": 10}"#);
        let loaded = Settings::load(&path);
        assert_eq!(loaded.poll_interval, 300);
        assert_eq!(loaded.low_battery_threshold, 10);
    }

    #[test]
    fn display_mode_uses_snake_case_names() {
        let mut settings = Settings::default();
        settings.set("display_mode", "icon_only").unwrap();
        assert_eq!(settings.display_mode, DisplayMode::IconOnly);
        assert!(settings.set("display_mode", "IconOnly").is_err());
        assert_eq!(settings.display_mode, DisplayMode::IconOnly);
    }

    #[test]
    fn set_rejects_int_for_bool() {
        let mut settings = Settings::default();
        assert!(settings.set("low_battery_notify", "0").is_err());
        assert!(settings.set("launch_at_login", "1").is_err());
    }

    #[test]
    fn set_rejects_invalid_display_mode() {
        let mut settings = Settings::default();
        assert!(settings.set("display_mode", "hologram").is_err());
    }

    #[test]
    fn get_reports_current_values() {
        let settings = Settings::default();
        assert_eq!(settings.get("poll_interval"), Some(Value::from(300)));
        assert_eq!(settings.get("display_mode"), Some(Value::from("icon_percent")));
        assert_eq!(settings.get("nope"), None);
    }
}
