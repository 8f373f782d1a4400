use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use wayfarer_core::map::DEFAULT_ZOOM;
use wayfarer_core::AddedDestinationPolicy;

// ---------------------------------------------------------------------------
// Application preferences
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppPreferences {
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
    /// Initial zoom level of the detail map.
    #[serde(default = "default_map_zoom")]
    pub map_zoom: f32,
    /// Append destinations submitted from the add form to the list.
    /// When false they are built and dropped.
    #[serde(default = "default_true")]
    pub keep_added_destinations: bool,
    #[serde(default = "default_true")]
    pub dark_mode: bool,
}

fn default_window_width() -> f32 {
    480.0
}
fn default_window_height() -> f32 {
    800.0
}
fn default_map_zoom() -> f32 {
    DEFAULT_ZOOM
}
fn default_true() -> bool {
    true
}

impl Default for AppPreferences {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            map_zoom: default_map_zoom(),
            keep_added_destinations: true,
            dark_mode: true,
        }
    }
}

impl AppPreferences {
    /// Load preferences from next to the executable, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    /// Persist preferences next to the executable.
    pub fn save(&self) {
        self.save_to(&config_path());
    }

    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(json) => match serde_json::from_str::<AppPreferences>(&json) {
                    Ok(prefs) => {
                        info!("Loaded preferences from {}", path.display());
                        return prefs;
                    }
                    Err(e) => {
                        error!("Failed to parse preferences: {e}");
                    }
                },
                Err(e) => {
                    error!("Failed to read preferences file: {e}");
                }
            }
        } else {
            debug!("No preferences file at {}", path.display());
        }
        Self::default()
    }

    pub fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                error!("Failed to create config directory: {e}");
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, &json) {
                    error!("Failed to write preferences: {e}");
                } else {
                    debug!("Saved preferences");
                }
            }
            Err(e) => error!("Failed to serialize preferences: {e}"),
        }
    }

    pub fn added_destination_policy(&self) -> AddedDestinationPolicy {
        if self.keep_added_destinations {
            AddedDestinationPolicy::Append
        } else {
            AddedDestinationPolicy::Discard
        }
    }
}

fn config_path() -> PathBuf {
    crate::app_dir::exe_directory().join("preferences.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let prefs: AppPreferences = serde_json::from_str(r#"{"map_zoom": 12.0}"#).unwrap();
        assert_eq!(prefs.map_zoom, 12.0);
        assert_eq!(prefs.window_width, 480.0);
        assert!(prefs.keep_added_destinations);
    }

    #[test]
    fn policy_follows_flag() {
        let mut prefs = AppPreferences::default();
        assert_eq!(prefs.added_destination_policy(), AddedDestinationPolicy::Append);
        prefs.keep_added_destinations = false;
        assert_eq!(prefs.added_destination_policy(), AddedDestinationPolicy::Discard);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");
        let prefs = AppPreferences {
            map_zoom: 7.5,
            dark_mode: false,
            ..AppPreferences::default()
        };
        prefs.save_to(&path);
        assert_eq!(AppPreferences::load_from(&path), prefs);
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(AppPreferences::load_from(&path), AppPreferences::default());
    }
}
