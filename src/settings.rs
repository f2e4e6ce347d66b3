//! Editor settings
//!
//! Settings for the editor itself (not the style being edited), stored as
//! JSON under the platform config directory. Missing fields take defaults;
//! out-of-range values are corrected with a warning.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, warn, Level};

use crate::constants::{inspector, viewport};
use crate::inspector::{InspectorManager, Size};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Preview viewport used for window placement and clamping
    pub viewport_width: i32,
    pub viewport_height: i32,

    /// Inspector window size used for clamping
    pub inspector_width: i32,
    pub inspector_height: i32,

    /// `trace|debug|info|warn|error`; `LOG_LEVEL` and `--log-level` win over this
    pub log_level: Option<String>,

    /// Last imported or exported style.conf
    pub last_file: Option<PathBuf>,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            viewport_width: viewport::DEFAULT_WIDTH,
            viewport_height: viewport::DEFAULT_HEIGHT,
            inspector_width: inspector::WINDOW_WIDTH,
            inspector_height: inspector::WINDOW_HEIGHT,
            log_level: None,
            last_file: None,
        }
    }
}

impl EditorSettings {
    pub fn config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(crate::constants::config::APP_DIR);
        path.push(crate::constants::config::FILENAME);
        path
    }

    /// Load from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load from `path`. A missing file gives defaults; a malformed one is an
    /// error and is left untouched on disk.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "No settings file, using defaults");
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let mut settings: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings file {}", path.display()))?;
        settings.validate_and_clamp();
        Ok(settings)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(self).context("Failed to serialize settings to JSON")?;
        fs::write(path, contents).with_context(|| format!("Failed to write settings file to {}", path.display()))?;
        info!(path = %path.display(), "Saved editor settings");
        Ok(())
    }

    /// Bring every value into a usable range
    fn validate_and_clamp(&mut self) {
        let defaults = Self::default();
        clamp_dimension("viewport_width", &mut self.viewport_width, defaults.viewport_width);
        clamp_dimension("viewport_height", &mut self.viewport_height, defaults.viewport_height);
        clamp_dimension("inspector_width", &mut self.inspector_width, defaults.inspector_width);
        clamp_dimension("inspector_height", &mut self.inspector_height, defaults.inspector_height);

        if let Some(level) = &self.log_level
            && Level::from_str(level).is_err()
        {
            warn!(log_level = %level, "Unrecognized log_level, ignoring");
            self.log_level = None;
        }
    }

    pub fn viewport(&self) -> Size {
        Size::new(self.viewport_width, self.viewport_height)
    }

    pub fn inspector_size(&self) -> Size {
        Size::new(self.inspector_width, self.inspector_height)
    }

    /// Window manager sized from these settings
    pub fn inspector_manager(&self) -> InspectorManager {
        InspectorManager::with_window_size(self.viewport(), self.inspector_size())
    }

    pub fn level(&self) -> Option<Level> {
        self.log_level.as_deref().and_then(|level| Level::from_str(level).ok())
    }
}

fn clamp_dimension(name: &str, value: &mut i32, default: i32) {
    use crate::constants::validation::*;

    if *value < MIN_DIMENSION {
        warn!(field = name, value = *value, min = MIN_DIMENSION, using = default, "Dimension below minimum, using default");
        *value = default;
    } else if *value > MAX_DIMENSION {
        warn!(field = name, value = *value, max = MAX_DIMENSION, "Dimension exceeds maximum, clamping");
        *value = MAX_DIMENSION;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = EditorSettings::load_from(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, EditorSettings::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = EditorSettings {
            viewport_width: 1280,
            viewport_height: 720,
            log_level: Some("debug".to_string()),
            last_file: Some(PathBuf::from("/tmp/style.conf")),
            ..Default::default()
        };
        settings.save_to(&path).unwrap();
        assert_eq!(EditorSettings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn test_partial_file_takes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "viewport_width": 1600 }"#).unwrap();
        let settings = EditorSettings::load_from(&path).unwrap();
        assert_eq!(settings.viewport_width, 1600);
        assert_eq!(settings.viewport_height, viewport::DEFAULT_HEIGHT);
        assert_eq!(settings.inspector_width, inspector::WINDOW_WIDTH);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{ "viewport_width": 5, "viewport_height": 99999, "log_level": "loud" }"#,
        )
        .unwrap();
        let settings = EditorSettings::load_from(&path).unwrap();
        assert_eq!(settings.viewport_width, viewport::DEFAULT_WIDTH);
        assert_eq!(settings.viewport_height, 16384);
        assert_eq!(settings.log_level, None);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        let err = EditorSettings::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse settings file"));
        // The broken file is preserved
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn test_level_and_manager() {
        let settings = EditorSettings {
            viewport_width: 800,
            viewport_height: 600,
            log_level: Some("WARN".to_string()),
            ..Default::default()
        };
        assert_eq!(settings.level(), Some(Level::WARN));
        let manager = settings.inspector_manager();
        assert_eq!(manager.viewport(), Size::new(800, 600));
        assert_eq!(manager.window_size(), Size::new(380, 480));
    }

    #[test]
    fn test_config_path_ends_with_app_file() {
        let path = EditorSettings::config_path();
        assert!(path.ends_with("style-conf-editor/settings.json"));
    }
}
