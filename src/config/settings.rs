//! Generator settings
//!
//! Defaults for the command line, persisted as JSON in the user's config
//! directory.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::Archetype;
use crate::generator::{GenerationRequest, DEFAULT_NAME};

/// Current settings version for compatibility
const SETTINGS_VERSION: u32 = 1;

/// Point budget used when none is configured
const DEFAULT_POINTS: i32 = 100;

/// Errors raised while writing settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// User defaults for generation runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Version for compatibility checking
    pub version: u32,
    pub default_points: i32,
    pub default_tech_level: i32,
    pub allow_super: bool,
    pub allow_supernatural: bool,
    pub default_archetype: Archetype,
    pub default_name: String,
    /// Directory with catalog overrides, if any
    pub catalog_dir: Option<PathBuf>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            default_points: DEFAULT_POINTS,
            default_tech_level: 3,
            allow_super: false,
            allow_supernatural: false,
            default_archetype: Archetype::Generalist,
            default_name: DEFAULT_NAME.to_string(),
            catalog_dir: None,
        }
    }
}

impl GeneratorSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request built purely from these defaults
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.default_points, self.default_tech_level)
            .with_name(self.default_name.clone())
            .with_archetype(self.default_archetype)
            .with_content(self.allow_super, self.allow_supernatural)
    }
}

// ============================================================================
// Settings Storage
// ============================================================================

/// Get the settings file path
pub fn settings_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "pointbuy", "Pointbuy") {
        let mut path = proj_dirs.config_dir().to_path_buf();
        path.push("settings.json");
        path
    } else {
        PathBuf::from("./settings.json")
    }
}

/// Load settings from the default location (or fall back to defaults)
pub fn load_settings() -> GeneratorSettings {
    load_settings_from(&settings_path())
}

/// Load settings from `path` (or fall back to defaults)
pub fn load_settings_from(path: &Path) -> GeneratorSettings {
    if path.exists() {
        match fs::read_to_string(path) {
            Ok(data) => match serde_json::from_str::<GeneratorSettings>(&data) {
                Ok(mut settings) => {
                    if settings.version != SETTINGS_VERSION {
                        log::warn!(
                            "Settings version {} differs from {}, reading anyway",
                            settings.version,
                            SETTINGS_VERSION
                        );
                    }
                    if settings.default_points <= 0 {
                        log::warn!(
                            "Stored point budget {} is not positive, using {}",
                            settings.default_points,
                            DEFAULT_POINTS
                        );
                        settings.default_points = DEFAULT_POINTS;
                    }
                    log::info!("Settings loaded from {:?}", path);
                    return settings;
                }
                Err(e) => {
                    log::warn!("Failed to parse settings: {}, using defaults", e);
                }
            },
            Err(e) => {
                log::warn!("Failed to read settings: {}, using defaults", e);
            }
        }
    }

    GeneratorSettings::new()
}

/// Save settings to the default location
pub fn save_settings(settings: &GeneratorSettings) -> Result<(), SettingsError> {
    save_settings_to(settings, &settings_path())
}

/// Save settings to `path`
pub fn save_settings_to(settings: &GeneratorSettings, path: &Path) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;

    log::info!("Settings saved to {:?}", path);
    Ok(())
}
