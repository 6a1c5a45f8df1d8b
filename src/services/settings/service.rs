use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::Settings;

const SETTINGS_FILE: &str = "settings.toml";

/// `settings.toml` in the platform config directory, if one can be determined.
pub fn default_settings_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "auction-countdown", "auction-countdown")
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
}

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service backed by the platform config directory.
    pub fn from_default_location() -> Result<Self> {
        let path = default_settings_path().context("Failed to determine config directory")?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings. A missing file yields defaults.
    pub fn get(&self) -> Result<Settings> {
        if !self.path.exists() {
            log::debug!("No settings at {}, using defaults", self.path.display());
            return Ok(Settings::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let settings: Settings = toml::from_str(&data)
            .with_context(|| format!("Failed to parse settings from {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", self.path.display(), e))?;

        Ok(settings)
    }

    /// Update settings
    pub fn update(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, data)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))?;
        Ok(())
    }

    /// Reset settings to defaults
    pub fn reset(&self) -> Result<()> {
        self.update(&Settings::default())
    }
}
