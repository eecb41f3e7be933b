//! User settings, persisted as TOML.
//!
//! Settings live in the platform configuration folder:
//! - macOS: ~/Library/Application Support/org.MedTrack.MedTrack/
//! - Windows: %APPDATA%/MedTrack/MedTrack/config/
//! - Linux: ~/.config/medtrack/

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

const APP_QUALIFIER: &str = "org";
const APP_ORG: &str = "MedTrack";
const APP_NAME: &str = "MedTrack";
const CONFIG_FILENAME: &str = "settings.toml";
/// Used when no platform data folder can be determined.
const FALLBACK_DATA_DIR: &str = "medtrack-data";

/// Simulated payment processing time for an upgrade.
pub const DEFAULT_PAYMENT_DELAY_MS: u64 = 1500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Folder holding the JSON snapshots. `None` means the platform data folder.
    pub data_dir: Option<PathBuf>,
    pub payment_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: None,
            payment_delay_ms: DEFAULT_PAYMENT_DELAY_MS,
        }
    }
}

impl Settings {
    /// Load settings from `path`.
    ///
    /// Returns default settings if the file is missing or cannot be parsed.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(settings) => {
                    tracing::debug!(path = %path.display(), "loaded settings");
                    settings
                }
                Err(e) => {
                    tracing::warn!("Failed to parse settings file: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Failed to read settings file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to `path`, creating the parent folder if needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("create config directory")?;
        }
        let content = toml::to_string_pretty(self).context("serialize settings")?;
        fs::write(path, content).with_context(|| format!("write {}", path.display()))?;
        tracing::info!(path = %path.display(), "saved settings");
        Ok(())
    }

    /// Default settings file location.
    pub fn config_path() -> PathBuf {
        project_dirs()
            .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME))
    }

    /// Data folder to use: the command-line override, then the configured
    /// folder, then the platform data folder.
    pub fn resolve_data_dir(&self, cli_override: Option<&Path>) -> PathBuf {
        if let Some(dir) = cli_override {
            return dir.to_path_buf();
        }
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        project_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR))
    }

    pub fn payment_delay(&self) -> Duration {
        Duration::from_millis(self.payment_delay_ms)
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
}
