//! User preference persistence for navrail.
//!
//! A small JSON-backed store recording the sidebar presentation preference.
//! The file lives in the standard configuration directory
//! (`~/.config/navrail/preferences.json` on most platforms). Reads happen
//! once at construction; every mutation writes the file back synchronously
//! before returning, so the on-disk state always reflects the last toggle.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use dirs_next::config_dir;
use navrail_types::SidebarPreference;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::expand_tilde;

/// Environment variable allowing callers to override the preferences file path.
pub const PREFERENCES_PATH_ENV: &str = "NAVRAIL_PREFERENCES_PATH";

/// Default filename for the JSON payload.
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// Error surfaced when reading or writing preferences fails.
#[derive(Debug, Error)]
pub enum PreferencesError {
    /// I/O failure (for example, permissions or a missing directory).
    #[error("preferences I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization or deserialization failure.
    #[error("preferences serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persisted preference values.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PreferencesPayload {
    /// Last chosen sidebar presentation: `"collapsed"` or `"expanded"`.
    /// Unknown literals deserialize to the expanded default.
    pub sidebar_state: Option<SidebarPreference>,
}

/// Thread-safe preferences store backed by a JSON file.
#[derive(Debug, Default)]
pub struct UserPreferences {
    path: PathBuf,
    payload: Mutex<PreferencesPayload>,
    persist_to_disk: bool,
}

impl UserPreferences {
    /// Opens the store at the default location (or the env-var override),
    /// loading any existing payload.
    pub fn new() -> Result<Self, PreferencesError> {
        Self::from_path(default_preferences_path())
    }

    /// Opens the store at an explicit path. Used by tests and by callers
    /// that manage their own configuration layout.
    pub fn from_path(path: PathBuf) -> Result<Self, PreferencesError> {
        let payload = load_payload(&path)?;
        Ok(Self {
            path,
            payload: Mutex::new(payload),
            persist_to_disk: true,
        })
    }

    /// Builds an in-memory store for environments where the configuration
    /// directory cannot be used. Mutations succeed but survive only for the
    /// lifetime of the process.
    pub fn ephemeral() -> Self {
        Self {
            path: PathBuf::new(),
            payload: Mutex::new(PreferencesPayload::default()),
            persist_to_disk: false,
        }
    }

    /// Path to the underlying JSON file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored sidebar preference, if one was ever saved.
    pub fn sidebar_state(&self) -> Option<SidebarPreference> {
        self.payload.lock().expect("preferences lock poisoned").sidebar_state
    }

    /// Persists a new sidebar preference, writing the file before returning.
    pub fn set_sidebar_state(&self, preference: SidebarPreference) -> Result<(), PreferencesError> {
        let mut payload = self.payload.lock().expect("preferences lock poisoned");
        payload.sidebar_state = Some(preference);
        if self.persist_to_disk {
            self.write_locked(&payload)?;
        }
        Ok(())
    }

    fn write_locked(&self, payload: &PreferencesPayload) -> Result<(), PreferencesError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(payload)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

fn default_preferences_path() -> PathBuf {
    if let Ok(path) = env::var(PREFERENCES_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return expand_tilde(trimmed);
        }
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("navrail")
        .join(PREFERENCES_FILE_NAME)
}

fn load_payload(path: &Path) -> Result<PreferencesPayload, PreferencesError> {
    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(payload) => Ok(payload),
            Err(error) => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "Failed to parse preferences file; using defaults"
                );
                Ok(PreferencesPayload::default())
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(PreferencesPayload::default()),
        Err(error) => Err(PreferencesError::Io(error)),
    }
}
