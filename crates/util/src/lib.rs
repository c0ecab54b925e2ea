//! Utility functions and helpers for navrail.

use std::path::PathBuf;

use dirs_next::home_dir;

pub mod preferences;

pub use preferences::{PreferencesError, UserPreferences};

/// Expands a leading `~` or `~/` to the user's home directory.
///
/// Unknown or missing home directories leave the path unchanged.
pub fn expand_tilde(path: &str) -> PathBuf {
    let trimmed = path.trim();
    if trimmed == "~" {
        return home_dir().unwrap_or_else(|| PathBuf::from("~"));
    }
    if let Some(rest) = trimmed.strip_prefix("~/").or_else(|| trimmed.strip_prefix("~\\")) {
        return home_dir().unwrap_or_else(|| PathBuf::from("~")).join(rest);
    }
    PathBuf::from(trimmed)
}
