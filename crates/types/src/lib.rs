//! Shared type definitions for the navrail workspace.
//!
//! This crate holds the types that cross crate boundaries: the persisted
//! sidebar preference, application messages, and the side effects components
//! report back to the runtime.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Persisted sidebar presentation preference.
///
/// Stored on disk as the exact literals `"collapsed"` and `"expanded"`.
/// Deserialization is deliberately lenient: only the literal `"collapsed"`
/// produces [`SidebarPreference::Collapsed`]; every other string falls back
/// to the expanded default, so an unrecognized or hand-edited value never
/// fails preference loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarPreference {
    /// Sidebar shown at full width. The default when nothing was stored.
    #[default]
    Expanded,
    /// Sidebar narrowed to its icon-only rail.
    Collapsed,
}

impl SidebarPreference {
    /// The literal written to the preference store.
    pub fn as_str(self) -> &'static str {
        match self {
            SidebarPreference::Expanded => "expanded",
            SidebarPreference::Collapsed => "collapsed",
        }
    }

    /// Interprets a stored value. Collapsed requires the exact literal;
    /// absence and anything else mean expanded.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("collapsed") => SidebarPreference::Collapsed,
            _ => SidebarPreference::Expanded,
        }
    }

    /// The opposite preference.
    pub fn toggled(self) -> Self {
        match self {
            SidebarPreference::Expanded => SidebarPreference::Collapsed,
            SidebarPreference::Collapsed => SidebarPreference::Expanded,
        }
    }

    pub fn is_collapsed(self) -> bool {
        matches!(self, SidebarPreference::Collapsed)
    }
}

impl Serialize for SidebarPreference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SidebarPreference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(SidebarPreference::from_stored(Some(&raw)))
    }
}

/// Application-level messages delivered to components by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Periodic UI tick.
    Tick,
    /// Terminal resized to (width, height).
    Resize(u16, u16),
}

/// Side effects reported by components for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Navigate to the given page path and recompute active nav marks.
    Navigate(String),
    /// Shut the application down cleanly.
    Exit,
}
