//! # Navrail TUI Library
//!
//! Terminal user interface for navrail: a collapsible navigation rail with
//! persisted collapse state, a compact-viewport overlay mode, and
//! active-entry highlighting driven by the current page path.
//!
//! ## Architecture
//!
//! The UI follows a component-based architecture. Each surface (the sidebar
//! rail, the content pane) is a component that handles its own events and
//! rendering; the main view routes input and composes the layout, and the
//! runtime owns the terminal lifecycle and the event loop.

mod app;
mod ui;

pub use app::App;

use anyhow::Result;
use navrail_util::UserPreferences;

/// Runs the main TUI application loop.
///
/// Sets up the terminal, initializes the sidebar controller (restoring the
/// persisted collapse preference and marking active navigation entries for
/// `start_path`), and runs the event loop until the user quits.
pub async fn run(preferences: UserPreferences, start_path: String) -> Result<()> {
    ui::runtime::run_app(preferences, start_path).await
}
