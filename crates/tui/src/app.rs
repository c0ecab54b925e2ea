//! Application state and logic for the navrail TUI.
//!
//! The [`App`] struct is the central state container: it owns the sidebar
//! state, the current page path, the viewport size, and the shared context
//! (preference store, theme). Event handlers on components mutate this state
//! and report [`Effect`]s for the runtime to execute.

use navrail_types::{Effect, Msg, SidebarPreference};
use navrail_util::UserPreferences;
use rat_focus::{Focus, FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use tracing::{info, warn};

use crate::ui::components::sidebar::SidebarState;
use crate::ui::layout;
use crate::ui::theme::Theme;

/// Cross-cutting shared context owned by the App.
///
/// Holds runtime-wide objects like the preference store and theme. This
/// avoids threading multiple references through components and helps reduce
/// borrow complexity.
#[derive(Debug)]
pub struct SharedCtx {
    /// Persistent user preferences (sidebar collapse state).
    pub prefs: UserPreferences,
    /// Color roles and style builders shared by all components.
    pub theme: Theme,
    /// Global debug flag (from env).
    pub debug_enabled: bool,
}

impl SharedCtx {
    pub fn new(prefs: UserPreferences) -> Self {
        let debug_enabled = std::env::var("DEBUG")
            .map(|v| !v.is_empty() && v != "0" && v.to_lowercase() != "false")
            .unwrap_or(false);
        Self {
            prefs,
            theme: Theme::default(),
            debug_enabled,
        }
    }
}

/// The main application state.
#[derive(Debug)]
pub struct App {
    /// Shared context (preferences, theme).
    pub ctx: SharedCtx,
    /// Sidebar presentation state and navigation entries.
    pub sidebar: SidebarState,
    /// Path of the page currently displayed; drives active-entry marking.
    pub current_path: String,
    /// Viewport width in logical units (terminal columns scaled by
    /// [`layout::CELL_LOGICAL_WIDTH`]).
    pub viewport_width: u16,
    /// Global focus tree, rebuilt before each render.
    pub focus: Focus,
}

impl App {
    pub fn new(prefs: UserPreferences, start_path: impl Into<String>) -> Self {
        let mut app = Self {
            ctx: SharedCtx::new(prefs),
            sidebar: SidebarState::site_defaults(),
            current_path: start_path.into(),
            viewport_width: 0,
            focus: Focus::default(),
        };
        app.focus = FocusBuilder::build_for(&app);
        app
    }

    /// One-time initialization, run before the event loop dispatches input.
    ///
    /// Restores the persisted collapse preference (collapsed only when the
    /// stored value is exactly `"collapsed"`), computes the active
    /// navigation marks for the current path, and emits a single diagnostic
    /// line for manual verification.
    pub fn init(&mut self) {
        let stored = self.ctx.prefs.sidebar_state();
        self.sidebar.restore_preference(stored);
        self.sidebar.reset_active_marks();
        self.sidebar.mark_active_entries(&self.current_path);
        info!(path = %self.current_path, "sidebar controller initialized");
    }

    /// Processes an application-level message.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::Resize(columns, _rows) => {
                self.viewport_width = layout::logical_width(*columns);
                // Wide viewports never show the overlay.
                self.sidebar.clear_overlay_on_resize(self.viewport_width);
            }
            Msg::Tick => {}
        }
        Vec::new()
    }

    /// Whether the viewport is at or below the compact breakpoint.
    pub fn is_compact(&self) -> bool {
        self.viewport_width <= crate::ui::components::sidebar::COMPACT_WIDTH_MAX
    }

    /// Navigates to `path`: page-load equivalent. Active marks are cleared
    /// and recomputed against the new path.
    pub fn navigate(&mut self, path: String) {
        self.current_path = path;
        self.sidebar.reset_active_marks();
        self.sidebar.mark_active_entries(&self.current_path);
    }

    /// Flips the collapse flag and writes the new preference to the store
    /// before returning, so persisted state always reflects the flag.
    pub fn toggle_sidebar_collapsed(&mut self) -> SidebarPreference {
        let preference = self.sidebar.toggle_collapsed();
        if let Err(error) = self.ctx.prefs.set_sidebar_state(preference) {
            warn!(error = %error, "Failed to persist sidebar state");
        }
        preference
    }

    /// Flips the overlay flag, but only when the optional overlay toggle is
    /// present on screen. The overlay flag is never persisted.
    pub fn toggle_sidebar_overlay(&mut self) {
        if self.sidebar.overlay_toggle_area.is_some() {
            self.sidebar.toggle_overlay();
        }
    }
}

impl HasFocus for App {
    /// The focus tree is the sidebar's subtree; the content pane has no
    /// focusable children.
    fn build(&self, builder: &mut FocusBuilder) {
        self.sidebar.build(builder);
    }

    fn focus(&self) -> FocusFlag {
        self.sidebar.container_focus.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}
