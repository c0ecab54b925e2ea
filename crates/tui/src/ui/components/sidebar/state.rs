//! Sidebar state: presentation flags, navigation entries, and the reducers
//! behind every sidebar interaction.
//!
//! The two presentation flags are independent axes and are never conflated:
//! `collapsed` narrows the rail on wide viewports and is the only persisted
//! flag; `overlay_active` shows the sidebar as an overlay on compact
//! viewports and lives only in memory. Reducers are plain functions over
//! this state so they can be unit-tested without a terminal.

use navrail_types::SidebarPreference;
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::{Position, Rect};

/// Widest viewport (in logical width units) still treated as compact.
/// Fixed policy constant; at or below it the sidebar behaves as an overlay.
pub const COMPACT_WIDTH_MAX: u16 = 768;

/// A single entry in the navigation sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    /// Icon rendered in both the expanded and the collapsed rail.
    pub icon: String,
    /// Human-friendly label, shown only when expanded.
    pub label: String,
    /// Page path this entry links to. Entries without a target are never
    /// marked active and never navigate.
    pub href: Option<String>,
    /// Whether this entry matches the current page path.
    pub active: bool,
}

impl NavEntry {
    pub fn new(icon: impl Into<String>, label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            label: label.into(),
            href: Some(href.into()),
            active: false,
        }
    }

    /// An entry with no link target (e.g., a placeholder row).
    pub fn unlinked(icon: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            label: label.into(),
            href: None,
            active: false,
        }
    }
}

/// State for the navigation sidebar.
///
/// Owns the entries, both presentation flags, rat-focus flags for the
/// container and each entry, and the hit-test areas recorded at render time.
#[derive(Debug, Clone)]
pub struct SidebarState {
    /// Narrow icon-only rail on wide viewports. Mirrors the persisted
    /// preference after initialization.
    pub collapsed: bool,
    /// Sidebar shown as an overlay on compact viewports. Never persisted.
    pub overlay_active: bool,
    /// Entries displayed in the sidebar.
    pub entries: Vec<NavEntry>,
    /// Index of the most recently activated entry.
    pub selected_index: usize,
    /// Focus flag for the container in the global focus tree.
    pub container_focus: FocusFlag,
    /// Focus flags for each entry; kept in sync with `entries` length.
    pub entry_focus_flags: Vec<FocusFlag>,
    /// Last rendered area of the sidebar; used for hit testing and
    /// outside-press detection.
    pub last_area: Rect,
    /// Last computed per-entry row areas for hit testing.
    pub per_entry_areas: Vec<Rect>,
    /// Area of the collapse toggle control inside the rail.
    pub toggle_area: Rect,
    /// Area of the optional overlay toggle in the content header. `None`
    /// when the toggle is not on screen, which silently disables the
    /// dependent bindings.
    pub overlay_toggle_area: Option<Rect>,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl SidebarState {
    /// Creates sidebar state with the provided entries. Focus defaults to
    /// the first entry if available.
    pub fn new(entries: Vec<NavEntry>) -> Self {
        let mut state = Self {
            collapsed: false,
            overlay_active: false,
            entries,
            selected_index: 0,
            container_focus: FocusFlag::named("sidebar"),
            entry_focus_flags: Vec::new(),
            last_area: Rect::default(),
            per_entry_areas: Vec::new(),
            toggle_area: Rect::default(),
            overlay_toggle_area: None,
        };
        state.rebuild_entry_focus_flags();
        if let Some(first) = state.entry_focus_flags.first() {
            first.set(true);
        }
        state
    }

    /// Sidebar pre-populated with the application's sections.
    pub fn site_defaults() -> Self {
        Self::new(vec![
            NavEntry::new("⌂", "Dashboard", "/"),
            NavEntry::new("⚉", "Accounts", "/accounts"),
            NavEntry::new("▣", "Elections", "/elections"),
            NavEntry::new("Σ", "Results", "/results"),
            NavEntry::new("⚙", "Settings", "/settings"),
        ])
    }

    /// Applies a stored preference. Collapsed requires the exact stored
    /// literal; absence or anything else leaves the rail expanded.
    pub fn restore_preference(&mut self, stored: Option<SidebarPreference>) {
        self.collapsed = stored.is_some_and(SidebarPreference::is_collapsed);
    }

    /// Flips the collapse flag and returns the preference to persist.
    pub fn toggle_collapsed(&mut self) -> SidebarPreference {
        self.collapsed = !self.collapsed;
        if self.collapsed {
            SidebarPreference::Collapsed
        } else {
            SidebarPreference::Expanded
        }
    }

    /// Flips the compact-viewport overlay flag.
    pub fn toggle_overlay(&mut self) {
        self.overlay_active = !self.overlay_active;
    }

    /// Document-level press handler: dismisses the overlay when a press on a
    /// compact viewport lands neither inside the sidebar nor on the overlay
    /// toggle control.
    pub fn dismiss_overlay_for_press(&mut self, viewport_width: u16, press: Position) {
        if viewport_width > COMPACT_WIDTH_MAX || !self.overlay_active {
            return;
        }
        let inside_sidebar = self.last_area.contains(press);
        let on_overlay_toggle = self.overlay_toggle_area.is_some_and(|area| area.contains(press));
        if !inside_sidebar && !on_overlay_toggle {
            self.overlay_active = false;
        }
    }

    /// Resize handler: wide viewports never show the overlay.
    pub fn clear_overlay_on_resize(&mut self, viewport_width: u16) {
        if viewport_width > COMPACT_WIDTH_MAX {
            self.overlay_active = false;
        }
    }

    /// Clears all active marks. Called on navigation, before a fresh
    /// [`Self::mark_active_entries`] pass.
    pub fn reset_active_marks(&mut self) {
        for entry in &mut self.entries {
            entry.active = false;
        }
    }

    /// Marks the entries matching the current page path.
    ///
    /// Substring containment, not segment-aware: `/vote` also lights up for
    /// `/voters`. The root path is special-cased to an exact match so `/`
    /// does not mark on every page. Marking is additive; within a pass an
    /// already-set mark is never removed.
    pub fn mark_active_entries(&mut self, current_path: &str) {
        for entry in &mut self.entries {
            let Some(href) = entry.href.as_deref() else { continue };
            if href.is_empty() {
                continue;
            }
            let matches = if href == "/" {
                current_path == "/"
            } else {
                current_path.contains(href)
            };
            if matches {
                entry.active = true;
            }
        }
    }

    /// Updates the entry focus flags to match `entries` length, clamping the
    /// selection into range.
    pub fn rebuild_entry_focus_flags(&mut self) {
        let length = self.entries.len();
        self.entry_focus_flags = (0..length)
            .map(|i| FocusFlag::named(&format!("sidebar.entry.{i}")))
            .collect();
        if length == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= length {
            self.selected_index = length - 1;
        }
    }

    /// The focused entry, if any, with its index.
    pub fn focused_entry(&self) -> Option<(usize, NavEntry)> {
        let index = self.entry_focus_flags.iter().position(|flag| flag.get())?;
        self.entries.get(index).map(|entry| (index, entry.clone()))
    }

    /// The focus flag of the next (or previous) entry, wrapping at the ends.
    pub fn cycle_focus(&self, forward: bool) -> Option<FocusFlag> {
        let length = self.entry_focus_flags.len();
        if length == 0 {
            return None;
        }
        let current = self.entry_focus_flags.iter().position(|flag| flag.get())?;
        let next = if forward {
            (current + 1) % length
        } else {
            (current + length - 1) % length
        };
        self.entry_focus_flags.get(next).cloned()
    }

    /// Whether the container or any entry currently has focus.
    pub fn owns_focus(&self) -> bool {
        self.container_focus.get() || self.entry_focus_flags.iter().any(|flag| flag.get())
    }
}

impl HasFocus for SidebarState {
    /// Builds a focus subtree with each entry as a leaf under the container.
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        for flag in &self.entry_focus_flags {
            builder.leaf_widget(flag);
        }
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlay_state() -> SidebarState {
        let mut state = SidebarState::site_defaults();
        state.last_area = Rect::new(0, 0, 26, 20);
        state.overlay_toggle_area = Some(Rect::new(30, 0, 3, 1));
        state.overlay_active = true;
        state
    }

    fn active_labels(state: &SidebarState) -> Vec<&str> {
        state
            .entries
            .iter()
            .filter(|entry| entry.active)
            .map(|entry| entry.label.as_str())
            .collect()
    }

    #[test]
    fn restore_applies_collapsed_only_for_exact_preference() {
        let mut state = SidebarState::site_defaults();

        state.restore_preference(Some(SidebarPreference::Collapsed));
        assert!(state.collapsed);

        state.restore_preference(Some(SidebarPreference::Expanded));
        assert!(!state.collapsed);

        state.restore_preference(None);
        assert!(!state.collapsed);
    }

    #[test]
    fn toggle_parity_starting_from_expanded() {
        let mut state = SidebarState::site_defaults();
        for n in 1..=6u32 {
            let preference = state.toggle_collapsed();
            assert_eq!(state.collapsed, n % 2 == 1);
            assert_eq!(preference.is_collapsed(), state.collapsed);
        }
    }

    #[test]
    fn collapse_and_overlay_are_independent_axes() {
        let mut state = SidebarState::site_defaults();
        state.toggle_collapsed();
        assert!(state.collapsed);
        assert!(!state.overlay_active);

        state.toggle_overlay();
        assert!(state.collapsed);
        assert!(state.overlay_active);

        state.toggle_collapsed();
        assert!(!state.collapsed);
        assert!(state.overlay_active);
    }

    #[test]
    fn outside_press_dismisses_overlay_on_compact_viewport() {
        let mut state = overlay_state();
        state.dismiss_overlay_for_press(500, Position::new(50, 10));
        assert!(!state.overlay_active);
    }

    #[test]
    fn press_inside_sidebar_keeps_overlay() {
        let mut state = overlay_state();
        state.dismiss_overlay_for_press(500, Position::new(5, 5));
        assert!(state.overlay_active);
    }

    #[test]
    fn press_on_overlay_toggle_keeps_overlay() {
        let mut state = overlay_state();
        state.dismiss_overlay_for_press(500, Position::new(31, 0));
        assert!(state.overlay_active);
    }

    #[test]
    fn outside_press_is_ignored_on_wide_viewports() {
        let mut state = overlay_state();
        state.dismiss_overlay_for_press(1024, Position::new(50, 10));
        assert!(state.overlay_active);
    }

    #[test]
    fn resize_to_wide_clears_overlay() {
        let mut state = overlay_state();
        state.clear_overlay_on_resize(1024);
        assert!(!state.overlay_active);

        state.clear_overlay_on_resize(1024);
        assert!(!state.overlay_active);
    }

    #[test]
    fn resize_within_compact_keeps_overlay() {
        let mut state = overlay_state();
        state.clear_overlay_on_resize(768);
        assert!(state.overlay_active);
    }

    #[test]
    fn substring_match_marks_parent_section() {
        let mut state = SidebarState::site_defaults();
        state.mark_active_entries("/settings/profile");
        assert_eq!(active_labels(&state), vec!["Settings"]);
    }

    #[test]
    fn root_entry_requires_exact_root_path() {
        let mut state = SidebarState::site_defaults();
        state.mark_active_entries("/settings/profile");
        assert!(!state.entries[0].active);

        state.reset_active_marks();
        state.mark_active_entries("/");
        assert_eq!(active_labels(&state), vec!["Dashboard"]);
    }

    #[test]
    fn substring_match_is_not_segment_aware() {
        let mut state = SidebarState::new(vec![NavEntry::new("•", "A", "/a")]);
        state.mark_active_entries("/ab");
        assert!(state.entries[0].active);
    }

    #[test]
    fn entries_without_target_are_never_marked() {
        let mut state = SidebarState::new(vec![
            NavEntry::unlinked("•", "Divider"),
            NavEntry::new("•", "Empty", ""),
        ]);
        state.mark_active_entries("/anything");
        assert!(!state.entries[0].active);
        assert!(!state.entries[1].active);
    }

    #[test]
    fn marking_twice_is_idempotent_and_additive() {
        let mut state = SidebarState::site_defaults();
        state.mark_active_entries("/settings/profile");
        let first_pass = active_labels(&state)
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();

        state.mark_active_entries("/settings/profile");
        assert_eq!(active_labels(&state), first_pass);

        // Additive within a run: a second pass over a different path only
        // adds marks, it never removes the prior ones.
        state.mark_active_entries("/results");
        assert_eq!(active_labels(&state), vec!["Results", "Settings"]);
    }

    fn move_focus(state: &SidebarState, target: &FocusFlag) {
        for flag in &state.entry_focus_flags {
            flag.set(false);
        }
        target.set(true);
    }

    #[test]
    fn focus_cycles_through_entries_and_wraps() {
        let state = SidebarState::site_defaults();
        assert!(state.entry_focus_flags[0].get());

        let next = state.cycle_focus(true).unwrap();
        move_focus(&state, &next);
        assert!(state.entry_focus_flags[1].get());

        let previous = state.cycle_focus(false).unwrap();
        move_focus(&state, &previous);
        assert!(state.entry_focus_flags[0].get());

        let wrapped = state.cycle_focus(false).unwrap();
        move_focus(&state, &wrapped);
        assert!(state.entry_focus_flags[4].get());
    }
}
