//! Layout system for the navrail TUI.
//!
//! Splits the screen into the navigation rail, the content pane, and a
//! one-line hint bar, and owns the terminal-to-logical width mapping used by
//! the compact-viewport breakpoint.

use ratatui::prelude::*;

use crate::app::App;

/// Logical width units per terminal cell. The compact breakpoint
/// ([`crate::ui::components::sidebar::COMPACT_WIDTH_MAX`], 768 units) is
/// expressed in conventional layout units; terminal columns are scaled by
/// this factor before comparison, so a 96-column terminal sits right at the
/// breakpoint.
pub const CELL_LOGICAL_WIDTH: u16 = 8;

/// Rail width when expanded (icon + label).
pub const EXPANDED_RAIL_WIDTH: u16 = 26;

/// Rail width when collapsed (icon only).
pub const COLLAPSED_RAIL_WIDTH: u16 = 6;

/// Converts terminal columns to logical width units.
pub fn logical_width(columns: u16) -> u16 {
    columns.saturating_mul(CELL_LOGICAL_WIDTH)
}

pub(super) struct MainLayout;

impl MainLayout {
    /// Creates the main layout: `[rail, content, hints]`.
    ///
    /// On wide viewports the rail takes a fixed column whose width follows
    /// the collapse flag. On compact viewports the rail column has zero
    /// width; the sidebar is only visible as an overlay
    /// ([`Self::overlay_rect`]) while its overlay flag is set.
    pub fn responsive_layout(size: Rect, app: &App) -> Vec<Rect> {
        let vertical = Layout::vertical([
            Constraint::Min(1),    // rail + content
            Constraint::Length(1), // hint bar
        ])
        .split(size);

        let rail_width = if app.is_compact() {
            0
        } else if app.sidebar.collapsed {
            COLLAPSED_RAIL_WIDTH
        } else {
            EXPANDED_RAIL_WIDTH
        };

        let columns = Layout::horizontal([Constraint::Length(rail_width), Constraint::Min(1)]).split(vertical[0]);

        vec![columns[0], columns[1], vertical[1]]
    }

    /// Area the sidebar covers when shown as a compact-viewport overlay.
    pub fn overlay_rect(size: Rect) -> Rect {
        Rect::new(
            size.x,
            size.y,
            EXPANDED_RAIL_WIDTH.min(size.width),
            size.height.saturating_sub(1),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navrail_types::Msg;
    use navrail_util::UserPreferences;

    fn wide_app() -> App {
        let mut app = App::new(UserPreferences::ephemeral(), "/");
        app.update(&Msg::Resize(160, 40)); // 1280 logical units
        app
    }

    #[test]
    fn rail_width_follows_collapse_flag() {
        let mut app = wide_app();
        let size = Rect::new(0, 0, 160, 40);

        let chunks = MainLayout::responsive_layout(size, &app);
        assert_eq!(chunks[0].width, EXPANDED_RAIL_WIDTH);

        app.sidebar.collapsed = true;
        let chunks = MainLayout::responsive_layout(size, &app);
        assert_eq!(chunks[0].width, COLLAPSED_RAIL_WIDTH);
    }

    #[test]
    fn compact_viewport_hides_the_rail_column() {
        let mut app = wide_app();
        app.update(&Msg::Resize(62, 24)); // 496 logical units
        let chunks = MainLayout::responsive_layout(Rect::new(0, 0, 62, 24), &app);
        assert_eq!(chunks[0].width, 0);
        assert_eq!(chunks[1].width, 62);
    }

    #[test]
    fn hint_bar_takes_the_last_row() {
        let app = wide_app();
        let chunks = MainLayout::responsive_layout(Rect::new(0, 0, 160, 40), &app);
        assert_eq!(chunks[2].height, 1);
        assert_eq!(chunks[2].y, 39);
    }
}
