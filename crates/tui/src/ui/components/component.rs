//! Component system for the navrail TUI.
//!
//! Components are self-contained UI elements that handle their own state,
//! events, and rendering. They mutate localized state on [`App`] and report
//! side effects back to the runtime as [`Effect`]s rather than performing
//! navigation or shutdown themselves.

use crossterm::event::{KeyEvent, MouseEvent};
use navrail_types::Effect;
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::text::Span;

use crate::app::App;

/// A trait representing a UI component with its own behavior.
///
/// All handlers default to no-ops so components implement only the events
/// they care about. `render` is the only required method; it should be
/// side-effect free except for frame drawing and recording hit-test areas.
pub(crate) trait Component {
    /// Handle key events. Components should only consume keys that are
    /// meaningful to them, typically gated on their focus flags.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events, using the hit-test areas recorded at render time.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Styled key-binding hints for the bottom hint bar.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }
}

/// Returns the index of the target rect containing the mouse position, if
/// the position falls inside the container at all.
pub(crate) fn find_target_index_by_mouse_position(container: &Rect, targets: &[Rect], x: u16, y: u16) -> Option<usize> {
    let position = Position::new(x, y);
    if !container.contains(position) {
        return None;
    }
    targets.iter().position(|target| target.contains(position))
}

#[cfg(test)]
mod tests {
    use super::find_target_index_by_mouse_position;
    use ratatui::layout::Rect;

    #[test]
    fn hit_testing_respects_container_and_rows() {
        let container = Rect::new(0, 0, 20, 10);
        let rows = vec![Rect::new(1, 1, 18, 1), Rect::new(1, 2, 18, 1)];

        assert_eq!(find_target_index_by_mouse_position(&container, &rows, 5, 2), Some(1));
        assert_eq!(find_target_index_by_mouse_position(&container, &rows, 5, 5), None);
        // Outside the container entirely.
        assert_eq!(find_target_index_by_mouse_position(&container, &rows, 30, 2), None);
    }
}
