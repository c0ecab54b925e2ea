//! Main view: composes the sidebar and content components, routes input,
//! and applies the document-level overlay dismissal rule.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use navrail_types::{Effect, Msg};
use ratatui::{
    layout::Position,
    prelude::*,
    widgets::{Clear, Paragraph},
};

use crate::app::App;
use crate::ui::components::{Component, ContentComponent, SidebarComponent};
use crate::ui::layout::MainLayout;

#[derive(Debug, Default)]
pub struct MainView {
    pub sidebar_view: SidebarComponent,
    pub content_view: ContentComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self {
            sidebar_view: SidebarComponent::new(),
            content_view: ContentComponent,
        }
    }

    /// One-time startup sequence, run before the event loop dispatches any
    /// input: restores the persisted collapse preference, computes active
    /// navigation marks, and logs the diagnostic line. Interaction bindings
    /// are the component handlers themselves, wired by construction.
    pub fn init(&mut self, app: &mut App) -> Result<()> {
        app.init();
        Ok(())
    }

    pub fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        app.update(&msg)
    }

    pub fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        // Global bindings first.
        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE) => return vec![Effect::Exit],
            (KeyCode::Char('b'), KeyModifiers::CONTROL) => {
                app.toggle_sidebar_collapsed();
                return Vec::new();
            }
            (KeyCode::Char('o'), KeyModifiers::CONTROL) => {
                // No-op unless the overlay toggle is on screen.
                app.toggle_sidebar_overlay();
                return Vec::new();
            }
            (KeyCode::Tab, _) => {
                app.focus.next();
                return Vec::new();
            }
            (KeyCode::BackTab, _) => {
                app.focus.prev();
                return Vec::new();
            }
            _ => {}
        }

        self.sidebar_view.handle_key_events(app, key)
    }

    pub fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let press = Position::new(mouse.column, mouse.row);
        let mut effects = self.sidebar_view.handle_mouse_events(app, mouse);

        // The sidebar draws on top of the content pane when shown as an
        // overlay; a press inside it must not fall through to controls
        // underneath (the overlay toggle shares cells with the rail).
        if !app.sidebar.last_area.contains(press) {
            effects.extend(self.content_view.handle_mouse_events(app, mouse));
        }

        // Document-level rule: a compact-viewport press outside both the
        // sidebar and the overlay toggle dismisses the overlay. The reducer
        // carries the inside/on-toggle guards, so ordering against the
        // component handlers does not matter.
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            app.sidebar.dismiss_overlay_for_press(app.viewport_width, press);
        }
        effects
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let chunks = MainLayout::responsive_layout(area, app);

        self.content_view.render(frame, chunks[1], app);

        if app.is_compact() && app.sidebar.overlay_active {
            let overlay = MainLayout::overlay_rect(area);
            frame.render_widget(Clear, overlay);
            self.sidebar_view.render(frame, overlay, app);
        } else {
            // Zero-width on compact viewports; the component then clears its
            // hit-test areas.
            self.sidebar_view.render(frame, chunks[0], app);
        }

        let mut spans = self.sidebar_view.get_hint_spans(app);
        spans.extend(self.content_view.get_hint_spans(app));
        frame.render_widget(Paragraph::new(Line::from(spans)), chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navrail_types::SidebarPreference;
    use navrail_util::UserPreferences;
    use ratatui::{Terminal, backend::TestBackend};

    fn compact_app_with_overlay() -> App {
        let mut app = App::new(UserPreferences::ephemeral(), "/");
        app.update(&Msg::Resize(62, 24)); // 496 logical units
        app.sidebar.last_area = Rect::new(0, 0, 26, 22);
        app.sidebar.overlay_toggle_area = Some(Rect::new(30, 0, 3, 1));
        app.sidebar.overlay_active = true;
        app
    }

    fn press(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn outside_press_dismisses_overlay_through_the_main_view() {
        let mut app = compact_app_with_overlay();
        let mut view = MainView::new();

        view.handle_mouse_events(&mut app, press(50, 10));
        assert!(!app.sidebar.overlay_active);
    }

    #[test]
    fn press_inside_sidebar_keeps_overlay_through_the_main_view() {
        let mut app = compact_app_with_overlay();
        let mut view = MainView::new();

        view.handle_mouse_events(&mut app, press(5, 10));
        assert!(app.sidebar.overlay_active);
    }

    #[test]
    fn overlay_toggle_press_closes_without_immediate_reopen() {
        let mut app = compact_app_with_overlay();
        let mut view = MainView::new();

        // Press on the toggle: the content handler flips the overlay off and
        // the document-level rule must not treat it as an outside press.
        view.handle_mouse_events(&mut app, press(31, 0));
        assert!(!app.sidebar.overlay_active);

        // Pressing it again reopens.
        view.handle_mouse_events(&mut app, press(31, 0));
        assert!(app.sidebar.overlay_active);
    }

    #[test]
    fn press_inside_rendered_overlay_hits_only_the_sidebar() {
        let mut app = App::new(UserPreferences::ephemeral(), "/");
        app.update(&Msg::Resize(62, 24)); // 496 logical units
        let mut view = MainView::new();
        let mut terminal = Terminal::new(TestBackend::new(62, 24)).unwrap();

        // First frame: overlay closed, the content header records the
        // overlay toggle. Pressing it opens the overlay.
        terminal
            .draw(|frame| view.render(frame, frame.area(), &mut app))
            .unwrap();
        let toggle = app.sidebar.overlay_toggle_area.unwrap();
        view.handle_mouse_events(&mut app, press(toggle.x, toggle.y));
        assert!(app.sidebar.overlay_active);

        // Second frame: the overlay rail now covers the toggle's cells.
        terminal
            .draw(|frame| view.render(frame, frame.area(), &mut app))
            .unwrap();
        let inside = Position::new(2, 1);
        assert!(app.sidebar.last_area.contains(inside));
        assert!(app.sidebar.overlay_toggle_area.unwrap().contains(inside));

        // A press on those cells reaches only the topmost control: the
        // rail's collapse toggle flips and persists, and the overlay stays.
        view.handle_mouse_events(&mut app, press(inside.x, inside.y));
        assert!(app.sidebar.overlay_active);
        assert!(app.sidebar.collapsed);
        assert_eq!(app.ctx.prefs.sidebar_state(), Some(SidebarPreference::Collapsed));
    }

    #[test]
    fn q_requests_exit_and_ctrl_b_toggles_collapse() {
        let mut app = compact_app_with_overlay();
        let mut view = MainView::new();

        let effects = view.handle_key_events(&mut app, KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert_eq!(effects, vec![Effect::Exit]);

        view.handle_key_events(&mut app, KeyEvent::new(KeyCode::Char('b'), KeyModifiers::CONTROL));
        assert!(app.sidebar.collapsed);
    }
}
