//! Content pane: the page body and, on compact viewports, the overlay
//! toggle control for the sidebar.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use navrail_types::Effect;
use ratatui::{
    Frame,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::ui::components::component::Component;

/// The main content area.
///
/// On compact viewports it renders the overlay toggle ("☰") in its header
/// and records the toggle's area on the sidebar state; on wide viewports the
/// recorded area is `None`, which disables the overlay bindings.
#[derive(Debug, Default)]
pub struct ContentComponent;

impl Component for ContentComponent {
    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let press = Position::new(mouse.column, mouse.row);
        if app
            .sidebar
            .overlay_toggle_area
            .is_some_and(|area| area.contains(press))
        {
            // Overlay visibility is presentation-only and never persisted.
            app.sidebar.toggle_overlay();
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = app.ctx.theme.clone();
        let block = theme.block(Some("Content"), false);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.width == 0 || inner.height == 0 {
            app.sidebar.overlay_toggle_area = None;
            return;
        }

        // Header row: the overlay toggle exists only on compact viewports.
        let header = Rect::new(inner.x, inner.y, inner.width, 1);
        if app.is_compact() {
            let toggle = Rect::new(header.x, header.y, 3.min(header.width), 1);
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(" ☰", theme.text_style()))),
                toggle,
            );
            app.sidebar.overlay_toggle_area = Some(toggle);
        } else {
            app.sidebar.overlay_toggle_area = None;
        }

        let mut lines = vec![
            Line::from(Span::styled(
                format!("Current path: {}", app.current_path),
                theme.text_style(),
            )),
            Line::default(),
        ];
        let active: Vec<&str> = app
            .sidebar
            .entries
            .iter()
            .filter(|entry| entry.active)
            .map(|entry| entry.label.as_str())
            .collect();
        let sections = if active.is_empty() {
            "Active sections: none".to_string()
        } else {
            format!("Active sections: {}", active.join(", "))
        };
        lines.push(Line::from(Span::styled(sections, theme.text_muted_style())));

        if app.ctx.debug_enabled {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!(
                    "viewport: {} logical units ({})",
                    app.viewport_width,
                    if app.is_compact() { "compact" } else { "wide" }
                ),
                theme.text_muted_style(),
            )));
        }

        let body = Rect::new(
            inner.x + 1,
            inner.y + 2,
            inner.width.saturating_sub(1),
            inner.height.saturating_sub(2),
        );
        frame.render_widget(Paragraph::new(lines), body);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let mut hints: Vec<(&'static str, &'static str)> = Vec::new();
        if app.is_compact() {
            hints.push(("Ctrl+O", "Overlay"));
        }
        hints.push(("q", "Quit"));
        app.ctx.theme.build_hint_spans(&hints)
    }
}
