//! Rendering and event handling for the navigation sidebar.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use navrail_types::Effect;
use ratatui::{
    Frame,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::ui::components::component::{Component, find_target_index_by_mouse_position};

/// The collapsible navigation rail.
///
/// Renders a vertical list of entries with a collapse toggle at the top.
/// Activating an entry emits [`Effect::Navigate`]; clicking the toggle flips
/// the collapse flag and persists the preference before the handler returns.
#[derive(Debug, Default)]
pub struct SidebarComponent {
    /// Optional title for the surrounding block, hidden when collapsed.
    pub title: Option<String>,
}

impl SidebarComponent {
    pub fn new() -> Self {
        Self {
            title: Some("Navigation".to_string()),
        }
    }

    fn entry_line<'a>(entry: &'a crate::ui::components::sidebar::NavEntry, collapsed: bool) -> Line<'a> {
        if collapsed {
            Line::from(format!(" {}", entry.icon))
        } else {
            Line::from(format!(" {}  {}", entry.icon, entry.label))
        }
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if !app.sidebar.owns_focus() {
            return Vec::new();
        }

        match key.code {
            KeyCode::Down => {
                if let Some(flag) = app.sidebar.cycle_focus(true) {
                    app.focus.focus(&flag);
                }
            }
            KeyCode::Up => {
                if let Some(flag) = app.sidebar.cycle_focus(false) {
                    app.focus.focus(&flag);
                }
            }
            KeyCode::Enter => {
                if let Some((index, entry)) = app.sidebar.focused_entry() {
                    app.sidebar.selected_index = index;
                    if let Some(href) = entry.href {
                        return vec![Effect::Navigate(href)];
                    }
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let press = Position::new(mouse.column, mouse.row);

        if app.sidebar.toggle_area.contains(press) {
            // Synchronous persist: the store reflects the flag before this
            // handler returns to the event loop.
            app.toggle_sidebar_collapsed();
            return Vec::new();
        }

        let hit = find_target_index_by_mouse_position(
            &app.sidebar.last_area,
            &app.sidebar.per_entry_areas,
            mouse.column,
            mouse.row,
        );
        if let Some(index) = hit {
            if let Some(entry) = app.sidebar.entries.get(index).cloned() {
                app.sidebar.selected_index = index;
                if let Some(flag) = app.sidebar.entry_focus_flags.get(index) {
                    app.focus.focus(flag);
                }
                if let Some(href) = entry.href {
                    return vec![Effect::Navigate(href)];
                }
            }
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        if area.width == 0 || area.height == 0 {
            // Off screen: drop stale hit-test areas so hidden surfaces
            // cannot capture presses.
            app.sidebar.last_area = Rect::default();
            app.sidebar.per_entry_areas.clear();
            app.sidebar.toggle_area = Rect::default();
            return;
        }

        let theme = app.ctx.theme.clone();
        let focused = app.sidebar.owns_focus();
        let title = if app.sidebar.collapsed { None } else { self.title.as_deref() };

        let block = theme.block(title, focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Collapse toggle on the first inner row.
        let toggle_rect = Rect::new(inner.x, inner.y, inner.width, 1.min(inner.height));
        let toggle_label = if app.sidebar.collapsed { " »" } else { " «" };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(toggle_label, theme.text_muted_style()))),
            toggle_rect,
        );

        // Entry rows, one per line, below the toggle and a spacer.
        let mut entry_areas = Vec::with_capacity(app.sidebar.entries.len());
        for (index, entry) in app.sidebar.entries.iter().enumerate() {
            let y = inner.y + 2 + index as u16;
            if y >= inner.y + inner.height {
                break;
            }
            let row = Rect::new(inner.x, y, inner.width, 1);

            let entry_focused = app
                .sidebar
                .entry_focus_flags
                .get(index)
                .is_some_and(|flag| flag.get());
            let style = if entry.active {
                theme.selection_style()
            } else if entry_focused {
                theme.text_style().add_modifier(ratatui::style::Modifier::REVERSED)
            } else {
                theme.text_style()
            };

            let line = Self::entry_line(entry, app.sidebar.collapsed).style(style);
            frame.render_widget(Paragraph::new(line), row);
            entry_areas.push(row);
        }

        app.sidebar.last_area = area;
        app.sidebar.per_entry_areas = entry_areas;
        app.sidebar.toggle_area = toggle_rect;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        app.ctx
            .theme
            .build_hint_spans(&[("↑/↓", "Navigate"), ("Enter", "Open"), ("Ctrl+B", "Collapse")])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use navrail_types::SidebarPreference;
    use navrail_util::UserPreferences;

    fn press(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn laid_out_app() -> App {
        let mut app = App::new(UserPreferences::ephemeral(), "/");
        app.sidebar.last_area = Rect::new(0, 0, 26, 20);
        app.sidebar.toggle_area = Rect::new(1, 1, 24, 1);
        app.sidebar.per_entry_areas = (0..app.sidebar.entries.len())
            .map(|i| Rect::new(1, 3 + i as u16, 24, 1))
            .collect();
        app
    }

    #[test]
    fn toggle_clicks_flip_and_persist_every_time() {
        let mut app = laid_out_app();
        let mut component = SidebarComponent::new();

        for n in 1..=4u32 {
            let effects = component.handle_mouse_events(&mut app, press(2, 1));
            assert!(effects.is_empty());
            assert_eq!(app.sidebar.collapsed, n % 2 == 1);
            let expected = if n % 2 == 1 {
                SidebarPreference::Collapsed
            } else {
                SidebarPreference::Expanded
            };
            assert_eq!(app.ctx.prefs.sidebar_state(), Some(expected));
        }
    }

    #[test]
    fn entry_click_selects_and_navigates() {
        let mut app = laid_out_app();
        let mut component = SidebarComponent::new();

        // Row index 4 is Settings in the default entries.
        let effects = component.handle_mouse_events(&mut app, press(5, 7));
        assert_eq!(effects, vec![Effect::Navigate("/settings".into())]);
        assert_eq!(app.sidebar.selected_index, 4);
    }

    #[test]
    fn clicks_outside_the_sidebar_do_nothing() {
        let mut app = laid_out_app();
        let mut component = SidebarComponent::new();

        let effects = component.handle_mouse_events(&mut app, press(60, 7));
        assert!(effects.is_empty());
        assert!(!app.sidebar.collapsed);
        assert_eq!(app.ctx.prefs.sidebar_state(), None);
    }

    #[test]
    fn enter_navigates_to_the_focused_entry() {
        let mut app = laid_out_app();
        let mut component = SidebarComponent::new();

        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        let effects = component.handle_key_events(&mut app, key);
        assert_eq!(effects, vec![Effect::Navigate("/".into())]);
    }
}
