//! Semantic color roles and style builders shared by the UI components.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders};

/// Semantic color roles used throughout the UI.
#[derive(Debug, Clone)]
pub struct ThemeRoles {
    pub surface: Color,
    pub border: Color,
    pub text: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub focus: Color,
}

/// Fixed theme for the application.
#[derive(Debug, Clone)]
pub struct Theme {
    roles: ThemeRoles,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            roles: ThemeRoles {
                surface: Color::Rgb(24, 26, 33),
                border: Color::Rgb(68, 71, 90),
                text: Color::Rgb(216, 222, 233),
                text_muted: Color::Rgb(120, 126, 140),
                accent: Color::Rgb(136, 192, 208),
                selection_bg: Color::Rgb(59, 66, 82),
                selection_fg: Color::Rgb(236, 239, 244),
                focus: Color::Rgb(163, 190, 140),
            },
        }
    }
}

impl Theme {
    /// Builds a standard block with surface background and themed borders.
    pub fn block<'a>(&self, title: Option<&'a str>, focused: bool) -> Block<'a> {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Plain)
            .border_style(self.border_style(focused))
            .style(self.panel_style());
        if let Some(title) = title {
            block = block.title(Span::styled(
                title,
                self.text_style().add_modifier(Modifier::BOLD),
            ));
        }
        block
    }

    pub fn panel_style(&self) -> Style {
        Style::default().bg(self.roles.surface).fg(self.roles.text)
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.roles.text)
    }

    pub fn text_muted_style(&self) -> Style {
        Style::default().fg(self.roles.text_muted)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        let color = if focused { self.roles.focus } else { self.roles.border };
        Style::default().fg(color)
    }

    /// Style for the active navigation entries and selected rows.
    pub fn selection_style(&self) -> Style {
        Style::default()
            .fg(self.roles.selection_fg)
            .bg(self.roles.selection_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Renders `(key, action)` pairs as styled hint spans for the hint bar.
    pub fn build_hint_spans(&self, hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
        let mut spans = Vec::with_capacity(hints.len() * 2);
        for (key, action) in hints {
            spans.push(Span::styled(
                format!(" {key}"),
                Style::default().fg(self.roles.accent).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(format!(" {action} "), self.text_muted_style()));
        }
        spans
    }
}
