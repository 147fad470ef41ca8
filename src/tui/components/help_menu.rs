//! Help overlay showing keyboard shortcuts.

use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use super::Component;
use crate::theme::{ThemeHandle, ThemeStore};

const KEYBINDINGS: &[(&str, &str)] = &[
    ("j/k", "scroll"),
    ("Space/PgDn", "page down"),
    ("PgUp", "page up"),
    ("g/G", "top / bottom"),
    ("1-5", "jump to section"),
    ("n/p", "next / previous section"),
    ("←/→", "select project"),
    ("Enter", "open project"),
    ("c", "contact form"),
    ("t", "change theme"),
    ("m", "menu (narrow terminals)"),
    ("?", "close help"),
    ("q", "quit"),
];

/// Help popup showing keyboard shortcuts.
pub struct HelpMenu {
    store: ThemeStore,
    visible: bool,
}

impl HelpMenu {
    /// Resolves the theme store from the current [`crate::theme::ThemeScope`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: ThemeHandle::current(),
            visible: false,
        }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Default for HelpMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for HelpMenu {
    fn handle_event(&mut self, event: &Event) -> bool {
        if !self.visible {
            return false;
        }

        let Event::Key(key) = event else {
            return false;
        };
        if key.kind != KeyEventKind::Press {
            return false;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('?') => {
                self.visible = false;
                true
            }
            _ => false,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if !self.visible {
            return;
        }

        let theme = self.store.active();
        let width = 36u16;
        let height = u16::try_from(KEYBINDINGS.len()).unwrap_or(u16::MAX) + 2;
        let x = area.width.saturating_sub(width + 1);
        let y = area.height.saturating_sub(height + 1);
        let popup_area = Rect::new(x, y, width.min(area.width), height.min(area.height));

        frame.render_widget(Clear, popup_area);

        let block = Block::bordered()
            .title(" Help ")
            .border_style(Style::new().fg(theme.primary.color()))
            .style(Style::new().bg(theme.surface.color()));

        let key_style = Style::new().fg(theme.primary.color());
        let help_lines: Vec<Line> = KEYBINDINGS
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(format!("{key:>10}"), key_style),
                    Span::raw(format!("  {desc}")),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(help_lines).block(block), popup_area);
    }
}
