//! Standalone floating theme toggle.
//!
//! The second theme entry point next to the navbar button; both drive
//! the same store through the same modal.

use crossterm::event::{Event, MouseButton, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use super::{hit, ClickRegion, ClickTarget, Component};
use crate::theme::{ThemeHandle, ThemeStore};

pub struct ThemeToggle {
    store: ThemeStore,
    regions: Vec<ClickRegion>,
    clicked: bool,
}

impl ThemeToggle {
    /// Resolves the theme store from the current [`crate::theme::ThemeScope`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: ThemeHandle::current(),
            regions: Vec::new(),
            clicked: false,
        }
    }

    /// True once per click; the shell opens the theme modal on it.
    pub fn take_clicked(&mut self) -> bool {
        std::mem::take(&mut self.clicked)
    }
}

impl Default for ThemeToggle {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ThemeToggle {
    fn handle_event(&mut self, event: &Event) -> bool {
        let Event::Mouse(mouse) = event else {
            return false;
        };
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }
        if hit(&self.regions, mouse.column, mouse.row) == Some(ClickTarget::FloatingToggle) {
            self.clicked = true;
            return true;
        }
        false
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.regions.clear();
        let theme = self.store.active();
        let rect = Rect::new(area.x + area.width.saturating_sub(4), area.y + 2, 3, 1);
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "(⚙)",
                Style::new().fg(theme.accent.color()),
            ))),
            rect,
        );
        self.regions.push(ClickRegion {
            area: rect,
            target: ClickTarget::FloatingToggle,
        });
    }

    fn click_regions(&self) -> &[ClickRegion] {
        &self.regions
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyModifiers, MouseEvent};
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::theme::{ThemeRegistry, ThemeScope, ThemeStore};

    #[test]
    fn click_on_the_toggle_is_reported_once() {
        let store = ThemeStore::new(ThemeRegistry::builtin());
        let _scope = ThemeScope::enter(&store);
        let mut toggle = ThemeToggle::new();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                toggle.render(frame, area);
            })
            .unwrap();

        let rect = toggle.click_regions()[0].area;
        let event = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: rect.x,
            row: rect.y,
            modifiers: KeyModifiers::NONE,
        });
        assert!(toggle.handle_event(&event));
        assert!(toggle.take_clicked());
        assert!(!toggle.take_clicked());
    }
}
