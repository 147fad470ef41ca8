//! Theme selection modal.
//!
//! Both theme entry points (navbar button and floating toggle) open
//! this modal; selections go through the one shared [`ThemeStore`].

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::{contains, hit, ClickRegion, ClickTarget, Component};
use crate::{
    theme::{ThemeHandle, ThemeStore},
    tui::paint,
};

pub struct ThemeModal {
    store: ThemeStore,
    open: bool,
    selected: usize,
    regions: Vec<ClickRegion>,
    popup: Option<Rect>,
}

impl ThemeModal {
    /// Resolves the theme store from the current [`crate::theme::ThemeScope`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: ThemeHandle::current(),
            open: false,
            selected: 0,
            regions: Vec::new(),
            popup: None,
        }
    }

    pub fn open(&mut self) {
        self.open = true;
        let active = self.store.active_key();
        self.selected = self
            .store
            .themes()
            .iter()
            .position(|(key, _)| *key == active)
            .unwrap_or(0);
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    fn apply(&mut self, index: usize) {
        if let Some((key, _)) = self.store.themes().get(index) {
            self.store.set_theme(key);
        }
        // Successful selection closes the modal.
        self.open = false;
    }

    fn handle_key(&mut self, code: KeyCode) -> bool {
        let count = self.store.themes().len();
        match code {
            KeyCode::Esc => self.close(),
            KeyCode::Down | KeyCode::Char('j') => {
                if count > 0 {
                    self.selected = (self.selected + 1) % count;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if count > 0 {
                    self.selected = (self.selected + count - 1) % count;
                }
            }
            KeyCode::Enter => self.apply(self.selected),
            _ => {}
        }
        // A modal swallows keyboard input while open.
        true
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> bool {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return true;
        }
        let (x, y) = (mouse.column, mouse.row);
        match hit(&self.regions, x, y) {
            Some(ClickTarget::ThemeEntry(index)) => self.apply(index),
            Some(ClickTarget::ModalClose) => self.close(),
            _ => {
                // Backdrop click: anywhere outside the popup closes.
                if !self.popup.is_some_and(|popup| contains(popup, x, y)) {
                    self.close();
                }
            }
        }
        true
    }
}

impl Default for ThemeModal {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ThemeModal {
    fn handle_event(&mut self, event: &Event) -> bool {
        if !self.open {
            return false;
        }
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key.code),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => false,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.regions.clear();
        self.popup = None;
        if !self.open {
            return;
        }

        let active = self.store.active();
        let themes = self.store.themes();
        let width = 42u16.min(area.width);
        let height = u16::try_from(themes.len() * 3 + 3)
            .unwrap_or(u16::MAX)
            .min(area.height);
        let popup = Rect::new(
            area.x + area.width.saturating_sub(width) / 2,
            area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        );

        frame.render_widget(Clear, popup);
        let block = Block::default()
            .title(" Choose Theme ")
            .borders(Borders::ALL)
            .border_style(Style::new().fg(active.primary.color()))
            .style(Style::new().bg(active.surface.color()));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let close = Rect::new(popup.x + popup.width.saturating_sub(4), popup.y, 3, 1);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "[✕]",
                Style::new().fg(active.text_secondary.color()),
            ))),
            close,
        );
        self.regions.push(ClickRegion {
            area: close,
            target: ClickTarget::ModalClose,
        });

        for (index, (_, theme)) in themes.iter().enumerate() {
            let y = inner.y + u16::try_from(index * 3).unwrap_or(u16::MAX) + 1;
            if y + 1 >= inner.y + inner.height {
                break;
            }
            let is_active = theme.name == active.name;
            let is_selected = index == self.selected;
            let marker = if is_selected { "▶ " } else { "  " };
            let mut name_style = Style::new().fg(active.text.color());
            if is_active {
                name_style = name_style
                    .fg(active.primary.color())
                    .add_modifier(Modifier::BOLD);
            }
            let mut spans = vec![
                Span::styled(marker.to_owned(), Style::new().fg(active.primary.color())),
                Span::styled(theme.name.clone(), name_style),
            ];
            if is_active {
                spans.push(Span::styled(
                    " ●",
                    Style::new().fg(active.primary.color()),
                ));
            }

            let name_row = Rect::new(inner.x + 1, y, inner.width.saturating_sub(2), 1);
            frame.render_widget(Paragraph::new(Line::from(spans)), name_row);

            let mut swatch_spans = vec![Span::raw("  ")];
            swatch_spans.extend(paint::swatches(theme));
            swatch_spans.push(Span::raw(" "));
            swatch_spans.extend(paint::gradient_line("━━━━━━━━━━", theme.gradient, false).spans);
            let swatch_row = Rect::new(inner.x + 1, y + 1, inner.width.saturating_sub(2), 1);
            frame.render_widget(Paragraph::new(Line::from(swatch_spans)), swatch_row);

            let entry = Rect::new(inner.x, y, inner.width, 2);
            self.regions.push(ClickRegion {
                area: entry,
                target: ClickTarget::ThemeEntry(index),
            });
        }

        self.popup = Some(popup);
    }

    fn click_regions(&self) -> &[ClickRegion] {
        &self.regions
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::theme::{ThemeRegistry, ThemeScope, ThemeStore};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse_down(x: u16, y: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn setup() -> (ThemeStore, ThemeModal) {
        let store = ThemeStore::new(ThemeRegistry::builtin());
        let _scope = ThemeScope::enter(&store);
        let modal = ThemeModal::new();
        (store, modal)
    }

    fn draw(modal: &mut ThemeModal) {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                modal.render(frame, area);
            })
            .unwrap();
    }

    #[test]
    fn keyboard_selection_applies_through_the_store() {
        let (store, mut modal) = setup();
        modal.open();
        // Active is purple (index 0); move to blue and confirm.
        modal.handle_event(&key(KeyCode::Down));
        modal.handle_event(&key(KeyCode::Enter));
        assert!(!modal.is_open());
        assert_eq!(store.active().name, "Ocean Blue");
    }

    #[test]
    fn escape_closes_without_changing_theme() {
        let (store, mut modal) = setup();
        modal.open();
        modal.handle_event(&key(KeyCode::Down));
        modal.handle_event(&key(KeyCode::Esc));
        assert!(!modal.is_open());
        assert_eq!(store.active().name, "Purple Dream");
    }

    #[test]
    fn entry_click_selects_and_closes() {
        let (store, mut modal) = setup();
        modal.open();
        draw(&mut modal);
        let entry = modal
            .click_regions()
            .iter()
            .find(|r| r.target == ClickTarget::ThemeEntry(3))
            .copied()
            .unwrap();
        modal.handle_event(&mouse_down(entry.area.x, entry.area.y));
        assert!(!modal.is_open());
        assert_eq!(store.active().name, "Crimson Fire");
    }

    #[test]
    fn backdrop_click_closes_without_selection() {
        let (store, mut modal) = setup();
        modal.open();
        draw(&mut modal);
        assert!(modal.handle_event(&mouse_down(0, 0)));
        assert!(!modal.is_open());
        assert_eq!(store.active().name, "Purple Dream");
    }

    #[test]
    fn closed_modal_ignores_events() {
        let (_store, mut modal) = setup();
        assert!(!modal.handle_event(&key(KeyCode::Enter)));
    }
}
