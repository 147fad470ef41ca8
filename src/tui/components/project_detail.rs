//! Project detail overlay.
//!
//! While open it consumes every scroll input, so the page cannot move
//! underneath it; the lock is derived from the overlay being open and
//! is therefore released on every close path.

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
    content::{ProjectInfo, PROJECTS},
    theme::{ThemeHandle, ThemeStore},
    tui::paint,
};

pub struct ProjectDetail {
    store: ThemeStore,
    open: Option<usize>,
    regions: Vec<ClickRegion>,
    popup: Option<Rect>,
}

impl ProjectDetail {
    /// Resolves the theme store from the current [`crate::theme::ThemeScope`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: ThemeHandle::current(),
            open: None,
            regions: Vec::new(),
            popup: None,
        }
    }

    pub fn open(&mut self, index: usize) {
        if index < PROJECTS.len() {
            self.open = Some(index);
        }
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open.is_some()
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> bool {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let (x, y) = (mouse.column, mouse.row);
                if hit(&self.regions, x, y) == Some(ClickTarget::ModalClose) {
                    self.close();
                } else if !self.popup.is_some_and(|popup| contains(popup, x, y)) {
                    self.close();
                }
                true
            }
            // Wheel input is swallowed: page scroll is locked while the
            // detail view is open.
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => true,
            _ => true,
        }
    }

    fn render_body(frame: &mut Frame, project: &ProjectInfo, inner: Rect, store: &ThemeStore) {
        let theme = store.active();
        let secondary = Style::new().fg(theme.text_secondary.color());
        let width = usize::from(inner.width.saturating_sub(2));

        let mut lines: Vec<Line<'static>> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", project.icon),
                Style::new().fg(theme.primary.color()),
            ),
            Span::styled(
                project.title,
                Style::new()
                    .fg(theme.text.color())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  [{}]", project.category), secondary),
        ]));
        lines.push(Line::default());
        for row in paint::wrap(project.description, width) {
            lines.push(Line::from(Span::styled(row, secondary)));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Key Features",
            Style::new()
                .fg(theme.primary.color())
                .add_modifier(Modifier::BOLD),
        )));
        for feature in project.features {
            lines.push(Line::from(vec![
                Span::styled("  • ", Style::new().fg(theme.accent.color())),
                Span::styled(*feature, Style::new().fg(theme.text.color())),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Tech Stack",
            Style::new()
                .fg(theme.primary.color())
                .add_modifier(Modifier::BOLD),
        )));
        let tech = project.tech.join(" · ");
        for row in paint::wrap(&tech, width) {
            lines.push(Line::from(Span::styled(
                row,
                Style::new().fg(theme.secondary.color()),
            )));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("Preview: {}", project.image_url),
            secondary.add_modifier(Modifier::DIM),
        )));

        let body = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height);
        frame.render_widget(Paragraph::new(lines), body);
    }
}

impl Default for ProjectDetail {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ProjectDetail {
    fn handle_event(&mut self, event: &Event) -> bool {
        if self.open.is_none() {
            return false;
        }
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    self.close();
                }
                // Everything else, scroll keys included, is swallowed.
                true
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => false,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.regions.clear();
        self.popup = None;
        let Some(project) = self.open.and_then(|index| PROJECTS.get(index)) else {
            return;
        };

        let theme = self.store.active();
        let width = area.width.saturating_sub(10).min(64).max(20);
        let height = area.height.saturating_sub(4).min(24);
        let popup = Rect::new(
            area.x + area.width.saturating_sub(width) / 2,
            area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        );

        frame.render_widget(Clear, popup);
        let block = Block::default()
            .title(" Project ")
            .borders(Borders::ALL)
            .border_style(Style::new().fg(theme.primary.color()))
            .style(Style::new().bg(theme.surface.color()));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let close = Rect::new(popup.x + popup.width.saturating_sub(4), popup.y, 3, 1);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "[✕]",
                Style::new().fg(theme.text_secondary.color()),
            ))),
            close,
        );
        self.regions.push(ClickRegion {
            area: close,
            target: ClickTarget::ModalClose,
        });

        Self::render_body(frame, project, inner, &self.store);
        self.popup = Some(popup);
    }

    fn click_regions(&self) -> &[ClickRegion] {
        &self.regions
    }
}
