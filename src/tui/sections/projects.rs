//! Projects section: card grid feeding the detail overlay.

use std::time::Duration;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::Section;
use crate::{
    content::{PROJECTS, PROJECTS_INTRO},
    theme::ColorTheme,
    tui::paint,
    viewport::{SectionId, VisibilityLatch},
};

const THRESHOLD: f64 = 0.2;
/// Tech tags shown on a card before the overflow counter.
const CARD_TECH: usize = 3;

pub struct Projects {
    latch: VisibilityLatch,
    selected: usize,
}

impl Projects {
    #[must_use]
    pub fn new() -> Self {
        Self {
            latch: VisibilityLatch::new(THRESHOLD),
            selected: 0,
        }
    }

    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < PROJECTS.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

impl Default for Projects {
    fn default() -> Self {
        Self::new()
    }
}

impl Section for Projects {
    fn id(&self) -> SectionId {
        SectionId::Projects
    }

    fn observe(&mut self, ratio: f64) {
        if self.latch.observe(ratio) {
            tracing::debug!(section = self.id().slug(), "section entered view");
        }
    }

    fn is_revealed(&self) -> bool {
        self.latch.is_seen()
    }

    fn on_tick(&mut self, _dt: Duration) {}

    fn render_lines(&mut self, width: u16, theme: &ColorTheme) -> Vec<Line<'static>> {
        let secondary = Style::new().fg(theme.text_secondary.color());
        let text_width = usize::from(width).saturating_sub(6).clamp(16, 68);

        let mut lines = paint::heading("Projects", theme);
        for row in paint::wrap(PROJECTS_INTRO, text_width) {
            lines.push(Line::from(Span::styled(row, secondary)));
        }
        lines.push(Line::default());

        for (index, project) in PROJECTS.iter().enumerate() {
            let is_selected = index == self.selected;
            let marker = if is_selected { "▶ " } else { "  " };
            let title_style = if is_selected {
                Style::new()
                    .fg(theme.primary.color())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::new()
                    .fg(theme.text.color())
                    .add_modifier(Modifier::BOLD)
            };

            lines.push(Line::from(vec![
                Span::styled(marker.to_owned(), Style::new().fg(theme.primary.color())),
                Span::styled(format!("{} ", project.icon), Style::new().fg(theme.accent.color())),
                Span::styled(project.title, title_style),
                Span::styled(format!("  [{}]", project.category), secondary),
            ]));

            let mut description = paint::wrap(project.description, text_width);
            description.truncate(2);
            let description_rows = description.len();
            for row in description {
                lines.push(Line::from(Span::styled(format!("    {row}"), secondary)));
            }
            for _ in description_rows..2 {
                lines.push(Line::default());
            }

            let mut tech_spans = vec![Span::raw("    ")];
            for (i, tech) in project.tech.iter().take(CARD_TECH).enumerate() {
                if i > 0 {
                    tech_spans.push(Span::styled(" · ", secondary));
                }
                tech_spans.push(Span::styled(
                    *tech,
                    Style::new().fg(theme.secondary.color()),
                ));
            }
            let overflow = project.tech.len().saturating_sub(CARD_TECH);
            if overflow > 0 {
                tech_spans.push(Span::styled(format!("  +{overflow}"), secondary));
            }
            lines.push(Line::from(tech_spans));
            lines.push(Line::default());
        }

        lines.push(Line::from(Span::styled(
            "←/→ select · Enter for details",
            secondary.add_modifier(Modifier::DIM),
        )));
        lines.push(Line::default());

        if self.is_revealed() {
            lines
        } else {
            paint::blank_like(&lines)
        }
    }
}
