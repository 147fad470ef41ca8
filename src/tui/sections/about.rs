//! About section: bio paragraphs and highlight cards.

use std::time::Duration;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::Section;
use crate::{
    content::{ABOUT_PARAGRAPHS, HIGHLIGHTS},
    theme::ColorTheme,
    tui::paint,
    viewport::{SectionId, VisibilityLatch},
};

const THRESHOLD: f64 = 0.3;

pub struct About {
    latch: VisibilityLatch,
}

impl About {
    #[must_use]
    pub fn new() -> Self {
        Self {
            latch: VisibilityLatch::new(THRESHOLD),
        }
    }
}

impl Default for About {
    fn default() -> Self {
        Self::new()
    }
}

impl Section for About {
    fn id(&self) -> SectionId {
        SectionId::About
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
        let text_width = usize::from(width).saturating_sub(4).clamp(16, 72);

        let mut lines = paint::heading("About Me", theme);

        lines.push(Line::from(Span::styled(
            "⬚ sourav2.JPG",
            secondary.add_modifier(Modifier::DIM),
        )));
        lines.push(Line::default());

        for paragraph in ABOUT_PARAGRAPHS {
            for row in paint::wrap(paragraph, text_width) {
                lines.push(Line::from(Span::styled(row, secondary)));
            }
            lines.push(Line::default());
        }

        for item in &HIGHLIGHTS {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {} ", item.icon),
                    Style::new()
                        .fg(theme.text.color())
                        .bg(theme.primary.color()),
                ),
                Span::raw(" "),
                Span::styled(
                    item.title,
                    Style::new()
                        .fg(theme.text.color())
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(Span::styled(format!("     {}", item.desc), secondary)));
            lines.push(Line::default());
        }

        if self.is_revealed() {
            lines
        } else {
            paint::blank_like(&lines)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeRegistry;

    #[test]
    fn latch_flips_at_its_threshold_and_sticks() {
        let mut about = About::new();
        about.observe(0.29);
        assert!(!about.is_revealed());
        about.observe(0.3);
        assert!(about.is_revealed());
        about.observe(0.0);
        assert!(about.is_revealed());
    }

    #[test]
    fn reveal_does_not_change_height() {
        let mut about = About::new();
        let theme = ThemeRegistry::builtin().get("blue").unwrap().clone();
        let before = about.render_lines(90, &theme).len();
        about.observe(1.0);
        let after = about.render_lines(90, &theme).len();
        assert_eq!(before, after);
    }
}
