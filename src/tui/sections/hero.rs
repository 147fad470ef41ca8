//! Hero section: identity, typewriter tagline and entry actions.

use std::time::Duration;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::Section;
use crate::{
    content::{PROFILE, SOCIAL_LINKS},
    fx::{Delay, Typewriter},
    theme::ColorTheme,
    tui::paint,
    viewport::SectionId,
};

/// Entrance runs on a timer instead of an intersection latch: the hero
/// is at the top of the page and is always the first paint.
const ENTRANCE: Duration = Duration::from_millis(300);
/// Tagline starts typing half a second after the entrance.
const TYPE_DELAY: Duration = Duration::from_millis(800);
const TYPE_SPEED: Duration = Duration::from_millis(60);

pub struct Hero {
    entrance: Delay,
    tagline: Typewriter,
}

impl Hero {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entrance: Delay::new(ENTRANCE),
            tagline: Typewriter::new(PROFILE.tagline, TYPE_DELAY, TYPE_SPEED),
        }
    }
}

impl Default for Hero {
    fn default() -> Self {
        Self::new()
    }
}

impl Section for Hero {
    fn id(&self) -> SectionId {
        SectionId::Home
    }

    fn observe(&mut self, _ratio: f64) {}

    fn is_revealed(&self) -> bool {
        self.entrance.is_elapsed()
    }

    fn on_tick(&mut self, dt: Duration) {
        self.entrance.advance(dt);
        self.tagline.advance(dt);
    }

    fn render_lines(&mut self, width: u16, theme: &ColorTheme) -> Vec<Line<'static>> {
        let secondary = Style::new().fg(theme.text_secondary.color());
        let width = usize::from(width).saturating_sub(4).max(16);

        let mut lines: Vec<Line<'static>> = vec![Line::default(); 3];
        lines.push(Line::from(Span::styled(
            PROFILE.greeting,
            Style::new().fg(theme.primary.color()),
        )));
        lines.push(Line::default());
        lines.push(paint::gradient_line(
            &PROFILE.first_name.to_uppercase(),
            theme.gradient,
            true,
        ));
        lines.push(Line::from(Span::styled(
            PROFILE.last_name.to_uppercase(),
            Style::new()
                .fg(theme.primary.color())
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());

        let mut tagline = vec![Span::styled(
            self.tagline.visible(),
            Style::new().fg(theme.text.color()),
        )];
        if self.tagline.cursor_visible() {
            tagline.push(Span::styled(
                "▌",
                Style::new().fg(theme.primary.color()),
            ));
        }
        lines.push(Line::from(tagline));
        lines.push(Line::default());

        let summary = paint::wrap(PROFILE.summary, width.min(60));
        let summary_rows = summary.len();
        for row in summary {
            lines.push(Line::from(Span::styled(row, secondary)));
        }
        // Keep height stable across widths wide enough for two rows.
        for _ in summary_rows..2 {
            lines.push(Line::default());
        }
        lines.push(Line::default());

        lines.push(Line::from(vec![
            Span::styled(
                " View My Work → ".to_owned(),
                Style::new()
                    .fg(theme.text.color())
                    .bg(theme.primary.color())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                " ⇓ Download CV ",
                Style::new().fg(theme.primary.color()),
            ),
            Span::styled("  (w)", secondary),
        ]));
        lines.push(Line::default());

        let mut socials: Vec<Span<'static>> = Vec::new();
        for (i, link) in SOCIAL_LINKS.iter().enumerate() {
            if i > 0 {
                socials.push(Span::styled("  ·  ", secondary));
            }
            socials.push(Span::styled(
                format!("{} {}", link.icon, link.label),
                Style::new().fg(theme.text_secondary.color()),
            ));
        }
        lines.push(Line::from(socials));
        lines.extend([Line::default(), Line::default()]);
        lines.push(Line::from(Span::styled("∨ scroll", secondary)));
        lines.push(Line::default());

        if self.is_revealed() {
            lines
        } else {
            paint::blank_like(&lines)
        }
    }
}
