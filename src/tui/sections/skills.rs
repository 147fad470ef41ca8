//! Skills section: per-skill proficiency meters with a staggered
//! count-up reveal.

use std::time::Duration;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::Section;
use crate::{
    content::{SKILLS, SKILLS_INTRO},
    fx::CountUp,
    theme::ColorTheme,
    tui::paint,
    viewport::{SectionId, VisibilityLatch},
};

const THRESHOLD: f64 = 0.3;
/// Count-ups start half a second after the section enters view.
const START_DELAY: Duration = Duration::from_millis(500);
/// Each skill starts this much later than the previous one.
const STAGGER: Duration = Duration::from_millis(100);
/// One percentage point per step.
const STEP: Duration = Duration::from_millis(20);

const METER_WIDTH: usize = 20;

pub struct Skills {
    latch: VisibilityLatch,
    counters: Vec<CountUp>,
}

impl Skills {
    #[must_use]
    pub fn new() -> Self {
        Self {
            latch: VisibilityLatch::new(THRESHOLD),
            counters: Vec::new(),
        }
    }

    /// Counter value for the skill at `index`; zero before reveal.
    #[must_use]
    pub fn counter_value(&self, index: usize) -> u8 {
        self.counters.get(index).map_or(0, CountUp::value)
    }
}

impl Default for Skills {
    fn default() -> Self {
        Self::new()
    }
}

impl Section for Skills {
    fn id(&self) -> SectionId {
        SectionId::Skills
    }

    fn observe(&mut self, ratio: f64) {
        if self.latch.observe(ratio) {
            tracing::debug!(section = self.id().slug(), "section entered view");
            self.counters = SKILLS
                .iter()
                .enumerate()
                .map(|(i, skill)| {
                    CountUp::new(skill.level, START_DELAY + STAGGER * u32::try_from(i).unwrap_or(0), STEP)
                })
                .collect();
        }
    }

    fn is_revealed(&self) -> bool {
        self.latch.is_seen()
    }

    fn on_tick(&mut self, dt: Duration) {
        for counter in &mut self.counters {
            counter.advance(dt);
        }
    }

    fn render_lines(&mut self, width: u16, theme: &ColorTheme) -> Vec<Line<'static>> {
        let secondary = Style::new().fg(theme.text_secondary.color());
        let text_width = usize::from(width).saturating_sub(4).clamp(16, 72);

        let mut lines = paint::heading("Skills & Expertise", theme);
        for row in paint::wrap(SKILLS_INTRO, text_width) {
            lines.push(Line::from(Span::styled(row, secondary)));
        }
        lines.push(Line::default());

        for (index, skill) in SKILLS.iter().enumerate() {
            let value = self.counter_value(index);
            let mut spans = vec![Span::styled(
                format!("{:<18}", skill.name),
                Style::new()
                    .fg(theme.text.color())
                    .add_modifier(Modifier::BOLD),
            )];
            spans.extend(paint::meter(value, METER_WIDTH, theme));
            spans.push(Span::styled(
                format!(" {value:>3}%  "),
                Style::new().fg(theme.text.color()),
            ));
            spans.push(Span::styled(skill.category, secondary));
            lines.push(Line::from(spans));
            lines.push(Line::default());
        }

        if self.is_revealed() {
            lines
        } else {
            paint::blank_like(&lines)
        }
    }
}
