//! Virtual page assembly.
//!
//! The portfolio is one tall document of styled lines; the viewport
//! scrolls over it. Section geometry is measured during assembly and
//! feeds the scroll tracker and the visibility latches.

use ratatui::text::Line;

use super::sections::Sections;
use crate::{
    theme::ColorTheme,
    viewport::{SectionBounds, SectionId},
};

pub struct Page {
    pub lines: Vec<Line<'static>>,
    pub geometry: Vec<(SectionId, SectionBounds)>,
    pub height: u32,
}

/// Assemble all sections at `width` into one page.
pub fn build(sections: &mut Sections, width: u16, theme: &ColorTheme) -> Page {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut geometry = Vec::new();

    for section in sections.each_mut() {
        let top = u32::try_from(lines.len()).unwrap_or(u32::MAX);
        let mut section_lines = section.render_lines(width, theme);
        let height = u32::try_from(section_lines.len()).unwrap_or(u32::MAX);
        geometry.push((section.id(), SectionBounds::new(top, height)));
        lines.append(&mut section_lines);
    }

    let height = u32::try_from(lines.len()).unwrap_or(u32::MAX);
    Page {
        lines,
        geometry,
        height,
    }
}
