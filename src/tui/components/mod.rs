//! Component-based chrome architecture.
//!
//! Each component encapsulates its own state, event handling, and
//! rendering. Click regions are computed during rendering to keep hit
//! tests consistent with what is on screen.

mod help_menu;
mod navbar;
mod project_detail;
mod theme_modal;
mod theme_toggle;

use crossterm::event::Event;
pub use help_menu::HelpMenu;
pub use navbar::{NavAction, NavBar};
pub use project_detail::ProjectDetail;
use ratatui::{layout::Rect, Frame};
pub use theme_modal::ThemeModal;
pub use theme_toggle::ThemeToggle;

use crate::viewport::SectionId;

/// What a mouse press on a chrome region means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// A navigation link (desktop row or compact menu).
    NavItem(SectionId),
    /// The navbar theme (settings) button.
    ThemeButton,
    /// The compact-menu toggle button.
    MenuToggle,
    /// The standalone floating theme toggle.
    FloatingToggle,
    /// An entry in the theme modal, by enumeration index.
    ThemeEntry(usize),
    /// A modal close button.
    ModalClose,
}

/// A clickable region mapped to a target.
#[derive(Debug, Clone, Copy)]
pub struct ClickRegion {
    pub area: Rect,
    pub target: ClickTarget,
}

/// Whether `(x, y)` falls inside `area`.
#[must_use]
pub const fn contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

/// First region containing the point, if any.
#[must_use]
pub fn hit(regions: &[ClickRegion], x: u16, y: u16) -> Option<ClickTarget> {
    regions
        .iter()
        .find(|region| contains(region.area, x, y))
        .map(|region| region.target)
}

/// A UI component with co-located state, rendering, and click regions.
pub trait Component {
    /// Handle a terminal event. Returns true if the event was consumed.
    fn handle_event(&mut self, event: &Event) -> bool;

    /// Render the component and recompute its click regions.
    fn render(&mut self, frame: &mut Frame, area: Rect);

    /// Click regions computed during the last render.
    fn click_regions(&self) -> &[ClickRegion] {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_returns_first_containing_region() {
        let regions = [
            ClickRegion {
                area: Rect::new(0, 0, 10, 1),
                target: ClickTarget::MenuToggle,
            },
            ClickRegion {
                area: Rect::new(5, 0, 10, 1),
                target: ClickTarget::ThemeButton,
            },
        ];
        assert_eq!(hit(&regions, 6, 0), Some(ClickTarget::MenuToggle));
        assert_eq!(hit(&regions, 12, 0), Some(ClickTarget::ThemeButton));
        assert_eq!(hit(&regions, 12, 1), None);
    }
}
