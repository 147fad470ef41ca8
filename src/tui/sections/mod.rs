//! Content sections of the portfolio page.
//!
//! Each section renders its own rows from the active theme and its own
//! visibility/animation state; sections never talk to each other.

mod about;
mod contact;
mod hero;
mod projects;
mod skills;

pub use about::About;
pub use contact::{Contact, ContactForm, FormField};
pub use hero::Hero;
pub use projects::Projects;
pub use skills::Skills;

use std::time::Duration;

use ratatui::text::Line;

use crate::{theme::ColorTheme, viewport::SectionId};

/// One portfolio section on the virtual page.
pub trait Section {
    fn id(&self) -> SectionId;

    /// Feed the intersection ratio observed this frame. Timer-revealed
    /// sections ignore it.
    fn observe(&mut self, ratio: f64);

    /// Whether enter-animations have been triggered.
    fn is_revealed(&self) -> bool;

    /// Advance animation timers.
    fn on_tick(&mut self, dt: Duration);

    /// The section's rows at the given width.
    ///
    /// The row count must not depend on reveal state: an unrevealed
    /// section produces blank rows of identical height, so a latch flip
    /// never moves page geometry.
    fn render_lines(&mut self, width: u16, theme: &ColorTheme) -> Vec<Line<'static>>;
}

/// All five sections in page order.
pub struct Sections {
    pub hero: Hero,
    pub about: About,
    pub skills: Skills,
    pub projects: Projects,
    pub contact: Contact,
}

impl Sections {
    #[must_use]
    pub fn new() -> Self {
        Self {
            hero: Hero::new(),
            about: About::new(),
            skills: Skills::new(),
            projects: Projects::new(),
            contact: Contact::new(),
        }
    }

    /// The sections as trait objects, in page order.
    pub fn each_mut(&mut self) -> [&mut dyn Section; 5] {
        [
            &mut self.hero,
            &mut self.about,
            &mut self.skills,
            &mut self.projects,
            &mut self.contact,
        ]
    }
}

impl Default for Sections {
    fn default() -> Self {
        Self::new()
    }
}
