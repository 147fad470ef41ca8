//! Scroll-derived navigation state.

use super::SectionId;

/// Vertical extent of a section on the virtual page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionBounds {
    pub top: u32,
    pub height: u32,
}

impl SectionBounds {
    #[must_use]
    pub const fn new(top: u32, height: u32) -> Self {
        Self { top, height }
    }

    /// Whether `pos` falls within `[top, top + height)`.
    #[must_use]
    pub const fn contains(self, pos: u32) -> bool {
        pos >= self.top && pos < self.top + self.height
    }

    /// Fraction of this section visible in a viewport starting at
    /// `viewport_top` with `viewport_height` rows.
    #[must_use]
    pub fn visible_ratio(self, viewport_top: u32, viewport_height: u32) -> f64 {
        if self.height == 0 {
            return 0.0;
        }
        let bottom = self.top + self.height;
        let viewport_bottom = viewport_top + viewport_height;
        let overlap = bottom
            .min(viewport_bottom)
            .saturating_sub(self.top.max(viewport_top));
        f64::from(overlap) / f64::from(self.height)
    }
}

/// Derives `is_scrolled` and the active section from one scroll
/// subscription.
///
/// Both values are recomputed on every event; there is no debouncing or
/// throttling. When no section contains the probe position the previous
/// active section is retained.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    chrome_threshold: u32,
    probe_offset: u32,
    is_scrolled: bool,
    active: SectionId,
}

impl ScrollTracker {
    pub const DEFAULT_CHROME_THRESHOLD: u32 = 50;
    pub const DEFAULT_PROBE_OFFSET: u32 = 100;

    /// Tracker with the default thresholds (50 / 100 units).
    #[must_use]
    pub fn new() -> Self {
        Self::with_thresholds(Self::DEFAULT_CHROME_THRESHOLD, Self::DEFAULT_PROBE_OFFSET)
    }

    /// Tracker with caller-scaled thresholds (e.g. row units).
    #[must_use]
    pub const fn with_thresholds(chrome_threshold: u32, probe_offset: u32) -> Self {
        Self {
            chrome_threshold,
            probe_offset,
            is_scrolled: false,
            active: SectionId::Home,
        }
    }

    /// Recompute both derived values for a new scroll offset.
    ///
    /// `sections` is the fixed ordered section list with its current
    /// geometry; the first section containing `offset + probe` wins.
    pub fn on_scroll(&mut self, offset: u32, sections: &[(SectionId, SectionBounds)]) {
        self.is_scrolled = offset > self.chrome_threshold;

        let probe = offset + self.probe_offset;
        if let Some((id, _)) = sections.iter().find(|(_, bounds)| bounds.contains(probe)) {
            self.active = *id;
        }
    }

    /// Whether the page has scrolled past the chrome threshold.
    /// Bidirectional, unlike the visibility latch.
    #[must_use]
    pub const fn is_scrolled(&self) -> bool {
        self.is_scrolled
    }

    #[must_use]
    pub const fn active_section(&self) -> SectionId {
        self.active
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<(SectionId, SectionBounds)> {
        vec![
            (SectionId::Home, SectionBounds::new(0, 600)),
            (SectionId::About, SectionBounds::new(600, 500)),
            (SectionId::Skills, SectionBounds::new(1100, 500)),
            (SectionId::Projects, SectionBounds::new(1600, 700)),
            (SectionId::Contact, SectionBounds::new(2300, 500)),
        ]
    }

    #[test]
    fn is_scrolled_is_bidirectional_at_the_boundary() {
        let mut tracker = ScrollTracker::new();
        let page = page();

        tracker.on_scroll(50, &page);
        assert!(!tracker.is_scrolled());
        tracker.on_scroll(51, &page);
        assert!(tracker.is_scrolled());
        tracker.on_scroll(49, &page);
        assert!(!tracker.is_scrolled());
    }

    #[test]
    fn active_section_probes_ahead_of_the_offset() {
        let mut tracker = ScrollTracker::new();
        let page = page();

        tracker.on_scroll(0, &page);
        assert_eq!(tracker.active_section(), SectionId::Home);

        // 500 + 100 lands exactly on About's top row.
        tracker.on_scroll(500, &page);
        assert_eq!(tracker.active_section(), SectionId::About);

        tracker.on_scroll(2400, &page);
        assert_eq!(tracker.active_section(), SectionId::Contact);
    }

    #[test]
    fn retains_previous_active_when_nothing_matches() {
        let mut tracker = ScrollTracker::new();
        let page = page();

        tracker.on_scroll(1100, &page);
        assert_eq!(tracker.active_section(), SectionId::Skills);

        // Probe past the end of the page: previous value sticks.
        tracker.on_scroll(5000, &page);
        assert_eq!(tracker.active_section(), SectionId::Skills);
    }

    #[test]
    fn earlier_section_wins_overlapping_bounds() {
        let mut tracker = ScrollTracker::new();
        let overlapping = vec![
            (SectionId::Home, SectionBounds::new(0, 300)),
            (SectionId::About, SectionBounds::new(100, 300)),
        ];
        tracker.on_scroll(50, &overlapping);
        assert_eq!(tracker.active_section(), SectionId::Home);
    }

    #[test]
    fn zero_height_sections_never_match() {
        let mut tracker = ScrollTracker::new();
        let degenerate = vec![
            (SectionId::Home, SectionBounds::new(0, 0)),
            (SectionId::About, SectionBounds::new(0, 400)),
        ];
        tracker.on_scroll(0, &degenerate);
        assert_eq!(tracker.active_section(), SectionId::About);
    }

    #[test]
    fn custom_thresholds_apply() {
        let mut tracker = ScrollTracker::with_thresholds(2, 5);
        let rows = vec![
            (SectionId::Home, SectionBounds::new(0, 20)),
            (SectionId::About, SectionBounds::new(20, 20)),
        ];
        tracker.on_scroll(3, &rows);
        assert!(tracker.is_scrolled());
        tracker.on_scroll(16, &rows);
        assert_eq!(tracker.active_section(), SectionId::About);
    }

    #[test]
    fn visible_ratio_clamps_to_overlap() {
        let bounds = SectionBounds::new(100, 50);
        assert!((bounds.visible_ratio(100, 50) - 1.0).abs() < f64::EPSILON);
        assert!((bounds.visible_ratio(125, 100) - 0.5).abs() < f64::EPSILON);
        assert!((bounds.visible_ratio(200, 50) - 0.0).abs() < f64::EPSILON);
        assert!((SectionBounds::new(0, 0).visible_ratio(0, 50) - 0.0).abs() < f64::EPSILON);
    }
}
