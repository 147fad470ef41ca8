//! Application state and input dispatch for the TUI.

use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseEventKind};

use super::{
    components::{Component, HelpMenu, NavAction, NavBar, ProjectDetail, ThemeModal, ThemeToggle},
    page::Page,
    sections::Sections,
};
use crate::{
    theme::{Subscription, ThemeHandle, ThemeStore},
    viewport::{ScrollTracker, SectionBounds, SectionId},
};

/// One terminal row stands in for roughly twenty pixels, so the
/// 50px/100px scroll thresholds become 2/5 rows.
const CHROME_THRESHOLD_ROWS: u32 = 2;
const PROBE_OFFSET_ROWS: u32 = 5;

/// Rows scrolled per line-step and per wheel notch.
const KEY_SCROLL_STEP: u32 = 2;
const WHEEL_SCROLL_STEP: u32 = 3;

pub struct App {
    store: ThemeStore,
    /// Keeps the presentation-layer subscription alive for the app's
    /// lifetime; dropping it would silence the notifications.
    _style_notifications: Subscription,
    tracker: ScrollTracker,
    offset: u32,
    viewport: (u16, u16),
    page_height: u32,
    geometry: Vec<(SectionId, SectionBounds)>,
    pub sections: Sections,
    pub navbar: NavBar,
    pub theme_modal: ThemeModal,
    pub theme_toggle: ThemeToggle,
    pub detail: ProjectDetail,
    pub help: HelpMenu,
    should_exit: bool,
}

impl App {
    /// Build the app inside an entered [`crate::theme::ThemeScope`].
    #[must_use]
    pub fn new() -> Self {
        let store = ThemeHandle::current();
        let style_notifications = store.subscribe(|theme| {
            tracing::debug!(name = %theme.name, "style surface rewritten");
        });
        Self {
            store,
            _style_notifications: style_notifications,
            tracker: ScrollTracker::with_thresholds(CHROME_THRESHOLD_ROWS, PROBE_OFFSET_ROWS),
            offset: 0,
            viewport: (0, 0),
            page_height: 0,
            geometry: Vec::new(),
            sections: Sections::new(),
            navbar: NavBar::new(),
            theme_modal: ThemeModal::new(),
            theme_toggle: ThemeToggle::new(),
            detail: ProjectDetail::new(),
            help: HelpMenu::new(),
            should_exit: false,
        }
    }

    #[must_use]
    pub const fn store(&self) -> &ThemeStore {
        &self.store
    }

    #[must_use]
    pub const fn tracker(&self) -> &ScrollTracker {
        &self.tracker
    }

    #[must_use]
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    #[must_use]
    pub const fn should_exit(&self) -> bool {
        self.should_exit
    }

    /// Content-area size, fed back from layout on every frame.
    pub fn set_viewport(&mut self, width: u16, rows: u16) {
        self.viewport = (width, rows);
    }

    /// Adopt freshly built page geometry and re-derive scroll state.
    pub fn apply_page(&mut self, page: &Page) {
        self.geometry.clone_from(&page.geometry);
        self.page_height = page.height;
        self.set_offset(self.offset);
    }

    fn max_offset(&self) -> u32 {
        self.page_height.saturating_sub(u32::from(self.viewport.1))
    }

    fn set_offset(&mut self, offset: u32) {
        self.offset = offset.min(self.max_offset());
        self.sync_derived();
    }

    fn scroll_by(&mut self, delta: i64) {
        let target = i64::from(self.offset) + delta;
        let clamped = u32::try_from(target.max(0)).unwrap_or(0);
        self.set_offset(clamped);
    }

    /// Scroll so the section's top row is at the top of the viewport.
    /// Unknown targets (nothing measured yet) are a silent no-op.
    pub fn scroll_to(&mut self, id: SectionId) {
        let Some((_, bounds)) = self.geometry.iter().find(|(sid, _)| *sid == id) else {
            return;
        };
        let top = bounds.top;
        tracing::debug!(section = id.slug(), row = top, "scrolling to section");
        self.navbar.close_menu();
        self.set_offset(top);
    }

    /// Recompute every scroll-derived value. Safe to call repeatedly;
    /// each update is idempotent.
    fn sync_derived(&mut self) {
        let was_active = self.tracker.active_section();
        self.tracker.on_scroll(self.offset, &self.geometry);
        let active = self.tracker.active_section();
        if active != was_active {
            tracing::debug!(section = active.slug(), "active section changed");
        }

        let viewport_rows = u32::from(self.viewport.1);
        let geometry = &self.geometry;
        let offset = self.offset;
        for section in self.sections.each_mut() {
            if let Some((_, bounds)) = geometry.iter().find(|(id, _)| *id == section.id()) {
                section.observe(bounds.visible_ratio(offset, viewport_rows));
            }
        }
    }

    pub fn on_tick(&mut self, dt: Duration) {
        for section in self.sections.each_mut() {
            section.on_tick(dt);
        }
        self.sync_derived();
    }

    pub fn handle_event(&mut self, event: &Event) {
        // Overlays first, in stacking order. The detail view swallowing
        // scroll input is the page-scroll lock.
        if self.help.handle_event(event) {
            return;
        }
        if self.detail.handle_event(event) {
            return;
        }
        if self.theme_modal.handle_event(event) {
            return;
        }

        if let Event::Key(key) = event {
            if self.sections.contact.form.is_focused()
                && self.sections.contact.form.handle_key(key)
            {
                return;
            }
        }

        if self.navbar.handle_event(event) {
            self.apply_nav_actions();
            return;
        }
        if self.theme_toggle.handle_event(event) {
            if self.theme_toggle.take_clicked() {
                self.theme_modal.open();
            }
            return;
        }

        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_page_key(key),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => self.scroll_by(i64::from(WHEEL_SCROLL_STEP)),
                MouseEventKind::ScrollUp => self.scroll_by(-i64::from(WHEEL_SCROLL_STEP)),
                _ => {}
            },
            _ => {}
        }
    }

    fn handle_page_key(&mut self, key: &KeyEvent) {
        let rows = i64::from(self.viewport.1);
        match key.code {
            KeyCode::Char('q') => self.should_exit = true,
            KeyCode::Char('?') => self.help.toggle(),
            KeyCode::Char('t') => self.theme_modal.open(),
            KeyCode::Char('w') => self.scroll_to(SectionId::Projects),
            KeyCode::Char('c') => {
                self.scroll_to(SectionId::Contact);
                self.sections.contact.form.focus();
            }
            KeyCode::Char('j') | KeyCode::Down => self.scroll_by(i64::from(KEY_SCROLL_STEP)),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_by(-i64::from(KEY_SCROLL_STEP)),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_by(rows),
            KeyCode::PageUp => self.scroll_by(-rows),
            KeyCode::Char('g') => self.set_offset(0),
            KeyCode::Char('G') => self.set_offset(self.max_offset()),
            KeyCode::Char('n') => self.scroll_to(self.tracker.active_section().next()),
            KeyCode::Char('p') => self.scroll_to(self.tracker.active_section().prev()),
            KeyCode::Char(c @ '1'..='5') => {
                let index = usize::from(u8::try_from(c).unwrap_or(b'1') - b'1');
                if let Some(id) = SectionId::ALL.get(index) {
                    self.scroll_to(*id);
                }
            }
            KeyCode::Right if self.tracker.active_section() == SectionId::Projects => {
                self.sections.projects.select_next();
            }
            KeyCode::Left if self.tracker.active_section() == SectionId::Projects => {
                self.sections.projects.select_prev();
            }
            KeyCode::Enter if self.tracker.active_section() == SectionId::Projects => {
                self.detail.open(self.sections.projects.selected());
            }
            _ => {}
        }
    }

    fn apply_nav_actions(&mut self) {
        for action in self.navbar.take_actions() {
            match action {
                NavAction::Goto(id) => self.scroll_to(id),
                NavAction::OpenThemeModal => self.theme_modal.open(),
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyModifiers, MouseEvent};
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::theme::{ThemeRegistry, ThemeScope, ThemeStore};
    use crate::tui::sections::Section;
    use crate::tui::ui;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app_with_frame(width: u16, height: u16) -> (ThemeStore, App) {
        let store = ThemeStore::new(ThemeRegistry::builtin());
        let _scope = ThemeScope::enter(&store);
        let mut app = App::new();
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| ui::render(frame, &mut app)).unwrap();
        (store, app)
    }

    #[test]
    fn scroll_to_without_geometry_is_a_no_op() {
        let store = ThemeStore::new(ThemeRegistry::builtin());
        let _scope = ThemeScope::enter(&store);
        let mut app = App::new();
        app.scroll_to(SectionId::Contact);
        assert_eq!(app.offset(), 0);
    }

    #[test]
    fn is_scrolled_follows_the_row_threshold_both_ways() {
        let (_store, mut app) = app_with_frame(100, 30);
        app.scroll_by(3);
        assert!(app.tracker().is_scrolled());
        app.scroll_by(-3);
        assert!(!app.tracker().is_scrolled());
    }

    #[test]
    fn jumping_to_a_section_activates_it() {
        let (_store, mut app) = app_with_frame(100, 30);
        app.scroll_to(SectionId::Skills);
        assert_eq!(app.tracker().active_section(), SectionId::Skills);
    }

    #[test]
    fn detail_view_locks_page_scroll_until_closed() {
        let (_store, mut app) = app_with_frame(100, 30);
        app.scroll_to(SectionId::Projects);
        let offset = app.offset();

        app.handle_event(&key(KeyCode::Enter));
        assert!(app.detail.is_open());
        app.handle_event(&key(KeyCode::Down));
        app.handle_event(&key(KeyCode::PageDown));
        assert_eq!(app.offset(), offset);

        app.handle_event(&key(KeyCode::Esc));
        assert!(!app.detail.is_open());
        app.handle_event(&key(KeyCode::Down));
        assert_eq!(app.offset(), offset + KEY_SCROLL_STEP);
    }

    #[test]
    fn theme_switch_from_the_modal_reaches_the_store() {
        let (store, mut app) = app_with_frame(100, 30);
        app.handle_event(&key(KeyCode::Char('t')));
        assert!(app.theme_modal.is_open());
        app.handle_event(&key(KeyCode::Down));
        app.handle_event(&key(KeyCode::Enter));
        assert!(!app.theme_modal.is_open());
        assert_eq!(store.active().name, "Ocean Blue");
    }

    #[test]
    fn contact_shortcut_scrolls_and_focuses_the_form() {
        let (_store, mut app) = app_with_frame(100, 30);
        app.handle_event(&key(KeyCode::Char('c')));
        assert_eq!(app.tracker().active_section(), SectionId::Contact);
        assert!(app.sections.contact.form.is_focused());

        // Typed characters now go to the form, not page shortcuts.
        app.handle_event(&key(KeyCode::Char('q')));
        assert!(!app.should_exit());
        assert_eq!(
            app.sections.contact.form.field(crate::tui::sections::FormField::Name),
            "q"
        );
    }

    #[test]
    fn wheel_scrolling_moves_the_page() {
        let (_store, mut app) = app_with_frame(100, 30);
        let event = Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 10,
            row: 10,
            modifiers: KeyModifiers::NONE,
        });
        app.handle_event(&event);
        assert_eq!(app.offset(), WHEEL_SCROLL_STEP);
    }

    #[test]
    fn scrolling_to_the_bottom_reveals_later_sections() {
        let (_store, mut app) = app_with_frame(100, 40);
        assert!(!app.sections.contact.is_revealed());
        app.handle_event(&key(KeyCode::Char('G')));
        assert!(app.sections.contact.is_revealed());
    }
}
