//! Fixed top navigation bar with compact-menu and theme entry points.

use std::mem;

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::{contains, hit, ClickRegion, ClickTarget, Component};
use crate::{
    content::PROFILE,
    theme::{ThemeHandle, ThemeStore},
    tui::paint,
    viewport::SectionId,
};

/// Terminal width below which the links collapse behind the menu toggle.
pub const COMPACT_BREAKPOINT: u16 = 70;

/// Effects the navigation bar asks the shell to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Goto(SectionId),
    OpenThemeModal,
}

pub struct NavBar {
    store: ThemeStore,
    is_scrolled: bool,
    active: SectionId,
    compact: bool,
    menu_open: bool,
    regions: Vec<ClickRegion>,
    menu_panel: Option<Rect>,
    toggle_button: Option<Rect>,
    actions: Vec<NavAction>,
}

impl NavBar {
    /// Resolves the theme store from the current [`crate::theme::ThemeScope`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: ThemeHandle::current(),
            is_scrolled: false,
            active: SectionId::Home,
            compact: false,
            menu_open: false,
            regions: Vec::new(),
            menu_panel: None,
            toggle_button: None,
            actions: Vec::new(),
        }
    }

    /// Feed the scroll-derived state before rendering.
    pub fn set_state(&mut self, is_scrolled: bool, active: SectionId) {
        self.is_scrolled = is_scrolled;
        self.active = active;
    }

    #[must_use]
    pub const fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Close the compact menu; navigation actions do this as a side
    /// effect.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Drain the actions queued by input handling.
    pub fn take_actions(&mut self) -> Vec<NavAction> {
        mem::take(&mut self.actions)
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> bool {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }
        let (x, y) = (mouse.column, mouse.row);

        if let Some(target) = hit(&self.regions, x, y) {
            match target {
                ClickTarget::NavItem(id) => {
                    self.actions.push(NavAction::Goto(id));
                    self.menu_open = false;
                }
                ClickTarget::MenuToggle => self.menu_open = !self.menu_open,
                // Opening the theme modal leaves the menu flag alone;
                // the overlay merely occludes it.
                ClickTarget::ThemeButton => self.actions.push(NavAction::OpenThemeModal),
                _ => return false,
            }
            return true;
        }

        // Outside pointer-down closes the menu but is not consumed.
        if self.menu_open && !self.hits_menu_chrome(x, y) {
            self.menu_open = false;
        }
        false
    }

    fn hits_menu_chrome(&self, x: u16, y: u16) -> bool {
        let inside = |rect: Option<Rect>| rect.is_some_and(|r| contains(r, x, y));
        inside(self.menu_panel) || inside(self.toggle_button)
    }

    fn render_bar(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.store.active();
        let bar = Rect::new(area.x, area.y, area.width, 1);

        if self.is_scrolled {
            // Scrolled chrome: surface background plus a bottom rule.
            let chrome = Style::new().bg(theme.surface.color());
            frame.render_widget(Block::new().style(chrome), bar);
            let rule = Rect::new(area.x, area.y + 1, area.width, 1);
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    "─".repeat(usize::from(area.width)),
                    Style::new().fg(theme.primary.color()),
                ))),
                rule,
            );
        }

        let mut x = area.x + 1;
        let logo = paint::gradient_line(&format!("[{}]", PROFILE.initials), theme.gradient, true);
        let logo_width = u16::try_from(PROFILE.initials.len() + 2).unwrap_or(u16::MAX);
        frame.render_widget(Paragraph::new(logo), Rect::new(x, area.y, logo_width, 1));
        x += logo_width + 2;

        if self.compact {
            self.render_compact_buttons(frame, area, theme.primary.color());
        } else {
            self.render_links(frame, area, &mut x);
            self.render_theme_button(frame, area, area.width.saturating_sub(4));
        }
    }

    fn render_links(&mut self, frame: &mut Frame, area: Rect, x: &mut u16) {
        let theme = self.store.active();
        for id in SectionId::ALL {
            let label = id.label();
            let width = u16::try_from(label.len()).unwrap_or(u16::MAX);
            let style = if id == self.active {
                Style::new()
                    .fg(theme.primary.color())
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::new().fg(theme.text_secondary.color())
            };
            let rect = Rect::new(*x, area.y, width, 1);
            frame.render_widget(Paragraph::new(Line::from(Span::styled(label, style))), rect);
            self.regions.push(ClickRegion {
                area: rect,
                target: ClickTarget::NavItem(id),
            });
            *x += width + 2;
        }
    }

    fn render_theme_button(&mut self, frame: &mut Frame, area: Rect, x: u16) {
        let theme = self.store.active();
        let rect = Rect::new(x, area.y, 3, 1);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "[⚙]",
                Style::new().fg(theme.primary.color()),
            ))),
            rect,
        );
        self.regions.push(ClickRegion {
            area: rect,
            target: ClickTarget::ThemeButton,
        });
    }

    fn render_compact_buttons(&mut self, frame: &mut Frame, area: Rect, fg: Color) {
        self.render_theme_button(frame, area, area.width.saturating_sub(8));

        let toggle = Rect::new(area.width.saturating_sub(4), area.y, 3, 1);
        let glyph = if self.menu_open { "[✕]" } else { "[≡]" };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(glyph, Style::new().fg(fg)))),
            toggle,
        );
        self.regions.push(ClickRegion {
            area: toggle,
            target: ClickTarget::MenuToggle,
        });
        self.toggle_button = Some(toggle);
    }

    fn render_menu_panel(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.store.active();
        let width = 22u16.min(area.width);
        let height = u16::try_from(SectionId::ALL.len() + 2).unwrap_or(u16::MAX);
        let panel = Rect::new(
            area.width.saturating_sub(width + 1),
            area.y + 2,
            width,
            height,
        )
        .intersection(area);
        if panel.height < 3 {
            return;
        }
        frame.render_widget(Clear, panel);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::new().fg(theme.primary.color()))
            .style(Style::new().bg(theme.surface.color()));
        let inner = block.inner(panel);
        frame.render_widget(block, panel);

        for (row, id) in SectionId::ALL.into_iter().enumerate() {
            let style = if id == self.active {
                Style::new()
                    .fg(theme.primary.color())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::new().fg(theme.text_secondary.color())
            };
            let rect = Rect::new(
                inner.x,
                inner.y + u16::try_from(row).unwrap_or(u16::MAX),
                inner.width,
                1,
            );
            if rect.y >= inner.y + inner.height {
                break;
            }
            frame.render_widget(Paragraph::new(Line::from(Span::styled(id.label(), style))), rect);
            self.regions.push(ClickRegion {
                area: rect,
                target: ClickTarget::NavItem(id),
            });
        }
        self.menu_panel = Some(panel);
    }
}

impl Default for NavBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for NavBar {
    fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if key.code == KeyCode::Char('m') && self.compact {
                    self.menu_open = !self.menu_open;
                    return true;
                }
                false
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => false,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.regions.clear();
        self.menu_panel = None;
        self.toggle_button = None;
        self.compact = area.width < COMPACT_BREAKPOINT;
        if !self.compact {
            self.menu_open = false;
        }

        self.render_bar(frame, area);
        if self.compact && self.menu_open {
            self.render_menu_panel(frame, area);
        }
    }

    fn click_regions(&self) -> &[ClickRegion] {
        &self.regions
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::theme::{ThemeRegistry, ThemeScope, ThemeStore};

    fn mouse_down(x: u16, y: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn drawn_navbar(width: u16) -> NavBar {
        let store = ThemeStore::new(ThemeRegistry::builtin());
        let _scope = ThemeScope::enter(&store);
        let mut navbar = NavBar::new();
        let mut terminal = Terminal::new(TestBackend::new(width, 30)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                navbar.render(frame, area);
            })
            .unwrap();
        navbar
    }

    fn redraw(navbar: &mut NavBar, width: u16) {
        let mut terminal = Terminal::new(TestBackend::new(width, 30)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                navbar.render(frame, area);
            })
            .unwrap();
    }

    #[test]
    fn wide_terminals_expose_all_links() {
        let navbar = drawn_navbar(100);
        let nav_items = navbar
            .click_regions()
            .iter()
            .filter(|r| matches!(r.target, ClickTarget::NavItem(_)))
            .count();
        assert_eq!(nav_items, SectionId::ALL.len());
        assert!(!navbar.compact);
    }

    #[test]
    fn clicking_a_link_queues_navigation_and_closes_menu() {
        let mut navbar = drawn_navbar(60);
        let toggle = navbar.toggle_button.unwrap();
        assert!(navbar.handle_event(&mouse_down(toggle.x, toggle.y)));
        assert!(navbar.menu_open());
        redraw(&mut navbar, 60);

        let item = navbar
            .click_regions()
            .iter()
            .find(|r| r.target == ClickTarget::NavItem(SectionId::Skills))
            .copied()
            .unwrap();
        assert!(navbar.handle_event(&mouse_down(item.area.x, item.area.y)));
        assert_eq!(navbar.take_actions(), [NavAction::Goto(SectionId::Skills)]);
        assert!(!navbar.menu_open());
    }

    #[test]
    fn outside_pointer_down_closes_menu_without_consuming() {
        let mut navbar = drawn_navbar(60);
        let toggle = navbar.toggle_button.unwrap();
        navbar.handle_event(&mouse_down(toggle.x, toggle.y));
        redraw(&mut navbar, 60);
        assert!(navbar.menu_open());

        // Far away from the panel and the toggle.
        assert!(!navbar.handle_event(&mouse_down(2, 20)));
        assert!(!navbar.menu_open());
    }

    #[test]
    fn inside_pointer_down_keeps_menu_open() {
        let mut navbar = drawn_navbar(60);
        let toggle = navbar.toggle_button.unwrap();
        navbar.handle_event(&mouse_down(toggle.x, toggle.y));
        redraw(&mut navbar, 60);

        let panel = navbar.menu_panel.unwrap();
        // The panel border itself is inside the menu chrome but not a
        // link region.
        navbar.handle_event(&mouse_down(panel.x, panel.y));
        assert!(navbar.menu_open());
    }

    #[test]
    fn theme_button_queues_modal_without_closing_menu() {
        let mut navbar = drawn_navbar(60);
        let toggle = navbar.toggle_button.unwrap();
        navbar.handle_event(&mouse_down(toggle.x, toggle.y));
        redraw(&mut navbar, 60);

        let button = navbar
            .click_regions()
            .iter()
            .find(|r| r.target == ClickTarget::ThemeButton)
            .copied()
            .unwrap();
        assert!(navbar.handle_event(&mouse_down(button.area.x, button.area.y)));
        assert_eq!(navbar.take_actions(), [NavAction::OpenThemeModal]);
        assert!(navbar.menu_open());
    }
}
