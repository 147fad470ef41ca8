//! Top-level frame rendering.

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    text::Text,
    widgets::{Block, Paragraph},
    Frame,
};

use super::{app::App, components::Component, page};

/// Render one frame: background, scrolled page, then chrome overlays.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    if area.width < 20 || area.height < 6 {
        return;
    }
    let theme = app.store().active();

    frame.render_widget(
        Block::default().style(
            Style::new()
                .bg(theme.background.color())
                .fg(theme.text.color()),
        ),
        area,
    );

    // The navbar draws over the top two rows; overlays may use the
    // whole frame.
    let [_nav_area, content_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).areas(area);

    app.set_viewport(content_area.width, content_area.height);
    let page = page::build(&mut app.sections, content_area.width, &theme);
    app.apply_page(&page);

    let scroll = u16::try_from(app.offset()).unwrap_or(u16::MAX);
    let paragraph = Paragraph::new(Text::from(page.lines)).scroll((scroll, 0));
    frame.render_widget(paragraph, content_area);

    let (is_scrolled, active) = (
        app.tracker().is_scrolled(),
        app.tracker().active_section(),
    );
    app.navbar.set_state(is_scrolled, active);
    app.navbar.render(frame, area);
    app.theme_toggle.render(frame, area);

    app.theme_modal.render(frame, area);
    app.detail.render(frame, area);
    app.help.render(frame, area);
}
