//! Contact section: info rows, social links and the local-only form.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::Section;
use crate::{
    content::{CONTACT_DETAILS, CONTACT_INTRO, CONTACT_PITCH, SOCIAL_LINKS},
    fx::Delay,
    theme::ColorTheme,
    tui::paint,
    viewport::{SectionId, VisibilityLatch},
};

const THRESHOLD: f64 = 0.3;
/// The acknowledgment hides itself after this long.
const TOAST_DURATION: Duration = Duration::from_secs(3);
const FIELD_WIDTH: usize = 36;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    const fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email | Self::Message => Self::Message,
        }
    }

    const fn prev(self) -> Self {
        match self {
            Self::Name | Self::Email => Self::Name,
            Self::Message => Self::Email,
        }
    }
}

/// Local-only contact form.
///
/// All three fields are required; submission clears them, shows the
/// acknowledgment and hides it again after a fixed delay. Nothing is
/// sent anywhere.
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    focus: Option<FormField>,
    toast: Option<Delay>,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            focus: None,
            toast: None,
        }
    }

    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focus.is_some()
    }

    pub fn focus(&mut self) {
        self.focus = Some(FormField::Name);
    }

    pub fn blur(&mut self) {
        self.focus = None;
    }

    #[must_use]
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    /// Whether the acknowledgment is currently shown.
    #[must_use]
    pub const fn toast_visible(&self) -> bool {
        self.toast.is_some()
    }

    /// Required-field check and submission.
    ///
    /// Returns `true` when accepted. A rejected submission changes
    /// nothing.
    pub fn try_submit(&mut self) -> bool {
        let complete =
            !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty();
        if !complete {
            return false;
        }
        tracing::info!("contact form submitted");
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.toast = Some(Delay::new(TOAST_DURATION));
        self.focus = None;
        true
    }

    /// Advance the acknowledgment timer.
    pub fn advance(&mut self, dt: Duration) {
        if let Some(toast) = &mut self.toast {
            if toast.advance(dt) {
                self.toast = None;
            }
        }
    }

    /// Handle a key while the form has focus. Returns true if consumed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        let Some(field) = self.focus else {
            return false;
        };
        match key.code {
            KeyCode::Esc => self.blur(),
            KeyCode::Tab => self.focus = Some(field.next()),
            KeyCode::BackTab => self.focus = Some(field.prev()),
            KeyCode::Backspace => {
                self.field_mut(field).pop();
            }
            KeyCode::Enter => {
                if field == FormField::Message {
                    self.try_submit();
                } else {
                    self.focus = Some(field.next());
                }
            }
            KeyCode::Char(c) => self.field_mut(field).push(c),
            _ => {}
        }
        true
    }

    fn field_line(&self, field: FormField, theme: &ColorTheme) -> Line<'static> {
        let focused = self.focus == Some(field);
        let border = if focused {
            Style::new().fg(theme.primary.color())
        } else {
            Style::new().fg(theme.text_secondary.color())
        };
        let value = self.field(field);
        let shown: String = value
            .chars()
            .rev()
            .take(FIELD_WIDTH)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        let cursor = if focused { "▏" } else { "" };
        let pad = FIELD_WIDTH.saturating_sub(shown.chars().count() + cursor.len().min(1));

        Line::from(vec![
            Span::styled(format!("{:<9}", field.label()), border),
            Span::styled("[ ".to_owned(), border),
            Span::styled(shown, Style::new().fg(theme.text.color())),
            Span::styled(cursor, Style::new().fg(theme.primary.color())),
            Span::raw(" ".repeat(pad)),
            Span::styled(" ]".to_owned(), border),
        ])
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Contact {
    latch: VisibilityLatch,
    pub form: ContactForm,
}

impl Contact {
    #[must_use]
    pub fn new() -> Self {
        Self {
            latch: VisibilityLatch::new(THRESHOLD),
            form: ContactForm::new(),
        }
    }
}

impl Default for Contact {
    fn default() -> Self {
        Self::new()
    }
}

impl Section for Contact {
    fn id(&self) -> SectionId {
        SectionId::Contact
    }

    fn observe(&mut self, ratio: f64) {
        if self.latch.observe(ratio) {
            tracing::debug!(section = self.id().slug(), "section entered view");
        }
    }

    fn is_revealed(&self) -> bool {
        self.latch.is_seen()
    }

    fn on_tick(&mut self, dt: Duration) {
        self.form.advance(dt);
    }

    fn render_lines(&mut self, width: u16, theme: &ColorTheme) -> Vec<Line<'static>> {
        let secondary = Style::new().fg(theme.text_secondary.color());
        let text_width = usize::from(width).saturating_sub(4).clamp(16, 72);

        let mut lines = paint::heading("Get In Touch", theme);
        for row in paint::wrap(CONTACT_INTRO, text_width) {
            lines.push(Line::from(Span::styled(row, secondary)));
        }
        lines.push(Line::default());

        lines.push(Line::from(Span::styled(
            "Let's Connect",
            Style::new()
                .fg(theme.text.color())
                .add_modifier(Modifier::BOLD),
        )));
        for row in paint::wrap(CONTACT_PITCH, text_width) {
            lines.push(Line::from(Span::styled(row, secondary)));
        }
        lines.push(Line::default());

        for detail in &CONTACT_DETAILS {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {} ", detail.icon),
                    Style::new()
                        .fg(theme.text.color())
                        .bg(theme.primary.color()),
                ),
                Span::styled(format!(" {:<9}", detail.label), secondary),
                Span::styled(detail.value, Style::new().fg(theme.text.color())),
            ]));
        }
        lines.push(Line::default());

        let mut socials: Vec<Span<'static>> = vec![Span::styled("Follow me: ", secondary)];
        for (i, link) in SOCIAL_LINKS.iter().enumerate() {
            if i > 0 {
                socials.push(Span::styled("  ·  ", secondary));
            }
            socials.push(Span::styled(
                format!("{} {}", link.icon, link.label),
                Style::new().fg(theme.secondary.color()),
            ));
        }
        lines.push(Line::from(socials));
        lines.push(Line::default());

        lines.push(self.form.field_line(FormField::Name, theme));
        lines.push(self.form.field_line(FormField::Email, theme));
        lines.push(self.form.field_line(FormField::Message, theme));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            " ✈ Send Message ".to_owned(),
            Style::new()
                .fg(theme.text.color())
                .bg(theme.primary.color())
                .add_modifier(Modifier::BOLD),
        )));

        // The toast row is always reserved so the acknowledgment cannot
        // shift the form.
        let toast = if self.form.toast_visible() {
            Line::from(Span::styled(
                "✔ Thank you! Your message has been sent.",
                Style::new().fg(theme.secondary.color()),
            ))
        } else {
            Line::default()
        };
        lines.push(toast);
        lines.push(Line::default());

        if self.is_revealed() {
            lines
        } else {
            paint::blank_like(&lines)
        }
    }
}
