//! Shared paint helpers for sections and chrome.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::theme::{ColorTheme, Gradient};

/// Greedy word wrap. Words longer than `width` get a line of their own.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Text with each character colored along the gradient.
#[must_use]
pub fn gradient_line(text: &str, gradient: Gradient, bold: bool) -> Line<'static> {
    let chars: Vec<char> = text.chars().collect();
    let span_count = chars.len().max(1);
    let spans: Vec<Span<'static>> = chars
        .into_iter()
        .enumerate()
        .map(|(i, c)| {
            let t = if span_count == 1 {
                0.0
            } else {
                i as f64 / (span_count - 1) as f64
            };
            let mut style = Style::new().fg(gradient.at(t).color());
            if bold {
                style = style.add_modifier(Modifier::BOLD);
            }
            Span::styled(c.to_string(), style)
        })
        .collect();
    Line::from(spans)
}

/// Section heading: title in primary, then a short rule.
#[must_use]
pub fn heading(title: &str, theme: &ColorTheme) -> Vec<Line<'static>> {
    let title_style = Style::new()
        .fg(theme.primary.color())
        .add_modifier(Modifier::BOLD);
    vec![
        Line::from(Span::styled(title.to_owned(), title_style)),
        Line::from(Span::styled(
            "─".repeat(title.chars().count().min(24)),
            Style::new().fg(theme.primary.color()),
        )),
        Line::default(),
    ]
}

/// Horizontal meter: `####......` filled to `value` percent.
#[must_use]
pub fn meter(value: u8, width: usize, theme: &ColorTheme) -> Vec<Span<'static>> {
    let filled = (usize::from(value.min(100)) * width) / 100;
    vec![
        Span::styled(
            "█".repeat(filled),
            Style::new().fg(theme.primary.color()),
        ),
        Span::styled(
            "░".repeat(width - filled),
            Style::new().fg(theme.surface.color()),
        ),
    ]
}

/// Small color swatches for a theme entry.
#[must_use]
pub fn swatches(theme: &ColorTheme) -> Vec<Span<'static>> {
    [theme.primary, theme.secondary, theme.accent]
        .into_iter()
        .flat_map(|rgb| {
            [
                Span::styled("██", Style::new().fg(rgb.color())),
                Span::raw(" "),
            ]
        })
        .collect()
}

/// Blank rows standing in for not-yet-revealed content.
///
/// Unseen sections keep their exact height so a latch flip never moves
/// page geometry.
#[must_use]
pub fn blank_like(lines: &[Line<'static>]) -> Vec<Line<'static>> {
    lines.iter().map(|_| Line::default()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeRegistry;

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("one two three four five", 9);
        assert_eq!(lines, ["one two", "three", "four five"]);
        for line in &lines {
            assert!(line.len() <= 9);
        }
    }

    #[test]
    fn wrap_handles_degenerate_input() {
        assert_eq!(wrap("", 10), [""]);
        assert_eq!(wrap("overlong-word", 5), ["overlong-word"]);
    }

    #[test]
    fn meter_is_full_width() {
        let registry = ThemeRegistry::builtin();
        let theme = registry.get("purple").unwrap();
        for value in [0u8, 33, 100] {
            let spans = meter(value, 20, theme);
            let total: usize = spans.iter().map(|s| s.content.chars().count()).sum();
            assert_eq!(total, 20);
        }
    }

    #[test]
    fn blank_like_preserves_height() {
        let lines = vec![Line::from("a"), Line::from("b"), Line::from("c")];
        assert_eq!(blank_like(&lines).len(), 3);
    }
}
