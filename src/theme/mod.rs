//! Color themes: palette values, the ordered registry and the store
//! that broadcasts the active theme.

mod loader;
mod scope;
mod store;

use std::fmt;

pub use loader::{default_themes_path, load_themes_file};
use ratatui::style::Color;
pub use scope::{ThemeHandle, ThemeScope};
pub use store::{StyleVars, Subscription, ThemeStore};

use crate::error::ThemeError;

/// Key of the theme every run starts on.
pub const DEFAULT_KEY: &str = "purple";

/// An RGB color, independent of the rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` string.
    pub fn parse(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Backend color for rendering.
    #[must_use]
    pub const fn color(self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }

    /// Linear interpolation towards `other` at `t` in `0.0..=1.0`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t) as u8;
        Self {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Two-color linear gradient, sampled per character column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub start: Rgb,
    pub end: Rgb,
}

impl Gradient {
    pub const fn new(start: Rgb, end: Rgb) -> Self {
        Self { start, end }
    }

    /// Color at position `t` in `0.0..=1.0` along the gradient.
    #[must_use]
    pub fn at(self, t: f64) -> Rgb {
        self.start.lerp(self.end, t)
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "linear({}, {})", self.start, self.end)
    }
}

/// A named, immutable palette. Every field is always populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTheme {
    pub name: String,
    pub primary: Rgb,
    pub secondary: Rgb,
    pub accent: Rgb,
    pub background: Rgb,
    pub surface: Rgb,
    pub text: Rgb,
    pub text_secondary: Rgb,
    pub gradient: Gradient,
    pub gradient_hover: Gradient,
}

/// Ordered mapping from short stable key to [`ColorTheme`].
///
/// Registration order is preserved; it is the order selection UI
/// enumerates. Keys are identifiers, distinct from display names.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    entries: Vec<(String, ColorTheme)>,
}

impl ThemeRegistry {
    /// Registry holding only the five built-in themes.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: builtin_themes(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&ColorTheme> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, theme)| theme)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Append a theme. Keys must be unique across the registry.
    pub fn register(&mut self, key: String, theme: ColorTheme) -> Result<(), ThemeError> {
        if theme.name.is_empty() {
            return Err(ThemeError::EmptyName(key));
        }
        if self.contains(&key) {
            return Err(ThemeError::DuplicateKey(key));
        }
        self.entries.push((key, theme));
        Ok(())
    }

    /// Themes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorTheme)> {
        self.entries.iter().map(|(k, t)| (k.as_str(), t))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_themes() -> Vec<(String, ColorTheme)> {
    let theme = |name: &str,
                 primary,
                 secondary,
                 accent,
                 background,
                 surface,
                 text_secondary,
                 gradient,
                 gradient_hover| ColorTheme {
        name: name.to_owned(),
        primary,
        secondary,
        accent,
        background,
        surface,
        text: Rgb::new(0xff, 0xff, 0xff),
        text_secondary,
        gradient,
        gradient_hover,
    };

    vec![
        (
            "purple".to_owned(),
            theme(
                "Purple Dream",
                Rgb::new(0x93, 0x33, 0xea), // #9333ea
                Rgb::new(0x06, 0xb6, 0xd4), // #06b6d4
                Rgb::new(0xec, 0x48, 0x99), // #ec4899
                Rgb::new(0x11, 0x18, 0x27), // #111827
                Rgb::new(0x1f, 0x29, 0x37), // #1f2937
                Rgb::new(0x9c, 0xa3, 0xaf), // #9ca3af
                Gradient::new(Rgb::new(0x93, 0x33, 0xea), Rgb::new(0x06, 0xb6, 0xd4)),
                Gradient::new(Rgb::new(0x7c, 0x3a, 0xed), Rgb::new(0x08, 0x91, 0xb2)),
            ),
        ),
        (
            "blue".to_owned(),
            theme(
                "Ocean Blue",
                Rgb::new(0x3b, 0x82, 0xf6), // #3b82f6
                Rgb::new(0x10, 0xb9, 0x81), // #10b981
                Rgb::new(0xf5, 0x9e, 0x0b), // #f59e0b
                Rgb::new(0x0f, 0x17, 0x2a), // #0f172a
                Rgb::new(0x1e, 0x29, 0x3b), // #1e293b
                Rgb::new(0x94, 0xa3, 0xb8), // #94a3b8
                Gradient::new(Rgb::new(0x3b, 0x82, 0xf6), Rgb::new(0x10, 0xb9, 0x81)),
                Gradient::new(Rgb::new(0x25, 0x63, 0xeb), Rgb::new(0x05, 0x96, 0x69)),
            ),
        ),
        (
            "green".to_owned(),
            theme(
                "Forest Green",
                Rgb::new(0x22, 0xc5, 0x5e), // #22c55e
                Rgb::new(0xa8, 0x55, 0xf7), // #a855f7
                Rgb::new(0xfb, 0x92, 0x3c), // #fb923c
                Rgb::new(0x14, 0x14, 0x14), // #141414
                Rgb::new(0x26, 0x26, 0x26), // #262626
                Rgb::new(0xa3, 0xa3, 0xa3), // #a3a3a3
                Gradient::new(Rgb::new(0x22, 0xc5, 0x5e), Rgb::new(0xa8, 0x55, 0xf7)),
                Gradient::new(Rgb::new(0x16, 0xa3, 0x4a), Rgb::new(0x93, 0x33, 0xea)),
            ),
        ),
        (
            "red".to_owned(),
            theme(
                "Crimson Fire",
                Rgb::new(0xef, 0x44, 0x44), // #ef4444
                Rgb::new(0xf5, 0x65, 0x65), // #f56565
                Rgb::new(0xfb, 0xbf, 0x24), // #fbbf24
                Rgb::new(0x17, 0x17, 0x17), // #171717
                Rgb::new(0x28, 0x28, 0x28), // #282828
                Rgb::new(0x9c, 0xa3, 0xaf), // #9ca3af
                Gradient::new(Rgb::new(0xef, 0x44, 0x44), Rgb::new(0xf5, 0x65, 0x65)),
                Gradient::new(Rgb::new(0xdc, 0x26, 0x26), Rgb::new(0xef, 0x44, 0x44)),
            ),
        ),
        (
            "orange".to_owned(),
            theme(
                "Sunset Orange",
                Rgb::new(0xf9, 0x73, 0x16), // #f97316
                Rgb::new(0xec, 0x48, 0x99), // #ec4899
                Rgb::new(0xa8, 0x55, 0xf7), // #a855f7
                Rgb::new(0x12, 0x12, 0x12), // #121212
                Rgb::new(0x23, 0x23, 0x23), // #232323
                Rgb::new(0xa3, 0xa3, 0xa3), // #a3a3a3
                Gradient::new(Rgb::new(0xf9, 0x73, 0x16), Rgb::new(0xec, 0x48, 0x99)),
                Gradient::new(Rgb::new(0xea, 0x58, 0x0c), Rgb::new(0xdb, 0x27, 0x77)),
            ),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(Rgb::parse("#9333ea"), Some(Rgb::new(0x93, 0x33, 0xea)));
        assert_eq!(Rgb::parse("#FFFFFF"), Some(Rgb::new(0xff, 0xff, 0xff)));
        assert_eq!(Rgb::parse("9333ea"), None);
        assert_eq!(Rgb::parse("#9333e"), None);
        assert_eq!(Rgb::parse("#9333egg"), None);
        assert_eq!(Rgb::parse("#gggggg"), None);
    }

    #[test]
    fn formats_hex_lowercase() {
        assert_eq!(Rgb::new(0x93, 0x33, 0xea).to_string(), "#9333ea");
    }

    #[test]
    fn gradient_endpoints_and_midpoint() {
        let g = Gradient::new(Rgb::new(0, 0, 0), Rgb::new(200, 100, 50));
        assert_eq!(g.at(0.0), Rgb::new(0, 0, 0));
        assert_eq!(g.at(1.0), Rgb::new(200, 100, 50));
        assert_eq!(g.at(0.5), Rgb::new(100, 50, 25));
    }

    #[test]
    fn builtin_registry_order_is_stable() {
        let registry = ThemeRegistry::builtin();
        let keys: Vec<&str> = registry.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["purple", "blue", "green", "red", "orange"]);
    }

    #[test]
    fn builtin_names_match_keys() {
        let registry = ThemeRegistry::builtin();
        assert_eq!(registry.get("purple").unwrap().name, "Purple Dream");
        assert_eq!(registry.get("blue").unwrap().name, "Ocean Blue");
        assert_eq!(registry.get("green").unwrap().name, "Forest Green");
        assert_eq!(registry.get("red").unwrap().name, "Crimson Fire");
        assert_eq!(registry.get("orange").unwrap().name, "Sunset Orange");
        assert!(registry.get("doesnotexist").is_none());
    }

    #[test]
    fn register_rejects_duplicate_keys() {
        let mut registry = ThemeRegistry::builtin();
        let theme = registry.get("purple").unwrap().clone();
        let err = registry.register("purple".to_owned(), theme).unwrap_err();
        assert!(matches!(err, ThemeError::DuplicateKey(k) if k == "purple"));
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn register_rejects_empty_names() {
        let mut registry = ThemeRegistry::builtin();
        let mut theme = registry.get("purple").unwrap().clone();
        theme.name = String::new();
        let err = registry.register("custom".to_owned(), theme).unwrap_err();
        assert!(matches!(err, ThemeError::EmptyName(k) if k == "custom"));
    }
}
