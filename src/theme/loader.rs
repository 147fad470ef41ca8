//! Optional user themes file extending the built-in registry.

use std::{fs, path::Path, path::PathBuf};

use serde::Deserialize;

use super::{ColorTheme, Gradient, Rgb};
use crate::error::{Result, ThemeError};

#[derive(Debug, Deserialize)]
struct ThemesFile {
    themes: Vec<ThemeEntry>,
}

#[derive(Debug, Deserialize)]
struct ThemeEntry {
    key: String,
    name: String,
    primary: String,
    secondary: String,
    accent: String,
    background: String,
    surface: String,
    text: String,
    text_secondary: String,
    gradient: GradientEntry,
    gradient_hover: GradientEntry,
}

#[derive(Debug, Deserialize)]
struct GradientEntry {
    start: String,
    end: String,
}

/// Default location of the user themes file, if a config directory
/// exists on this platform.
#[must_use]
pub fn default_themes_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("folio-tui").join("themes.json"))
}

/// Load extra registry entries from a JSON themes file.
///
/// The entries are returned in file order; the caller appends them to
/// the registry, which enforces key uniqueness.
pub fn load_themes_file(path: &Path) -> Result<Vec<(String, ColorTheme)>> {
    let raw = fs::read_to_string(path)?;
    let file: ThemesFile = serde_json::from_str(&raw)?;
    file.themes.into_iter().map(convert).collect()
}

fn convert(entry: ThemeEntry) -> Result<(String, ColorTheme)> {
    let color = |field: &'static str, value: &str| {
        Rgb::parse(value).ok_or_else(|| ThemeError::InvalidColor {
            theme: entry.key.clone(),
            field,
            value: value.to_owned(),
        })
    };

    let theme = ColorTheme {
        name: entry.name.clone(),
        primary: color("primary", &entry.primary)?,
        secondary: color("secondary", &entry.secondary)?,
        accent: color("accent", &entry.accent)?,
        background: color("background", &entry.background)?,
        surface: color("surface", &entry.surface)?,
        text: color("text", &entry.text)?,
        text_secondary: color("text_secondary", &entry.text_secondary)?,
        gradient: Gradient::new(
            color("gradient.start", &entry.gradient.start)?,
            color("gradient.end", &entry.gradient.end)?,
        ),
        gradient_hover: Gradient::new(
            color("gradient_hover.start", &entry.gradient_hover.start)?,
            color("gradient_hover.end", &entry.gradient_hover.end)?,
        ),
    };
    Ok((entry.key, theme))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::error::Error;
    use crate::theme::ThemeRegistry;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("folio-tui-loader-{name}.json"));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    const VALID: &str = r##"{
        "themes": [{
            "key": "mint",
            "name": "Mint Breeze",
            "primary": "#00c896",
            "secondary": "#0066ff",
            "accent": "#ffd166",
            "background": "#101418",
            "surface": "#1a2026",
            "text": "#ffffff",
            "text_secondary": "#8a949e",
            "gradient": { "start": "#00c896", "end": "#0066ff" },
            "gradient_hover": { "start": "#00a87e", "end": "#0052cc" }
        }]
    }"##;

    #[test]
    fn loads_and_extends_the_registry_after_builtins() {
        let path = write_temp("valid", VALID);
        let entries = load_themes_file(&path).unwrap();
        let mut registry = ThemeRegistry::builtin();
        for (key, theme) in entries {
            registry.register(key, theme).unwrap();
        }
        let keys: Vec<&str> = registry.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["purple", "blue", "green", "red", "orange", "mint"]);
        assert_eq!(registry.get("mint").unwrap().name, "Mint Breeze");
        fs::remove_file(path).ok();
    }

    #[test]
    fn malformed_color_is_a_theme_error() {
        let broken = VALID.replace("#00c896", "teal");
        let path = write_temp("badcolor", &broken);
        let err = load_themes_file(&path).unwrap_err();
        assert!(matches!(
            err,
            Error::Theme(ThemeError::InvalidColor { field: "primary", .. })
        ));
        fs::remove_file(path).ok();
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let path = write_temp("badjson", "{ not json");
        assert!(matches!(load_themes_file(&path).unwrap_err(), Error::Json(_)));
        fs::remove_file(path).ok();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("folio-tui-loader-definitely-missing.json");
        assert!(matches!(load_themes_file(&path).unwrap_err(), Error::Io(_)));
    }
}
