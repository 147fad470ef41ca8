use std::{error::Error as StdError, fmt, io, result::Result as StdResult};

#[derive(Debug, Clone)]
pub enum ThemeError {
    InvalidColor {
        theme: String,
        field: &'static str,
        value: String,
    },
    DuplicateKey(String),
    EmptyName(String),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor {
                theme,
                field,
                value,
            } => {
                write!(
                    f,
                    "theme {theme:?}: field {field:?} is not a #rrggbb color: {value:?}"
                )
            }
            Self::DuplicateKey(key) => {
                write!(f, "theme key {key:?} is already registered")
            }
            Self::EmptyName(key) => {
                write!(f, "theme {key:?} has an empty display name")
            }
        }
    }
}

impl StdError for ThemeError {}

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Json(serde_json::Error),
    Theme(ThemeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
            Self::Theme(e) => write!(f, "Theme error: {e}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Theme(e) => Some(e),
        }
    }
}

impl From<ThemeError> for Error {
    fn from(e: ThemeError) -> Self {
        Self::Theme(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

pub type Result<T> = StdResult<T, Error>;
