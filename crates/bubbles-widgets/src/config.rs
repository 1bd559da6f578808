//! UI configuration read from the environment.
//!
//! - `NO_COLOR` (any value): ASCII borders and the high contrast palette
//! - `BUBBLES_THEME`: `mocha` (default), `latte` or `high-contrast`
//! - `BUBBLES_BORDERS`: `unicode` (default) or `ascii`
//!
//! Invalid values never fail construction; they are logged and the default
//! is used instead.

use std::str::FromStr;

use crate::theme::{BorderMode, BorderSet, Theme};

/// Environment variable selecting the color palette.
pub const THEME_VAR: &str = "BUBBLES_THEME";

/// Environment variable selecting the border glyphs.
pub const BORDERS_VAR: &str = "BUBBLES_BORDERS";

/// Errors that can occur when parsing UI configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown theme '{0}' (expected mocha, latte or high-contrast)")]
    UnknownTheme(String),

    #[error("unknown border mode '{0}' (expected unicode or ascii)")]
    UnknownBorderMode(String),
}

/// Named color palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeName {
    #[default]
    Mocha,
    Latte,
    HighContrast,
}

impl ThemeName {
    /// Build the palette for this name.
    pub fn theme(self) -> Theme {
        match self {
            Self::Mocha => Theme::mocha(),
            Self::Latte => Theme::latte(),
            Self::HighContrast => Theme::high_contrast(),
        }
    }
}

impl FromStr for ThemeName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mocha" => Ok(Self::Mocha),
            "latte" => Ok(Self::Latte),
            "high-contrast" | "high_contrast" => Ok(Self::HighContrast),
            _ => Err(ConfigError::UnknownTheme(s.to_string())),
        }
    }
}

impl FromStr for BorderMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unicode" => Ok(Self::Unicode),
            "ascii" => Ok(Self::Ascii),
            _ => Err(ConfigError::UnknownBorderMode(s.to_string())),
        }
    }
}

/// UI configuration shared by every widget a host creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiConfig {
    pub theme: ThemeName,
    pub border_mode: BorderMode,
}

impl UiConfig {
    /// Create config from the process environment.
    pub fn from_env() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some();
        let theme = std::env::var(THEME_VAR).ok();
        let borders = std::env::var(BORDERS_VAR).ok();
        Self::from_vars(no_color, theme.as_deref(), borders.as_deref())
    }

    /// Create config from already-read variable values.
    ///
    /// Explicit theme and border values win over `NO_COLOR`.
    pub fn from_vars(no_color: bool, theme: Option<&str>, borders: Option<&str>) -> Self {
        let mut config = if no_color {
            Self {
                theme: ThemeName::HighContrast,
                border_mode: BorderMode::Ascii,
            }
        } else {
            Self::default()
        };

        if let Some(value) = theme {
            match value.parse::<ThemeName>() {
                Ok(name) => config.theme = name,
                Err(e) => tracing::warn!(error = %e, "ignoring {THEME_VAR}"),
            }
        }

        if let Some(value) = borders {
            match value.parse::<BorderMode>() {
                Ok(mode) => config.border_mode = mode,
                Err(e) => tracing::warn!(error = %e, "ignoring {BORDERS_VAR}"),
            }
        }

        config
    }

    /// The configured palette.
    pub fn palette(&self) -> Theme {
        self.theme.theme()
    }

    /// The configured border glyphs.
    pub fn borders(&self) -> BorderSet {
        BorderSet::new(self.border_mode)
    }
}
