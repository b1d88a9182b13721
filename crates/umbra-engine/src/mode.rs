//! Theme mode types shared across the engine.
//!
//! [`ThemeMode`] is the command- and persistence-level mode: the three
//! choices a user can make (`dark`, `light`, `reset`). [`ColorMode`] is the
//! applied polarity; `reset` has none, it returns the page to its baseline.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The applied polarity of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Light mode (light background, dark text).
    Light,
    /// Dark mode (dark background, light text).
    Dark,
}

impl ColorMode {
    /// Canonical value written into native theme attributes.
    pub fn canonical(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    /// The opposite polarity.
    pub fn opposite(self) -> ColorMode {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }
}

/// A theme choice as commanded and persisted.
///
/// Serialized as `"dark"`, `"light"`, or `"reset"`: the values stored per
/// site and overwritten on each change.
///
/// # Example
///
/// ```rust
/// use umbra_engine::{ColorMode, ThemeMode};
///
/// assert_eq!(ThemeMode::Dark.color_mode(), Some(ColorMode::Dark));
/// assert_eq!(ThemeMode::Reset.color_mode(), None);
/// assert_eq!("light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Apply the dark theme.
    Dark,
    /// Apply the light theme.
    Light,
    /// Return to the page's original appearance.
    Reset,
}

impl ThemeMode {
    /// The polarity this mode applies, or `None` for [`Reset`](ThemeMode::Reset).
    pub fn color_mode(self) -> Option<ColorMode> {
        match self {
            ThemeMode::Dark => Some(ColorMode::Dark),
            ThemeMode::Light => Some(ColorMode::Light),
            ThemeMode::Reset => None,
        }
    }

    /// The persisted string form.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
            ThemeMode::Reset => "reset",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            "reset" => Ok(ThemeMode::Reset),
            other => Err(format!("unknown theme mode: '{}'", other)),
        }
    }
}
