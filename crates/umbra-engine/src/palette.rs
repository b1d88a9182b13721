//! Theme palettes: the colors written when the engine does the theming.
//!
//! A [`Palette`] carries one [`ModePalette`] per polarity. Each mode
//! defines the body colors and secondary control colors used by the
//! fallback path, plus the custom-property overrides written when a page
//! themes itself through CSS variables.
//!
//! The default palette is built in; custom palettes load from YAML:
//!
//! ```rust
//! use umbra_engine::Palette;
//!
//! let palette = Palette::from_yaml(r##"
//! dark:
//!   body_background: "#101418"
//!   body_text: "#e6e6e6"
//!   control_background: "#1f2933"
//!   control_text: "#f5f7fa"
//!   control_border: "#3e4c59"
//!   variables:
//!     "--background-color": "#101418"
//!     "--text-color": "#e6e6e6"
//! "##).unwrap();
//!
//! assert_eq!(palette.dark.body_background, "#101418");
//! // Modes left out of the document keep their defaults.
//! assert_eq!(palette.light.body_background, "#ffffff");
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::mode::ColorMode;

/// Error type for palette loading failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// YAML parse error.
    Parse {
        /// Error message from the YAML parser.
        message: String,
    },

    /// A palette entry is not a parseable color.
    InvalidColor {
        /// Dotted path of the offending field.
        field: String,
        /// The invalid value.
        value: String,
    },

    /// A variable override does not name a custom property.
    InvalidVariable {
        /// The offending variable name.
        name: String,
    },

    /// File loading error.
    Load {
        /// Error message from the file loader.
        message: String,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::Parse { message } => {
                write!(f, "failed to parse palette: {}", message)
            }
            PaletteError::InvalidColor { field, value } => {
                write!(f, "invalid color '{}' for '{}'", value, field)
            }
            PaletteError::InvalidVariable { name } => {
                write!(
                    f,
                    "variable '{}' must name a custom property (start with '--')",
                    name
                )
            }
            PaletteError::Load { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for PaletteError {}

/// Colors and custom-property overrides for one polarity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModePalette {
    /// Body background under fallback styling.
    pub body_background: String,
    /// Body text color under fallback styling.
    pub body_text: String,
    /// Secondary background for interactive controls.
    pub control_background: String,
    /// Secondary text color for interactive controls.
    pub control_text: String,
    /// Secondary border color for interactive controls.
    pub control_border: String,
    /// Custom-property overrides written to the root element.
    pub variables: BTreeMap<String, String>,
}

impl ModePalette {
    fn default_dark() -> Self {
        ModePalette {
            body_background: "#1a1a1a".to_string(),
            body_text: "#e0e0e0".to_string(),
            control_background: "#2d2d2d".to_string(),
            control_text: "#ffffff".to_string(),
            control_border: "#555555".to_string(),
            variables: vars(&[
                ("--background-color", "#1a1a1a"),
                ("--bg-color", "#1a1a1a"),
                ("--color-bg", "#1a1a1a"),
                ("--text-color", "#ffffff"),
                ("--color-text", "#ffffff"),
            ]),
        }
    }

    fn default_light() -> Self {
        ModePalette {
            body_background: "#ffffff".to_string(),
            body_text: "#333333".to_string(),
            control_background: "#f8f9fa".to_string(),
            control_text: "#333333".to_string(),
            control_border: "#dddddd".to_string(),
            variables: vars(&[
                ("--background-color", "#ffffff"),
                ("--bg-color", "#ffffff"),
                ("--color-bg", "#ffffff"),
                ("--text-color", "#333333"),
                ("--color-text", "#333333"),
            ]),
        }
    }
}

fn vars(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

/// Dark and light palettes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Palette applied in dark mode.
    #[serde(default = "ModePalette::default_dark")]
    pub dark: ModePalette,
    /// Palette applied in light mode.
    #[serde(default = "ModePalette::default_light")]
    pub light: ModePalette,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            dark: ModePalette::default_dark(),
            light: ModePalette::default_light(),
        }
    }
}

impl Palette {
    /// The palette for a polarity.
    pub fn for_mode(&self, mode: ColorMode) -> &ModePalette {
        match mode {
            ColorMode::Dark => &self.dark,
            ColorMode::Light => &self.light,
        }
    }

    /// Loads a palette from YAML content.
    ///
    /// Modes absent from the document keep their built-in defaults. Every
    /// color value must parse and every variable override must name a
    /// custom property.
    ///
    /// # Errors
    ///
    /// Returns a [`PaletteError`] if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> Result<Self, PaletteError> {
        let palette: Palette = serde_yaml::from_str(yaml).map_err(|err| PaletteError::Parse {
            message: err.to_string(),
        })?;
        palette.validate()?;
        Ok(palette)
    }

    /// Loads a palette from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns a [`PaletteError`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PaletteError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|err| PaletteError::Load {
            message: format!("failed to read {}: {}", path.display(), err),
        })?;
        Self::from_yaml(&content)
    }

    fn validate(&self) -> Result<(), PaletteError> {
        for (mode, palette) in [("dark", &self.dark), ("light", &self.light)] {
            let fields = [
                ("body_background", &palette.body_background),
                ("body_text", &palette.body_text),
                ("control_background", &palette.control_background),
                ("control_text", &palette.control_text),
                ("control_border", &palette.control_border),
            ];
            for (field, value) in fields {
                check_color(&format!("{}.{}", mode, field), value)?;
            }
            for (name, value) in &palette.variables {
                if !name.starts_with("--") {
                    return Err(PaletteError::InvalidVariable { name: name.clone() });
                }
                check_color(&format!("{}.variables.{}", mode, name), value)?;
            }
        }
        Ok(())
    }
}

fn check_color(field: &str, value: &str) -> Result<(), PaletteError> {
    Color::parse(value)
        .map(|_| ())
        .map_err(|_| PaletteError::InvalidColor {
            field: field.to_string(),
            value: value.to_string(),
        })
}
