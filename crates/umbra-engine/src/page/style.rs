//! Inline style declarations.

use std::collections::BTreeMap;
use std::fmt;

/// CSS property names the engine reads and writes.
pub mod props {
    /// Background color.
    pub const BACKGROUND: &str = "background-color";
    /// Text color.
    pub const TEXT: &str = "color";
    /// Border color.
    pub const BORDER: &str = "border-color";
}

/// Error raised when writing to a sealed style map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// The map rejects writes; the page froze its style object.
    Sealed {
        /// The property whose write was rejected.
        property: String,
    },
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleError::Sealed { property } => {
                write!(f, "cannot write '{}' to a sealed style", property)
            }
        }
    }
}

impl std::error::Error for StyleError {}

/// An element's inline style declarations.
///
/// A map may be sealed, after which every write fails with
/// [`StyleError::Sealed`]. This models pages that freeze their style
/// objects; callers must treat a sealed write as a signal to use another
/// mechanism, not as a fault.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    declarations: BTreeMap<String, String>,
    sealed: bool,
}

impl StyleMap {
    /// Creates an empty, writable style map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the declared value for a property.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations.get(property).map(String::as_str)
    }

    /// Sets a declaration.
    ///
    /// An empty value clears the declaration, the same way assigning `""`
    /// to an inline style lets stylesheet rules re-take effect.
    pub fn set(&mut self, property: &str, value: &str) -> Result<(), StyleError> {
        if self.sealed {
            return Err(StyleError::Sealed {
                property: property.to_string(),
            });
        }
        if value.is_empty() {
            self.declarations.remove(property);
        } else {
            self.declarations
                .insert(property.to_string(), value.to_string());
        }
        Ok(())
    }

    /// Removes a declaration.
    pub fn remove(&mut self, property: &str) -> Result<(), StyleError> {
        if self.sealed {
            return Err(StyleError::Sealed {
                property: property.to_string(),
            });
        }
        self.declarations.remove(property);
        Ok(())
    }

    /// Seals the map; all subsequent writes fail.
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    /// Whether the map rejects writes.
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Whether the map holds no declarations.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Iterates over `(property, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
