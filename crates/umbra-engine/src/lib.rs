//! # Umbra Engine: Adaptive Page Theming
//!
//! The core of Umbra: given a page surface, decide how to theme it, do the
//! theming, and reverse it losslessly. The engine:
//!
//! - detects whether the page already exposes a native theming mechanism
//!   (attribute, class, or CSS-variable based),
//! - activates that mechanism when present, in a fixed precedence order,
//! - falls back to direct style injection otherwise, and
//! - resets by cleaning up every mechanism and restoring the captured
//!   original colors.
//!
//! ## Core Concepts
//!
//! - [`Page`]: the in-memory document surface the engine mutates
//! - [`CapabilityReport`]: which native mechanisms [`detect`] found
//! - [`StyleSnapshot`]: pre-modification colors, captured once at startup
//! - [`Palette`]: the colors written when the engine does the theming
//! - [`Activator`]: applies a [`ColorMode`] and reports [`AppliedVia`]
//!
//! ## Quick Start
//!
//! A page with no native theming gets fallback styling:
//!
//! ```rust
//! use umbra_engine::{detect, Activator, AppliedVia, ColorMode, Page, Palette, StyleSnapshot};
//!
//! let mut page = Page::new();
//! let report = detect(&page);
//! let snapshot = StyleSnapshot::capture(&page);
//! let activator = Activator::new(report, snapshot, Palette::default());
//!
//! assert_eq!(activator.activate(&mut page, ColorMode::Dark), AppliedVia::Fallback);
//! assert_eq!(page.body().computed("background-color"), Some("#1a1a1a"));
//! ```
//!
//! A page that themes itself through an attribute keeps its own logic:
//!
//! ```rust
//! use umbra_engine::{detect, Activator, AppliedVia, ColorMode, Element, Page, Palette, StyleSnapshot};
//!
//! let mut page = Page::new().with_root(Element::new().with_attribute("data-theme", "light"));
//! let activator = Activator::new(detect(&page), StyleSnapshot::capture(&page), Palette::default());
//!
//! assert_eq!(activator.activate(&mut page, ColorMode::Dark), AppliedVia::Native);
//! assert_eq!(page.root().attribute("data-theme"), Some("dark"));
//! ```

pub mod activate;
pub mod color;
pub mod colorspace;
pub mod detect;
pub mod mode;
pub mod page;
pub mod palette;
pub mod snapshot;

pub use activate::{Activator, AppliedVia};
pub use color::{is_unstyled, Color};
pub use colorspace::{adjust_brightness, hsl_to_rgb, rgb_to_hsl, Hsl};
pub use detect::{detect, CapabilityReport};
pub use mode::{ColorMode, ThemeMode};
pub use page::{props, Control, ControlKind, Element, ElementId, Page, StyleError, StyleMap};
pub use palette::{ModePalette, Palette, PaletteError};
pub use snapshot::{CapturedColors, StyleSnapshot};
