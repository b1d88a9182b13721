//! # Umbra: Adaptive Dark/Light Theming for Third-Party Pages
//!
//! Umbra toggles a dark or light theme on pages it does not control and
//! remembers the choice per site. Rather than blindly repainting, it
//! prefers whatever theming mechanism the page already ships:
//!
//! 1. **Attribute theming**: a `data-theme`-style attribute on the root
//! 2. **Class theming**: `dark`/`light` indicator classes on root or body
//! 3. **Variable theming**: theme-related CSS custom properties
//! 4. **Fallback styling**: direct style injection when nothing native
//!    exists
//!
//! Site-authored theme logic usually restyles images, shadows, and nested
//! components too, so reusing it beats a crude full-page overwrite; the
//! fallback is the last resort. Reset reverses everything, restoring the
//! colors captured before the first modification.
//!
//! ## Core Concepts
//!
//! - [`Session`]: one explicit context object per page load (site key,
//!   page surface, cached capability report, startup snapshot, store
//! - [`ThemeCommand`] / [`Ack`]: the typed command surface; [`dispatch_raw`]
//!   accepts the raw JSON wire form
//! - [`ThemeStore`]: per-site persistence seam ([`MemoryStore`],
//!   [`JsonFileStore`])
//! - [`Palette`]: the colors written when Umbra does the theming itself
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use umbra::{MemoryStore, Page, Session, SessionConfig, ThemeCommand};
//!
//! let store = Arc::new(MemoryStore::new());
//! let mut session = Session::start(
//!     "example.com",
//!     Page::new(),
//!     store,
//!     SessionConfig::default(),
//! );
//!
//! let ack = session.handle(ThemeCommand::ApplyDark);
//! assert!(ack.success);
//! assert_eq!(
//!     session.page().body().computed("background-color"),
//!     Some("#1a1a1a"),
//! );
//! ```
//!
//! A later session for the same hostname re-applies the saved choice on
//! startup; see [`Session::start`].

pub mod adaptive;
pub mod dispatch;
pub mod session;

pub use adaptive::{detect_color_mode, set_mode_detector};
pub use dispatch::{dispatch_raw, Ack, ThemeCommand};
pub use session::{Session, SessionConfig};

pub use umbra_engine::{
    adjust_brightness, detect, is_unstyled, props, Activator, AppliedVia, CapabilityReport,
    CapturedColors, Color, ColorMode, Control, ControlKind, Element, ElementId, Hsl, ModePalette,
    Page, Palette, PaletteError, StyleError, StyleMap, StyleSnapshot, ThemeMode,
};
pub use umbra_store::{JsonFileStore, MemoryStore, SiteKey, StoreError, ThemeStore};
