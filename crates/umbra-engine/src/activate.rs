//! Theme activation and reset.
//!
//! The activator prefers a page's own theming mechanism over direct style
//! injection: site-authored theme logic typically also updates images,
//! shadows, and nested component colors, which a full-page overwrite never
//! can. Mechanisms are tried in a fixed precedence order (attribute,
//! class, variable) and the first that takes effect wins; a page with no
//! native mechanism gets fallback styling instead.
//!
//! Reset is unconditional cleanup across every mechanism plus the fallback
//! path, so the activator never needs to remember which branch it took.

use tracing::{debug, warn};

use crate::color::{is_unstyled, Color};
use crate::colorspace::adjust_brightness;
use crate::detect::{
    CapabilityReport, DARK_CLASSES, DEFAULT_THEME_ATTRIBUTE, LIGHT_CLASSES, THEME_ATTRIBUTES,
};
use crate::mode::ColorMode;
use crate::page::{props, ElementId, Page};
use crate::palette::Palette;
use crate::snapshot::StyleSnapshot;

/// Brightness shift applied to author-styled control colors, per mode.
const DARK_CONTROL_SHIFT: f64 = -60.0;
const LIGHT_CONTROL_SHIFT: f64 = 25.0;

/// How a theme was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppliedVia {
    /// A page-authored mechanism (attribute, class, or variable theming).
    Native,
    /// Direct style injection.
    Fallback,
}

/// Applies and reverses themes on a page surface.
///
/// Holds the session's cached [`CapabilityReport`], the startup
/// [`StyleSnapshot`], and the [`Palette`]; all are immutable for the
/// activator's lifetime. Applying the same mode twice is idempotent:
/// every derived color is computed from the snapshot, never from current
/// page state.
#[derive(Debug, Clone)]
pub struct Activator {
    report: CapabilityReport,
    snapshot: StyleSnapshot,
    palette: Palette,
}

impl Activator {
    /// Creates an activator from the session's detection report, snapshot,
    /// and palette.
    pub fn new(report: CapabilityReport, snapshot: StyleSnapshot, palette: Palette) -> Self {
        Self {
            report,
            snapshot,
            palette,
        }
    }

    /// The cached capability report.
    pub fn report(&self) -> &CapabilityReport {
        &self.report
    }

    /// The startup snapshot.
    pub fn snapshot(&self) -> &StyleSnapshot {
        &self.snapshot
    }

    /// The palette in use.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Applies a theme, preferring native mechanisms over fallback styling.
    pub fn activate(&self, page: &mut Page, mode: ColorMode) -> AppliedVia {
        if self.report.attribute_theming {
            self.set_attribute_theme(page, mode);
            debug!(mode = mode.canonical(), "applied via attribute theming");
            return AppliedVia::Native;
        }

        if self.report.class_theming {
            self.set_class_theme(page, mode);
            debug!(mode = mode.canonical(), "applied via class theming");
            return AppliedVia::Native;
        }

        if self.report.variable_theming && self.override_variables(page, mode) {
            debug!(mode = mode.canonical(), "applied via variable theming");
            return AppliedVia::Native;
        }

        debug!(mode = mode.canonical(), "no native mechanism, using fallback");
        self.apply_fallback(page, mode);
        AppliedVia::Fallback
    }

    /// Returns the page to its pre-modification appearance.
    ///
    /// Cleans up all three native mechanisms and the fallback styling
    /// regardless of which path actually applied the theme.
    pub fn reset(&self, page: &mut Page) {
        for attr in THEME_ATTRIBUTES {
            page.root_mut().remove_attribute(attr);
        }

        for class in DARK_CLASSES.iter().chain(LIGHT_CLASSES) {
            page.root_mut().remove_class(class);
            page.body_mut().remove_class(class);
        }

        for name in self.variable_names() {
            // Best effort: a sealed root style never accepted the override
            // in the first place.
            let _ = page.root_mut().inline_mut().remove(&name);
        }

        self.snapshot.restore(page);
        self.reset_controls(page);
        debug!("original page state restored");
    }

    /// Overwrites the first known theme attribute already on the root, or
    /// sets the default attribute when none survived since detection.
    fn set_attribute_theme(&self, page: &mut Page, mode: ColorMode) {
        for attr in THEME_ATTRIBUTES {
            if page.root().has_attribute(attr) {
                page.root_mut().set_attribute(attr, mode.canonical());
                return;
            }
        }
        page.root_mut()
            .set_attribute(DEFAULT_THEME_ATTRIBUTE, mode.canonical());
    }

    /// Swaps indicator classes on root and body.
    fn set_class_theme(&self, page: &mut Page, mode: ColorMode) {
        let (add, remove) = match mode {
            ColorMode::Dark => (DARK_CLASSES, LIGHT_CLASSES),
            ColorMode::Light => (LIGHT_CLASSES, DARK_CLASSES),
        };

        for class in remove {
            page.root_mut().remove_class(class);
            page.body_mut().remove_class(class);
        }
        for class in add {
            page.root_mut().add_class(class);
            page.body_mut().add_class(class);
        }
    }

    /// Writes the palette's custom-property overrides to the root.
    ///
    /// Returns `false` when the root's style is sealed, signaling the
    /// caller to fall through; properties written before the failure stay
    /// in place.
    fn override_variables(&self, page: &mut Page, mode: ColorMode) -> bool {
        for (name, value) in &self.palette.for_mode(mode).variables {
            if let Err(err) = page.root_mut().inline_mut().set(name, value) {
                warn!(error = %err, "variable theming failed, falling through");
                return false;
            }
        }
        true
    }

    /// Direct style injection: body colors plus secondary styling for the
    /// interactive controls.
    fn apply_fallback(&self, page: &mut Page, mode: ColorMode) {
        let colors = self.palette.for_mode(mode);
        let shift = match mode {
            ColorMode::Dark => DARK_CONTROL_SHIFT,
            ColorMode::Light => LIGHT_CONTROL_SHIFT,
        };

        {
            let body = page.body_mut().inline_mut();
            let _ = body.set(props::BACKGROUND, &colors.body_background);
            let _ = body.set(props::TEXT, &colors.body_text);
        }

        for index in 0..page.controls().len() {
            let captured = self
                .snapshot
                .get(ElementId::Control(index))
                .cloned()
                .unwrap_or_default();
            let inline = page.controls_mut()[index].element_mut().inline_mut();

            if is_unstyled(&captured.background) {
                let _ = inline.set(props::BACKGROUND, &colors.control_background);
                let _ = inline.set(props::TEXT, &colors.control_text);
                let _ = inline.set(props::BORDER, &colors.control_border);
            } else {
                // The control has an author-chosen background: shift its
                // brightness toward the mode instead of flattening it, and
                // take text from the palette for contrast.
                let shifted = adjust_brightness(Color::parse_lossy(&captured.background), shift);
                let _ = inline.set(props::BACKGROUND, &shifted.to_css());
                let _ = inline.set(props::TEXT, &colors.control_text);
            }
        }
    }

    /// Clears the inline overrides the fallback path may have written, so
    /// stylesheet-defined values re-take effect.
    fn reset_controls(&self, page: &mut Page) {
        for control in page.controls_mut() {
            let inline = control.element_mut().inline_mut();
            let _ = inline.set(props::BACKGROUND, "");
            let _ = inline.set(props::TEXT, "");
            let _ = inline.set(props::BORDER, "");
        }
    }

    /// Union of the custom-property names across both mode palettes.
    fn variable_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .palette
            .dark
            .variables
            .keys()
            .chain(self.palette.light.variables.keys())
            .cloned()
            .collect();
        names.sort();
        names.dedup();
        names
    }
}
