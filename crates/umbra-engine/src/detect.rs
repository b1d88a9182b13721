//! Native theme support detection.
//!
//! Pages that ship their own theme switcher expose it through one of three
//! conventions: a theme attribute on the root element, light/dark indicator
//! classes, or theme-related CSS custom properties. Detection is a pure
//! read of the page surface, run once per session; the resulting
//! [`CapabilityReport`] is cached for the page's lifetime.
//!
//! Detection is permissive: any single match counts. A page with none of
//! the three mechanisms forces the activator's fallback path.

use crate::page::Page;

/// Theme-indicating attributes probed on the root element, in the order
/// the activator tries them.
pub const THEME_ATTRIBUTES: &[&str] = &[
    "data-theme",
    "data-color-scheme",
    "data-mode",
    "data-color-mode",
    "data-bs-theme",
];

/// Attribute set as a safe default when the capability is present but none
/// of the known attributes survived until activation.
pub const DEFAULT_THEME_ATTRIBUTE: &str = "data-theme";

/// Dark-indicating class names, applied to root and body.
pub const DARK_CLASSES: &[&str] = &["dark", "dark-mode", "theme-dark"];

/// Light-indicating class names, applied to root and body.
pub const LIGHT_CLASSES: &[&str] = &["light", "light-mode", "theme-light"];

/// Theme-related custom properties probed on the root element's computed
/// style.
pub const THEME_VARIABLES: &[&str] = &[
    "--primary-color",
    "--background-color",
    "--text-color",
    "--bg-color",
    "--color-bg",
];

/// Which native theming mechanisms a page supports.
///
/// Computed once at session start and never mutated afterward, even if the
/// page rewrites its own theming hooks mid-session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CapabilityReport {
    /// Root element carries a known theme attribute.
    pub attribute_theming: bool,
    /// Root or body carries a known light/dark indicator class.
    pub class_theming: bool,
    /// Root's computed style exposes a known theme custom property.
    pub variable_theming: bool,
}

impl CapabilityReport {
    /// Whether any native mechanism is available.
    pub fn any_native(&self) -> bool {
        self.attribute_theming || self.class_theming || self.variable_theming
    }
}

/// Inspects a page for native theming mechanisms.
pub fn detect(page: &Page) -> CapabilityReport {
    let report = CapabilityReport {
        attribute_theming: detect_attribute_theming(page),
        class_theming: detect_class_theming(page),
        variable_theming: detect_variable_theming(page),
    };
    tracing::debug!(?report, "native theme support detected");
    report
}

fn detect_attribute_theming(page: &Page) -> bool {
    THEME_ATTRIBUTES
        .iter()
        .any(|attr| page.root().has_attribute(attr))
}

fn detect_class_theming(page: &Page) -> bool {
    DARK_CLASSES
        .iter()
        .chain(LIGHT_CLASSES)
        .any(|class| page.root().has_class(class) || page.body().has_class(class))
}

fn detect_variable_theming(page: &Page) -> bool {
    THEME_VARIABLES.iter().any(|name| {
        page.root()
            .computed(name)
            .is_some_and(|value| !value.trim().is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Element;

    #[test]
    fn empty_page_has_no_native_support() {
        let report = detect(&Page::new());
        assert!(!report.attribute_theming);
        assert!(!report.class_theming);
        assert!(!report.variable_theming);
        assert!(!report.any_native());
    }

    #[test]
    fn detects_each_known_attribute() {
        for attr in THEME_ATTRIBUTES {
            let page = Page::new().with_root(Element::new().with_attribute(attr, "light"));
            assert!(detect(&page).attribute_theming, "missed {}", attr);
        }
    }

    #[test]
    fn unrelated_attribute_does_not_count() {
        let page = Page::new().with_root(Element::new().with_attribute("lang", "en"));
        assert!(!detect(&page).attribute_theming);
    }

    #[test]
    fn detects_classes_on_root_or_body() {
        let on_root = Page::new().with_root(Element::new().with_class("dark-mode"));
        assert!(detect(&on_root).class_theming);

        let on_body = Page::new().with_body(Element::new().with_class("theme-light"));
        assert!(detect(&on_body).class_theming);
    }

    #[test]
    fn detects_custom_properties_from_computed_style() {
        let page =
            Page::new().with_root(Element::new().with_base_style("--primary-color", "#336699"));
        assert!(detect(&page).variable_theming);
    }

    #[test]
    fn blank_custom_property_does_not_count() {
        let page = Page::new().with_root(Element::new().with_base_style("--bg-color", "  "));
        assert!(!detect(&page).variable_theming);
    }

    #[test]
    fn mechanisms_are_reported_independently() {
        let page = Page::new().with_root(
            Element::new()
                .with_attribute("data-theme", "light")
                .with_class("light"),
        );
        let report = detect(&page);
        assert!(report.attribute_theming);
        assert!(report.class_theming);
        assert!(!report.variable_theming);
        assert!(report.any_native());
    }
}
