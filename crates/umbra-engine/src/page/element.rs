//! Elements: attributes, classes, and styles.

use std::collections::BTreeMap;

use super::style::StyleMap;

/// A single element on the page surface.
///
/// Styles come in two layers: `base` holds what the page's stylesheets
/// resolve to, `inline` holds direct style-attribute overrides. The
/// computed value of a property is the inline value when present, else the
/// base value, the same precedence a browser applies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    base: BTreeMap<String, String>,
    inline: StyleMap,
}

impl Element {
    /// Creates an empty element.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Builders (page construction and tests) ─────────────────────────

    /// Adds an attribute, returning `self` for chaining.
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Adds a class, returning `self` for chaining.
    pub fn with_class(mut self, name: &str) -> Self {
        self.add_class(name);
        self
    }

    /// Adds a stylesheet-provided style, returning `self` for chaining.
    pub fn with_base_style(mut self, property: &str, value: &str) -> Self {
        self.base.insert(property.to_string(), value.to_string());
        self
    }

    /// Seals the inline style map, returning `self` for chaining.
    ///
    /// Models pages that freeze their style objects.
    pub fn with_sealed_style(mut self) -> Self {
        self.inline.seal();
        self
    }

    // ── Attributes ─────────────────────────────────────────────────────

    /// Returns an attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Whether the element carries an attribute.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Sets (or overwrites) an attribute.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes
            .insert(name.to_string(), value.to_string());
    }

    /// Removes an attribute if present.
    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    // ── Classes ────────────────────────────────────────────────────────

    /// Whether the element carries a class.
    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    /// Adds a class; duplicates are ignored.
    pub fn add_class(&mut self, name: &str) {
        if !self.has_class(name) {
            self.classes.push(name.to_string());
        }
    }

    /// Removes a class if present.
    pub fn remove_class(&mut self, name: &str) {
        self.classes.retain(|c| c != name);
    }

    /// The element's classes, in insertion order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    // ── Styles ─────────────────────────────────────────────────────────

    /// The inline style map.
    pub fn inline(&self) -> &StyleMap {
        &self.inline
    }

    /// Mutable access to the inline style map.
    pub fn inline_mut(&mut self) -> &mut StyleMap {
        &mut self.inline
    }

    /// The stylesheet-provided value for a property.
    pub fn base_style(&self, property: &str) -> Option<&str> {
        self.base.get(property).map(String::as_str)
    }

    /// The computed value: inline wins over stylesheet-provided base.
    pub fn computed(&self, property: &str) -> Option<&str> {
        self.inline
            .get(property)
            .or_else(|| self.base.get(property).map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::props;

    #[test]
    fn computed_prefers_inline_over_base() {
        let mut element = Element::new().with_base_style(props::BACKGROUND, "rgb(250, 250, 250)");
        assert_eq!(element.computed(props::BACKGROUND), Some("rgb(250, 250, 250)"));

        element.inline_mut().set(props::BACKGROUND, "#1a1a1a").unwrap();
        assert_eq!(element.computed(props::BACKGROUND), Some("#1a1a1a"));

        element.inline_mut().set(props::BACKGROUND, "").unwrap();
        assert_eq!(element.computed(props::BACKGROUND), Some("rgb(250, 250, 250)"));
    }

    #[test]
    fn classes_deduplicate() {
        let mut element = Element::new();
        element.add_class("dark");
        element.add_class("dark");
        assert_eq!(element.classes().len(), 1);
        assert!(element.has_class("dark"));

        element.remove_class("dark");
        assert!(!element.has_class("dark"));
    }

    #[test]
    fn attributes_overwrite() {
        let mut element = Element::new().with_attribute("data-theme", "light");
        element.set_attribute("data-theme", "dark");
        assert_eq!(element.attribute("data-theme"), Some("dark"));

        element.remove_attribute("data-theme");
        assert!(!element.has_attribute("data-theme"));
    }
}
