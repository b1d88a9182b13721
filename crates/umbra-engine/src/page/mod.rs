//! The document surface the engine mutates.
//!
//! A [`Page`] is an in-memory model of the parts of a document the theming
//! engine touches: the root element (attributes, classes, custom
//! properties), the body (background and text colors), and a bounded list
//! of interactive controls. A host embedding keeps this model in sync with
//! a live document; tests construct it directly with the builders.
//!
//! The model is decoupled from any DOM binding on purpose: the engine's
//! decisions are pure functions of this surface.

mod element;
mod style;

pub use element::Element;
pub use style::{props, StyleError, StyleMap};

/// Interactive element categories the fallback path restyles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Anchor (`a`).
    Link,
    /// `button`.
    Button,
    /// `input`.
    Input,
    /// `select`.
    Select,
    /// `textarea`.
    TextArea,
}

impl ControlKind {
    /// The element's tag name.
    pub fn tag(self) -> &'static str {
        match self {
            ControlKind::Link => "a",
            ControlKind::Button => "button",
            ControlKind::Input => "input",
            ControlKind::Select => "select",
            ControlKind::TextArea => "textarea",
        }
    }
}

/// One interactive element, tagged with its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    kind: ControlKind,
    element: Element,
}

impl Control {
    /// Creates a control of the given kind.
    pub fn new(kind: ControlKind, element: Element) -> Self {
        Self { kind, element }
    }

    /// The control's kind.
    pub fn kind(&self) -> ControlKind {
        self.kind
    }

    /// The underlying element.
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Mutable access to the underlying element.
    pub fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }
}

/// Identifies an element captured in a style snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ElementId {
    /// The document body.
    Body,
    /// An interactive control, by position.
    Control(usize),
}

/// The page surface: root, body, and interactive controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    root: Element,
    body: Element,
    controls: Vec<Control>,
}

impl Page {
    /// Creates an empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the root element, returning `self` for chaining.
    pub fn with_root(mut self, root: Element) -> Self {
        self.root = root;
        self
    }

    /// Replaces the body element, returning `self` for chaining.
    pub fn with_body(mut self, body: Element) -> Self {
        self.body = body;
        self
    }

    /// Appends an interactive control, returning `self` for chaining.
    pub fn with_control(mut self, kind: ControlKind, element: Element) -> Self {
        self.controls.push(Control::new(kind, element));
        self
    }

    /// The root element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Mutable access to the root element.
    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// The body element.
    pub fn body(&self) -> &Element {
        &self.body
    }

    /// Mutable access to the body element.
    pub fn body_mut(&mut self) -> &mut Element {
        &mut self.body
    }

    /// The page's interactive controls.
    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// Mutable access to the interactive controls.
    pub fn controls_mut(&mut self) -> &mut [Control] {
        &mut self.controls
    }
}
