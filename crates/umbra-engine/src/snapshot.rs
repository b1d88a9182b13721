//! Pre-modification style capture for exact restoration.

use std::collections::BTreeMap;

use crate::page::{props, Element, ElementId, Page};

/// The captured colors of one element.
///
/// Values are kept as the raw computed strings so restoration writes back
/// exactly what was read; an absent computed value is stored as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedColors {
    /// Computed background color at capture time.
    pub background: String,
    /// Computed text color at capture time.
    pub text: String,
}

/// Original page colors, captured once at session start.
///
/// The capture reads computed (not inline) styles, so the original
/// appearance is known even when the page colors come from stylesheet
/// rules. The snapshot is read-only after creation and lives only as long
/// as the session; nothing survives a navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSnapshot {
    entries: BTreeMap<ElementId, CapturedColors>,
}

impl StyleSnapshot {
    /// Captures the body's and every control's computed colors.
    pub fn capture(page: &Page) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(ElementId::Body, captured(page.body()));
        for (index, control) in page.controls().iter().enumerate() {
            entries.insert(ElementId::Control(index), captured(control.element()));
        }
        tracing::debug!(elements = entries.len(), "captured original page state");
        Self { entries }
    }

    /// The captured colors for an element.
    pub fn get(&self, id: ElementId) -> Option<&CapturedColors> {
        self.entries.get(&id)
    }

    /// Writes the captured body colors back as inline styles.
    pub fn restore(&self, page: &mut Page) {
        if let Some(colors) = self.get(ElementId::Body) {
            let inline = page.body_mut().inline_mut();
            // A sealed body style refuses the write; there is nothing to
            // restore on such a page anyway.
            let _ = inline.set(props::BACKGROUND, &colors.background);
            let _ = inline.set(props::TEXT, &colors.text);
        }
    }

    /// Number of captured elements.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the snapshot holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn captured(element: &Element) -> CapturedColors {
    CapturedColors {
        background: element
            .computed(props::BACKGROUND)
            .unwrap_or_default()
            .to_string(),
        text: element.computed(props::TEXT).unwrap_or_default().to_string(),
    }
}
