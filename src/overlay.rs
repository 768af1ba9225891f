//! Host-owned attachment point for plugin overlay elements.
//!
//! Elements are positioned in viewport coordinates. The container measures
//! text with fixed [`TextMetrics`] so headless hosts and tests get
//! deterministic element widths.

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(u64);

impl ElementId {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Box metrics used to measure element content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextMetrics {
    pub char_width_px: f64,
    pub line_height_px: f64,
    pub padding_px: f64,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            char_width_px: 7.0,
            line_height_px: 16.0,
            padding_px: 5.0,
        }
    }
}

impl TextMetrics {
    /// Content plus padding on both sides.
    #[must_use]
    pub fn client_width(self, text: &str) -> f64 {
        let longest = text.lines().map(|line| line.chars().count()).max().unwrap_or(0);
        longest as f64 * self.char_width_px + 2.0 * self.padding_px
    }

    #[must_use]
    pub fn client_height(self, text: &str) -> f64 {
        let lines = text.lines().count().max(1);
        lines as f64 * self.line_height_px + 2.0 * self.padding_px
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayElement {
    pub class_name: String,
    pub text: String,
    pub left: f64,
    pub top: f64,
    pub visible: bool,
}

impl OverlayElement {
    fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            text: String::new(),
            left: 0.0,
            top: 0.0,
            visible: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct OverlayContainer {
    metrics: TextMetrics,
    next_id: u64,
    elements: Vec<(ElementId, OverlayElement)>,
}

impl OverlayContainer {
    #[must_use]
    pub fn new(metrics: TextMetrics) -> Self {
        Self {
            metrics,
            next_id: 0,
            elements: Vec::new(),
        }
    }

    #[must_use]
    pub fn metrics(&self) -> TextMetrics {
        self.metrics
    }

    /// Appends a hidden, empty element.
    pub fn create_element(&mut self, class_name: impl Into<String>) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        let element = OverlayElement::new(class_name);
        debug!(element = id.0, class = %element.class_name, "overlay element created");
        self.elements.push((id, element));
        id
    }

    pub fn remove_element(&mut self, id: ElementId) -> Option<OverlayElement> {
        let position = self.elements.iter().position(|(entry, _)| *entry == id)?;
        debug!(element = id.0, "overlay element removed");
        Some(self.elements.remove(position).1)
    }

    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&OverlayElement> {
        self.elements
            .iter()
            .find(|(entry, _)| *entry == id)
            .map(|(_, element)| element)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut OverlayElement> {
        self.elements
            .iter_mut()
            .find(|(entry, _)| *entry == id)
            .map(|(_, element)| element)
    }

    /// Measured inner width of the element's current text.
    #[must_use]
    pub fn client_width(&self, id: ElementId) -> Option<f64> {
        self.element(id)
            .map(|element| self.metrics.client_width(&element.text))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn elements(&self) -> impl Iterator<Item = (ElementId, &OverlayElement)> {
        self.elements.iter().map(|(id, element)| (*id, element))
    }
}
