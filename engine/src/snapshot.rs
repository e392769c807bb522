//! Serializable captures of the page for inspection and debugging.

use festoon_page::Page;
use serde::Serialize;

/// One element's visible state at capture time.
#[derive(Debug, Clone, Serialize)]
pub struct ElementSnapshot {
    pub id: u64,
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dom_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// Rendered inline style, empty when no property is set.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub style: String,
}

/// Whole-page capture in document order.
#[derive(Debug, Clone, Serialize)]
pub struct PageSnapshot {
    pub elements: Vec<ElementSnapshot>,
}

impl PageSnapshot {
    #[must_use]
    pub fn capture(page: &Page) -> Self {
        let elements = page
            .document_order()
            .into_iter()
            .filter_map(|id| page.element(id))
            .map(|element| ElementSnapshot {
                id: element.id().value(),
                tag: element.tag().to_string(),
                dom_id: element.dom_id().map(str::to_string),
                classes: element.classes().to_vec(),
                text: element.text().to_string(),
                style: element.style().to_css(),
            })
            .collect();
        Self { elements }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
