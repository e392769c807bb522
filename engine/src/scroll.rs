//! Smooth anchor scrolling.
//!
//! At start the scroller snapshots every in-page anchor (`a` whose `href`
//! begins with `#`); anchors added later are not covered. A click on a
//! bound anchor is always swallowed. If the href resolves to an element the
//! scroller records a request the host drains and performs; a valid href
//! with no match warns, an href that is not a valid selector errors. Either
//! way the page stays put.

use std::collections::HashMap;

use festoon_page::{ElementId, Page};

use crate::markers;

/// A scroll the host should perform: always smooth, aligning the target's
/// top edge with the viewport start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    /// The anchor whose activation produced this request.
    pub anchor: ElementId,
    /// The element to bring into view.
    pub target: ElementId,
}

/// Anchor interception state: the href snapshot taken at install time and
/// the scrolls recorded since the host last drained them.
#[derive(Debug, Default)]
pub struct AnchorScroller {
    bindings: HashMap<ElementId, String>,
    requests: Vec<ScrollRequest>,
}

impl AnchorScroller {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds every in-page anchor currently on the page, replacing any
    /// previous snapshot.
    pub fn install(&mut self, page: &Page) {
        self.bindings.clear();
        let anchors = match page.query(markers::ANCHOR_SELECTOR) {
            Ok(anchors) => anchors,
            Err(err) => {
                tracing::error!(error = %err, "anchor selector failed to parse");
                return;
            }
        };
        for id in anchors {
            let Some(href) = page
                .element(id)
                .and_then(|element| element.attribute(markers::ANCHOR_HREF_ATTR))
            else {
                continue;
            };
            self.bindings.insert(id, href.to_string());
        }
    }

    #[must_use]
    pub fn is_bound(&self, id: ElementId) -> bool {
        self.bindings.contains_key(&id)
    }

    #[must_use]
    pub fn bound_count(&self) -> usize {
        self.bindings.len()
    }

    /// Handles a click on `id`. Returns true when the click was swallowed
    /// (the element is bound); false means default navigation stands.
    pub fn click(&mut self, page: &Page, id: ElementId) -> bool {
        let Some(href) = self.bindings.get(&id) else {
            return false;
        };
        match page.query_first(href) {
            Ok(Some(target)) => {
                self.requests.push(ScrollRequest { anchor: id, target });
            }
            Ok(None) => {
                tracing::warn!(href = %href, "anchor target not found");
            }
            Err(err) => {
                tracing::error!(href = %href, error = %err, "anchor href is not a valid selector");
            }
        }
        true
    }

    /// Drains the recorded scrolls in click order.
    pub fn take_requests(&mut self) -> Vec<ScrollRequest> {
        std::mem::take(&mut self.requests)
    }

    #[must_use]
    pub fn pending_requests(&self) -> usize {
        self.requests.len()
    }
}
