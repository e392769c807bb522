//! Hover z-index raising for certification cards, so the card under the
//! pointer paints above its staggered neighbors.

use std::collections::HashSet;

use festoon_page::{ElementId, Page};

use crate::markers;

/// Hover bindings and the two z layers cards flip between.
#[derive(Debug, Default)]
pub struct HoverLayer {
    bound: HashSet<ElementId>,
    raised_z: i32,
    rest_z: i32,
}

impl HoverLayer {
    #[must_use]
    pub fn new(raised_z: i32, rest_z: i32) -> Self {
        Self {
            bound: HashSet::new(),
            raised_z,
            rest_z,
        }
    }

    /// Binds every certification card currently on the page, replacing any
    /// previous bindings.
    pub fn install(&mut self, page: &Page) {
        self.bound = page.with_class(markers::CERT_CARD_CLASS).into_iter().collect();
    }

    #[must_use]
    pub fn is_bound(&self, id: ElementId) -> bool {
        self.bound.contains(&id)
    }

    #[must_use]
    pub fn bound_count(&self) -> usize {
        self.bound.len()
    }

    /// Applies a hover flip. Unbound elements are ignored.
    pub fn apply(&self, page: &mut Page, id: ElementId, hovered: bool) {
        if !self.bound.contains(&id) {
            tracing::debug!(%id, "hover change for an unbound element");
            return;
        }
        if let Some(element) = page.element_mut(id) {
            element.style_mut().z_index = Some(if hovered { self.raised_z } else { self.rest_z });
        }
    }
}
