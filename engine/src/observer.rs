//! Scroll-triggered reveal.
//!
//! The watcher keeps a registry of observed elements, each in a one-way
//! state machine: `Pending` (hidden, shifted down, transition armed) until
//! the first intersection report at or above the area threshold, then
//! `Revealed` forever. Scrolling an element back out never re-hides it.

use std::collections::BTreeMap;

use festoon_page::{ElementId, Page};

use crate::config::RevealSettings;
use crate::events::{EventQueue, PageEvent};
use crate::markers;

/// Where an observed element is in its reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// Hidden and waiting for its first qualifying intersection.
    Pending,
    /// Shown. Terminal.
    Revealed,
}

/// Registry of observed elements plus the intersection threshold.
#[derive(Debug)]
pub struct IntersectionWatcher {
    entries: BTreeMap<ElementId, RevealState>,
    threshold: f32,
}

impl IntersectionWatcher {
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            entries: BTreeMap::new(),
            threshold,
        }
    }

    /// Registers `id`. An element already observed keeps its state, so
    /// re-registration can never un-reveal anything.
    pub fn observe(&mut self, id: ElementId) {
        self.entries.entry(id).or_insert(RevealState::Pending);
    }

    #[must_use]
    pub fn state(&self, id: ElementId) -> Option<RevealState> {
        self.entries.get(&id).copied()
    }

    #[must_use]
    pub fn is_observed(&self, id: ElementId) -> bool {
        self.entries.contains_key(&id)
    }

    #[must_use]
    pub fn observed_count(&self) -> usize {
        self.entries.len()
    }

    /// Converts a batch of visibility ratios into intersection events.
    /// Reports for elements nobody observes are dropped.
    pub fn report<I>(&self, batch: I, queue: &mut EventQueue)
    where
        I: IntoIterator<Item = (ElementId, f32)>,
    {
        for (id, ratio) in batch {
            if !self.entries.contains_key(&id) {
                tracing::debug!(%id, "visibility report for an unobserved element");
                continue;
            }
            queue.push(PageEvent::ElementIntersected {
                id,
                intersecting: ratio >= self.threshold,
            });
        }
    }

    /// Applies one intersection event. Returns true exactly when this
    /// event moved the element from pending to revealed; negative reports
    /// and repeats return false.
    pub fn apply(&mut self, page: &mut Page, id: ElementId, intersecting: bool) -> bool {
        if !intersecting {
            return false;
        }
        let Some(state) = self.entries.get_mut(&id) else {
            return false;
        };
        if *state == RevealState::Revealed {
            return false;
        }
        *state = RevealState::Revealed;

        if let Some(element) = page.element_mut(id) {
            let style = element.style_mut();
            style.opacity = Some(1.0);
            style.translate_y = Some(0.0);
        }
        true
    }
}

/// Writes the hidden "pending" style an element reveals from.
pub fn apply_pending_style(page: &mut Page, id: ElementId, settings: &RevealSettings) {
    if let Some(element) = page.element_mut(id) {
        let style = element.style_mut();
        style.opacity = Some(0.0);
        style.translate_y = Some(settings.hidden_offset);
        style.transition = Some(settings.transition);
    }
}

/// Whether revealing `id` should kick off page-wide counter animation:
/// true for the stats bar itself and for anything containing a counter.
#[must_use]
pub fn triggers_counters(page: &Page, id: ElementId) -> bool {
    let Some(element) = page.element(id) else {
        return false;
    };
    if element.has_class(markers::STATS_BAR_CLASS) {
        return true;
    }
    page.descendants(id).into_iter().any(|child| {
        page.element(child)
            .is_some_and(|e| e.has_class(markers::COUNTER_CLASS))
    })
}
