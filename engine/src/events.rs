//! The single-threaded event queue connecting host callbacks to the
//! animator.
//!
//! Everything the host environment would deliver asynchronously - visibility
//! probes, anchor activations, pointer hover - lands here as a typed
//! message, alongside the animator's own counter ticks. The controller
//! drains the queue in FIFO order once per observation cycle, which is what
//! makes the whole engine deterministic.

use festoon_types::ElementId;

/// A host-environment occurrence the animator reacts to.
///
/// This is a closed enum - the host's injection methods and the controller's
/// own timer wheel are the only producers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    /// A visibility probe for an observed element crossed the watcher's
    /// area threshold (or reported below it).
    ElementIntersected { id: ElementId, intersecting: bool },
    /// An intercepted in-page anchor was activated.
    AnchorClicked { id: ElementId },
    /// A counter task came due.
    CounterTick { id: ElementId },
    /// The pointer entered or left a hover-bound element.
    HoverChanged { id: ElementId, hovered: bool },
}

/// FIFO queue of pending events.
///
/// Unlike a notification channel there is no deduplication: two identical
/// intersection reports are two real callbacks and both get delivered.
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: Vec<PageEvent>,
}

impl EventQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: PageEvent) {
        self.pending.push(event);
    }

    /// Take all pending events, clearing the queue.
    ///
    /// Returns the events in the order they were pushed.
    pub fn take(&mut self) -> Vec<PageEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Discard everything queued, e.g. on shutdown.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
