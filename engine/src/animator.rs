//! The page animation controller.
//!
//! `PageAnimator` owns the page and every animation subsystem. External
//! stimuli (visibility reports, anchor clicks, hover changes) become typed
//! events on a single queue, and counter timers live in a cancellable task
//! table driven by a logical clock. Draining the queue and advancing the
//! clock both happen on the caller's thread, in order, so every run with
//! the same inputs and seed produces the same page.

use std::time::Duration;

use festoon_page::Page;
use festoon_types::ElementId;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::AnimatorConfig;
use crate::counter::CounterTasks;
use crate::decorations;
use crate::events::{EventQueue, PageEvent};
use crate::hover::HoverLayer;
use crate::markers;
use crate::observer::{self, IntersectionWatcher};
use crate::scroll::{AnchorScroller, ScrollRequest};
use crate::snapshot::PageSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ControllerState {
    /// Constructed but not started; the page is untouched.
    Idle,
    Running,
    /// Shut down. Terminal: a stopped animator never runs again.
    Stopped,
}

#[derive(Debug)]
pub struct PageAnimator {
    page: Page,
    config: AnimatorConfig,
    queue: EventQueue,
    watcher: IntersectionWatcher,
    counters: CounterTasks,
    scroller: AnchorScroller,
    hover: HoverLayer,
    rng: StdRng,
    clock: Duration,
    state: ControllerState,
}

impl PageAnimator {
    /// Builds a controller over `page`. Nothing changes until [`start`].
    ///
    /// Placement randomness is seeded from the config when a seed is set,
    /// otherwise from the OS.
    ///
    /// [`start`]: PageAnimator::start
    #[must_use]
    pub fn new(page: Page, config: AnimatorConfig) -> Self {
        let seed = config.decorations.seed.unwrap_or_else(rand::random);
        let watcher = IntersectionWatcher::new(config.reveal.threshold);
        let counters = CounterTasks::new(config.counters.tick, config.counters.restart_policy);
        let hover = HoverLayer::new(config.hover.raised_z, config.hover.rest_z);
        Self {
            page,
            config,
            queue: EventQueue::new(),
            watcher,
            counters,
            scroller: AnchorScroller::new(),
            hover,
            rng: StdRng::seed_from_u64(seed),
            clock: Duration::ZERO,
            state: ControllerState::Idle,
        }
    }

    /// Installs every subsystem on the page: decorations are generated,
    /// anchors and hover targets are bound, and reveal targets get their
    /// hidden pending style. Starting twice warns and does nothing.
    pub fn start(&mut self) {
        match self.state {
            ControllerState::Idle => {}
            ControllerState::Running => {
                tracing::warn!("animator is already running");
                return;
            }
            ControllerState::Stopped => {
                tracing::warn!("animator was shut down and cannot restart");
                return;
            }
        }
        self.state = ControllerState::Running;

        decorations::populate(&mut self.page, &self.config.decorations, &mut self.rng);
        self.scroller.install(&self.page);
        self.register_reveal_targets();
        self.hover.install(&self.page);

        tracing::debug!(
            anchors = self.scroller.bound_count(),
            reveal_targets = self.watcher.observed_count(),
            hover_targets = self.hover.bound_count(),
            "animator started"
        );
    }

    /// Hides reveal targets and registers them with the watcher: every
    /// opt-in element, every card, and the stats bar. Cards also get their
    /// cascade delay, one stagger step per card in document order.
    fn register_reveal_targets(&mut self) {
        for id in self.page.with_class(markers::ANIMATE_ON_SCROLL_CLASS) {
            observer::apply_pending_style(&mut self.page, id, &self.config.reveal);
            self.watcher.observe(id);
        }

        let cards = self.page.with_class(markers::CERT_CARD_CLASS);
        for (index, id) in cards.into_iter().enumerate() {
            if !self.has_class(id, markers::ANIMATE_ON_SCROLL_CLASS) {
                observer::apply_pending_style(&mut self.page, id, &self.config.reveal);
            }
            let delay = self.config.reveal.stagger_step.saturating_mul(index as u32);
            if let Some(element) = self.page.element_mut(id) {
                element.style_mut().transition_delay = Some(delay);
            }
            self.watcher.observe(id);
        }

        if let Some(id) = self.page.with_class(markers::STATS_BAR_CLASS).first().copied() {
            if !self.has_class(id, markers::ANIMATE_ON_SCROLL_CLASS) {
                observer::apply_pending_style(&mut self.page, id, &self.config.reveal);
            }
            self.watcher.observe(id);
        }
    }

    fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.page.element(id).is_some_and(|e| e.has_class(class))
    }

    /// Moves the logical clock forward by `delta`, firing every counter
    /// tick that falls due on the way. Each tick's events are handled
    /// before the next tick fires, so a cancellation always wins over a
    /// later tick.
    pub fn advance(&mut self, delta: Duration) {
        if self.state != ControllerState::Running {
            tracing::warn!("advance called while the animator is not running");
            return;
        }
        let target = self.clock.saturating_add(delta);
        while let Some((due, id)) = self.counters.earliest_due() {
            if due > target {
                break;
            }
            self.clock = due.max(self.clock);
            self.queue.push(PageEvent::CounterTick { id });
            self.drain();
        }
        self.clock = target;
        self.drain();
    }

    /// Handles everything currently queued without moving the clock.
    pub fn process_events(&mut self) {
        if self.state != ControllerState::Running {
            tracing::warn!("process_events called while the animator is not running");
            return;
        }
        self.drain();
    }

    /// Reports a batch of `(element, visible ratio)` observations. Ratios
    /// at or above the configured threshold count as intersecting. The
    /// resulting events queue until the next [`process_events`] or
    /// [`advance`].
    ///
    /// [`process_events`]: PageAnimator::process_events
    /// [`advance`]: PageAnimator::advance
    pub fn report_visibility<I>(&mut self, batch: I)
    where
        I: IntoIterator<Item = (ElementId, f32)>,
    {
        if self.state != ControllerState::Running {
            tracing::warn!("visibility report while the animator is not running");
            return;
        }
        self.watcher.report(batch, &mut self.queue);
    }

    /// Simulates a click on `anchor`. Returns true when the click is
    /// intercepted, meaning the element is a bound in-page anchor and its
    /// scroll resolution has been queued. False means the click should
    /// fall through to whatever the host does with it.
    pub fn click_anchor(&mut self, anchor: ElementId) -> bool {
        if self.state != ControllerState::Running {
            return false;
        }
        if !self.scroller.is_bound(anchor) {
            return false;
        }
        self.queue.push(PageEvent::AnchorClicked { id: anchor });
        true
    }

    /// Records a hover transition for a card.
    pub fn set_hovered(&mut self, id: ElementId, hovered: bool) {
        if self.state != ControllerState::Running {
            tracing::warn!("hover change while the animator is not running");
            return;
        }
        self.queue.push(PageEvent::HoverChanged { id, hovered });
    }

    /// Cancels outstanding counter tasks and drops queued events. A shut
    /// down animator stays down; calling this again is a no-op.
    pub fn shutdown(&mut self) {
        if self.state == ControllerState::Stopped {
            return;
        }
        let cancelled = self.counters.cancel_all();
        let dropped = self.queue.len();
        self.queue.clear();
        self.state = ControllerState::Stopped;
        tracing::debug!(cancelled, dropped, "animator shut down");
    }

    /// Dispatches queued events in arrival order until the queue is empty,
    /// including events enqueued by the handlers themselves.
    fn drain(&mut self) {
        loop {
            let batch = self.queue.take();
            if batch.is_empty() {
                break;
            }
            for event in batch {
                self.dispatch(event);
            }
        }
    }

    fn dispatch(&mut self, event: PageEvent) {
        match event {
            PageEvent::ElementIntersected { id, intersecting } => {
                let revealed = self.watcher.apply(&mut self.page, id, intersecting);
                if revealed && observer::triggers_counters(&self.page, id) {
                    self.counters.animate_all(&mut self.page, self.clock);
                }
            }
            PageEvent::AnchorClicked { id } => {
                self.scroller.click(&self.page, id);
            }
            PageEvent::CounterTick { id } => {
                self.counters.apply_tick(&mut self.page, id);
            }
            PageEvent::HoverChanged { id, hovered } => {
                self.hover.apply(&mut self.page, id, hovered);
            }
        }
    }

    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }

    #[must_use]
    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == ControllerState::Running
    }

    /// The logical clock, total time advanced since start.
    #[must_use]
    pub fn clock(&self) -> Duration {
        self.clock
    }

    #[must_use]
    pub fn active_counter_tasks(&self) -> usize {
        self.counters.len()
    }

    #[must_use]
    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    /// Drains the scroll requests accumulated since the last call.
    pub fn take_scroll_requests(&mut self) -> Vec<ScrollRequest> {
        self.scroller.take_requests()
    }

    #[must_use]
    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot::capture(&self.page)
    }
}
