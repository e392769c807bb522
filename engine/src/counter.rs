//! Numeric counter animation.
//!
//! Each animated counter is a cancellable task in a table keyed by element
//! id: it steps an internal value toward the element's goal on a fixed tick
//! period and repaints the element text with the floor of the running value.
//! The table holds at most one task per element, so re-animating a counter
//! can never produce overlapping timers - it either restarts the task or
//! leaves it alone, depending on policy.

use std::collections::BTreeMap;
use std::time::Duration;

use festoon_page::Page;
use festoon_types::ElementId;
use serde::Deserialize;

use crate::markers;

/// What animating an element does when that element already has a task in
/// flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RestartPolicy {
    /// Cancel the running task and count up from zero again.
    #[default]
    Restart,
    /// Leave the running task untouched.
    Ignore,
}

/// Reads a counter goal the way `parseInt` would: leading whitespace and an
/// optional sign are accepted, then leading decimal digits. Anything else
/// degrades to 0, as does a negative value - goals are non-negative.
#[must_use]
pub fn parse_target(raw: Option<&str>) -> u64 {
    let Some(raw) = raw else { return 0 };
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        tracing::debug!(raw, "counter target is not numeric, defaulting to 0");
        return 0;
    }
    if negative {
        tracing::debug!(raw, "counter target is negative, defaulting to 0");
        return 0;
    }
    digits[..end].parse().unwrap_or_else(|_| {
        tracing::debug!(raw, "counter target out of range, defaulting to 0");
        0
    })
}

#[derive(Debug, Clone, PartialEq)]
struct CounterTask {
    target: f64,
    current: f64,
    increment: f64,
    next_due: Duration,
}

impl CounterTask {
    fn new(target: u64, now: Duration, period: Duration) -> Self {
        let target = target as f64;
        Self {
            target,
            current: 0.0,
            // The floor of 1 per tick guarantees termination within
            // `target` ticks; larger goals converge in about 100.
            increment: (target / 100.0).max(1.0),
            next_due: now.saturating_add(period),
        }
    }
}

/// The counter task table, ordered by element id so tick scheduling is
/// deterministic.
#[derive(Debug)]
pub struct CounterTasks {
    tasks: BTreeMap<ElementId, CounterTask>,
    period: Duration,
    policy: RestartPolicy,
}

impl CounterTasks {
    /// `period` must be non-zero; the config layer enforces that.
    #[must_use]
    pub fn new(period: Duration, policy: RestartPolicy) -> Self {
        Self {
            tasks: BTreeMap::new(),
            period,
            policy,
        }
    }

    /// Starts counter animation for every counter element on the page,
    /// subject to the restart policy.
    pub fn animate_all(&mut self, page: &mut Page, now: Duration) {
        for id in page.with_class(markers::COUNTER_CLASS) {
            self.animate(page, id, now);
        }
    }

    /// Starts (or restarts, per policy) counter animation for one element.
    /// A zero goal repaints "0" immediately and schedules nothing; unknown
    /// elements are ignored.
    pub fn animate(&mut self, page: &mut Page, id: ElementId, now: Duration) {
        if self.policy == RestartPolicy::Ignore && self.tasks.contains_key(&id) {
            return;
        }
        let Some(element) = page.element_mut(id) else {
            return;
        };
        let target = parse_target(element.attribute(markers::COUNTER_TARGET_ATTR));
        if target == 0 {
            element.set_text("0");
            self.tasks.remove(&id);
            return;
        }
        self.tasks.insert(id, CounterTask::new(target, now, self.period));
    }

    /// Applies one due tick for `id`: step, clamp at the goal, repaint the
    /// floor. Returns true while the task remains scheduled. A tick for an
    /// element with no live task is a no-op - it raced a cancellation.
    pub fn apply_tick(&mut self, page: &mut Page, id: ElementId) -> bool {
        let Some(task) = self.tasks.get_mut(&id) else {
            return false;
        };
        task.current += task.increment;
        let finished = task.current >= task.target;
        if finished {
            task.current = task.target;
        } else {
            task.next_due = task.next_due.saturating_add(self.period);
        }
        let shown = task.current.floor() as u64;
        if let Some(element) = page.element_mut(id) {
            element.set_text(shown.to_string());
        }
        if finished {
            self.tasks.remove(&id);
        }
        !finished
    }

    /// The next `(due, id)` pair across all tasks; ties on the due time
    /// break toward the smaller element id.
    #[must_use]
    pub fn earliest_due(&self) -> Option<(Duration, ElementId)> {
        self.tasks
            .iter()
            .map(|(&id, task)| (task.next_due, id))
            .min()
    }

    /// Cancels every outstanding task. Returns how many were live.
    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.tasks.len();
        self.tasks.clear();
        cancelled
    }

    #[must_use]
    pub fn contains(&self, id: ElementId) -> bool {
        self.tasks.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
