//! Inline style channels written by the page animator.
//!
//! A page element carries one [`InlineStyle`] layered over whatever the
//! stylesheet declares. The animator only ever touches the channels modeled
//! here; unset channels stay untouched.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::easing::Easing;

fn normalized_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }

    let elapsed = elapsed.as_secs_f32();
    let total = duration.as_secs_f32();
    (elapsed / total).clamp(0.0, 1.0)
}

/// Percentage offset within a containing box, e.g. `top: 42.5%`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percent(f32);

impl Percent {
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// A transition over the opacity and transform channels, the only pair the
/// animator ever transitions together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: Duration,
    pub easing: Easing,
}

impl Transition {
    #[must_use]
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// Eased progress through the transition `elapsed` after the triggering
    /// style change, offset by a start `delay`. Saturates at 1.0.
    #[must_use]
    pub fn progress_at(&self, elapsed: Duration, delay: Duration) -> f32 {
        let active = elapsed.saturating_sub(delay);
        self.easing.apply(normalized_progress(active, self.duration))
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.duration.as_secs_f32();
        write!(
            f,
            "opacity {secs}s {easing}, transform {secs}s {easing}",
            easing = self.easing
        )
    }
}

/// The inline style channels the animator writes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle {
    pub opacity: Option<f32>,
    /// Vertical translation in pixels; `Some(0.0)` renders as `translateY(0)`.
    pub translate_y: Option<f32>,
    pub transition: Option<Transition>,
    pub transition_delay: Option<Duration>,
    pub animation_delay: Option<Duration>,
    pub top: Option<Percent>,
    pub left: Option<Percent>,
    pub z_index: Option<i32>,
}

impl InlineStyle {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Renders the set channels as an inline CSS declaration list, in a
    /// stable channel order.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut decls = Vec::new();
        if let Some(opacity) = self.opacity {
            decls.push(format!("opacity: {opacity}"));
        }
        if let Some(y) = self.translate_y {
            if y == 0.0 {
                decls.push("transform: translateY(0)".to_string());
            } else {
                decls.push(format!("transform: translateY({y}px)"));
            }
        }
        if let Some(transition) = self.transition {
            decls.push(format!("transition: {transition}"));
        }
        if let Some(delay) = self.transition_delay {
            decls.push(format!("transition-delay: {}s", delay.as_secs_f32()));
        }
        if let Some(delay) = self.animation_delay {
            decls.push(format!("animation-delay: {}s", delay.as_secs_f32()));
        }
        if let Some(top) = self.top {
            decls.push(format!("top: {top}"));
        }
        if let Some(left) = self.left {
            decls.push(format!("left: {left}"));
        }
        if let Some(z) = self.z_index {
            decls.push(format!("z-index: {z}"));
        }
        decls.join("; ")
    }
}
