//! Core engine for Festoon - the page animation controller and its
//! subsystems.
//!
//! This crate contains the animator state machine without any rendering
//! dependencies. The host builds a [`Page`], hands it to a
//! [`PageAnimator`], and drives the animator with visibility reports,
//! clicks, hover changes, and clock advances.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

// Re-export from crates for public API
pub use festoon_page::{Element, ElementSpec, Page, Selector, SelectorError};
pub use festoon_types::{Easing, ElementId, InlineStyle, Percent, Transition};

mod animator;
pub mod config;
pub mod counter;
pub mod decorations;
pub mod events;
pub mod hover;
pub mod markers;
pub mod observer;
pub mod scroll;
pub mod snapshot;

pub use animator::PageAnimator;
pub use config::{AnimatorConfig, ConfigError, FestoonConfig};
pub use counter::RestartPolicy;
pub use events::{EventQueue, PageEvent};
pub use observer::RevealState;
pub use scroll::ScrollRequest;
pub use snapshot::{ElementSnapshot, PageSnapshot};
