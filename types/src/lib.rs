//! Core domain types for Festoon.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the page animator.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod easing;
mod ids;
mod style;

pub use easing::Easing;
pub use ids::ElementId;
pub use style::{InlineStyle, Percent, Transition};
