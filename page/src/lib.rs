//! The live page structure Festoon animates.
//!
//! A [`Page`] is an arena of elements addressed by [`ElementId`]: tag name,
//! optional id, class list, attributes, text content, and the inline style
//! the animator writes. A small selector engine covers the CSS subset the
//! animator's markup contract uses: tag names, `#id`, `.class`,
//! `[attr]`/`[attr="v"]`/`[attr^="v"]`, and the descendant combinator.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod element;
mod page;
mod selector;

pub use element::{Element, ElementSpec};
pub use page::Page;
pub use selector::{Selector, SelectorError};

pub use festoon_types::ElementId;
