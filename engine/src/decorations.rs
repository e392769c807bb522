//! Floating decoration generation for the certification section.
//!
//! The container is the sole owner of its children: every population clears
//! it first and appends one decoration per configured glyph, so the page
//! always holds exactly one generation no matter how often this runs.

use std::time::Duration;

use festoon_page::{ElementSpec, Page};
use festoon_types::Percent;
use rand::{Rng, RngExt};

use crate::config::DecorationSettings;
use crate::markers;

/// Clears and repopulates the decoration container. Positions and the
/// animation delay are drawn uniformly from the configured ranges, in a
/// fixed per-element order so a seeded source reproduces placements
/// exactly. A page without a container is a no-op.
pub fn populate(page: &mut Page, settings: &DecorationSettings, rng: &mut impl Rng) {
    let container = match page.query_first(markers::DECORATION_CONTAINER_SELECTOR) {
        Ok(Some(id)) => id,
        Ok(None) => {
            tracing::debug!("no decoration container on this page");
            return;
        }
        Err(err) => {
            tracing::error!(error = %err, "decoration container selector failed to parse");
            return;
        }
    };

    page.clear_children(container);
    for glyph in &settings.glyphs {
        let id = page.append(
            container,
            ElementSpec::new("div")
                .class(markers::FLOATING_ELEMENT_CLASS)
                .text(glyph.clone()),
        );
        if let Some(element) = page.element_mut(id) {
            let style = element.style_mut();
            style.top = Some(Percent::new(
                rng.random_range(settings.position_min..settings.position_max),
            ));
            style.left = Some(Percent::new(
                rng.random_range(settings.position_min..settings.position_max),
            ));
            style.animation_delay = Some(Duration::from_secs_f32(
                rng.random_range(0.0..settings.max_delay.as_secs_f32()),
            ));
        }
    }
}
