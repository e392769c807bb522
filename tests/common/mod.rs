//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use festoon_engine::{AnimatorConfig, ElementSpec, Page, PageAnimator};
use festoon_types::ElementId;

/// The standard fixture: a small certification page carrying one of every
/// marker, animated with a fixed seed. The animator is built but not
/// started, so tests can inspect the untouched page first.
pub struct Fixture {
    pub animator: PageAnimator,
    pub hero: ElementId,
    pub stats_bar: ElementId,
    /// Counters with goals 250, 15, and a malformed "soon".
    pub counters: Vec<ElementId>,
    pub cards: Vec<ElementId>,
    /// `href="#stats"`, resolves to the stats bar.
    pub anchor: ElementId,
    /// `href="#nowhere"`, a fragment with no matching element.
    pub dead_anchor: ElementId,
    /// `href="##bad"`, not a parsable selector.
    pub broken_anchor: ElementId,
    /// An absolute link the scroller must leave alone.
    pub external_link: ElementId,
}

pub fn fixture() -> Fixture {
    let mut config = AnimatorConfig::default();
    config.decorations.seed = Some(42);
    fixture_with(config)
}

pub fn fixture_with(config: AnimatorConfig) -> Fixture {
    let mut page = Page::new();
    let root = page.root();

    let nav = page.append(root, ElementSpec::new("nav"));
    let anchor = page.append(
        nav,
        ElementSpec::new("a").attr("href", "#stats").text("Stats"),
    );
    let dead_anchor = page.append(
        nav,
        ElementSpec::new("a").attr("href", "#nowhere").text("Nowhere"),
    );
    let broken_anchor = page.append(
        nav,
        ElementSpec::new("a").attr("href", "##bad").text("Broken"),
    );
    let external_link = page.append(
        nav,
        ElementSpec::new("a")
            .attr("href", "https://example.com")
            .text("External"),
    );

    let hero = page.append(
        root,
        ElementSpec::new("header")
            .class("hero")
            .class("animate-on-scroll"),
    );

    let section = page.append(root, ElementSpec::new("section").class("cert-section"));
    page.append(section, ElementSpec::new("div").class("floating-elements"));

    let stats_bar = page.append(
        section,
        ElementSpec::new("div").class("stats-bar").id("stats"),
    );
    let counters = ["250", "15", "soon"]
        .into_iter()
        .map(|target| {
            page.append(
                stats_bar,
                ElementSpec::new("span")
                    .class("stat-number")
                    .attr("data-target", target)
                    .text("0"),
            )
        })
        .collect();

    let grid = page.append(section, ElementSpec::new("div").class("cert-grid"));
    let cards = (0..3)
        .map(|_| page.append(grid, ElementSpec::new("div").class("cert-card")))
        .collect();

    Fixture {
        animator: PageAnimator::new(page, config),
        hero,
        stats_bar,
        counters,
        cards,
        anchor,
        dead_anchor,
        broken_anchor,
        external_link,
    }
}

/// Reveals the stats bar, which starts every counter on the page.
pub fn reveal_stats_bar(fixture: &mut Fixture) {
    let stats_bar = fixture.stats_bar;
    fixture.animator.report_visibility([(stats_bar, 1.0)]);
    fixture.animator.process_events();
}

pub fn text_of(animator: &PageAnimator, id: ElementId) -> String {
    animator
        .page()
        .element(id)
        .map(|element| element.text().to_string())
        .unwrap_or_default()
}

pub fn css_of(animator: &PageAnimator, id: ElementId) -> String {
    animator
        .page()
        .element(id)
        .map(|element| element.style().to_css())
        .unwrap_or_default()
}

pub fn counter_texts(fixture: &Fixture) -> Vec<String> {
    fixture
        .counters
        .iter()
        .map(|&id| text_of(&fixture.animator, id))
        .collect()
}
