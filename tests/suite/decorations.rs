//! Floating decoration generation.

use std::time::Duration;

use festoon_engine::{AnimatorConfig, ElementSpec, Page, PageAnimator};

use crate::common::{self, css_of};

#[test]
fn container_holds_one_glyph_per_configuration_entry() {
    let mut fixture = common::fixture();
    fixture.animator.start();

    let page = fixture.animator.page();
    let container = page
        .query_first(".cert-section .floating-elements")
        .unwrap()
        .unwrap();
    let children = page.children(container);
    assert_eq!(children.len(), 4);

    let texts: Vec<&str> = children
        .iter()
        .filter_map(|&id| page.element(id))
        .map(|element| element.text())
        .collect();
    assert_eq!(texts, ["\u{1f3c6}", "\u{1f4dc}", "\u{26a1}", "\u{1f3af}"]);
}

#[test]
fn placements_stay_inside_the_configured_ranges() {
    let mut fixture = common::fixture();
    fixture.animator.start();

    let page = fixture.animator.page();
    for id in page.with_class("floating-element") {
        let style = page.element(id).unwrap().style();
        let top = style.top.unwrap().value();
        let left = style.left.unwrap().value();
        assert!((10.0..90.0).contains(&top), "top {top} out of range");
        assert!((10.0..90.0).contains(&left), "left {left} out of range");
        assert!(style.animation_delay.unwrap() < Duration::from_secs(4));
    }
}

#[test]
fn equal_seeds_place_decorations_identically() {
    let mut first = common::fixture();
    let mut second = common::fixture();
    first.animator.start();
    second.animator.start();

    let first_styles: Vec<String> = first
        .animator
        .page()
        .with_class("floating-element")
        .into_iter()
        .map(|id| css_of(&first.animator, id))
        .collect();
    let second_styles: Vec<String> = second
        .animator
        .page()
        .with_class("floating-element")
        .into_iter()
        .map(|id| css_of(&second.animator, id))
        .collect();
    assert_eq!(first_styles, second_styles);
}

#[test]
fn page_without_container_gets_no_decorations() {
    let mut page = Page::new();
    let root = page.root();
    page.append(root, ElementSpec::new("div").class("stats-bar"));
    let before = page.len();

    let mut animator = PageAnimator::new(page, AnimatorConfig::default());
    animator.start();

    assert!(animator.page().with_class("floating-element").is_empty());
    assert_eq!(animator.page().len(), before);
}

#[test]
fn custom_glyph_sets_replace_the_defaults() {
    let mut config = AnimatorConfig::default();
    config.decorations.seed = Some(42);
    config.decorations.glyphs = vec!["*".to_string(), "+".to_string()];
    let mut fixture = common::fixture_with(config);
    fixture.animator.start();

    let page = fixture.animator.page();
    let decorations = page.with_class("floating-element");
    assert_eq!(decorations.len(), 2);
    let texts: Vec<&str> = decorations
        .iter()
        .filter_map(|&id| page.element(id))
        .map(|element| element.text())
        .collect();
    assert_eq!(texts, ["*", "+"]);
}
